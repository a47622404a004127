// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Transaction-history retrieval for one block window at a time.
//!
//! The [`TransactionSource`] trait is the seam between the aggregator and the
//! history API. [`EtherscanClient`] is the production implementation; tests
//! and alternative explorers implement the trait directly.
//!
//! # Example: Implementing TransactionSource
//!
//! ```rust,ignore
//! use async_trait::async_trait;
//! use txscan::{BlockRange, FetchError, Transaction, TransactionSource};
//!
//! struct MyIndexer { /* ... */ }
//!
//! #[async_trait]
//! impl TransactionSource for MyIndexer {
//!     async fn fetch(&self, address: &str, range: BlockRange) -> Result<Vec<Transaction>, FetchError> {
//!         // Query [range.start(), range.end()] in ascending block order
//!         todo!()
//!     }
//! }
//! ```

mod config;
mod etherscan;
mod wire;

pub use config::{
    ApiKey, EtherscanConfig, DEFAULT_ETHERSCAN_URL, DEFAULT_REQUESTS_PER_SECOND,
    MAX_RECORDS_PER_CALL,
};
pub use etherscan::EtherscanClient;
pub use wire::{parse_txlist, RawTransaction};

use async_trait::async_trait;
use std::sync::Arc;

use crate::blocks::BlockRange;
use crate::errors::FetchError;
use crate::types::transaction::Transaction;

/// Source of transactions for one address over one block window.
///
/// Implementations must:
/// - query `[range.start(), range.end()]` and return records in ascending
///   block order
/// - return `Ok(vec![])` when the window has no transactions
/// - make one attempt per call and return the first error
#[async_trait]
pub trait TransactionSource: Send + Sync {
    async fn fetch(&self, address: &str, range: BlockRange)
        -> Result<Vec<Transaction>, FetchError>;
}

#[async_trait]
impl<T: TransactionSource + ?Sized> TransactionSource for Arc<T> {
    async fn fetch(
        &self,
        address: &str,
        range: BlockRange,
    ) -> Result<Vec<Transaction>, FetchError> {
        (**self).fetch(address, range).await
    }
}
