// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for the txscan library.
//!
//! Every component has its own error type so callers can react to the exact
//! failure, and [`TxScanError`] wraps all of them when that distinction does
//! not matter.
//!
//! # Architecture
//!
//! - [`MalformedHexError`] - a hex quantity string could not be decoded
//! - [`OracleError`] - the block-number source failed or returned garbage
//! - [`FetchError`] - the transaction-history source failed for one window
//! - [`ProviderError`] - the JSON-RPC provider could not be constructed
//! - [`AggregationError`] - the end-to-end retrieval failed (wraps the above
//!   with the stage that failed)
//!
//! Nothing in this crate retries. Each component returns the first error it
//! sees and the caller decides what to do with it.
//!
//! # Examples
//!
//! ```rust,ignore
//! use txscan::{AggregationError, TransactionAggregator};
//!
//! match aggregator.get_transactions(address, 30).await {
//!     Ok(list) => println!("{} transactions", list.len()),
//!     Err(AggregationError::PartialFetch { window_index, range, .. }) => {
//!         eprintln!("window {window_index} ({range}) failed, retry the whole call");
//!     }
//!     Err(e) => eprintln!("retrieval failed: {e}"),
//! }
//! ```

mod aggregation;
mod fetch;
mod hex;
mod oracle;
mod provider;

pub use aggregation::AggregationError;
pub use fetch::FetchError;
pub use hex::MalformedHexError;
pub use oracle::OracleError;
pub use provider::ProviderError;

/// Unified error type for all txscan operations.
///
/// All module-specific error types convert into `TxScanError` via `From`, so
/// `?` works across module boundaries.
#[derive(Debug, thiserror::Error)]
pub enum TxScanError {
    /// A hex quantity could not be decoded.
    #[error("Hex decoding error: {0}")]
    Hex(#[from] MalformedHexError),

    /// The block-number source failed.
    #[error("Block oracle error: {0}")]
    Oracle(#[from] OracleError),

    /// The transaction-history source failed.
    #[error("Transaction fetch error: {0}")]
    Fetch(#[from] FetchError),

    /// The JSON-RPC provider could not be built.
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    /// The windowed retrieval failed.
    #[error("Aggregation error: {0}")]
    Aggregation(#[from] AggregationError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unified_error_wraps_module_errors() {
        let hex = MalformedHexError::missing_prefix("2a");
        let unified: TxScanError = hex.into();
        assert!(matches!(unified, TxScanError::Hex(_)));
        assert!(unified.to_string().starts_with("Hex decoding error"));

        let fetch = FetchError::source_rejected("NOTOK", "Invalid API Key");
        let unified: TxScanError = fetch.into();
        assert!(unified.to_string().contains("Invalid API Key"));
    }
}
