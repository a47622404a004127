// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! # txscan
//!
//! Address transaction history over a day-based lookback for EVM chains.
//!
//! A lookback of N days is turned into a block range using the chain tip and
//! an assumed-constant block production rate, the range is split into
//! fixed-size windows that respect the history API's per-call limits, and the
//! windows are fetched and concatenated in ascending block order.
//!
//! ## Components
//!
//! - [`BlockOracle`] / [`RpcBlockOracle`]: current tip (and full blocks) from a JSON-RPC node
//! - [`BlockRangeResolver`]: days to starting block
//! - [`TransactionSource`] / [`EtherscanClient`]: one block window of history
//! - [`TransactionAggregator`]: the end-to-end retrieval
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use txscan::{
//!     create_http_provider, ApiKey, EtherscanClient, EtherscanConfig, ProviderConfig,
//!     RpcBlockOracle, TransactionAggregator, TxScanConfig,
//! };
//!
//! let provider = create_http_provider(ProviderConfig::new(rpc_url))?;
//! let source = EtherscanClient::new(EtherscanConfig::new(ApiKey::new(api_key)))?;
//! let aggregator = TransactionAggregator::new(
//!     RpcBlockOracle::new(provider),
//!     source,
//!     TxScanConfig::default(),
//! );
//!
//! let transactions = aggregator.get_transactions(address, 30).await?;
//! println!("{} transactions in the last 30 days", transactions.len());
//! ```
//!
//! ## Failure policy
//!
//! Nothing is retried. The first failing window aborts the retrieval:
//! [`TransactionAggregator::get_transactions`] discards earlier windows, while
//! [`TransactionAggregator::collect_transactions`] returns them next to the
//! error.

mod aggregator;
mod blocks;
pub mod bootstrap;
mod config;
mod errors;
pub mod hex;
mod history;
pub mod provider;
mod spans;
pub mod transport;
mod types;

// Aggregation
pub use aggregator::{AggregationOutcome, TransactionAggregator};

// Blocks
pub use blocks::{
    start_for_tip, BlockOracle, BlockRange, BlockRangeResolver, BlockTransaction, FullBlock,
    RpcBlockOracle, TailPolicy, WindowPlan,
};

// Configuration
pub use config::{ChainConfig, TxScanConfig, TxScanConfigBuilder, DEFAULT_CALL_TIMEOUT};

// Errors
pub use errors::{
    AggregationError, FetchError, MalformedHexError, OracleError, ProviderError, TxScanError,
};

// History
pub use history::{
    parse_txlist, ApiKey, EtherscanClient, EtherscanConfig, RawTransaction, TransactionSource,
    DEFAULT_ETHERSCAN_URL, DEFAULT_REQUESTS_PER_SECOND, MAX_RECORDS_PER_CALL,
};

// Provider
pub use provider::{create_http_provider, HttpProvider, ProviderConfig};

// Types
pub use types::config::{BlocksPerDay, Concurrency, WindowSize};
pub use types::transaction::{Transaction, TransactionList};
