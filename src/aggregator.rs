// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Windowed transaction retrieval over a day-based lookback.
//!
//! [`TransactionAggregator`] ties the pieces together:
//!
//! 1. resolve the first block of the lookback from the current tip
//! 2. read the tip again to bound the range
//! 3. split `[start, tip]` into fixed-size windows
//! 4. fetch each window from the history source and concatenate in window order
//!
//! A failing window aborts the whole retrieval. [`get_transactions`] discards
//! everything fetched so far; [`collect_transactions`] hands back the
//! transactions from the windows before the failure alongside the error.
//!
//! [`get_transactions`]: TransactionAggregator::get_transactions
//! [`collect_transactions`]: TransactionAggregator::collect_transactions
//!
//! # Example
//!
//! ```rust,ignore
//! use txscan::{
//!     create_http_provider, ApiKey, EtherscanClient, EtherscanConfig, ProviderConfig,
//!     RpcBlockOracle, TransactionAggregator, TxScanConfig,
//! };
//!
//! let provider = create_http_provider(ProviderConfig::new(rpc_url))?;
//! let source = EtherscanClient::new(EtherscanConfig::new(ApiKey::new(key)))?;
//! let aggregator =
//!     TransactionAggregator::new(RpcBlockOracle::new(provider), source, TxScanConfig::default());
//!
//! let transactions = aggregator.get_transactions(address, 30).await?;
//! ```

use std::future::Future;
use std::pin::pin;
use std::time::Duration;

use futures::{stream, StreamExt};
use tracing::{debug, info, warn, Instrument, Span};

use crate::blocks::{BlockOracle, BlockRange, BlockRangeResolver, WindowPlan};
use crate::config::TxScanConfig;
use crate::errors::{AggregationError, FetchError, OracleError};
use crate::history::TransactionSource;
use crate::spans;
use crate::types::transaction::{Transaction, TransactionList};

/// Everything a retrieval produced, including a failure if one stopped it.
///
/// `transactions` holds the windows that completed, in window order, before
/// the first failing window. On success `failure` is `None` and the list is
/// the full result.
#[derive(Debug)]
pub struct AggregationOutcome {
    pub transactions: TransactionList,
    pub failure: Option<AggregationError>,
}

impl AggregationOutcome {
    fn complete(transactions: TransactionList) -> Self {
        Self {
            transactions,
            failure: None,
        }
    }

    fn failed(transactions: TransactionList, failure: AggregationError) -> Self {
        Self {
            transactions,
            failure: Some(failure),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.failure.is_none()
    }

    /// Abort-and-discard view: the full list, or the failure with nothing else.
    pub fn into_result(self) -> Result<TransactionList, AggregationError> {
        match self.failure {
            None => Ok(self.transactions),
            Some(failure) => Err(failure),
        }
    }
}

/// Retrieves an address's transactions over the last N days.
///
/// Stateless between calls: every call re-reads the tip and recomputes the
/// windows, so repeated calls against a chain that has not moved return the
/// same list.
#[derive(Debug, Clone)]
pub struct TransactionAggregator<O, S> {
    resolver: BlockRangeResolver<O>,
    source: S,
    config: TxScanConfig,
}

impl<O: BlockOracle, S: TransactionSource> TransactionAggregator<O, S> {
    pub fn new(oracle: O, source: S, config: TxScanConfig) -> Self {
        Self {
            resolver: BlockRangeResolver::new(oracle, config.blocks_per_day),
            source,
            config,
        }
    }

    /// Aggregator with [`TxScanConfig::default`].
    pub fn with_defaults(oracle: O, source: S) -> Self {
        Self::new(oracle, source, TxScanConfig::default())
    }

    pub fn config(&self) -> &TxScanConfig {
        &self.config
    }

    pub fn resolver(&self) -> &BlockRangeResolver<O> {
        &self.resolver
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Returns every transaction of `address` in the lookback window, ordered
    /// by window and then by the source's order within each window.
    ///
    /// Returns an empty list when the tip is not past the resolved start.
    ///
    /// # Errors
    ///
    /// - [`AggregationError::ResolutionFailed`] if the start could not be resolved
    /// - [`AggregationError::TipUnavailable`] if the tip could not be read
    /// - [`AggregationError::PartialFetch`] for the first failing window; the
    ///   transactions of earlier windows are discarded
    pub async fn get_transactions(
        &self,
        address: &str,
        days: u64,
    ) -> Result<TransactionList, AggregationError> {
        self.collect_transactions(address, days).await.into_result()
    }

    /// Like [`get_transactions`](Self::get_transactions), but keeps the
    /// transactions of the windows that completed before a failure.
    ///
    /// Windows after the failing one are never requested (or are cancelled if
    /// already in flight).
    pub async fn collect_transactions(&self, address: &str, days: u64) -> AggregationOutcome {
        async {
            let plan = match self.plan(days).await {
                Ok(plan) => plan,
                Err(failure) => {
                    warn!(error = %failure, "Could not determine lookback range");
                    return AggregationOutcome::failed(TransactionList::new(), failure);
                }
            };

            let outcome = self.fetch_plan(address, &plan).await;
            match &outcome.failure {
                None => info!(
                    transactions = outcome.transactions.len(),
                    windows = plan.len(),
                    "Aggregation finished"
                ),
                Some(failure) => warn!(
                    error = %failure,
                    kept = outcome.transactions.len(),
                    "Aggregation stopped at failing window"
                ),
            }
            outcome
        }
        .instrument(spans::get_transactions(address, days))
        .await
    }

    /// Resolves `[start, tip]` and splits it into windows.
    async fn plan(&self, days: u64) -> Result<WindowPlan, AggregationError> {
        let start = self
            .with_timeout(self.resolver.resolve_start(days), |after| {
                OracleError::timeout("resolve_start", after)
            })
            .await
            .map_err(AggregationError::ResolutionFailed)?;

        let tip = self
            .with_timeout(self.resolver.oracle().latest_block_number(), |after| {
                OracleError::timeout("eth_blockNumber", after)
            })
            .await
            .map_err(AggregationError::TipUnavailable)?;

        let plan = WindowPlan::new(
            start,
            tip,
            self.config.window_size,
            self.config.tail_policy,
        );

        let span = Span::current();
        span.record("start_block", start);
        span.record("tip", tip);
        span.record("windows", plan.len());
        debug!(
            start,
            tip,
            windows = plan.len(),
            window_size = self.config.window_size.as_u64(),
            "Computed window plan"
        );

        Ok(plan)
    }

    /// Fetches the windows of `plan`, at most `max_concurrent_windows` at a
    /// time, appending results in window order.
    async fn fetch_plan(&self, address: &str, plan: &WindowPlan) -> AggregationOutcome {
        let mut transactions = TransactionList::new();

        let mut fetches = pin!(stream::iter(plan.iter().enumerate())
            .map(move |(window_index, range)| async move {
                let result = self.fetch_window(address, range).await;
                (window_index, range, result)
            })
            .buffered(self.config.max_concurrent_windows.get()));

        while let Some((window_index, range, result)) = fetches.next().await {
            match result {
                Ok(batch) => {
                    debug!(window_index, %range, count = batch.len(), "Window fetched");
                    transactions.append_window(batch);
                }
                Err(source) => {
                    warn!(window_index, %range, error = %source, "Window fetch failed");
                    let failure = AggregationError::PartialFetch {
                        window_index,
                        range,
                        source,
                    };
                    return AggregationOutcome::failed(transactions, failure);
                }
            }
        }

        AggregationOutcome::complete(transactions)
    }

    async fn fetch_window(
        &self,
        address: &str,
        range: BlockRange,
    ) -> Result<Vec<Transaction>, FetchError> {
        self.with_timeout(self.source.fetch(address, range), |after| {
            FetchError::Timeout { after }
        })
        .await
    }

    async fn with_timeout<T, E>(
        &self,
        call: impl Future<Output = Result<T, E>>,
        on_elapsed: impl FnOnce(Duration) -> E,
    ) -> Result<T, E> {
        bounded(self.config.call_timeout, call, on_elapsed).await
    }
}

/// Runs `call`, failing with `on_elapsed(after)` once `after` elapses.
async fn bounded<T, E>(
    after: Option<Duration>,
    call: impl Future<Output = Result<T, E>>,
    on_elapsed: impl FnOnce(Duration) -> E,
) -> Result<T, E> {
    match after {
        Some(after) => tokio::time::timeout(after, call)
            .await
            .map_err(|_| on_elapsed(after))?,
        None => call.await,
    }
}
