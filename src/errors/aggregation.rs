// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for windowed transaction retrieval.

use crate::blocks::BlockRange;

use super::{FetchError, OracleError};

/// Errors returned by [`TransactionAggregator`](crate::TransactionAggregator).
///
/// Each variant names the stage that failed. The underlying oracle or fetch
/// error is kept as the `source`.
///
/// # Examples
///
/// ```rust,ignore
/// use txscan::AggregationError;
///
/// match aggregator.get_transactions(address, 7).await {
///     Err(AggregationError::PartialFetch { window_index, .. }) => {
///         tracing::warn!(window_index, "window failed, retrying whole lookback");
///     }
///     other => { /* ... */ }
/// }
/// ```
#[derive(Debug, thiserror::Error)]
pub enum AggregationError {
    /// The start of the lookback could not be resolved because the oracle
    /// failed.
    #[error("Failed to resolve starting block")]
    ResolutionFailed(#[source] OracleError),

    /// The range end (current tip) could not be read.
    #[error("Failed to read the current tip block")]
    TipUnavailable(#[source] OracleError),

    /// A windowed fetch failed mid-aggregation.
    ///
    /// Transactions from earlier windows are not part of this error; with
    /// [`get_transactions`](crate::TransactionAggregator::get_transactions)
    /// they are discarded, with
    /// [`collect_transactions`](crate::TransactionAggregator::collect_transactions)
    /// they are returned next to it.
    #[error("Fetch failed for window {window_index} ({range})")]
    PartialFetch {
        /// Zero-based index of the failing window
        window_index: usize,
        /// Block range of the failing window
        range: BlockRange,
        /// The fetch error
        #[source]
        source: FetchError,
    },
}

impl AggregationError {
    /// Index of the failing window, for `PartialFetch` errors.
    pub fn window_index(&self) -> Option<usize> {
        match self {
            AggregationError::PartialFetch { window_index, .. } => Some(*window_index),
            _ => None,
        }
    }
}
