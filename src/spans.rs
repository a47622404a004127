// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Span creation helpers for txscan operations.
//!
//! Telemetry is kept out of business logic: each instrumented operation has a
//! helper here, and the operation attaches it with `Instrument`.
//!
//! ```rust,ignore
//! pub async fn my_operation(&self, param: Type) -> Result<T> {
//!     async { /* business logic */ }
//!         .instrument(spans::my_operation(param))
//!         .await
//! }
//! ```

use alloy_primitives::BlockNumber;
use tracing::{Level, Span};

use crate::blocks::BlockRange;

/// Span for a full lookback retrieval.
///
/// Parent: None (root span for this operation)
/// Children: resolve_start, fetch_window spans
#[inline]
pub(crate) fn get_transactions(address: &str, days: u64) -> Span {
    tracing::span!(
        Level::INFO,
        "txscan.get_transactions",
        address = %address,
        days = days,
        start_block = tracing::field::Empty,
        tip = tracing::field::Empty,
        windows = tracing::field::Empty,
    )
}

/// Span for resolving the first block of a lookback.
///
/// Parent: get_transactions span
/// Children: latest_block_number span
#[inline]
pub(crate) fn resolve_start(days: u64, blocks_per_day: u64) -> Span {
    tracing::debug_span!(
        "txscan.resolve_start",
        days = days,
        blocks_per_day = blocks_per_day,
    )
}

/// Span for reading the chain tip.
#[inline]
pub(crate) fn latest_block_number() -> Span {
    tracing::debug_span!("txscan.latest_block_number")
}

/// Span for reading one full block.
#[inline]
pub(crate) fn full_block(block_number: BlockNumber) -> Span {
    tracing::debug_span!("txscan.full_block", block_number = block_number)
}

/// Span for fetching one block window from the history source.
///
/// Parent: get_transactions span
#[inline]
pub(crate) fn fetch_window(address: &str, range: BlockRange) -> Span {
    tracing::debug_span!(
        "txscan.fetch_window",
        address = %address,
        start_block = range.start(),
        end_block = range.end(),
    )
}

/// Span for a single JSON-RPC call.
#[inline]
pub(crate) fn rpc_call(method: &str) -> Span {
    tracing::trace_span!("txscan.rpc_call", method = %method)
}
