// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for the block-number source.
//!
//! This module covers failures of [`BlockOracle`](crate::BlockOracle)
//! implementations: an unreachable or misbehaving JSON-RPC endpoint, a
//! payload that is not a hex quantity, or a call that ran past its timeout.

use std::time::Duration;

use super::MalformedHexError;

/// Errors that can occur while querying the block-number source.
///
/// # Examples
///
/// ```rust,ignore
/// use txscan::{BlockOracle, OracleError};
///
/// match oracle.latest_block_number().await {
///     Ok(tip) => println!("tip: {tip}"),
///     Err(OracleError::MalformedHex(e)) => eprintln!("node returned garbage: {e}"),
///     Err(e) => eprintln!("node unavailable: {e}"),
/// }
/// ```
#[derive(Debug, thiserror::Error)]
pub enum OracleError {
    /// The request to the block-number source failed.
    ///
    /// Covers connection errors, JSON-RPC error responses, and payloads that
    /// could not be deserialized at all.
    #[error("Block-number source unavailable during {operation}")]
    Unavailable {
        /// Description of the operation that failed (e.g. "eth_blockNumber")
        operation: String,
        /// The underlying transport error
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The source answered, but the quantity was not valid hex.
    #[error("Malformed quantity from block-number source: {0}")]
    MalformedHex(#[from] MalformedHexError),

    /// The call did not complete within the configured timeout.
    #[error("{operation} timed out after {after:?}")]
    Timeout {
        /// Description of the operation that timed out
        operation: String,
        /// The timeout that elapsed
        after: Duration,
    },
}

impl OracleError {
    /// Create an `Unavailable` error from any error type.
    pub fn unavailable(
        operation: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        OracleError::Unavailable {
            operation: operation.into(),
            source: Box::new(source),
        }
    }

    /// Create a `Timeout` error.
    pub fn timeout(operation: impl Into<String>, after: Duration) -> Self {
        OracleError::Timeout {
            operation: operation.into(),
            after,
        }
    }
}
