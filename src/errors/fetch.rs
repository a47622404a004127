// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for the transaction-history source.

use std::time::Duration;

/// Errors that can occur while fetching one block window of transactions.
///
/// An empty window is never an error; sources report it as `Ok(vec![])`.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The HTTP request could not be sent or the body could not be read.
    #[error("Transaction-history request failed")]
    Transport {
        /// The underlying HTTP client error
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The source answered with a non-success HTTP status.
    #[error("Transaction-history source returned HTTP {status}")]
    HttpStatus {
        /// The HTTP status code
        status: u16,
    },

    /// The body was not the expected JSON shape, or a record had a field that
    /// could not be parsed.
    #[error("Invalid transaction-history payload: {details}")]
    InvalidPayload {
        /// What could not be parsed
        details: String,
        /// The underlying parse error, if any
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The source reported an error in its response envelope (bad API key,
    /// rate limit, malformed query).
    #[error("Transaction-history source rejected the request: {message} ({result})")]
    SourceRejected {
        /// The envelope message (e.g. "NOTOK")
        message: String,
        /// The envelope result, which carries the reason for errors
        result: String,
    },

    /// The call did not complete within the configured timeout.
    #[error("Transaction-history request timed out after {after:?}")]
    Timeout {
        /// The timeout that elapsed
        after: Duration,
    },
}

impl FetchError {
    /// Create a `Transport` error from any error type.
    pub fn transport(source: impl std::error::Error + Send + Sync + 'static) -> Self {
        FetchError::Transport {
            source: Box::new(source),
        }
    }

    /// Create an `InvalidPayload` error without an underlying cause.
    pub fn invalid_payload(details: impl Into<String>) -> Self {
        FetchError::InvalidPayload {
            details: details.into(),
            source: None,
        }
    }

    /// Create an `InvalidPayload` error with an underlying parse error.
    pub fn invalid_payload_with(
        details: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        FetchError::InvalidPayload {
            details: details.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a `SourceRejected` error.
    pub fn source_rejected(message: impl Into<String>, result: impl Into<String>) -> Self {
        FetchError::SourceRejected {
            message: message.into(),
            result: result.into(),
        }
    }
}
