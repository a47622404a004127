// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error type for JSON-RPC provider construction.

/// Errors that can occur when creating providers
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// The RPC endpoint is not a valid URL.
    #[error("Invalid RPC URL {url}")]
    InvalidUrl {
        /// The rejected input
        url: String,
        /// The parse failure
        #[source]
        source: url::ParseError,
    },
}

impl ProviderError {
    pub fn invalid_url(url: impl Into<String>, source: url::ParseError) -> Self {
        Self::InvalidUrl {
            url: url.into(),
            source,
        }
    }
}
