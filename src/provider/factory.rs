// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Provider factory for the block oracle's JSON-RPC endpoint

use alloy_network::Ethereum;
use alloy_provider::ProviderBuilder;
use alloy_rpc_client::ClientBuilder;

use crate::errors::ProviderError;
use crate::transport::{LoggingLayer, ThrottleLayer};

use super::config::ProviderConfig;
use super::HttpProvider;

/// Create an HTTP provider with the given configuration
///
/// Recommended fillers are disabled: the oracle only reads, so a bare
/// `RootProvider` is all it needs.
///
/// # Examples
///
/// ```rust,ignore
/// use txscan::{create_http_provider, ProviderConfig, RpcBlockOracle};
///
/// let provider = create_http_provider(
///     ProviderConfig::new("https://eth.llamarpc.com").with_rate_limit(10)
/// )?;
/// let oracle = RpcBlockOracle::new(provider);
/// ```
///
/// # Errors
///
/// Returns [`ProviderError::InvalidUrl`] if the URL cannot be parsed.
pub fn create_http_provider(config: ProviderConfig) -> Result<HttpProvider, ProviderError> {
    let url: url::Url = config
        .url
        .parse()
        .map_err(|e| ProviderError::invalid_url(&config.url, e))?;

    match (config.rate_limit_per_second, config.logging_enabled) {
        (Some(rps), true) => {
            let client = ClientBuilder::default()
                .layer(LoggingLayer)
                .layer(ThrottleLayer::per_second(rps))
                .http(url);

            Ok(ProviderBuilder::new()
                .disable_recommended_fillers()
                .network::<Ethereum>()
                .connect_client(client))
        }

        (Some(rps), false) => {
            let client = ClientBuilder::default()
                .layer(ThrottleLayer::per_second(rps))
                .http(url);

            Ok(ProviderBuilder::new()
                .disable_recommended_fillers()
                .network::<Ethereum>()
                .connect_client(client))
        }

        (None, true) => {
            let client = ClientBuilder::default().layer(LoggingLayer).http(url);

            Ok(ProviderBuilder::new()
                .disable_recommended_fillers()
                .network::<Ethereum>()
                .connect_client(client))
        }

        (None, false) => Ok(ProviderBuilder::new()
            .disable_recommended_fillers()
            .network::<Ethereum>()
            .connect_http(url)),
    }
}
