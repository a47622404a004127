// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Etherscan client configuration

use alloy_chains::NamedChain;
use url::Url;

/// Etherscan V2 multichain endpoint.
pub const DEFAULT_ETHERSCAN_URL: &str = "https://api.etherscan.io/v2/api";

/// Calls per second allowed on the free Etherscan tier.
pub const DEFAULT_REQUESTS_PER_SECOND: u32 = 5;

/// Most records `txlist` returns for one unpaged call. Anything past this is
/// dropped by the API without an error.
pub const MAX_RECORDS_PER_CALL: usize = 10_000;

/// Etherscan API key.
///
/// `Debug` output is redacted so the key never ends up in logs.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// The raw key, for building requests.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ApiKey(<redacted>)")
    }
}

/// Configuration for [`EtherscanClient`](crate::EtherscanClient)
///
/// # Example
///
/// ```rust
/// use txscan::{ApiKey, EtherscanConfig};
/// use alloy_chains::NamedChain;
///
/// let config = EtherscanConfig::new(ApiKey::new("YOUR_KEY"))
///     .with_chain(NamedChain::Mainnet)
///     .with_rate_limit(5);
/// ```
#[derive(Debug, Clone)]
pub struct EtherscanConfig {
    /// API endpoint
    pub base_url: Url,
    /// Access credential sent as `apikey`
    pub api_key: ApiKey,
    /// Chain sent as `chainid`; omitted from the query when `None`
    pub chain: Option<NamedChain>,
    /// Requests per second (None for unlimited)
    pub requests_per_second: Option<u32>,
}

impl EtherscanConfig {
    /// Configuration for Ethereum mainnet on the default endpoint, throttled to
    /// the free-tier rate.
    #[must_use]
    pub fn new(api_key: ApiKey) -> Self {
        Self {
            base_url: default_base_url(),
            api_key,
            chain: Some(NamedChain::Mainnet),
            requests_per_second: Some(DEFAULT_REQUESTS_PER_SECOND),
        }
    }

    /// Use a different endpoint (self-hosted explorer, Etherscan clone, V1 API).
    pub fn with_base_url(mut self, url: &str) -> Result<Self, url::ParseError> {
        self.base_url = Url::parse(url)?;
        Ok(self)
    }

    #[must_use]
    pub fn with_chain(mut self, chain: NamedChain) -> Self {
        self.chain = Some(chain);
        self
    }

    /// Do not send `chainid` (single-chain endpoints).
    #[must_use]
    pub fn without_chain(mut self) -> Self {
        self.chain = None;
        self
    }

    #[must_use]
    pub fn with_rate_limit(mut self, requests_per_second: u32) -> Self {
        self.requests_per_second = Some(requests_per_second);
        self
    }

    #[must_use]
    pub fn without_rate_limit(mut self) -> Self {
        self.requests_per_second = None;
        self
    }
}

fn default_base_url() -> Url {
    match Url::parse(DEFAULT_ETHERSCAN_URL) {
        Ok(url) => url,
        Err(e) => unreachable!("default Etherscan URL is valid: {e}"),
    }
}
