// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Etherscan `account/txlist` client.

use async_trait::async_trait;
use tracing::{debug, warn, Instrument};
use url::Url;

use crate::blocks::BlockRange;
use crate::errors::FetchError;
use crate::history::{parse_txlist, EtherscanConfig, TransactionSource, MAX_RECORDS_PER_CALL};
use crate::spans;
use crate::transport::Throttle;
use crate::types::transaction::Transaction;

/// Ascending block order; the aggregator relies on it for the final ordering.
const SORT_ASCENDING: &str = "asc";

/// [`TransactionSource`] backed by the Etherscan HTTP API.
///
/// Cloning is cheap and clones share the HTTP connection pool and the
/// request throttle.
///
/// # Example
///
/// ```rust,ignore
/// use txscan::{ApiKey, BlockRange, EtherscanClient, EtherscanConfig, TransactionSource};
///
/// let client = EtherscanClient::new(EtherscanConfig::new(ApiKey::new(key)))?;
/// let range = BlockRange::new(19_000_000, 19_001_920).unwrap();
/// let txs = client.fetch("0x7600977Eb9eFFA627D6BD0DA2E5be35E11566341", range).await?;
/// ```
#[derive(Debug, Clone)]
pub struct EtherscanClient {
    http: reqwest::Client,
    config: EtherscanConfig,
    throttle: Option<Throttle>,
}

impl EtherscanClient {
    /// Creates a client with its own throttle sized from the config.
    pub fn new(config: EtherscanConfig) -> Result<Self, FetchError> {
        let throttle = config.requests_per_second.map(Throttle::per_second);
        Self::with_throttle(config, throttle)
    }

    /// Creates a client drawing from an existing throttle, so several clients
    /// can share one API key's budget.
    pub fn with_throttle(
        config: EtherscanConfig,
        throttle: Option<Throttle>,
    ) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("txscan/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(FetchError::transport)?;

        Ok(Self {
            http,
            config,
            throttle,
        })
    }

    pub fn config(&self) -> &EtherscanConfig {
        &self.config
    }

    /// The `txlist` URL for one window, credential included.
    pub fn request_url(&self, address: &str, range: BlockRange) -> Url {
        let mut url = self.config.base_url.clone();
        {
            let mut query = url.query_pairs_mut();
            if let Some(chain) = self.config.chain {
                query.append_pair("chainid", &(chain as u64).to_string());
            }
            query
                .append_pair("module", "account")
                .append_pair("action", "txlist")
                .append_pair("address", address)
                .append_pair("startblock", &range.start().to_string())
                .append_pair("endblock", &range.end().to_string())
                .append_pair("sort", SORT_ASCENDING)
                .append_pair("apikey", self.config.api_key.expose());
        }
        url
    }
}

#[async_trait]
impl TransactionSource for EtherscanClient {
    async fn fetch(
        &self,
        address: &str,
        range: BlockRange,
    ) -> Result<Vec<Transaction>, FetchError> {
        async {
            if let Some(throttle) = &self.throttle {
                throttle.acquire().await;
            }

            let response = self
                .http
                .get(self.request_url(address, range))
                .send()
                .await
                .map_err(FetchError::transport)?;

            let status = response.status();
            if !status.is_success() {
                return Err(FetchError::HttpStatus {
                    status: status.as_u16(),
                });
            }

            let body = response.bytes().await.map_err(FetchError::transport)?;
            let transactions = parse_txlist(&body)?;

            if at_record_cap(transactions.len()) {
                warn!(
                    count = transactions.len(),
                    "Window hit the per-call record cap, later records may be missing"
                );
            }
            debug!(count = transactions.len(), "Fetched window transactions");
            Ok::<_, FetchError>(transactions)
        }
        .instrument(spans::fetch_window(address, range))
        .await
    }
}

/// `txlist` is not paged, so a full response may have been cut short.
fn at_record_cap(count: usize) -> bool {
    count >= MAX_RECORDS_PER_CALL
}
