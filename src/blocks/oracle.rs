// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Block-number source.
//!
//! The [`BlockOracle`] trait is the seam between block range resolution and
//! the JSON-RPC node. [`RpcBlockOracle`] implements it on top of any Alloy
//! provider by issuing raw requests and decoding the hex quantities itself.
//!
//! # Examples
//!
//! ```rust,ignore
//! use txscan::{BlockOracle, RpcBlockOracle};
//! use alloy_provider::ProviderBuilder;
//!
//! let provider = ProviderBuilder::new().connect_http(rpc_url.parse()?);
//! let oracle = RpcBlockOracle::new(provider);
//!
//! let tip = oracle.latest_block_number().await?;
//! println!("Current tip: {tip}");
//! ```

use alloy_primitives::{Address, BlockNumber, Bytes, TxHash, B256, U256};
use alloy_provider::Provider;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, Instrument};

use crate::errors::{MalformedHexError, OracleError};
use crate::hex;
use crate::spans;

const ETH_BLOCK_NUMBER: &str = "eth_blockNumber";
const ETH_GET_BLOCK_BY_NUMBER: &str = "eth_getBlockByNumber";

/// Source of block numbers and block records.
///
/// Implementations make exactly one request per call and never retry; the
/// caller owns any retry policy.
#[async_trait]
pub trait BlockOracle: Send + Sync {
    /// Returns the chain's current tip block number.
    async fn latest_block_number(&self) -> Result<BlockNumber, OracleError>;

    /// Returns the block at `number` with full transaction objects, or `None`
    /// when the source does not know it.
    ///
    /// Not used by the aggregation path. Callers that need exact day
    /// boundaries can use it to read real block timestamps.
    async fn full_block(&self, number: BlockNumber) -> Result<Option<FullBlock>, OracleError>;
}

/// A block as returned by `eth_getBlockByNumber(number, true)`.
///
/// Quantities are kept in their hex wire form and decoded on access.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FullBlock {
    pub number: String,
    pub hash: B256,
    pub parent_hash: B256,
    pub miner: Address,
    pub timestamp: String,
    pub gas_limit: String,
    pub gas_used: String,
    #[serde(default)]
    pub transactions: Vec<BlockTransaction>,
}

impl FullBlock {
    pub fn number(&self) -> Result<BlockNumber, MalformedHexError> {
        hex::decode(&self.number)
    }

    /// Block timestamp as UTC.
    pub fn timestamp(&self) -> Result<DateTime<Utc>, MalformedHexError> {
        let secs = hex::decode(&self.timestamp)?;
        i64::try_from(secs)
            .ok()
            .and_then(|secs| DateTime::from_timestamp(secs, 0))
            .ok_or_else(|| MalformedHexError::overflow(&self.timestamp))
    }

    pub fn gas_used(&self) -> Result<u64, MalformedHexError> {
        hex::decode(&self.gas_used)
    }

    pub fn gas_limit(&self) -> Result<u64, MalformedHexError> {
        hex::decode(&self.gas_limit)
    }
}

/// A transaction embedded in a [`FullBlock`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockTransaction {
    pub hash: TxHash,
    pub nonce: String,
    pub from: Address,
    pub to: Option<Address>,
    pub value: U256,
    pub gas: String,
    #[serde(default)]
    pub gas_price: Option<String>,
    pub transaction_index: String,
    pub input: Bytes,
}

impl BlockTransaction {
    pub fn nonce(&self) -> Result<u64, MalformedHexError> {
        hex::decode(&self.nonce)
    }

    pub fn gas(&self) -> Result<u64, MalformedHexError> {
        hex::decode(&self.gas)
    }

    pub fn transaction_index(&self) -> Result<u64, MalformedHexError> {
        hex::decode(&self.transaction_index)
    }
}

/// [`BlockOracle`] backed by an Alloy JSON-RPC provider.
#[derive(Debug, Clone)]
pub struct RpcBlockOracle<P> {
    provider: P,
}

impl<P: Provider> RpcBlockOracle<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }
}

#[async_trait]
impl<P: Provider> BlockOracle for RpcBlockOracle<P> {
    async fn latest_block_number(&self) -> Result<BlockNumber, OracleError> {
        async {
            let quantity: String = self
                .provider
                .raw_request(ETH_BLOCK_NUMBER.into(), ())
                .await
                .map_err(|e| OracleError::unavailable(ETH_BLOCK_NUMBER, e))?;

            let tip = hex::decode(&quantity)?;
            debug!(tip, "Fetched latest block number");
            Ok::<_, OracleError>(tip)
        }
        .instrument(spans::latest_block_number())
        .await
    }

    async fn full_block(&self, number: BlockNumber) -> Result<Option<FullBlock>, OracleError> {
        async {
            let block: Option<FullBlock> = self
                .provider
                .raw_request(ETH_GET_BLOCK_BY_NUMBER.into(), (hex::encode(number), true))
                .await
                .map_err(|e| {
                    OracleError::unavailable(format!("{ETH_GET_BLOCK_BY_NUMBER} {number}"), e)
                })?;

            debug!(
                found = block.is_some(),
                transactions = block.as_ref().map(|b| b.transactions.len()),
                "Fetched full block"
            );
            Ok::<_, OracleError>(block)
        }
        .instrument(spans::full_block(number))
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLOCK_JSON: &str = r#"{
        "number": "0x2d00",
        "hash": "0x5a1d3a0bb4bde8a4b0a1a9d1d0c3b8b1d6f43c0c1d0a0b8e8fbd5cd1c2d0f1a2",
        "parentHash": "0x0000000000000000000000000000000000000000000000000000000000000000",
        "miner": "0xdac17f958d2ee523a2206206994597c13d831ec7",
        "timestamp": "0x6553f100",
        "gasLimit": "0x1c9c380",
        "gasUsed": "0x5208",
        "transactions": [{
            "hash": "0x88df016429689c079f3b2f6ad39fa052532c56795b733da78a91ebe6a713944b",
            "nonce": "0x15",
            "from": "0x7600977eb9effa627d6bd0da2e5be35e11566341",
            "to": null,
            "value": "0xde0b6b3a7640000",
            "gas": "0x5208",
            "gasPrice": "0x4a817c800",
            "transactionIndex": "0x0",
            "input": "0x"
        }]
    }"#;

    #[test]
    fn test_full_block_deserializes_and_decodes() {
        let block: FullBlock = serde_json::from_str(BLOCK_JSON).unwrap();
        assert_eq!(block.number().unwrap(), 11_520);
        assert_eq!(block.gas_used().unwrap(), 21_000);
        assert_eq!(block.gas_limit().unwrap(), 30_000_000);
        assert_eq!(block.timestamp().unwrap().timestamp(), 0x6553_f100);

        let tx = &block.transactions[0];
        assert_eq!(tx.nonce().unwrap(), 21);
        assert_eq!(tx.gas().unwrap(), 21_000);
        assert_eq!(tx.transaction_index().unwrap(), 0);
        assert_eq!(tx.value, U256::from(1_000_000_000_000_000_000u64));
        assert!(tx.to.is_none());
    }

    #[test]
    fn test_full_block_bad_quantity() {
        let mut block: FullBlock = serde_json::from_str(BLOCK_JSON).unwrap();
        block.timestamp = "6553f100".to_string();
        assert!(matches!(
            block.timestamp(),
            Err(MalformedHexError::MissingPrefix { .. })
        ));
    }
}
