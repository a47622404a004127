// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Tests for RpcBlockOracle against a mocked JSON-RPC transport
//!
//! Responses are queued on an [`Asserter`] and consumed in request order.

mod helpers;

use std::sync::Arc;

use alloy_provider::ProviderBuilder;
use alloy_transport::mock::Asserter;
use helpers::{ScriptedSource, ACCOUNT};
use serde_json::json;
use txscan::{
    BlockOracle, BlockRangeResolver, BlocksPerDay, MalformedHexError, OracleError,
    RpcBlockOracle, TransactionAggregator, TxScanConfigBuilder,
};

fn mocked_oracle() -> (Asserter, RpcBlockOracle<impl alloy_provider::Provider>) {
    let asserter = Asserter::new();
    let provider = ProviderBuilder::new().connect_mocked_client(asserter.clone());
    (asserter, RpcBlockOracle::new(provider))
}

#[tokio::test]
async fn test_latest_block_number_decodes_hex() {
    let (asserter, oracle) = mocked_oracle();
    asserter.push_success(&"0x2d00");

    assert_eq!(oracle.latest_block_number().await.unwrap(), 11_520);
}

#[tokio::test]
async fn test_latest_block_number_malformed_quantity() {
    let (asserter, oracle) = mocked_oracle();
    asserter.push_success(&"2d00");

    let err = oracle.latest_block_number().await.unwrap_err();
    assert!(matches!(
        err,
        OracleError::MalformedHex(MalformedHexError::MissingPrefix { .. })
    ));
}

#[tokio::test]
async fn test_latest_block_number_rpc_error() {
    let (asserter, oracle) = mocked_oracle();
    asserter.push_failure_msg("upstream unavailable");

    let err = oracle.latest_block_number().await.unwrap_err();
    match err {
        OracleError::Unavailable { operation, .. } => assert_eq!(operation, "eth_blockNumber"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_full_block_found() {
    let (asserter, oracle) = mocked_oracle();
    asserter.push_success(&json!({
        "number": "0x2d00",
        "hash": "0x5a1d3a0bb4bde8a4b0a1a9d1d0c3b8b1d6f43c0c1d0a0b8e8fbd5cd1c2d0f1a2",
        "parentHash": "0x0000000000000000000000000000000000000000000000000000000000000000",
        "miner": "0xdac17f958d2ee523a2206206994597c13d831ec7",
        "timestamp": "0x6553f100",
        "gasLimit": "0x1c9c380",
        "gasUsed": "0x0",
        "transactions": []
    }));

    let block = oracle.full_block(11_520).await.unwrap().unwrap();
    assert_eq!(block.number().unwrap(), 11_520);
    assert!(block.transactions.is_empty());
}

#[tokio::test]
async fn test_full_block_unknown() {
    let (asserter, oracle) = mocked_oracle();
    asserter.push_success(&serde_json::Value::Null);

    assert!(oracle.full_block(99_999_999).await.unwrap().is_none());
}

#[tokio::test]
async fn test_resolver_over_rpc_oracle() {
    let (asserter, oracle) = mocked_oracle();
    asserter.push_success(&"0x2d00");
    asserter.push_success(&"0x2d00");

    let resolver = BlockRangeResolver::new(oracle, BlocksPerDay::new(5_760));
    assert_eq!(resolver.resolve_start(1).await.unwrap(), 5_760);
    assert_eq!(resolver.resolve_start(0).await.unwrap(), 11_520);
}

#[tokio::test]
async fn test_aggregation_over_rpc_oracle() {
    let (asserter, oracle) = mocked_oracle();
    // One read for the start, one for the end
    asserter.push_success(&"0x2d00");
    asserter.push_success(&"0x2d00");

    let source = Arc::new(ScriptedSource::new(1));
    let aggregator = TransactionAggregator::new(
        oracle,
        source.clone(),
        TxScanConfigBuilder::new()
            .blocks_per_day(5_760)
            .window_size(1_920)
            .build(),
    );

    let transactions = aggregator.get_transactions(ACCOUNT, 1).await.unwrap();
    assert_eq!(transactions.len(), 3);
    assert_eq!(
        source.requests(),
        vec![(5_760, 7_680), (7_680, 9_600), (9_600, 11_520)]
    );
}
