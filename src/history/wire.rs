// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Etherscan `txlist` response decoding.
//!
//! Every field in an Etherscan transaction record is a string (decimal
//! numbers, hex hashes, `"0"`/`"1"` flags). [`RawTransaction`] mirrors the
//! wire shape and [`Transaction`] is the typed form handed to callers.

use std::str::FromStr;

use alloy_primitives::{Address, Bytes, B256, U256};
use chrono::DateTime;
use serde::Deserialize;
use serde_json::Value;

use crate::errors::FetchError;
use crate::types::transaction::Transaction;

/// Message Etherscan sends with status `"0"` when a window is simply empty.
const NO_TRANSACTIONS_FOUND: &str = "No transactions found";

/// The `{ status, message, result }` envelope around every response.
#[derive(Debug, Deserialize)]
struct Envelope {
    status: String,
    message: String,
    result: Value,
}

/// One `txlist` record as it appears on the wire.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTransaction {
    pub block_number: String,
    pub time_stamp: String,
    pub hash: String,
    pub nonce: String,
    pub block_hash: String,
    pub transaction_index: String,
    pub from: String,
    #[serde(default)]
    pub to: String,
    pub value: String,
    pub gas: String,
    pub gas_price: String,
    #[serde(default)]
    pub is_error: String,
    #[serde(default, rename = "txreceipt_status")]
    pub txreceipt_status: String,
    #[serde(default)]
    pub input: String,
    #[serde(default)]
    pub contract_address: String,
    #[serde(default)]
    pub cumulative_gas_used: String,
    #[serde(default)]
    pub gas_used: String,
    #[serde(default)]
    pub confirmations: String,
}

impl TryFrom<RawTransaction> for Transaction {
    type Error = FetchError;

    fn try_from(raw: RawTransaction) -> Result<Self, Self::Error> {
        let timestamp_secs: i64 = parse("timeStamp", &raw.time_stamp)?;
        let timestamp = DateTime::from_timestamp(timestamp_secs, 0).ok_or_else(|| {
            FetchError::invalid_payload(format!("timeStamp out of range: {}", raw.time_stamp))
        })?;

        Ok(Transaction {
            hash: parse::<B256>("hash", &raw.hash)?,
            block_number: parse("blockNumber", &raw.block_number)?,
            block_hash: parse("blockHash", &raw.block_hash)?,
            transaction_index: parse("transactionIndex", &raw.transaction_index)?,
            nonce: parse("nonce", &raw.nonce)?,
            from: parse("from", &raw.from)?,
            to: parse_optional_address("to", &raw.to)?,
            contract_address: parse_optional_address("contractAddress", &raw.contract_address)?,
            value: parse_wei("value", &raw.value)?,
            gas: parse("gas", &raw.gas)?,
            gas_price: parse_wei("gasPrice", &raw.gas_price)?,
            gas_used: parse_or_zero("gasUsed", &raw.gas_used)?,
            cumulative_gas_used: parse_or_zero("cumulativeGasUsed", &raw.cumulative_gas_used)?,
            input: parse_input(&raw.input)?,
            timestamp,
            confirmations: parse_or_zero("confirmations", &raw.confirmations)?,
            is_error: raw.is_error == "1",
            receipt_status: match raw.txreceipt_status.as_str() {
                "" => None,
                status => Some(status == "1"),
            },
        })
    }
}

/// Decodes a `txlist` response body into typed transactions.
///
/// An empty window (status `"0"` with "No transactions found", or an empty
/// result array) decodes to `Ok(vec![])`. Any other non-array result is the
/// source rejecting the request.
pub fn parse_txlist(body: &[u8]) -> Result<Vec<Transaction>, FetchError> {
    let envelope: Envelope = serde_json::from_slice(body)
        .map_err(|e| FetchError::invalid_payload_with("response envelope", e))?;

    match envelope.result {
        Value::Array(records) => records
            .into_iter()
            .map(|record| {
                let raw: RawTransaction = serde_json::from_value(record)
                    .map_err(|e| FetchError::invalid_payload_with("transaction record", e))?;
                Transaction::try_from(raw)
            })
            .collect(),
        _ if envelope.status == "0" && envelope.message.starts_with(NO_TRANSACTIONS_FOUND) => {
            Ok(Vec::new())
        }
        Value::String(reason) => Err(FetchError::source_rejected(envelope.message, reason)),
        other => Err(FetchError::source_rejected(
            envelope.message,
            other.to_string(),
        )),
    }
}

fn parse<T>(field: &str, value: &str) -> Result<T, FetchError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value
        .parse()
        .map_err(|e| FetchError::invalid_payload(format!("{field} {value:?}: {e}")))
}

fn parse_or_zero(field: &str, value: &str) -> Result<u64, FetchError> {
    if value.is_empty() {
        Ok(0)
    } else {
        parse(field, value)
    }
}

/// Wei amounts are decimal strings that can exceed `u128`.
fn parse_wei(field: &str, value: &str) -> Result<U256, FetchError> {
    U256::from_str_radix(value, 10)
        .map_err(|e| FetchError::invalid_payload(format!("{field} {value:?}: {e}")))
}

fn parse_optional_address(field: &str, value: &str) -> Result<Option<Address>, FetchError> {
    if value.is_empty() {
        Ok(None)
    } else {
        parse(field, value).map(Some)
    }
}

fn parse_input(value: &str) -> Result<Bytes, FetchError> {
    if value.is_empty() || value == "deprecated" {
        Ok(Bytes::new())
    } else {
        parse("input", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::address;

    const TWO_TRANSACTIONS: &str = r#"{
        "status": "1",
        "message": "OK",
        "result": [
            {
                "blockNumber": "5761",
                "timeStamp": "1438271100",
                "hash": "0x88df016429689c079f3b2f6ad39fa052532c56795b733da78a91ebe6a713944b",
                "nonce": "0",
                "blockHash": "0x5a1d3a0bb4bde8a4b0a1a9d1d0c3b8b1d6f43c0c1d0a0b8e8fbd5cd1c2d0f1a2",
                "transactionIndex": "0",
                "from": "0x7600977eb9effa627d6bd0da2e5be35e11566341",
                "to": "0xdac17f958d2ee523a2206206994597c13d831ec7",
                "value": "11901464239480000000000000",
                "gas": "2000000",
                "gasPrice": "10000000000000",
                "isError": "0",
                "txreceipt_status": "",
                "input": "0x",
                "contractAddress": "",
                "cumulativeGasUsed": "1436963",
                "gasUsed": "1436963",
                "confirmations": "21000000",
                "methodId": "0x",
                "functionName": ""
            },
            {
                "blockNumber": "7000",
                "timeStamp": "1438290000",
                "hash": "0x1a1d3a0bb4bde8a4b0a1a9d1d0c3b8b1d6f43c0c1d0a0b8e8fbd5cd1c2d0f1a2",
                "nonce": "1",
                "blockHash": "0x2a1d3a0bb4bde8a4b0a1a9d1d0c3b8b1d6f43c0c1d0a0b8e8fbd5cd1c2d0f1a2",
                "transactionIndex": "3",
                "from": "0x7600977eb9effa627d6bd0da2e5be35e11566341",
                "to": "",
                "value": "0",
                "gas": "300000",
                "gasPrice": "20000000000",
                "isError": "1",
                "txreceipt_status": "0",
                "input": "0x6060",
                "contractAddress": "0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48",
                "cumulativeGasUsed": "50000",
                "gasUsed": "50000",
                "confirmations": "20998761"
            }
        ]
    }"#;

    #[test]
    fn test_parse_txlist_records() {
        let txs = parse_txlist(TWO_TRANSACTIONS.as_bytes()).unwrap();
        assert_eq!(txs.len(), 2);

        let first = &txs[0];
        assert_eq!(first.block_number, 5_761);
        assert_eq!(first.from, address!("7600977eb9effa627d6bd0da2e5be35e11566341"));
        assert_eq!(
            first.to,
            Some(address!("dac17f958d2ee523a2206206994597c13d831ec7"))
        );
        assert_eq!(
            first.value,
            U256::from_str_radix("11901464239480000000000000", 10).unwrap()
        );
        assert_eq!(first.gas, 2_000_000);
        assert_eq!(first.timestamp.timestamp(), 1_438_271_100);
        assert_eq!(first.receipt_status, None);
        assert!(first.succeeded());
        assert!(first.input.is_empty());

        let second = &txs[1];
        assert!(second.is_contract_creation());
        assert_eq!(
            second.contract_address,
            Some(address!("a0b86991c6218b36c1d19d4a2e9eb0ce3606eb48"))
        );
        assert!(second.is_error);
        assert_eq!(second.receipt_status, Some(false));
        assert_eq!(second.transaction_index, 3);
        assert_eq!(second.input.as_ref(), &[0x60, 0x60]);
    }

    #[test]
    fn test_parse_txlist_no_transactions_found() {
        let body = r#"{"status":"0","message":"No transactions found","result":[]}"#;
        assert!(parse_txlist(body.as_bytes()).unwrap().is_empty());
    }

    #[test]
    fn test_parse_txlist_empty_ok_result() {
        let body = r#"{"status":"1","message":"OK","result":[]}"#;
        assert!(parse_txlist(body.as_bytes()).unwrap().is_empty());
    }

    #[test]
    fn test_parse_txlist_rejected_api_key() {
        let body = r#"{"status":"0","message":"NOTOK","result":"Invalid API Key"}"#;
        let err = parse_txlist(body.as_bytes()).unwrap_err();
        match err {
            FetchError::SourceRejected { message, result } => {
                assert_eq!(message, "NOTOK");
                assert_eq!(result, "Invalid API Key");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_parse_txlist_rate_limited() {
        let body = r#"{"status":"0","message":"NOTOK","result":"Max rate limit reached"}"#;
        assert!(matches!(
            parse_txlist(body.as_bytes()),
            Err(FetchError::SourceRejected { .. })
        ));
    }

    #[test]
    fn test_parse_txlist_not_json() {
        assert!(matches!(
            parse_txlist(b"<html>502 Bad Gateway</html>"),
            Err(FetchError::InvalidPayload { .. })
        ));
    }

    #[test]
    fn test_parse_txlist_bad_record_field() {
        let body = TWO_TRANSACTIONS.replace(r#""gas": "300000""#, r#""gas": "lots""#);
        let err = parse_txlist(body.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("gas"));
    }

    #[test]
    fn test_parse_txlist_missing_required_field() {
        let body = r#"{"status":"1","message":"OK","result":[{"blockNumber":"1"}]}"#;
        assert!(matches!(
            parse_txlist(body.as_bytes()),
            Err(FetchError::InvalidPayload { .. })
        ));
    }
}
