// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Test helpers for txscan integration tests
//!
//! Mock implementations of [`BlockOracle`] and [`TransactionSource`] so the
//! aggregation logic can be exercised without a node or a history API.

#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use alloy_primitives::{Address, BlockNumber, Bytes, B256, U256};
use async_trait::async_trait;
use chrono::DateTime;
use txscan::{
    BlockOracle, BlockRange, FetchError, FullBlock, OracleError, Transaction, TransactionSource,
};

pub const ACCOUNT: &str = "0x7600977Eb9eFFA627D6BD0DA2E5be35E11566341";

/// Mock BlockOracle for testing resolution and aggregation
///
/// Returns the scripted tips in order, repeating the last one, and counts
/// calls.
///
/// # Example
///
/// ```rust,ignore
/// let oracle = MockBlockOracle::fixed(11_520).failing_on_call(1);
/// ```
pub struct MockBlockOracle {
    tips: Vec<BlockNumber>,
    fail_on_call: Option<usize>,
    delay: Option<Duration>,
    calls: AtomicUsize,
}

impl MockBlockOracle {
    /// An oracle whose tip never moves
    pub fn fixed(tip: BlockNumber) -> Self {
        Self::scripted(vec![tip])
    }

    /// An oracle returning `tips` on successive calls
    pub fn scripted(tips: Vec<BlockNumber>) -> Self {
        Self {
            tips,
            fail_on_call: None,
            delay: None,
            calls: AtomicUsize::new(0),
        }
    }

    /// Fail the `call`-th (zero-based) tip read
    pub fn failing_on_call(mut self, call: usize) -> Self {
        self.fail_on_call = Some(call);
        self
    }

    /// Sleep before every answer
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl BlockOracle for MockBlockOracle {
    async fn latest_block_number(&self) -> Result<BlockNumber, OracleError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        if self.fail_on_call == Some(call) {
            return Err(OracleError::unavailable(
                "eth_blockNumber",
                std::io::Error::other("connection refused"),
            ));
        }
        let index = call.min(self.tips.len().saturating_sub(1));
        Ok(self.tips.get(index).copied().unwrap_or_default())
    }

    async fn full_block(&self, _number: BlockNumber) -> Result<Option<FullBlock>, OracleError> {
        Ok(None)
    }
}

type DelayFn = Box<dyn Fn(BlockRange) -> Duration + Send + Sync>;

/// Mock TransactionSource returning deterministic transactions per window
///
/// Every window yields `per_window` transactions at blocks
/// `range.start(), range.start() + 1, ...`. Requested ranges are recorded in
/// call order.
pub struct ScriptedSource {
    per_window: u64,
    failing_starts: HashSet<BlockNumber>,
    delay: Option<DelayFn>,
    requests: Mutex<Vec<BlockRange>>,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
}

impl ScriptedSource {
    pub fn new(per_window: u64) -> Self {
        Self {
            per_window,
            failing_starts: HashSet::new(),
            delay: None,
            requests: Mutex::new(Vec::new()),
            in_flight: AtomicUsize::new(0),
            max_in_flight: AtomicUsize::new(0),
        }
    }

    /// Fail the window starting at `start` with an HTTP 503
    pub fn failing_at(mut self, start: BlockNumber) -> Self {
        self.failing_starts.insert(start);
        self
    }

    /// Sleep per window before answering
    pub fn with_delay<F>(mut self, delay: F) -> Self
    where
        F: Fn(BlockRange) -> Duration + Send + Sync + 'static,
    {
        self.delay = Some(Box::new(delay));
        self
    }

    /// Ranges requested so far, in call order
    pub fn requests(&self) -> Vec<(BlockNumber, BlockNumber)> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .map(|r| (r.start(), r.end()))
            .collect()
    }

    /// Highest number of concurrent fetches observed
    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }

    /// What the source answers for `range`
    pub fn expected_for(&self, range: BlockRange) -> Vec<Transaction> {
        (0..self.per_window)
            .map(|i| test_transaction(range.start() + i, i))
            .collect()
    }
}

#[async_trait]
impl TransactionSource for ScriptedSource {
    async fn fetch(
        &self,
        _address: &str,
        range: BlockRange,
    ) -> Result<Vec<Transaction>, FetchError> {
        self.requests.lock().unwrap().push(range);
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);

        if let Some(delay) = &self.delay {
            tokio::time::sleep(delay(range)).await;
        }
        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        if self.failing_starts.contains(&range.start()) {
            return Err(FetchError::HttpStatus { status: 503 });
        }
        Ok(self.expected_for(range))
    }
}

/// Create a test transaction at `block_number`
pub fn test_transaction(block_number: BlockNumber, index: u64) -> Transaction {
    let id = U256::from(block_number) * U256::from(1_000) + U256::from(index);
    Transaction {
        hash: B256::left_padding_from(&id.to_be_bytes::<32>()),
        block_number,
        block_hash: B256::left_padding_from(&block_number.to_be_bytes()),
        transaction_index: index,
        nonce: index,
        from: Address::repeat_byte(0x11),
        to: Some(Address::repeat_byte(0x22)),
        contract_address: None,
        value: U256::from(1_000_000_000u64),
        gas: 21_000,
        gas_price: U256::from(20_000_000_000u64),
        gas_used: 21_000,
        cumulative_gas_used: 21_000,
        input: Bytes::new(),
        timestamp: DateTime::from_timestamp(1_700_000_000 + block_number as i64 * 12, 0)
            .unwrap(),
        confirmations: 1,
        is_error: false,
        receipt_status: Some(true),
    }
}
