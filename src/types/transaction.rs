// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Transaction records and the ordered list they are accumulated into.

use alloy_primitives::{Address, BlockNumber, Bytes, TxHash, B256, U256};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One on-chain transaction involving the queried address.
///
/// Produced by a [`TransactionSource`](crate::TransactionSource) and never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub hash: TxHash,
    pub block_number: BlockNumber,
    pub block_hash: B256,
    pub transaction_index: u64,
    pub nonce: u64,
    pub from: Address,
    /// `None` for contract creations
    pub to: Option<Address>,
    /// Address of the contract created by this transaction, if any
    pub contract_address: Option<Address>,
    /// Transferred value in wei
    pub value: U256,
    /// Gas limit
    pub gas: u64,
    pub gas_price: U256,
    pub gas_used: u64,
    pub cumulative_gas_used: u64,
    pub input: Bytes,
    pub timestamp: DateTime<Utc>,
    /// Confirmations at the time the source answered
    pub confirmations: u64,
    /// Whether execution reverted
    pub is_error: bool,
    /// Receipt status; `None` for pre-Byzantium transactions
    pub receipt_status: Option<bool>,
}

impl Transaction {
    /// Whether the transaction executed without reverting.
    pub fn succeeded(&self) -> bool {
        !self.is_error && self.receipt_status.unwrap_or(true)
    }

    /// Whether this is a contract creation.
    pub fn is_contract_creation(&self) -> bool {
        self.to.is_none()
    }

    /// Execution fee paid in wei (`gas_used * gas_price`).
    pub fn fee(&self) -> U256 {
        U256::from(self.gas_used).saturating_mul(self.gas_price)
    }

    /// Whether `address` is the sender, recipient, or created contract.
    pub fn involves(&self, address: Address) -> bool {
        self.from == address
            || self.to == Some(address)
            || self.contract_address == Some(address)
    }
}

/// Transactions accumulated across windows, ascending by block number.
///
/// Append-only: windows are added whole, in window order, and nothing is
/// removed or reordered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionList(Vec<Transaction>);

impl TransactionList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Transaction> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[Transaction] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<Transaction> {
        self.0
    }

    /// Highest block number in the list, if any.
    pub fn last_block(&self) -> Option<BlockNumber> {
        self.0.last().map(|tx| tx.block_number)
    }

    /// Appends one window's transactions after everything already present.
    pub(crate) fn append_window(&mut self, window: Vec<Transaction>) {
        self.0.extend(window);
    }
}

impl IntoIterator for TransactionList {
    type Item = Transaction;
    type IntoIter = std::vec::IntoIter<Transaction>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a TransactionList {
    type Item = &'a Transaction;
    type IntoIter = std::slice::Iter<'a, Transaction>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
