// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Block ranges passed to the transaction-history source.

use alloy_primitives::BlockNumber;
use serde::{Deserialize, Serialize};

/// An ordered `(start, end)` pair of block numbers with `start <= end`.
///
/// Adjacent windows share their boundary block: window `i` ends where window
/// `i + 1` starts. Ranges are immutable once constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlockRange {
    start: BlockNumber,
    end: BlockNumber,
}

impl BlockRange {
    /// Creates a range, or `None` when `end < start`.
    pub fn new(start: BlockNumber, end: BlockNumber) -> Option<Self> {
        (start <= end).then_some(Self { start, end })
    }

    pub fn start(&self) -> BlockNumber {
        self.start
    }

    pub fn end(&self) -> BlockNumber {
        self.end
    }

    /// Distance between the bounds (`end - start`).
    pub fn span(&self) -> u64 {
        self.end - self.start
    }

    pub fn contains(&self, block: BlockNumber) -> bool {
        self.start <= block && block <= self.end
    }
}

impl std::fmt::Display for BlockRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}
