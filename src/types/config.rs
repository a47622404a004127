// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Strong types for configuration values.

use alloy_primitives::BlockNumber;
use serde::{Deserialize, Serialize};

/// Estimated number of blocks a chain produces per day.
///
/// This is an assumed-constant rate. Real chains drift (missed slots, variable
/// block times), so any block number derived from it is an estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BlocksPerDay(u64);

impl BlocksPerDay {
    /// 15-second blocks, the rate the Ethereum mainnet estimate has
    /// historically been based on.
    pub const DEFAULT: Self = Self(5_760);

    pub const fn new(blocks: u64) -> Self {
        Self(blocks)
    }

    pub const fn as_u64(&self) -> u64 {
        self.0
    }

    /// Number of blocks to look back for `days` days, saturating at `u64::MAX`.
    pub fn blocks_for_days(&self, days: u64) -> u64 {
        self.0.saturating_mul(days)
    }
}

impl Default for BlocksPerDay {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl std::fmt::Display for BlocksPerDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Maximum block span covered by one call to the transaction-history source.
///
/// Always at least 1, so window arithmetic never divides by zero.
///
/// The history source answers each window in a single unpaged call capped at
/// [`MAX_RECORDS_PER_CALL`](crate::MAX_RECORDS_PER_CALL) records. A window
/// holding more than that for the address comes back truncated, so busy
/// accounts need a smaller window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct WindowSize(u64);

impl WindowSize {
    /// One third of a day at the default rate.
    pub const DEFAULT: Self = Self(1_920);

    /// Creates a window size, raising 0 to 1.
    pub const fn new(blocks: u64) -> Self {
        if blocks == 0 {
            Self(1)
        } else {
            Self(blocks)
        }
    }

    pub const fn as_u64(&self) -> u64 {
        self.0
    }

    /// Number of full windows between `start` and `end`.
    ///
    /// Returns 0 when `end <= start`. A trailing remainder shorter than one
    /// window is not counted.
    pub fn full_windows(&self, start: BlockNumber, end: BlockNumber) -> u64 {
        end.saturating_sub(start) / self.0
    }
}

impl Default for WindowSize {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl std::fmt::Display for WindowSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Maximum number of window fetches in flight at once.
///
/// `1` means strictly sequential: each fetch completes before the next starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Concurrency(usize);

impl Concurrency {
    pub const SEQUENTIAL: Self = Self(1);

    /// Creates a concurrency limit, raising 0 to 1.
    pub const fn new(limit: usize) -> Self {
        if limit == 0 {
            Self(1)
        } else {
            Self(limit)
        }
    }

    pub const fn get(&self) -> usize {
        self.0
    }

    pub const fn is_sequential(&self) -> bool {
        self.0 == 1
    }
}

impl Default for Concurrency {
    fn default() -> Self {
        Self::SEQUENTIAL
    }
}
