// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Day-count to block-number resolution.
//!
//! # Precision
//!
//! The starting block is estimated as `tip - blocks_per_day * days` using an
//! assumed-constant production rate. It is not derived from block timestamps,
//! so on chains whose block time drifts the resolved start can be off by a
//! number of blocks proportional to the lookback. Callers needing exact UTC
//! day boundaries have to read real timestamps through
//! [`BlockOracle::full_block`].

use alloy_primitives::BlockNumber;
use tracing::{debug, Instrument};

use crate::blocks::BlockOracle;
use crate::errors::OracleError;
use crate::spans;
use crate::types::config::BlocksPerDay;

/// Converts a lookback in days into a starting block number.
///
/// # Examples
///
/// ```rust,ignore
/// use txscan::{BlockRangeResolver, BlocksPerDay};
///
/// let resolver = BlockRangeResolver::new(oracle, BlocksPerDay::default());
/// let start = resolver.resolve_start(30).await?;
/// ```
#[derive(Debug, Clone)]
pub struct BlockRangeResolver<O> {
    oracle: O,
    blocks_per_day: BlocksPerDay,
}

impl<O: BlockOracle> BlockRangeResolver<O> {
    pub fn new(oracle: O, blocks_per_day: BlocksPerDay) -> Self {
        Self {
            oracle,
            blocks_per_day,
        }
    }

    /// The oracle this resolver reads the tip from.
    pub fn oracle(&self) -> &O {
        &self.oracle
    }

    pub fn blocks_per_day(&self) -> BlocksPerDay {
        self.blocks_per_day
    }

    /// Resolves the first block of a `days`-day lookback ending at the current tip.
    ///
    /// Clamps to block 0 when the lookback reaches past genesis.
    ///
    /// # Errors
    ///
    /// Returns whatever error the oracle surfaces while reading the tip.
    pub async fn resolve_start(&self, days: u64) -> Result<BlockNumber, OracleError> {
        async {
            let tip = self.oracle.latest_block_number().await?;
            let start = start_for_tip(tip, self.blocks_per_day, days);
            debug!(tip, start, days, "Resolved lookback start block");
            Ok::<_, OracleError>(start)
        }
        .instrument(spans::resolve_start(days, self.blocks_per_day.as_u64()))
        .await
    }
}

/// `tip - blocks_per_day * days`, clamped at 0.
pub fn start_for_tip(tip: BlockNumber, blocks_per_day: BlocksPerDay, days: u64) -> BlockNumber {
    tip.saturating_sub(blocks_per_day.blocks_for_days(days))
}
