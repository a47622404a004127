// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Configuration for txscan operations
//!
//! This module controls how a day-based lookback is turned into fetch windows:
//! the estimated block production rate, the window size, per-call timeouts,
//! how many windows may be in flight, and what happens to a trailing partial
//! window.
//!
//! # Example: Using defaults
//!
//! ```rust
//! use txscan::TxScanConfig;
//!
//! // 5760 blocks/day, 1920-block windows, sequential, 30s per call
//! let config = TxScanConfig::default();
//! ```
//!
//! # Example: Custom configuration
//!
//! ```rust
//! use txscan::TxScanConfigBuilder;
//! use alloy_chains::NamedChain;
//! use std::time::Duration;
//!
//! let config = TxScanConfigBuilder::new()
//!     .window_size(5_000)
//!     .max_concurrent_windows(4)
//!     .chain_blocks_per_day(NamedChain::Polygon, 43_200)
//!     .call_timeout(Duration::from_secs(10))
//!     .build();
//! ```

use std::collections::HashMap;
use std::time::Duration;

use alloy_chains::NamedChain;

use crate::blocks::TailPolicy;
use crate::types::config::{BlocksPerDay, Concurrency, WindowSize};

/// Default timeout applied to every oracle and history call.
pub const DEFAULT_CALL_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for txscan operations
///
/// Use [`TxScanConfigBuilder`] for a fluent API to construct instances.
#[derive(Debug, Clone)]
pub struct TxScanConfig {
    /// Estimated blocks produced per day
    /// Default: 5760
    pub blocks_per_day: BlocksPerDay,

    /// Maximum block span per history call
    /// Default: 1920
    pub window_size: WindowSize,

    /// Timeout wrapping each individual oracle and history call
    /// Default: 30 seconds. `None` waits indefinitely.
    pub call_timeout: Option<Duration>,

    /// Window fetches in flight at once
    /// Default: 1 (strictly sequential)
    pub max_concurrent_windows: Concurrency,

    /// Whether blocks after the last full window are fetched
    /// Default: [`TailPolicy::Drop`]
    pub tail_policy: TailPolicy,

    /// Chain-specific overrides
    pub chain_overrides: HashMap<NamedChain, ChainConfig>,
}

/// Chain-specific configuration overrides
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChainConfig {
    /// Override blocks per day for this chain
    pub blocks_per_day: Option<BlocksPerDay>,

    /// Override window size for this chain
    pub window_size: Option<WindowSize>,
}

impl Default for TxScanConfig {
    fn default() -> Self {
        Self {
            blocks_per_day: BlocksPerDay::DEFAULT,
            window_size: WindowSize::DEFAULT,
            call_timeout: Some(DEFAULT_CALL_TIMEOUT),
            max_concurrent_windows: Concurrency::SEQUENTIAL,
            tail_policy: TailPolicy::Drop,
            chain_overrides: HashMap::new(),
        }
    }
}

impl TxScanConfig {
    /// Get effective blocks per day for a specific chain
    ///
    /// Returns chain-specific override if set, otherwise returns global default.
    ///
    /// ```rust
    /// use txscan::{BlocksPerDay, TxScanConfigBuilder};
    /// use alloy_chains::NamedChain;
    ///
    /// let config = TxScanConfigBuilder::new()
    ///     .chain_blocks_per_day(NamedChain::Polygon, 43_200)
    ///     .build();
    ///
    /// assert_eq!(config.get_blocks_per_day(NamedChain::Polygon), BlocksPerDay::new(43_200));
    /// assert_eq!(config.get_blocks_per_day(NamedChain::Mainnet), BlocksPerDay::new(5_760));
    /// ```
    pub fn get_blocks_per_day(&self, chain: NamedChain) -> BlocksPerDay {
        self.chain_overrides
            .get(&chain)
            .and_then(|c| c.blocks_per_day)
            .unwrap_or(self.blocks_per_day)
    }

    /// Get effective window size for a specific chain
    ///
    /// Returns chain-specific override if set, otherwise returns global default.
    pub fn get_window_size(&self, chain: NamedChain) -> WindowSize {
        self.chain_overrides
            .get(&chain)
            .and_then(|c| c.window_size)
            .unwrap_or(self.window_size)
    }

    /// Set chain-specific override
    pub fn set_chain_override(&mut self, chain: NamedChain, config: ChainConfig) {
        self.chain_overrides.insert(chain, config);
    }

    /// Collapse chain overrides into the global values for `chain`.
    ///
    /// The aggregator works on a single chain; this is what it is built with.
    pub fn for_chain(&self, chain: NamedChain) -> Self {
        Self {
            blocks_per_day: self.get_blocks_per_day(chain),
            window_size: self.get_window_size(chain),
            call_timeout: self.call_timeout,
            max_concurrent_windows: self.max_concurrent_windows,
            tail_policy: self.tail_policy,
            chain_overrides: HashMap::new(),
        }
    }
}

/// Builder for [`TxScanConfig`]
///
/// # Example
///
/// ```rust
/// use txscan::{TailPolicy, TxScanConfigBuilder};
///
/// let config = TxScanConfigBuilder::new()
///     .blocks_per_day(7_200)
///     .window_size(2_400)
///     .tail_policy(TailPolicy::Include)
///     .build();
/// ```
#[derive(Debug, Default)]
pub struct TxScanConfigBuilder {
    config: TxScanConfig,
}

impl TxScanConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set global blocks per day
    pub fn blocks_per_day(mut self, blocks: u64) -> Self {
        self.config.blocks_per_day = BlocksPerDay::new(blocks);
        self
    }

    /// Set global window size (0 is raised to 1)
    pub fn window_size(mut self, blocks: u64) -> Self {
        self.config.window_size = WindowSize::new(blocks);
        self
    }

    /// Set the per-call timeout
    pub fn call_timeout(mut self, timeout: Duration) -> Self {
        self.config.call_timeout = Some(timeout);
        self
    }

    /// Disable the per-call timeout
    pub fn no_call_timeout(mut self) -> Self {
        self.config.call_timeout = None;
        self
    }

    /// Allow up to `limit` window fetches in flight (0 is raised to 1)
    pub fn max_concurrent_windows(mut self, limit: usize) -> Self {
        self.config.max_concurrent_windows = Concurrency::new(limit);
        self
    }

    pub fn tail_policy(mut self, policy: TailPolicy) -> Self {
        self.config.tail_policy = policy;
        self
    }

    /// Add chain-specific configuration
    pub fn chain_config(mut self, chain: NamedChain, config: ChainConfig) -> Self {
        self.config.set_chain_override(chain, config);
        self
    }

    /// Convenience: set blocks per day for a specific chain
    pub fn chain_blocks_per_day(mut self, chain: NamedChain, blocks: u64) -> Self {
        let existing = self.config.chain_overrides.remove(&chain).unwrap_or_default();
        self.config.set_chain_override(
            chain,
            ChainConfig {
                blocks_per_day: Some(BlocksPerDay::new(blocks)),
                ..existing
            },
        );
        self
    }

    /// Convenience: set window size for a specific chain
    pub fn chain_window_size(mut self, chain: NamedChain, blocks: u64) -> Self {
        let existing = self.config.chain_overrides.remove(&chain).unwrap_or_default();
        self.config.set_chain_override(
            chain,
            ChainConfig {
                window_size: Some(WindowSize::new(blocks)),
                ..existing
            },
        );
        self
    }

    pub fn build(self) -> TxScanConfig {
        self.config
    }
}
