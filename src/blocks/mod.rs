// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Block-number handling.
//!
//! This module provides functionality for:
//! - Reading the chain tip and full blocks from a JSON-RPC node
//! - Estimating the first block of a day-based lookback
//! - Splitting a block range into fetch windows

pub mod oracle;
pub mod range;
pub mod resolver;
pub mod window;

// Re-export public API
pub use oracle::{BlockOracle, BlockTransaction, FullBlock, RpcBlockOracle};
pub use range::BlockRange;
pub use resolver::{start_for_tip, BlockRangeResolver};
pub use window::{TailPolicy, WindowPlan};
