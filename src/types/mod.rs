// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Strong types for type safety across txscan.
//!
//! This module provides newtype wrappers for domain concepts:
//! - Configuration values (blocks per day, window size, concurrency)
//! - Transaction records and the ordered transaction list

pub mod config;
pub mod transaction;

// Note: Public types are re-exported from lib.rs, not here
