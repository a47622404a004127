// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! JSON-RPC provider construction for the block oracle.
//!
//! The oracle only issues `eth_blockNumber` and `eth_getBlockByNumber` as raw
//! requests and decodes the replies itself, so the plain `Ethereum` network
//! type works against any EVM chain.
//!
//! ```rust,ignore
//! use txscan::provider::{create_http_provider, ProviderConfig};
//!
//! let provider = create_http_provider(
//!     ProviderConfig::new("https://eth.llamarpc.com")
//!         .with_rate_limit(10)
//!         .with_logging(true),
//! )?;
//! ```

mod config;
mod factory;

pub use config::ProviderConfig;
pub use factory::create_http_provider;

use alloy_network::Ethereum;

/// HTTP provider for the block oracle
pub type HttpProvider = alloy_provider::RootProvider<Ethereum>;
