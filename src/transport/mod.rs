// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Transport layer utilities.
//!
//! - [`Throttle`] paces requests to a rate-limited API; the Etherscan client
//!   takes a token before every call.
//! - [`ThrottleLayer`] and [`LoggingLayer`] are Tower layers for the Alloy RPC
//!   client behind the block oracle.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use txscan::transport::{LoggingLayer, ThrottleLayer};
//! use alloy_rpc_client::ClientBuilder;
//!
//! let client = ClientBuilder::default()
//!     .layer(LoggingLayer)
//!     .layer(ThrottleLayer::per_second(10))
//!     .http(rpc_url);
//! ```

mod logging;
mod throttle;

pub use logging::{LoggingLayer, LoggingService};
pub use throttle::{Throttle, ThrottleLayer, ThrottleService};
