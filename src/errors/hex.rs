// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error type for hex quantity decoding.

/// A string could not be decoded as a `0x`-prefixed hex quantity.
///
/// Each variant carries the offending input so the message is useful even
/// when the error surfaces far away from the RPC response it came from.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MalformedHexError {
    /// The input has no `x` marker, so there is nothing to strip.
    #[error("Missing hex prefix in {input:?}")]
    MissingPrefix {
        /// The rejected input
        input: String,
    },

    /// The digits after the marker are empty or not base-16.
    #[error("Invalid hex digits in {input:?}")]
    InvalidDigits {
        /// The rejected input
        input: String,
    },

    /// The value does not fit in 64 bits.
    #[error("Hex value {input:?} overflows u64")]
    Overflow {
        /// The rejected input
        input: String,
    },
}

impl MalformedHexError {
    /// Create a `MissingPrefix` error.
    pub fn missing_prefix(input: impl Into<String>) -> Self {
        MalformedHexError::MissingPrefix {
            input: input.into(),
        }
    }

    /// Create an `InvalidDigits` error.
    pub fn invalid_digits(input: impl Into<String>) -> Self {
        MalformedHexError::InvalidDigits {
            input: input.into(),
        }
    }

    /// Create an `Overflow` error.
    pub fn overflow(input: impl Into<String>) -> Self {
        MalformedHexError::Overflow {
            input: input.into(),
        }
    }
}
