// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Hex quantity decoding for JSON-RPC responses.
//!
//! Nodes return quantities such as block numbers and timestamps as
//! `0x`-prefixed base-16 strings. Everything up to and including the first
//! `x` marker is stripped and the rest is parsed as an unsigned integer.

use crate::errors::MalformedHexError;

/// Decodes a `0x`-prefixed hex quantity into a `u64`.
///
/// # Errors
///
/// Returns [`MalformedHexError`] when the input has no `x`/`X` marker, when
/// the digits after it are empty or not base-16, or when the value overflows.
///
/// # Examples
///
/// ```rust
/// use txscan::hex::decode;
///
/// assert_eq!(decode("0x2d00").unwrap(), 11_520);
/// assert!(decode("2d00").is_err());
/// assert!(decode("0xzz").is_err());
/// ```
pub fn decode(input: &str) -> Result<u64, MalformedHexError> {
    let digits = input
        .find(['x', 'X'])
        .map(|marker| &input[marker + 1..])
        .ok_or_else(|| MalformedHexError::missing_prefix(input))?;

    // from_str_radix accepts a leading '+', which is not a hex digit
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(MalformedHexError::invalid_digits(input));
    }

    u64::from_str_radix(digits, 16).map_err(|_| MalformedHexError::overflow(input))
}

/// Encodes a `u64` as a canonical lower-case `0x` quantity.
///
/// ```rust
/// use txscan::hex::encode;
///
/// assert_eq!(encode(11_520), "0x2d00");
/// assert_eq!(encode(0), "0x0");
/// ```
pub fn encode(value: u64) -> String {
    format!("{value:#x}")
}
