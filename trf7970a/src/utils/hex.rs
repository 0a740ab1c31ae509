//! Hexadecimal helpers used for frame fields and debug output.

use std::fmt::Write;

use crate::{Error, Result};

/// Render one byte as `0x` followed by two lowercase hex digits.
///
/// Example: `0x7f` -> `"0x7f"`, `0x05` -> `"0x05"`
pub fn byte_token(byte: u8) -> String {
    format!("{:#04x}", byte)
}

/// Render bytes as `0x..` tokens, each followed by a single space.
///
/// Example: `&[0xaa, 0xbb]` -> `"0xaa 0xbb "`, `&[]` -> `""`
pub fn bytes_to_tokens(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 5);
    for b in bytes {
        // write! never fails writing to a String
        let _ = write!(&mut s, "{:#04x} ", b);
    }
    s
}

/// Convert a byte slice to a lowercase hex string with a single space between
/// each byte.
///
/// Example: `&[0xde, 0xad]` -> `"de ad"`
pub fn bytes_to_hex_spaced(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 3);
    for (i, b) in bytes.iter().enumerate() {
        if i != 0 {
            s.push(' ');
        }
        let _ = write!(&mut s, "{:02x}", b);
    }
    s
}

/// Parse a hex string into bytes.
///
/// Accepts whitespace-separated tokens with an optional `0x` prefix, so both
/// `"deadbeef"` and the frame data form `"0xde 0xad "` parse.
pub fn parse_hex(s: &str) -> Result<Vec<u8>> {
    let mut cleaned = String::with_capacity(s.len());
    for token in s.split_whitespace() {
        let digits = token
            .strip_prefix("0x")
            .or_else(|| token.strip_prefix("0X"))
            .unwrap_or(token);
        cleaned.push_str(digits);
    }

    if cleaned.len() % 2 != 0 {
        return Err(Error::InvalidHex("hex string has odd length".to_string()));
    }

    let mut out = Vec::with_capacity(cleaned.len() / 2);
    for pair in cleaned.as_bytes().chunks(2) {
        let pair = std::str::from_utf8(pair)
            .map_err(|_| Error::InvalidHex("non-ascii input".to_string()))?;
        let byte = u8::from_str_radix(pair, 16)
            .map_err(|e| Error::InvalidHex(format!("invalid hex pair '{}': {}", pair, e)))?;
        out.push(byte);
    }

    Ok(out)
}
