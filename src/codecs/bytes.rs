// Network Manager - Byte Blob Codec
// Copyright (C) 2026 Christos A. Daggas
// SPDX-License-Identifier: MIT

//! Byte blob codec (hex strings).

use crate::models::{Error, Result};

/// Parse a hex string, optionally `0x`-prefixed and `:`-separated.
fn parse_hex_string(text: &str) -> Option<Vec<u8>> {
    let body = text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
        .unwrap_or(text);
    if body.is_empty() {
        return None;
    }

    if body.contains(':') {
        return body
            .split(':')
            .map(|octet| {
                if octet.is_empty() || octet.len() > 2 {
                    None
                } else {
                    u8::from_str_radix(octet, 16).ok()
                }
            })
            .collect();
    }

    hex::decode(body).ok()
}

/// Parse whitespace-separated hex octets (`0x` prefix optional).
fn parse_legacy(text: &str) -> Result<Vec<u8>> {
    text.split_whitespace()
        .map(|token| {
            let digits = token
                .strip_prefix("0x")
                .or_else(|| token.strip_prefix("0X"))
                .unwrap_or(token);
            if digits.is_empty() || digits.len() > 2 {
                return Err(Error::invalid(
                    token,
                    format!("'{}' is not a valid hex character", token),
                ));
            }
            u8::from_str_radix(digits, 16).map_err(|_| {
                Error::invalid(token, format!("'{}' is not a valid hex character", token))
            })
        })
        .collect()
}

/// Parse a byte blob. Empty text yields `None` (absent blob).
pub fn parse_bytes(text: &str, legacy: bool) -> Result<Option<Vec<u8>>> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(None);
    }

    if let Some(bytes) = parse_hex_string(text) {
        return Ok(Some(bytes));
    }

    if !legacy {
        return Err(Error::invalid(
            text,
            format!("'{}' is not a valid hex-string", text),
        ));
    }

    parse_legacy(text).map(Some)
}

/// Render a byte blob as upper-case hex.
pub fn format_bytes(bytes: &[u8]) -> String {
    hex::encode_upper(bytes)
}
