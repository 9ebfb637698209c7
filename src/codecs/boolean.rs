// Network Manager - Boolean Codec
// Copyright (C) 2026 Christos A. Daggas
// SPDX-License-Identifier: MIT

//! Boolean text codec.

use crate::models::{Error, OutputMode, Result};

const TRUE_TOKENS: [&str; 4] = ["true", "yes", "on", "1"];
const FALSE_TOKENS: [&str; 4] = ["false", "no", "off", "0"];

/// Tokens offered for completion, in display order.
pub const BOOL_COMPLETIONS: [&str; 8] = ["true", "false", "on", "off", "1", "0", "yes", "no"];

/// Parse a boolean, case-insensitively.
pub fn parse_bool(text: &str) -> Result<bool> {
    let token = text.trim();
    if TRUE_TOKENS.iter().any(|t| t.eq_ignore_ascii_case(token)) {
        return Ok(true);
    }
    if FALSE_TOKENS.iter().any(|t| t.eq_ignore_ascii_case(token)) {
        return Ok(false);
    }
    Err(Error::invalid(
        text,
        format!(
            "'{}' is not valid; use [{}] or [{}]",
            text,
            TRUE_TOKENS.join(", "),
            FALSE_TOKENS.join(", ")
        ),
    ))
}

/// Render a boolean. Both modes use `yes`/`no`.
pub fn format_bool(value: bool, _mode: OutputMode) -> String {
    let text = if value { "yes" } else { "no" };
    text.to_string()
}

/// Completion candidates for a boolean property.
pub fn complete_bool(text: &str) -> Vec<String> {
    if text.is_empty() {
        return vec!["yes".to_string(), "no".to_string()];
    }
    BOOL_COMPLETIONS.iter().map(|s| s.to_string()).collect()
}
