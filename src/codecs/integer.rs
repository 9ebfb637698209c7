// Network Manager - Integer Codec
// Copyright (C) 2026 Christos A. Daggas
// SPDX-License-Identifier: MIT

//! Integer codec with range checks, hexadecimal input and named aliases.

use crate::models::{Error, OutputMode, Result};

/// Natural storage width of an integer property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntKind {
    Int32,
    UInt32,
    Int64,
    UInt64,
}

impl IntKind {
    /// Inclusive bounds of the storage type, clamped to `i64`.
    pub fn bounds(&self) -> (i64, i64) {
        match self {
            Self::Int32 => (i32::MIN as i64, i32::MAX as i64),
            Self::UInt32 => (0, u32::MAX as i64),
            Self::Int64 => (i64::MIN, i64::MAX),
            Self::UInt64 => (0, i64::MAX),
        }
    }
}

/// A literal that stands for a specific integer, e.g. "unset" for -1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntAlias {
    pub nick: &'static str,
    pub value: i64,
}

/// Parsing and rendering rules of one integer property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntSpec {
    pub kind: IntKind,
    /// 10, 16, or 0 for automatic (`0x` hex, leading `0` octal).
    pub base: u32,
    pub min: Option<i64>,
    pub max: Option<i64>,
    pub aliases: &'static [IntAlias],
}

impl IntSpec {
    pub const fn new(kind: IntKind) -> Self {
        Self {
            kind,
            base: 10,
            min: None,
            max: None,
            aliases: &[],
        }
    }

    pub const fn base(mut self, base: u32) -> Self {
        self.base = base;
        self
    }

    pub const fn range(mut self, min: i64, max: i64) -> Self {
        self.min = Some(min);
        self.max = Some(max);
        self
    }

    pub const fn aliases(mut self, aliases: &'static [IntAlias]) -> Self {
        self.aliases = aliases;
        self
    }

    /// Effective inclusive bounds.
    pub fn bounds(&self) -> (i64, i64) {
        let (lo, hi) = self.kind.bounds();
        (self.min.unwrap_or(lo), self.max.unwrap_or(hi))
    }

    /// Parse text, resolving aliases before numeric parsing.
    pub fn parse(&self, text: &str) -> Result<i64> {
        let stripped = text.trim();
        if let Some(alias) = self.aliases.iter().find(|a| a.nick == stripped) {
            return Ok(alias.value);
        }
        let (min, max) = self.bounds();
        parse_int(stripped, self.base, min, max)
    }

    /// Render a value. Pretty mode names a matching alias.
    pub fn format(&self, value: i64, mode: OutputMode) -> String {
        let number = if self.base == 16 {
            format!("0x{:x}", value)
        } else {
            value.to_string()
        };

        if mode.is_pretty() {
            if let Some(alias) = self.aliases.iter().find(|a| a.value == value) {
                return format!("{} ({})", number, alias.nick);
            }
        }
        number
    }

    /// Alias names, offered as completion values.
    pub fn alias_names(&self) -> Vec<String> {
        self.aliases.iter().map(|a| a.nick.to_string()).collect()
    }
}

/// Parse an integer in `base` and check it against `[min, max]`.
pub fn parse_int(text: &str, base: u32, min: i64, max: i64) -> Result<i64> {
    let s = text.trim();
    let (negative, digits) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    };

    let (radix, digits) = match base {
        16 => (
            16,
            digits
                .strip_prefix("0x")
                .or_else(|| digits.strip_prefix("0X"))
                .unwrap_or(digits),
        ),
        0 => {
            if let Some(hex) = digits.strip_prefix("0x").or_else(|| digits.strip_prefix("0X")) {
                (16, hex)
            } else if digits.len() > 1 && digits.starts_with('0') {
                (8, &digits[1..])
            } else {
                (10, digits)
            }
        }
        b => (b, digits),
    };

    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return Err(Error::not_a_number(text));
    }

    // Digits are validated above, so the only failure left is overflow.
    let magnitude = match i128::from_str_radix(digits, radix) {
        Ok(v) => v,
        Err(_) => return Err(Error::out_of_range(text, min, max)),
    };
    let value = if negative { -magnitude } else { magnitude };

    if value < min as i128 || value > max as i128 {
        return Err(Error::out_of_range(text, min, max));
    }
    Ok(value as i64)
}
