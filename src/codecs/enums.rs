// Network Manager - Enum and Flags Codec
// Copyright (C) 2026 Christos A. Daggas
// SPDX-License-Identifier: MIT

//! Enumeration and bit-flag codec.
//!
//! Values are stored as integers. Text input may name values or give the
//! number directly; flags accept several names joined by `,`, `|` or spaces.

use crate::codecs::integer::parse_int;
use crate::models::{Error, OutputMode, Result};

/// One named value of an enumeration or flag set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnumValue {
    pub nick: &'static str,
    pub value: i64,
}

/// Shorthand constructor used by the property tables.
pub const fn ev(nick: &'static str, value: i64) -> EnumValue {
    EnumValue { nick, value }
}

/// Which parts of a value are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnumFormat {
    pub numeric: bool,
    pub hex: bool,
    pub text: bool,
}

impl EnumFormat {
    pub const NUMERIC: Self = Self {
        numeric: true,
        hex: false,
        text: false,
    };
    pub const TEXT: Self = Self {
        numeric: false,
        hex: false,
        text: true,
    };
    pub const NUMERIC_TEXT: Self = Self {
        numeric: true,
        hex: false,
        text: true,
    };
    pub const HEX_TEXT: Self = Self {
        numeric: true,
        hex: true,
        text: true,
    };
}

/// Description of an enumeration or flag type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnumSpec {
    pub type_name: &'static str,
    pub is_flags: bool,
    pub values: &'static [EnumValue],
    /// Extra names accepted on input only.
    pub aliases: &'static [EnumValue],
    pub min: Option<i64>,
    pub max: Option<i64>,
    pub pretty: EnumFormat,
    pub parsable: EnumFormat,
}

impl EnumSpec {
    pub const fn enumeration(type_name: &'static str, values: &'static [EnumValue]) -> Self {
        Self {
            type_name,
            is_flags: false,
            values,
            aliases: &[],
            min: None,
            max: None,
            pretty: EnumFormat::NUMERIC_TEXT,
            parsable: EnumFormat::NUMERIC,
        }
    }

    pub const fn flags(type_name: &'static str, values: &'static [EnumValue]) -> Self {
        Self {
            is_flags: true,
            ..Self::enumeration(type_name, values)
        }
    }

    pub const fn range(mut self, min: i64, max: i64) -> Self {
        self.min = Some(min);
        self.max = Some(max);
        self
    }

    pub const fn aliases(mut self, aliases: &'static [EnumValue]) -> Self {
        self.aliases = aliases;
        self
    }

    pub const fn formats(mut self, pretty: EnumFormat, parsable: EnumFormat) -> Self {
        self.pretty = pretty;
        self.parsable = parsable;
        self
    }

    /// Named values inside the configured range.
    pub fn allowed(&self) -> impl Iterator<Item = &EnumValue> + '_ {
        let (min, max) = self.bounds();
        self.values
            .iter()
            .filter(move |v| v.value >= min && v.value <= max)
    }

    fn bounds(&self) -> (i64, i64) {
        match (self.min, self.max) {
            (Some(min), Some(max)) => (min, max),
            _ if self.is_flags => (0, u32::MAX as i64),
            _ => (i32::MIN as i64, i32::MAX as i64),
        }
    }

    /// Legal value names, for completion and error messages.
    pub fn values(&self) -> Vec<String> {
        self.allowed().map(|v| v.nick.to_string()).collect()
    }

    fn lookup(&self, token: &str) -> Option<i64> {
        self.values
            .iter()
            .chain(self.aliases.iter())
            .find(|v| v.nick == token)
            .map(|v| v.value)
    }

    fn parse_token(&self, token: &str) -> Option<i64> {
        self.lookup(token).or_else(|| {
            let (min, max) = self.bounds();
            parse_int(token, 0, min, max).ok()
        })
    }

    fn reject(&self, token: &str) -> Error {
        let valid = self.values().join(",");
        let reason = if self.is_flags {
            format!("invalid option '{}', use a combination of [{}]", token, valid)
        } else {
            format!("invalid option '{}', use one of [{}]", token, valid)
        };
        Error::invalid(token, reason)
    }

    /// Parse a value name, a number, or (for flags) a combination.
    pub fn parse(&self, text: &str) -> Result<i64> {
        let text = text.trim();
        let (min, max) = self.bounds();

        let value = if self.is_flags {
            let mut acc = 0i64;
            for token in text.split([',', '|', ' ', '\t']).filter(|t| !t.is_empty()) {
                acc |= self.parse_token(token).ok_or_else(|| self.reject(text))?;
            }
            acc
        } else {
            self.parse_token(text).ok_or_else(|| self.reject(text))?
        };

        if value < min || value > max {
            return Err(self.reject(text));
        }
        Ok(value)
    }

    /// Textual form of `value`: a nick, or flag names joined by ", ".
    fn to_text(&self, value: i64) -> String {
        if !self.is_flags {
            return self
                .values
                .iter()
                .find(|v| v.value == value)
                .map(|v| v.nick.to_string())
                .unwrap_or_else(|| value.to_string());
        }

        if value == 0 {
            return self
                .values
                .iter()
                .find(|v| v.value == 0)
                .map(|v| v.nick)
                .unwrap_or("none")
                .to_string();
        }

        let mut names = Vec::new();
        let mut rest = value;
        for v in self.values.iter().filter(|v| v.value != 0) {
            if value & v.value == v.value && rest & v.value != 0 {
                names.push(v.nick.to_string());
                rest &= !v.value;
            }
        }
        if rest != 0 {
            names.push(format!("0x{:x}", rest));
        }
        names.join(", ")
    }

    /// Render `value` according to the per-mode format.
    pub fn format(&self, value: i64, mode: OutputMode) -> String {
        let fmt = if mode.is_pretty() {
            self.pretty
        } else {
            self.parsable
        };

        let numeric = if fmt.hex {
            format!("0x{:x}", value)
        } else {
            value.to_string()
        };

        if !fmt.text {
            return numeric;
        }
        let text = self.to_text(value);
        if !fmt.numeric || text == numeric {
            return text;
        }
        format!("{} ({})", numeric, text)
    }
}
