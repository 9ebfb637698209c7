// Network Manager - Ternary Codec
// Copyright (C) 2026 Christos A. Daggas
// SPDX-License-Identifier: MIT

//! Three-state values stored as -1 (default), 0 (false) and 1 (true).

use crate::models::{Error, OutputMode, Result};

pub const TERNARY_DEFAULT: i64 = -1;
pub const TERNARY_FALSE: i64 = 0;
pub const TERNARY_TRUE: i64 = 1;

/// Vocabulary of a ternary property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TernaryStyle {
    /// `yes`/`no`/`unknown`, as used by metered.
    YesNo,
    /// `on`/`off`/`ignore`, as used by ethtool features.
    OnOff,
}

impl TernaryStyle {
    pub fn parse(&self, text: &str) -> Result<i64> {
        let token = text.trim();
        let any = |set: &[&str]| set.iter().any(|s| s.eq_ignore_ascii_case(token));

        match self {
            Self::YesNo => {
                if any(&["yes", "true", "on", "1"]) {
                    Ok(TERNARY_TRUE)
                } else if any(&["no", "false", "off", "0"]) {
                    Ok(TERNARY_FALSE)
                } else if any(&["unknown", "default", "-1"]) {
                    Ok(TERNARY_DEFAULT)
                } else {
                    Err(Error::invalid(
                        text,
                        format!("'{}' is not valid; use 'yes', 'no', or 'unknown'", token),
                    ))
                }
            }
            Self::OnOff => {
                if ["1", "yes", "true", "on"].contains(&token) {
                    Ok(TERNARY_TRUE)
                } else if ["0", "no", "false", "off"].contains(&token) {
                    Ok(TERNARY_FALSE)
                } else if ["", "ignore", "default"].contains(&token) {
                    Ok(TERNARY_DEFAULT)
                } else {
                    Err(Error::invalid(
                        text,
                        format!("'{}' is not valid; use 'on', 'off', or 'ignore'", token),
                    ))
                }
            }
        }
    }

    /// Render a stored value. Unset ethtool features render empty.
    pub fn format(&self, value: i64, _mode: OutputMode) -> String {
        match (self, value) {
            (Self::YesNo, TERNARY_TRUE) => "yes".to_string(),
            (Self::YesNo, TERNARY_FALSE) => "no".to_string(),
            (Self::YesNo, _) => "unknown".to_string(),
            (Self::OnOff, TERNARY_TRUE) => "on".to_string(),
            (Self::OnOff, TERNARY_FALSE) => "off".to_string(),
            (Self::OnOff, _) => String::new(),
        }
    }

    pub fn values(&self) -> &'static [&'static str] {
        match self {
            Self::YesNo => &["yes", "no", "unknown"],
            Self::OnOff => &["on", "off", "ignore"],
        }
    }

    /// Completion candidates; empty text offers the short list.
    pub fn complete(&self, text: &str) -> Vec<String> {
        const ON_OFF_ALL: [&str; 10] = [
            "true", "false", "1", "0", "yes", "no", "default", "on", "off", "ignore",
        ];
        match self {
            Self::OnOff if !text.is_empty() => ON_OFF_ALL.iter().map(|s| s.to_string()).collect(),
            _ => self.values().iter().map(|s| s.to_string()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metered() {
        assert_eq!(TernaryStyle::YesNo.parse("YES").unwrap(), 1);
        assert_eq!(TernaryStyle::YesNo.parse("off").unwrap(), 0);
        assert_eq!(TernaryStyle::YesNo.parse("unknown").unwrap(), -1);
        assert_eq!(TernaryStyle::YesNo.format(-1, OutputMode::Pretty), "unknown");
        assert!(TernaryStyle::YesNo.parse("perhaps").is_err());
    }

    #[test]
    fn test_ethtool() {
        assert_eq!(TernaryStyle::OnOff.parse("on").unwrap(), 1);
        assert_eq!(TernaryStyle::OnOff.parse(" ignore ").unwrap(), -1);
        assert_eq!(TernaryStyle::OnOff.parse("").unwrap(), -1);
        let err = TernaryStyle::OnOff.parse("maybe").unwrap_err();
        assert_eq!(err.to_string(), "'maybe' is not valid; use 'on', 'off', or 'ignore'");
        assert_eq!(TernaryStyle::OnOff.format(-1, OutputMode::Parsable), "");
    }

    #[test]
    fn test_complete() {
        assert_eq!(TernaryStyle::OnOff.complete(""), vec!["on", "off", "ignore"]);
        assert_eq!(TernaryStyle::OnOff.complete("o").len(), 10);
    }
}
