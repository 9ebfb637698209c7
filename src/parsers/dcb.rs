// Network Manager - DCB Priority Arrays
// Copyright (C) 2026 Christos A. Daggas
// SPDX-License-Identifier: MIT

//! Data Center Bridging arrays: exactly eight comma-separated numbers, one
//! per user priority.

use crate::codecs::integer::parse_int;
use crate::models::{Error, Result};

/// Number of user priorities.
pub const DCB_SLOTS: usize = 8;

/// Value constraints of one DCB array property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DcbArraySpec {
    /// Largest ordinary value.
    pub max: u32,
    /// A single out-of-range value that is also accepted (e.g. 15 = "none").
    pub other: Option<u32>,
    /// Whether the values are percentages that must total 100.
    pub percent: bool,
}

impl DcbArraySpec {
    pub const fn new(max: u32) -> Self {
        Self {
            max,
            other: None,
            percent: false,
        }
    }

    pub const fn other(mut self, other: u32) -> Self {
        self.other = Some(other);
        self
    }

    pub const fn percent(mut self) -> Self {
        self.percent = true;
        self
    }

    /// One-bit arrays are rendered as 0/1 flags.
    pub fn is_bool(&self) -> bool {
        self.max == 1
    }

    fn reject(&self, token: &str) -> Error {
        let reason = match self.other {
            Some(other) => format!(
                "'{}' not a number between 0 and {} (inclusive) or {}",
                token, self.max, other
            ),
            None => format!("'{}' not a number between 0 and {} (inclusive)", token, self.max),
        };
        Error::invalid(token, reason)
    }

    pub fn parse(&self, text: &str) -> Result<[u32; DCB_SLOTS]> {
        let items: Vec<&str> = text.split(',').map(str::trim).collect();
        if items.len() != DCB_SLOTS {
            return Err(Error::invalid(
                text,
                "must contain 8 comma-separated numbers",
            ));
        }

        let upper = self.other.unwrap_or(self.max).max(self.max);
        let mut slots = [0u32; DCB_SLOTS];
        for (slot, item) in slots.iter_mut().zip(items) {
            let value = parse_int(item, 10, 0, upper as i64).map_err(|_| self.reject(item))? as u32;
            if value > self.max && Some(value) != self.other {
                return Err(self.reject(item));
            }
            *slot = value;
        }

        if self.percent && slots.iter().sum::<u32>() != 100 {
            return Err(Error::invalid(
                text,
                "bandwidth percentages must total 100%",
            ));
        }
        Ok(slots)
    }

    pub fn format(&self, slots: &[u32; DCB_SLOTS]) -> String {
        slots
            .iter()
            .map(|v| match (self.is_bool(), *v) {
                (true, 0) => "0".to_string(),
                (true, _) => "1".to_string(),
                (false, v) => v.to_string(),
            })
            .collect::<Vec<_>>()
            .join(",")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GROUP_ID: DcbArraySpec = DcbArraySpec::new(7).other(15);
    const BANDWIDTH: DcbArraySpec = DcbArraySpec::new(100).percent();
    const FLOW_CONTROL: DcbArraySpec = DcbArraySpec::new(1);

    #[test]
    fn test_slot_count() {
        let err = GROUP_ID.parse("1,2,3").unwrap_err();
        assert_eq!(err.to_string(), "must contain 8 comma-separated numbers");
    }

    #[test]
    fn test_other_value() {
        let slots = GROUP_ID.parse("0, 1, 2, 3, 4, 5, 6, 15").unwrap();
        assert_eq!(GROUP_ID.format(&slots), "0,1,2,3,4,5,6,15");

        let err = GROUP_ID.parse("0,1,2,3,4,5,6,9").unwrap_err();
        assert_eq!(
            err.to_string(),
            "'9' not a number between 0 and 7 (inclusive) or 15"
        );
    }

    #[test]
    fn test_percent_total() {
        assert!(BANDWIDTH.parse("10,10,10,10,10,10,20,20").is_ok());
        let err = BANDWIDTH.parse("10,10,10,10,10,10,20,10").unwrap_err();
        assert_eq!(err.to_string(), "bandwidth percentages must total 100%");

        let slots = BANDWIDTH.parse("10,10,10,10,10,10,10,30").unwrap();
        assert_eq!(slots, [10, 10, 10, 10, 10, 10, 10, 30]);
        assert!(BANDWIDTH.parse("10,10,10,10,10,10,10,20").is_err());
    }

    #[test]
    fn test_bool_array() {
        let slots = FLOW_CONTROL.parse("1,0,0,1,0,0,0,0").unwrap();
        assert_eq!(FLOW_CONTROL.format(&slots), "1,0,0,1,0,0,0,0");
        let err = FLOW_CONTROL.parse("2,0,0,0,0,0,0,0").unwrap_err();
        assert_eq!(err.to_string(), "'2' not a number between 0 and 1 (inclusive)");
    }
}
