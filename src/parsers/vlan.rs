// Network Manager - VLAN Priority Maps
// Copyright (C) 2026 Christos A. Daggas
// SPDX-License-Identifier: MIT

//! VLAN ingress/egress priority maps: `from:to[,from:to]...`.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::{Error, Result};
use crate::multilist::{parse_index, split_items, COMMA};

/// Highest 802.1p priority.
const MAX_8021P_PRIO: u32 = 7;

/// Direction of a priority map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriorityMapKind {
    Ingress,
    Egress,
}

impl PriorityMapKind {
    /// Upper bounds of the `from` and `to` sides.
    fn bounds(&self) -> (u32, u32) {
        match self {
            Self::Ingress => (MAX_8021P_PRIO, u32::MAX),
            Self::Egress => (u32::MAX, MAX_8021P_PRIO),
        }
    }
}

/// One `from:to` mapping. A missing `to` is a wildcard, legal on removal only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriorityMapEntry {
    pub from: u32,
    pub to: Option<u32>,
}

impl PriorityMapEntry {
    fn matches(&self, other: &PriorityMapEntry) -> bool {
        self.from == other.from && (other.to.is_none() || self.to == other.to)
    }
}

impl fmt::Display for PriorityMapEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to {
            Some(to) => write!(f, "{}:{}", self.from, to),
            None => write!(f, "{}:*", self.from),
        }
    }
}

fn parse_entry(kind: PriorityMapKind, item: &str, allow_wildcard: bool) -> Option<PriorityMapEntry> {
    let (max_from, max_to) = kind.bounds();
    let (from, to) = item.trim().split_once(':')?;

    let from = from.trim().parse::<u32>().ok().filter(|v| *v <= max_from)?;
    let to = match to.trim() {
        "*" if allow_wildcard => None,
        t => Some(t.parse::<u32>().ok().filter(|v| *v <= max_to)?),
    };
    Some(PriorityMapEntry { from, to })
}

/// Parse a whole map; fails without partial results on the first bad entry.
/// Blank text yields no entries.
pub fn parse_map(
    kind: PriorityMapKind,
    text: &str,
    allow_wildcard: bool,
) -> Result<Vec<PriorityMapEntry>> {
    split_items(text, COMMA)
        .into_iter()
        .filter(|item| !item.trim().is_empty())
        .map(|item| {
            parse_entry(kind, item, allow_wildcard)
                .ok_or_else(|| Error::invalid(item, format!("invalid priority map '{}'", item.trim())))
        })
        .collect()
}

/// Add entries, replacing any mapping with the same `from`.
pub fn add_entries(map: &mut Vec<PriorityMapEntry>, entries: Vec<PriorityMapEntry>) {
    for entry in entries {
        match map.iter_mut().find(|e| e.from == entry.from) {
            Some(existing) => *existing = entry,
            None => map.push(entry),
        }
    }
}

/// Remove by index, or every entry matching `from:to` (`to` may be `*`).
pub fn remove_entries(kind: PriorityMapKind, map: &mut Vec<PriorityMapEntry>, text: &str) -> Result<()> {
    if let Some(idx) = parse_index(text, map.len()) {
        map.remove(idx);
        return Ok(());
    }
    for pattern in parse_map(kind, text, true)? {
        map.retain(|e| !e.matches(&pattern));
    }
    Ok(())
}

/// Render a map as `from:to,from:to`.
pub fn format_map(map: &[PriorityMapEntry]) -> String {
    map.iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bounds() {
        let map = parse_map(PriorityMapKind::Ingress, "1:2,7:100000", false).unwrap();
        assert_eq!(format_map(&map), "1:2,7:100000");

        let err = parse_map(PriorityMapKind::Ingress, "8:1", false).unwrap_err();
        assert_eq!(err.to_string(), "invalid priority map '8:1'");
        assert!(parse_map(PriorityMapKind::Egress, "100:8", false).is_err());
        assert!(parse_map(PriorityMapKind::Egress, "100:7", false).is_ok());
    }

    #[test]
    fn test_blank_map_is_empty() {
        assert!(parse_map(PriorityMapKind::Ingress, "", false).unwrap().is_empty());
        assert!(parse_map(PriorityMapKind::Egress, "  ", false).unwrap().is_empty());
    }

    #[test]
    fn test_wildcard_only_on_remove() {
        assert!(parse_map(PriorityMapKind::Ingress, "1:*", false).is_err());

        let mut map = parse_map(PriorityMapKind::Ingress, "1:2,3:4", false).unwrap();
        remove_entries(PriorityMapKind::Ingress, &mut map, "1:*").unwrap();
        assert_eq!(format_map(&map), "3:4");
    }

    #[test]
    fn test_add_replaces_same_from() {
        let mut map = parse_map(PriorityMapKind::Egress, "1:2,3:4", false).unwrap();
        add_entries(&mut map, parse_map(PriorityMapKind::Egress, "1:5", false).unwrap());
        assert_eq!(format_map(&map), "1:5,3:4");
    }

    #[test]
    fn test_remove_index_and_exact() {
        let mut map = parse_map(PriorityMapKind::Egress, "1:2,3:4,5:6", false).unwrap();
        remove_entries(PriorityMapKind::Egress, &mut map, "0").unwrap();
        assert_eq!(format_map(&map), "3:4,5:6");
        remove_entries(PriorityMapKind::Egress, &mut map, "5:1").unwrap();
        assert_eq!(format_map(&map), "3:4,5:6");
        remove_entries(PriorityMapKind::Egress, &mut map, "5:6").unwrap();
        assert_eq!(format_map(&map), "3:4");
    }
}
