// Network Manager - Property Values
// Copyright (C) 2026 Christos A. Daggas
// SPDX-License-Identifier: MIT

//! Typed property values as held by a configuration store.
//!
//! Every editable field is represented by one [`Value`] variant. List-valued
//! fields carry [`Item`]s so the list policy can add and remove elements
//! without knowing their concrete grammar.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::parsers::{IpAddress, IpRoute, LinkWatcher, PriorityMapEntry, Qdisc, SriovVf};

/// Text rendering mode for property values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// Machine-oriented form that parses back to the same value.
    #[default]
    Parsable,
    /// Human-oriented form, possibly more verbose.
    Pretty,
}

impl OutputMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Parsable => "parsable",
            Self::Pretty => "pretty",
        }
    }

    pub fn is_pretty(&self) -> bool {
        matches!(self, Self::Pretty)
    }
}

/// DNS resolver options with an explicit "never set" state.
///
/// An unset list lets the resolver apply its defaults, while an explicitly
/// empty list means "no options".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(tag = "state", content = "options", rename_all = "lowercase")]
pub enum DnsOptions {
    #[default]
    Unset,
    Empty,
    Populated(Vec<String>),
}

impl DnsOptions {
    /// Build from a list, normalizing an empty list to [`DnsOptions::Empty`].
    pub fn from_items(items: Vec<String>) -> Self {
        if items.is_empty() {
            Self::Empty
        } else {
            Self::Populated(items)
        }
    }

    /// Options currently held (empty for both unset and empty).
    pub fn items(&self) -> &[String] {
        match self {
            Self::Populated(items) => items,
            _ => &[],
        }
    }

    pub fn is_set(&self) -> bool {
        !matches!(self, Self::Unset)
    }

    /// Append an option, moving an existing equal option to the end.
    pub fn add(&mut self, option: &str) {
        let mut items = self.items().to_vec();
        items.retain(|o| o != option);
        items.push(option.to_string());
        *self = Self::from_items(items);
    }

    /// Remove the option at `index`. Returns false if out of bounds.
    pub fn remove_index(&mut self, index: usize) -> bool {
        let mut items = self.items().to_vec();
        if index >= items.len() {
            return false;
        }
        items.remove(index);
        *self = Self::from_items(items);
        true
    }

    /// Remove every option equal to `option`.
    pub fn remove_value(&mut self, option: &str) {
        if !self.is_set() {
            return;
        }
        let mut items = self.items().to_vec();
        items.retain(|o| o != option);
        *self = Self::from_items(items);
    }
}

/// One element of a list-valued property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "item", rename_all = "snake_case")]
pub enum Item {
    Text(String),
    Address(IpAddress),
    Route(IpRoute),
    Watcher(LinkWatcher),
    Priority(PriorityMapEntry),
    Vf(SriovVf),
    Qdisc(Qdisc),
}

impl Item {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }
}

/// A typed property value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Value {
    Bool(bool),
    Int(i64),
    Str(Option<String>),
    Bytes(Option<Vec<u8>>),
    List(Vec<Item>),
    Map(BTreeMap<String, String>),
    /// Eight per-priority slots (DCB).
    Slots([u32; 8]),
    DnsOptions(DnsOptions),
}

impl Value {
    /// Shorthand for a present string value.
    pub fn text(s: impl Into<String>) -> Self {
        Self::Str(Some(s.into()))
    }

    pub fn empty_list() -> Self {
        Self::List(Vec::new())
    }

    pub fn empty_map() -> Self {
        Self::Map(BTreeMap::new())
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// String content, `None` for an absent string or another variant.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(Some(s)) => Some(s),
            _ => None,
        }
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Self::Bytes(Some(b)) => Some(b),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Item]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&BTreeMap<String, String>> {
        match self {
            Self::Map(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_slots(&self) -> Option<&[u32; 8]> {
        match self {
            Self::Slots(slots) => Some(slots),
            _ => None,
        }
    }

    pub fn as_dns_options(&self) -> Option<&DnsOptions> {
        match self {
            Self::DnsOptions(opts) => Some(opts),
            _ => None,
        }
    }

    /// Variant name, used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Str(_) => "string",
            Self::Bytes(_) => "bytes",
            Self::List(_) => "list",
            Self::Map(_) => "map",
            Self::Slots(_) => "slots",
            Self::DnsOptions(_) => "dns-options",
        }
    }

    /// Check whether two values have the same variant.
    pub fn same_kind(&self, other: &Value) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }
}
