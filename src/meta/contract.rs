// Network Manager - Value Contracts
// Copyright (C) 2026 Christos A. Daggas
// SPDX-License-Identifier: MIT

//! Value contracts: how a property's text maps onto its stored value.
//!
//! A contract is one of four kinds:
//!
//! - **Scalar**: a single value replaced on every set
//! - **List**: an ordered collection with add/remove semantics
//! - **OptionMap**: `key=value` pairs added and removed by key
//! - **Custom**: property-specific behaviour behind [`CustomContract`]

use std::collections::BTreeMap;

use crate::codecs::flags::{parse_dcb_flags, DCB_FLAG_ENABLE, DCB_FLAG_NAMES, DCB_FLAG_VALUES};
use crate::codecs::{
    complete_bool, format_bool, format_bytes, parse_bool, parse_bytes, EnumSpec, FlagTable,
    IntSpec, MacMode, TernaryStyle,
};
use crate::codecs::integer::parse_int;
use crate::codecs::ternary::TERNARY_DEFAULT;
use crate::env::{Environment, WarnLevel};
use crate::meta::property::PropertyDescriptor;
use crate::models::validation::validate_ip_for_family;
use crate::models::{AddressFamily, Item, OutputMode, Result, Value};
use crate::multilist::{add_items, match_allowed, parse_all, remove_index_or_value, AddPolicy};
use crate::parsers::address::format_addresses;
use crate::parsers::dcb::DCB_SLOTS;
use crate::parsers::link_watcher::format_watchers;
use crate::parsers::qdisc::{format_qdiscs, parse_qdiscs};
use crate::parsers::route::format_routes;
use crate::parsers::sriov::{add_vfs, format_vfs, parse_vfs, remove_vf};
use crate::parsers::vlan::{self, format_map};
use crate::parsers::{
    DcbArraySpec, IpAddress, IpRoute, LinkWatcher, OptionMapSpec, PriorityMapEntry,
    PriorityMapKind, Qdisc, SriovVf,
};
use crate::store::{ConfigStore, ConfigStoreExt};

/// Validates and normalizes one text value.
pub type TextValidator = fn(&str) -> Result<String>;

/// Runs before an enum value is stored; may emit advisories.
pub type PreSetHook = fn(&PropertyDescriptor, &Environment<'_>, &dyn ConfigStore, i64);

/// Largest MTU accepted.
const MTU_MAX: i64 = u32::MAX as i64;

// ============================================================================
// Scalars
// ============================================================================

/// Scalar value kinds.
#[derive(Debug, Clone, Copy)]
pub enum Scalar {
    /// A string, optionally restricted to `values` or run through `validate`.
    /// The validator takes precedence; `values` are then completion hints.
    /// Free text with neither is stored verbatim, so passwords and
    /// identities keep their surrounding whitespace. Blank text clears it.
    Text {
        validate: Option<TextValidator>,
        values: &'static [&'static str],
    },
    Bool,
    Int(IntSpec),
    /// Unsigned MTU where 0 is written `auto`.
    Mtu,
    Mac(MacMode),
    Bytes {
        legacy: bool,
    },
    /// Enumeration or flags; `names` overrides the pretty rendering.
    Enum {
        spec: EnumSpec,
        names: Option<FlagTable>,
        pre_set: Option<PreSetHook>,
    },
    Ternary(TernaryStyle),
    /// DCB 8-slot array; `flags_property` is the feature switch that must
    /// be enabled for the array to take effect.
    Dcb {
        spec: DcbArraySpec,
        flags_property: &'static str,
    },
    DcbFlags,
}

impl Scalar {
    pub const fn text() -> Self {
        Self::Text {
            validate: None,
            values: &[],
        }
    }

    pub const fn choice(values: &'static [&'static str]) -> Self {
        Self::Text {
            validate: None,
            values,
        }
    }

    pub const fn validated(validate: TextValidator) -> Self {
        Self::Text {
            validate: Some(validate),
            values: &[],
        }
    }

    pub const fn enumeration(spec: EnumSpec) -> Self {
        Self::Enum {
            spec,
            names: None,
            pre_set: None,
        }
    }

    pub fn default_value(&self) -> Value {
        match self {
            Self::Text { .. } | Self::Mac(_) => Value::Str(None),
            Self::Bool => Value::Bool(false),
            Self::Int(spec) => {
                let (min, max) = spec.bounds();
                Value::Int(0i64.clamp(min, max))
            }
            Self::Mtu | Self::Enum { .. } | Self::DcbFlags => Value::Int(0),
            Self::Bytes { .. } => Value::Bytes(None),
            Self::Ternary(_) => Value::Int(TERNARY_DEFAULT),
            Self::Dcb { .. } => Value::Slots([0; DCB_SLOTS]),
        }
    }

    pub fn parse(&self, text: &str) -> Result<Value> {
        match self {
            Self::Text { validate, values } => {
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    return Ok(Value::Str(None));
                }
                let stored = match validate {
                    Some(validate) => validate(trimmed)?,
                    None if !values.is_empty() => match_allowed(trimmed, values)?.to_string(),
                    None => text.to_string(),
                };
                Ok(Value::text(stored))
            }
            Self::Bool => parse_bool(text).map(Value::Bool),
            Self::Int(spec) => spec.parse(text).map(Value::Int),
            Self::Mtu => {
                let trimmed = text.trim();
                if trimmed == "auto" {
                    return Ok(Value::Int(0));
                }
                parse_int(trimmed, 10, 0, MTU_MAX).map(Value::Int)
            }
            Self::Mac(mode) => {
                if text.trim().is_empty() {
                    return Ok(Value::Str(None));
                }
                mode.parse(text).map(Value::text)
            }
            Self::Bytes { legacy } => parse_bytes(text, *legacy).map(Value::Bytes),
            Self::Enum { spec, .. } => spec.parse(text).map(Value::Int),
            Self::Ternary(style) => style.parse(text).map(Value::Int),
            Self::Dcb { spec, .. } => spec.parse(text).map(Value::Slots),
            Self::DcbFlags => parse_dcb_flags(text).map(|f| Value::Int(f as i64)),
        }
    }

    pub fn format(&self, value: &Value, mode: OutputMode) -> String {
        match (self, value) {
            (Self::Bool, Value::Bool(b)) => format_bool(*b, mode),
            (Self::Int(spec), Value::Int(v)) => spec.format(*v, mode),
            (Self::Mtu, Value::Int(0)) => "auto".to_string(),
            (Self::Mtu, Value::Int(v)) => v.to_string(),
            (Self::Bytes { .. }, Value::Bytes(bytes)) => {
                bytes.as_deref().map(format_bytes).unwrap_or_default()
            }
            (
                Self::Enum {
                    names: Some(names), ..
                },
                Value::Int(v),
            ) => names.format(*v as u32, mode),
            (Self::Enum { spec, .. }, Value::Int(v)) => spec.format(*v, mode),
            (Self::Ternary(style), Value::Int(v)) => style.format(*v, mode),
            (Self::Dcb { spec, .. }, Value::Slots(slots)) => spec.format(slots),
            (Self::DcbFlags, Value::Int(v)) => DCB_FLAG_NAMES.format(*v as u32, mode),
            (_, Value::Str(s)) => s.clone().unwrap_or_default(),
            (_, other) => format!("{:?}", other),
        }
    }

    /// Finite set of legal values, when there is one.
    pub fn values(&self) -> Vec<String> {
        match self {
            Self::Text { values, .. } => values.iter().map(|v| v.to_string()).collect(),
            Self::Bool => complete_bool(""),
            Self::Int(spec) => spec.alias_names(),
            Self::Mac(mode) => mode.values().iter().map(|v| v.to_string()).collect(),
            Self::Enum { spec, .. } => spec.values(),
            Self::Ternary(style) => style.values().iter().map(|v| v.to_string()).collect(),
            Self::DcbFlags => DCB_FLAG_VALUES.iter().map(|v| v.to_string()).collect(),
            Self::Mtu => vec!["auto".to_string()],
            Self::Bytes { .. } | Self::Dcb { .. } => Vec::new(),
        }
    }

    /// Completion candidates, for kinds whose vocabulary depends on the text.
    pub fn complete(&self, text: &str) -> Option<Vec<String>> {
        match self {
            Self::Bool => Some(complete_bool(text)),
            Self::Ternary(style) => Some(style.complete(text)),
            _ => None,
        }
    }

    /// Advisories emitted after a value was stored.
    fn after_set(&self, env: &Environment<'_>, store: &dyn ConfigStore, setting: &str) {
        if let Self::Dcb { flags_property, .. } = self {
            let flags = store.get_int(setting, flags_property).unwrap_or(0);
            if flags & DCB_FLAG_ENABLE as i64 == 0 {
                env.warn(
                    WarnLevel::Warn,
                    &format!(
                        "changes will have no effect until '{}' includes 1 (enabled)",
                        flags_property
                    ),
                );
            }
        }
    }
}

// ============================================================================
// Lists
// ============================================================================

/// Grammar of one list element.
#[derive(Debug, Clone, Copy)]
pub enum ItemCodec {
    /// Plain text, matched against the list's values or validated.
    Text { validate: Option<TextValidator> },
    Address(AddressFamily),
    Route(AddressFamily),
    /// DNS server address.
    Dns(AddressFamily),
    Watcher,
    Priority(PriorityMapKind),
    Vf,
    Qdisc,
}

/// List contract: item grammar, separators and merge policy.
#[derive(Debug, Clone, Copy)]
pub struct ListContract {
    pub item: ItemCodec,
    pub separators: &'static [char],
    pub add: AddPolicy,
    pub values: &'static [&'static str],
}

impl ListContract {
    pub const fn new(item: ItemCodec, separators: &'static [char]) -> Self {
        Self {
            item,
            separators,
            add: AddPolicy::Append,
            values: &[],
        }
    }

    pub const fn policy(mut self, add: AddPolicy) -> Self {
        self.add = add;
        self
    }

    pub const fn values(mut self, values: &'static [&'static str]) -> Self {
        self.values = values;
        self
    }

    /// Parse a single element.
    pub fn parse_item(&self, text: &str) -> Result<Item> {
        let text = text.trim();
        match self.item {
            ItemCodec::Text { validate } => {
                let value = match validate {
                    Some(validate) => validate(text)?,
                    None if !self.values.is_empty() => match_allowed(text, self.values)?.to_string(),
                    None => text.to_string(),
                };
                Ok(Item::Text(value))
            }
            ItemCodec::Address(family) => IpAddress::parse(family, text).map(Item::Address),
            ItemCodec::Route(family) => IpRoute::parse(family, text).map(Item::Route),
            ItemCodec::Dns(family) => {
                validate_ip_for_family(family, text).map(|ip| Item::Text(ip.to_string()))
            }
            ItemCodec::Watcher => LinkWatcher::parse(text).map(Item::Watcher),
            ItemCodec::Priority(kind) => {
                let mut entries = vlan::parse_map(kind, text, false)?;
                match (entries.pop(), entries.is_empty()) {
                    (Some(entry), true) => Ok(Item::Priority(entry)),
                    _ => Err(crate::models::Error::invalid(
                        text,
                        format!("invalid priority map '{}'", text),
                    )),
                }
            }
            ItemCodec::Vf => SriovVf::parse(text).map(Item::Vf),
            ItemCodec::Qdisc => Qdisc::parse(text).map(Item::Qdisc),
        }
    }

    /// Parse every element of `text`; fails as a whole on the first error.
    pub fn parse_items(&self, text: &str) -> Result<Vec<Item>> {
        match self.item {
            ItemCodec::Priority(kind) => Ok(vlan::parse_map(kind, text, false)?
                .into_iter()
                .map(Item::Priority)
                .collect()),
            ItemCodec::Vf => Ok(parse_vfs(text)?.into_iter().map(Item::Vf).collect()),
            ItemCodec::Qdisc => Ok(parse_qdiscs(text)?.into_iter().map(Item::Qdisc).collect()),
            _ => parse_all(text, self.separators, |item| self.parse_item(item)),
        }
    }

    pub fn add(&self, list: &mut Vec<Item>, text: &str) -> Result<()> {
        let items = self.parse_items(text)?;
        match self.item {
            ItemCodec::Priority(_) => {
                let mut entries = priority_entries(list);
                vlan::add_entries(&mut entries, unwrap_priority(items));
                *list = entries.into_iter().map(Item::Priority).collect();
            }
            ItemCodec::Vf => {
                let mut vfs = vf_entries(list);
                add_vfs(&mut vfs, items.iter().filter_map(as_vf).collect());
                *list = vfs.into_iter().map(Item::Vf).collect();
            }
            _ => add_items(list, items, self.add),
        }
        Ok(())
    }

    pub fn remove(&self, list: &mut Vec<Item>, text: &str) -> Result<()> {
        match self.item {
            ItemCodec::Priority(kind) => {
                let mut entries = priority_entries(list);
                vlan::remove_entries(kind, &mut entries, text)?;
                *list = entries.into_iter().map(Item::Priority).collect();
                Ok(())
            }
            ItemCodec::Vf => {
                let mut vfs = vf_entries(list);
                remove_vf(&mut vfs, text)?;
                *list = vfs.into_iter().map(Item::Vf).collect();
                Ok(())
            }
            _ => remove_index_or_value(list, text, |t| self.parse_item(t)),
        }
    }

    pub fn format(&self, list: &[Item], mode: OutputMode) -> String {
        match self.item {
            ItemCodec::Text { .. } | ItemCodec::Dns(_) => list
                .iter()
                .filter_map(Item::as_text)
                .collect::<Vec<_>>()
                .join(","),
            ItemCodec::Address(_) => format_addresses(
                &list
                    .iter()
                    .filter_map(|i| match i {
                        Item::Address(a) => Some(a.clone()),
                        _ => None,
                    })
                    .collect::<Vec<_>>(),
            ),
            ItemCodec::Route(_) => format_routes(
                &list
                    .iter()
                    .filter_map(|i| match i {
                        Item::Route(r) => Some(r.clone()),
                        _ => None,
                    })
                    .collect::<Vec<_>>(),
                mode,
            ),
            ItemCodec::Watcher => format_watchers(
                &list
                    .iter()
                    .filter_map(|i| match i {
                        Item::Watcher(w) => Some(w.clone()),
                        _ => None,
                    })
                    .collect::<Vec<_>>(),
            ),
            ItemCodec::Priority(_) => format_map(&priority_entries(list)),
            ItemCodec::Vf => format_vfs(&vf_entries(list)),
            ItemCodec::Qdisc => format_qdiscs(
                &list
                    .iter()
                    .filter_map(|i| match i {
                        Item::Qdisc(q) => Some(q.clone()),
                        _ => None,
                    })
                    .collect::<Vec<_>>(),
            ),
        }
    }
}

fn priority_entries(list: &[Item]) -> Vec<PriorityMapEntry> {
    list.iter()
        .filter_map(|i| match i {
            Item::Priority(p) => Some(*p),
            _ => None,
        })
        .collect()
}

fn unwrap_priority(items: Vec<Item>) -> Vec<PriorityMapEntry> {
    priority_entries(&items)
}

fn as_vf(item: &Item) -> Option<SriovVf> {
    match item {
        Item::Vf(vf) => Some(vf.clone()),
        _ => None,
    }
}

fn vf_entries(list: &[Item]) -> Vec<SriovVf> {
    list.iter().filter_map(as_vf).collect()
}

// ============================================================================
// Custom contracts
// ============================================================================

/// Property-specific behaviour that does not fit a generic kind.
pub trait CustomContract: Send + Sync {
    fn default_value(&self) -> Value;

    fn format(&self, prop: &PropertyDescriptor, value: &Value, mode: OutputMode) -> String;

    /// Parse `text` and write the result (and any side effects) to `store`.
    fn set(
        &self,
        prop: &PropertyDescriptor,
        env: &Environment<'_>,
        store: &mut dyn ConfigStore,
        text: &str,
    ) -> Result<()>;

    fn remove(
        &self,
        _prop: &PropertyDescriptor,
        _store: &mut dyn ConfigStore,
        _text: &str,
    ) -> Result<()> {
        Ok(())
    }

    /// Restore the default. May refuse when the current state forbids it.
    fn reset(&self, prop: &PropertyDescriptor, store: &mut dyn ConfigStore) -> Result<()> {
        store.reset_field(prop.setting, prop.name);
        Ok(())
    }

    fn values(&self) -> Vec<String> {
        Vec::new()
    }

    fn is_default(&self, value: &Value, default: &Value) -> bool {
        value == default
    }
}

// ============================================================================
// Contract
// ============================================================================

/// The value contract bound to a property.
#[derive(Clone, Copy)]
pub enum ValueContract {
    Scalar(Scalar),
    List(ListContract),
    OptionMap(OptionMapSpec),
    Custom(&'static dyn CustomContract),
}

impl std::fmt::Debug for ValueContract {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Scalar(s) => f.debug_tuple("Scalar").field(s).finish(),
            Self::List(l) => f.debug_tuple("List").field(l).finish(),
            Self::OptionMap(_) => f.write_str("OptionMap"),
            Self::Custom(_) => f.write_str("Custom"),
        }
    }
}

impl ValueContract {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Scalar(_) => "scalar",
            Self::List(_) => "list",
            Self::OptionMap(_) => "option-map",
            Self::Custom(_) => "custom",
        }
    }

    pub fn default_value(&self) -> Value {
        match self {
            Self::Scalar(s) => s.default_value(),
            Self::List(_) => Value::empty_list(),
            Self::OptionMap(_) => Value::empty_map(),
            Self::Custom(c) => c.default_value(),
        }
    }

    pub fn format(&self, prop: &PropertyDescriptor, value: &Value, mode: OutputMode) -> String {
        match (self, value) {
            (Self::Scalar(s), v) => s.format(v, mode),
            (Self::List(l), Value::List(items)) => l.format(items, mode),
            (Self::OptionMap(spec), Value::Map(map)) => spec.format(map),
            (Self::Custom(c), v) => c.format(prop, v, mode),
            (_, other) => format!("{:?}", other),
        }
    }

    pub fn values(&self) -> Vec<String> {
        match self {
            Self::Scalar(s) => s.values(),
            Self::List(l) => l.values.iter().map(|v| v.to_string()).collect(),
            Self::OptionMap(spec) => spec
                .valid_keys
                .map(|keys| keys.iter().map(|k| k.to_string()).collect())
                .unwrap_or_default(),
            Self::Custom(c) => c.values(),
        }
    }

    /// Parse `text` and store the result.
    pub(crate) fn apply(
        &self,
        prop: &PropertyDescriptor,
        env: &Environment<'_>,
        store: &mut dyn ConfigStore,
        text: &str,
    ) -> Result<()> {
        match self {
            Self::Scalar(scalar) => {
                let value = scalar.parse(text)?;
                if let (Scalar::Enum { pre_set: Some(hook), .. }, Value::Int(v)) = (scalar, &value) {
                    hook(prop, env, &*store, *v);
                }
                store.set_field(prop.setting, prop.name, value)?;
                scalar.after_set(env, &*store, prop.setting);
                Ok(())
            }
            Self::List(contract) => {
                let mut list = current_list(prop, &*store);
                contract.add(&mut list, text)?;
                store.set_field(prop.setting, prop.name, Value::List(list))
            }
            Self::OptionMap(spec) => {
                let mut map = current_map(prop, &*store);
                spec.add(&mut map, text)?;
                store.set_field(prop.setting, prop.name, Value::Map(map))
            }
            Self::Custom(custom) => custom.set(prop, env, store, text),
        }
    }

    /// Remove an element from a list or map; scalars have nothing to remove.
    pub(crate) fn remove(
        &self,
        prop: &PropertyDescriptor,
        store: &mut dyn ConfigStore,
        text: &str,
    ) -> Result<()> {
        match self {
            Self::Scalar(_) => Ok(()),
            Self::List(contract) => {
                let mut list = current_list(prop, &*store);
                contract.remove(&mut list, text)?;
                store.set_field(prop.setting, prop.name, Value::List(list))
            }
            Self::OptionMap(spec) => {
                let mut map = current_map(prop, &*store);
                spec.remove(&mut map, text)?;
                store.set_field(prop.setting, prop.name, Value::Map(map))
            }
            Self::Custom(custom) => custom.remove(prop, store, text),
        }
    }

    /// Restore the compile-time default without parsing anything.
    pub(crate) fn reset(&self, prop: &PropertyDescriptor, store: &mut dyn ConfigStore) -> Result<()> {
        match self {
            Self::Custom(custom) => custom.reset(prop, store),
            _ => {
                store.reset_field(prop.setting, prop.name);
                Ok(())
            }
        }
    }

    pub fn is_default(&self, value: &Value, default: &Value) -> bool {
        match self {
            Self::Custom(c) => c.is_default(value, default),
            _ => value == default,
        }
    }
}

fn current_list(prop: &PropertyDescriptor, store: &dyn ConfigStore) -> Vec<Item> {
    store.get_list(prop.setting, prop.name).to_vec()
}

fn current_map(prop: &PropertyDescriptor, store: &dyn ConfigStore) -> BTreeMap<String, String> {
    store
        .get_field(prop.setting, prop.name)
        .and_then(Value::as_map)
        .cloned()
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codecs::integer::{IntAlias, IntKind};
    use crate::multilist::{COMMA, LIST_SEPARATORS};

    const PRIORITY: Scalar = Scalar::Int(
        IntSpec::new(IntKind::Int32)
            .range(-1, 7)
            .aliases(&[IntAlias {
                nick: "unset",
                value: -1,
            }]),
    );

    #[test]
    fn test_text_choice() {
        let s = Scalar::choice(&["open", "shared", "leap"]);
        assert_eq!(s.parse("sh").unwrap(), Value::text("shared"));
        assert_eq!(s.parse("  ").unwrap(), Value::Str(None));
        assert!(s.parse("wpa").is_err());
    }

    #[test]
    fn test_free_text_kept_verbatim() {
        let s = Scalar::text();
        assert_eq!(s.parse(" pass phrase ").unwrap(), Value::text(" pass phrase "));
        assert_eq!(s.parse(" \t").unwrap(), Value::Str(None));

        let s = Scalar::choice(&["open", "shared"]);
        assert_eq!(s.parse(" open ").unwrap(), Value::text("open"));
    }

    #[test]
    fn test_int_alias_pretty() {
        let v = PRIORITY.parse("unset").unwrap();
        assert_eq!(v, Value::Int(-1));
        assert_eq!(PRIORITY.format(&v, OutputMode::Pretty), "-1 (unset)");
        assert_eq!(PRIORITY.format(&v, OutputMode::Parsable), "-1");
        assert_eq!(PRIORITY.default_value(), Value::Int(0));
    }

    #[test]
    fn test_mtu() {
        assert_eq!(Scalar::Mtu.parse("auto").unwrap(), Value::Int(0));
        assert_eq!(Scalar::Mtu.format(&Value::Int(0), OutputMode::Parsable), "auto");
        assert_eq!(Scalar::Mtu.format(&Value::Int(1500), OutputMode::Pretty), "1500");
        assert!(Scalar::Mtu.parse("-1").is_err());
    }

    #[test]
    fn test_dcb_flags_render() {
        let v = Scalar::DcbFlags.parse("enable, willing").unwrap();
        assert_eq!(v, Value::Int(5));
        assert_eq!(
            Scalar::DcbFlags.format(&v, OutputMode::Pretty),
            "5 (enabled, willing)"
        );
        assert_eq!(Scalar::DcbFlags.format(&Value::Int(0), OutputMode::Pretty), "0 (disabled)");
    }

    #[test]
    fn test_list_text_with_values() {
        let list = ListContract::new(ItemCodec::Text { validate: None }, LIST_SEPARATORS)
            .values(&["wpa", "rsn"]);
        let mut items = Vec::new();
        list.add(&mut items, "wpa rsn").unwrap();
        assert_eq!(list.format(&items, OutputMode::Parsable), "wpa,rsn");
        assert!(list.add(&mut items, "wep").is_err());
        list.remove(&mut items, "rsn").unwrap();
        assert_eq!(list.format(&items, OutputMode::Parsable), "wpa");
    }

    #[test]
    fn test_list_dns() {
        let list = ListContract::new(ItemCodec::Dns(AddressFamily::V4), LIST_SEPARATORS);
        let mut items = Vec::new();
        list.add(&mut items, "8.8.8.8, 1.1.1.1").unwrap();
        let err = list.add(&mut items, "9.9.9.9 ::1").unwrap_err();
        assert_eq!(err.to_string(), "invalid IPv4 address '::1'");
        assert_eq!(items.len(), 2);
        assert!(list.remove(&mut items, "fe80::1").is_err());
        list.remove(&mut items, "0").unwrap();
        assert_eq!(list.format(&items, OutputMode::Parsable), "1.1.1.1");
    }

    #[test]
    fn test_list_priority_map() {
        let list = ListContract::new(ItemCodec::Priority(PriorityMapKind::Ingress), COMMA);
        let mut items = Vec::new();
        list.add(&mut items, "1:2,3:4").unwrap();
        list.add(&mut items, "1:9").unwrap();
        assert_eq!(list.format(&items, OutputMode::Parsable), "1:9,3:4");
        list.remove(&mut items, "3:*").unwrap();
        assert_eq!(list.format(&items, OutputMode::Parsable), "1:9");
    }

    #[test]
    fn test_list_addresses_atomic() {
        let list = ListContract::new(ItemCodec::Address(AddressFamily::V4), COMMA);
        let mut items = Vec::new();
        assert!(list.add(&mut items, "10.0.0.1/24, bogus").is_err());
        assert!(items.is_empty());
        list.add(&mut items, "10.0.0.1/24, 10.0.0.2").unwrap();
        assert_eq!(
            list.format(&items, OutputMode::Parsable),
            "10.0.0.1/24, 10.0.0.2/32"
        );
    }
}
