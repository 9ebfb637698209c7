// Network Manager - Custom Contracts
// Copyright (C) 2026 Christos A. Daggas
// SPDX-License-Identifier: MIT

//! Properties whose behaviour does not fit a generic contract, and the
//! context-aware completers.

use uuid::Uuid;

use crate::codecs::integer::parse_int;
use crate::env::{CompletionContext, Environment, WarnLevel};
use crate::meta::contract::CustomContract;
use crate::meta::property::PropertyDescriptor;
use crate::meta::registry::registry;
use crate::models::validation::{is_valid_wep_key, is_valid_wifi_channel, validate_ssid, WepKeyType};
use crate::models::{DnsOptions, Error, OutputMode, Result, Value};
use crate::multilist::{match_allowed, parse_all, parse_index, LIST_SEPARATORS};
use crate::store::{ConfigStore, ConfigStoreExt};

fn plain_text(value: &Value) -> String {
    value.as_str().unwrap_or_default().to_string()
}

// ============================================================================
// Connection type
// ============================================================================

/// `connection.type`: fixed once the connection has a UUID; setting it
/// assigns one and creates the mandatory settings of the type.
pub struct ConnectionType;

pub static CONNECTION_TYPE: ConnectionType = ConnectionType;

fn ensure_type_mutable(prop: &PropertyDescriptor, store: &dyn ConfigStore) -> Result<()> {
    if store.get_str(prop.setting, "uuid").is_some() {
        return Err(Error::Immutable {
            property: prop.name.to_string(),
            reason: "Can not change the connection type".to_string(),
        });
    }
    Ok(())
}

impl CustomContract for ConnectionType {
    fn default_value(&self) -> Value {
        Value::Str(None)
    }

    fn format(&self, _prop: &PropertyDescriptor, value: &Value, _mode: OutputMode) -> String {
        plain_text(value)
    }

    fn set(
        &self,
        prop: &PropertyDescriptor,
        _env: &Environment<'_>,
        store: &mut dyn ConfigStore,
        text: &str,
    ) -> Result<()> {
        ensure_type_mutable(prop, &*store)?;

        let reg = registry();
        let names = reg.connection_type_names();
        let setting = reg.setting(match_allowed(text, &names)?)?;

        store.set_field(prop.setting, prop.name, Value::text(setting.name))?;
        store.set_field(prop.setting, "uuid", Value::text(Uuid::new_v4().to_string()))?;
        for part in setting.valid_parts.iter().filter(|p| p.mandatory) {
            store.ensure_setting(part.setting);
        }
        Ok(())
    }

    fn reset(&self, prop: &PropertyDescriptor, store: &mut dyn ConfigStore) -> Result<()> {
        ensure_type_mutable(prop, &*store)?;
        store.reset_field(prop.setting, prop.name);
        Ok(())
    }

    fn values(&self) -> Vec<String> {
        registry()
            .connection_type_names()
            .into_iter()
            .map(str::to_string)
            .collect()
    }
}

// ============================================================================
// WEP keys
// ============================================================================

/// One of the four WEP key slots. Setting a key also records its type and
/// selects the slot as the transmit key.
pub struct WepKey(pub u8);

pub static WEP_KEYS: [WepKey; 4] = [WepKey(0), WepKey(1), WepKey(2), WepKey(3)];

impl CustomContract for WepKey {
    fn default_value(&self) -> Value {
        Value::Str(None)
    }

    fn format(&self, _prop: &PropertyDescriptor, value: &Value, _mode: OutputMode) -> String {
        plain_text(value)
    }

    fn set(
        &self,
        prop: &PropertyDescriptor,
        env: &Environment<'_>,
        store: &mut dyn ConfigStore,
        text: &str,
    ) -> Result<()> {
        let stored_type =
            WepKeyType::from_i64(store.get_int(prop.setting, "wep-key-type").unwrap_or(0));

        let mut guessed = if is_valid_wep_key(text, WepKeyType::Key) {
            WepKeyType::Key
        } else if is_valid_wep_key(text, WepKeyType::Passphrase) {
            WepKeyType::Passphrase
        } else {
            return Err(Error::invalid(text, format!("'{}' is not valid", text)));
        };

        if stored_type != WepKeyType::Unknown && stored_type != guessed {
            if !is_valid_wep_key(text, stored_type) {
                return Err(Error::invalid(
                    text,
                    format!(
                        "'{}' not compatible with wep-key-type '{}', please change the key or set the right wep-key-type first.",
                        text,
                        stored_type.describe()
                    ),
                ));
            }
            guessed = stored_type;
        }

        let index = i64::from(self.0);
        let previous = store.get_int(prop.setting, "wep-tx-keyidx").unwrap_or(0);
        env.warn(
            WarnLevel::Info,
            &format!("WEP key is guessed to be of '{}'", guessed.describe()),
        );
        if index != previous {
            env.warn(WarnLevel::Info, &format!("WEP key index set to '{}'", index));
        }

        store.set_field(prop.setting, prop.name, Value::text(text))?;
        store.set_field(prop.setting, "wep-key-type", Value::Int(guessed as i64))?;
        if index != previous {
            store.set_field(prop.setting, "wep-tx-keyidx", Value::Int(index))?;
        }
        Ok(())
    }
}

// ============================================================================
// DNS options
// ============================================================================

/// Resolver options accepted in `dns-options`; the numeric ones take `:N`.
pub const DNS_OPTION_NAMES: &[&str] = &[
    "attempts",
    "debug",
    "edns0",
    "inet6",
    "ip6-bytestring",
    "ip6-dotint",
    "ndots",
    "no-check-names",
    "no-ip6-dotint",
    "no-reload",
    "no-tld-query",
    "rotate",
    "single-request",
    "single-request-reopen",
    "timeout",
    "trust-ad",
    "use-vc",
];

const DNS_NUMERIC_OPTIONS: &[&str] = &["attempts", "ndots", "timeout"];

fn validate_dns_option(text: &str) -> Result<String> {
    let invalid = || Error::invalid(text, format!("'{}' is not a valid DNS option", text));
    let (name, arg) = match text.split_once(':') {
        Some((name, arg)) => (name, Some(arg)),
        None => (text, None),
    };
    if !DNS_OPTION_NAMES.contains(&name) {
        return Err(invalid());
    }
    let numeric = DNS_NUMERIC_OPTIONS.contains(&name);
    match arg {
        Some(arg) if numeric && !arg.is_empty() && arg.chars().all(|c| c.is_ascii_digit()) => {
            Ok(text.to_string())
        }
        None if !numeric => Ok(text.to_string()),
        _ => Err(invalid()),
    }
}

/// `dns-options`: distinguishes "never set" from "explicitly empty".
///
/// Setting an empty text stores an explicitly empty list. Adding an option
/// that is already present moves it to the end.
pub struct DnsOptionsContract;

pub static DNS_OPTIONS: DnsOptionsContract = DnsOptionsContract;

impl DnsOptionsContract {
    fn current(prop: &PropertyDescriptor, store: &dyn ConfigStore) -> DnsOptions {
        store.get_dns_options(prop.setting, prop.name)
    }
}

impl CustomContract for DnsOptionsContract {
    fn default_value(&self) -> Value {
        Value::DnsOptions(DnsOptions::Unset)
    }

    fn format(&self, _prop: &PropertyDescriptor, value: &Value, _mode: OutputMode) -> String {
        value
            .as_dns_options()
            .map(|opts| opts.items().join(","))
            .unwrap_or_default()
    }

    fn set(
        &self,
        prop: &PropertyDescriptor,
        _env: &Environment<'_>,
        store: &mut dyn ConfigStore,
        text: &str,
    ) -> Result<()> {
        let options = parse_all(text, LIST_SEPARATORS, validate_dns_option)?;
        let mut current = Self::current(prop, &*store);
        if options.is_empty() {
            current = DnsOptions::Empty;
        }
        for option in &options {
            current.add(option);
        }
        store.set_field(prop.setting, prop.name, Value::DnsOptions(current))
    }

    fn remove(
        &self,
        prop: &PropertyDescriptor,
        store: &mut dyn ConfigStore,
        text: &str,
    ) -> Result<()> {
        let mut current = Self::current(prop, &*store);
        match parse_index(text, current.items().len()) {
            Some(index) => {
                current.remove_index(index);
            }
            None => current.remove_value(&validate_dns_option(text.trim())?),
        }
        store.set_field(prop.setting, prop.name, Value::DnsOptions(current))
    }

    fn values(&self) -> Vec<String> {
        DNS_OPTION_NAMES.iter().map(|v| v.to_string()).collect()
    }

    fn is_default(&self, value: &Value, _default: &Value) -> bool {
        matches!(value.as_dns_options(), Some(DnsOptions::Unset))
    }
}

// ============================================================================
// Small scalars with bespoke rendering
// ============================================================================

/// InfiniBand partition key: `default` (-1) or 0..0xFFFF, shown in hex.
pub struct PKey;

pub static P_KEY: PKey = PKey;

impl CustomContract for PKey {
    fn default_value(&self) -> Value {
        Value::Int(-1)
    }

    fn format(&self, _prop: &PropertyDescriptor, value: &Value, _mode: OutputMode) -> String {
        match value.as_int() {
            Some(-1) | None => "default".to_string(),
            Some(v) => format!("0x{:04x}", v),
        }
    }

    fn set(
        &self,
        prop: &PropertyDescriptor,
        _env: &Environment<'_>,
        store: &mut dyn ConfigStore,
        text: &str,
    ) -> Result<()> {
        let text = text.trim();
        let value = if text == "default" {
            -1
        } else {
            parse_int(text, 0, 0, 0xFFFF)?
        };
        store.set_field(prop.setting, prop.name, Value::Int(value))
    }

    fn values(&self) -> Vec<String> {
        vec!["default".to_string()]
    }
}

/// Wireless channel number, checked against the 2.4 and 5 GHz bands.
pub struct WifiChannel;

pub static WIFI_CHANNEL: WifiChannel = WifiChannel;

impl CustomContract for WifiChannel {
    fn default_value(&self) -> Value {
        Value::Int(0)
    }

    fn format(&self, _prop: &PropertyDescriptor, value: &Value, _mode: OutputMode) -> String {
        value.as_int().unwrap_or(0).to_string()
    }

    fn set(
        &self,
        prop: &PropertyDescriptor,
        _env: &Environment<'_>,
        store: &mut dyn ConfigStore,
        text: &str,
    ) -> Result<()> {
        let channel = parse_int(text.trim(), 10, 0, u32::MAX as i64)?;
        if !is_valid_wifi_channel(channel as u32) {
            return Err(Error::invalid(
                text,
                format!("'{}' is not a valid channel", channel),
            ));
        }
        store.set_field(prop.setting, prop.name, Value::Int(channel))
    }
}

/// SSID: entered as text, stored as raw bytes.
pub struct Ssid;

pub static SSID: Ssid = Ssid;

impl CustomContract for Ssid {
    fn default_value(&self) -> Value {
        Value::Bytes(None)
    }

    fn format(&self, _prop: &PropertyDescriptor, value: &Value, _mode: OutputMode) -> String {
        value
            .as_bytes()
            .map(|b| String::from_utf8_lossy(b).into_owned())
            .unwrap_or_default()
    }

    fn set(
        &self,
        prop: &PropertyDescriptor,
        _env: &Environment<'_>,
        store: &mut dyn ConfigStore,
        text: &str,
    ) -> Result<()> {
        let ssid = validate_ssid(text)?;
        store.set_field(prop.setting, prop.name, Value::Bytes(Some(ssid.into_bytes())))
    }
}

// ============================================================================
// Completers
// ============================================================================

fn with_prefix<'a>(candidates: impl Iterator<Item = &'a str>, text: &str) -> Vec<String> {
    candidates
        .filter(|c| c.starts_with(text))
        .map(str::to_string)
        .collect()
}

/// Connection type names and aliases.
pub fn complete_connection_type(
    _prop: &PropertyDescriptor,
    _ctx: &CompletionContext<'_>,
    text: &str,
) -> Vec<String> {
    with_prefix(registry().connection_type_names().into_iter(), text)
}

/// Master candidates. With no text, only connections whose type equals
/// the edited connection's slave type; with text, UUIDs and interface
/// names starting with it.
pub fn complete_master(
    _prop: &PropertyDescriptor,
    ctx: &CompletionContext<'_>,
    text: &str,
) -> Vec<String> {
    let expected_type = if text.is_empty() {
        ctx.store
            .and_then(|store| store.get_str("connection", "slave-type"))
    } else {
        None
    };

    let mut result = Vec::new();
    for conn in ctx.env.connections() {
        if expected_type.is_some_and(|t| t != conn.connection_type) {
            continue;
        }
        if !text.is_empty() && conn.uuid.starts_with(text) {
            result.push(conn.uuid.clone());
        }
        if let Some(iface) = conn.interface.as_deref() {
            if iface.starts_with(text) {
                result.push(iface.to_string());
            }
        }
    }
    result
}

/// Device names known to the inventory.
pub fn device_names(_prop: &PropertyDescriptor, env: &Environment<'_>) -> Vec<String> {
    env.devices().into_iter().map(|d| d.name).collect()
}

pub fn complete_device(
    prop: &PropertyDescriptor,
    ctx: &CompletionContext<'_>,
    text: &str,
) -> Vec<String> {
    let names = device_names(prop, &ctx.env);
    with_prefix(names.iter().map(String::as_str), text)
}
