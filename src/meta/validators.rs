// Network Manager - Property Validators
// Copyright (C) 2026 Christos A. Daggas
// SPDX-License-Identifier: MIT

//! Text validators and pre-set hooks bound to individual properties.

use crate::codecs::mac::MacMode;
use crate::env::{Environment, WarnLevel};
use crate::meta::property::PropertyDescriptor;
use crate::models::validation::{
    is_valid_ifname, is_valid_uuid, is_valid_wep_key, validate_ip_for_family, WepKeyType,
};
use crate::models::{AddressFamily, Error, Result};
use crate::multilist::match_allowed;
use crate::store::{ConfigStore, ConfigStoreExt};

pub const IPV4_METHODS: &[&str] = &["auto", "link-local", "manual", "shared", "disabled"];
pub const IPV6_METHODS: &[&str] = &["ignore", "auto", "dhcp", "link-local", "manual", "shared"];

/// Property names of the four WEP key slots.
pub const WEP_KEY_NAMES: [&str; 4] = ["wep-key0", "wep-key1", "wep-key2", "wep-key3"];

const PERM_USER_PREFIX: &str = "user:";

const VPN_SERVICE_PREFIX: &str = "org.freedesktop.NetworkManager";

/// Accept any prefix of "static" (longer than one character) as "manual".
fn method(text: &str, methods: &[&'static str]) -> Result<String> {
    let text = if text.len() > 1 && "static".starts_with(text) {
        "manual"
    } else {
        text
    };
    match_allowed(text, methods).map(str::to_string)
}

pub fn validate_ipv4_method(text: &str) -> Result<String> {
    method(text, IPV4_METHODS)
}

pub fn validate_ipv6_method(text: &str) -> Result<String> {
    method(text, IPV6_METHODS)
}

pub fn validate_ipv4_gateway(text: &str) -> Result<String> {
    validate_ip_for_family(AddressFamily::V4, text).map(|ip| ip.to_string())
}

pub fn validate_ipv6_gateway(text: &str) -> Result<String> {
    validate_ip_for_family(AddressFamily::V6, text).map(|ip| ip.to_string())
}

/// Tunnel endpoints accept either family.
pub fn validate_ip_address(text: &str) -> Result<String> {
    text.trim()
        .parse::<std::net::IpAddr>()
        .map(|ip| ip.to_string())
        .map_err(|_| Error::invalid(text, format!("'{}' is not a valid IP address", text)))
}

/// `user:<name>` or a bare `<name>`; stored with the prefix.
pub fn validate_permission(text: &str) -> Result<String> {
    let user = text.strip_prefix(PERM_USER_PREFIX).unwrap_or(text);
    if user.is_empty() || user.contains(':') {
        return Err(Error::invalid(text, format!("'{}' is not valid", text)));
    }
    Ok(format!("{}{}", PERM_USER_PREFIX, user))
}

pub fn validate_master(text: &str) -> Result<String> {
    if is_valid_ifname(text) || is_valid_uuid(text) {
        Ok(text.to_string())
    } else {
        Err(Error::invalid(
            text,
            format!("'{}' is not valid master; use ifname or connection UUID", text),
        ))
    }
}

pub fn validate_mac(text: &str) -> Result<String> {
    MacMode::Default.parse(text)
}

/// Team configuration must be a JSON object.
pub fn validate_team_config(text: &str) -> Result<String> {
    match serde_json::from_str::<serde_json::Value>(text) {
        Ok(serde_json::Value::Object(_)) => Ok(text.to_string()),
        Ok(_) => Err(Error::invalid(
            text,
            "team configuration must be a JSON object",
        )),
        Err(e) => Err(Error::invalid(
            text,
            format!("'{}' is not a valid team configuration: {}", text, e),
        )),
    }
}

/// Short VPN plugin names expand to the full D-Bus service name.
pub fn validate_vpn_service_type(text: &str) -> Result<String> {
    let name = validate_not_empty(text)?;
    if name.contains('.') {
        Ok(name)
    } else {
        Ok(format!("{}.{}", VPN_SERVICE_PREFIX, name))
    }
}

/// Non-empty text without surrounding whitespace.
pub fn validate_not_empty(text: &str) -> Result<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(Error::invalid(text, "value cannot be empty"));
    }
    Ok(trimmed.to_string())
}

/// Warn about stored WEP keys that the new key type would reject.
pub fn wep_key_type_pre_set(
    prop: &PropertyDescriptor,
    env: &Environment<'_>,
    store: &dyn ConfigStore,
    value: i64,
) {
    if !(0..=2).contains(&value) {
        return;
    }
    let key_type = WepKeyType::from_i64(value);
    for name in WEP_KEY_NAMES {
        if let Some(key) = store.get_str(prop.setting, name) {
            if !is_valid_wep_key(key, key_type) {
                env.warn(
                    WarnLevel::Warn,
                    &format!(
                        "'{}' is not compatible with '{}' type, please change or delete the key.",
                        name,
                        key_type.describe()
                    ),
                );
            }
        }
    }
}
