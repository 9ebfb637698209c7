// Network Manager - Configuration Store
// Copyright (C) 2026 Christos A. Daggas
// SPDX-License-Identifier: MIT

//! Field-level access to the connection being edited.
//!
//! The registry never owns connection data. Every property operation gets
//! a [`ConfigStore`] by reference and reads or writes individual fields
//! through it. [`Connection`] is the in-memory implementation used by the
//! binary and the tests.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::debug;
use zeroize::Zeroize;

use crate::models::{DnsOptions, Error, Item, Result, Value};

/// Typed field accessor consumed by the property registry.
pub trait ConfigStore {
    /// Stored value of `setting.key`, or `None` when the field holds its
    /// compile-time default.
    fn get_field(&self, setting: &str, key: &str) -> Option<&Value>;

    /// Store a new value. The store may reject values it cannot hold.
    fn set_field(&mut self, setting: &str, key: &str, value: Value) -> Result<()>;

    /// Drop a stored value so the field reverts to its default.
    fn reset_field(&mut self, setting: &str, key: &str);

    fn has_setting(&self, setting: &str) -> bool;

    /// Make sure `setting` exists, even when none of its fields are set.
    fn ensure_setting(&mut self, setting: &str);
}

/// Typed reads over a [`ConfigStore`].
pub trait ConfigStoreExt: ConfigStore {
    fn get_int(&self, setting: &str, key: &str) -> Option<i64> {
        self.get_field(setting, key).and_then(Value::as_int)
    }

    fn get_str(&self, setting: &str, key: &str) -> Option<&str> {
        self.get_field(setting, key).and_then(Value::as_str)
    }

    fn get_list(&self, setting: &str, key: &str) -> &[Item] {
        self.get_field(setting, key)
            .and_then(Value::as_list)
            .unwrap_or(&[])
    }

    fn get_dns_options(&self, setting: &str, key: &str) -> DnsOptions {
        self.get_field(setting, key)
            .and_then(Value::as_dns_options)
            .cloned()
            .unwrap_or_default()
    }
}

impl<T: ConfigStore + ?Sized> ConfigStoreExt for T {}

/// In-memory connection keyed by setting name, then property key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Connection {
    settings: BTreeMap<String, BTreeMap<String, Value>>,
}

impl Connection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Names of the settings present, in name order.
    pub fn setting_names(&self) -> impl Iterator<Item = &str> {
        self.settings.keys().map(String::as_str)
    }

    /// Stored fields of one setting.
    pub fn fields(&self, setting: &str) -> impl Iterator<Item = (&str, &Value)> {
        self.settings
            .get(setting)
            .into_iter()
            .flat_map(|fields| fields.iter().map(|(k, v)| (k.as_str(), v)))
    }

    pub fn remove_setting(&mut self, setting: &str) -> bool {
        self.settings.remove(setting).is_some()
    }

    /// Wipe and drop every field for which `is_secret` returns true.
    pub fn clear_secrets<F>(&mut self, is_secret: F)
    where
        F: Fn(&str, &str) -> bool,
    {
        for (setting, fields) in self.settings.iter_mut() {
            let secret_keys: Vec<String> = fields
                .keys()
                .filter(|key| is_secret(setting, key))
                .cloned()
                .collect();

            for key in secret_keys {
                if let Some(mut value) = fields.remove(&key) {
                    wipe(&mut value);
                    debug!("Cleared secret {}.{}", setting, key);
                }
            }
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Save as JSON with owner-only permissions.
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = self.to_json()?;
        fs::write(path, json).map_err(|e| Error::ConfigWriteFailed(e.to_string()))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(path, fs::Permissions::from_mode(0o600))?;
        }
        Ok(())
    }

    pub fn load_from_file(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path).map_err(|e| Error::ConfigReadFailed(e.to_string()))?;
        Self::from_json(&json)
    }
}

fn wipe(value: &mut Value) {
    match value {
        Value::Str(Some(s)) => s.zeroize(),
        Value::Bytes(Some(b)) => b.zeroize(),
        Value::Map(map) => {
            for v in map.values_mut() {
                v.zeroize();
            }
        }
        _ => {}
    }
}

impl ConfigStore for Connection {
    fn get_field(&self, setting: &str, key: &str) -> Option<&Value> {
        self.settings.get(setting)?.get(key)
    }

    fn set_field(&mut self, setting: &str, key: &str, value: Value) -> Result<()> {
        let fields = self.settings.entry(setting.to_string()).or_default();
        if let Some(existing) = fields.get(key) {
            if !existing.same_kind(&value) {
                return Err(Error::Store {
                    property: key.to_string(),
                    reason: format!("expected {} value, got {}", existing.kind(), value.kind()),
                });
            }
        }
        fields.insert(key.to_string(), value);
        Ok(())
    }

    fn reset_field(&mut self, setting: &str, key: &str) {
        if let Some(fields) = self.settings.get_mut(setting) {
            if let Some(mut old) = fields.remove(key) {
                wipe(&mut old);
            }
        }
    }

    fn has_setting(&self, setting: &str) -> bool {
        self.settings.contains_key(setting)
    }

    fn ensure_setting(&mut self, setting: &str) {
        self.settings.entry(setting.to_string()).or_default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_reset() {
        let mut conn = Connection::new();
        conn.set_field("connection", "id", Value::text("office")).unwrap();
        assert_eq!(conn.get_str("connection", "id"), Some("office"));
        assert!(conn.has_setting("connection"));

        conn.reset_field("connection", "id");
        assert!(conn.get_field("connection", "id").is_none());
        assert!(conn.has_setting("connection"));
    }

    #[test]
    fn test_kind_mismatch_rejected() {
        let mut conn = Connection::new();
        conn.set_field("802-3-ethernet", "mtu", Value::Int(1500)).unwrap();
        let err = conn
            .set_field("802-3-ethernet", "mtu", Value::text("big"))
            .unwrap_err();
        assert!(matches!(err, Error::Store { .. }));
        assert_eq!(conn.get_int("802-3-ethernet", "mtu"), Some(1500));
    }

    #[test]
    fn test_clear_secrets() {
        let mut conn = Connection::new();
        conn.set_field("802-11-wireless-security", "psk", Value::text("hunter22"))
            .unwrap();
        conn.set_field("802-11-wireless-security", "key-mgmt", Value::text("wpa-psk"))
            .unwrap();

        conn.clear_secrets(|_, key| key == "psk");
        assert!(conn.get_field("802-11-wireless-security", "psk").is_none());
        assert_eq!(
            conn.get_str("802-11-wireless-security", "key-mgmt"),
            Some("wpa-psk")
        );
    }

    #[test]
    fn test_json_round_trip() {
        let mut conn = Connection::new();
        conn.set_field("ipv4", "dns-options", Value::DnsOptions(DnsOptions::Empty))
            .unwrap();
        conn.ensure_setting("proxy");

        let back = Connection::from_json(&conn.to_json().unwrap()).unwrap();
        assert_eq!(back, conn);
        assert_eq!(back.get_dns_options("ipv4", "dns-options"), DnsOptions::Empty);
        assert_eq!(back.setting_names().collect::<Vec<_>>(), vec!["ipv4", "proxy"]);
    }

    #[test]
    fn test_file_round_trip() {
        let dir = std::env::temp_dir().join(format!("nm-meta-store-{}", uuid::Uuid::new_v4()));
        let path = dir.join("conn.json");

        let mut conn = Connection::new();
        conn.set_field("connection", "type", Value::text("bond")).unwrap();
        conn.save_to_file(&path).unwrap();

        let loaded = Connection::load_from_file(&path).unwrap();
        assert_eq!(loaded, conn);
        let _ = fs::remove_dir_all(&dir);
    }
}
