// Network Manager - Property Registry
// Copyright (C) 2026 Christos A. Daggas
// SPDX-License-Identifier: MIT

//! The process-wide, read-only registry of settings and properties.
//!
//! Built once on first use and never mutated afterwards, so it can be
//! shared between any number of edit sessions.

use once_cell::sync::Lazy;
use tracing::debug;

use crate::meta::property::PropertyDescriptor;
use crate::meta::setting::{SettingDescriptor, ValidPart};
use crate::meta::tables;
use crate::models::{Error, Result};

static REGISTRY: Lazy<Registry> = Lazy::new(Registry::build);

/// Settings every connection carries when its type is unknown.
pub const DEFAULT_PARTS: &[ValidPart] = &[ValidPart::mandatory("connection")];

const NO_SLAVE_PARTS: &[ValidPart] = &[
    ValidPart::optional("match"),
    ValidPart::optional("ipv4"),
    ValidPart::optional("ipv6"),
    ValidPart::optional("tc"),
    ValidPart::optional("proxy"),
];

/// The shared registry.
pub fn registry() -> &'static Registry {
    &REGISTRY
}

/// Companion settings required by a slave of `master_type`. `None` selects
/// the IP-level settings of a standalone connection.
pub fn slave_parts(master_type: Option<&str>) -> Result<&'static [ValidPart]> {
    const BRIDGE: &[ValidPart] = &[ValidPart::mandatory("bridge-port")];
    const OVS_BRIDGE: &[ValidPart] = &[ValidPart::optional("ovs-port")];
    const OVS_PORT: &[ValidPart] = &[ValidPart::optional("ovs-interface")];
    const TEAM: &[ValidPart] = &[ValidPart::mandatory("team-port")];

    match master_type {
        None => Ok(NO_SLAVE_PARTS),
        Some("bond") => Ok(&[]),
        Some("bridge") => Ok(BRIDGE),
        Some("ovs-bridge") => Ok(OVS_BRIDGE),
        Some("ovs-port") => Ok(OVS_PORT),
        Some("team") => Ok(TEAM),
        Some(other) => Err(Error::invalid(
            other,
            format!("invalid slave type '{}'", other),
        )),
    }
}

/// All settings, in name order.
#[derive(Debug)]
pub struct Registry {
    settings: Vec<SettingDescriptor>,
}

impl Registry {
    fn build() -> Self {
        let mut settings = tables::all_settings();
        settings.sort_by(|a, b| a.name.cmp(b.name));
        debug!(
            "Property registry built: {} settings, {} properties",
            settings.len(),
            settings.iter().map(SettingDescriptor::len).sum::<usize>()
        );
        Self { settings }
    }

    pub fn settings(&self) -> &[SettingDescriptor] {
        &self.settings
    }

    /// Find a setting by name or alias.
    pub fn setting(&self, name: &str) -> Result<&SettingDescriptor> {
        self.settings
            .iter()
            .find(|s| s.matches(name))
            .ok_or_else(|| Error::UnknownSetting(name.to_string()))
    }

    pub fn property(&self, setting: &str, property: &str) -> Result<&PropertyDescriptor> {
        self.setting(setting)?.property(property)
    }

    /// Find a property by its qualified `setting.property` name.
    pub fn lookup(&self, qualified: &str) -> Result<&PropertyDescriptor> {
        let (setting, property) = qualified
            .split_once('.')
            .ok_or_else(|| Error::UnknownSetting(qualified.to_string()))?;
        self.property(setting, property)
    }

    /// Settings usable as a connection type.
    pub fn connection_types(&self) -> impl Iterator<Item = &SettingDescriptor> {
        self.settings.iter().filter(|s| s.is_connection_type())
    }

    /// Names and aliases of connection types.
    pub fn connection_type_names(&self) -> Vec<&'static str> {
        self.connection_types()
            .flat_map(|s| s.alias.into_iter().chain(std::iter::once(s.name)))
            .collect()
    }

    /// Settings a connection of `connection_type` may carry, optionally as
    /// a slave of a `master_type` connection.
    pub fn resolve_companions(
        &self,
        connection_type: &str,
        master_type: Option<&str>,
    ) -> Result<Vec<ValidPart>> {
        let setting = self.setting(connection_type)?;
        if !setting.is_connection_type() {
            return Err(Error::invalid(
                connection_type,
                format!("'{}' is not a valid connection type", connection_type),
            ));
        }
        let master = master_type.map(|m| self.setting(m).map(|s| s.name)).transpose()?;
        let mut parts = setting.valid_parts.to_vec();
        parts.extend_from_slice(slave_parts(master)?);
        Ok(parts)
    }

    /// Quick-create options: properties carrying a short alias.
    pub fn cli_options(&self) -> impl Iterator<Item = &PropertyDescriptor> {
        self.settings
            .iter()
            .flat_map(|s| s.iter())
            .filter(|p| p.is_cli_option)
    }

    pub fn cli_option(&self, alias: &str) -> Option<&PropertyDescriptor> {
        self.cli_options().find(|p| p.alias == Some(alias))
    }

    /// Whether `setting.property` is a secret.
    pub fn is_secret(&self, setting: &str, property: &str) -> bool {
        self.property(setting, property)
            .map(|p| p.is_secret)
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::Environment;
    use crate::meta::property::SetValue;
    use crate::models::{OutputMode, TEXT_HIDDEN};
    use crate::store::{ConfigStore, ConfigStoreExt, Connection};

    #[test]
    fn test_lookup_by_alias() {
        let reg = registry();
        assert_eq!(reg.setting("wifi").unwrap().name, "802-11-wireless");
        assert_eq!(reg.setting("ethernet").unwrap().name, "802-3-ethernet");
        assert_eq!(reg.lookup("ipv4.method").unwrap().full_name(), "ipv4.method");
        assert!(matches!(reg.setting("nope"), Err(Error::UnknownSetting(_))));
        assert!(matches!(
            reg.lookup("ipv4.nope"),
            Err(Error::UnknownProperty { .. })
        ));
    }

    #[test]
    fn test_property_names_unique() {
        for setting in registry().settings() {
            let mut names: Vec<_> = setting.iter().map(|p| p.name).collect();
            let total = names.len();
            names.sort_unstable();
            names.dedup();
            assert_eq!(names.len(), total, "duplicate property in {}", setting.name);
        }
    }

    #[test]
    fn test_every_part_is_registered() {
        let reg = registry();
        for setting in reg.connection_types() {
            for part in setting.valid_parts {
                assert!(reg.setting(part.setting).is_ok(), "{}", part.setting);
            }
        }
        for master in [None, Some("bridge"), Some("team"), Some("ovs-port")] {
            for part in slave_parts(master).unwrap() {
                assert!(reg.setting(part.setting).is_ok(), "{}", part.setting);
            }
        }
    }

    #[test]
    fn test_resolve_companions() {
        let reg = registry();
        let parts = reg.resolve_companions("wifi", None).unwrap();
        assert_eq!(parts[0], ValidPart::mandatory("connection"));
        assert!(parts.contains(&ValidPart::mandatory("802-11-wireless")));
        assert!(parts.contains(&ValidPart::optional("802-11-wireless-security")));
        assert!(parts.contains(&ValidPart::optional("ipv4")));

        let port = reg.resolve_companions("ethernet", Some("bridge")).unwrap();
        assert!(port.contains(&ValidPart::mandatory("bridge-port")));
        assert!(!port.contains(&ValidPart::optional("ipv4")));

        let bond_slave = reg.resolve_companions("ethernet", Some("bond")).unwrap();
        assert!(!bond_slave.iter().any(|p| p.setting == "ipv4"));

        assert!(reg.resolve_companions("ipv4", None).is_err());
        assert!(reg.resolve_companions("ethernet", Some("vlan")).is_err());
    }

    #[test]
    fn test_pppoe_needs_ethernet() {
        let parts = registry().resolve_companions("pppoe", None).unwrap();
        assert!(parts.contains(&ValidPart::mandatory("802-3-ethernet")));
    }

    #[test]
    fn test_reset_yields_default_everywhere() {
        let reg = registry();
        let env = Environment::default();
        let mut conn = Connection::new();
        for setting in reg.settings() {
            for prop in setting.iter() {
                let result = prop.set(&env, &mut conn, SetValue::Reset);
                if prop.read_only {
                    assert!(matches!(result, Err(Error::Immutable { .. })), "{}", prop.full_name());
                } else {
                    assert!(result.is_ok(), "{}", prop.full_name());
                }
                assert!(prop.is_default(&conn), "{}", prop.full_name());
                assert!(conn.get_field(prop.setting, prop.name).is_none());
            }
        }
    }

    #[test]
    fn test_reset_on_typed_connection() {
        let reg = registry();
        let env = Environment::default();
        let mut conn = Connection::new();
        reg.lookup("connection.type")
            .unwrap()
            .set(&env, &mut conn, "bond".into())
            .unwrap();
        reg.lookup("bond.options")
            .unwrap()
            .set(&env, &mut conn, "mode=active-backup".into())
            .unwrap();

        for setting in reg.settings() {
            for prop in setting.iter() {
                let guarded = prop.read_only || prop.full_name() == "connection.type";
                let result = prop.set(&env, &mut conn, SetValue::Reset);
                if guarded {
                    assert!(matches!(result, Err(Error::Immutable { .. })), "{}", prop.full_name());
                } else {
                    assert!(result.is_ok(), "{}", prop.full_name());
                    assert!(prop.is_default(&conn), "{}", prop.full_name());
                }
            }
        }
        assert_eq!(conn.get_str("connection", "type"), Some("bond"));
        assert!(conn.get_str("connection", "uuid").is_some());
        assert!(conn.get_field("bond", "options").is_none());
    }

    #[test]
    fn test_secrets_never_leak() {
        let reg = registry();
        let conn = Connection::new();
        for setting in reg.settings() {
            for prop in setting.iter().filter(|p| p.is_secret) {
                let rendered = prop.get(&conn, OutputMode::Parsable, false);
                assert_eq!(rendered.text, TEXT_HIDDEN, "{}", prop.full_name());
            }
        }
        assert!(reg.is_secret("802-11-wireless-security", "psk"));
        assert!(reg.is_secret("vpn", "secrets"));
        assert!(!reg.is_secret("connection", "id"));
    }

    #[test]
    fn test_cli_options() {
        let reg = registry();
        assert_eq!(reg.cli_option("con-name").unwrap().name, "id");
        assert_eq!(reg.cli_option("ifname").unwrap().name, "interface-name");
        assert!(reg.cli_option("bogus").is_none());
    }

    #[test]
    fn test_connection_type_names() {
        let names = registry().connection_type_names();
        assert!(names.contains(&"wifi"));
        assert!(names.contains(&"802-11-wireless"));
        assert!(names.contains(&"bond"));
        assert!(!names.contains(&"ipv4"));
    }
}
