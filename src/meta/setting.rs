// Network Manager - Setting Descriptors
// Copyright (C) 2026 Christos A. Daggas
// SPDX-License-Identifier: MIT

//! Setting descriptors: named groups of properties plus the companion
//! settings a connection of that type may carry.

use serde::Serialize;

use crate::meta::property::PropertyDescriptor;
use crate::models::{Error, Result};

/// A companion setting and whether it is required.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ValidPart {
    pub setting: &'static str,
    pub mandatory: bool,
}

impl ValidPart {
    pub const fn mandatory(setting: &'static str) -> Self {
        Self {
            setting,
            mandatory: true,
        }
    }

    pub const fn optional(setting: &'static str) -> Self {
        Self {
            setting,
            mandatory: false,
        }
    }
}

/// A named group of properties.
#[derive(Debug, Clone)]
pub struct SettingDescriptor {
    pub name: &'static str,
    /// Short name accepted wherever the setting name is.
    pub alias: Option<&'static str>,
    pub pretty_name: &'static str,
    properties: Vec<PropertyDescriptor>,
    /// Settings allowed on a connection of this type. Empty when the
    /// setting is not a connection type.
    pub valid_parts: &'static [ValidPart],
}

impl SettingDescriptor {
    pub fn new(name: &'static str, pretty_name: &'static str) -> Self {
        Self {
            name,
            alias: None,
            pretty_name,
            properties: Vec::new(),
            valid_parts: &[],
        }
    }

    pub fn alias(mut self, alias: &'static str) -> Self {
        self.alias = Some(alias);
        self
    }

    pub fn parts(mut self, parts: &'static [ValidPart]) -> Self {
        self.valid_parts = parts;
        self
    }

    /// Attach properties, binding each to this setting.
    pub fn properties(mut self, properties: Vec<PropertyDescriptor>) -> Self {
        self.properties = properties
            .into_iter()
            .map(|p| PropertyDescriptor {
                setting: self.name,
                ..p
            })
            .collect();
        self
    }

    /// Match against the name or the alias.
    pub fn matches(&self, name: &str) -> bool {
        self.name == name || self.alias == Some(name)
    }

    pub fn is_connection_type(&self) -> bool {
        !self.valid_parts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PropertyDescriptor> {
        self.properties.iter()
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    pub fn property(&self, name: &str) -> Result<&PropertyDescriptor> {
        self.properties
            .iter()
            .find(|p| p.name == name)
            .ok_or_else(|| Error::UnknownProperty {
                setting: self.name.to_string(),
                property: name.to_string(),
            })
    }

    /// Names of properties that are secrets.
    pub fn secret_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.properties
            .iter()
            .filter(|p| p.is_secret)
            .map(|p| p.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::meta::contract::Scalar;

    const PARTS: &[ValidPart] = &[ValidPart::mandatory("connection"), ValidPart::mandatory("wpan")];

    fn sample() -> SettingDescriptor {
        SettingDescriptor::new("wpan", "IEEE 802.15.4 (WPAN)")
            .parts(PARTS)
            .properties(vec![
                PropertyDescriptor::scalar("pan-id", Scalar::text()),
                PropertyDescriptor::scalar("secret", Scalar::text()).secret(),
            ])
    }

    #[test]
    fn test_properties_bound_to_setting() {
        let setting = sample();
        assert_eq!(setting.len(), 2);
        assert!(setting.iter().all(|p| p.setting == "wpan"));
        assert_eq!(setting.property("pan-id").unwrap().full_name(), "wpan.pan-id");
    }

    #[test]
    fn test_unknown_property() {
        let err = sample().property("nope").unwrap_err();
        assert_eq!(err.to_string(), "Unknown property 'nope' in setting 'wpan'");
    }

    #[test]
    fn test_secret_names() {
        assert_eq!(sample().secret_names().collect::<Vec<_>>(), vec!["secret"]);
        assert!(sample().is_connection_type());
        assert!(!SettingDescriptor::new("ppp", "PPP").is_connection_type());
    }
}
