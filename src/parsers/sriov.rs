// Network Manager - SR-IOV Virtual Functions
// Copyright (C) 2026 Christos A. Daggas
// SPDX-License-Identifier: MIT

//! SR-IOV virtual function records: `index [attribute=value]...`.
//!
//! Attributes are `mac`, `spoof-check`, `trust`, `min-tx-rate`,
//! `max-tx-rate` and `vlans`. VLANs are written `id[.qos[.proto]]` and
//! separated by `;`, with `proto` one of `q` (802.1Q) or `ad` (802.1ad).

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::codecs::boolean::parse_bool;
use crate::codecs::integer::parse_int;
use crate::models::validation::{format_hwaddr, parse_hwaddr, ETH_ALEN};
use crate::models::{Error, Result};
use crate::multilist::{parse_all, split_items, COMMA};

pub const SRIOV_SYNTAX: &str =
    "The valid syntax is: vf [attribute=value]... [,vf [attribute=value]...]";

const VF_ATTRIBUTES: [&str; 5] = ["mac", "spoof-check", "trust", "min-tx-rate", "max-tx-rate"];

const VLAN_ID_MAX: i64 = 4095;

/// VLAN protocol of a VF VLAN.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VlanProto {
    #[default]
    Q,
    Ad,
}

impl VlanProto {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Q => "q",
            Self::Ad => "ad",
        }
    }
}

/// One VLAN assigned to a virtual function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SriovVlan {
    pub id: u32,
    pub qos: u32,
    pub proto: VlanProto,
}

impl SriovVlan {
    fn parse(text: &str) -> Result<Self> {
        let invalid = || Error::invalid(text, format!("invalid VLAN '{}'", text));
        let mut parts = text.split('.');

        let id = parts
            .next()
            .and_then(|p| parse_int(p, 10, 0, VLAN_ID_MAX).ok())
            .ok_or_else(invalid)? as u32;
        let qos = match parts.next() {
            Some(p) => parse_int(p, 10, 0, u32::MAX as i64).map_err(|_| invalid())? as u32,
            None => 0,
        };
        let proto = match parts.next() {
            Some("q") | None => VlanProto::Q,
            Some("ad") => VlanProto::Ad,
            Some(_) => return Err(invalid()),
        };
        if parts.next().is_some() {
            return Err(invalid());
        }
        Ok(Self { id, qos, proto })
    }
}

impl fmt::Display for SriovVlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)?;
        if self.qos != 0 || self.proto != VlanProto::Q {
            write!(f, ".{}", self.qos)?;
        }
        if self.proto != VlanProto::Q {
            write!(f, ".{}", self.proto.as_str())?;
        }
        Ok(())
    }
}

/// One SR-IOV virtual function.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SriovVf {
    pub index: u32,
    /// Normalized attribute values keyed by attribute name.
    pub attributes: BTreeMap<String, String>,
    pub vlans: Vec<SriovVlan>,
}

fn normalize_attribute(key: &str, value: &str) -> Result<String> {
    let bad = || {
        Error::invalid(
            value,
            format!("invalid value '{}' for attribute '{}'", value, key),
        )
    };
    match key {
        "mac" => parse_hwaddr(value, ETH_ALEN)
            .map(|octets| format_hwaddr(&octets))
            .ok_or_else(bad),
        "spoof-check" | "trust" => parse_bool(value).map(|b| b.to_string()).map_err(|_| bad()),
        "min-tx-rate" | "max-tx-rate" => parse_int(value, 10, 0, u32::MAX as i64)
            .map(|v| v.to_string())
            .map_err(|_| bad()),
        _ => Err(Error::invalid(
            key,
            format!("unknown attribute '{}'", key),
        )),
    }
}

impl SriovVf {
    pub fn parse(text: &str) -> Result<Self> {
        let tokens = split_items(text.trim(), &[' ', '\t']);
        let Some((first, rest)) = tokens.split_first() else {
            return Err(Error::incomplete("VF index", "SR-IOV VF"));
        };

        let index = parse_int(first, 10, 0, u32::MAX as i64)
            .map_err(|_| Error::invalid(*first, format!("invalid index '{}'", first)))?
            as u32;

        let mut vf = SriovVf {
            index,
            attributes: BTreeMap::new(),
            vlans: Vec::new(),
        };

        for token in rest {
            let (key, value) = token.split_once('=').ok_or_else(|| {
                Error::invalid(*token, format!("attribute '{}' must be key=value", token))
            })?;
            if key == "vlans" {
                vf.vlans = parse_all(value, &[';'], SriovVlan::parse)?;
                if vf.vlans.is_empty() {
                    return Err(Error::invalid(*token, format!("invalid VLAN '{}'", value)));
                }
            } else {
                let value = normalize_attribute(key, value)?;
                vf.attributes.insert(key.to_string(), value);
            }
        }
        Ok(vf)
    }

    /// Attribute names accepted after the index.
    pub fn attribute_names() -> Vec<&'static str> {
        VF_ATTRIBUTES.iter().copied().chain(["vlans"]).collect()
    }
}

impl fmt::Display for SriovVf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index)?;
        for (key, value) in &self.attributes {
            write!(f, " {}={}", key, value)?;
        }
        if !self.vlans.is_empty() {
            let vlans: Vec<String> = self.vlans.iter().map(|v| v.to_string()).collect();
            write!(f, " vlans={}", vlans.join(";"))?;
        }
        Ok(())
    }
}

/// Parse a comma-separated VF list; errors carry the grammar hint.
pub fn parse_vfs(text: &str) -> Result<Vec<SriovVf>> {
    parse_all(text, COMMA, SriovVf::parse).map_err(|e| {
        let message = format!("{}. {}", e, SRIOV_SYNTAX);
        Error::invalid(text, message)
    })
}

/// Add VFs, replacing any VF that has the same index.
pub fn add_vfs(list: &mut Vec<SriovVf>, vfs: Vec<SriovVf>) {
    for vf in vfs {
        match list.iter_mut().find(|v| v.index == vf.index) {
            Some(existing) => *existing = vf,
            None => list.push(vf),
        }
    }
}

/// Remove by position, or the VF whose index matches the parsed record.
pub fn remove_vf(list: &mut Vec<SriovVf>, text: &str) -> Result<()> {
    if let Some(pos) = crate::multilist::parse_index(text, list.len()) {
        list.remove(pos);
        return Ok(());
    }
    let vf = SriovVf::parse(text)?;
    list.retain(|v| v.index != vf.index);
    Ok(())
}

pub fn format_vfs(list: &[SriovVf]) -> String {
    list.iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_vf() {
        let vf = SriovVf::parse("2 mac=00:11:22:aa:bb:cc trust=yes vlans=100.2.ad;200").unwrap();
        assert_eq!(vf.index, 2);
        assert_eq!(vf.attributes["mac"], "00:11:22:AA:BB:CC");
        assert_eq!(vf.attributes["trust"], "true");
        assert_eq!(vf.vlans.len(), 2);
        assert_eq!(
            vf.to_string(),
            "2 mac=00:11:22:AA:BB:CC trust=true vlans=100.2.ad;200"
        );
        assert_eq!(SriovVf::parse(&vf.to_string()).unwrap(), vf);
    }

    #[test]
    fn test_parse_errors_carry_syntax() {
        let err = parse_vfs("1 foo=bar").unwrap_err();
        assert_eq!(
            err.to_string(),
            format!("unknown attribute 'foo'. {}", SRIOV_SYNTAX)
        );
        assert!(parse_vfs("x").is_err());
        assert!(parse_vfs("1 vlans=5000").is_err());
        assert!(parse_vfs("1 vlans=10.0.x").is_err());
    }

    #[test]
    fn test_add_and_remove() {
        let mut list = parse_vfs("0 trust=true, 1").unwrap();
        add_vfs(&mut list, parse_vfs("1 max-tx-rate=100").unwrap());
        assert_eq!(format_vfs(&list), "0 trust=true, 1 max-tx-rate=100");

        remove_vf(&mut list, "1 trust=false").unwrap();
        assert_eq!(format_vfs(&list), "0 trust=true");
        remove_vf(&mut list, "0").unwrap();
        assert!(list.is_empty());
    }
}
