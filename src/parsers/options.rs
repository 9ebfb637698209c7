// Network Manager - Option Maps
// Copyright (C) 2026 Christos A. Daggas
// SPDX-License-Identifier: MIT

//! `key=value` option maps (bond options, VPN data, s390 options, ...).

use std::collections::BTreeMap;

use crate::codecs::integer::parse_int;
use crate::models::{Error, Result};
use crate::multilist::{match_allowed, split_items, COMMA};

/// Per-value hook: returns the form to store, or an error.
pub type OptionValidator = fn(key: &str, value: &str) -> Result<String>;

/// Per-value hook producing the displayed form of a stored value.
pub type OptionRenderer = fn(key: &str, value: &str) -> String;

/// Rendering of a whole option map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OptionStyle {
    /// `k=v,k=v`
    #[default]
    Compact,
    /// `k = v, k = v`
    Spaced,
}

/// Key/value constraints of one option map property.
#[derive(Debug, Clone, Copy)]
pub struct OptionMapSpec {
    pub valid_keys: Option<&'static [&'static str]>,
    pub validate: Option<OptionValidator>,
    pub render: Option<OptionRenderer>,
    pub style: OptionStyle,
}

impl OptionMapSpec {
    pub const fn new(style: OptionStyle) -> Self {
        Self {
            valid_keys: None,
            validate: None,
            render: None,
            style,
        }
    }

    pub const fn keys(mut self, keys: &'static [&'static str]) -> Self {
        self.valid_keys = Some(keys);
        self
    }

    pub const fn validate(mut self, validate: OptionValidator) -> Self {
        self.validate = Some(validate);
        self
    }

    pub const fn render(mut self, render: OptionRenderer) -> Self {
        self.render = Some(render);
        self
    }

    fn resolve_key(&self, key: &str) -> Result<String> {
        match self.valid_keys {
            Some(keys) => match_allowed(key, keys).map(str::to_string),
            None => Ok(key.to_string()),
        }
    }

    /// Parse `k=v[,k=v]...`; nothing is returned unless every pair is valid.
    pub fn parse(&self, text: &str) -> Result<Vec<(String, String)>> {
        split_items(text, COMMA)
            .into_iter()
            .map(|item| {
                let (key, value) = item.split_once('=').ok_or_else(|| {
                    Error::invalid(
                        item,
                        format!("'{}' is not valid; use <option>=<value>", item.trim()),
                    )
                })?;
                let key = self.resolve_key(key.trim())?;
                let value = match self.validate {
                    Some(validate) => validate(&key, value.trim())?,
                    None => value.trim().to_string(),
                };
                Ok((key, value))
            })
            .collect()
    }

    /// Insert parsed pairs, overwriting existing keys.
    pub fn add(&self, map: &mut BTreeMap<String, String>, text: &str) -> Result<()> {
        let pairs = self.parse(text)?;
        map.extend(pairs);
        Ok(())
    }

    /// Remove the listed keys; unknown keys are ignored.
    pub fn remove(&self, map: &mut BTreeMap<String, String>, text: &str) -> Result<()> {
        let keys = split_items(text, COMMA)
            .into_iter()
            .map(|k| self.resolve_key(k.trim()))
            .collect::<Result<Vec<_>>>()?;
        for key in keys {
            map.remove(&key);
        }
        Ok(())
    }

    pub fn format(&self, map: &BTreeMap<String, String>) -> String {
        let (pair_sep, list_sep) = match self.style {
            OptionStyle::Compact => ("=", ","),
            OptionStyle::Spaced => (" = ", ", "),
        };
        map.iter()
            .map(|(k, v)| {
                let shown = match self.render {
                    Some(render) => render(k, v),
                    None => v.clone(),
                };
                format!("{}{}{}", k, pair_sep, shown)
            })
            .collect::<Vec<_>>()
            .join(list_sep)
    }
}

// ----------------------------------------------------------------------
// Bond options
// ----------------------------------------------------------------------

pub const BOND_MODES: [&str; 7] = [
    "balance-rr",
    "active-backup",
    "balance-xor",
    "broadcast",
    "802.3ad",
    "balance-tlb",
    "balance-alb",
];

pub const BOND_OPTION_KEYS: &[&str] = &[
    "mode",
    "miimon",
    "downdelay",
    "updelay",
    "arp_interval",
    "arp_ip_target",
    "arp_validate",
    "arp_all_targets",
    "primary",
    "primary_reselect",
    "fail_over_mac",
    "use_carrier",
    "ad_select",
    "xmit_hash_policy",
    "resend_igmp",
    "lacp_rate",
    "active_slave",
    "ad_actor_sys_prio",
    "ad_actor_system",
    "ad_user_port_key",
    "all_slaves_active",
    "min_links",
    "num_grat_arp",
    "num_unsol_na",
    "packets_per_slave",
    "tlb_dynamic_lb",
    "lp_interval",
];

/// Mode accepts a name or its number and is stored by name; ARP targets
/// are stored comma-separated.
pub fn validate_bond_option(key: &str, value: &str) -> Result<String> {
    match key {
        "mode" => {
            if let Some(name) = BOND_MODES.iter().find(|m| **m == value) {
                return Ok(name.to_string());
            }
            parse_int(value, 10, 0, 6)
                .map(|idx| BOND_MODES[idx as usize].to_string())
                .map_err(|_| {
                    Error::invalid(
                        value,
                        format!("'{}' is not a valid value for '{}'", value, key),
                    )
                })
        }
        "arp_ip_target" => split_items(value, &[' ', ','])
            .into_iter()
            .map(|ip| {
                ip.parse::<std::net::Ipv4Addr>()
                    .map(|_| ip.to_string())
                    .map_err(|_| Error::invalid(ip, format!("'{}' is not a valid IPv4 address", ip)))
            })
            .collect::<Result<Vec<_>>>()
            .map(|ips| ips.join(",")),
        _ if value.is_empty() => Err(Error::invalid(
            value,
            format!("'{}' is not a valid value for '{}'", value, key),
        )),
        _ => Ok(value.to_string()),
    }
}

/// ARP targets are shown space-separated so the map stays comma-splittable.
pub fn render_bond_option(key: &str, value: &str) -> String {
    if key == "arp_ip_target" {
        value.replace(',', " ")
    } else {
        value.to_string()
    }
}

/// VPN data and secrets: values must be non-empty.
pub fn validate_vpn_item(_key: &str, value: &str) -> Result<String> {
    if value.is_empty() {
        return Err(Error::invalid(
            value,
            format!("'{}' cannot be empty", value),
        ));
    }
    Ok(value.to_string())
}

pub const S390_OPTION_KEYS: &[&str] = &[
    "portno",
    "layer2",
    "portname",
    "protocol",
    "priority_queueing",
    "buffer_count",
    "isolation",
    "total",
    "inter",
    "inter_jumbo",
    "intra",
    "intra_jumbo",
    "broadcast_mode",
    "canonical_macaddr",
    "checksumming",
    "fake_broadcast",
    "ipato_add4",
    "ipato_add6",
    "ipato_enable",
    "ipato_invert4",
    "ipato_invert6",
    "large_send",
    "route4",
    "route6",
    "sniffer",
    "vipa_add4",
    "vipa_add6",
    "rxip_add4",
    "rxip_add6",
];

/// s390 option values are 1 to 199 characters.
pub fn validate_s390_option(key: &str, value: &str) -> Result<String> {
    if value.is_empty() || value.len() >= 200 {
        return Err(Error::invalid(
            value,
            format!("'{}' is not a valid value for '{}'", value, key),
        ));
    }
    Ok(value.to_string())
}
