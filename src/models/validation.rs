// Network Manager - Validation Utilities
// Copyright (C) 2026 Christos A. Daggas
// SPDX-License-Identifier: MIT

//! Input validation utilities for property values.

use once_cell::sync::Lazy;
use regex::Regex;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

use super::error::{Error, Result};

/// Maximum interface name length (IFNAMSIZ - 1).
pub const IFNAME_MAX_LEN: usize = 15;

/// Ethernet hardware address length.
pub const ETH_ALEN: usize = 6;

/// InfiniBand hardware address length.
pub const INFINIBAND_ALEN: usize = 20;

/// IEEE 802.15.4 hardware address length.
pub const IEEE802154_ADDR_LEN: usize = 8;

/// Maximum SSID length in bytes.
pub const SSID_MAX_LEN: usize = 32;

static SIM_OPERATOR_ID: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{5,6}$").expect("valid SIM operator pattern"));

static DOMAIN_LABEL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9_]([A-Za-z0-9_-]{0,61}[A-Za-z0-9_])?$").expect("valid label pattern")
});

/// Address family of an IP setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AddressFamily {
    V4,
    V6,
}

impl AddressFamily {
    /// Longest prefix length of the family.
    pub fn max_prefix(&self) -> u8 {
        match self {
            Self::V4 => 32,
            Self::V6 => 128,
        }
    }

    /// Single character used in messages ("IPv4", "IPv6").
    pub fn as_char(&self) -> char {
        match self {
            Self::V4 => '4',
            Self::V6 => '6',
        }
    }

    pub fn matches(&self, addr: &IpAddr) -> bool {
        matches!(
            (self, addr),
            (Self::V4, IpAddr::V4(_)) | (Self::V6, IpAddr::V6(_))
        )
    }
}

/// Validate an IPv4 address string.
pub fn validate_ipv4(s: &str) -> Result<Ipv4Addr> {
    Ipv4Addr::from_str(s)
        .map_err(|_| Error::invalid(s, format!("'{}' is not a valid IPv4 address", s)))
}

/// Validate an IPv6 address string.
pub fn validate_ipv6(s: &str) -> Result<Ipv6Addr> {
    Ipv6Addr::from_str(s)
        .map_err(|_| Error::invalid(s, format!("'{}' is not a valid IPv6 address", s)))
}

/// Parse an address that must belong to `family`.
pub fn parse_ip_for_family(family: AddressFamily, s: &str) -> Option<IpAddr> {
    match family {
        AddressFamily::V4 => Ipv4Addr::from_str(s).ok().map(IpAddr::V4),
        AddressFamily::V6 => Ipv6Addr::from_str(s).ok().map(IpAddr::V6),
    }
}

/// Validate an address of `family`, with the message used for DNS servers.
pub fn validate_ip_for_family(family: AddressFamily, s: &str) -> Result<IpAddr> {
    parse_ip_for_family(family, s).ok_or_else(|| {
        Error::invalid(
            s,
            format!("invalid IPv{} address '{}'", family.as_char(), s),
        )
    })
}

/// Parse a hardware address of exactly `len` octets.
///
/// Octets are one or two hex digits separated by ':' or '-'.
pub fn parse_hwaddr(s: &str, len: usize) -> Option<Vec<u8>> {
    let parts: Vec<&str> = s.split([':', '-']).collect();
    if parts.len() != len {
        return None;
    }

    let mut octets = Vec::with_capacity(len);
    for part in parts {
        if part.is_empty() || part.len() > 2 || !part.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        octets.push(u8::from_str_radix(part, 16).ok()?);
    }
    Some(octets)
}

/// Format octets as an upper-case colon-separated hardware address.
pub fn format_hwaddr(octets: &[u8]) -> String {
    octets
        .iter()
        .map(|b| format!("{:02X}", b))
        .collect::<Vec<_>>()
        .join(":")
}

/// Validate a MAC address string of `len` octets and normalize it.
pub fn validate_mac_address(s: &str, len: usize) -> Result<String> {
    parse_hwaddr(s, len)
        .map(|octets| format_hwaddr(&octets))
        .ok_or_else(|| Error::invalid(s, format!("'{}' is not a valid MAC", s)))
}

/// Check if `s` is a usable kernel interface name.
pub fn is_valid_ifname(s: &str) -> bool {
    !s.is_empty()
        && s.len() <= IFNAME_MAX_LEN
        && s != "."
        && s != ".."
        && !s.chars().any(|c| c == '/' || c == ':' || c.is_whitespace())
}

/// Validate an interface name.
pub fn validate_ifname(s: &str) -> Result<String> {
    if s.is_empty() {
        return Err(Error::invalid(s, "interface name must not be empty"));
    }
    if s.len() > IFNAME_MAX_LEN {
        return Err(Error::invalid(
            s,
            format!("interface name is longer than {} characters", IFNAME_MAX_LEN),
        ));
    }
    if !is_valid_ifname(s) {
        return Err(Error::invalid(
            s,
            format!("'{}' is not a valid interface name", s),
        ));
    }
    Ok(s.to_string())
}

/// Check if `s` is a textual UUID.
pub fn is_valid_uuid(s: &str) -> bool {
    uuid::Uuid::parse_str(s).is_ok()
}

/// Validate a UUID string.
pub fn validate_uuid(s: &str) -> Result<String> {
    if is_valid_uuid(s) {
        Ok(s.to_string())
    } else {
        Err(Error::invalid(
            s,
            format!("the value '{}' is not a valid UUID", s),
        ))
    }
}

/// Validate a hostname.
pub fn validate_hostname(s: &str) -> Result<String> {
    if s.is_empty() || s.len() > 253 {
        return Err(Error::invalid(
            s,
            format!("Hostname must be 1-253 characters: {}", s),
        ));
    }

    for label in s.split('.') {
        if !DOMAIN_LABEL.is_match(label) {
            return Err(Error::invalid(
                s,
                format!("Invalid label '{}' in '{}'", label, s),
            ));
        }
    }

    Ok(s.to_lowercase())
}

/// Validate a DNS search domain.
///
/// A leading '~' marks a routing-only domain; "~." routes every query.
pub fn validate_search_domain(s: &str) -> Result<String> {
    if s == "~." {
        return Ok(s.to_string());
    }
    let (routing, domain) = match s.strip_prefix('~') {
        Some(rest) => (true, rest),
        None => (false, s),
    };
    let domain = domain.strip_suffix('.').unwrap_or(domain);
    let domain = validate_hostname(domain)
        .map_err(|_| Error::invalid(s, format!("'{}' is not a valid DNS domain", s)))?;
    Ok(if routing { format!("~{}", domain) } else { domain })
}

/// Validate a GSM SIM operator id (MCC + MNC).
pub fn validate_sim_operator_id(s: &str) -> Result<String> {
    if SIM_OPERATOR_ID.is_match(s) {
        Ok(s.to_string())
    } else {
        Err(Error::invalid(
            s,
            "SIM operator ID must be a 5 or 6 number MCCMNC code",
        ))
    }
}

/// Validate an SSID given as text.
pub fn validate_ssid(s: &str) -> Result<String> {
    if s.is_empty() || s.len() > SSID_MAX_LEN {
        return Err(Error::invalid(s, format!("'{}' is not valid", s)));
    }
    Ok(s.to_string())
}

/// 2.4 GHz channel numbers.
const BG_CHANNELS: [u32; 14] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14];

/// 5 GHz channel numbers.
const A_CHANNELS: [u32; 42] = [
    7, 8, 9, 11, 12, 16, 34, 36, 38, 40, 42, 44, 46, 48, 52, 56, 60, 64, 100, 104, 108, 112, 116,
    120, 124, 128, 132, 136, 140, 144, 149, 153, 157, 161, 165, 169, 173, 183, 184, 185, 187, 189,
];

/// Check a Wi-Fi channel against the known bands.
pub fn is_valid_wifi_channel(channel: u32) -> bool {
    BG_CHANNELS.contains(&channel) || A_CHANNELS.contains(&channel)
}

/// How a WEP key string is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WepKeyType {
    Unknown = 0,
    Key = 1,
    Passphrase = 2,
}

impl WepKeyType {
    pub fn from_i64(v: i64) -> Self {
        match v {
            1 => Self::Key,
            2 => Self::Passphrase,
            _ => Self::Unknown,
        }
    }

    /// Rendering used in advisories, e.g. "1 (key)".
    pub fn describe(&self) -> String {
        match self {
            Self::Key => "1 (key)".to_string(),
            Self::Passphrase => "2 (passphrase)".to_string(),
            Self::Unknown => "0 (unknown)".to_string(),
        }
    }
}

/// Check if `key` is valid for the given WEP key type.
pub fn is_valid_wep_key(key: &str, key_type: WepKeyType) -> bool {
    let hex_key = matches!(key.len(), 10 | 26) && key.chars().all(|c| c.is_ascii_hexdigit());
    let ascii_key = matches!(key.len(), 5 | 13) && key.chars().all(|c| c.is_ascii_graphic() || c == ' ');
    let passphrase = !key.is_empty() && key.len() <= 64;

    match key_type {
        WepKeyType::Key => hex_key || ascii_key,
        WepKeyType::Passphrase => passphrase,
        WepKeyType::Unknown => hex_key || ascii_key || passphrase,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_ipv4() {
        assert!(validate_ipv4("192.168.1.1").is_ok());
        assert!(validate_ipv4("256.1.1.1").is_err());
        assert!(validate_ipv4("not-an-ip").is_err());
    }

    #[test]
    fn test_ip_for_family() {
        assert!(validate_ip_for_family(AddressFamily::V4, "10.0.0.1").is_ok());
        let err = validate_ip_for_family(AddressFamily::V4, "::1").unwrap_err();
        assert_eq!(err.to_string(), "invalid IPv4 address '::1'");
        assert!(validate_ip_for_family(AddressFamily::V6, "fe80::1").is_ok());
    }

    #[test]
    fn test_validate_mac() {
        assert_eq!(
            validate_mac_address("aa:bb:cc:dd:ee:ff", ETH_ALEN).unwrap(),
            "AA:BB:CC:DD:EE:FF"
        );
        assert!(validate_mac_address("AA-BB-CC-DD-EE-FF", ETH_ALEN).is_ok());
        assert!(validate_mac_address("a:b:c:d:e:f", ETH_ALEN).is_ok());
        assert!(validate_mac_address("invalid", ETH_ALEN).is_err());
        assert!(validate_mac_address("AA:BB:CC:DD:EE:FF", IEEE802154_ADDR_LEN).is_err());
        assert!(validate_mac_address("00:11:22:33:44:55:66:77", IEEE802154_ADDR_LEN).is_ok());
    }

    #[test]
    fn test_ifname() {
        assert!(is_valid_ifname("eth0"));
        assert!(is_valid_ifname("enp0s31f6"));
        assert!(!is_valid_ifname(""));
        assert!(!is_valid_ifname("a/b"));
        assert!(!is_valid_ifname("averyveryverylongname"));
        assert!(!is_valid_ifname(".."));
    }

    #[test]
    fn test_search_domain() {
        assert_eq!(validate_search_domain("Example.com").unwrap(), "example.com");
        assert_eq!(validate_search_domain("~corp.lan").unwrap(), "~corp.lan");
        assert_eq!(validate_search_domain("~.").unwrap(), "~.");
        assert!(validate_search_domain("-bad-.com").is_err());
    }

    #[test]
    fn test_sim_operator() {
        assert!(validate_sim_operator_id("31026").is_ok());
        assert!(validate_sim_operator_id("310260").is_ok());
        assert!(validate_sim_operator_id("3102").is_err());
        assert!(validate_sim_operator_id("31a26").is_err());
    }

    #[test]
    fn test_wep_key_guessing() {
        assert!(is_valid_wep_key("0123456789", WepKeyType::Key));
        assert!(is_valid_wep_key("abcde", WepKeyType::Key));
        assert!(!is_valid_wep_key("a long passphrase", WepKeyType::Key));
        assert!(is_valid_wep_key("a long passphrase", WepKeyType::Passphrase));
        assert!(!is_valid_wep_key("", WepKeyType::Unknown));
    }

    #[test]
    fn test_wifi_channels() {
        assert!(is_valid_wifi_channel(6));
        assert!(is_valid_wifi_channel(36));
        assert!(!is_valid_wifi_channel(15));
    }
}
