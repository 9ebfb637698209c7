// Network Manager - IP Address Parser
// Copyright (C) 2026 Christos A. Daggas
// SPDX-License-Identifier: MIT

//! `ip[/prefix]` address parser.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::IpAddr;

use crate::codecs::integer::parse_int;
use crate::models::validation::{parse_ip_for_family, AddressFamily};
use crate::models::{Error, Result};

/// An address with its prefix length.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IpAddress {
    pub address: IpAddr,
    pub prefix: u8,
}

impl IpAddress {
    /// Parse `ip[/prefix]`. A missing prefix means a host address.
    pub fn parse(family: AddressFamily, text: &str) -> Result<Self> {
        let text = text.trim();
        let (address, prefix) = split_prefix(family, text)?;
        let address = parse_ip_for_family(family, address).ok_or_else(|| {
            Error::invalid(
                text,
                format!(
                    "invalid IP address: Invalid IPv{} address '{}'",
                    family.as_char(),
                    address
                ),
            )
        })?;
        Ok(Self { address, prefix })
    }

    pub fn family(&self) -> AddressFamily {
        match self.address {
            IpAddr::V4(_) => AddressFamily::V4,
            IpAddr::V6(_) => AddressFamily::V6,
        }
    }
}

impl fmt::Display for IpAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.address, self.prefix)
    }
}

/// Split off and validate a `/prefix` suffix (1..=max).
pub(crate) fn split_prefix(family: AddressFamily, text: &str) -> Result<(&str, u8)> {
    let max = family.max_prefix();
    match text.split_once('/') {
        None => Ok((text, max)),
        Some((address, plen)) => {
            let prefix = parse_int(plen, 10, 1, max as i64).map_err(|_| {
                Error::invalid(
                    text,
                    format!("invalid prefix '{}'; <1-{}> allowed", plen, max),
                )
            })?;
            Ok((address, prefix as u8))
        }
    }
}

/// Render an address list as `a/p, a/p`.
pub fn format_addresses(addresses: &[IpAddress]) -> String {
    addresses
        .iter()
        .map(|a| a.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_prefix() {
        let v4 = IpAddress::parse(AddressFamily::V4, "192.168.1.5").unwrap();
        assert_eq!(v4.prefix, 32);
        let v6 = IpAddress::parse(AddressFamily::V6, "2001:db8::1").unwrap();
        assert_eq!(v6.prefix, 128);
    }

    #[test]
    fn test_explicit_prefix() {
        let addr = IpAddress::parse(AddressFamily::V4, " 10.0.0.0/24 ").unwrap();
        assert_eq!(addr.prefix, 24);
        assert_eq!(addr.to_string(), "10.0.0.0/24");
    }

    #[test]
    fn test_invalid_prefix() {
        let err = IpAddress::parse(AddressFamily::V4, "10.0.0.1/33").unwrap_err();
        assert_eq!(err.to_string(), "invalid prefix '33'; <1-32> allowed");
        let err = IpAddress::parse(AddressFamily::V4, "10.0.0.1/0").unwrap_err();
        assert_eq!(err.to_string(), "invalid prefix '0'; <1-32> allowed");
    }

    #[test]
    fn test_invalid_address() {
        let err = IpAddress::parse(AddressFamily::V4, "fe80::1").unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid IP address: Invalid IPv4 address 'fe80::1'"
        );
    }

    #[test]
    fn test_format_round_trip() {
        let list = vec![
            IpAddress::parse(AddressFamily::V4, "10.0.0.1").unwrap(),
            IpAddress::parse(AddressFamily::V4, "10.0.1.1/16").unwrap(),
        ];
        let text = format_addresses(&list);
        assert_eq!(text, "10.0.0.1/32, 10.0.1.1/16");
        let back: Vec<IpAddress> = text
            .split(',')
            .map(|s| IpAddress::parse(AddressFamily::V4, s).unwrap())
            .collect();
        assert_eq!(back, list);
    }
}
