// Network Manager - Hardware Address Codec
// Copyright (C) 2026 Christos A. Daggas
// SPDX-License-Identifier: MIT

//! Hardware (MAC-like) address codec.

use crate::models::validation::{
    format_hwaddr, parse_hwaddr, ETH_ALEN, IEEE802154_ADDR_LEN, INFINIBAND_ALEN,
};
use crate::models::{Error, Result};

/// Keywords accepted by cloned MAC address properties.
pub const CLONED_SPECIAL: [&str; 4] = ["preserve", "permanent", "random", "stable"];

/// Address flavour of a MAC property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MacMode {
    /// Ethernet, 6 octets.
    Default,
    /// Ethernet, or one of [`CLONED_SPECIAL`].
    Cloned,
    /// InfiniBand, 20 octets.
    Infiniband,
    /// IEEE 802.15.4, 8 octets.
    Wpan,
}

impl MacMode {
    pub fn octets(&self) -> usize {
        match self {
            Self::Default | Self::Cloned => ETH_ALEN,
            Self::Infiniband => INFINIBAND_ALEN,
            Self::Wpan => IEEE802154_ADDR_LEN,
        }
    }

    /// Parse and normalize a hardware address.
    pub fn parse(&self, text: &str) -> Result<String> {
        let text = text.trim();
        if matches!(self, Self::Cloned) && CLONED_SPECIAL.contains(&text) {
            return Ok(text.to_string());
        }
        parse_hwaddr(text, self.octets())
            .map(|octets| format_hwaddr(&octets))
            .ok_or_else(|| {
                Error::invalid(text, format!("'{}' is not a valid {} MAC", text, self.kind()))
            })
    }

    /// Address family named in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Default | Self::Cloned => "Ethernet",
            Self::Infiniband => "InfiniBand",
            Self::Wpan => "IEEE 802.15.4",
        }
    }

    /// Static completion values for the mode.
    pub fn values(&self) -> &'static [&'static str] {
        match self {
            Self::Cloned => &CLONED_SPECIAL,
            _ => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ethernet() {
        assert_eq!(
            MacMode::Default.parse("00:1a:2b:3c:4d:5e").unwrap(),
            "00:1A:2B:3C:4D:5E"
        );
        let err = MacMode::Default.parse("stable").unwrap_err();
        assert_eq!(err.to_string(), "'stable' is not a valid Ethernet MAC");
    }

    #[test]
    fn test_cloned_keywords() {
        assert_eq!(MacMode::Cloned.parse("random").unwrap(), "random");
        assert!(MacMode::Cloned.parse("00:11:22:33:44:55").is_ok());
        assert!(MacMode::Cloned.parse("bogus").is_err());
    }

    #[test]
    fn test_lengths() {
        let ib = vec!["80"; INFINIBAND_ALEN].join(":");
        assert!(MacMode::Infiniband.parse(&ib).is_ok());
        let err = MacMode::Infiniband.parse("00:11:22:33:44:55").unwrap_err();
        assert_eq!(err.to_string(), "'00:11:22:33:44:55' is not a valid InfiniBand MAC");
        assert!(MacMode::Wpan.parse("00:11:22:33:44:55:66:77").is_ok());
        let err = MacMode::Wpan.parse("00:11").unwrap_err();
        assert_eq!(err.to_string(), "'00:11' is not a valid IEEE 802.15.4 MAC");
    }
}
