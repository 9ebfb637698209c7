// Network Manager - Team Link Watcher Parser
// Copyright (C) 2026 Christos A. Daggas
// SPDX-License-Identifier: MIT

//! Team link watcher records: `name=<kind> [key=value]...`.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::codecs::integer::parse_int;
use crate::models::{Error, Result};
use crate::multilist::split_items;

pub const WATCHER_ETHTOOL: &str = "ethtool";
pub const WATCHER_NSNA_PING: &str = "nsna_ping";
pub const WATCHER_ARP_PING: &str = "arp_ping";

const DEFAULT_MISSED_MAX: u32 = 3;
const DEFAULT_VLANID: i32 = -1;

/// Optional behaviour of an ARP ping watcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ArpPingFlags {
    pub validate_active: bool,
    pub validate_inactive: bool,
    pub send_always: bool,
}

/// A team link watcher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "name", rename_all = "snake_case")]
pub enum LinkWatcher {
    Ethtool {
        delay_up: u32,
        delay_down: u32,
    },
    NsnaPing {
        init_wait: u32,
        interval: u32,
        missed_max: u32,
        target_host: String,
    },
    ArpPing {
        init_wait: u32,
        interval: u32,
        missed_max: u32,
        vlanid: i32,
        target_host: String,
        source_host: String,
        flags: ArpPingFlags,
    },
}

fn token_error(token: &str, reason: &str) -> Error {
    Error::invalid(token, format!("'{}' is not valid: {}", token, reason))
}

fn non_negative(token: &str, value: &str) -> Result<u32> {
    parse_int(value, 10, 0, i32::MAX as i64)
        .map(|v| v as u32)
        .map_err(|_| token_error(token, "value is not a valid number [0, MAXINT]"))
}

impl LinkWatcher {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Ethtool { .. } => WATCHER_ETHTOOL,
            Self::NsnaPing { .. } => WATCHER_NSNA_PING,
            Self::ArpPing { .. } => WATCHER_ARP_PING,
        }
    }

    /// Parse one watcher from whitespace-separated `key=value` tokens.
    pub fn parse(text: &str) -> Result<Self> {
        let tokens = split_items(text.trim(), &[' ', '\t']);
        if tokens.is_empty() {
            return Err(Error::invalid(text, format!("'{}' is not valid", text)));
        }

        let mut name: Option<&str> = None;
        let (mut val1, mut val2, mut missed_max) = (0u32, 0u32, DEFAULT_MISSED_MAX);
        let mut vlanid = DEFAULT_VLANID;
        let mut target_host: Option<&str> = None;
        let mut source_host: Option<&str> = None;
        let mut flags = ArpPingFlags::default();

        for token in tokens {
            let parts: Vec<&str> = token.split('=').collect();
            let (key, value) = match parts.as_slice() {
                [key, value] if !key.is_empty() => (*key, *value),
                [_] => return Err(token_error(token, "missing key value")),
                _ => {
                    return Err(token_error(
                        token,
                        "properties should be specified as 'key=value'",
                    ))
                }
            };

            match key {
                "name" => name = Some(value),
                "delay-up" | "init-wait" => val1 = non_negative(token, value)?,
                "delay-down" | "interval" => val2 = non_negative(token, value)?,
                "missed-max" => missed_max = non_negative(token, value)?,
                "vlanid" => {
                    vlanid = parse_int(value, 10, -1, 4094).map(|v| v as i32).map_err(|_| {
                        token_error(token, "value is not a valid number [-1, 4094]")
                    })?
                }
                "target-host" => target_host = Some(value),
                "source-host" => source_host = Some(value),
                "validate-active" => flags.validate_active |= value == "true",
                "validate-inactive" => flags.validate_inactive |= value == "true",
                "send-always" => flags.send_always |= value == "true",
                _ => return Err(token_error(token, "unknown key")),
            }
        }

        let host = |host: Option<&str>, key: &str, kind: &str| -> Result<String> {
            match host {
                Some(h) if !h.is_empty() => Ok(h.to_string()),
                _ => Err(Error::incomplete(key, format!("{} link watcher", kind))),
            }
        };

        match name {
            Some(WATCHER_ETHTOOL) => Ok(Self::Ethtool {
                delay_up: val1,
                delay_down: val2,
            }),
            Some(WATCHER_NSNA_PING) => Ok(Self::NsnaPing {
                init_wait: val1,
                interval: val2,
                missed_max,
                target_host: host(target_host, "target-host", WATCHER_NSNA_PING)?,
            }),
            Some(WATCHER_ARP_PING) => Ok(Self::ArpPing {
                init_wait: val1,
                interval: val2,
                missed_max,
                vlanid,
                target_host: host(target_host, "target-host", WATCHER_ARP_PING)?,
                source_host: host(source_host, "source-host", WATCHER_ARP_PING)?,
                flags,
            }),
            Some(other) => Err(Error::invalid(
                other,
                format!("unknown link watcher name: '{}'", other),
            )),
            None => Err(Error::incomplete("name", "link watcher")),
        }
    }
}

impl fmt::Display for LinkWatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "name={}", self.name())?;
        match self {
            Self::Ethtool {
                delay_up,
                delay_down,
            } => {
                if *delay_up != 0 {
                    write!(f, " delay-up={}", delay_up)?;
                }
                if *delay_down != 0 {
                    write!(f, " delay-down={}", delay_down)?;
                }
            }
            Self::NsnaPing {
                init_wait,
                interval,
                missed_max,
                target_host,
            } => {
                write_ping_common(f, *init_wait, *interval, *missed_max)?;
                write!(f, " target-host={}", target_host)?;
            }
            Self::ArpPing {
                init_wait,
                interval,
                missed_max,
                vlanid,
                target_host,
                source_host,
                flags,
            } => {
                write_ping_common(f, *init_wait, *interval, *missed_max)?;
                write!(f, " target-host={}", target_host)?;
                if *vlanid != DEFAULT_VLANID {
                    write!(f, " vlanid={}", vlanid)?;
                }
                write!(f, " source-host={}", source_host)?;
                if flags.validate_active {
                    f.write_str(" validate-active=true")?;
                }
                if flags.validate_inactive {
                    f.write_str(" validate-inactive=true")?;
                }
                if flags.send_always {
                    f.write_str(" send-always=true")?;
                }
            }
        }
        Ok(())
    }
}

fn write_ping_common(
    f: &mut fmt::Formatter<'_>,
    init_wait: u32,
    interval: u32,
    missed_max: u32,
) -> fmt::Result {
    if init_wait != 0 {
        write!(f, " init-wait={}", init_wait)?;
    }
    if interval != 0 {
        write!(f, " interval={}", interval)?;
    }
    if missed_max != DEFAULT_MISSED_MAX {
        write!(f, " missed-max={}", missed_max)?;
    }
    Ok(())
}

/// Render a watcher list joined by ", ".
pub fn format_watchers(watchers: &[LinkWatcher]) -> String {
    watchers
        .iter()
        .map(|w| w.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
