// Network Manager - Fixed Flag Renderers
// Copyright (C) 2026 Christos A. Daggas
// SPDX-License-Identifier: MIT

//! Flag sets with a fixed pretty rendering: secret flags, VLAN flags and
//! DCB feature flags.

use crate::codecs::enums::{ev, EnumSpec, EnumValue};
use crate::codecs::integer::parse_int;
use crate::models::{Error, OutputMode, Result};

/// Display name of one flag bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlagName {
    pub bit: u32,
    pub label: &'static str,
}

/// Pretty renderer for a fixed flag set, e.g. `3 (enabled, advertise)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlagTable {
    pub zero: &'static str,
    pub names: &'static [FlagName],
}

impl FlagTable {
    /// Render flags; parsable output is the plain number.
    pub fn format(&self, flags: u32, mode: OutputMode) -> String {
        if !mode.is_pretty() {
            return flags.to_string();
        }
        if flags == 0 {
            return format!("0 ({})", self.zero);
        }

        let labels: Vec<&str> = self
            .names
            .iter()
            .filter(|n| flags & n.bit != 0)
            .map(|n| n.label)
            .collect();

        if labels.is_empty() {
            format!("{} (unknown)", flags)
        } else {
            format!("{} ({})", flags, labels.join(", "))
        }
    }
}

pub const SECRET_FLAG_AGENT_OWNED: u32 = 0x1;
pub const SECRET_FLAG_NOT_SAVED: u32 = 0x2;
pub const SECRET_FLAG_NOT_REQUIRED: u32 = 0x4;

/// Secret flags: parsed as flags, rendered with their own labels.
pub const SECRET_FLAGS: EnumSpec = EnumSpec::flags(
    "SecretFlags",
    &[
        ev("none", 0),
        ev("agent-owned", SECRET_FLAG_AGENT_OWNED as i64),
        ev("not-saved", SECRET_FLAG_NOT_SAVED as i64),
        ev("not-required", SECRET_FLAG_NOT_REQUIRED as i64),
    ],
)
.range(0, 7);

pub const SECRET_FLAG_NAMES: FlagTable = FlagTable {
    zero: "none",
    names: &[
        FlagName {
            bit: SECRET_FLAG_AGENT_OWNED,
            label: "agent-owned",
        },
        FlagName {
            bit: SECRET_FLAG_NOT_SAVED,
            label: "not saved",
        },
        FlagName {
            bit: SECRET_FLAG_NOT_REQUIRED,
            label: "not required",
        },
    ],
};

const VLAN_FLAG_VALUES: &[EnumValue] = &[
    ev("reorder-headers", 0x1),
    ev("gvrp", 0x2),
    ev("loose-binding", 0x4),
    ev("mvrp", 0x8),
];

/// VLAN flags accept the kernel flag names on input.
pub const VLAN_FLAGS: EnumSpec = EnumSpec::flags("VlanFlags", VLAN_FLAG_VALUES).range(0, 15);

pub const VLAN_FLAG_NAMES: FlagTable = FlagTable {
    zero: "NONE",
    names: &[
        FlagName {
            bit: 0x1,
            label: "REORDER_HEADERS",
        },
        FlagName {
            bit: 0x2,
            label: "GVRP",
        },
        FlagName {
            bit: 0x4,
            label: "LOOSE_BINDING",
        },
        FlagName {
            bit: 0x8,
            label: "MVRP",
        },
    ],
};

pub const DCB_FLAG_ENABLE: u32 = 0x1;
pub const DCB_FLAG_ADVERTISE: u32 = 0x2;
pub const DCB_FLAG_WILLING: u32 = 0x4;
const DCB_ALL_FLAGS: i64 = (DCB_FLAG_ENABLE | DCB_FLAG_ADVERTISE | DCB_FLAG_WILLING) as i64;

pub const DCB_FLAG_NAMES: FlagTable = FlagTable {
    zero: "disabled",
    names: &[
        FlagName {
            bit: DCB_FLAG_ENABLE,
            label: "enabled",
        },
        FlagName {
            bit: DCB_FLAG_ADVERTISE,
            label: "advertise",
        },
        FlagName {
            bit: DCB_FLAG_WILLING,
            label: "willing",
        },
    ],
};

/// Completion values of DCB flags.
pub const DCB_FLAG_VALUES: [&str; 4] = ["enable", "advertise", "willing", "disable"];

/// Parse DCB feature flags: an overall number, or a list of names/bits.
pub fn parse_dcb_flags(text: &str) -> Result<u32> {
    let text = text.trim();
    if let Ok(all) = parse_int(text, 0, 0, DCB_ALL_FLAGS) {
        return Ok(all as u32);
    }

    let mut flags = 0u32;
    for token in text.split([' ', '\t', ',']).filter(|t| !t.is_empty()) {
        let number = parse_int(token, 0, 0, DCB_ALL_FLAGS).ok();
        let is = |names: &[&str], bit: i64| {
            names.iter().any(|n| n.eq_ignore_ascii_case(token)) || number == Some(bit)
        };

        if is(&["enable", "enabled"], DCB_FLAG_ENABLE as i64) {
            flags |= DCB_FLAG_ENABLE;
        } else if is(&["advertise"], DCB_FLAG_ADVERTISE as i64) {
            flags |= DCB_FLAG_ADVERTISE;
        } else if is(&["willing"], DCB_FLAG_WILLING as i64) {
            flags |= DCB_FLAG_WILLING;
        } else if is(&["disable", "disabled"], 0) {
            // no bit
        } else {
            return Err(Error::invalid(
                token,
                format!("'{}' is not a valid DCB flag", token),
            ));
        }
    }
    Ok(flags)
}
