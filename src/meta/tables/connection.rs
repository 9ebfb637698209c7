// Network Manager - Connection Setting Table
// Copyright (C) 2026 Christos A. Daggas
// SPDX-License-Identifier: MIT

//! The `connection` setting: identity, type and activation policy.

use super::*;
use crate::codecs::enums::{ev, EnumFormat};
use crate::codecs::IntAlias;
use crate::meta::custom::{
    complete_connection_type, complete_device, complete_master, device_names, CONNECTION_TYPE,
};
use crate::meta::validators::{validate_master, validate_permission};
use crate::models::validation::{validate_ifname, validate_uuid};
use crate::models::Value;

pub(crate) const SLAVE_TYPES: &[&str] = &["bond", "bridge", "ovs-bridge", "ovs-port", "team"];

const MULTI_CONNECT: EnumSpec = EnumSpec::enumeration(
    "ConnectionMultiConnect",
    &[
        ev("default", 0),
        ev("single", 1),
        ev("manual-multiple", 2),
        ev("multiple", 3),
    ],
)
.range(0, 3);

const AUTOCONNECT_SLAVES: EnumSpec = EnumSpec::enumeration(
    "ConnectionAutoconnectSlaves",
    &[ev("default", -1), ev("no", 0), ev("yes", 1)],
)
.range(-1, 1);

const LLDP: EnumSpec = EnumSpec::enumeration(
    "ConnectionLldp",
    &[ev("default", -1), ev("disable", 0), ev("enable-rx", 1)],
)
.range(-1, 1)
.formats(EnumFormat::TEXT, EnumFormat::TEXT);

const MDNS: EnumSpec = EnumSpec::enumeration(
    "ConnectionMdns",
    &[ev("default", -1), ev("no", 0), ev("resolve", 1), ev("yes", 2)],
)
.range(-1, 2);

const LLMNR: EnumSpec = EnumSpec::enumeration(
    "ConnectionLlmnr",
    &[ev("default", -1), ev("no", 0), ev("resolve", 1), ev("yes", 2)],
)
.range(-1, 2);

const RETRIES_ALIASES: &[IntAlias] = &[
    IntAlias {
        nick: "default",
        value: -1,
    },
    IntAlias {
        nick: "forever",
        value: 0,
    },
];

const AUTH_RETRIES_ALIASES: &[IntAlias] = &[IntAlias {
    nick: "default",
    value: -1,
}];

const PERMISSIONS_MESSAGE: &str = "Enter a list of user permissions. This is a list of user names formatted as:\n  \
[user:]<user name 1>, [user:]<user name 2>,...\n\
The items can be separated by commas or spaces.\n\n\
Example: alice bob charlie";

const SECONDARIES_MESSAGE: &str = "Enter secondary connections that should be activated when this connection is\n\
activated, given by UUID. Only VPNs are supported as secondary connections.\n\
The items can be separated by commas or spaces.\n\n\
Example: fe6ba5d8-c2fc-4aae-b2e3-97efddd8d9a7";

const METERED_MESSAGE: &str = "Enter a value which indicates whether the connection is subject to a data\n\
quota, usage costs or other limitations. Accepted options are:\n\
'true','yes','on' to set the connection as metered\n\
'false','no','off' to set the connection as not metered\n\
'unknown' to let NetworkManager choose a value using some heuristics";

pub(super) fn settings() -> Vec<SettingDescriptor> {
    vec![SettingDescriptor::new("connection", "General settings").properties(vec![
        text("id")
            .cli("con-name")
            .doc("A human readable unique identifier for the connection."),
        validated("uuid", validate_uuid)
            .read_only()
            .doc("A universally unique identifier for the connection."),
        text("stable-id").doc("Token to generate stable IDs for the connection."),
        PropertyDescriptor::new("type", ValueContract::Custom(&CONNECTION_TYPE))
            .cli("type")
            .prompt("Connection type")
            .completer(complete_connection_type)
            .doc("Base type of the connection."),
        validated("interface-name", validate_ifname)
            .cli("ifname")
            .prompt("Interface name [*]")
            .completer(complete_device)
            .values_from(device_names)
            .doc("The name of the network interface this connection is bound to."),
        boolean("autoconnect")
            .cli("autoconnect")
            .defaults_to(Value::Bool(true))
            .doc("Whether the connection is activated automatically."),
        int(
            "autoconnect-priority",
            IntSpec::new(IntKind::Int32).range(-999, 999),
        )
        .doc("Priority of automatic activation; higher values win."),
        int(
            "autoconnect-retries",
            IntSpec::new(IntKind::Int32)
                .range(-1, i32::MAX as i64)
                .aliases(RETRIES_ALIASES),
        )
        .defaults_to(Value::Int(-1))
        .doc("How many times activation is retried before giving up."),
        enumeration("multi-connect", MULTI_CONNECT)
            .doc("Whether the connection may be active on several devices at once."),
        int(
            "auth-retries",
            IntSpec::new(IntKind::Int32)
                .range(-1, i32::MAX as i64)
                .aliases(AUTH_RETRIES_ALIASES),
        )
        .defaults_to(Value::Int(-1))
        .doc("Number of authentication retries before failing."),
        int("timestamp", IntSpec::new(IntKind::UInt64))
            .read_only()
            .doc("Time the connection was last activated, in seconds since the epoch."),
        boolean("read-only")
            .read_only()
            .doc("Whether the connection may not be modified."),
        validated_list("permissions", validate_permission)
            .message(PERMISSIONS_MESSAGE)
            .doc("Users allowed to activate the connection."),
        text("zone").doc("The firewall zone of the connection."),
        validated("master", validate_master)
            .cli("master")
            .prompt("Master")
            .completer(complete_master)
            .doc("Interface name or UUID of the master connection."),
        choice("slave-type", SLAVE_TYPES)
            .cli("slave-type")
            .doc("Setting name of the master connection type."),
        enumeration("autoconnect-slaves", AUTOCONNECT_SLAVES)
            .defaults_to(Value::Int(-1))
            .doc("Whether activating a master also activates its slaves."),
        validated_list("secondaries", validate_uuid)
            .message(SECONDARIES_MESSAGE)
            .doc("Connections activated together with this one."),
        uint("gateway-ping-timeout", 0, 600)
            .doc("Seconds to wait for the gateway to answer a ping."),
        ternary("metered", TernaryStyle::YesNo)
            .message(METERED_MESSAGE)
            .doc("Whether the connection is metered."),
        enumeration("lldp", LLDP)
            .defaults_to(Value::Int(-1))
            .doc("Whether LLDP frames are received."),
        enumeration("mdns", MDNS)
            .defaults_to(Value::Int(-1))
            .doc("Whether mDNS is enabled."),
        enumeration("llmnr", LLMNR)
            .defaults_to(Value::Int(-1))
            .doc("Whether LLMNR is enabled."),
    ])]
}

#[cfg(test)]
mod tests {
    use crate::env::Environment;
    use crate::meta::registry::registry;
    use crate::models::OutputMode;
    use crate::store::Connection;

    #[test]
    fn test_autoconnect_retries_aliases() {
        let p = registry().property("connection", "autoconnect-retries").unwrap();
        let mut conn = Connection::new();
        assert_eq!(p.get(&conn, OutputMode::Pretty, false).text, "-1 (default)");
        p.set(&Environment::default(), &mut conn, "forever".into()).unwrap();
        assert_eq!(p.get(&conn, OutputMode::Pretty, false).text, "0 (forever)");
        assert_eq!(p.get(&conn, OutputMode::Parsable, false).text, "0");
    }

    #[test]
    fn test_permissions_list() {
        let p = registry().property("connection", "permissions").unwrap();
        let mut conn = Connection::new();
        let env = Environment::default();
        p.set(&env, &mut conn, "alice user:bob".into()).unwrap();
        assert_eq!(
            p.get(&conn, OutputMode::Parsable, false).text,
            "user:alice,user:bob"
        );
        assert!(p.set(&env, &mut conn, "carol user:".into()).is_err());
        p.remove(&mut conn, "alice").unwrap();
        assert_eq!(p.get(&conn, OutputMode::Parsable, false).text, "user:bob");
    }

    #[test]
    fn test_lldp_text_rendering() {
        let p = registry().property("connection", "lldp").unwrap();
        let mut conn = Connection::new();
        assert_eq!(p.get(&conn, OutputMode::Parsable, false).text, "default");
        p.set(&Environment::default(), &mut conn, "enable-rx".into())
            .unwrap();
        assert_eq!(p.get(&conn, OutputMode::Pretty, false).text, "enable-rx");
    }

    #[test]
    fn test_metered() {
        let p = registry().property("connection", "metered").unwrap();
        let mut conn = Connection::new();
        assert_eq!(p.get(&conn, OutputMode::Parsable, false).text, "unknown");
        p.set(&Environment::default(), &mut conn, "yes".into()).unwrap();
        assert_eq!(p.get(&conn, OutputMode::Parsable, false).text, "yes");
        assert!(p.describe().contains("data\nquota"));
    }
}
