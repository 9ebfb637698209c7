// Network Manager - Virtual Link Setting Tables
// Copyright (C) 2026 Christos A. Daggas
// SPDX-License-Identifier: MIT

//! Bonds, bridges, teams, VLANs and other software-defined links.

use super::*;
use crate::codecs::enums::{ev, EnumFormat};
use crate::codecs::flags::{VLAN_FLAGS, VLAN_FLAG_NAMES};
use crate::codecs::IntAlias;
use crate::meta::setting::ValidPart;
use crate::meta::validators::{validate_ip_address, validate_team_config};
use crate::models::validation::validate_ifname;
use crate::models::Value;
use crate::multilist::{AddPolicy, COMMA};
use crate::parsers::options::{render_bond_option, validate_bond_option, BOND_OPTION_KEYS};
use crate::parsers::{OptionMapSpec, OptionStyle, PriorityMapKind};

/// Software links that may carry Ethernet and ethtool settings.
macro_rules! link_parts {
    ($name:literal) => {
        &[
            ValidPart::mandatory("connection"),
            ValidPart::mandatory($name),
            ValidPart::optional("802-3-ethernet"),
            ValidPart::optional("ethtool"),
        ]
    };
}

const BOND_PARTS: &[ValidPart] = link_parts!("bond");
const BRIDGE_PARTS: &[ValidPart] = link_parts!("bridge");
const TEAM_PARTS: &[ValidPart] = link_parts!("team");
const VLAN_PARTS: &[ValidPart] = link_parts!("vlan");
const MACVLAN_PARTS: &[ValidPart] = link_parts!("macvlan");
const VXLAN_PARTS: &[ValidPart] = link_parts!("vxlan");
const TUN_PARTS: &[ValidPart] = link_parts!("tun");
const IP_TUNNEL_PARTS: &[ValidPart] = link_parts!("ip-tunnel");
const DUMMY_PARTS: &[ValidPart] = link_parts!("dummy");

const MACSEC_PARTS: &[ValidPart] = &[
    ValidPart::mandatory("connection"),
    ValidPart::mandatory("macsec"),
    ValidPart::optional("802-3-ethernet"),
    ValidPart::optional("802-1x"),
    ValidPart::optional("ethtool"),
];

const OVS_BRIDGE_PARTS: &[ValidPart] = &[
    ValidPart::mandatory("connection"),
    ValidPart::mandatory("ovs-bridge"),
];

const OVS_PORT_PARTS: &[ValidPart] = &[
    ValidPart::mandatory("connection"),
    ValidPart::mandatory("ovs-port"),
];

const OVS_INTERFACE_PARTS: &[ValidPart] = &[
    ValidPart::mandatory("connection"),
    ValidPart::mandatory("ovs-interface"),
    ValidPart::optional("ovs-patch"),
    ValidPart::optional("ipv4"),
    ValidPart::optional("ipv6"),
    ValidPart::optional("802-3-ethernet"),
    ValidPart::optional("ethtool"),
];

const BOND_OPTIONS: OptionMapSpec = OptionMapSpec::new(OptionStyle::Compact)
    .keys(BOND_OPTION_KEYS)
    .validate(validate_bond_option)
    .render(render_bond_option);

const BOND_OPTIONS_MESSAGE: &str = "Enter a list of bonding options formatted as:\n  \
option = <value>, option = <value>,... \nValid options are: mode, miimon, downdelay, \
updelay, arp_interval, arp_ip_target, ...\n\
'mode' can be provided as a name or a number:\n\
balance-rr    = 0\nactive-backup = 1\nbalance-xor   = 2\nbroadcast     = 3\n\
802.3ad       = 4\nbalance-tlb   = 5\nbalance-alb   = 6\n\n\
Example: mode=2,miimon=120";

const TEAM_CONFIG_MESSAGE: &str = "Enter a JSON object describing the team configuration.\n\n\
Example: {\"device\": \"team0\", \"runner\": {\"name\": \"roundrobin\"}, \
\"ports\": {\"eth1\": {}, \"eth2\": {}} }";

const TX_HASH: &[&str] = &[
    "eth", "vlan", "ipv4", "ipv6", "ip", "l3", "tcp", "udp", "sctp", "l4",
];

const TEAM_RUNNERS: &[&str] = &[
    "broadcast",
    "roundrobin",
    "random",
    "activebackup",
    "loadbalance",
    "lacp",
];

const LINK_WATCHERS_MESSAGE: &str = "Enter a list of link watchers formatted as dictionaries \
where the keys are the watcher properties.\n\
Example: name=ethtool delay-up=100, name=arp_ping target-host=10.0.0.1";

const PRIORITY_MAP_MESSAGE: &str = "Enter a list of priority mappings formatted as <from>:<to>.\n\
Example: 2:1,3:4";

const MACVLAN_MODE: EnumSpec = EnumSpec::enumeration(
    "SettingMacvlanMode",
    &[
        ev("unknown", 0),
        ev("vepa", 1),
        ev("bridge", 2),
        ev("private", 3),
        ev("passthru", 4),
        ev("source", 5),
    ],
)
.range(1, 5)
.formats(EnumFormat::TEXT, EnumFormat::TEXT);

const TUN_MODE: EnumSpec = EnumSpec::enumeration(
    "SettingTunMode",
    &[ev("unknown", 0), ev("tun", 1), ev("tap", 2)],
)
.range(1, 2);

const IP_TUNNEL_MODE: EnumSpec = EnumSpec::enumeration(
    "IPTunnelMode",
    &[
        ev("unknown", 0),
        ev("ipip", 1),
        ev("gre", 2),
        ev("sit", 3),
        ev("isatap", 4),
        ev("vti", 5),
        ev("ip6ip6", 6),
        ev("ipip6", 7),
        ev("ip6gre", 8),
        ev("vti6", 9),
        ev("gretap", 10),
        ev("ip6gretap", 11),
    ],
)
.range(1, 11);

const MACSEC_MODE: EnumSpec = EnumSpec::enumeration("SettingMacsecMode", &[ev("psk", 0), ev("eap", 1)])
    .range(0, 1);

const MACSEC_VALIDATION: EnumSpec = EnumSpec::enumeration(
    "SettingMacsecValidation",
    &[ev("disable", 0), ev("check", 1), ev("strict", 2)],
)
.range(0, 2);

const VLAN_ID: IntSpec = IntSpec::new(IntKind::UInt32).range(0, 4094);

const TEAM_QUEUE_ID: IntSpec = IntSpec::new(IntKind::Int32)
    .range(-1, i32::MAX as i64)
    .aliases(&[IntAlias {
        nick: "unset",
        value: -1,
    }]);

fn bond() -> SettingDescriptor {
    SettingDescriptor::new("bond", "Bond device")
        .parts(BOND_PARTS)
        .properties(vec![PropertyDescriptor::new(
            "options",
            ValueContract::OptionMap(BOND_OPTIONS),
        )
        .message(BOND_OPTIONS_MESSAGE)
        .doc("Bonding driver options.")])
}

fn bridge() -> SettingDescriptor {
    SettingDescriptor::new("bridge", "Bridge device")
        .parts(BRIDGE_PARTS)
        .properties(vec![
            mac("mac-address", MacMode::Default).doc("MAC address of the bridge."),
            boolean("stp")
                .cli("stp")
                .defaults_to(Value::Bool(true))
                .doc("Whether Spanning Tree Protocol is enabled."),
            uint("priority", 0, 65535)
                .cli("priority")
                .defaults_to(Value::Int(0x8000))
                .doc("STP priority."),
            uint("forward-delay", 2, 30)
                .defaults_to(Value::Int(15))
                .doc("STP forwarding delay in seconds."),
            uint("hello-time", 1, 10)
                .defaults_to(Value::Int(2))
                .doc("STP hello time in seconds."),
            uint("max-age", 6, 40)
                .defaults_to(Value::Int(20))
                .doc("STP maximum message age in seconds."),
            uint("ageing-time", 0, 1_000_000)
                .defaults_to(Value::Int(300))
                .doc("Ethernet MAC ageing time in seconds."),
            int(
                "group-forward-mask",
                IntSpec::new(IntKind::UInt32).base(0).range(0, 0xFFFF),
            )
            .doc("Mask of group addresses to forward."),
            boolean("multicast-snooping")
                .defaults_to(Value::Bool(true))
                .doc("Whether IGMP snooping is enabled."),
            boolean("vlan-filtering").doc("Whether VLAN filtering is enabled."),
            uint("vlan-default-pvid", 0, 4094)
                .defaults_to(Value::Int(1))
                .doc("Default PVID of ports."),
        ])
}

fn bridge_port() -> SettingDescriptor {
    SettingDescriptor::new("bridge-port", "Bridge port").properties(vec![
        uint("priority", 0, 63)
            .defaults_to(Value::Int(32))
            .doc("STP priority of the port."),
        uint("path-cost", 1, 65535)
            .defaults_to(Value::Int(100))
            .doc("STP cost of the port."),
        boolean("hairpin-mode").doc("Whether hairpin mode is enabled."),
    ])
}

fn team() -> SettingDescriptor {
    SettingDescriptor::new("team", "Team device")
        .parts(TEAM_PARTS)
        .properties(vec![
            validated("config", validate_team_config)
                .cli("config")
                .message(TEAM_CONFIG_MESSAGE)
                .doc("JSON configuration of the team device."),
            uint("notify-peers-count", 0, 255).doc("Peer notifications after a port change."),
            uint("notify-peers-interval", 0, u32::MAX as i64),
            uint("mcast-rejoin-count", 0, 255),
            uint("mcast-rejoin-interval", 0, u32::MAX as i64),
            choice("runner", TEAM_RUNNERS)
                .defaults_to(Value::text("roundrobin"))
                .doc("Runner selecting the transmit port."),
            choice("runner-hwaddr-policy", &["same_all", "by_active", "only_active"]),
            list(
                "runner-tx-hash",
                ListContract::new(ItemCodec::Text { validate: None }, LIST_SEPARATORS)
                    .values(TX_HASH)
                    .policy(AddPolicy::Replace),
            )
            .doc("Fields hashed to select the transmit port."),
            text("runner-tx-balancer"),
            uint("runner-tx-balancer-interval", 0, u32::MAX as i64),
            boolean("runner-active"),
            boolean("runner-fast-rate"),
            uint("runner-sys-prio", 0, 65535),
            uint("runner-min-ports", 0, 255),
            choice("runner-agg-select-policy", &[
                "lacp_prio",
                "lacp_prio_stable",
                "bandwidth",
                "count",
                "port_config",
            ]),
            list("link-watchers", ListContract::new(ItemCodec::Watcher, COMMA))
                .message(LINK_WATCHERS_MESSAGE)
                .doc("Link watchers of the team."),
        ])
}

fn team_port() -> SettingDescriptor {
    SettingDescriptor::new("team-port", "Team port").properties(vec![
        validated("config", validate_team_config)
            .message(TEAM_CONFIG_MESSAGE)
            .doc("JSON configuration of the team port."),
        int("queue-id", TEAM_QUEUE_ID)
            .defaults_to(Value::Int(-1))
            .doc("Queue of the port; -1 leaves it unset."),
        i32_prop("prio").doc("Port priority."),
        boolean("sticky").doc("Whether the port stays active once selected."),
        uint("lacp-prio", 0, 65535)
            .defaults_to(Value::Int(255))
            .doc("LACP port priority."),
        uint("lacp-key", 0, 65535).doc("LACP port key."),
        list("link-watchers", ListContract::new(ItemCodec::Watcher, COMMA))
            .message(LINK_WATCHERS_MESSAGE)
            .doc("Link watchers of the port."),
    ])
}

fn vlan() -> SettingDescriptor {
    SettingDescriptor::new("vlan", "VLAN connection")
        .parts(VLAN_PARTS)
        .properties(vec![
            validated("parent", validate_ifname)
                .cli("dev")
                .prompt("VLAN parent device or connection UUID")
                .doc("Parent interface of the VLAN."),
            int("id", VLAN_ID)
                .cli("id")
                .prompt("VLAN ID (<0-4094>)")
                .doc("VLAN identifier."),
            PropertyDescriptor::scalar(
                "flags",
                Scalar::Enum {
                    spec: VLAN_FLAGS,
                    names: Some(VLAN_FLAG_NAMES),
                    pre_set: None,
                },
            )
            .cli("flags")
            .defaults_to(Value::Int(1))
            .doc("VLAN flags."),
            list(
                "ingress-priority-map",
                ListContract::new(ItemCodec::Priority(PriorityMapKind::Ingress), COMMA),
            )
            .cli("ingress")
            .message(PRIORITY_MAP_MESSAGE)
            .doc("Ingress priority mapping."),
            list(
                "egress-priority-map",
                ListContract::new(ItemCodec::Priority(PriorityMapKind::Egress), COMMA),
            )
            .cli("egress")
            .message(PRIORITY_MAP_MESSAGE)
            .doc("Egress priority mapping."),
        ])
}

fn macvlan() -> SettingDescriptor {
    SettingDescriptor::new("macvlan", "MACVLAN connection")
        .parts(MACVLAN_PARTS)
        .properties(vec![
            validated("parent", validate_ifname).doc("Parent interface."),
            enumeration("mode", MACVLAN_MODE)
                .cli("mode")
                .prompt("MACVLAN mode")
                .doc("MACVLAN mode."),
            boolean("promiscuous")
                .defaults_to(Value::Bool(true))
                .doc("Whether the interface is promiscuous."),
            boolean("tap").cli("tap").doc("Whether a macvtap device is created."),
        ])
}

fn vxlan() -> SettingDescriptor {
    SettingDescriptor::new("vxlan", "VXLAN connection")
        .parts(VXLAN_PARTS)
        .properties(vec![
            validated("parent", validate_ifname).doc("Parent interface."),
            uint("id", 0, (1 << 24) - 1).cli("id").doc("VXLAN network identifier."),
            validated("local", validate_ip_address)
                .cli("local")
                .doc("Local source address."),
            validated("remote", validate_ip_address)
                .cli("remote")
                .prompt("Remote")
                .doc("Remote unicast or multicast destination."),
            uint("source-port-min", 0, 65535).doc("Lowest UDP source port."),
            uint("source-port-max", 0, 65535).doc("Highest UDP source port."),
            uint("destination-port", 0, 65535)
                .cli("destination-port")
                .defaults_to(Value::Int(8472))
                .doc("UDP destination port."),
            uint("tos", 0, 255).doc("Type of service of outgoing packets."),
            uint("ttl", 0, 255).doc("Time to live of outgoing packets."),
            u32_prop("ageing")
                .defaults_to(Value::Int(300))
                .doc("FDB entry lifetime in seconds."),
            u32_prop("limit").doc("Maximum number of FDB entries."),
            boolean("learning")
                .defaults_to(Value::Bool(true))
                .doc("Whether unknown source addresses are learned."),
            boolean("proxy").doc("Whether ARP proxy is enabled."),
            boolean("rsc").doc("Whether route short circuit is enabled."),
            boolean("l2-miss"),
            boolean("l3-miss"),
        ])
}

fn tun() -> SettingDescriptor {
    SettingDescriptor::new("tun", "Tun device")
        .parts(TUN_PARTS)
        .properties(vec![
            enumeration("mode", TUN_MODE)
                .cli("mode")
                .defaults_to(Value::Int(1))
                .doc("Operating mode."),
            text("owner").cli("owner").doc("UID of the device owner."),
            text("group").cli("group").doc("GID of the device group."),
            boolean("pi").cli("pi").doc("Whether packet information is prepended."),
            boolean("vnet-hdr").cli("vnet-hdr"),
            boolean("multi-queue").cli("multi-queue"),
        ])
}

fn ip_tunnel() -> SettingDescriptor {
    SettingDescriptor::new("ip-tunnel", "IP tunnel")
        .parts(IP_TUNNEL_PARTS)
        .properties(vec![
            enumeration("mode", IP_TUNNEL_MODE)
                .cli("mode")
                .prompt("Tunnel mode")
                .doc("Tunneling mode."),
            validated("parent", validate_ifname).cli("dev"),
            validated("local", validate_ip_address).cli("local").doc("Local endpoint."),
            validated("remote", validate_ip_address)
                .cli("remote")
                .prompt("Remote")
                .doc("Remote endpoint."),
            uint("ttl", 0, 255),
            uint("tos", 0, 255),
            boolean("path-mtu-discovery").defaults_to(Value::Bool(true)),
            text("input-key").doc("Key for incoming packets."),
            text("output-key").doc("Key for outgoing packets."),
            uint("encapsulation-limit", 0, 255).defaults_to(Value::Int(4)),
            uint("flow-label", 0, (1 << 20) - 1),
            mtu("mtu"),
        ])
}

fn macsec() -> SettingDescriptor {
    SettingDescriptor::new("macsec", "MACsec connection")
        .parts(MACSEC_PARTS)
        .properties(vec![
            validated("parent", validate_ifname)
                .cli("dev")
                .prompt("MACsec parent device or connection UUID"),
            enumeration("mode", MACSEC_MODE)
                .cli("mode")
                .prompt("Enable encryption?")
                .doc("How the CAK is obtained."),
            boolean("encrypt")
                .cli("encrypt")
                .defaults_to(Value::Bool(true))
                .doc("Whether data is encrypted."),
            secret("mka-cak").cli("cak").doc("Static connectivity association key."),
            secret_flags("mka-cak-flags"),
            text("mka-ckn").cli("ckn").doc("Connectivity association key name."),
            int("port", IntSpec::new(IntKind::Int32).range(1, 65534))
                .cli("port")
                .defaults_to(Value::Int(1))
                .doc("Port number."),
            enumeration("validation", MACSEC_VALIDATION)
                .defaults_to(Value::Int(2))
                .doc("Frame validation mode."),
            boolean("send-sci")
                .defaults_to(Value::Bool(true))
                .doc("Whether the SCI is included in every packet."),
        ])
}

fn dummy() -> SettingDescriptor {
    SettingDescriptor::new("dummy", "Dummy settings").parts(DUMMY_PARTS)
}

fn ovs_bridge() -> SettingDescriptor {
    SettingDescriptor::new("ovs-bridge", "Open vSwitch bridge settings")
        .parts(OVS_BRIDGE_PARTS)
        .properties(vec![
            choice("fail-mode", &["secure", "standalone"]).doc("Fail mode of the bridge."),
            boolean("mcast-snooping-enable"),
            boolean("rstp-enable"),
            boolean("stp-enable"),
            choice("datapath-type", &["system", "netdev"]),
        ])
}

fn ovs_port() -> SettingDescriptor {
    SettingDescriptor::new("ovs-port", "Open vSwitch port settings")
        .parts(OVS_PORT_PARTS)
        .properties(vec![
            choice(
                "vlan-mode",
                &["access", "native-tagged", "native-untagged", "trunk"],
            )
            .doc("VLAN mode of the port."),
            int("tag", VLAN_ID).doc("VLAN tag."),
            choice("lacp", &["active", "off", "passive"]),
            choice("bond-mode", &["active-backup", "balance-slb", "balance-tcp"]),
            u32_prop("bond-updelay"),
            u32_prop("bond-downdelay"),
        ])
}

fn ovs_interface() -> SettingDescriptor {
    SettingDescriptor::new("ovs-interface", "Open vSwitch interface settings")
        .parts(OVS_INTERFACE_PARTS)
        .properties(vec![choice(
            "type",
            &["internal", "system", "patch", "dpdk"],
        )
        .doc("Interface type.")])
}

fn ovs_patch() -> SettingDescriptor {
    SettingDescriptor::new("ovs-patch", "Open vSwitch patch interface settings").properties(vec![
        validated("peer", validate_ifname).doc("Interface name of the patch peer."),
    ])
}

fn ovs_dpdk() -> SettingDescriptor {
    SettingDescriptor::new("ovs-dpdk", "Open vSwitch DPDK interface settings")
        .properties(vec![text("devargs").doc("DPDK device arguments.")])
}

pub(super) fn settings() -> Vec<SettingDescriptor> {
    vec![
        bond(),
        bridge(),
        bridge_port(),
        team(),
        team_port(),
        vlan(),
        macvlan(),
        vxlan(),
        tun(),
        ip_tunnel(),
        macsec(),
        dummy(),
        ovs_bridge(),
        ovs_port(),
        ovs_interface(),
        ovs_patch(),
        ovs_dpdk(),
    ]
}

#[cfg(test)]
mod tests {
    use crate::env::Environment;
    use crate::meta::registry::registry;
    use crate::models::OutputMode;
    use crate::store::Connection;

    #[test]
    fn test_bond_options() {
        let p = registry().lookup("bond.options").unwrap();
        let mut conn = Connection::new();
        let env = Environment::default();
        p.set(&env, &mut conn, "mode=1,miimon=100".into()).unwrap();
        p.set(&env, &mut conn, "arp_ip_target=10.0.0.1 10.0.0.2".into())
            .unwrap();
        assert_eq!(
            p.get(&conn, OutputMode::Parsable, false).text,
            "arp_ip_target=10.0.0.1 10.0.0.2,miimon=100,mode=active-backup"
        );
        assert!(p.set(&env, &mut conn, "mode=9".into()).is_err());
        p.remove(&mut conn, "miimon").unwrap();
        assert!(!p
            .get(&conn, OutputMode::Parsable, false)
            .text
            .contains("miimon"));
    }

    #[test]
    fn test_team_config_json() {
        let p = registry().lookup("team.config").unwrap();
        let mut conn = Connection::new();
        let env = Environment::default();
        p.set(&env, &mut conn, r#"{"runner": {"name": "lacp"}}"#.into())
            .unwrap();
        assert!(p.set(&env, &mut conn, "[1, 2]".into()).is_err());
        assert!(p.set(&env, &mut conn, "{not json".into()).is_err());
    }

    #[test]
    fn test_tx_hash_replaces() {
        let p = registry().lookup("team.runner-tx-hash").unwrap();
        let mut conn = Connection::new();
        let env = Environment::default();
        p.set(&env, &mut conn, "eth ipv4".into()).unwrap();
        p.set(&env, &mut conn, "l3,l4".into()).unwrap();
        assert_eq!(p.get(&conn, OutputMode::Parsable, false).text, "l3,l4");
        assert!(p.set(&env, &mut conn, "bogus".into()).is_err());
    }

    #[test]
    fn test_team_port_watchers() {
        let p = registry().lookup("team-port.link-watchers").unwrap();
        let mut conn = Connection::new();
        let env = Environment::default();
        p.set(&env, &mut conn, "name=ethtool delay-up=100".into())
            .unwrap();
        assert_eq!(
            p.get(&conn, OutputMode::Parsable, false).text,
            "name=ethtool delay-up=100"
        );
        assert!(p.set(&env, &mut conn, "name=mii".into()).is_err());
        p.remove(&mut conn, "0").unwrap();
        assert!(p.is_default(&conn));
    }

    #[test]
    fn test_vlan_flags_and_maps() {
        let reg = registry();
        let mut conn = Connection::new();
        let env = Environment::default();

        let flags = reg.lookup("vlan.flags").unwrap();
        assert!(flags.is_default(&conn));
        flags.set(&env, &mut conn, "0".into()).unwrap();
        assert_eq!(flags.get(&conn, OutputMode::Pretty, false).text, "0 (NONE)");

        let ingress = reg.lookup("vlan.ingress-priority-map").unwrap();
        ingress.set(&env, &mut conn, "2:1,3:4".into()).unwrap();
        assert_eq!(ingress.get(&conn, OutputMode::Parsable, false).text, "2:1,3:4");
        assert!(ingress.set(&env, &mut conn, "9:1".into()).is_err());

        ingress.set(&env, &mut conn, "".into()).unwrap();
        assert_eq!(ingress.get(&conn, OutputMode::Parsable, false).text, "2:1,3:4");
    }

    #[test]
    fn test_vlan_id_range() {
        let p = registry().lookup("vlan.id").unwrap();
        let mut conn = Connection::new();
        let err = p
            .set(&Environment::default(), &mut conn, "4095".into())
            .unwrap_err();
        assert_eq!(err.to_string(), "'4095' is out of range [0, 4094]");
        assert_eq!(err.property(), Some("id"));
    }

    #[test]
    fn test_vxlan_remote() {
        let p = registry().lookup("vxlan.remote").unwrap();
        let mut conn = Connection::new();
        let env = Environment::default();
        p.set(&env, &mut conn, "239.1.1.1".into()).unwrap();
        p.set(&env, &mut conn, "fe80::1".into()).unwrap();
        assert!(p.set(&env, &mut conn, "example".into()).is_err());
    }

    #[test]
    fn test_dummy_has_no_properties() {
        let dummy = registry().setting("dummy").unwrap();
        assert!(dummy.is_empty());
        assert!(dummy.is_connection_type());
    }
}
