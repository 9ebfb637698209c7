// Network Manager - Auxiliary Setting Tables
// Copyright (C) 2026 Christos A. Daggas
// SPDX-License-Identifier: MIT

//! DCB, ethtool, SR-IOV, traffic control, proxy, match, VPN, WireGuard,
//! generic and user settings.

use super::*;
use crate::codecs::enums::{ev, EnumFormat};
use crate::codecs::IntAlias;
use crate::meta::setting::ValidPart;
use crate::meta::validators::validate_vpn_service_type;
use crate::models::Value;
use crate::multilist::COMMA;
use crate::parsers::options::validate_vpn_item;
use crate::parsers::{DcbArraySpec, OptionMapSpec, OptionStyle};

const VPN_PARTS: &[ValidPart] = &[
    ValidPart::mandatory("connection"),
    ValidPart::mandatory("vpn"),
];

const WIREGUARD_PARTS: &[ValidPart] = &[
    ValidPart::mandatory("connection"),
    ValidPart::mandatory("wireguard"),
];

const GENERIC_PARTS: &[ValidPart] = &[
    ValidPart::mandatory("connection"),
    ValidPart::mandatory("generic"),
];

// ----------------------------------------------------------------------
// DCB
// ----------------------------------------------------------------------

const DCB_PRIORITY: IntSpec = IntSpec::new(IntKind::Int32)
    .range(-1, 7)
    .aliases(&[IntAlias {
        nick: "unset",
        value: -1,
    }]);

const DCB_FLOW_CONTROL: DcbArraySpec = DcbArraySpec::new(1);
const DCB_GROUP_ID: DcbArraySpec = DcbArraySpec::new(7).other(15);
const DCB_GROUP_BANDWIDTH: DcbArraySpec = DcbArraySpec::new(100).percent();
const DCB_BANDWIDTH: DcbArraySpec = DcbArraySpec::new(100);
const DCB_STRICT: DcbArraySpec = DcbArraySpec::new(1);
const DCB_TRAFFIC_CLASS: DcbArraySpec = DcbArraySpec::new(7);

const DCB_FLAGS_MESSAGE: &str = "Enter DCB flags as a number (0-7) or a list of \
'enable', 'advertise' and 'willing'; 'disable' clears them.";

fn dcb_flags(name: &'static str) -> PropertyDescriptor {
    PropertyDescriptor::scalar(name, Scalar::DcbFlags).message(DCB_FLAGS_MESSAGE)
}

fn dcb_array(
    name: &'static str,
    spec: DcbArraySpec,
    flags_property: &'static str,
) -> PropertyDescriptor {
    PropertyDescriptor::scalar(
        name,
        Scalar::Dcb {
            spec,
            flags_property,
        },
    )
}

fn dcb() -> SettingDescriptor {
    SettingDescriptor::new("dcb", "Data Center Bridging").properties(vec![
        dcb_flags("app-fcoe-flags").doc("FCoE application flags."),
        int("app-fcoe-priority", DCB_PRIORITY)
            .defaults_to(Value::Int(-1))
            .doc("Priority of FCoE frames."),
        choice("app-fcoe-mode", &["fabric", "vn2vn"])
            .defaults_to(Value::text("fabric"))
            .doc("FCoE controller mode."),
        dcb_flags("app-iscsi-flags"),
        int("app-iscsi-priority", DCB_PRIORITY).defaults_to(Value::Int(-1)),
        dcb_flags("app-fip-flags"),
        int("app-fip-priority", DCB_PRIORITY).defaults_to(Value::Int(-1)),
        dcb_flags("priority-flow-control-flags"),
        dcb_array(
            "priority-flow-control",
            DCB_FLOW_CONTROL,
            "priority-flow-control-flags",
        )
        .doc("Whether flow control is enabled for each priority."),
        dcb_flags("priority-group-flags"),
        dcb_array("priority-group-id", DCB_GROUP_ID, "priority-group-flags")
            .doc("Priority group of each user priority; 15 means none."),
        dcb_array(
            "priority-group-bandwidth",
            DCB_GROUP_BANDWIDTH,
            "priority-group-flags",
        )
        .doc("Bandwidth percentage of each priority group; must total 100."),
        dcb_array("priority-bandwidth", DCB_BANDWIDTH, "priority-group-flags")
            .doc("Bandwidth percentage of each user priority within its group."),
        dcb_array("priority-strict-bandwidth", DCB_STRICT, "priority-group-flags")
            .doc("Whether each user priority may use strict bandwidth."),
        dcb_array(
            "priority-traffic-class",
            DCB_TRAFFIC_CLASS,
            "priority-group-flags",
        )
        .doc("Traffic class of each user priority."),
    ])
}

// ----------------------------------------------------------------------
// ethtool
// ----------------------------------------------------------------------

const ETHTOOL_FEATURES: &[&str] = &[
    "feature-esp-hw-offload",
    "feature-esp-tx-csum-hw-offload",
    "feature-fcoe-mtu",
    "feature-gro",
    "feature-gso",
    "feature-highdma",
    "feature-hw-tc-offload",
    "feature-l2-fwd-offload",
    "feature-loopback",
    "feature-lro",
    "feature-ntuple",
    "feature-rx",
    "feature-rx-all",
    "feature-rx-fcs",
    "feature-rx-gro-hw",
    "feature-rx-udp_tunnel-port-offload",
    "feature-rx-vlan-filter",
    "feature-rx-vlan-stag-filter",
    "feature-rx-vlan-stag-hw-parse",
    "feature-rxhash",
    "feature-rxvlan",
    "feature-sg",
    "feature-tls-hw-record",
    "feature-tls-hw-tx-offload",
    "feature-tso",
    "feature-tx",
    "feature-tx-checksum-fcoe-crc",
    "feature-tx-checksum-ip-generic",
    "feature-tx-checksum-ipv4",
    "feature-tx-checksum-ipv6",
    "feature-tx-checksum-sctp",
    "feature-tx-esp-segmentation",
    "feature-tx-fcoe-segmentation",
    "feature-tx-gre-csum-segmentation",
    "feature-tx-gre-segmentation",
    "feature-tx-gso-partial",
    "feature-tx-gso-robust",
    "feature-tx-ipxip4-segmentation",
    "feature-tx-ipxip6-segmentation",
    "feature-tx-nocache-copy",
    "feature-tx-scatter-gather",
    "feature-tx-scatter-gather-fraglist",
    "feature-tx-sctp-segmentation",
    "feature-tx-tcp-ecn-segmentation",
    "feature-tx-tcp-mangleid-segmentation",
    "feature-tx-tcp-segmentation",
    "feature-tx-tcp6-segmentation",
    "feature-tx-udp-segmentation",
    "feature-tx-udp_tnl-csum-segmentation",
    "feature-tx-udp_tnl-segmentation",
    "feature-tx-vlan-stag-hw-insert",
    "feature-txvlan",
];

fn ethtool() -> SettingDescriptor {
    SettingDescriptor::new("ethtool", "Ethtool settings").properties(
        ETHTOOL_FEATURES
            .iter()
            .map(|name| ternary(*name, TernaryStyle::OnOff))
            .collect(),
    )
}

// ----------------------------------------------------------------------
// SR-IOV and traffic control
// ----------------------------------------------------------------------

const AUTOPROBE: EnumSpec = EnumSpec::enumeration(
    "Ternary",
    &[ev("default", -1), ev("false", 0), ev("true", 1)],
)
.range(-1, 1);

const VFS_MESSAGE: &str = "Enter a list of SR-IOV virtual functions separated by commas.\n\
Each VF is an index followed by attributes:\n  \
<index> [mac=<MAC>] [spoof-check=true|false] [trust=true|false] \
[min-tx-rate=<rate>] [max-tx-rate=<rate>] [vlans=<id>[.<qos>[.q|ad]];...]\n\n\
Example: 2 mac=00:11:22:33:44:55 trust=true vlans=100.2.ad";

const QDISCS_MESSAGE: &str = "Enter a list of queueing disciplines separated by commas.\n\
Each one is: root|parent <handle> [handle <handle>] <kind>\n\n\
Example: root handle 1234: fq_codel";

fn sriov() -> SettingDescriptor {
    SettingDescriptor::new("sriov", "SR-IOV settings").properties(vec![
        u32_prop("total-vfs").doc("Number of virtual functions to create."),
        list("vfs", ListContract::new(ItemCodec::Vf, COMMA))
            .message(VFS_MESSAGE)
            .doc("Configuration of individual virtual functions."),
        enumeration("autoprobe-drivers", AUTOPROBE)
            .defaults_to(Value::Int(-1))
            .doc("Whether drivers are probed for new VFs."),
    ])
}

fn tc() -> SettingDescriptor {
    SettingDescriptor::new("tc", "Traffic controls").properties(vec![list(
        "qdiscs",
        ListContract::new(ItemCodec::Qdisc, COMMA),
    )
    .message(QDISCS_MESSAGE)
    .doc("Queueing disciplines.")])
}

// ----------------------------------------------------------------------
// Proxy and match
// ----------------------------------------------------------------------

const PROXY_METHOD: EnumSpec =
    EnumSpec::enumeration("SettingProxyMethod", &[ev("none", 0), ev("auto", 1)])
        .range(0, 1)
        .formats(EnumFormat::TEXT, EnumFormat::TEXT);

fn proxy() -> SettingDescriptor {
    SettingDescriptor::new("proxy", "HTTP Proxy").properties(vec![
        enumeration("method", PROXY_METHOD).doc("Proxy configuration method."),
        boolean("browser-only").doc("Whether the proxy applies to browsers only."),
        text("pac-url").doc("URL of the PAC file."),
        text("pac-script").doc("JavaScript PAC script."),
    ])
}

fn match_setting() -> SettingDescriptor {
    SettingDescriptor::new("match", "Match").properties(vec![string_list("interface-name")
        .doc("Interface names (with optional wildcards) the connection applies to.")])
}

// ----------------------------------------------------------------------
// VPN, WireGuard, generic, user
// ----------------------------------------------------------------------

const VPN_ITEMS: OptionMapSpec = OptionMapSpec::new(OptionStyle::Spaced).validate(validate_vpn_item);

const VPN_ITEMS_MESSAGE: &str = "Enter a list of key/value pairs formatted as:\n  \
key = <value>, key = <value>, ...";

fn vpn() -> SettingDescriptor {
    SettingDescriptor::new("vpn", "VPN connection")
        .parts(VPN_PARTS)
        .properties(vec![
            validated("service-type", validate_vpn_service_type)
                .cli("vpn-type")
                .prompt("VPN type")
                .doc("D-Bus service name of the VPN plugin."),
            text("user-name").cli("user").doc("User the connection belongs to."),
            PropertyDescriptor::new("data", ValueContract::OptionMap(VPN_ITEMS))
                .message(VPN_ITEMS_MESSAGE)
                .doc("Plugin-specific configuration."),
            PropertyDescriptor::new("secrets", ValueContract::OptionMap(VPN_ITEMS))
                .message(VPN_ITEMS_MESSAGE)
                .secret()
                .doc("Plugin-specific secrets."),
            boolean("persistent").doc("Whether the VPN reconnects after link loss."),
            u32_prop("timeout").doc("Plugin start timeout in seconds; 0 is default."),
        ])
}

fn wireguard() -> SettingDescriptor {
    SettingDescriptor::new("wireguard", "WireGuard VPN settings")
        .parts(WIREGUARD_PARTS)
        .properties(vec![
            secret("private-key").doc("Base64 private key of the interface."),
            secret_flags("private-key-flags"),
            uint("listen-port", 0, 65535).doc("UDP listen port; 0 picks one."),
            int("fwmark", IntSpec::new(IntKind::UInt32).base(0))
                .doc("Firewall mark of outgoing packets."),
            boolean("peer-routes")
                .defaults_to(Value::Bool(true))
                .doc("Whether routes for peer allowed-ips are added."),
            mtu("mtu"),
        ])
}

fn generic() -> SettingDescriptor {
    SettingDescriptor::new("generic", "Generic settings").parts(GENERIC_PARTS)
}

fn user() -> SettingDescriptor {
    SettingDescriptor::new("user", "User settings").properties(vec![PropertyDescriptor::new(
        "data",
        ValueContract::OptionMap(OptionMapSpec::new(OptionStyle::Compact)),
    )
    .doc("Arbitrary user data.")])
}

pub(super) fn settings() -> Vec<SettingDescriptor> {
    vec![
        dcb(),
        ethtool(),
        sriov(),
        tc(),
        proxy(),
        match_setting(),
        vpn(),
        wireguard(),
        generic(),
        user(),
    ]
}

#[cfg(test)]
mod tests {
    use crate::env::{Environment, RecordingWarnSink, WarnLevel};
    use crate::meta::registry::registry;
    use crate::models::OutputMode;
    use crate::store::Connection;

    #[test]
    fn test_dcb_array_warns_until_enabled() {
        let reg = registry();
        let sink = RecordingWarnSink::new();
        let env = Environment::with_warnings(&sink);
        let mut conn = Connection::new();

        let pfc = reg.lookup("dcb.priority-flow-control").unwrap();
        pfc.set(&env, &mut conn, "1,0,1,0,1,0,1,0".into()).unwrap();
        assert_eq!(
            sink.take(),
            vec![(
                WarnLevel::Warn,
                "changes will have no effect until 'priority-flow-control-flags' includes 1 (enabled)"
                    .to_string()
            )]
        );

        reg.lookup("dcb.priority-flow-control-flags")
            .unwrap()
            .set(&env, &mut conn, "enable".into())
            .unwrap();
        pfc.set(&env, &mut conn, "0,0,0,0,0,0,0,1".into()).unwrap();
        assert!(sink.take().is_empty());
        assert_eq!(
            pfc.get(&conn, OutputMode::Parsable, false).text,
            "0,0,0,0,0,0,0,1"
        );
    }

    #[test]
    fn test_dcb_priority_unset() {
        let p = registry().lookup("dcb.app-fcoe-priority").unwrap();
        let conn = Connection::new();
        assert_eq!(p.get(&conn, OutputMode::Pretty, false).text, "-1 (unset)");
        assert!(p.is_default(&conn));
    }

    #[test]
    fn test_group_bandwidth_total() {
        let p = registry().lookup("dcb.priority-group-bandwidth").unwrap();
        let mut conn = Connection::new();
        let env = Environment::default();
        assert!(p.set(&env, &mut conn, "10,10,10,10,10,10,10,10".into()).is_err());
        p.set(&env, &mut conn, "10,10,10,10,10,10,20,20".into()).unwrap();
    }

    #[test]
    fn test_ethtool_features() {
        let setting = registry().setting("ethtool").unwrap();
        assert!(setting.len() > 50);
        let gro = setting.property("feature-gro").unwrap();
        let mut conn = Connection::new();
        assert_eq!(gro.get(&conn, OutputMode::Parsable, false).text, "");
        gro.set(&Environment::default(), &mut conn, "on".into()).unwrap();
        assert_eq!(gro.get(&conn, OutputMode::Parsable, false).text, "on");
        gro.set(&Environment::default(), &mut conn, "ignore".into())
            .unwrap();
        assert!(gro.is_default(&conn));
    }

    #[test]
    fn test_sriov_vfs_merge() {
        let p = registry().lookup("sriov.vfs").unwrap();
        let mut conn = Connection::new();
        let env = Environment::default();
        p.set(&env, &mut conn, "0 trust=true, 1".into()).unwrap();
        p.set(&env, &mut conn, "1 max-tx-rate=100".into()).unwrap();
        assert_eq!(
            p.get(&conn, OutputMode::Parsable, false).text,
            "0 trust=true, 1 max-tx-rate=100"
        );
        assert!(p.set(&env, &mut conn, "2 foo=bar".into()).is_err());
    }

    #[test]
    fn test_qdiscs() {
        let p = registry().lookup("tc.qdiscs").unwrap();
        let mut conn = Connection::new();
        p.set(&Environment::default(), &mut conn, "root handle 1234: fq_codel".into())
            .unwrap();
        assert_eq!(
            p.get(&conn, OutputMode::Parsable, false).text,
            "root handle 1234: fq_codel"
        );
    }

    #[test]
    fn test_vpn_data_and_secrets() {
        let reg = registry();
        let mut conn = Connection::new();
        let env = Environment::default();

        let data = reg.lookup("vpn.data").unwrap();
        data.set(&env, &mut conn, "remote = vpn.example.com, port = 1194".into())
            .unwrap();
        assert_eq!(
            data.get(&conn, OutputMode::Parsable, false).text,
            "port = 1194, remote = vpn.example.com"
        );
        assert!(data.set(&env, &mut conn, "cipher=".into()).is_err());

        let secrets = reg.lookup("vpn.secrets").unwrap();
        secrets.set(&env, &mut conn, "password=hunter2".into()).unwrap();
        assert_eq!(secrets.get(&conn, OutputMode::Parsable, false).text, "<hidden>");
        assert_eq!(
            secrets.get(&conn, OutputMode::Parsable, true).text,
            "password = hunter2"
        );

        let service = reg.lookup("vpn.service-type").unwrap();
        service.set(&env, &mut conn, "openvpn".into()).unwrap();
        assert_eq!(
            service.get(&conn, OutputMode::Parsable, false).text,
            "org.freedesktop.NetworkManager.openvpn"
        );
    }

    #[test]
    fn test_proxy_method_text() {
        let p = registry().lookup("proxy.method").unwrap();
        let mut conn = Connection::new();
        assert_eq!(p.get(&conn, OutputMode::Pretty, false).text, "none");
        p.set(&Environment::default(), &mut conn, "auto".into()).unwrap();
        assert_eq!(p.get(&conn, OutputMode::Parsable, false).text, "auto");
    }
}
