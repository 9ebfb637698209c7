// Network Manager - Wired Setting Tables
// Copyright (C) 2026 Christos A. Daggas
// SPDX-License-Identifier: MIT

//! Ethernet, InfiniBand, IEEE 802.15.4 and 6LoWPAN.

use super::*;
use crate::codecs::enums::ev;
use crate::meta::custom::P_KEY;
use crate::meta::setting::ValidPart;
use crate::meta::validators::validate_mac;
use crate::models::validation::validate_ifname;
use crate::models::Value;
use crate::parsers::options::{validate_s390_option, S390_OPTION_KEYS};
use crate::parsers::{OptionMapSpec, OptionStyle};

const ETHERNET_PARTS: &[ValidPart] = &[
    ValidPart::mandatory("connection"),
    ValidPart::mandatory("802-3-ethernet"),
    ValidPart::optional("802-1x"),
    ValidPart::optional("dcb"),
    ValidPart::optional("sriov"),
    ValidPart::optional("ethtool"),
];

const INFINIBAND_PARTS: &[ValidPart] = &[
    ValidPart::mandatory("connection"),
    ValidPart::mandatory("infiniband"),
    ValidPart::optional("sriov"),
    ValidPart::optional("ethtool"),
];

const WPAN_PARTS: &[ValidPart] = &[
    ValidPart::mandatory("connection"),
    ValidPart::mandatory("wpan"),
];

const LOWPAN_PARTS: &[ValidPart] = &[
    ValidPart::mandatory("connection"),
    ValidPart::mandatory("6lowpan"),
];

const WAKE_ON_LAN: EnumSpec = EnumSpec::flags(
    "SettingWiredWakeOnLan",
    &[
        ev("default", 0x1),
        ev("phy", 0x2),
        ev("unicast", 0x4),
        ev("multicast", 0x8),
        ev("broadcast", 0x10),
        ev("arp", 0x20),
        ev("magic", 0x40),
        ev("ignore", 0x8000),
    ],
)
.range(0, 0x807F);

const S390_OPTIONS: OptionMapSpec = OptionMapSpec::new(OptionStyle::Compact)
    .keys(S390_OPTION_KEYS)
    .validate(validate_s390_option);

const S390_SUBCHANNELS_MESSAGE: &str = "Enter a list of subchannels (comma or space separated).\n\n\
Example: 0.0.0e20 0.0.0e21 0.0.0e22";

/// 16-bit value shown in hex, 0xFFFF meaning unset.
const WPAN_ID: IntSpec = IntSpec::new(IntKind::UInt32).base(16).range(0, 0xFFFF);

fn ethernet() -> SettingDescriptor {
    SettingDescriptor::new("802-3-ethernet", "Wired Ethernet")
        .alias("ethernet")
        .parts(ETHERNET_PARTS)
        .properties(vec![
            choice("port", &["tp", "aui", "bnc", "mii"]).doc("Physical port of the device."),
            u32_prop("speed").doc("Link speed in Mbit/s, with auto-negotiate off."),
            choice("duplex", &["half", "full"]).doc("Duplex mode, with auto-negotiate off."),
            boolean("auto-negotiate").doc("Whether link parameters are negotiated."),
            mac("mac-address", MacMode::Default)
                .cli("mac")
                .doc("Permanent MAC address of the device."),
            mac("cloned-mac-address", MacMode::Cloned)
                .doc("MAC address set on the device at activation."),
            text("generate-mac-address-mask")
                .doc("Mask applied to generated MAC addresses."),
            validated_list("mac-address-blacklist", validate_mac)
                .doc("MAC addresses of devices this connection must not apply to."),
            mtu("mtu").cli("mtu").doc("MTU; 'auto' keeps the device default."),
            string_list("s390-subchannels")
                .message(S390_SUBCHANNELS_MESSAGE)
                .doc("s390 subchannel identifiers."),
            choice("s390-nettype", &["qeth", "lcs", "ctc"]).doc("s390 network device type."),
            PropertyDescriptor::new("s390-options", ValueContract::OptionMap(S390_OPTIONS))
                .doc("s390 driver options."),
            enumeration("wake-on-lan", WAKE_ON_LAN)
                .defaults_to(Value::Int(0x1))
                .doc("Wake-on-LAN options."),
            mac("wake-on-lan-password", MacMode::Default)
                .doc("Wake-on-LAN SecureOn password, given as a MAC address."),
        ])
}

fn infiniband() -> SettingDescriptor {
    SettingDescriptor::new("infiniband", "InfiniBand")
        .parts(INFINIBAND_PARTS)
        .properties(vec![
            mac("mac-address", MacMode::Infiniband).doc("InfiniBand hardware address."),
            mtu("mtu").doc("MTU; 'auto' keeps the device default."),
            choice("transport-mode", &["datagram", "connected"])
                .prompt("Transport mode")
                .doc("IP-over-InfiniBand transport mode."),
            PropertyDescriptor::new("p-key", ValueContract::Custom(&P_KEY))
                .doc("Partition key; 'default' uses the parent interface."),
            validated("parent", validate_ifname).doc("Parent interface of a partition."),
        ])
}

fn wpan() -> SettingDescriptor {
    SettingDescriptor::new("wpan", "IEEE 802.15.4 (WPAN)")
        .parts(WPAN_PARTS)
        .properties(vec![
            mac("mac-address", MacMode::Wpan).doc("IEEE 802.15.4 extended address."),
            int("short-address", WPAN_ID)
                .defaults_to(Value::Int(0xFFFF))
                .doc("Short address."),
            int("pan-id", WPAN_ID)
                .defaults_to(Value::Int(0xFFFF))
                .doc("Personal area network identifier."),
            int("page", IntSpec::new(IntKind::Int32).range(-1, 31))
                .defaults_to(Value::Int(-1))
                .doc("Channel page; -1 keeps the device default."),
            int("channel", IntSpec::new(IntKind::Int32).range(-1, 26))
                .defaults_to(Value::Int(-1))
                .doc("Channel; -1 keeps the device default."),
        ])
}

fn lowpan() -> SettingDescriptor {
    SettingDescriptor::new("6lowpan", "6LOWPAN settings")
        .parts(LOWPAN_PARTS)
        .properties(vec![validated("parent", validate_ifname)
            .cli("dev")
            .prompt("IEEE 802.15.4 (WPAN) parent device or connection UUID")
            .doc("Parent WPAN interface.")])
}

pub(super) fn settings() -> Vec<SettingDescriptor> {
    vec![ethernet(), infiniband(), wpan(), lowpan()]
}

#[cfg(test)]
mod tests {
    use crate::env::Environment;
    use crate::meta::registry::registry;
    use crate::models::OutputMode;
    use crate::store::{ConfigStoreExt, Connection};

    #[test]
    fn test_mac_blacklist_atomic() {
        let p = registry().lookup("ethernet.mac-address-blacklist").unwrap();
        let mut conn = Connection::new();
        let env = Environment::default();
        assert!(p
            .set(&env, &mut conn, "00:11:22:33:44:55, zz:zz".into())
            .is_err());
        assert!(conn.get_list("802-3-ethernet", "mac-address-blacklist").is_empty());
        p.set(&env, &mut conn, "00:11:22:33:44:55 aa:bb:cc:dd:ee:ff".into())
            .unwrap();
        assert_eq!(
            p.get(&conn, OutputMode::Parsable, false).text,
            "00:11:22:33:44:55,AA:BB:CC:DD:EE:FF"
        );
    }

    #[test]
    fn test_cloned_mac_keywords() {
        let p = registry().lookup("802-3-ethernet.cloned-mac-address").unwrap();
        let mut conn = Connection::new();
        let env = Environment::default();
        p.set(&env, &mut conn, "stable".into()).unwrap();
        assert_eq!(p.get(&conn, OutputMode::Parsable, false).text, "stable");
        p.set(&env, &mut conn, "".into()).unwrap();
        assert!(p.is_default(&conn));
    }

    #[test]
    fn test_mtu_auto() {
        let p = registry().lookup("802-3-ethernet.mtu").unwrap();
        let mut conn = Connection::new();
        assert_eq!(p.get(&conn, OutputMode::Pretty, false).text, "auto");
        p.set(&Environment::default(), &mut conn, "9000".into()).unwrap();
        assert_eq!(p.get(&conn, OutputMode::Parsable, false).text, "9000");
    }

    #[test]
    fn test_s390_options() {
        let p = registry().lookup("802-3-ethernet.s390-options").unwrap();
        let mut conn = Connection::new();
        let env = Environment::default();
        p.set(&env, &mut conn, "portno=1,layer2=0".into()).unwrap();
        assert_eq!(
            p.get(&conn, OutputMode::Parsable, false).text,
            "layer2=0,portno=1"
        );
        assert!(p.set(&env, &mut conn, "bogus=1".into()).is_err());
        p.remove(&mut conn, "layer2").unwrap();
        assert_eq!(p.get(&conn, OutputMode::Parsable, false).text, "portno=1");
    }

    #[test]
    fn test_wpan_hex() {
        let p = registry().lookup("wpan.pan-id").unwrap();
        let mut conn = Connection::new();
        assert_eq!(p.get(&conn, OutputMode::Parsable, false).text, "0xffff");
        p.set(&Environment::default(), &mut conn, "0x1234".into())
            .unwrap();
        assert_eq!(p.get(&conn, OutputMode::Parsable, false).text, "0x1234");
    }
}
