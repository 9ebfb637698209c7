// Network Manager - Wireless Setting Tables
// Copyright (C) 2026 Christos A. Daggas
// SPDX-License-Identifier: MIT

//! Wi-Fi, Wi-Fi security, OLPC mesh, Wi-Fi P2P, WiMAX and 802.1X.

use super::*;
use crate::codecs::enums::{ev, EnumFormat};
use crate::meta::custom::{SSID, WEP_KEYS, WIFI_CHANNEL};
use crate::meta::setting::ValidPart;
use crate::meta::validators::{validate_mac, wep_key_type_pre_set};
use crate::models::Value;

const WIRELESS_PARTS: &[ValidPart] = &[
    ValidPart::mandatory("connection"),
    ValidPart::mandatory("802-11-wireless"),
    ValidPart::optional("802-11-wireless-security"),
    ValidPart::optional("802-1x"),
    ValidPart::optional("ethtool"),
];

const OLPC_MESH_PARTS: &[ValidPart] = &[
    ValidPart::mandatory("connection"),
    ValidPart::mandatory("802-11-olpc-mesh"),
];

const WIFI_P2P_PARTS: &[ValidPart] = &[
    ValidPart::mandatory("connection"),
    ValidPart::mandatory("wifi-p2p"),
];

const WIMAX_PARTS: &[ValidPart] = &[
    ValidPart::mandatory("connection"),
    ValidPart::mandatory("wimax"),
];

const MAC_RANDOMIZATION: EnumSpec = EnumSpec::enumeration(
    "SettingMacRandomization",
    &[ev("default", 0), ev("never", 1), ev("always", 2)],
)
.range(0, 2)
.formats(EnumFormat::TEXT, EnumFormat::TEXT);

const POWERSAVE: EnumSpec = EnumSpec::enumeration(
    "SettingWirelessPowersave",
    &[
        ev("default", 0),
        ev("ignore", 1),
        ev("disable", 2),
        ev("enable", 3),
    ],
)
.range(0, 3);

const WAKE_ON_WLAN: EnumSpec = EnumSpec::flags(
    "SettingWirelessWakeOnWLan",
    &[
        ev("default", 0x1),
        ev("any", 0x2),
        ev("disconnect", 0x4),
        ev("magic", 0x8),
        ev("gtk-rekey-failure", 0x10),
        ev("eap-identity-request", 0x20),
        ev("4way-handshake", 0x40),
        ev("rfkill-release", 0x80),
        ev("tcp", 0x100),
        ev("ignore", 0x8000),
    ],
)
.range(0, 0x81FF);

const PMF: EnumSpec = EnumSpec::enumeration(
    "SettingWirelessSecurityPmf",
    &[
        ev("default", 0),
        ev("disable", 1),
        ev("optional", 2),
        ev("required", 3),
    ],
)
.range(0, 3);

const FILS: EnumSpec = EnumSpec::enumeration(
    "SettingWirelessSecurityFils",
    &[
        ev("default", 0),
        ev("disable", 1),
        ev("optional", 2),
        ev("required", 3),
    ],
)
.range(0, 3);

const WPS_METHOD: EnumSpec = EnumSpec::flags(
    "SettingWirelessSecurityWpsMethod",
    &[
        ev("default", 0x0),
        ev("disabled", 0x1),
        ev("auto", 0x2),
        ev("pbc", 0x4),
        ev("pin", 0x8),
    ],
)
.range(0, 0xF);

const WEP_KEY_TYPE: EnumSpec = EnumSpec::enumeration(
    "WepKeyType",
    &[ev("unknown", 0), ev("key", 1), ev("passphrase", 2)],
)
.range(0, 2)
.formats(EnumFormat::NUMERIC_TEXT, EnumFormat::NUMERIC);

const WEP_KEY_TYPE_MESSAGE: &str = "Enter the type of WEP keys. The accepted values are: \
0 or unknown, 1 or key, and 2 or passphrase.";

const PHASE1_FAST_PROVISIONING: EnumSpec = EnumSpec::enumeration(
    "Setting8021xFastProvisioning",
    &[
        ev("disabled", 0),
        ev("anonymous", 1),
        ev("authenticated", 2),
        ev("both", 3),
    ],
)
.range(0, 3);

const EAP_METHODS: &[&str] = &["leap", "md5", "tls", "peap", "ttls", "sim", "fast", "pwd"];
const PHASE2_AUTH: &[&str] = &[
    "pap", "chap", "mschap", "mschapv2", "gtc", "otp", "md5", "tls",
];
const PHASE2_AUTHEAP: &[&str] = &["md5", "mschapv2", "otp", "gtc", "tls"];

const EAP_MESSAGE: &str = "Enter file path to CA certificate (optionally prefixed with file://).\n  \
[file://]<file path>\nNote that nmcli does not support specifying certificates as raw blob data.\n\
Example: /home/cimrman/cacert.crt";

fn wireless() -> SettingDescriptor {
    SettingDescriptor::new("802-11-wireless", "Wi-Fi connection")
        .alias("wifi")
        .parts(WIRELESS_PARTS)
        .properties(vec![
            PropertyDescriptor::new("ssid", ValueContract::Custom(&SSID))
                .cli("ssid")
                .prompt("SSID")
                .doc("SSID of the network."),
            choice("mode", &["infrastructure", "adhoc", "ap", "mesh"])
                .cli("mode")
                .doc("Wi-Fi network mode."),
            choice("band", &["a", "bg"]).doc("802.11 frequency band."),
            PropertyDescriptor::new("channel", ValueContract::Custom(&WIFI_CHANNEL))
                .doc("Wireless channel; requires 'band'."),
            validated("bssid", validate_mac).doc("BSSID to lock the connection to."),
            u32_prop("rate").doc("Fixed transmit rate in kbit/s."),
            u32_prop("tx-power").doc("Transmit power in mW."),
            mac("mac-address", MacMode::Default)
                .cli("mac")
                .doc("Permanent MAC address of the device."),
            mac("cloned-mac-address", MacMode::Cloned)
                .doc("MAC address set on the device at activation."),
            text("generate-mac-address-mask")
                .doc("Mask applied to generated MAC addresses."),
            validated_list("mac-address-blacklist", validate_mac)
                .doc("MAC addresses of devices this connection must not apply to."),
            enumeration("mac-address-randomization", MAC_RANDOMIZATION)
                .doc("Whether the MAC is randomized while scanning."),
            mtu("mtu").doc("MTU; 'auto' keeps the device default."),
            validated_list("seen-bssids", validate_mac)
                .read_only()
                .doc("BSSIDs seen while connected."),
            boolean("hidden").doc("Whether the network does not broadcast its SSID."),
            enumeration("powersave", POWERSAVE).doc("Wi-Fi power saving behaviour."),
            enumeration("wake-on-wlan", WAKE_ON_WLAN)
                .defaults_to(Value::Int(0x1))
                .doc("Wake-on-WLAN options."),
        ])
}

fn wireless_security() -> SettingDescriptor {
    SettingDescriptor::new("802-11-wireless-security", "Wi-Fi security settings")
        .alias("wifi-sec")
        .properties(vec![
            choice(
                "key-mgmt",
                &["none", "ieee8021x", "wpa-none", "wpa-psk", "wpa-eap", "sae"],
            )
            .prompt("Key management")
            .doc("Key management used by the connection."),
            uint("wep-tx-keyidx", 0, 3).doc("Index of the WEP key used for transmission."),
            choice("auth-alg", &["open", "shared", "leap"])
                .doc("802.11 authentication algorithm for WEP."),
            choice_list("proto", &["wpa", "rsn"]).doc("Allowed WPA protocol versions."),
            choice_list("pairwise", &["tkip", "ccmp"]).doc("Allowed pairwise ciphers."),
            choice_list("group", &["wep40", "wep104", "tkip", "ccmp"])
                .doc("Allowed group ciphers."),
            enumeration("pmf", PMF).doc("Protected management frames policy."),
            text("leap-username").doc("LEAP user name."),
            PropertyDescriptor::new("wep-key0", ValueContract::Custom(&WEP_KEYS[0]))
                .secret()
                .doc("WEP key 0."),
            PropertyDescriptor::new("wep-key1", ValueContract::Custom(&WEP_KEYS[1]))
                .secret()
                .doc("WEP key 1."),
            PropertyDescriptor::new("wep-key2", ValueContract::Custom(&WEP_KEYS[2]))
                .secret()
                .doc("WEP key 2."),
            PropertyDescriptor::new("wep-key3", ValueContract::Custom(&WEP_KEYS[3]))
                .secret()
                .doc("WEP key 3."),
            secret_flags("wep-key-flags"),
            PropertyDescriptor::scalar(
                "wep-key-type",
                Scalar::Enum {
                    spec: WEP_KEY_TYPE,
                    names: None,
                    pre_set: Some(wep_key_type_pre_set),
                },
            )
            .message(WEP_KEY_TYPE_MESSAGE)
            .doc("How WEP keys are interpreted."),
            secret("psk").doc("Pre-shared key for WPA networks."),
            secret_flags("psk-flags"),
            secret("leap-password").doc("LEAP password."),
            secret_flags("leap-password-flags"),
            enumeration("wps-method", WPS_METHOD).doc("WPS methods to try."),
            enumeration("fils", FILS).doc("FILS policy."),
        ])
}

fn olpc_mesh() -> SettingDescriptor {
    SettingDescriptor::new("802-11-olpc-mesh", "OLPC Mesh connection")
        .alias("olpc-mesh")
        .parts(OLPC_MESH_PARTS)
        .properties(vec![
            PropertyDescriptor::new("ssid", ValueContract::Custom(&SSID))
                .cli("ssid")
                .prompt("SSID")
                .doc("SSID of the mesh network."),
            uint("channel", 1, 13).doc("Mesh channel."),
            validated("dhcp-anycast-address", validate_mac)
                .doc("Anycast DHCP MAC address."),
        ])
}

fn wifi_p2p() -> SettingDescriptor {
    SettingDescriptor::new("wifi-p2p", "Wi-Fi P2P connection")
        .parts(WIFI_P2P_PARTS)
        .properties(vec![
            validated("peer", validate_mac)
                .cli("peer")
                .prompt("Peer")
                .doc("MAC address of the peer."),
            enumeration("wps-method", WPS_METHOD).doc("WPS methods to try."),
            bytes("wfd-ies").doc("Wi-Fi Display information elements."),
        ])
}

fn wimax() -> SettingDescriptor {
    SettingDescriptor::new("wimax", "WiMAX connection")
        .parts(WIMAX_PARTS)
        .properties(vec![
            mac("mac-address", MacMode::Default)
                .cli("mac")
                .doc("MAC address of the device."),
            text("network-name")
                .cli("nsp")
                .prompt("WiMAX NSP name")
                .doc("Network service provider name."),
        ])
}

fn ieee8021x() -> SettingDescriptor {
    SettingDescriptor::new("802-1x", "802-1x settings")
        .properties(vec![
            choice_list("eap", EAP_METHODS).doc("Allowed EAP methods."),
            text("identity").doc("Identity string for EAP authentication."),
            text("anonymous-identity").doc("Anonymous identity for tunneled methods."),
            text("pac-file").doc("PAC file for EAP-FAST."),
            text("ca-cert")
                .message(EAP_MESSAGE)
                .doc("CA certificate path."),
            secret("ca-cert-password"),
            secret_flags("ca-cert-password-flags"),
            text("ca-path").doc("Directory of CA certificates."),
            text("subject-match").doc("Required substring of the server certificate subject."),
            string_list("altsubject-matches")
                .doc("Alternative subject names the server certificate must carry."),
            text("domain-suffix-match").doc("Required server domain suffix."),
            text("client-cert").doc("Client certificate path."),
            secret("client-cert-password"),
            secret_flags("client-cert-password-flags"),
            choice("phase1-peapver", &["0", "1"]).doc("Forced PEAP version."),
            choice("phase1-peaplabel", &["0", "1"]).doc("PEAP label variant."),
            enumeration("phase1-fast-provisioning", PHASE1_FAST_PROVISIONING)
                .doc("EAP-FAST provisioning mode."),
            choice("phase2-auth", PHASE2_AUTH).doc("Inner non-EAP authentication."),
            choice("phase2-autheap", PHASE2_AUTHEAP).doc("Inner EAP authentication."),
            text("phase2-ca-cert").doc("Inner CA certificate path."),
            text("phase2-ca-path").doc("Inner CA certificate directory."),
            text("phase2-subject-match"),
            string_list("phase2-altsubject-matches"),
            text("phase2-domain-suffix-match"),
            text("phase2-client-cert").doc("Inner client certificate path."),
            secret("password").doc("Password for EAP authentication."),
            secret_flags("password-flags"),
            bytes("password-raw").secret(),
            secret_flags("password-raw-flags"),
            text("private-key").doc("Private key path."),
            secret("private-key-password"),
            secret_flags("private-key-password-flags"),
            text("phase2-private-key").doc("Inner private key path."),
            secret("phase2-private-key-password"),
            secret_flags("phase2-private-key-password-flags"),
            secret("pin").doc("PIN for EAP-SIM."),
            secret_flags("pin-flags"),
            boolean("system-ca-certs").doc("Whether the system CA store is used."),
            i32_prop("auth-timeout").doc("Authentication timeout in seconds; 0 is default."),
        ])
}

pub(super) fn settings() -> Vec<SettingDescriptor> {
    vec![
        wireless(),
        wireless_security(),
        olpc_mesh(),
        wifi_p2p(),
        wimax(),
        ieee8021x(),
    ]
}

#[cfg(test)]
mod tests {
    use crate::env::Environment;
    use crate::meta::registry::registry;
    use crate::models::OutputMode;
    use crate::store::Connection;

    #[test]
    fn test_wep_key_type_text() {
        let p = registry().lookup("wifi-sec.wep-key-type").unwrap();
        let mut conn = Connection::new();
        p.set(&Environment::default(), &mut conn, "passphrase".into())
            .unwrap();
        assert_eq!(p.get(&conn, OutputMode::Pretty, false).text, "2 (passphrase)");
        assert_eq!(p.get(&conn, OutputMode::Parsable, false).text, "2");
        assert!(p.describe().contains("0 or unknown, 1 or key"));
    }

    #[test]
    fn test_cipher_lists() {
        let p = registry().lookup("802-11-wireless-security.pairwise").unwrap();
        let mut conn = Connection::new();
        let env = Environment::default();
        p.set(&env, &mut conn, "ccmp".into()).unwrap();
        p.set(&env, &mut conn, "tkip".into()).unwrap();
        assert_eq!(p.get(&conn, OutputMode::Parsable, false).text, "ccmp,tkip");
        assert!(p.set(&env, &mut conn, "wep40".into()).is_err());
        p.remove(&mut conn, "ccmp").unwrap();
        assert_eq!(p.get(&conn, OutputMode::Parsable, false).text, "tkip");
    }

    #[test]
    fn test_psk_is_hidden() {
        let p = registry().lookup("802-11-wireless-security.psk").unwrap();
        let mut conn = Connection::new();
        p.set(&Environment::default(), &mut conn, "supersecret".into())
            .unwrap();
        assert_eq!(p.get(&conn, OutputMode::Parsable, false).text, "<hidden>");
        assert_eq!(p.get(&conn, OutputMode::Parsable, true).text, "supersecret");
    }

    #[test]
    fn test_seen_bssids_read_only() {
        let p = registry().lookup("802-11-wireless.seen-bssids").unwrap();
        let mut conn = Connection::new();
        assert!(p
            .set(&Environment::default(), &mut conn, "00:11:22:33:44:55".into())
            .is_err());
    }

    #[test]
    fn test_eap_prefix() {
        let p = registry().lookup("802-1x.eap").unwrap();
        let mut conn = Connection::new();
        p.set(&Environment::default(), &mut conn, "pe tt".into())
            .unwrap();
        assert_eq!(p.get(&conn, OutputMode::Parsable, false).text, "peap,ttls");
    }
}
