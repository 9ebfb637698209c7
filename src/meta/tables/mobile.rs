// Network Manager - Mobile Broadband And Serial Setting Tables
// Copyright (C) 2026 Christos A. Daggas
// SPDX-License-Identifier: MIT

//! GSM, CDMA, Bluetooth, ADSL, PPP, PPPoE and serial links.

use super::*;
use crate::meta::setting::ValidPart;
use crate::meta::validators::{validate_mac, validate_not_empty};
use crate::models::validation::{validate_ifname, validate_sim_operator_id};
use crate::models::Value;

const GSM_PARTS: &[ValidPart] = &[
    ValidPart::mandatory("connection"),
    ValidPart::mandatory("gsm"),
    ValidPart::optional("serial"),
    ValidPart::optional("ppp"),
];

const CDMA_PARTS: &[ValidPart] = &[
    ValidPart::mandatory("connection"),
    ValidPart::mandatory("cdma"),
    ValidPart::optional("serial"),
    ValidPart::optional("ppp"),
];

const BLUETOOTH_PARTS: &[ValidPart] = &[
    ValidPart::mandatory("connection"),
    ValidPart::mandatory("bluetooth"),
    ValidPart::optional("bridge"),
    ValidPart::optional("gsm"),
    ValidPart::optional("cdma"),
];

const ADSL_PARTS: &[ValidPart] = &[
    ValidPart::mandatory("connection"),
    ValidPart::mandatory("adsl"),
];

const PPPOE_PARTS: &[ValidPart] = &[
    ValidPart::mandatory("connection"),
    ValidPart::mandatory("pppoe"),
    ValidPart::mandatory("802-3-ethernet"),
    ValidPart::optional("ppp"),
    ValidPart::optional("802-1x"),
    ValidPart::optional("ethtool"),
];

const PARITY: &[&str] = &["E", "O", "n"];

const PARITY_MESSAGE: &str = "Enter the parity: 'E' (even), 'O' (odd) or 'n' (none).";

fn gsm() -> SettingDescriptor {
    SettingDescriptor::new("gsm", "GSM mobile broadband")
        .parts(GSM_PARTS)
        .properties(vec![
            text("number").doc("Number dialed to establish the PPP session."),
            text("username").cli("user").doc("User name for the network."),
            secret("password").cli("password").doc("Password for the network."),
            secret_flags("password-flags"),
            text("apn")
                .cli("apn")
                .prompt("APN")
                .doc("Access point name of the GPRS/UMTS network."),
            text("network-id").doc("Operator MCC/MNC to register with."),
            secret("pin").doc("SIM PIN."),
            secret_flags("pin-flags"),
            boolean("home-only").doc("Whether roaming is forbidden."),
            text("device-id").doc("Modem device identifier."),
            text("sim-id").doc("SIM card identifier."),
            validated("sim-operator-id", validate_sim_operator_id)
                .doc("MCC/MNC of the SIM operator."),
            mtu("mtu").doc("MTU; 'auto' keeps the device default."),
        ])
}

fn cdma() -> SettingDescriptor {
    SettingDescriptor::new("cdma", "CDMA mobile broadband")
        .parts(CDMA_PARTS)
        .properties(vec![
            text("number").doc("Number dialed to establish the PPP session."),
            text("username").cli("user"),
            secret("password").cli("password"),
            secret_flags("password-flags"),
            mtu("mtu"),
        ])
}

fn bluetooth() -> SettingDescriptor {
    SettingDescriptor::new("bluetooth", "Bluetooth connection")
        .parts(BLUETOOTH_PARTS)
        .properties(vec![
            validated("bdaddr", validate_mac)
                .cli("addr")
                .prompt("Bluetooth device address")
                .doc("Address of the remote device."),
            choice("type", &["dun", "panu", "nap"])
                .cli("bt-type")
                .prompt("Bluetooth type")
                .doc("Bluetooth profile used by the connection."),
        ])
}

fn adsl() -> SettingDescriptor {
    SettingDescriptor::new("adsl", "ADSL connection")
        .parts(ADSL_PARTS)
        .properties(vec![
            validated("username", validate_not_empty)
                .cli("username")
                .prompt("Username"),
            secret("password").cli("password"),
            secret_flags("password-flags"),
            choice("protocol", &["pppoa", "pppoe", "ipoatm"])
                .cli("protocol")
                .prompt("Protocol"),
            choice("encapsulation", &["vcmux", "llc"])
                .cli("encapsulation")
                .doc("Encapsulation of the ATM link."),
            u32_prop("vpi").doc("Virtual path identifier."),
            u32_prop("vci").doc("Virtual channel identifier."),
        ])
}

fn ppp() -> SettingDescriptor {
    SettingDescriptor::new("ppp", "PPP settings").properties(vec![
        boolean("noauth")
            .defaults_to(Value::Bool(true))
            .doc("Whether the peer is not required to authenticate."),
        boolean("refuse-eap"),
        boolean("refuse-pap"),
        boolean("refuse-chap"),
        boolean("refuse-mschap"),
        boolean("refuse-mschapv2"),
        boolean("nobsdcomp"),
        boolean("nodeflate"),
        boolean("no-vj-comp"),
        boolean("require-mppe"),
        boolean("require-mppe-128"),
        boolean("mppe-stateful"),
        boolean("crtscts").doc("Whether hardware flow control is used."),
        u32_prop("baud"),
        u32_prop("mru").doc("Maximum receive unit; 0 keeps the default."),
        mtu("mtu"),
        u32_prop("lcp-echo-failure")
            .doc("Unanswered LCP echo requests before the peer is considered gone."),
        u32_prop("lcp-echo-interval").doc("Seconds between LCP echo requests."),
    ])
}

fn pppoe() -> SettingDescriptor {
    SettingDescriptor::new("pppoe", "PPPoE")
        .parts(PPPOE_PARTS)
        .properties(vec![
            validated("parent", validate_ifname).doc("Interface the session runs over."),
            text("service").cli("service").doc("Service name of the access concentrator."),
            validated("username", validate_not_empty)
                .cli("username")
                .prompt("Username"),
            secret("password").cli("password"),
            secret_flags("password-flags"),
        ])
}

fn serial() -> SettingDescriptor {
    SettingDescriptor::new("serial", "Serial link").properties(vec![
        u32_prop("baud").doc("Speed of the serial link."),
        uint("bits", 5, 8).defaults_to(Value::Int(8)).doc("Data bits."),
        choice("parity", PARITY)
            .message(PARITY_MESSAGE)
            .defaults_to(Value::text("n"))
            .doc("Parity of the serial link."),
        uint("stopbits", 1, 2).defaults_to(Value::Int(1)).doc("Stop bits."),
        u32_prop("send-delay").doc("Delay between bytes in microseconds."),
    ])
}

pub(super) fn settings() -> Vec<SettingDescriptor> {
    vec![
        gsm(),
        cdma(),
        bluetooth(),
        adsl(),
        ppp(),
        pppoe(),
        serial(),
    ]
}

#[cfg(test)]
mod tests {
    use crate::env::Environment;
    use crate::meta::registry::registry;
    use crate::models::OutputMode;
    use crate::store::Connection;

    #[test]
    fn test_sim_operator_id() {
        let p = registry().lookup("gsm.sim-operator-id").unwrap();
        let mut conn = Connection::new();
        let env = Environment::default();
        p.set(&env, &mut conn, "23415".into()).unwrap();
        assert!(p.set(&env, &mut conn, "2341".into()).is_err());
        assert!(p.set(&env, &mut conn, "23x15".into()).is_err());
        assert_eq!(p.get(&conn, OutputMode::Parsable, false).text, "23415");
    }

    #[test]
    fn test_bluetooth_type_prefix() {
        let p = registry().lookup("bluetooth.type").unwrap();
        let mut conn = Connection::new();
        p.set(&Environment::default(), &mut conn, "pa".into()).unwrap();
        assert_eq!(p.get(&conn, OutputMode::Parsable, false).text, "panu");
    }

    #[test]
    fn test_serial_defaults() {
        let conn = Connection::new();
        let parity = registry().lookup("serial.parity").unwrap();
        assert_eq!(parity.get(&conn, OutputMode::Parsable, false).text, "n");
        assert!(parity.is_default(&conn));
        let bits = registry().lookup("serial.bits").unwrap();
        assert_eq!(bits.get(&conn, OutputMode::Parsable, false).text, "8");
    }

    #[test]
    fn test_ppp_noauth_default() {
        let p = registry().lookup("ppp.noauth").unwrap();
        let mut conn = Connection::new();
        assert_eq!(p.get(&conn, OutputMode::Pretty, false).text, "yes");
        p.set(&Environment::default(), &mut conn, "no".into()).unwrap();
        assert!(!p.is_default(&conn));
    }
}
