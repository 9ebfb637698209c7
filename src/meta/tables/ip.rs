// Network Manager - IP Setting Tables
// Copyright (C) 2026 Christos A. Daggas
// SPDX-License-Identifier: MIT

//! `ipv4` and `ipv6`.

use super::*;
use crate::codecs::enums::ev;
use crate::codecs::IntAlias;
use crate::meta::custom::DNS_OPTIONS;
use crate::meta::validators::{
    validate_ipv4_gateway, validate_ipv4_method, validate_ipv6_gateway, validate_ipv6_method,
    IPV4_METHODS, IPV6_METHODS,
};
use crate::models::validation::validate_search_domain;
use crate::models::{AddressFamily, Value};
use crate::multilist::COMMA;

const IP6_PRIVACY: EnumSpec = EnumSpec::enumeration(
    "SettingIP6ConfigPrivacy",
    &[
        ev("unknown", -1),
        ev("disabled", 0),
        ev("enabled-prefer-public-addr", 1),
        ev("enabled-prefer-temp-addr", 2),
    ],
)
.range(-1, 2);

const ADDR_GEN_MODE: EnumSpec = EnumSpec::enumeration(
    "SettingIP6ConfigAddrGenMode",
    &[ev("eui64", 0), ev("stable-privacy", 1)],
)
.range(0, 1);

const DHCP_TIMEOUT_ALIASES: &[IntAlias] = &[
    IntAlias {
        nick: "default",
        value: 0,
    },
    IntAlias {
        nick: "infinity",
        value: i32::MAX as i64,
    },
];

const DAD_TIMEOUT_ALIASES: &[IntAlias] = &[IntAlias {
    nick: "default",
    value: -1,
}];

const ROUTE_METRIC: IntSpec = IntSpec::new(IntKind::Int64).range(-1, u32::MAX as i64);

const IPV4_DNS_MESSAGE: &str = "Enter a list of IPv4 addresses of DNS servers.\n\n\
Example: 8.8.8.8, 8.8.4.4";

const IPV4_ADDRESSES_MESSAGE: &str = "Enter a list of IPv4 addresses formatted as:\n  \
ip[/prefix], ip[/prefix],...\n\
Missing prefix is regarded as prefix of 32.\n\n\
Example: 192.168.1.5/24, 10.0.0.11/24";

const IPV4_ROUTES_MESSAGE: &str = "Enter a list of IPv4 routes formatted as:\n  \
ip[/prefix] [next-hop] [metric],...\n\n\
Missing prefix is regarded as a prefix of 32.\n\
Missing next-hop is regarded as 0.0.0.0.\n\
Missing metric means default (NM/kernel will set a default value).\n\n\
Examples: 192.168.2.0/24 192.168.2.1 3, 10.1.0.0/16 10.0.0.254\n          \
10.1.2.0/24";

const IPV6_DNS_MESSAGE: &str = "Enter a list of IPv6 addresses of DNS servers. If the IPv6 \
configuration method is 'auto' these DNS servers are appended \
to those (if any) returned by automatic configuration.\n\n\
Example: 2607:f0d0:1002:51::4, 2607:f0d0:1002:51::1";

const IPV6_ADDRESSES_MESSAGE: &str = "Enter a list of IPv6 addresses formatted as:\n  \
ip[/prefix], ip[/prefix],...\n\
Missing prefix is regarded as prefix of 128.\n\n\
Example: 2607:f0d0:1002:51::4/64, 1050:0:0:0:5:600:300c:326b";

const IPV6_ROUTES_MESSAGE: &str = "Enter a list of IPv6 routes formatted as:\n  \
ip[/prefix] [next-hop] [metric],...\n\n\
Missing prefix is regarded as a prefix of 128.\n\
Missing next-hop is regarded as \"::\".\n\
Missing metric means default (NM/kernel will set a default value).\n\n\
Examples: 2001:db8:beef:2::/64 2001:db8:beef::2, 2001:db8:beef:3::/64 2001:db8:beef::3 2\n          \
abbe::/64 55";

/// Properties shared by both families, in table order.
fn common(family: AddressFamily) -> Vec<PropertyDescriptor> {
    let (methods, validate_method, validate_gateway, dns_msg, addr_msg, route_msg) = match family
    {
        AddressFamily::V4 => (
            IPV4_METHODS,
            validate_ipv4_method as TextValidator,
            validate_ipv4_gateway as TextValidator,
            IPV4_DNS_MESSAGE,
            IPV4_ADDRESSES_MESSAGE,
            IPV4_ROUTES_MESSAGE,
        ),
        AddressFamily::V6 => (
            IPV6_METHODS,
            validate_ipv6_method as TextValidator,
            validate_ipv6_gateway as TextValidator,
            IPV6_DNS_MESSAGE,
            IPV6_ADDRESSES_MESSAGE,
            IPV6_ROUTES_MESSAGE,
        ),
    };
    let (ip_alias, gw_alias) = match family {
        AddressFamily::V4 => ("ip4", "gw4"),
        AddressFamily::V6 => ("ip6", "gw6"),
    };

    vec![
        PropertyDescriptor::scalar(
            "method",
            Scalar::Text {
                validate: Some(validate_method),
                values: methods,
            },
        )
        .doc("IP configuration method."),
        list(
            "dns",
            ListContract::new(ItemCodec::Dns(family), LIST_SEPARATORS),
        )
        .message(dns_msg)
        .doc("DNS servers."),
        validated_list("dns-search", validate_search_domain)
            .doc("DNS search domains."),
        PropertyDescriptor::new("dns-options", ValueContract::Custom(&DNS_OPTIONS))
            .doc("DNS resolver options."),
        i32_prop("dns-priority").doc("Priority of the DNS servers of this connection."),
        list("addresses", ListContract::new(ItemCodec::Address(family), COMMA))
            .cli(ip_alias)
            .message(addr_msg)
            .doc("Static addresses."),
        validated("gateway", validate_gateway)
            .cli(gw_alias)
            .doc("Default gateway."),
        list("routes", ListContract::new(ItemCodec::Route(family), COMMA))
            .message(route_msg)
            .doc("Static routes."),
        int("route-metric", ROUTE_METRIC)
            .defaults_to(Value::Int(-1))
            .doc("Metric of the default route and static routes without a metric."),
        u32_prop("route-table").doc("Routing table for routes without an explicit table."),
        boolean("ignore-auto-routes").doc("Ignore automatically obtained routes."),
        boolean("ignore-auto-dns").doc("Ignore automatically obtained DNS servers."),
    ]
}

fn ipv4() -> SettingDescriptor {
    let mut properties = common(AddressFamily::V4);
    properties.extend([
        text("dhcp-client-id").doc("DHCP client identifier."),
        int(
            "dhcp-timeout",
            IntSpec::new(IntKind::Int32)
                .range(0, i32::MAX as i64)
                .aliases(DHCP_TIMEOUT_ALIASES),
        )
        .doc("Seconds to wait for a DHCP lease."),
        boolean("dhcp-send-hostname")
            .defaults_to(Value::Bool(true))
            .doc("Whether the hostname is sent to the DHCP server."),
        text("dhcp-hostname").doc("Hostname sent to the DHCP server."),
        text("dhcp-fqdn").doc("Fully qualified name sent to the DHCP server."),
        boolean("never-default").doc("Never use this connection for the default route."),
        boolean("may-fail")
            .defaults_to(Value::Bool(true))
            .doc("Whether activation may succeed without IPv4."),
        int(
            "dad-timeout",
            IntSpec::new(IntKind::Int32)
                .range(-1, 30000)
                .aliases(DAD_TIMEOUT_ALIASES),
        )
        .defaults_to(Value::Int(-1))
        .doc("Duplicate address detection timeout in milliseconds."),
    ]);
    SettingDescriptor::new("ipv4", "IPv4 protocol").properties(properties)
}

fn ipv6() -> SettingDescriptor {
    let mut properties = common(AddressFamily::V6);
    properties.extend([
        boolean("never-default").doc("Never use this connection for the default route."),
        boolean("may-fail")
            .defaults_to(Value::Bool(true))
            .doc("Whether activation may succeed without IPv6."),
        enumeration("ip6-privacy", IP6_PRIVACY)
            .defaults_to(Value::Int(-1))
            .doc("IPv6 privacy extensions."),
        enumeration("addr-gen-mode", ADDR_GEN_MODE)
            .defaults_to(Value::Int(1))
            .doc("How the interface identifier of SLAAC addresses is generated."),
        text("dhcp-duid").doc("DHCPv6 unique identifier."),
        boolean("dhcp-send-hostname")
            .defaults_to(Value::Bool(true))
            .doc("Whether the hostname is sent to the DHCP server."),
        text("dhcp-hostname").doc("Hostname sent to the DHCP server."),
        validated("token", validate_ipv6_gateway).doc("Interface identifier token."),
    ]);
    SettingDescriptor::new("ipv6", "IPv6 protocol").properties(properties)
}

pub(super) fn settings() -> Vec<SettingDescriptor> {
    vec![ipv4(), ipv6()]
}

#[cfg(test)]
mod tests {
    use crate::env::Environment;
    use crate::meta::property::SetValue;
    use crate::meta::registry::registry;
    use crate::models::OutputMode;
    use crate::store::{ConfigStoreExt, Connection};

    #[test]
    fn test_method_static_alias() {
        let p = registry().lookup("ipv4.method").unwrap();
        let mut conn = Connection::new();
        p.set(&Environment::default(), &mut conn, "static".into())
            .unwrap();
        assert_eq!(p.get(&conn, OutputMode::Parsable, false).text, "manual");
        assert_eq!(p.values(&Environment::default()).len(), 5);
    }

    #[test]
    fn test_addresses_and_routes() {
        let env = Environment::default();
        let mut conn = Connection::new();
        let addresses = registry().lookup("ipv4.addresses").unwrap();
        addresses
            .set(&env, &mut conn, "192.168.1.5, 10.0.0.0/24".into())
            .unwrap();
        assert_eq!(
            addresses.get(&conn, OutputMode::Parsable, false).text,
            "192.168.1.5/32, 10.0.0.0/24"
        );

        let routes = registry().lookup("ipv4.routes").unwrap();
        routes
            .set(&env, &mut conn, "192.168.2.0/24 192.168.2.1 3".into())
            .unwrap();
        let err = routes
            .set(&env, &mut conn, "10.0.0.0/8, 192.168.2.0/24 3 192.168.2.1".into())
            .unwrap_err();
        assert_eq!(err.property(), Some("routes"));
        assert_eq!(conn.get_list("ipv4", "routes").len(), 1);
        routes.remove(&mut conn, "0").unwrap();
        assert!(routes.is_default(&conn));
    }

    #[test]
    fn test_dns_family_checked() {
        let env = Environment::default();
        let mut conn = Connection::new();
        let dns = registry().lookup("ipv6.dns").unwrap();
        assert!(dns.set(&env, &mut conn, "8.8.8.8".into()).is_err());
        dns.set(&env, &mut conn, "2001:4860:4860::8888".into()).unwrap();
        dns.set(&env, &mut conn, SetValue::Reset).unwrap();
        assert!(dns.is_default(&conn));
    }

    #[test]
    fn test_route_metric_default() {
        let p = registry().lookup("ipv6.route-metric").unwrap();
        let conn = Connection::new();
        assert_eq!(p.get(&conn, OutputMode::Parsable, false).text, "-1");
        assert!(p.get(&conn, OutputMode::Parsable, false).is_default);
    }
}
