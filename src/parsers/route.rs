// Network Manager - IP Route Parser
// Copyright (C) 2026 Christos A. Daggas
// SPDX-License-Identifier: MIT

//! `ip[/prefix] [next-hop] [metric] [attribute=val]...` route parser.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::net::IpAddr;

use super::address::{split_prefix, IpAddress};
use crate::codecs::boolean::parse_bool;
use crate::codecs::integer::parse_int;
use crate::models::validation::{parse_ip_for_family, AddressFamily};
use crate::models::{Error, OutputMode, Result};
use crate::multilist::split_items;

/// Grammar reminder appended to route syntax errors.
pub const ROUTE_SYNTAX: &str = "The valid syntax is: 'ip[/prefix] [next-hop] [metric] [attribute=val]... [,ip[/prefix] ...]'";

/// Typed value of a route attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum RouteAttrValue {
    U32(u32),
    U8(u8),
    Bool(bool),
    Address(IpAddr),
    Prefixed(IpAddress),
    Text(String),
}

impl fmt::Display for RouteAttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::U32(v) => write!(f, "{}", v),
            Self::U8(v) => write!(f, "{}", v),
            Self::Bool(v) => write!(f, "{}", v),
            Self::Address(a) => write!(f, "{}", a),
            Self::Prefixed(p) => write!(f, "{}", p),
            Self::Text(s) => f.write_str(s),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AttrType {
    U32,
    U8,
    Bool,
    Address,
    Prefixed,
    RouteType,
}

struct AttrSpec {
    name: &'static str,
    ty: AttrType,
    v4: bool,
    v6: bool,
}

const fn attr(name: &'static str, ty: AttrType, v4: bool, v6: bool) -> AttrSpec {
    AttrSpec { name, ty, v4, v6 }
}

const ROUTE_ATTRIBUTES: &[AttrSpec] = &[
    attr("cwnd", AttrType::U32, true, true),
    attr("from", AttrType::Prefixed, false, true),
    attr("initcwnd", AttrType::U32, true, true),
    attr("initrwnd", AttrType::U32, true, true),
    attr("lock-cwnd", AttrType::Bool, true, true),
    attr("lock-initcwnd", AttrType::Bool, true, true),
    attr("lock-initrwnd", AttrType::Bool, true, true),
    attr("lock-mtu", AttrType::Bool, true, true),
    attr("lock-window", AttrType::Bool, true, true),
    attr("mtu", AttrType::U32, true, true),
    attr("onlink", AttrType::Bool, true, true),
    attr("scope", AttrType::U8, true, false),
    attr("src", AttrType::Address, true, true),
    attr("table", AttrType::U32, true, true),
    attr("tos", AttrType::U8, true, false),
    attr("type", AttrType::RouteType, true, true),
    attr("window", AttrType::U32, true, true),
];

const ROUTE_TYPES: [&str; 6] = ["unicast", "local", "blackhole", "unreachable", "prohibit", "throw"];

/// Names of all known route attributes.
pub fn attribute_names() -> Vec<&'static str> {
    ROUTE_ATTRIBUTES.iter().map(|a| a.name).collect()
}

fn parse_attr_value(family: AddressFamily, spec: &AttrSpec, value: &str) -> Result<RouteAttrValue> {
    let bad = || {
        Error::invalid(
            value,
            format!("invalid value '{}' for attribute '{}'", value, spec.name),
        )
    };

    match spec.ty {
        AttrType::U32 => parse_int(value, 10, 0, u32::MAX as i64)
            .map(|v| RouteAttrValue::U32(v as u32))
            .map_err(|_| bad()),
        AttrType::U8 => parse_int(value, 0, 0, u8::MAX as i64)
            .map(|v| RouteAttrValue::U8(v as u8))
            .map_err(|_| bad()),
        AttrType::Bool => parse_bool(value).map(RouteAttrValue::Bool).map_err(|_| bad()),
        AttrType::Address => parse_ip_for_family(family, value)
            .map(RouteAttrValue::Address)
            .ok_or_else(bad),
        AttrType::Prefixed => IpAddress::parse(family, value)
            .map(RouteAttrValue::Prefixed)
            .map_err(|_| bad()),
        AttrType::RouteType => ROUTE_TYPES
            .iter()
            .find(|t| **t == value)
            .map(|t| RouteAttrValue::Text(t.to_string()))
            .ok_or_else(bad),
    }
}

/// Parse one `name=value` route attribute token.
fn parse_attribute(family: AddressFamily, token: &str) -> Result<(String, RouteAttrValue)> {
    let prefix = format!("invalid option '{}': ", token);

    let (name, value) = match token.split_once('=') {
        Some((n, v)) if !n.is_empty() => (n, v),
        _ => {
            return Err(Error::invalid(token, "attribute name is empty").prefixed(&prefix));
        }
    };

    let spec = ROUTE_ATTRIBUTES
        .iter()
        .find(|a| a.name == name)
        .ok_or_else(|| {
            Error::invalid(token, format!("unknown attribute '{}'", name)).prefixed(&prefix)
        })?;

    let parsed = parse_attr_value(family, spec, value).map_err(|e| e.prefixed(&prefix))?;

    let allowed = match family {
        AddressFamily::V4 => spec.v4,
        AddressFamily::V6 => spec.v6,
    };
    if !allowed {
        return Err(Error::invalid(
            token,
            format!("{}: attribute is not valid for an IPv{} route", name, family.as_char()),
        ));
    }

    Ok((name.to_string(), parsed))
}

/// A static route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IpRoute {
    pub dest: IpAddr,
    pub prefix: u8,
    pub next_hop: Option<IpAddr>,
    /// Route metric, -1 when unset.
    pub metric: i64,
    pub attributes: BTreeMap<String, RouteAttrValue>,
}

impl IpRoute {
    /// Parse one route.
    pub fn parse(family: AddressFamily, text: &str) -> Result<Self> {
        let tokens = split_items(text.trim(), &[' ', '\t']);
        let Some((first, rest)) = tokens.split_first() else {
            return Err(Error::invalid(
                text,
                format!("'{}' is not valid. {}", text, ROUTE_SYNTAX),
            ));
        };

        let (dest, prefix) = split_prefix(family, first)?;
        let dest = parse_ip_for_family(family, dest).ok_or_else(|| {
            Error::invalid(
                *first,
                format!(
                    "invalid route: Invalid IPv{} address '{}'. {}",
                    family.as_char(),
                    dest,
                    ROUTE_SYNTAX
                ),
            )
        })?;

        let mut route = Self {
            dest,
            prefix,
            next_hop: None,
            metric: -1,
            attributes: BTreeMap::new(),
        };

        for token in rest {
            if let Some(hop) = parse_ip_for_family(family, token) {
                if route.metric != -1 || !route.attributes.is_empty() {
                    return Err(Error::ambiguous(
                        *token,
                        format!("the next hop ('{}') must be first", token),
                    ));
                }
                route.next_hop = Some(hop);
            } else if let Ok(metric) = parse_int(token, 10, 0, u32::MAX as i64) {
                if !route.attributes.is_empty() {
                    return Err(Error::ambiguous(
                        *token,
                        format!("the metric ('{}') must be before attributes", token),
                    ));
                }
                route.metric = metric;
            } else if token.contains('=') {
                let (name, value) = parse_attribute(family, token)?;
                route.attributes.insert(name, value);
            } else {
                return Err(Error::invalid(*token, ROUTE_SYNTAX));
            }
        }

        Ok(route)
    }

    fn attributes_text(&self) -> Option<String> {
        if self.attributes.is_empty() {
            return None;
        }
        Some(
            self.attributes
                .iter()
                .map(|(k, v)| format!("{}={}", k, v))
                .collect::<Vec<_>>()
                .join(" "),
        )
    }

    /// Render in parsable form: `dest/prefix [next-hop] [metric] [attrs]`.
    pub fn to_parsable(&self) -> String {
        let mut out = format!("{}/{}", self.dest, self.prefix);
        if let Some(hop) = &self.next_hop {
            out.push_str(&format!(" {}", hop));
        }
        if self.metric != -1 {
            out.push_str(&format!(" {}", self.metric));
        }
        if let Some(attrs) = self.attributes_text() {
            out.push(' ');
            out.push_str(&attrs);
        }
        out
    }

    /// Render in pretty form: `{ ip = dest/prefix, nh = x, mt = m attrs }`.
    pub fn to_pretty(&self) -> String {
        let mut out = format!("{{ ip = {}/{}", self.dest, self.prefix);
        if let Some(hop) = &self.next_hop {
            out.push_str(&format!(", nh = {}", hop));
        }
        if self.metric != -1 {
            out.push_str(&format!(", mt = {}", self.metric));
        }
        if let Some(attrs) = self.attributes_text() {
            out.push(' ');
            out.push_str(&attrs);
        }
        out.push_str(" }");
        out
    }
}

/// Render a route list in the requested mode.
pub fn format_routes(routes: &[IpRoute], mode: OutputMode) -> String {
    match mode {
        OutputMode::Parsable => routes
            .iter()
            .map(IpRoute::to_parsable)
            .collect::<Vec<_>>()
            .join(", "),
        OutputMode::Pretty => routes
            .iter()
            .map(IpRoute::to_pretty)
            .collect::<Vec<_>>()
            .join("; "),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v4(text: &str) -> Result<IpRoute> {
        IpRoute::parse(AddressFamily::V4, text)
    }

    #[test]
    fn test_full_route() {
        let route = v4("192.168.2.0/24 192.168.2.1 3").unwrap();
        assert_eq!(route.dest.to_string(), "192.168.2.0");
        assert_eq!(route.prefix, 24);
        assert_eq!(route.next_hop.unwrap().to_string(), "192.168.2.1");
        assert_eq!(route.metric, 3);
    }

    #[test]
    fn test_bare_destination() {
        let route = v4("10.1.2.0/24").unwrap();
        assert_eq!(route.metric, -1);
        assert!(route.next_hop.is_none());
    }

    #[test]
    fn test_next_hop_after_metric_rejected() {
        let err = v4("192.168.2.0/24 3 192.168.2.1").unwrap_err();
        assert!(matches!(err, Error::AmbiguousToken { .. }));
        assert_eq!(err.to_string(), "the next hop ('192.168.2.1') must be first");
    }

    #[test]
    fn test_metric_after_attribute_rejected() {
        let err = v4("10.0.0.0/8 mtu=1400 5").unwrap_err();
        assert_eq!(err.to_string(), "the metric ('5') must be before attributes");
    }

    #[test]
    fn test_attributes() {
        let route = v4("10.0.0.0/8 10.0.0.1 100 onlink=true table=200 src=10.0.0.5").unwrap();
        assert_eq!(route.attributes.len(), 3);
        assert_eq!(
            route.to_parsable(),
            "10.0.0.0/8 10.0.0.1 100 onlink=true src=10.0.0.5 table=200"
        );
        assert_eq!(
            route.to_pretty(),
            "{ ip = 10.0.0.0/8, nh = 10.0.0.1, mt = 100 onlink=true src=10.0.0.5 table=200 }"
        );
    }

    #[test]
    fn test_bad_attributes() {
        let err = v4("10.0.0.0/8 foo=1").unwrap_err();
        assert_eq!(err.to_string(), "invalid option 'foo=1': unknown attribute 'foo'");

        let err = v4("10.0.0.0/8 mtu=abc").unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid option 'mtu=abc': invalid value 'abc' for attribute 'mtu'"
        );

        let err = IpRoute::parse(AddressFamily::V6, "2001:db8::/64 tos=4").unwrap_err();
        assert_eq!(err.to_string(), "tos: attribute is not valid for an IPv6 route");
    }

    #[test]
    fn test_syntax_error() {
        let err = v4("10.0.0.0/8 bogus").unwrap_err();
        assert_eq!(err.to_string(), ROUTE_SYNTAX);
    }

    #[test]
    fn test_parsable_round_trip() {
        let route = IpRoute::parse(AddressFamily::V6, "2001:db8::/64 fe80::1 10 from=2001:db8:1::/48")
            .unwrap();
        let again = IpRoute::parse(AddressFamily::V6, &route.to_parsable()).unwrap();
        assert_eq!(again, route);
    }

    #[test]
    fn test_format_list() {
        let routes = vec![v4("10.0.0.0/8").unwrap(), v4("10.1.0.0/16 10.0.0.1").unwrap()];
        assert_eq!(
            format_routes(&routes, OutputMode::Parsable),
            "10.0.0.0/8, 10.1.0.0/16 10.0.0.1"
        );
        assert_eq!(
            format_routes(&routes, OutputMode::Pretty),
            "{ ip = 10.0.0.0/8 }; { ip = 10.1.0.0/16, nh = 10.0.0.1 }"
        );
    }
}
