// Network Manager - Structured Value Parsers
// Copyright (C) 2026 Christos A. Daggas
// SPDX-License-Identifier: MIT

//! Grammars for compound property values.
//!
//! - **address**: `ip[/prefix]`
//! - **route**: `ip[/prefix] [next-hop] [metric] [attr=val]...`
//! - **link_watcher**: team link watcher `key=value` records
//! - **vlan**: ingress/egress priority maps
//! - **dcb**: 8-slot per-priority arrays
//! - **options**: `key=value,...` option maps
//! - **sriov**: SR-IOV virtual function records
//! - **qdisc**: traffic-control queueing disciplines

pub mod address;
pub mod dcb;
pub mod link_watcher;
pub mod options;
pub mod qdisc;
pub mod route;
pub mod sriov;
pub mod vlan;

pub use crate::models::validation::AddressFamily;
pub use address::IpAddress;
pub use dcb::DcbArraySpec;
pub use link_watcher::{ArpPingFlags, LinkWatcher};
pub use options::{OptionMapSpec, OptionStyle};
pub use qdisc::Qdisc;
pub use route::{IpRoute, RouteAttrValue};
pub use sriov::{SriovVf, SriovVlan};
pub use vlan::{PriorityMapEntry, PriorityMapKind};
