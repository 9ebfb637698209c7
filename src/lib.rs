// Network Manager - Property Registry Library
// Copyright (C) 2026 Christos A. Daggas
// SPDX-License-Identifier: MIT

//! # nm-meta
//!
//! Typed property registry and text marshalling for network connection
//! settings.
//!
//! Every property of every setting is described once, with a value contract
//! that knows how to parse user text, render stored values, merge list
//! items and offer completions. The registry is built on first use and is
//! immutable afterwards.
//!
//! ```no_run
//! use nm_meta::env::Environment;
//! use nm_meta::meta::registry;
//! use nm_meta::models::OutputMode;
//! use nm_meta::store::Connection;
//!
//! let mut conn = Connection::new();
//! let mtu = registry().lookup("ethernet.mtu").unwrap();
//! mtu.set(&Environment::default(), &mut conn, "9000".into()).unwrap();
//! assert_eq!(mtu.get(&conn, OutputMode::Parsable, false).text, "9000");
//! ```

pub mod codecs;
pub mod env;
pub mod inventory;
pub mod meta;
pub mod models;
pub mod multilist;
pub mod parsers;
pub mod store;

pub use models::{Error, Result};
