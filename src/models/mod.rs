// Network Manager - Shared Models
// Copyright (C) 2026 Christos A. Daggas
// SPDX-License-Identifier: MIT

//! # Shared Models
//!
//! Types shared by every layer of the property registry:
//!
//! - **Value**: typed property values held by a configuration store
//! - **Error**: error taxonomy for property operations
//! - **Config**: persisted tool configuration
//! - **Validation**: low-level validators (addresses, names, keys)

pub mod config;
pub mod error;
pub mod validation;
pub mod value;

// Re-export main types for convenience
pub use config::MetaConfig;
pub use error::{Error, Result};
pub use validation::AddressFamily;
pub use value::{DnsOptions, Item, OutputMode, Value};

/// Crate version reported by the introspection tool.
pub const CRATE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Configuration directory name (under XDG_CONFIG_HOME).
pub const CONFIG_DIR_NAME: &str = "nm-meta";

/// Configuration file name inside [`CONFIG_DIR_NAME`].
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Token rendered in place of a secret value.
pub const TEXT_HIDDEN: &str = "<hidden>";
