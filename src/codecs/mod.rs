// Network Manager - Scalar Codecs
// Copyright (C) 2026 Christos A. Daggas
// SPDX-License-Identifier: MIT

//! Stateless parse/format pairs for scalar property values.
//!
//! Each codec turns user text into a typed value and renders it back in
//! either [`OutputMode::Parsable`](crate::models::OutputMode) or pretty form.

pub mod boolean;
pub mod bytes;
pub mod enums;
pub mod flags;
pub mod integer;
pub mod mac;
pub mod ternary;

pub use boolean::{complete_bool, format_bool, parse_bool};
pub use bytes::{format_bytes, parse_bytes};
pub use enums::{EnumFormat, EnumSpec, EnumValue};
pub use flags::{FlagName, FlagTable};
pub use integer::{IntAlias, IntKind, IntSpec};
pub use mac::MacMode;
pub use ternary::TernaryStyle;
