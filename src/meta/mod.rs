// Network Manager - Property Metadata
// Copyright (C) 2026 Christos A. Daggas
// SPDX-License-Identifier: MIT

//! # Property Metadata
//!
//! Descriptors for every setting and property, and the dispatch that turns
//! user text into stored values and back:
//!
//! - **Contract**: how one property's text maps onto its value
//! - **Property**: the get/set/remove/values/complete/describe operations
//! - **Setting**: a named group of properties plus its valid companions
//! - **Registry**: the immutable catalogue of all settings

pub mod contract;
pub mod custom;
pub mod property;
pub mod registry;
pub mod setting;
mod tables;
pub mod validators;

// Re-export main types for convenience
pub use contract::{CustomContract, ItemCodec, ListContract, Scalar, ValueContract};
pub use property::{PropertyDescriptor, Rendered, SetValue};
pub use registry::{registry, Registry};
pub use setting::{SettingDescriptor, ValidPart};
