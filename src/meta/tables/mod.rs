// Network Manager - Property Tables
// Copyright (C) 2026 Christos A. Daggas
// SPDX-License-Identifier: MIT

//! Static definitions of every setting and property.
//!
//! The helpers below keep the tables declarative: one line per property,
//! with builder calls only for the attributes that differ from the norm.

mod connection;
mod ip;
mod misc;
mod mobile;
mod virtual_links;
mod wired;
mod wireless;

use crate::codecs::flags::{SECRET_FLAGS, SECRET_FLAG_NAMES};
use crate::codecs::{EnumSpec, IntKind, IntSpec, MacMode, TernaryStyle};
use crate::meta::contract::{ItemCodec, ListContract, Scalar, TextValidator, ValueContract};
use crate::meta::property::PropertyDescriptor;
use crate::meta::setting::SettingDescriptor;
use crate::multilist::LIST_SEPARATORS;

/// Every setting known to the registry.
pub(crate) fn all_settings() -> Vec<SettingDescriptor> {
    let mut settings = Vec::new();
    settings.extend(connection::settings());
    settings.extend(ip::settings());
    settings.extend(wired::settings());
    settings.extend(wireless::settings());
    settings.extend(mobile::settings());
    settings.extend(virtual_links::settings());
    settings.extend(misc::settings());
    settings
}

fn text(name: &'static str) -> PropertyDescriptor {
    PropertyDescriptor::scalar(name, Scalar::text())
}

fn choice(name: &'static str, values: &'static [&'static str]) -> PropertyDescriptor {
    PropertyDescriptor::scalar(name, Scalar::choice(values))
}

fn validated(name: &'static str, validate: TextValidator) -> PropertyDescriptor {
    PropertyDescriptor::scalar(name, Scalar::validated(validate))
}

fn boolean(name: &'static str) -> PropertyDescriptor {
    PropertyDescriptor::scalar(name, Scalar::Bool)
}

fn int(name: &'static str, spec: IntSpec) -> PropertyDescriptor {
    PropertyDescriptor::scalar(name, Scalar::Int(spec))
}

/// Unsigned 32-bit integer, optionally bounded.
fn uint(name: &'static str, min: i64, max: i64) -> PropertyDescriptor {
    int(name, IntSpec::new(IntKind::UInt32).range(min, max))
}

fn u32_prop(name: &'static str) -> PropertyDescriptor {
    int(name, IntSpec::new(IntKind::UInt32))
}

fn i32_prop(name: &'static str) -> PropertyDescriptor {
    int(name, IntSpec::new(IntKind::Int32))
}

fn mtu(name: &'static str) -> PropertyDescriptor {
    PropertyDescriptor::scalar(name, Scalar::Mtu)
}

fn mac(name: &'static str, mode: MacMode) -> PropertyDescriptor {
    PropertyDescriptor::scalar(name, Scalar::Mac(mode))
}

fn bytes(name: &'static str) -> PropertyDescriptor {
    PropertyDescriptor::scalar(name, Scalar::Bytes { legacy: true })
        .message(BYTES_MESSAGE)
}

fn enumeration(name: &'static str, spec: EnumSpec) -> PropertyDescriptor {
    PropertyDescriptor::scalar(name, Scalar::enumeration(spec))
}

fn ternary(name: &'static str, style: TernaryStyle) -> PropertyDescriptor {
    PropertyDescriptor::scalar(name, Scalar::Ternary(style))
}

fn secret(name: &'static str) -> PropertyDescriptor {
    text(name).secret()
}

fn secret_flags(name: &'static str) -> PropertyDescriptor {
    PropertyDescriptor::scalar(
        name,
        Scalar::Enum {
            spec: SECRET_FLAGS,
            names: Some(SECRET_FLAG_NAMES),
            pre_set: None,
        },
    )
}

fn list(name: &'static str, contract: ListContract) -> PropertyDescriptor {
    PropertyDescriptor::new(name, ValueContract::List(contract))
}

/// Plain string list split on commas and whitespace.
fn string_list(name: &'static str) -> PropertyDescriptor {
    list(
        name,
        ListContract::new(ItemCodec::Text { validate: None }, LIST_SEPARATORS),
    )
}

fn validated_list(name: &'static str, validate: TextValidator) -> PropertyDescriptor {
    list(
        name,
        ListContract::new(
            ItemCodec::Text {
                validate: Some(validate),
            },
            LIST_SEPARATORS,
        ),
    )
}

fn choice_list(name: &'static str, values: &'static [&'static str]) -> PropertyDescriptor {
    list(
        name,
        ListContract::new(ItemCodec::Text { validate: None }, LIST_SEPARATORS).values(values),
    )
}

const BYTES_MESSAGE: &str = "Enter bytes as a list of hexadecimal values.\n\
Two formats are accepted:\n\
(a) a string of hexadecimal digits, where each two digits represent one byte\n\
(b) space-separated list of bytes written as hexadecimal digits \
(with optional 0x/0X prefix, and optional leading 0).\n\n\
Examples: ab0455a6ea3a74C2\n          ab 4 55 0xa6 ea 3a 74 C2";
