// Network Manager - Traffic Control Qdiscs
// Copyright (C) 2026 Christos A. Daggas
// SPDX-License-Identifier: MIT

//! Queueing discipline records: `[root | parent <handle>] [handle <handle>] <kind>`.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::{Error, Result};
use crate::multilist::{parse_all, split_items, COMMA};

pub const QDISC_SYNTAX: &str =
    "The valid syntax is: '[root | parent <handle>] [handle <handle>] <qdisc>'";

/// Handle of the root qdisc.
pub const TC_H_ROOT: u32 = 0xFFFF_FFFF;

/// Unset handle.
pub const TC_H_UNSPEC: u32 = 0;

/// Parse a `major:minor` handle written in hex; `major:` means minor 0.
pub fn parse_tc_handle(text: &str) -> Result<u32> {
    let invalid = || Error::invalid(text, format!("invalid handle: '{}'", text));
    if text == "root" {
        return Ok(TC_H_ROOT);
    }

    let (major, minor) = text.split_once(':').ok_or_else(invalid)?;
    let major = u16::from_str_radix(major, 16).map_err(|_| invalid())?;
    let minor = if minor.is_empty() {
        0
    } else {
        u16::from_str_radix(minor, 16).map_err(|_| invalid())?
    };
    Ok(((major as u32) << 16) | minor as u32)
}

pub fn format_tc_handle(handle: u32) -> String {
    if handle == TC_H_ROOT {
        return "root".to_string();
    }
    let (major, minor) = (handle >> 16, handle & 0xFFFF);
    if minor == 0 {
        format!("{:x}:", major)
    } else {
        format!("{:x}:{:x}", major, minor)
    }
}

/// A traffic control queueing discipline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Qdisc {
    pub kind: String,
    pub handle: u32,
    pub parent: u32,
}

impl Qdisc {
    pub fn parse(text: &str) -> Result<Self> {
        let tokens = split_items(text.trim(), &[' ', '\t']);
        let mut iter = tokens.iter().copied().peekable();
        let mut parent = None;
        let mut handle = TC_H_UNSPEC;

        while let Some(token) = iter.next_if(|t| matches!(*t, "root" | "parent" | "handle")) {
            match token {
                "root" if parent.is_none() => parent = Some(TC_H_ROOT),
                "parent" if parent.is_none() => {
                    let value = iter
                        .next()
                        .ok_or_else(|| Error::incomplete("handle", "'parent'"))?;
                    parent = Some(parse_tc_handle(value)?);
                }
                "handle" if handle == TC_H_UNSPEC => {
                    let value = iter
                        .next()
                        .ok_or_else(|| Error::incomplete("handle", "'handle'"))?;
                    handle = parse_tc_handle(value)?;
                }
                other => {
                    return Err(Error::ambiguous(
                        other,
                        format!("'{}' specified more than once.", other),
                    ))
                }
            }
        }

        let parent = parent.ok_or_else(|| Error::incomplete("parent", "qdisc"))?;
        let kind = iter.next().ok_or_else(|| Error::incomplete("kind", "qdisc"))?;
        if let Some(extra) = iter.next() {
            return Err(Error::invalid(
                extra,
                format!("unexpected '{}' after qdisc kind.", extra),
            ));
        }

        Ok(Self {
            kind: kind.to_string(),
            handle,
            parent,
        })
    }
}

impl fmt::Display for Qdisc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.parent == TC_H_ROOT {
            f.write_str("root ")?;
        } else {
            write!(f, "parent {} ", format_tc_handle(self.parent))?;
        }
        if self.handle != TC_H_UNSPEC {
            write!(f, "handle {} ", format_tc_handle(self.handle))?;
        }
        f.write_str(&self.kind)
    }
}

/// Parse a comma-separated qdisc list; errors carry the grammar hint.
pub fn parse_qdiscs(text: &str) -> Result<Vec<Qdisc>> {
    parse_all(text, COMMA, Qdisc::parse).map_err(|e| {
        let message = format!("{} {}", e, QDISC_SYNTAX);
        Error::invalid(text, message)
    })
}

pub fn format_qdiscs(list: &[Qdisc]) -> String {
    list.iter()
        .map(|q| q.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handles() {
        assert_eq!(parse_tc_handle("1:").unwrap(), 0x10000);
        assert_eq!(parse_tc_handle("ff:a").unwrap(), 0xff000a);
        assert_eq!(format_tc_handle(0x10000), "1:");
        assert_eq!(format_tc_handle(0xff000a), "ff:a");
        assert!(parse_tc_handle("xyz").is_err());
    }

    #[test]
    fn test_parse_root() {
        let q = Qdisc::parse("root handle 1234: fq_codel").unwrap();
        assert_eq!(q.parent, TC_H_ROOT);
        assert_eq!(q.handle, 0x1234_0000);
        assert_eq!(q.kind, "fq_codel");
        assert_eq!(q.to_string(), "root handle 1234: fq_codel");
    }

    #[test]
    fn test_parse_parent() {
        let q = Qdisc::parse("parent 1:2 sfq").unwrap();
        assert_eq!(q.to_string(), "parent 1:2 sfq");
        assert_eq!(Qdisc::parse(&q.to_string()).unwrap(), q);
    }

    #[test]
    fn test_errors() {
        let err = Qdisc::parse("root").unwrap_err();
        assert_eq!(err.to_string(), "missing kind in qdisc");
        assert!(Qdisc::parse("sfq").is_err());
        assert!(Qdisc::parse("root root sfq").is_err());

        let err = parse_qdiscs("root handle zz: sfq").unwrap_err();
        assert_eq!(
            err.to_string(),
            format!("invalid handle: 'zz:' {}", QDISC_SYNTAX)
        );
    }
}
