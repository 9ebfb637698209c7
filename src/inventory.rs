// Network Manager - System Inventory
// Copyright (C) 2026 Christos A. Daggas
// SPDX-License-Identifier: MIT

//! Device inventory read from the Linux sysfs interface.

use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::env::{ConnectionInfo, DeviceInfo, Inventory};

const SYSFS_NET: &str = "/sys/class/net";

/// Lists network interfaces found under `/sys/class/net`.
///
/// Connection profiles are not stored in sysfs, so the connection list is
/// always empty.
#[derive(Debug, Clone)]
pub struct SysfsInventory {
    root: PathBuf,
}

impl Default for SysfsInventory {
    fn default() -> Self {
        Self::new()
    }
}

impl SysfsInventory {
    pub fn new() -> Self {
        Self::with_root(SYSFS_NET)
    }

    /// Read interfaces from another directory (used by tests).
    pub fn with_root(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }
}

impl Inventory for SysfsInventory {
    fn list_devices(&self) -> Vec<DeviceInfo> {
        let entries = match fs::read_dir(&self.root) {
            Ok(entries) => entries,
            Err(e) => {
                debug!("Cannot read {}: {}", self.root.display(), e);
                return Vec::new();
            }
        };

        let mut names: Vec<String> = entries
            .flatten()
            .map(|entry| entry.file_name().to_string_lossy().to_string())
            .collect();
        names.sort_by(|a, b| natural_sort_key(a).cmp(&natural_sort_key(b)));

        names.into_iter().map(|name| DeviceInfo { name }).collect()
    }

    fn list_connections(&self) -> Vec<ConnectionInfo> {
        Vec::new()
    }
}

/// Generate a sort key that sorts numbers naturally.
fn natural_sort_key(s: &str) -> (String, u32, String) {
    let mut prefix = String::new();
    let mut num_str = String::new();

    for c in s.chars() {
        if c.is_ascii_digit() {
            num_str.push(c);
        } else if num_str.is_empty() {
            prefix.push(c);
        }
    }

    let num: u32 = num_str.parse().unwrap_or(0);
    (prefix, num, s.to_string())
}
