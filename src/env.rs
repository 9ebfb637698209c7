// Network Manager - Operation Environment
// Copyright (C) 2026 Christos A. Daggas
// SPDX-License-Identifier: MIT

//! Collaborators consulted by property operations: a warning sink for
//! non-fatal advisories and a device/connection inventory for completion.

use std::cell::RefCell;
use tracing::{info, warn};

use crate::store::ConfigStore;

/// Severity of an advisory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarnLevel {
    Info,
    Warn,
}

/// Channel for advisories that never fail an operation.
pub trait WarnSink {
    fn warn(&self, level: WarnLevel, message: &str);
}

/// Forwards advisories to `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingWarnSink;

impl WarnSink for TracingWarnSink {
    fn warn(&self, level: WarnLevel, message: &str) {
        match level {
            WarnLevel::Info => info!("{}", message),
            WarnLevel::Warn => warn!("{}", message),
        }
    }
}

/// Keeps advisories so a front end can show them after the operation.
#[derive(Debug, Default)]
pub struct RecordingWarnSink {
    entries: RefCell<Vec<(WarnLevel, String)>>,
}

impl RecordingWarnSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn take(&self) -> Vec<(WarnLevel, String)> {
        self.entries.take()
    }
}

impl WarnSink for RecordingWarnSink {
    fn warn(&self, level: WarnLevel, message: &str) {
        self.entries.borrow_mut().push((level, message.to_string()));
    }
}

/// A network device known to the system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceInfo {
    pub name: String,
}

/// A stored connection profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionInfo {
    pub uuid: String,
    pub interface: Option<String>,
    pub connection_type: String,
}

/// Snapshot source of devices and connections.
pub trait Inventory {
    fn list_devices(&self) -> Vec<DeviceInfo>;
    fn list_connections(&self) -> Vec<ConnectionInfo>;
}

/// Collaborators for one operation. Both are optional; a missing inventory
/// yields no suggestions and a missing sink drops advisories.
#[derive(Clone, Copy, Default)]
pub struct Environment<'a> {
    pub warnings: Option<&'a dyn WarnSink>,
    pub inventory: Option<&'a dyn Inventory>,
}

impl<'a> Environment<'a> {
    pub fn new(warnings: &'a dyn WarnSink, inventory: &'a dyn Inventory) -> Self {
        Self {
            warnings: Some(warnings),
            inventory: Some(inventory),
        }
    }

    pub fn with_warnings(warnings: &'a dyn WarnSink) -> Self {
        Self {
            warnings: Some(warnings),
            inventory: None,
        }
    }

    pub fn warn(&self, level: WarnLevel, message: &str) {
        if let Some(sink) = self.warnings {
            sink.warn(level, message);
        }
    }

    pub fn devices(&self) -> Vec<DeviceInfo> {
        self.inventory.map(|i| i.list_devices()).unwrap_or_default()
    }

    pub fn connections(&self) -> Vec<ConnectionInfo> {
        self.inventory
            .map(|i| i.list_connections())
            .unwrap_or_default()
    }
}

/// Context for completing a property value.
#[derive(Clone, Copy, Default)]
pub struct CompletionContext<'a> {
    pub env: Environment<'a>,
    /// The connection being edited, when there is one.
    pub store: Option<&'a dyn ConfigStore>,
}

impl<'a> CompletionContext<'a> {
    pub fn new(env: Environment<'a>, store: Option<&'a dyn ConfigStore>) -> Self {
        Self { env, store }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedInventory;

    impl Inventory for FixedInventory {
        fn list_devices(&self) -> Vec<DeviceInfo> {
            vec![DeviceInfo {
                name: "eth0".into(),
            }]
        }

        fn list_connections(&self) -> Vec<ConnectionInfo> {
            Vec::new()
        }
    }

    #[test]
    fn test_recording_sink() {
        let sink = RecordingWarnSink::new();
        let env = Environment::with_warnings(&sink);
        env.warn(WarnLevel::Info, "hello");
        env.warn(WarnLevel::Warn, "careful");
        assert_eq!(
            sink.take(),
            vec![
                (WarnLevel::Info, "hello".to_string()),
                (WarnLevel::Warn, "careful".to_string())
            ]
        );
        assert!(sink.take().is_empty());
    }

    #[test]
    fn test_missing_inventory_is_empty() {
        let env = Environment::default();
        assert!(env.devices().is_empty());
        assert!(env.connections().is_empty());

        let sink = TracingWarnSink;
        let env = Environment::new(&sink, &FixedInventory);
        assert_eq!(env.devices()[0].name, "eth0");
    }
}
