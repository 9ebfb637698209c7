// Network Manager - Tool Configuration
// Copyright (C) 2026 Christos A. Daggas
// SPDX-License-Identifier: MIT

//! Persisted configuration for the introspection tool.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::value::OutputMode;
use super::{Error, CONFIG_DIR_NAME, CONFIG_FILE_NAME};

/// Tool configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetaConfig {
    /// Default rendering mode for property values.
    #[serde(default)]
    pub output: OutputMode,

    /// Reveal secret values instead of the redaction token.
    #[serde(default)]
    pub show_secrets: bool,

    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for MetaConfig {
    fn default() -> Self {
        Self {
            output: OutputMode::Parsable,
            show_secrets: false,
            log_level: default_log_level(),
        }
    }
}

impl MetaConfig {
    /// Default location of the configuration file.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Load configuration from TOML file.
    pub fn load_from_file(path: &Path) -> Result<Self, Error> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::ConfigReadFailed(format!("{}: {}", path.display(), e)))?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration, falling back to defaults when the file is missing.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, Error> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => match Self::default_path() {
                Some(p) => p,
                None => return Ok(Self::default()),
            },
        };

        if !path.exists() {
            tracing::debug!("No configuration at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        Self::load_from_file(&path)
    }

    /// Save configuration to TOML file with restrictive permissions (0600).
    pub fn save_to_file(&self, path: &Path) -> Result<(), Error> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o600))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_from_empty_toml() {
        let config: MetaConfig = toml::from_str("").unwrap();
        assert_eq!(config, MetaConfig::default());
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_parse_pretty_output() {
        let config: MetaConfig = toml::from_str("output = \"pretty\"\nshow_secrets = true\n").unwrap();
        assert!(config.output.is_pretty());
        assert!(config.show_secrets);
    }

    #[test]
    fn test_save_and_load() {
        let dir = std::env::temp_dir().join(format!("nm-meta-test-{}", uuid::Uuid::new_v4()));
        let path = dir.join(CONFIG_FILE_NAME);
        let config = MetaConfig {
            output: OutputMode::Pretty,
            show_secrets: false,
            log_level: "debug".into(),
        };
        config.save_to_file(&path).unwrap();
        let loaded = MetaConfig::load_from_file(&path).unwrap();
        assert_eq!(loaded, config);

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mode = std::fs::metadata(&path).unwrap().permissions().mode();
            assert_eq!(mode & 0o777, 0o600);
        }
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_missing_file_is_default() {
        let path = std::env::temp_dir().join(format!("nm-meta-missing-{}.toml", uuid::Uuid::new_v4()));
        let config = MetaConfig::load_or_default(Some(&path)).unwrap();
        assert_eq!(config, MetaConfig::default());
    }
}
