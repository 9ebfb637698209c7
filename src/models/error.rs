// Network Manager - Error Types
// Copyright (C) 2026 Christos A. Daggas
// SPDX-License-Identifier: MIT

//! Shared error types for the property registry.
//!
//! Every failure is scoped to a single property operation. Parsers create
//! errors without knowing which property they serve; the dispatch layer
//! fills the property name in through [`Error::with_property`].

use thiserror::Error;

/// Result type alias for property operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for property marshalling.
#[derive(Debug, Error)]
pub enum Error {
    // ========================================
    // Value Errors
    // ========================================
    #[error("{reason}")]
    InvalidArgument {
        property: String,
        text: String,
        reason: String,
    },

    #[error("'{value}' is out of range [{min}, {max}]")]
    OutOfRange {
        property: String,
        value: String,
        min: String,
        max: String,
    },

    #[error("'{value}' is not a valid number")]
    NotANumber { property: String, value: String },

    #[error("{reason}")]
    AmbiguousToken {
        property: String,
        token: String,
        reason: String,
    },

    #[error("missing {missing} in {context}")]
    IncompleteGrammar {
        property: String,
        missing: String,
        context: String,
    },

    // ========================================
    // State Errors
    // ========================================
    #[error("{reason}")]
    Immutable { property: String, reason: String },

    #[error("Store rejected {property}: {reason}")]
    Store { property: String, reason: String },

    // ========================================
    // Registry Errors
    // ========================================
    #[error("Unknown setting: {0}")]
    UnknownSetting(String),

    #[error("Unknown property '{property}' in setting '{setting}'")]
    UnknownProperty { setting: String, property: String },

    // ========================================
    // Configuration Errors
    // ========================================
    #[error("Failed to read configuration: {0}")]
    ConfigReadFailed(String),

    #[error("Failed to write configuration: {0}")]
    ConfigWriteFailed(String),

    #[error("Failed to parse configuration: {0}")]
    ConfigParseFailed(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create an invalid argument error for `text`.
    pub fn invalid(text: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            property: String::new(),
            text: text.into(),
            reason: reason.into(),
        }
    }

    /// Create an out of range error.
    pub fn out_of_range(
        value: impl Into<String>,
        min: impl ToString,
        max: impl ToString,
    ) -> Self {
        Self::OutOfRange {
            property: String::new(),
            value: value.into(),
            min: min.to_string(),
            max: max.to_string(),
        }
    }

    /// Create a not-a-number error.
    pub fn not_a_number(value: impl Into<String>) -> Self {
        Self::NotANumber {
            property: String::new(),
            value: value.into(),
        }
    }

    /// Create an error for a token that is legal only at another position.
    pub fn ambiguous(token: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::AmbiguousToken {
            property: String::new(),
            token: token.into(),
            reason: reason.into(),
        }
    }

    /// Create an error for a grammar that lacks a mandatory part.
    pub fn incomplete(missing: impl Into<String>, context: impl Into<String>) -> Self {
        Self::IncompleteGrammar {
            property: String::new(),
            missing: missing.into(),
            context: context.into(),
        }
    }

    /// Attach the property name, keeping one that is already set.
    pub fn with_property(mut self, name: &str) -> Self {
        match &mut self {
            Self::InvalidArgument { property, .. }
            | Self::OutOfRange { property, .. }
            | Self::NotANumber { property, .. }
            | Self::AmbiguousToken { property, .. }
            | Self::IncompleteGrammar { property, .. }
            | Self::Immutable { property, .. }
            | Self::Store { property, .. } => {
                if property.is_empty() {
                    *property = name.to_string();
                }
            }
            _ => {}
        }
        self
    }

    /// Prefix the human readable reason, as done when a sub-parser fails
    /// inside a larger grammar.
    pub fn prefixed(self, prefix: &str) -> Self {
        let message = format!("{}{}", prefix, self);
        match self {
            Self::InvalidArgument { property, text, .. } => Self::InvalidArgument {
                property,
                text,
                reason: message,
            },
            Self::AmbiguousToken { property, token, .. } => Self::AmbiguousToken {
                property,
                token,
                reason: message,
            },
            other => {
                let property = other.property().unwrap_or_default().to_string();
                Self::InvalidArgument {
                    property,
                    text: String::new(),
                    reason: message,
                }
            }
        }
    }

    /// Property the error belongs to, when known.
    pub fn property(&self) -> Option<&str> {
        match self {
            Self::InvalidArgument { property, .. }
            | Self::OutOfRange { property, .. }
            | Self::NotANumber { property, .. }
            | Self::AmbiguousToken { property, .. }
            | Self::IncompleteGrammar { property, .. }
            | Self::Immutable { property, .. }
            | Self::Store { property, .. } => {
                if property.is_empty() {
                    None
                } else {
                    Some(property)
                }
            }
            Self::UnknownProperty { property, .. } => Some(property),
            _ => None,
        }
    }

    /// Check if this error was caused by the text value itself.
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidArgument { .. }
                | Self::OutOfRange { .. }
                | Self::NotANumber { .. }
                | Self::AmbiguousToken { .. }
                | Self::IncompleteGrammar { .. }
                | Self::Store { .. }
        )
    }
}

// Convert from toml parse errors
impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::ConfigParseFailed(err.to_string())
    }
}

// Convert from toml serialize errors
impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::ConfigWriteFailed(err.to_string())
    }
}

// Convert from serde_json errors
impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::ConfigParseFailed(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_property_fills_once() {
        let err = Error::invalid("x", "bad").with_property("mtu").with_property("other");
        assert_eq!(err.property(), Some("mtu"));
        assert_eq!(err.to_string(), "bad");
    }

    #[test]
    fn test_out_of_range_message() {
        let err = Error::out_of_range("70000", 0, 65535);
        assert_eq!(err.to_string(), "'70000' is out of range [0, 65535]");
        assert!(err.is_parse_error());
    }

    #[test]
    fn test_prefixed_keeps_variant() {
        let err = Error::invalid("a=b", "unknown attribute").prefixed("invalid option 'a=b': ");
        assert!(matches!(err, Error::InvalidArgument { .. }));
        assert_eq!(err.to_string(), "invalid option 'a=b': unknown attribute");
    }

    #[test]
    fn test_immutable_is_not_parse_error() {
        let err = Error::Immutable {
            property: "type".into(),
            reason: "Can not change the connection type".into(),
        };
        assert!(!err.is_parse_error());
        assert_eq!(err.to_string(), "Can not change the connection type");
    }
}
