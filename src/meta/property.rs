// Network Manager - Property Descriptors
// Copyright (C) 2026 Christos A. Daggas
// SPDX-License-Identifier: MIT

//! Property descriptors and the uniform entry points that dispatch to a
//! property's value contract.

use tracing::debug;

use crate::env::{CompletionContext, Environment};
use crate::meta::contract::{Scalar, ValueContract};
use crate::models::{Error, OutputMode, Result, Value, TEXT_HIDDEN};
use crate::store::ConfigStore;

/// Context-aware completion generator.
pub type Completer = fn(&PropertyDescriptor, &CompletionContext<'_>, &str) -> Vec<String>;

/// Generator of legal values computed per call from the environment.
pub type ValuesFn = fn(&PropertyDescriptor, &Environment<'_>) -> Vec<String>;

/// Input of [`PropertyDescriptor::set`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SetValue {
    /// Leave the property untouched.
    #[default]
    Unchanged,
    /// Restore the compile-time default.
    Reset,
    Value(String),
}

impl SetValue {
    /// `None` means reset.
    pub fn from_option(text: Option<&str>) -> Self {
        match text {
            Some(text) => Self::Value(text.to_string()),
            None => Self::Reset,
        }
    }
}

impl From<&str> for SetValue {
    fn from(text: &str) -> Self {
        Self::Value(text.to_string())
    }
}

/// Text rendering of a property value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub text: String,
    /// Whether the value equals the property default. Hidden secrets
    /// always report true.
    pub is_default: bool,
}

/// One editable property of a setting.
#[derive(Debug, Clone)]
pub struct PropertyDescriptor {
    /// Owning setting, filled in when the setting is built.
    pub setting: &'static str,
    pub name: &'static str,
    pub doc: &'static str,
    /// Extended help shown by [`PropertyDescriptor::describe`].
    pub describe_message: Option<&'static str>,
    pub prompt: Option<&'static str>,
    /// Short option name for quick-create parsing.
    pub alias: Option<&'static str>,
    pub is_secret: bool,
    pub is_cli_option: bool,
    pub read_only: bool,
    pub contract: ValueContract,
    /// Default overriding the contract's kind default.
    pub default: Option<Value>,
    pub completer: Option<Completer>,
    pub values_fn: Option<ValuesFn>,
}

impl PropertyDescriptor {
    pub fn new(name: &'static str, contract: ValueContract) -> Self {
        Self {
            setting: "",
            name,
            doc: "",
            describe_message: None,
            prompt: None,
            alias: None,
            is_secret: false,
            is_cli_option: false,
            read_only: false,
            contract,
            default: None,
            completer: None,
            values_fn: None,
        }
    }

    pub fn scalar(name: &'static str, scalar: Scalar) -> Self {
        Self::new(name, ValueContract::Scalar(scalar))
    }

    pub fn doc(mut self, doc: &'static str) -> Self {
        self.doc = doc;
        self
    }

    pub fn message(mut self, message: &'static str) -> Self {
        self.describe_message = Some(message);
        self
    }

    pub fn prompt(mut self, prompt: &'static str) -> Self {
        self.prompt = Some(prompt);
        self
    }

    /// Mark as a quick-create option under `alias`.
    pub fn cli(mut self, alias: &'static str) -> Self {
        self.alias = Some(alias);
        self.is_cli_option = true;
        self
    }

    pub fn secret(mut self) -> Self {
        self.is_secret = true;
        self
    }

    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    pub fn defaults_to(mut self, value: Value) -> Self {
        self.default = Some(value);
        self
    }

    pub fn completer(mut self, completer: Completer) -> Self {
        self.completer = Some(completer);
        self
    }

    pub fn values_from(mut self, values_fn: ValuesFn) -> Self {
        self.values_fn = Some(values_fn);
        self
    }

    /// Qualified `setting.name`.
    pub fn full_name(&self) -> String {
        format!("{}.{}", self.setting, self.name)
    }

    pub fn default_value(&self) -> Value {
        self.default
            .clone()
            .unwrap_or_else(|| self.contract.default_value())
    }

    /// Current value, falling back to the default when nothing is stored.
    pub fn value(&self, store: &dyn ConfigStore) -> Value {
        store
            .get_field(self.setting, self.name)
            .cloned()
            .unwrap_or_else(|| self.default_value())
    }

    pub fn is_default(&self, store: &dyn ConfigStore) -> bool {
        self.contract
            .is_default(&self.value(store), &self.default_value())
    }

    /// Render the current value.
    pub fn get(&self, store: &dyn ConfigStore, mode: OutputMode, reveal_secrets: bool) -> Rendered {
        if self.is_secret && !reveal_secrets {
            return Rendered {
                text: TEXT_HIDDEN.to_string(),
                is_default: true,
            };
        }
        let value = self.value(store);
        Rendered {
            text: self.contract.format(self, &value, mode),
            is_default: self.contract.is_default(&value, &self.default_value()),
        }
    }

    /// Apply a new value. Nothing is stored when parsing fails.
    pub fn set(&self, env: &Environment<'_>, store: &mut dyn ConfigStore, value: SetValue) -> Result<()> {
        if value == SetValue::Unchanged {
            return Ok(());
        }
        if self.read_only {
            return Err(Error::Immutable {
                property: self.name.to_string(),
                reason: format!("'{}' is read-only", self.name),
            });
        }

        let text = match value {
            SetValue::Value(text) => text,
            _ => {
                debug!("Resetting {}", self.full_name());
                return self
                    .contract
                    .reset(self, store)
                    .map_err(|e| e.with_property(self.name));
            }
        };

        let shown = if self.is_secret { TEXT_HIDDEN } else { text.as_str() };
        debug!("Setting {} to '{}'", self.full_name(), shown);
        self.contract
            .apply(self, env, store, &text)
            .map_err(|e| e.with_property(self.name))
    }

    /// Remove one element (by index or value) from a list or map property.
    /// A no-op for scalars.
    pub fn remove(&self, store: &mut dyn ConfigStore, text: &str) -> Result<()> {
        debug!("Removing '{}' from {}", text, self.full_name());
        self.contract
            .remove(self, store, text)
            .map_err(|e| e.with_property(self.name))
    }

    /// Legal values, freshly computed.
    pub fn values(&self, env: &Environment<'_>) -> Vec<String> {
        match self.values_fn {
            Some(values_fn) => values_fn(self, env),
            None => self.contract.values(),
        }
    }

    /// Completion candidates for `text`.
    pub fn complete(&self, ctx: &CompletionContext<'_>, text: &str) -> Vec<String> {
        if let Some(completer) = self.completer {
            return completer(self, ctx, text);
        }
        if let ValueContract::Scalar(scalar) = &self.contract {
            if let Some(candidates) = scalar.complete(text) {
                return candidates;
            }
        }
        self.values(&ctx.env)
            .into_iter()
            .filter(|v| v.starts_with(text))
            .collect()
    }

    /// Help text: `=== [name] ===`, the doc text, then the extended message.
    pub fn describe(&self) -> String {
        let mut out = format!("=== [{}] ===\n", self.name);
        if !self.doc.is_empty() {
            out.push_str(&format!("[{}] {}\n", self.name, self.doc));
        }
        if let Some(message) = self.describe_message {
            out.push_str(message);
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codecs::flags::SECRET_FLAGS;
    use crate::codecs::flags::SECRET_FLAG_NAMES;
    use crate::env::RecordingWarnSink;
    use crate::store::{ConfigStoreExt, Connection};

    fn prop(p: PropertyDescriptor) -> PropertyDescriptor {
        PropertyDescriptor {
            setting: "test",
            ..p
        }
    }

    #[test]
    fn test_set_value_from_option() {
        assert_eq!(SetValue::from_option(None), SetValue::Reset);
        assert_eq!(SetValue::from_option(Some("")), SetValue::Value(String::new()));
        assert_eq!(SetValue::from("x"), SetValue::Value("x".into()));
    }

    #[test]
    fn test_set_get_reset() {
        let p = prop(PropertyDescriptor::scalar("flag", Scalar::Bool));
        let mut conn = Connection::new();
        let env = Environment::default();

        assert!(p.get(&conn, OutputMode::Parsable, false).is_default);
        p.set(&env, &mut conn, "on".into()).unwrap();
        let rendered = p.get(&conn, OutputMode::Parsable, false);
        assert_eq!(rendered.text, "yes");
        assert!(!rendered.is_default);

        p.set(&env, &mut conn, SetValue::Unchanged).unwrap();
        assert!(!p.is_default(&conn));
        p.set(&env, &mut conn, SetValue::Reset).unwrap();
        assert!(p.is_default(&conn));
    }

    #[test]
    fn test_error_carries_property() {
        let p = prop(PropertyDescriptor::scalar("flag", Scalar::Bool));
        let mut conn = Connection::new();
        let err = p
            .set(&Environment::default(), &mut conn, "maybe".into())
            .unwrap_err();
        assert_eq!(err.property(), Some("flag"));
        assert!(conn.get_field("test", "flag").is_none());
    }

    #[test]
    fn test_secret_hidden() {
        let p = prop(PropertyDescriptor::scalar("psk", Scalar::text()).secret());
        let mut conn = Connection::new();
        let env = Environment::default();

        let hidden = p.get(&conn, OutputMode::Parsable, false);
        assert_eq!(hidden.text, TEXT_HIDDEN);

        p.set(&env, &mut conn, "hunter22".into()).unwrap();
        let hidden = p.get(&conn, OutputMode::Parsable, false);
        assert_eq!(hidden.text, TEXT_HIDDEN);
        assert!(hidden.is_default);
        assert_eq!(p.get(&conn, OutputMode::Parsable, true).text, "hunter22");
    }

    #[test]
    fn test_read_only() {
        let p = prop(PropertyDescriptor::scalar("uuid", Scalar::text()).read_only());
        let mut conn = Connection::new();
        let err = p
            .set(&Environment::default(), &mut conn, "abc".into())
            .unwrap_err();
        assert!(matches!(err, Error::Immutable { .. }));

        conn.set_field("test", "uuid", Value::text("abc")).unwrap();
        let err = p
            .set(&Environment::default(), &mut conn, SetValue::Reset)
            .unwrap_err();
        assert!(matches!(err, Error::Immutable { .. }));
        assert_eq!(conn.get_str("test", "uuid"), Some("abc"));

        p.set(&Environment::default(), &mut conn, SetValue::Unchanged)
            .unwrap();
    }

    #[test]
    fn test_flags_zero_rendering() {
        let p = prop(PropertyDescriptor::scalar(
            "psk-flags",
            Scalar::Enum {
                spec: SECRET_FLAGS,
                names: Some(SECRET_FLAG_NAMES),
                pre_set: None,
            },
        ));
        let conn = Connection::new();
        assert_eq!(p.get(&conn, OutputMode::Pretty, false).text, "0 (none)");
        assert_eq!(p.get(&conn, OutputMode::Parsable, false).text, "0");
    }

    #[test]
    fn test_scalar_remove_is_noop() {
        let p = prop(PropertyDescriptor::scalar("flag", Scalar::Bool));
        let mut conn = Connection::new();
        let sink = RecordingWarnSink::new();
        p.set(&Environment::with_warnings(&sink), &mut conn, "yes".into())
            .unwrap();
        p.remove(&mut conn, "yes").unwrap();
        assert_eq!(p.get(&conn, OutputMode::Parsable, false).text, "yes");
        assert!(sink.take().is_empty());
    }

    #[test]
    fn test_complete_prefix() {
        let p = prop(PropertyDescriptor::scalar(
            "auth-alg",
            Scalar::choice(&["open", "shared", "leap"]),
        ));
        let ctx = CompletionContext::default();
        assert_eq!(p.complete(&ctx, "sh"), vec!["shared"]);
        assert_eq!(p.complete(&ctx, "").len(), 3);
        let bool_prop = prop(PropertyDescriptor::scalar("flag", Scalar::Bool));
        assert_eq!(bool_prop.complete(&ctx, ""), vec!["yes", "no"]);
    }

    #[test]
    fn test_default_override() {
        let p = prop(
            PropertyDescriptor::scalar("autoconnect", Scalar::Bool).defaults_to(Value::Bool(true)),
        );
        let mut conn = Connection::new();
        assert_eq!(p.get(&conn, OutputMode::Parsable, false).text, "yes");
        p.set(&Environment::default(), &mut conn, "no".into()).unwrap();
        assert!(!p.is_default(&conn));
        p.set(&Environment::default(), &mut conn, SetValue::Reset).unwrap();
        assert_eq!(p.value(&conn), Value::Bool(true));
    }

    #[test]
    fn test_describe() {
        let p = prop(
            PropertyDescriptor::scalar("mtu", Scalar::Mtu)
                .doc("Maximum transmission unit.")
                .message("Enter a number or 'auto'."),
        );
        assert_eq!(
            p.describe(),
            "=== [mtu] ===\n[mtu] Maximum transmission unit.\nEnter a number or 'auto'.\n"
        );
    }
}
