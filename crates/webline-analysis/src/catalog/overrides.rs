//! Local overrides — project-specific name → `{baseline, description}` entries.
//!
//! Overrides win over the bundled catalog on name collision and may add
//! features the bundled catalog does not know about.

use std::path::Path;

use serde_json::{Map, Value};

use super::normalizer::normalize_overrides;
use super::types::Feature;

/// Parsed override mapping. Absent or malformed sources are empty, never errors.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LocalOverrides {
    entries: Map<String, Value>,
}

impl LocalOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(entries) => Self { entries },
            Value::Null => Self::default(),
            other => {
                tracing::warn!(
                    kind = json_kind(&other),
                    "local overrides are not a mapping, ignoring"
                );
                Self::default()
            }
        }
    }

    pub fn from_json_str(text: &str) -> Self {
        match serde_json::from_str::<Value>(text) {
            Ok(value) => Self::from_value(value),
            Err(e) => {
                tracing::warn!(error = %e, "local overrides are not valid JSON, ignoring");
                Self::default()
            }
        }
    }

    pub fn from_toml_str(text: &str) -> Self {
        match toml::from_str::<Value>(text) {
            Ok(value) => Self::from_value(value),
            Err(e) => {
                tracing::warn!(error = %e, "local overrides are not valid TOML, ignoring");
                Self::default()
            }
        }
    }

    /// Load from disk; `.toml` files are read as TOML, everything else as JSON.
    pub fn load(path: &Path) -> Self {
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) => {
                if path.exists() {
                    tracing::warn!(path = %path.display(), error = %e, "overrides file unreadable");
                } else {
                    tracing::debug!(path = %path.display(), "no overrides file");
                }
                return Self::default();
            }
        };
        if path.extension().is_some_and(|ext| ext == "toml") {
            Self::from_toml_str(&text)
        } else {
            Self::from_json_str(&text)
        }
    }

    /// Add or replace one override.
    pub fn insert(&mut self, name: impl Into<String>, record: Value) {
        self.entries.insert(name.into(), record);
    }

    /// Canonical features, `id` = folded name.
    pub fn features(&self) -> Vec<Feature> {
        normalize_overrides(&self.entries)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
