//! Canonical catalog types.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Baseline availability of a feature.
///
/// The catalog carries booleans for the common case and passes any other
/// status token (e.g. `"low"`, `"high"`) through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Baseline {
    Flag(bool),
    Status(String),
}

impl Baseline {
    /// Only an explicit `false` counts as unsafe. Status tokens do not.
    pub fn is_unsafe(&self) -> bool {
        matches!(self, Self::Flag(false))
    }

    /// Coerce a loosely-typed JSON value. `null` means absent.
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::Null => None,
            Value::Bool(b) => Some(Self::Flag(*b)),
            Value::String(s) => Some(Self::Status(s.clone())),
            other => Some(Self::Status(other.to_string())),
        }
    }
}

impl Default for Baseline {
    fn default() -> Self {
        Self::Flag(false)
    }
}

impl From<bool> for Baseline {
    fn from(value: bool) -> Self {
        Self::Flag(value)
    }
}

impl From<&str> for Baseline {
    fn from(value: &str) -> Self {
        Self::Status(value.to_string())
    }
}

impl fmt::Display for Baseline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Flag(b) => write!(f, "{b}"),
            Self::Status(s) => f.write_str(s),
        }
    }
}

/// One catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feature {
    /// Stable lowercase token, unique after merge.
    pub id: String,
    /// Display name. Its case-folded form is the match key.
    pub name: String,
    pub baseline: Baseline,
    #[serde(default)]
    pub description: String,
}

impl Feature {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        baseline: impl Into<Baseline>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            baseline: baseline.into(),
            description: description.into(),
        }
    }

    /// Key used by the lookup table.
    pub fn match_key(&self) -> String {
        case_fold(&self.name)
    }
}

/// Case folding shared by the catalog, the ignore set, and both detectors.
pub fn case_fold(token: &str) -> String {
    token.to_lowercase()
}

/// Default id for a list-form record: whitespace runs become single hyphens.
pub fn slugify(name: &str) -> String {
    case_fold(&name.split_whitespace().collect::<Vec<_>>().join("-"))
}
