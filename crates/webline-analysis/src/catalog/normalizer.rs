//! Catalog normalizer — turns either catalog shape into canonical `Feature`s.
//!
//! Two shapes are accepted:
//! - sequence: `[{"name": "...", "id": "...", "baseline": ...}, ...]`
//! - mapping:  `{"<id>": {"name": "...", "baseline": ...}, ...}`
//!
//! Anything else normalizes to an empty catalog. Malformed input is never an error.

use serde_json::{Map, Value};

use super::types::{case_fold, slugify, Baseline, Feature};

/// Catalog input, tagged by shape at the boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum RawCatalog {
    Sequence(Vec<Value>),
    Mapping(Map<String, Value>),
    Empty,
}

impl RawCatalog {
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Array(items) => Self::Sequence(items),
            Value::Object(map) => Self::Mapping(map),
            _ => Self::Empty,
        }
    }

    /// Parse JSON text. Unparsable text is an empty catalog.
    pub fn from_json_str(text: &str) -> Self {
        match serde_json::from_str::<Value>(text) {
            Ok(value) => Self::from_value(value),
            Err(e) => {
                tracing::warn!(error = %e, "catalog source is not valid JSON, treating as empty");
                Self::Empty
            }
        }
    }
}

/// Normalize a raw catalog into features, preserving source order.
pub fn normalize(raw: RawCatalog) -> Vec<Feature> {
    match raw {
        RawCatalog::Sequence(items) => items.iter().filter_map(normalize_sequence_item).collect(),
        RawCatalog::Mapping(map) => map
            .iter()
            .map(|(key, record)| normalize_keyed(key, record, key.clone()))
            .collect(),
        RawCatalog::Empty => Vec::new(),
    }
}

/// Shorthand for `normalize(RawCatalog::from_value(value))`.
pub fn normalize_value(value: Value) -> Vec<Feature> {
    normalize(RawCatalog::from_value(value))
}

/// Normalize the local-override mapping. Keys are names; ids are the folded names.
pub fn normalize_overrides(map: &Map<String, Value>) -> Vec<Feature> {
    map.iter()
        .map(|(name, record)| {
            let mut feature = normalize_keyed(name, record, case_fold(name));
            feature.name = name.clone();
            feature
        })
        .collect()
}

fn normalize_sequence_item(item: &Value) -> Option<Feature> {
    let record = match item {
        Value::Object(record) => record,
        Value::String(name) if !name.trim().is_empty() => {
            return Some(Feature::new(slugify(name), name.clone(), false, ""));
        }
        other => {
            tracing::debug!(item = %other, "skipping catalog entry that is not a record");
            return None;
        }
    };

    let name = str_field(record, "name");
    let id = str_field(record, "id");
    let (id, name) = match (id, name) {
        (Some(id), Some(name)) => (id, name),
        (None, Some(name)) => (slugify(&name), name),
        (Some(id), None) => (id.clone(), id),
        (None, None) => {
            tracing::debug!("skipping catalog record with neither name nor id");
            return None;
        }
    };

    Some(Feature {
        id,
        name,
        baseline: resolve_baseline(record),
        description: str_field(record, "description").unwrap_or_default(),
    })
}

/// A keyed record may be a full object or a bare baseline value (`"has": true`).
fn normalize_keyed(key: &str, record: &Value, id: String) -> Feature {
    match record {
        Value::Object(record) => Feature {
            id,
            name: str_field(record, "name").unwrap_or_else(|| key.to_string()),
            baseline: resolve_baseline(record),
            description: str_field(record, "description").unwrap_or_default(),
        },
        other => Feature {
            id,
            name: key.to_string(),
            baseline: Baseline::from_json(other).unwrap_or_default(),
            description: String::new(),
        },
    }
}

/// `baseline`, else legacy `status` (bare or `{ "baseline": ... }`), else `false`.
fn resolve_baseline(record: &Map<String, Value>) -> Baseline {
    if let Some(baseline) = record.get("baseline").and_then(Baseline::from_json) {
        return baseline;
    }
    let legacy = match record.get("status") {
        Some(Value::Object(status)) => status.get("baseline"),
        other => other,
    };
    legacy.and_then(Baseline::from_json).unwrap_or_default()
}

fn str_field(record: &Map<String, Value>, field: &str) -> Option<String> {
    record
        .get(field)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
