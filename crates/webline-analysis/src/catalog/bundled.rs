//! Catalog embedded at compile time.

use super::normalizer::{normalize, RawCatalog};
use super::types::Feature;

const BUNDLED_CATALOG: &str = include_str!("data/features.json");

/// Raw bundled catalog, for hosts that want to combine it with other sources.
pub fn bundled_raw() -> RawCatalog {
    RawCatalog::from_json_str(BUNDLED_CATALOG)
}

/// Bundled catalog in canonical form.
pub fn bundled_features() -> Vec<Feature> {
    normalize(bundled_raw())
}
