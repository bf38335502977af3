//! `CatalogBuilder` — assembles the three catalog sources into a lookup table.

use webline_core::config::CatalogConfig;

use super::bundled::bundled_features;
use super::ignore::IgnoreSet;
use super::merger::LookupTable;
use super::normalizer::{normalize, RawCatalog};
use super::overrides::LocalOverrides;
use super::types::Feature;

/// Collects catalog sources, then merges them once.
#[derive(Debug, Clone)]
pub struct CatalogBuilder {
    bundled: Vec<Feature>,
    overrides: LocalOverrides,
    ignore: IgnoreSet,
}

impl CatalogBuilder {
    /// Start from the embedded catalog.
    pub fn new() -> Self {
        Self {
            bundled: bundled_features(),
            overrides: LocalOverrides::default(),
            ignore: IgnoreSet::default(),
        }
    }

    /// Start with no bundled features.
    pub fn empty() -> Self {
        Self {
            bundled: Vec::new(),
            overrides: LocalOverrides::default(),
            ignore: IgnoreSet::default(),
        }
    }

    /// Build from config: bundled per `use_bundled`, then the override and
    /// ignore files if configured. Missing files contribute nothing.
    pub fn from_config(config: &CatalogConfig) -> Self {
        let mut builder = if config.use_bundled {
            Self::new()
        } else {
            Self::empty()
        };
        if let Some(path) = &config.overrides_path {
            builder.overrides = LocalOverrides::load(std::path::Path::new(path));
        }
        if let Some(path) = &config.ignore_path {
            builder.ignore = IgnoreSet::load(std::path::Path::new(path));
        }
        builder
    }

    /// Replace the bundled source.
    pub fn bundled(mut self, raw: RawCatalog) -> Self {
        self.bundled = normalize(raw);
        self
    }

    pub fn overrides(mut self, overrides: LocalOverrides) -> Self {
        self.overrides = overrides;
        self
    }

    pub fn ignore(mut self, ignore: IgnoreSet) -> Self {
        self.ignore = ignore;
        self
    }

    pub fn build(&self) -> LookupTable {
        let local = self.overrides.features();
        let table = LookupTable::merge(&self.bundled, &local, &self.ignore);
        tracing::info!(
            features = table.len(),
            overrides = local.len(),
            ignored_tokens = self.ignore.len(),
            "feature catalog ready"
        );
        table
    }
}

impl Default for CatalogBuilder {
    fn default() -> Self {
        Self::new()
    }
}
