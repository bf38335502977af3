//! Catalog merger — bundled + local overrides − ignored → one lookup table.

use std::sync::Arc;

use webline_core::FxHashMap;

use super::ignore::IgnoreSet;
use super::types::{case_fold, Feature};

/// Immutable name-keyed feature table, built once per run and lent to detectors.
///
/// Keys are case-folded feature names. Iteration follows first insertion of
/// each key; an override replaces the value but keeps the key's position.
#[derive(Debug, Clone, Default)]
pub struct LookupTable {
    entries: Vec<(String, Arc<Feature>)>,
    index: FxHashMap<String, usize>,
}

impl LookupTable {
    /// Merge bundled features and local overrides, later sources winning on
    /// name collision, skipping anything whose name or id is ignored.
    pub fn merge(bundled: &[Feature], local: &[Feature], ignore: &IgnoreSet) -> Self {
        let mut table = Self::default();
        let mut skipped = 0usize;

        for feature in bundled.iter().chain(local) {
            if ignore.contains(&feature.name) || ignore.contains(&feature.id) {
                skipped += 1;
                continue;
            }
            table.insert(feature.clone());
        }

        tracing::debug!(
            bundled = bundled.len(),
            local = local.len(),
            ignored = skipped,
            entries = table.len(),
            "catalog merged"
        );
        table
    }

    fn insert(&mut self, feature: Feature) {
        let key = feature.match_key();
        let feature = Arc::new(feature);
        match self.index.get(&key) {
            Some(&slot) => self.entries[slot].1 = feature,
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, feature));
            }
        }
    }

    /// Probe with an already case-folded key.
    pub fn get(&self, folded: &str) -> Option<&Arc<Feature>> {
        self.index.get(folded).map(|&slot| &self.entries[slot].1)
    }

    /// Probe with a raw token; folds before the lookup.
    pub fn lookup(&self, token: &str) -> Option<&Arc<Feature>> {
        self.get(&case_fold(token))
    }

    /// `(key, feature)` pairs in table order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Arc<Feature>)> {
        self.entries.iter().map(|(key, feature)| (key.as_str(), feature))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl PartialEq for LookupTable {
    fn eq(&self, other: &Self) -> bool {
        self.entries.len() == other.entries.len()
            && self
                .entries
                .iter()
                .zip(&other.entries)
                .all(|((ka, fa), (kb, fb))| ka == kb && fa == fb)
    }
}

impl Eq for LookupTable {}
