//! Aggregator — folds per-file detections into one report.

use std::sync::Arc;

use webline_core::{FxHashMap, FxHashSet};

use super::types::{Report, ReportEntry};
use crate::catalog::Feature;

/// Mutable accumulator for a single run.
///
/// Fetch-or-create per feature id; paths are kept as a true set per entry.
#[derive(Debug, Default)]
pub struct Aggregator {
    entries: Vec<ReportEntry>,
    index: FxHashMap<String, usize>,
    /// (entry slot, path) pairs already recorded.
    seen: FxHashSet<(usize, String)>,
}

impl Aggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `file` against each feature. Returns the number of new
    /// (feature, file) pairs.
    pub fn add(&mut self, file: &str, features: &[Arc<Feature>]) -> usize {
        features
            .iter()
            .filter(|feature| self.add_one(feature, file))
            .count()
    }

    fn add_one(&mut self, feature: &Arc<Feature>, file: &str) -> bool {
        let slot = self.slot_for(feature);
        if !self.seen.insert((slot, file.to_string())) {
            return false;
        }
        self.entries[slot].files.push(file.to_string());
        true
    }

    fn slot_for(&mut self, feature: &Arc<Feature>) -> usize {
        if let Some(&slot) = self.index.get(&feature.id) {
            return slot;
        }
        let slot = self.entries.len();
        self.index.insert(feature.id.clone(), slot);
        self.entries.push(ReportEntry::new(Arc::clone(feature)));
        slot
    }

    /// Fold a partial aggregator into this one. Entries already present keep
    /// their position; new ones follow in `other`'s first-seen order.
    pub fn merge(&mut self, other: Aggregator) {
        for entry in other.entries {
            for file in &entry.files {
                self.add_one(&entry.feature, file);
            }
            // An entry with no files still claims its position.
            self.slot_for(&entry.feature);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn finish(self) -> Report {
        Report::from_entries(self.entries)
    }
}
