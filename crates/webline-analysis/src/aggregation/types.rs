//! Report types produced by the aggregator.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::catalog::{Baseline, Feature};

/// One feature and every file it was detected in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportEntry {
    pub feature: Arc<Feature>,
    /// Distinct paths in first-seen order. Most features show up in a handful of files.
    pub files: SmallVec<[String; 4]>,
}

impl ReportEntry {
    pub fn new(feature: Arc<Feature>) -> Self {
        Self {
            feature,
            files: SmallVec::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.feature.id
    }

    pub fn to_record(&self) -> ReportRecord {
        ReportRecord {
            id: self.feature.id.clone(),
            name: self.feature.name.clone(),
            baseline: self.feature.baseline.clone(),
            files: self.files.to_vec(),
        }
    }
}

/// Flat, serializable form of a [`ReportEntry`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRecord {
    pub id: String,
    pub name: String,
    pub baseline: Baseline,
    pub files: Vec<String>,
}

/// Final aggregated report, entries in first-seen feature order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    entries: Vec<ReportEntry>,
}

impl Report {
    pub(crate) fn from_entries(entries: Vec<ReportEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[ReportEntry] {
        &self.entries
    }

    pub fn get(&self, id: &str) -> Option<&ReportEntry> {
        self.entries.iter().find(|entry| entry.id() == id)
    }

    pub fn records(&self) -> Vec<ReportRecord> {
        self.entries.iter().map(ReportEntry::to_record).collect()
    }

    /// Records as a JSON array.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.records())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
