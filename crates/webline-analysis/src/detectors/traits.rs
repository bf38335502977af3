//! Detector trait and the per-file hit set.

use std::sync::Arc;

use webline_core::errors::DetectionError;
use webline_core::FxHashSet;

use crate::catalog::{Feature, LookupTable};
use crate::engine::types::SourceFile;
use crate::scanner::SourceKind;

/// A detector scans one file against the lookup table.
///
/// Implementations hold no per-file state, so one instance serves every worker.
pub trait FeatureDetector: Send + Sync {
    /// Unique identifier, used to disable the detector from config.
    fn id(&self) -> &'static str;

    /// Whether this detector understands files of `kind`.
    fn handles(&self, kind: SourceKind) -> bool;

    /// Distinct features found in `file`, in first-occurrence order.
    fn detect(
        &self,
        file: &SourceFile,
        kind: SourceKind,
        table: &LookupTable,
    ) -> Result<Vec<Arc<Feature>>, DetectionError>;
}

/// Ordered set of features keyed by feature id.
#[derive(Debug, Default)]
pub struct FeatureHits {
    seen: FxHashSet<String>,
    features: Vec<Arc<Feature>>,
}

impl FeatureHits {
    pub fn new() -> Self {
        Self::default()
    }

    /// Probe the table with an already folded key and record a hit.
    pub fn probe(&mut self, table: &LookupTable, folded: &str) {
        if let Some(feature) = table.get(folded) {
            self.record(feature);
        }
    }

    /// Returns false if the feature was already recorded.
    pub fn record(&mut self, feature: &Arc<Feature>) -> bool {
        if !self.seen.insert(feature.id.clone()) {
            return false;
        }
        self.features.push(Arc::clone(feature));
        true
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    pub fn into_vec(self) -> Vec<Arc<Feature>> {
        self.features
    }
}
