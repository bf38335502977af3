//! DetectorRegistry — register, enable/disable by id, run every handler for a file.

use std::sync::Arc;

use webline_core::errors::DetectionError;
use webline_core::FxHashSet;

use super::traits::{FeatureDetector, FeatureHits};
use crate::catalog::{Feature, LookupTable};
use crate::engine::types::SourceFile;
use crate::scanner::SourceKind;

/// Registry of detectors with enable/disable.
pub struct DetectorRegistry {
    detectors: Vec<Box<dyn FeatureDetector>>,
    disabled: FxHashSet<String>,
}

impl DetectorRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            detectors: Vec::new(),
            disabled: FxHashSet::default(),
        }
    }

    /// Register a detector.
    pub fn register(&mut self, detector: Box<dyn FeatureDetector>) {
        self.detectors.push(detector);
    }

    /// Disable a specific detector by ID.
    pub fn disable(&mut self, id: &str) {
        self.disabled.insert(id.to_string());
    }

    /// Enable a previously disabled detector.
    pub fn enable(&mut self, id: &str) {
        self.disabled.remove(id);
    }

    /// Run every enabled detector that handles `kind`.
    ///
    /// Results are merged in registration order with duplicates dropped. The
    /// first detector error aborts the file; a panicking detector is logged and
    /// contributes nothing.
    pub fn run(
        &self,
        file: &SourceFile,
        kind: SourceKind,
        table: &LookupTable,
    ) -> Result<Vec<Arc<Feature>>, DetectionError> {
        let mut hits = FeatureHits::new();
        for detector in &self.detectors {
            if !self.should_run(detector.as_ref()) || !detector.handles(kind) {
                continue;
            }
            let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                detector.detect(file, kind, table)
            }));
            match result {
                Ok(found) => {
                    for feature in &found? {
                        hits.record(feature);
                    }
                }
                Err(_) => {
                    tracing::error!(
                        detector_id = detector.id(),
                        file = %file.path,
                        "detector panicked during detection"
                    );
                }
            }
        }
        Ok(hits.into_vec())
    }

    /// Whether any enabled detector handles `kind`.
    pub fn handles(&self, kind: SourceKind) -> bool {
        self.detectors
            .iter()
            .any(|d| self.should_run(d.as_ref()) && d.handles(kind))
    }

    /// Total number of registered detectors.
    pub fn count(&self) -> usize {
        self.detectors.len()
    }

    /// Number of enabled detectors.
    pub fn enabled_count(&self) -> usize {
        self.detectors
            .iter()
            .filter(|d| self.should_run(d.as_ref()))
            .count()
    }

    fn should_run(&self, detector: &dyn FeatureDetector) -> bool {
        !self.disabled.contains(detector.id())
    }
}

impl Default for DetectorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Create a registry with the script and style detectors.
pub fn create_default_registry() -> DetectorRegistry {
    let mut registry = DetectorRegistry::new();
    registry.register(Box::new(super::script::ScriptDetector));
    registry.register(Box::new(super::style::StyleDetector));
    registry
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::IgnoreSet;
    use crate::scanner::ScriptDialect;

    struct Panicky;

    impl FeatureDetector for Panicky {
        fn id(&self) -> &'static str {
            "panicky"
        }

        fn handles(&self, _kind: SourceKind) -> bool {
            true
        }

        fn detect(
            &self,
            _file: &SourceFile,
            _kind: SourceKind,
            _table: &LookupTable,
        ) -> Result<Vec<Arc<Feature>>, DetectionError> {
            panic!("boom")
        }
    }

    fn table() -> LookupTable {
        LookupTable::merge(
            &[Feature::new("fetch", "fetch", true, "")],
            &[],
            &IgnoreSet::new(),
        )
    }

    #[test]
    fn default_registry_has_both_detectors() {
        let registry = create_default_registry();
        assert_eq!(registry.count(), 2);
        assert_eq!(registry.enabled_count(), 2);
        assert!(registry.handles(SourceKind::Stylesheet));
        assert!(registry.handles(SourceKind::Script(ScriptDialect::Tsx)));
        assert!(!registry.handles(SourceKind::Unsupported));
    }

    #[test]
    fn disabled_detector_does_not_run() {
        let mut registry = create_default_registry();
        registry.disable("script");
        assert_eq!(registry.enabled_count(), 1);
        let file = SourceFile::new("a.js", "fetch(url)");
        let kind = SourceKind::Script(ScriptDialect::JavaScript);
        assert!(registry.run(&file, kind, &table()).unwrap().is_empty());

        registry.enable("script");
        assert_eq!(registry.run(&file, kind, &table()).unwrap().len(), 1);
    }

    #[test]
    fn panicking_detector_is_contained() {
        let mut registry = create_default_registry();
        registry.register(Box::new(Panicky));
        let file = SourceFile::new("a.js", "fetch(url)");
        let found = registry
            .run(&file, SourceKind::Script(ScriptDialect::JavaScript), &table())
            .unwrap();
        assert_eq!(found.len(), 1);
    }
}
