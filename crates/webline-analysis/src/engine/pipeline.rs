//! Scan pipeline — route, detect in parallel, fold serially.
//!
//! Phase 1: route each file by source kind and size
//! Phase 2: per-file detection on rayon workers, collected in input order
//! Phase 3: fold into the aggregator in input order

use std::sync::Arc;
use std::time::Instant;

use rayon::prelude::*;
use webline_core::config::{ScanConfig, StyleErrorPolicy};
use webline_core::errors::{DetectionError, ScanError};

use super::types::{ScanDiagnostics, SourceFile, StyleFailure};
use crate::aggregation::{Aggregator, Report};
use crate::catalog::{Feature, LookupTable};
use crate::detectors::{create_default_registry, DetectorRegistry};
use crate::scanner::SourceKind;

/// Result of one scan run.
#[derive(Debug, Clone)]
pub struct ScanOutcome {
    pub report: Report,
    pub diagnostics: ScanDiagnostics,
    /// Stylesheets left out of the report, in input order.
    pub style_failures: Vec<StyleFailure>,
}

/// Per-file result of phases 1 and 2.
enum FileResult {
    Unsupported,
    TooLarge,
    Detected {
        kind: SourceKind,
        features: Vec<Arc<Feature>>,
    },
    Failed {
        kind: SourceKind,
        error: DetectionError,
    },
}

/// The scan pipeline. Holds no per-run state, so one instance can run many times.
pub struct ScanPipeline {
    config: ScanConfig,
    registry: DetectorRegistry,
}

impl ScanPipeline {
    /// Create a pipeline with the default registry, minus any detectors the
    /// config disables.
    pub fn new(config: ScanConfig) -> Self {
        let registry = create_default_registry();
        Self::with_registry(config, registry)
    }

    /// Create a pipeline with a custom registry.
    pub fn with_registry(config: ScanConfig, mut registry: DetectorRegistry) -> Self {
        for id in &config.disabled_detectors {
            registry.disable(id);
        }
        Self { config, registry }
    }

    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    pub fn registry(&self) -> &DetectorRegistry {
        &self.registry
    }

    /// Scan `files` against `table`.
    pub fn run(&self, files: &[SourceFile], table: &LookupTable) -> Result<ScanOutcome, ScanError> {
        let start = Instant::now();
        let threads = self.config.effective_threads();

        let results = if threads == 0 {
            self.detect_all(files, table)
        } else {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build()
                .map_err(|e| ScanError::ThreadPool {
                    message: e.to_string(),
                })?;
            pool.install(|| self.detect_all(files, table))
        };

        let mut diagnostics = ScanDiagnostics {
            files_total: files.len(),
            ..Default::default()
        };
        let mut style_failures = Vec::new();
        let mut aggregator = Aggregator::new();

        for (file, result) in files.iter().zip(results) {
            match result {
                FileResult::Unsupported => diagnostics.files_skipped_unsupported += 1,
                FileResult::TooLarge => {
                    tracing::debug!(file = %file.path, "file exceeds max size, skipping");
                    diagnostics.files_skipped_large += 1;
                }
                FileResult::Detected { kind, features } => {
                    count_kind(&mut diagnostics, kind);
                    diagnostics.files_scanned += 1;
                    diagnostics.hits += aggregator.add(&file.path, &features);
                }
                FileResult::Failed { kind, error } => {
                    count_kind(&mut diagnostics, kind);
                    match self.config.style_errors {
                        StyleErrorPolicy::Abort => {
                            tracing::error!(file = %file.path, error = %error, "aborting scan");
                            return Err(ScanError::Detection(error));
                        }
                        StyleErrorPolicy::Skip => {
                            tracing::warn!(file = %file.path, error = %error, "stylesheet skipped");
                            diagnostics.style_failures += 1;
                            style_failures.push(StyleFailure {
                                file: file.path.clone(),
                                error,
                            });
                        }
                    }
                }
            }
        }

        diagnostics.duration_ms = start.elapsed().as_millis() as u64;
        let report = aggregator.finish();
        tracing::info!(
            files = diagnostics.files_total,
            scanned = diagnostics.files_scanned,
            features = report.len(),
            style_failures = diagnostics.style_failures,
            duration_ms = diagnostics.duration_ms,
            "scan complete"
        );

        Ok(ScanOutcome {
            report,
            diagnostics,
            style_failures,
        })
    }

    fn detect_all(&self, files: &[SourceFile], table: &LookupTable) -> Vec<FileResult> {
        files
            .par_iter()
            .map(|file| self.detect_one(file, table))
            .collect()
    }

    fn detect_one(&self, file: &SourceFile, table: &LookupTable) -> FileResult {
        let kind = file.kind();
        if !self.registry.handles(kind) {
            return FileResult::Unsupported;
        }
        if file.text.len() as u64 > self.config.effective_max_file_size() {
            return FileResult::TooLarge;
        }
        match self.registry.run(file, kind, table) {
            Ok(features) => FileResult::Detected { kind, features },
            Err(error) => FileResult::Failed { kind, error },
        }
    }
}

impl Default for ScanPipeline {
    fn default() -> Self {
        Self::new(ScanConfig::default())
    }
}

fn count_kind(diagnostics: &mut ScanDiagnostics, kind: SourceKind) {
    match kind {
        SourceKind::Script(_) => diagnostics.script_files += 1,
        SourceKind::Stylesheet => diagnostics.style_files += 1,
        SourceKind::Unsupported => {}
    }
}
