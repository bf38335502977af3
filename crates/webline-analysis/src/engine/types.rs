//! Core types for the scan engine.

use std::path::Path;

use serde::{Deserialize, Serialize};
use webline_core::errors::DetectionError;

use crate::scanner::SourceKind;

/// One discovered file, already read by the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceFile {
    /// Path as reported in the output. Its extension picks the detector.
    pub path: String,
    pub text: String,
}

impl SourceFile {
    pub fn new(path: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            text: text.into(),
        }
    }

    pub fn kind(&self) -> SourceKind {
        SourceKind::from_path(Path::new(&self.path))
    }
}

/// Counters collected over one scan run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanDiagnostics {
    pub files_total: usize,
    pub files_scanned: usize,
    pub files_skipped_unsupported: usize,
    pub files_skipped_large: usize,
    pub script_files: usize,
    pub style_files: usize,
    pub style_failures: usize,
    /// Distinct (feature, file) pairs folded into the report.
    pub hits: usize,
    pub duration_ms: u64,
}

/// A stylesheet that could not be parsed and was left out of the report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleFailure {
    pub file: String,
    pub error: DetectionError,
}
