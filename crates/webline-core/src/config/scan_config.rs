//! Scanner configuration.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_MAX_FILE_SIZE;

/// What the scan pipeline does when a stylesheet fails to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StyleErrorPolicy {
    /// Record the failure, log it, and keep scanning.
    #[default]
    Skip,
    /// Stop the run with the first failure in input order.
    Abort,
}

/// Configuration for the scan pipeline.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ScanConfig {
    /// Maximum file size in bytes. Default: 1MB (1_048_576).
    pub max_file_size: Option<u64>,
    /// Number of detection threads. 0 = rayon global pool.
    pub threads: Option<usize>,
    /// Stylesheet parse failure handling. Default: skip.
    pub style_errors: StyleErrorPolicy,
    /// Detector ids to leave out of the registry.
    #[serde(default)]
    pub disabled_detectors: Vec<String>,
}

impl ScanConfig {
    /// Returns the effective max file size, defaulting to 1MB.
    pub fn effective_max_file_size(&self) -> u64 {
        self.max_file_size.unwrap_or(DEFAULT_MAX_FILE_SIZE)
    }

    /// Returns the effective thread count, defaulting to 0 (global pool).
    pub fn effective_threads(&self) -> usize {
        self.threads.unwrap_or(0)
    }
}
