//! Scan engine — per-file routing, parallel detection, and the serial report fold.

pub mod pipeline;
pub mod types;

pub use pipeline::{ScanOutcome, ScanPipeline};
pub use types::{ScanDiagnostics, SourceFile, StyleFailure};
