//! # webline-analysis
//!
//! Detection engine for the webline baseline scanner.
//! Contains the feature catalog, source-kind routing, the script and style
//! detectors, report aggregation, the policy gate, and the scan pipeline.

pub mod aggregation;
pub mod catalog;
pub mod detectors;
pub mod engine;
pub mod enforcement;
pub mod parsers;
pub mod scanner;

pub use aggregation::{Aggregator, Report, ReportEntry, ReportRecord};
pub use catalog::{Baseline, CatalogBuilder, Feature, IgnoreSet, LocalOverrides, LookupTable};
pub use engine::pipeline::{ScanOutcome, ScanPipeline};
pub use engine::types::{ScanDiagnostics, SourceFile, StyleFailure};
pub use enforcement::{evaluate, Verdict};
