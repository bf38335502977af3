//! # webline-core
//!
//! Foundation crate for the webline baseline scanner.
//! Defines errors, config, tracing, shared collections, and constants.
//! `webline-analysis` depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;
pub mod types;

// Re-export the most commonly used types at the crate root.
pub use config::WeblineConfig;
pub use errors::error_code::WeblineErrorCode;
pub use types::collections::{FxHashMap, FxHashSet};
