//! Report aggregation — feature id → files that use it, in first-seen order.

pub mod aggregator;
pub mod types;

pub use aggregator::Aggregator;
pub use types::{Report, ReportEntry, ReportRecord};
