//! Enforcement — the baseline policy gate over an aggregated report.

pub mod policy;

pub use policy::{evaluate, Verdict};
