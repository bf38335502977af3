//! Policy gate configuration.

use serde::{Deserialize, Serialize};

/// Inputs to the baseline policy verdict.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct PolicyConfig {
    /// Fail the run when any limited-availability or critical feature is found.
    pub fail_on_limited: bool,
    /// Feature ids that always count against the verdict, whatever their baseline.
    /// Compared case-insensitively.
    pub critical_features: Vec<String>,
}

impl PolicyConfig {
    pub fn new(fail_on_limited: bool, critical_features: Vec<String>) -> Self {
        Self {
            fail_on_limited,
            critical_features,
        }
    }
}
