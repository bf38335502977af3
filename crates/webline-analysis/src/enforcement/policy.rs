//! Policy evaluator — maps a report plus policy config to a pass/fail verdict.

use serde::{Deserialize, Serialize};
use webline_core::config::PolicyConfig;
use webline_core::FxHashSet;

use crate::aggregation::{Report, ReportRecord};
use crate::catalog::case_fold;

/// Outcome of the policy gate. Entries keep report order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Verdict {
    pub ok: bool,
    /// Entries whose baseline is exactly `false`.
    pub unsafe_entries: Vec<ReportRecord>,
    /// Entries whose id is on the critical list, whatever their baseline.
    pub critical_entries: Vec<ReportRecord>,
}

/// Evaluate `report` against `policy`. Pure.
///
/// Without `fail_on_limited` the verdict is always ok; the entry lists are
/// still filled in for display.
pub fn evaluate(report: &Report, policy: &PolicyConfig) -> Verdict {
    let critical: FxHashSet<String> = policy
        .critical_features
        .iter()
        .map(|id| case_fold(id.trim()))
        .collect();

    let mut unsafe_entries = Vec::new();
    let mut critical_entries = Vec::new();
    for entry in report.entries() {
        if entry.feature.baseline.is_unsafe() {
            unsafe_entries.push(entry.to_record());
        }
        if critical.contains(&case_fold(entry.id())) {
            critical_entries.push(entry.to_record());
        }
    }

    let ok = !(policy.fail_on_limited
        && (!unsafe_entries.is_empty() || !critical_entries.is_empty()));

    tracing::debug!(
        ok,
        unsafe_count = unsafe_entries.len(),
        critical_count = critical_entries.len(),
        fail_on_limited = policy.fail_on_limited,
        "policy evaluated"
    );

    Verdict {
        ok,
        unsafe_entries,
        critical_entries,
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::aggregation::Aggregator;
    use crate::catalog::Feature;

    fn report() -> Report {
        let mut agg = Aggregator::new();
        agg.add(
            "app.ts",
            &[
                Arc::new(Feature::new("fetch", "fetch", true, "")),
                Arc::new(Feature::new("urlpattern", "URLPattern", false, "")),
            ],
        );
        agg.finish()
    }

    #[test]
    fn verdict_serializes_camel_case() {
        let verdict = evaluate(&report(), &PolicyConfig::new(true, vec![]));
        let json = serde_json::to_value(&verdict).unwrap();
        assert_eq!(json["ok"], false);
        assert_eq!(json["unsafeEntries"][0]["id"], "urlpattern");
        assert!(json["criticalEntries"].as_array().unwrap().is_empty());
    }

    #[test]
    fn critical_ids_fold_case() {
        let verdict = evaluate(&report(), &PolicyConfig::new(false, vec!["FETCH".into()]));
        assert!(verdict.ok);
        assert_eq!(verdict.critical_entries.len(), 1);
    }
}
