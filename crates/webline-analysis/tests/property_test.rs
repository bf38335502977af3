//! Property-based tests: invariants of merge and aggregation for arbitrary inputs.

use std::sync::Arc;

use proptest::prelude::*;
use webline_analysis::{Aggregator, Feature, IgnoreSet, LookupTable};
use webline_core::FxHashSet;

// ─── Strategies ────────────────────────────────────────────────────────────

fn arb_name() -> impl Strategy<Value = String> {
    // Small alphabet so collisions (and case-only differences) are common.
    "[a-cA-C]{1,3}"
}

fn arb_feature() -> impl Strategy<Value = Feature> {
    (arb_name(), arb_name(), any::<bool>())
        .prop_map(|(id, name, baseline)| Feature::new(id.to_lowercase(), name, baseline, ""))
}

fn arb_catalog() -> impl Strategy<Value = Vec<Feature>> {
    prop::collection::vec(arb_feature(), 0..24)
}

proptest! {
    #[test]
    fn merge_is_deterministic(
        bundled in arb_catalog(),
        local in arb_catalog(),
        ignored in prop::collection::vec(arb_name(), 0..4),
    ) {
        let ignore: IgnoreSet = ignored.iter().collect();
        let a = LookupTable::merge(&bundled, &local, &ignore);
        let b = LookupTable::merge(&bundled, &local, &ignore);
        prop_assert_eq!(a, b);
    }

    #[test]
    fn ignored_tokens_never_reach_the_table(
        bundled in arb_catalog(),
        local in arb_catalog(),
        ignored in prop::collection::vec(arb_name(), 1..4),
    ) {
        let ignore: IgnoreSet = ignored.iter().collect();
        let table = LookupTable::merge(&bundled, &local, &ignore);
        for (_, feature) in table.iter() {
            prop_assert!(!ignore.contains(&feature.name));
            prop_assert!(!ignore.contains(&feature.id));
        }
    }

    #[test]
    fn last_source_wins_per_key(bundled in arb_catalog(), local in arb_catalog()) {
        let table = LookupTable::merge(&bundled, &local, &IgnoreSet::new());
        for (key, feature) in table.iter() {
            let last = bundled
                .iter()
                .chain(&local)
                .filter(|f| f.match_key() == key)
                .last()
                .unwrap();
            prop_assert_eq!(&**feature, last);
        }
    }

    #[test]
    fn aggregated_file_lists_have_no_duplicates(
        hits in prop::collection::vec((0usize..6, 0usize..5), 0..60)
    ) {
        let features: Vec<Arc<Feature>> = (0..6)
            .map(|i| Arc::new(Feature::new(format!("f{i}"), format!("f{i}"), true, "")))
            .collect();
        let mut agg = Aggregator::new();
        for (feature, file) in &hits {
            agg.add(&format!("file_{file}.js"), &[Arc::clone(&features[*feature])]);
        }
        let report = agg.finish();

        let mut ids = FxHashSet::default();
        for record in report.records() {
            prop_assert!(ids.insert(record.id.clone()));
            let unique: FxHashSet<_> = record.files.iter().collect();
            prop_assert_eq!(unique.len(), record.files.len());
            prop_assert!(!record.files.is_empty());
        }
    }
}
