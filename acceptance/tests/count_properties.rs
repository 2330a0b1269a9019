//! Property-based tests for entity counting.
//!
//! Uses proptest to check that counting is additive across classes, does
//! not deduplicate, and is stable across repeated fetches.

mod common;

use std::time::Duration;

use proptest::prelude::*;
use spindle_acceptance::graph::{parse_ntriples, GraphLoader};
use spindle_acceptance::{count_entities, EntityCounter, EntityTally, TypeSet};

use common::{people_and_works, typed, PERSON, WORK};

// =============================================================================
// Additivity
// =============================================================================

proptest! {
    /// a persons and b works count a + b
    #[test]
    fn prop_disjoint_classes_add(a in 0usize..40, b in 0usize..40) {
        let graph = parse_ntriples(&people_and_works(a, b), "prop").unwrap();
        prop_assert_eq!(count_entities(&graph, &TypeSet::default()), a + b);
    }

    /// subjects carrying both classes contribute two each
    #[test]
    fn prop_shared_subjects_count_per_class(n in 0usize..40) {
        let doc: String = (0..n)
            .map(|i| {
                let subject = format!("s/{i}");
                format!("{}{}", typed(&subject, PERSON), typed(&subject, WORK))
            })
            .collect();
        let graph = parse_ntriples(&doc, "prop").unwrap();
        prop_assert_eq!(count_entities(&graph, &TypeSet::default()), 2 * n);
    }

    /// the tally total always equals the count
    #[test]
    fn prop_tally_total_is_count(a in 0usize..40, b in 0usize..40) {
        let graph = parse_ntriples(&people_and_works(a, b), "prop").unwrap();
        let types = TypeSet::default();
        prop_assert_eq!(EntityTally::of(&graph, &types).total(), count_entities(&graph, &types));
    }

    /// restricting the class set to one class counts only that class
    #[test]
    fn prop_single_class_set(a in 0usize..40, b in 0usize..40) {
        let graph = parse_ntriples(&people_and_works(a, b), "prop").unwrap();
        let persons = TypeSet::new(["http://xmlns.com/foaf/0.1/Person"]).unwrap();
        prop_assert_eq!(count_entities(&graph, &persons), a);
    }
}

// =============================================================================
// Idempotence
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    /// counting an unchanged graph twice gives the same value
    #[test]
    fn prop_repeat_count_is_stable(a in 0usize..20, b in 0usize..20) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("graph.nt");
        std::fs::write(&path, people_and_works(a, b)).unwrap();
        let uri = path.to_str().unwrap();

        let loader = GraphLoader::new(Duration::from_secs(5)).unwrap();
        let counter = EntityCounter::new(loader, TypeSet::default());
        let first = counter.count(uri).unwrap();
        let second = counter.count(uri).unwrap();
        prop_assert_eq!(first, second);
        prop_assert_eq!(first, a + b);
    }
}

#[test]
fn empty_graph_counts_zero() {
    let graph = parse_ntriples("", "empty").unwrap();
    assert_eq!(count_entities(&graph, &TypeSet::default()), 0);
}
