//! Property tests for the structural invariants of generated graphs.

mod common;

use proptest::prelude::*;
use vendgraph_core::DistanceBounds;

use common::{seeded_generator, suite_proptest_config};

proptest! {
    #![proptest_config(suite_proptest_config(128))]

    #[test]
    fn generated_graphs_satisfy_invariants(
        node_count in 2_usize..40,
        percent in 0_i64..=100,
        seed in any::<u64>(),
    ) {
        let graph = seeded_generator(node_count, percent, seed)
            .generate()
            .map_err(|err| TestCaseError::fail(err.to_string()))?;
        let matrix = graph.matrix();

        prop_assert_eq!(matrix.check_invariants(&DistanceBounds::default()), Ok(()));
        for (_, _, weight) in matrix.edges() {
            let cents = weight * 100.0;
            prop_assert!((cents.round() - cents).abs() < 1e-6, "{} has extra digits", weight);
        }
    }

    #[test]
    fn repair_only_touches_isolated_nodes(
        node_count in 2_usize..40,
        percent in 0_i64..=100,
        seed in any::<u64>(),
    ) {
        let graph = seeded_generator(node_count, percent, seed)
            .generate()
            .map_err(|err| TestCaseError::fail(err.to_string()))?;
        let repaired = graph.repair().repaired_count();

        prop_assert!(repaired <= node_count);
        if percent == 100 {
            prop_assert_eq!(repaired, 0);
            prop_assert_eq!(graph.matrix().edge_count(), node_count * (node_count - 1) / 2);
        }
        for edge in graph.repair().edges() {
            prop_assert_ne!(edge.node, edge.partner);
            prop_assert_eq!(graph.matrix().weight(edge.node, edge.partner), Some(edge.weight));
        }
    }

    #[test]
    fn zero_probability_degree_comes_from_repair(
        node_count in 2_usize..40,
        seed in any::<u64>(),
    ) {
        let graph = seeded_generator(node_count, 0, seed)
            .generate()
            .map_err(|err| TestCaseError::fail(err.to_string()))?;

        prop_assert_eq!(graph.matrix().edge_count(), graph.repair().repaired_count());
        prop_assert!((0..node_count).all(|node| graph.matrix().degree(node) >= 1));
    }
}
