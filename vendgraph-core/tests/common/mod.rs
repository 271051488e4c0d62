#![allow(dead_code, reason = "each integration test uses a subset of the helpers")]

use proptest::test_runner::Config as ProptestConfig;
use vendgraph_core::{GraphGenerator, GraphGeneratorBuilder};
use vendgraph_test_support::property::ProptestRunProfile;

/// Builds a proptest configuration honouring `VENDGRAPH_PBT_CASES`.
#[must_use]
pub fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let profile = ProptestRunProfile::load(default_cases);
    ProptestConfig {
        cases: profile.cases(),
        ..ProptestConfig::default()
    }
}

/// Builds a seeded generator, panicking on invalid configuration.
#[must_use]
pub fn seeded_generator(node_count: usize, percent: i64, seed: u64) -> GraphGenerator {
    match GraphGeneratorBuilder::new()
        .with_node_count(node_count)
        .with_connection_probability(percent)
        .with_seed(seed)
        .build()
    {
        Ok(generator) => generator,
        Err(err) => panic!("invalid test configuration: {err}"),
    }
}
