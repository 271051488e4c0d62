//! Builder utilities for configuring graph generation.
//!
//! Holds raw, unvalidated parameters with documented defaults and validates
//! them in [`GraphGeneratorBuilder::build`] before constructing a
//! [`GraphGenerator`].

use std::time::{SystemTime, UNIX_EPOCH};

use crate::{
    Result,
    error::GeneratorError,
    generator::{ConnectionProbability, GraphGenerator},
    sampler::DistanceBounds,
};

/// Default number of vending machines in a generated graph.
pub const DEFAULT_NODE_COUNT: usize = 10;
/// Default percentage chance that a pair of machines is connected.
pub const DEFAULT_CONNECTION_PROBABILITY: i64 = 30;

/// Configures and constructs [`GraphGenerator`] instances.
///
/// # Examples
/// ```
/// use vendgraph_core::GraphGeneratorBuilder;
///
/// let generator = GraphGeneratorBuilder::new()
///     .with_node_count(12)
///     .with_connection_probability(45)
///     .with_seed(7)
///     .build()
///     .expect("builder configuration is valid");
/// assert_eq!(generator.node_count(), 12);
/// assert_eq!(generator.connection_probability().percent(), 45);
/// assert_eq!(generator.seed(), 7);
/// ```
#[derive(Debug, Clone)]
pub struct GraphGeneratorBuilder {
    node_count: usize,
    connection_probability: i64,
    bounds: DistanceBounds,
    seed: Option<u64>,
}

impl Default for GraphGeneratorBuilder {
    fn default() -> Self {
        Self {
            node_count: DEFAULT_NODE_COUNT,
            connection_probability: DEFAULT_CONNECTION_PROBABILITY,
            bounds: DistanceBounds::default(),
            seed: None,
        }
    }
}

impl GraphGeneratorBuilder {
    /// Creates a builder populated with default parameters.
    ///
    /// # Examples
    /// ```
    /// use vendgraph_core::{DistanceBounds, GraphGeneratorBuilder};
    ///
    /// let builder = GraphGeneratorBuilder::new();
    /// assert_eq!(builder.node_count(), 10);
    /// assert_eq!(builder.connection_probability(), 30);
    /// assert_eq!(builder.distance_bounds(), DistanceBounds::default());
    /// assert_eq!(builder.seed(), None);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the number of vending machines.
    #[must_use]
    pub const fn with_node_count(mut self, node_count: usize) -> Self {
        self.node_count = node_count;
        self
    }

    /// Returns the configured node count.
    #[must_use]
    pub const fn node_count(&self) -> usize {
        self.node_count
    }

    /// Overrides the connection probability, as a percentage.
    ///
    /// Values outside `0..=100` are accepted here and rejected by
    /// [`Self::build`].
    #[must_use]
    pub const fn with_connection_probability(mut self, percent: i64) -> Self {
        self.connection_probability = percent;
        self
    }

    /// Returns the configured connection probability.
    #[must_use]
    pub const fn connection_probability(&self) -> i64 {
        self.connection_probability
    }

    /// Overrides the range and resolution of sampled distances.
    #[must_use]
    pub const fn with_distance_bounds(mut self, bounds: DistanceBounds) -> Self {
        self.bounds = bounds;
        self
    }

    /// Returns the configured distance bounds.
    #[must_use]
    pub const fn distance_bounds(&self) -> DistanceBounds {
        self.bounds
    }

    /// Fixes the random seed so generation is reproducible.
    ///
    /// # Examples
    /// ```
    /// use vendgraph_core::GraphGeneratorBuilder;
    ///
    /// let builder = GraphGeneratorBuilder::new().with_seed(42);
    /// assert_eq!(builder.seed(), Some(42));
    /// ```
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Returns the explicit seed, if one was set.
    #[must_use]
    pub const fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Validates the configuration and constructs a [`GraphGenerator`].
    ///
    /// Without an explicit seed the generator is seeded from the system
    /// clock.
    ///
    /// # Errors
    /// Returns [`GeneratorError::InvalidNodeCount`] when fewer than two nodes
    /// are requested or the matrix size would overflow `usize`, and [`GeneratorError::InvalidConnectionProbability`] when
    /// the probability is outside `0..=100`.
    ///
    /// # Examples
    /// ```
    /// use vendgraph_core::{GeneratorError, GraphGeneratorBuilder};
    ///
    /// let err = GraphGeneratorBuilder::new()
    ///     .with_node_count(1)
    ///     .build()
    ///     .expect_err("a single node cannot be connected");
    /// assert_eq!(err, GeneratorError::InvalidNodeCount { got: 1 });
    /// ```
    pub fn build(self) -> Result<GraphGenerator> {
        if self.node_count < 2 || self.node_count.checked_mul(self.node_count).is_none() {
            return Err(GeneratorError::InvalidNodeCount {
                got: self.node_count,
            });
        }
        let probability = ConnectionProbability::new(self.connection_probability)?;
        let seed = self.seed.unwrap_or_else(clock_seed);

        Ok(GraphGenerator::new(
            self.node_count,
            probability,
            self.bounds,
            seed,
        ))
    }
}

/// Low 64 bits of the nanoseconds since the Unix epoch.
fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| {
            u64::try_from(elapsed.as_nanos() & u128::from(u64::MAX)).unwrap_or(u64::MAX)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case(0)]
    #[case(1)]
    fn build_rejects_too_few_nodes(#[case] node_count: usize) {
        let err = GraphGeneratorBuilder::new()
            .with_node_count(node_count)
            .build()
            .expect_err("node count must be rejected");
        assert_eq!(err, GeneratorError::InvalidNodeCount { got: node_count });
        assert!(err.is_configuration());
    }

    #[rstest]
    fn build_rejects_node_count_whose_matrix_overflows() {
        let node_count = 1_usize << (usize::BITS / 2);
        let err = GraphGeneratorBuilder::new()
            .with_node_count(node_count)
            .build()
            .expect_err("matrix size must overflow");
        assert_eq!(err, GeneratorError::InvalidNodeCount { got: node_count });
        assert!(err.is_configuration());
    }

    #[rstest]
    fn clock_seed_changes_between_calls() {
        let first = clock_seed();
        std::thread::sleep(std::time::Duration::from_millis(1));
        assert_ne!(first, clock_seed());
    }

    #[rstest]
    #[case(-1)]
    #[case(101)]
    #[case(i64::MIN)]
    fn build_rejects_out_of_range_probability(#[case] percent: i64) {
        let err = GraphGeneratorBuilder::new()
            .with_connection_probability(percent)
            .build()
            .expect_err("probability must be rejected");
        assert_eq!(
            err,
            GeneratorError::InvalidConnectionProbability { got: percent }
        );
    }

    #[rstest]
    #[case(0)]
    #[case(100)]
    fn build_accepts_probability_limits(#[case] percent: i64) {
        let generator = GraphGeneratorBuilder::new()
            .with_connection_probability(percent)
            .build()
            .expect("limits are valid");
        assert_eq!(
            i64::from(generator.connection_probability().percent()),
            percent
        );
    }

    #[rstest]
    fn build_carries_distance_bounds() {
        let bounds = DistanceBounds::new(5, 9, 1).expect("bounds are valid");
        let generator = GraphGeneratorBuilder::new()
            .with_distance_bounds(bounds)
            .build()
            .expect("configuration is valid");
        assert_eq!(generator.distance_bounds(), bounds);
    }
}
