//! Random graph generation for vending machine layouts.
//!
//! Provides the [`GraphGenerator`] entry point, which fills a zeroed
//! [`WeightMatrix`] with randomly sampled edges and then runs the
//! [`ConnectivityRepair`] pass so no machine is left without an edge.

use rand::{Rng, SeedableRng, rngs::SmallRng};
use tracing::{info, instrument};

use crate::{
    Result,
    error::GeneratorError,
    matrix::WeightMatrix,
    repair::{ConnectivityRepair, RepairReport},
    sampler::{DistanceBounds, DistanceSampler},
};

/// Percentage chance, in `0..=100`, that a candidate pair receives an edge.
///
/// # Examples
/// ```
/// use vendgraph_core::ConnectionProbability;
///
/// let probability = ConnectionProbability::new(25).expect("25% is valid");
/// assert_eq!(probability.percent(), 25);
/// assert!(probability.admits(24));
/// assert!(!probability.admits(25));
/// assert!(ConnectionProbability::new(120).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConnectionProbability(u8);

impl ConnectionProbability {
    /// Validates a percentage.
    ///
    /// # Errors
    /// Returns [`GeneratorError::InvalidConnectionProbability`] when
    /// `percent` is outside `0..=100`.
    pub fn new(percent: i64) -> Result<Self> {
        u8::try_from(percent)
            .ok()
            .filter(|value| *value <= 100)
            .map(Self)
            .ok_or(GeneratorError::InvalidConnectionProbability { got: percent })
    }

    /// The percentage as an integer.
    #[must_use]
    pub const fn percent(self) -> u8 {
        self.0
    }

    /// Returns `true` when a uniform draw from `[0, 100)` selects the pair.
    #[must_use]
    pub const fn admits(self, draw: u8) -> bool {
        draw < self.0
    }
}

/// Graph produced by [`GraphGenerator::generate`].
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedGraph {
    matrix: WeightMatrix,
    repair: RepairReport,
}

impl GeneratedGraph {
    /// The finished weight matrix.
    #[must_use]
    pub const fn matrix(&self) -> &WeightMatrix {
        &self.matrix
    }

    /// Edges added by the repair pass.
    #[must_use]
    pub const fn repair(&self) -> &RepairReport {
        &self.repair
    }

    /// Consumes the result, returning the weight matrix.
    #[must_use]
    pub fn into_matrix(self) -> WeightMatrix {
        self.matrix
    }
}

/// Entry point for generating vending machine graphs.
///
/// The generator owns a random source seeded once at construction, so
/// consecutive calls to [`Self::generate`] produce different graphs while the
/// whole sequence stays reproducible from [`Self::seed`].
///
/// # Examples
/// ```
/// use vendgraph_core::GraphGeneratorBuilder;
///
/// let mut generator = GraphGeneratorBuilder::new()
///     .with_node_count(5)
///     .with_connection_probability(100)
///     .with_seed(1)
///     .build()
///     .expect("builder must succeed");
/// let graph = generator.generate().expect("generation must succeed");
/// assert_eq!(graph.matrix().edge_count(), 10);
/// assert!(graph.repair().is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct GraphGenerator {
    node_count: usize,
    probability: ConnectionProbability,
    sampler: DistanceSampler,
    seed: u64,
    rng: SmallRng,
}

impl GraphGenerator {
    pub(crate) fn new(
        node_count: usize,
        probability: ConnectionProbability,
        bounds: DistanceBounds,
        seed: u64,
    ) -> Self {
        Self {
            node_count,
            probability,
            sampler: DistanceSampler::new(bounds),
            seed,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Number of vending machines in generated graphs.
    #[must_use]
    pub const fn node_count(&self) -> usize {
        self.node_count
    }

    /// Probability used for the random edge pass.
    #[must_use]
    pub const fn connection_probability(&self) -> ConnectionProbability {
        self.probability
    }

    /// Range and resolution of generated weights.
    #[must_use]
    pub const fn distance_bounds(&self) -> DistanceBounds {
        *self.sampler.bounds()
    }

    /// Seed the internal random source was initialised with.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Generates a graph using the generator's own random source.
    ///
    /// # Errors
    /// Returns [`GeneratorError`] only if a matrix update is rejected, which
    /// a validated generator never triggers.
    #[instrument(
        name = "generate_graph",
        skip(self),
        fields(
            node_count = self.node_count,
            probability = self.probability.percent(),
            seed = self.seed,
        ),
    )]
    pub fn generate(&mut self) -> Result<GeneratedGraph> {
        let mut rng = self.rng.clone();
        let graph = self.generate_with_rng(&mut rng)?;
        self.rng = rng;
        info!(
            edges = graph.matrix.edge_count(),
            repaired = graph.repair.repaired_count(),
            "generated vending machine graph"
        );
        Ok(graph)
    }

    /// Generates a graph drawing randomness from `rng`.
    ///
    /// Visits every pair `(i, j)` with `i < j` in row-major order. A pair
    /// without an edge receives one when a uniform draw from `[0, 100)` is
    /// below the connection probability. The repair pass then links any
    /// node left isolated.
    ///
    /// # Errors
    /// Returns [`GeneratorError`] only if a matrix update is rejected.
    ///
    /// # Examples
    /// ```
    /// use rand::{SeedableRng, rngs::SmallRng};
    /// use vendgraph_core::GraphGeneratorBuilder;
    ///
    /// let generator = GraphGeneratorBuilder::new()
    ///     .with_node_count(4)
    ///     .with_connection_probability(0)
    ///     .build()
    ///     .expect("builder must succeed");
    /// let mut rng = SmallRng::seed_from_u64(21);
    /// let graph = generator.generate_with_rng(&mut rng).expect("generation must succeed");
    /// assert!((2..=4).contains(&graph.matrix().edge_count()));
    /// assert_eq!(graph.repair().repaired_count(), graph.matrix().edge_count());
    /// ```
    pub fn generate_with_rng<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<GeneratedGraph> {
        let mut matrix = WeightMatrix::zeroed(self.node_count)?;
        let floor = f64::from(self.sampler.bounds().min_distance());

        for row in 0..self.node_count {
            for column in (row + 1)..self.node_count {
                let unconnected = matrix.weight(row, column).is_some_and(|weight| weight < floor);
                if unconnected && self.probability.admits(rng.gen_range(0..100)) {
                    matrix.set_symmetric(row, column, self.sampler.sample(rng))?;
                }
            }
        }

        let repair = ConnectivityRepair::new(self.sampler).repair(&mut matrix, rng)?;
        Ok(GeneratedGraph { matrix, repair })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    use crate::builder::GraphGeneratorBuilder;

    fn generator(node_count: usize, percent: i64, seed: u64) -> GraphGenerator {
        GraphGeneratorBuilder::new()
            .with_node_count(node_count)
            .with_connection_probability(percent)
            .with_seed(seed)
            .build()
            .expect("configuration is valid")
    }

    #[rstest]
    #[case(-5)]
    #[case(256)]
    #[case(101)]
    fn connection_probability_rejects_out_of_range(#[case] percent: i64) {
        assert_eq!(
            ConnectionProbability::new(percent),
            Err(GeneratorError::InvalidConnectionProbability { got: percent })
        );
    }

    #[rstest]
    fn zero_probability_admits_nothing_and_full_admits_everything() {
        let never = ConnectionProbability::new(0).expect("valid");
        let always = ConnectionProbability::new(100).expect("valid");
        assert!((0..100).all(|draw| !never.admits(draw)));
        assert!((0..100).all(|draw| always.admits(draw)));
    }

    #[rstest]
    fn same_seed_reproduces_the_same_graph() {
        let first = generator(20, 35, 77).generate().expect("generation");
        let second = generator(20, 35, 77).generate().expect("generation");
        assert_eq!(first, second);
    }

    #[rstest]
    fn consecutive_calls_advance_the_random_source() {
        let mut generator = generator(20, 35, 77);
        let first = generator.generate().expect("generation");
        let second = generator.generate().expect("generation");
        assert_ne!(first.matrix(), second.matrix());
    }

    #[rstest]
    fn full_probability_needs_no_repair() {
        let graph = generator(8, 100, 3).generate().expect("generation");
        assert_eq!(graph.matrix().edge_count(), 8 * 7 / 2);
        assert!(graph.repair().is_empty());
    }

    #[rstest]
    fn zero_probability_edges_all_come_from_repair() {
        let graph = generator(12, 0, 9).generate().expect("generation");
        let repaired: Vec<(usize, usize)> = graph
            .repair()
            .edges()
            .iter()
            .map(|edge| (edge.node.min(edge.partner), edge.node.max(edge.partner)))
            .collect();
        for (row, column, _) in graph.matrix().edges() {
            assert!(repaired.contains(&(row, column)));
        }
        assert!((0..12).all(|node| graph.matrix().degree(node) >= 1));
    }
}
