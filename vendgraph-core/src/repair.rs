//! Connectivity repair pass.
//!
//! Sparse probabilities leave some vending machines without any edge. The
//! repair pass walks the nodes in order and links every isolated node to a
//! random distinct partner, so each node ends with at least one incident
//! edge. It does not join separate components.

use rand::Rng;
use tracing::debug;

use crate::{Result, error::GeneratorError, matrix::WeightMatrix, sampler::DistanceSampler};

/// Edge added by the repair pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RepairedEdge {
    /// The node that was isolated.
    pub node: usize,
    /// The partner chosen for it.
    pub partner: usize,
    /// Weight assigned to the new edge.
    pub weight: f64,
}

/// Summary of the edges added by [`ConnectivityRepair::repair`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RepairReport {
    edges: Vec<RepairedEdge>,
}

impl RepairReport {
    /// Edges added, in the order the isolated nodes were visited.
    #[must_use]
    pub fn edges(&self) -> &[RepairedEdge] {
        &self.edges
    }

    /// Number of nodes that needed repair.
    #[must_use]
    pub fn repaired_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns `true` when every node already had an edge.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

/// Links isolated nodes to random partners.
///
/// # Examples
/// ```
/// use rand::{SeedableRng, rngs::SmallRng};
/// use vendgraph_core::{ConnectivityRepair, DistanceSampler, WeightMatrix};
///
/// let mut matrix = WeightMatrix::zeroed(4).expect("matrix must fit");
/// let mut rng = SmallRng::seed_from_u64(3);
/// let report = ConnectivityRepair::new(DistanceSampler::default())
///     .repair(&mut matrix, &mut rng)
///     .expect("four nodes can always be repaired");
/// assert!(report.repaired_count() >= 2);
/// assert!((0..4).all(|node| !matrix.is_isolated(node)));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ConnectivityRepair {
    sampler: DistanceSampler,
}

impl ConnectivityRepair {
    /// Creates a repair pass that weights new edges with `sampler`.
    #[must_use]
    pub const fn new(sampler: DistanceSampler) -> Self {
        Self { sampler }
    }

    /// Gives every isolated node in `matrix` one edge to a random other node.
    ///
    /// Nodes are visited in ascending order and isolation is evaluated when
    /// the node is reached, so a node linked as the partner of an earlier
    /// node is no longer isolated by the time it is visited.
    ///
    /// # Errors
    /// Returns [`GeneratorError::RepairImpossible`] when an isolated node is
    /// found in a matrix with fewer than two nodes.
    pub fn repair<R: Rng + ?Sized>(
        &self,
        matrix: &mut WeightMatrix,
        rng: &mut R,
    ) -> Result<RepairReport> {
        let node_count = matrix.node_count();
        let mut report = RepairReport::default();

        for node in 0..node_count {
            if !matrix.is_isolated(node) {
                continue;
            }
            if node_count < 2 {
                return Err(GeneratorError::RepairImpossible { node_count });
            }

            let partner = pick_partner(node, node_count, rng);
            let weight = self.sampler.sample(rng);
            matrix.set_symmetric(node, partner, weight)?;
            debug!(node, partner, weight, "linked isolated node");
            report.edges.push(RepairedEdge {
                node,
                partner,
                weight,
            });
        }

        Ok(report)
    }
}

/// Draws a node in `[0, node_count)` other than `node`, redrawing on a hit.
fn pick_partner<R: Rng + ?Sized>(node: usize, node_count: usize, rng: &mut R) -> usize {
    loop {
        let candidate = rng.gen_range(0..node_count);
        if candidate != node {
            return candidate;
        }
    }
}
