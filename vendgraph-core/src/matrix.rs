//! Symmetric weight matrix describing distances between vending machines.
//!
//! Storage is a single flat buffer indexed by `row * node_count + column`.
//! A weight of `0.0` means "no edge"; any positive value is the edge length in
//! meters. The only mutator writes both halves of the matrix so symmetry holds
//! after every update.

use thiserror::Error;

use crate::{error::MatrixError, sampler::DistanceBounds};

/// Dense, symmetric adjacency matrix of edge weights.
///
/// # Examples
/// ```
/// use vendgraph_core::WeightMatrix;
///
/// let mut matrix = WeightMatrix::zeroed(3).expect("matrix must fit");
/// matrix.set_symmetric(0, 2, 42.5).expect("edge must be accepted");
/// assert_eq!(matrix.weight(2, 0), Some(42.5));
/// assert_eq!(matrix.edge_count(), 1);
/// assert!(matrix.is_isolated(1));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct WeightMatrix {
    node_count: usize,
    weights: Vec<f64>,
}

impl WeightMatrix {
    /// Allocates a `node_count` × `node_count` matrix with no edges.
    ///
    /// # Errors
    /// Returns [`MatrixError::TooLarge`] when `node_count * node_count`
    /// overflows `usize`.
    pub fn zeroed(node_count: usize) -> Result<Self, MatrixError> {
        let len = node_count
            .checked_mul(node_count)
            .ok_or(MatrixError::TooLarge { node_count })?;
        Ok(Self {
            node_count,
            weights: vec![0.0; len],
        })
    }

    /// Number of nodes (rows and columns) in the matrix.
    #[must_use]
    pub const fn node_count(&self) -> usize {
        self.node_count
    }

    /// Returns the weight between `row` and `column`, or `None` when either
    /// index is out of bounds.
    #[must_use]
    pub fn weight(&self, row: usize, column: usize) -> Option<f64> {
        self.offset(row, column)
            .and_then(|offset| self.weights.get(offset).copied())
    }

    /// Returns the weights incident to `node`, indexed by the other endpoint.
    ///
    /// # Examples
    /// ```
    /// use vendgraph_core::WeightMatrix;
    ///
    /// let mut matrix = WeightMatrix::zeroed(2).expect("matrix must fit");
    /// matrix.set_symmetric(0, 1, 31.0).expect("edge must be accepted");
    /// assert_eq!(matrix.row(1), Some(&[31.0, 0.0][..]));
    /// assert_eq!(matrix.row(2), None);
    /// ```
    #[must_use]
    pub fn row(&self, node: usize) -> Option<&[f64]> {
        if node >= self.node_count {
            return None;
        }
        let start = node * self.node_count;
        self.weights.get(start..start + self.node_count)
    }

    /// Iterates over every row in node order.
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> + '_ {
        // `max(1)` keeps `chunks_exact` valid for the empty matrix.
        self.weights.chunks_exact(self.node_count.max(1))
    }

    /// Returns `true` when `row` and `column` are joined by a positive weight.
    #[must_use]
    pub fn has_edge(&self, row: usize, column: usize) -> bool {
        self.weight(row, column).is_some_and(|weight| weight > 0.0)
    }

    /// Number of edges incident to `node`. Out-of-bounds nodes have degree 0.
    #[must_use]
    pub fn degree(&self, node: usize) -> usize {
        self.row(node)
            .map_or(0, |row| row.iter().filter(|weight| **weight > 0.0).count())
    }

    /// Returns `true` when no entry in the node's row is strictly positive.
    #[must_use]
    pub fn is_isolated(&self, node: usize) -> bool {
        self.degree(node) == 0
    }

    /// Number of undirected edges in the graph.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges().count()
    }

    /// Iterates over undirected edges as `(i, j, weight)` with `i < j`, in
    /// row-major order.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        self.rows().enumerate().flat_map(|(row, weights)| {
            weights
                .iter()
                .enumerate()
                .skip(row + 1)
                .filter(|(_, weight)| **weight > 0.0)
                .map(move |(column, weight)| (row, column, *weight))
        })
    }

    /// Assigns `weight` to both `(row, column)` and `(column, row)`.
    ///
    /// # Errors
    /// Returns [`MatrixError::OutOfBounds`] when either index is outside the
    /// matrix, [`MatrixError::SelfLoop`] when `row == column`, and
    /// [`MatrixError::InvalidWeight`] when `weight` is negative or not finite.
    pub fn set_symmetric(
        &mut self,
        row: usize,
        column: usize,
        weight: f64,
    ) -> Result<(), MatrixError> {
        if !weight.is_finite() || weight < 0.0 {
            return Err(MatrixError::InvalidWeight { weight });
        }
        if row == column {
            return Err(MatrixError::SelfLoop { node: row });
        }
        let forward = self.checked_offset(row, column)?;
        let backward = self.checked_offset(column, row)?;
        for offset in [forward, backward] {
            let slot = self
                .weights
                .get_mut(offset)
                .ok_or(MatrixError::OutOfBounds {
                    node: row.max(column),
                    node_count: self.node_count,
                })?;
            *slot = weight;
        }
        Ok(())
    }

    /// Verifies the structural invariants of a generated graph.
    ///
    /// Checks, in order: zero diagonal, symmetry, every positive weight lying
    /// in `[min_distance, max_distance)`, and no isolated node when the graph
    /// has at least two nodes.
    ///
    /// # Errors
    /// Returns the first [`InvariantViolation`] encountered.
    ///
    /// # Examples
    /// ```
    /// use vendgraph_core::{DistanceBounds, InvariantViolation, WeightMatrix};
    ///
    /// let bounds = DistanceBounds::default();
    /// let mut matrix = WeightMatrix::zeroed(2).expect("matrix must fit");
    /// assert_eq!(
    ///     matrix.check_invariants(&bounds),
    ///     Err(InvariantViolation::IsolatedNode { node: 0 }),
    /// );
    /// matrix.set_symmetric(0, 1, 75.25).expect("edge must be accepted");
    /// assert_eq!(matrix.check_invariants(&bounds), Ok(()));
    /// ```
    pub fn check_invariants(&self, bounds: &DistanceBounds) -> Result<(), InvariantViolation> {
        for (row, weights) in self.rows().enumerate() {
            for (column, &weight) in weights.iter().enumerate() {
                if row == column {
                    if weight != 0.0 {
                        return Err(InvariantViolation::SelfLoop { node: row, weight });
                    }
                    continue;
                }
                if self.weight(column, row) != Some(weight) {
                    return Err(InvariantViolation::Asymmetric { row, column });
                }
                if weight > 0.0 && !bounds.contains(weight) {
                    return Err(InvariantViolation::WeightOutOfRange {
                        row,
                        column,
                        weight,
                    });
                }
            }
        }

        if self.node_count >= 2 {
            if let Some(node) = (0..self.node_count).find(|&node| self.is_isolated(node)) {
                return Err(InvariantViolation::IsolatedNode { node });
            }
        }
        Ok(())
    }

    fn offset(&self, row: usize, column: usize) -> Option<usize> {
        (row < self.node_count && column < self.node_count).then(|| row * self.node_count + column)
    }

    fn checked_offset(&self, row: usize, column: usize) -> Result<usize, MatrixError> {
        self.offset(row, column).ok_or(MatrixError::OutOfBounds {
            node: row.max(column),
            node_count: self.node_count,
        })
    }
}

/// Structural property of a [`WeightMatrix`] that failed verification.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum InvariantViolation {
    /// A diagonal entry was non-zero.
    #[error("node {node} has a self-loop of weight {weight}")]
    SelfLoop {
        /// Node whose diagonal entry is set.
        node: usize,
        /// The diagonal weight.
        weight: f64,
    },
    /// `graph[row][column]` differs from `graph[column][row]`.
    #[error("weights between {row} and {column} are not symmetric")]
    Asymmetric {
        /// Row of the mismatched entry.
        row: usize,
        /// Column of the mismatched entry.
        column: usize,
    },
    /// A positive weight fell outside the configured distance bounds.
    #[error("weight {weight} between {row} and {column} is outside the distance bounds")]
    WeightOutOfRange {
        /// Row of the offending entry.
        row: usize,
        /// Column of the offending entry.
        column: usize,
        /// The offending weight.
        weight: f64,
    },
    /// A node has no incident edge.
    #[error("node {node} has no incident edge")]
    IsolatedNode {
        /// The isolated node.
        node: usize,
    },
}
