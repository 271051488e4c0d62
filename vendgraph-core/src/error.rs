//! Error types for the vendgraph core library.
//!
//! Defines error enums exposed by the public API and a convenient result alias.

use std::fmt;

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// An error produced by [`crate::WeightMatrix`] mutations.
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum MatrixError {
    /// A node index was outside the matrix.
    #[error("node {node} is out of bounds for a graph of {node_count} nodes")]
    OutOfBounds {
        /// The offending node index.
        node: usize,
        /// Number of nodes in the matrix.
        node_count: usize,
    },
    /// An edge from a node to itself was requested.
    #[error("node {node} cannot be connected to itself")]
    SelfLoop {
        /// The node named on both ends of the edge.
        node: usize,
    },
    /// Edge weights must be finite and non-negative.
    #[error("edge weight {weight} must be finite and non-negative")]
    InvalidWeight {
        /// The rejected weight.
        weight: f64,
    },
    /// The matrix would hold more than `usize::MAX` entries.
    #[error("a matrix of {node_count} nodes does not fit in memory")]
    TooLarge {
        /// Requested number of nodes.
        node_count: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`MatrixError`] variants.
    enum MatrixErrorCode for MatrixError {
        /// A node index was outside the matrix.
        OutOfBounds => OutOfBounds { .. } => "MATRIX_OUT_OF_BOUNDS",
        /// An edge from a node to itself was requested.
        SelfLoop => SelfLoop { .. } => "MATRIX_SELF_LOOP",
        /// Edge weights must be finite and non-negative.
        InvalidWeight => InvalidWeight { .. } => "MATRIX_INVALID_WEIGHT",
        /// The matrix would hold more than `usize::MAX` entries.
        TooLarge => TooLarge { .. } => "MATRIX_TOO_LARGE",
    }
}

/// Error type produced when configuring or running [`crate::GraphGenerator`].
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum GeneratorError {
    /// At least two nodes are needed so every node can receive an edge, and
    /// the square of the count must fit in `usize`.
    #[error("node_count must be at least 2 and its square must fit in usize (got {got})")]
    InvalidNodeCount {
        /// The node count supplied by the caller.
        got: usize,
    },
    /// Connection probability is a percentage.
    #[error("connection_probability must be between 0 and 100 (got {got})")]
    InvalidConnectionProbability {
        /// The probability supplied by the caller.
        got: i64,
    },
    /// Distance bounds must describe a non-empty range above zero.
    #[error("distance bounds must satisfy 0 < min < max (got min={min}, max={max})")]
    InvalidDistanceBounds {
        /// Requested minimum distance.
        min: u32,
        /// Requested maximum distance.
        max: u32,
    },
    /// Too many fractional digits were requested for the distances.
    #[error("precision must be at most {max} decimal digits (got {got})")]
    InvalidPrecision {
        /// Requested number of fractional digits.
        got: u32,
        /// Largest supported number of fractional digits.
        max: u32,
    },
    /// An isolated node has no distinct partner to connect to.
    #[error("cannot repair an isolated node in a graph of {node_count} node(s)")]
    RepairImpossible {
        /// Number of nodes in the matrix under repair.
        node_count: usize,
    },
    /// A matrix mutation failed while generating the graph.
    #[error("weight matrix update failed: {error}")]
    Matrix {
        #[source]
        /// Underlying matrix error.
        error: MatrixError,
    },
}

define_error_codes! {
    /// Stable codes describing [`GeneratorError`] variants.
    enum GeneratorErrorCode for GeneratorError {
        /// At least two nodes are needed so every node can receive an edge.
        InvalidNodeCount => InvalidNodeCount { .. } => "VENDGRAPH_INVALID_NODE_COUNT",
        /// Connection probability is a percentage.
        InvalidConnectionProbability => InvalidConnectionProbability { .. }
            => "VENDGRAPH_INVALID_CONNECTION_PROBABILITY",
        /// Distance bounds must describe a non-empty range above zero.
        InvalidDistanceBounds => InvalidDistanceBounds { .. } => "VENDGRAPH_INVALID_DISTANCE_BOUNDS",
        /// Too many fractional digits were requested for the distances.
        InvalidPrecision => InvalidPrecision { .. } => "VENDGRAPH_INVALID_PRECISION",
        /// An isolated node has no distinct partner to connect to.
        RepairImpossible => RepairImpossible { .. } => "VENDGRAPH_REPAIR_IMPOSSIBLE",
        /// A matrix mutation failed while generating the graph.
        MatrixFailure => Matrix { .. } => "VENDGRAPH_MATRIX_FAILURE",
    }
}

impl GeneratorError {
    /// Retrieve the inner [`MatrixErrorCode`] when the error originated in a
    /// [`crate::WeightMatrix`] mutation.
    pub const fn matrix_code(&self) -> Option<MatrixErrorCode> {
        match self {
            Self::Matrix { error } => Some(error.code()),
            _ => None,
        }
    }

    /// Returns `true` when the error describes rejected user configuration
    /// rather than a failure during generation.
    #[must_use]
    pub const fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::InvalidNodeCount { .. }
                | Self::InvalidConnectionProbability { .. }
                | Self::InvalidDistanceBounds { .. }
                | Self::InvalidPrecision { .. }
        )
    }
}

impl From<MatrixError> for GeneratorError {
    fn from(error: MatrixError) -> Self {
        Self::Matrix { error }
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, GeneratorError>;
