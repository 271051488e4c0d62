//! Vendgraph core library.
//!
//! Generates synthetic, symmetric weight matrices describing distances
//! between vending machines. Edges are sampled at random according to a
//! connection probability and a repair pass guarantees every machine has at
//! least one edge.

mod builder;
mod error;
mod generator;
mod matrix;
mod repair;
mod sampler;

pub use crate::{
    builder::{DEFAULT_CONNECTION_PROBABILITY, DEFAULT_NODE_COUNT, GraphGeneratorBuilder},
    error::{GeneratorError, GeneratorErrorCode, MatrixError, MatrixErrorCode, Result},
    generator::{ConnectionProbability, GeneratedGraph, GraphGenerator},
    matrix::{InvariantViolation, WeightMatrix},
    repair::{ConnectivityRepair, RepairReport, RepairedEdge},
    sampler::{
        DEFAULT_MAX_DISTANCE, DEFAULT_MIN_DISTANCE, DEFAULT_PRECISION, DistanceBounds,
        DistanceSampler, MAX_PRECISION,
    },
};
