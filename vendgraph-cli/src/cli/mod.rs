//! Command-line interface orchestration for vendgraph.
//!
//! Parses the node count, connection probability, and output path, runs the
//! core generator, writes the adjacency file, and renders the matrix for
//! humans.

mod commands;
mod export;
mod render;

pub use commands::{Cli, CliError, ExecutionSummary, default_output_path, run_cli};
pub use export::{export_adjacency, write_adjacency_file};
pub use render::render_matrix;

#[cfg(test)]
mod test_helpers;
