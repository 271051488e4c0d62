//! Command implementation and argument parsing for the vendgraph CLI.

use std::io;
use std::path::PathBuf;

use clap::Parser;
use thiserror::Error;
use tracing::{Span, field, info, instrument};
use vendgraph_core::{
    DEFAULT_CONNECTION_PROBABILITY, DEFAULT_MAX_DISTANCE, DEFAULT_MIN_DISTANCE,
    DEFAULT_NODE_COUNT, DEFAULT_PRECISION, DistanceBounds, GeneratedGraph, GeneratorError,
    GraphGeneratorBuilder,
};

use super::export::write_adjacency_file;

/// Command-line options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "vendgraph",
    about = "Generate a random distance graph between vending machines."
)]
pub struct Cli {
    /// Number of vending machines in the graph.
    #[arg(default_value_t = DEFAULT_NODE_COUNT)]
    pub node_count: usize,

    /// Percentage chance (0-100) that two machines are directly connected.
    #[arg(default_value_t = DEFAULT_CONNECTION_PROBABILITY, allow_negative_numbers = true)]
    pub connection_probability: i64,

    /// Adjacency file to write (defaults to `vending_graph_<nodes>_<probability>.txt`).
    pub output_path: Option<PathBuf>,

    /// Seed for the random source; a clock-derived seed is used when omitted.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Shortest generated distance in meters (inclusive).
    #[arg(long = "min-distance", default_value_t = DEFAULT_MIN_DISTANCE)]
    pub min_distance: u32,

    /// Longest generated distance in meters (exclusive).
    #[arg(long = "max-distance", default_value_t = DEFAULT_MAX_DISTANCE)]
    pub max_distance: u32,

    /// Number of decimal digits on generated distances.
    #[arg(long, default_value_t = DEFAULT_PRECISION)]
    pub precision: u32,

    /// Skip printing the distance matrix to stdout.
    #[arg(long = "no-display")]
    pub no_display: bool,
}

/// Errors surfaced while executing the CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Writing the adjacency file failed.
    #[error("failed to write `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// Configuration or generation failed in the core library.
    #[error(transparent)]
    Core(#[from] GeneratorError),
}

/// Summarises the outcome of a CLI run.
#[derive(Debug, Clone)]
pub struct ExecutionSummary {
    /// The generated graph.
    pub graph: GeneratedGraph,
    /// Distance bounds the graph was generated with.
    pub bounds: DistanceBounds,
    /// Seed that reproduces this graph.
    pub seed: u64,
    /// Location of the adjacency file.
    pub output_path: PathBuf,
}

/// Generates a graph as described by `cli` and writes its adjacency file.
///
/// # Errors
/// Returns [`CliError::Core`] when the configuration is rejected and
/// [`CliError::Io`] when the adjacency file cannot be written.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use tempfile::TempDir;
/// # use vendgraph_cli::cli::{Cli, run_cli};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let dir = TempDir::new()?;
/// let output = dir.path().join("graph.txt");
/// let cli = Cli {
///     node_count: 6,
///     connection_probability: 40,
///     output_path: Some(output.clone()),
///     seed: Some(9),
///     min_distance: 30,
///     max_distance: 500,
///     precision: 2,
///     no_display: true,
/// };
/// let summary = run_cli(cli)?;
/// assert_eq!(summary.graph.matrix().node_count(), 6);
/// assert_eq!(std::fs::read_to_string(&output)?.lines().count(), 6);
/// # Ok(())
/// # }
/// ```
#[instrument(
    name = "cli.run",
    err,
    skip(cli),
    fields(node_count = cli.node_count, probability = cli.connection_probability, seed = field::Empty),
)]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    let bounds = DistanceBounds::new(cli.min_distance, cli.max_distance, cli.precision)?;
    let mut builder = GraphGeneratorBuilder::new()
        .with_node_count(cli.node_count)
        .with_connection_probability(cli.connection_probability)
        .with_distance_bounds(bounds);
    if let Some(seed) = cli.seed {
        builder = builder.with_seed(seed);
    }
    let mut generator = builder.build()?;
    let seed = generator.seed();
    Span::current().record("seed", seed);

    let graph = generator.generate()?;
    let output_path = cli.output_path.unwrap_or_else(|| {
        default_output_path(cli.node_count, cli.connection_probability)
    });
    write_adjacency_file(graph.matrix(), &bounds, &output_path)?;

    info!(
        path = %output_path.display(),
        edges = graph.matrix().edge_count(),
        "wrote adjacency file"
    );
    Ok(ExecutionSummary {
        graph,
        bounds,
        seed,
        output_path,
    })
}

/// File name used when no output path is given.
///
/// # Examples
/// ```
/// use std::path::Path;
/// use vendgraph_cli::cli::default_output_path;
///
/// assert_eq!(default_output_path(10, 30), Path::new("vending_graph_10_30.txt"));
/// ```
#[must_use]
pub fn default_output_path(node_count: usize, probability: i64) -> PathBuf {
    PathBuf::from(format!("vending_graph_{node_count}_{probability}.txt"))
}
