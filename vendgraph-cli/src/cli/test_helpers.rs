//! Small helpers shared across CLI tests.
//!
//! The CLI unit tests write adjacency files into temporary directories and
//! assert error handling behaviour. These helpers keep the cases concise.

use std::path::PathBuf;

use tempfile::TempDir;

use super::{Cli, CliError, run_cli};

pub(super) fn temp_dir() -> TempDir {
    match TempDir::new() {
        Ok(dir) => dir,
        Err(err) => panic!("failed to create temp dir: {err}"),
    }
}

/// Options for a seeded run writing to `output_path` with default bounds.
pub(super) fn seeded_cli(node_count: usize, probability: i64, output_path: PathBuf) -> Cli {
    Cli {
        node_count,
        connection_probability: probability,
        output_path: Some(output_path),
        seed: Some(4242),
        min_distance: 30,
        max_distance: 500,
        precision: 2,
        no_display: true,
    }
}

pub(super) fn run_cli_expecting_error(cli: Cli, panic_msg: &str) -> CliError {
    match run_cli(cli) {
        Ok(_) => panic!("{panic_msg}"),
        Err(err) => err,
    }
}
