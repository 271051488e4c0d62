//! CLI entry point for the vendgraph generator.
//!
//! Parses command-line arguments with clap, generates the graph, writes the
//! adjacency file, prints the distance matrix to stdout, and maps errors to
//! a failing exit code. Logging is initialised first so every later step can
//! emit structured diagnostics via `tracing`.

use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use tracing::{error, field};
use vendgraph_cli::{
    cli::{Cli, CliError, render_matrix, run_cli},
    logging::{self, LoggingError},
};
use vendgraph_core::{GeneratorErrorCode, MatrixErrorCode};

const EXIT_SUCCESS: u8 = 0;
const EXIT_FAILURE: u8 = 1;

/// Parse CLI arguments and run them against stdout.
fn try_main() -> Result<()> {
    let stdout = io::stdout();
    execute(Cli::parse(), BufWriter::new(stdout.lock()))
}

/// Run the generator and print the matrix to `writer` unless `--no-display`
/// was given.
fn execute(cli: Cli, mut writer: impl Write) -> Result<()> {
    let display = !cli.no_display;
    let summary = run_cli(cli).context("failed to generate graph")?;
    if display {
        render_matrix(summary.graph.matrix(), &mut writer).context("failed to render matrix")?;
        writer.flush().context("failed to flush output")?;
    }
    Ok(())
}

/// Stable codes carried by a failed run, if it failed in the core library.
fn error_codes(err: &anyhow::Error) -> (Option<GeneratorErrorCode>, Option<MatrixErrorCode>) {
    err.downcast_ref::<CliError>()
        .and_then(|cli_error| match cli_error {
            CliError::Core(core) => Some((Some(core.code()), core.matrix_code())),
            CliError::Io { .. } => None,
        })
        .unwrap_or((None, None))
}

/// Logs a failed run and maps the outcome to a process exit status.
fn exit_status(outcome: &Result<()>) -> u8 {
    let Err(err) = outcome else {
        return EXIT_SUCCESS;
    };
    let (code, matrix_code) = error_codes(err);
    let code_field = code.map(|code| field::display(code.as_str()));
    let matrix_code_field = matrix_code.map(|code| field::display(code.as_str()));

    error!(
        error = %format_args!("{err:#}"),
        code = code_field,
        matrix_code = matrix_code_field,
        "command execution failed"
    );
    EXIT_FAILURE
}

fn main() -> ExitCode {
    if let Err(err) = logging::init_logging() {
        report_logging_init_error(&err);
        return ExitCode::FAILURE;
    }

    ExitCode::from(exit_status(&try_main()))
}

#[expect(
    clippy::print_stderr,
    reason = "Emit one-off diagnostic before tracing is initialized"
)]
fn report_logging_init_error(err: &LoggingError) {
    eprintln!("failed to initialize logging: {err}");
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::path::PathBuf;

    use rstest::rstest;
    use tempfile::TempDir;
    use tracing::Level;
    use vendgraph_test_support::tracing::record_events;

    fn cli(node_count: usize, probability: i64, output_path: PathBuf) -> Cli {
        Cli {
            node_count,
            connection_probability: probability,
            output_path: Some(output_path),
            seed: Some(11),
            min_distance: 30,
            max_distance: 500,
            precision: 2,
            no_display: false,
        }
    }

    #[rstest]
    fn successful_run_exits_zero_and_prints_the_matrix() {
        let dir = TempDir::new().expect("temp dir");
        let mut stdout = Vec::new();
        let outcome = execute(cli(3, 50, dir.path().join("graph.txt")), &mut stdout);

        assert_eq!(exit_status(&outcome), EXIT_SUCCESS);
        let text = String::from_utf8(stdout).expect("utf-8 output");
        assert_eq!(text.lines().count(), 5);
    }

    #[rstest]
    fn no_display_leaves_stdout_empty() {
        let dir = TempDir::new().expect("temp dir");
        let mut options = cli(3, 50, dir.path().join("graph.txt"));
        options.no_display = true;
        let mut stdout = Vec::new();
        let outcome = execute(options, &mut stdout);

        assert_eq!(exit_status(&outcome), EXIT_SUCCESS);
        assert!(stdout.is_empty());
    }

    #[rstest]
    #[case::single_node(1, 30, "VENDGRAPH_INVALID_NODE_COUNT")]
    #[case::negative_probability(5, -4, "VENDGRAPH_INVALID_CONNECTION_PROBABILITY")]
    #[case::overflowing_node_count(1 << (usize::BITS / 2), 30, "VENDGRAPH_INVALID_NODE_COUNT")]
    fn configuration_errors_exit_one_with_their_code(
        #[case] node_count: usize,
        #[case] probability: i64,
        #[case] expected: &str,
    ) {
        let dir = TempDir::new().expect("temp dir");
        let outcome = execute(
            cli(node_count, probability, dir.path().join("graph.txt")),
            io::sink(),
        );
        let err = outcome.as_ref().expect_err("configuration must be rejected");
        assert_eq!(
            error_codes(err).0.map(GeneratorErrorCode::as_str),
            Some(expected)
        );

        let (status, layer) = record_events(|| exit_status(&outcome));
        assert_eq!(status, EXIT_FAILURE);
        let events = layer.events_with_message("command execution failed");
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].level, Level::ERROR);
        assert_eq!(events[0].field("code"), Some(expected));
    }

    #[rstest]
    fn io_errors_exit_one_without_a_core_code() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("missing").join("graph.txt");
        let outcome = execute(cli(4, 30, path), io::sink());
        let err = outcome.as_ref().expect_err("write must fail");

        assert_eq!(error_codes(err), (None, None));
        assert_eq!(exit_status(&outcome), EXIT_FAILURE);
    }
}
