//! Flat-file adjacency export consumed by downstream routing experiments.
//!
//! Line `i` (0-based) lists `j weight` pairs for node `i`, separated by
//! spaces. Only weights strictly above the minimum distance are written, so
//! an edge sampled exactly at the floor is omitted from the file.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use tracing::{Span, field, instrument};
use vendgraph_core::{DistanceBounds, WeightMatrix};

use super::commands::CliError;

/// Writes the adjacency listing of `matrix` to `writer`.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use vendgraph_cli::cli::export_adjacency;
/// # use vendgraph_core::{DistanceBounds, WeightMatrix};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let mut matrix = WeightMatrix::zeroed(6)?;
/// matrix.set_symmetric(2, 5, 123.45)?;
/// let mut buffer = Vec::new();
/// export_adjacency(&matrix, &DistanceBounds::default(), &mut buffer)?;
/// let text = String::from_utf8(buffer)?;
/// assert_eq!(text.lines().nth(2), Some("5 123.45"));
/// assert_eq!(text.lines().nth(5), Some("2 123.45"));
/// # Ok(())
/// # }
/// ```
pub fn export_adjacency(
    matrix: &WeightMatrix,
    bounds: &DistanceBounds,
    mut writer: impl Write,
) -> io::Result<()> {
    let floor = f64::from(bounds.min_distance());
    let precision = bounds.precision() as usize;

    for row in matrix.rows() {
        let line = row
            .iter()
            .enumerate()
            .filter(|(_, weight)| **weight > floor)
            .map(|(column, weight)| format!("{column} {weight:.precision$}"))
            .collect::<Vec<_>>()
            .join(" ");
        writeln!(writer, "{line}")?;
    }
    writer.flush()
}

/// Creates or truncates `path` and writes the adjacency listing into it.
///
/// # Errors
/// Returns [`CliError::Io`] when the file cannot be created or written.
#[instrument(name = "cli.export", err, skip(matrix, bounds, path), fields(path = field::Empty))]
pub fn write_adjacency_file(
    matrix: &WeightMatrix,
    bounds: &DistanceBounds,
    path: &Path,
) -> Result<(), CliError> {
    Span::current().record("path", field::display(path.display()));
    let to_cli_error = |source| CliError::Io {
        path: path.to_path_buf(),
        source,
    };
    let file = File::create(path).map_err(to_cli_error)?;
    export_adjacency(matrix, bounds, BufWriter::new(file)).map_err(to_cli_error)
}
