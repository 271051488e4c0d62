//! Human-readable rendering of the distance matrix.

use std::io::{self, Write};

use vendgraph_core::WeightMatrix;

const CELL_WIDTH: usize = 6;

/// Renders `matrix` to `writer` as a fixed-width table.
///
/// Rows and columns are labelled with 1-based machine numbers. Each cell is a
/// right-aligned fixed-point distance with two decimals, and cells in a row
/// are separated by `", "`.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use vendgraph_cli::cli::render_matrix;
/// # use vendgraph_core::WeightMatrix;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let mut matrix = WeightMatrix::zeroed(2)?;
/// matrix.set_symmetric(0, 1, 42.5)?;
/// let mut buffer = Vec::new();
/// render_matrix(&matrix, &mut buffer)?;
/// let text = String::from_utf8(buffer)?;
/// assert_eq!(text.lines().nth(2), Some("     1 |   0.00,  42.50"));
/// # Ok(())
/// # }
/// ```
pub fn render_matrix(matrix: &WeightMatrix, mut writer: impl Write) -> io::Result<()> {
    let node_count = matrix.node_count();

    write!(writer, "       |")?;
    for label in 1..=node_count {
        write!(writer, "{label:>CELL_WIDTH$}  ")?;
    }
    writeln!(writer)?;

    write!(writer, "-------+")?;
    for _ in 0..node_count {
        write!(writer, "--------")?;
    }
    writeln!(writer)?;

    for (index, row) in matrix.rows().enumerate() {
        write!(writer, "{:>CELL_WIDTH$} | ", index + 1)?;
        let cells = row
            .iter()
            .map(|weight| format!("{weight:>CELL_WIDTH$.2}"))
            .collect::<Vec<_>>()
            .join(", ");
        writeln!(writer, "{cells}")?;
    }
    Ok(())
}
