//! Text output of solved currents.
//!
//! One line per edge in original order, with 1-based node numbers:
//!
//! ```text
//! 1 -- 2: 0.4429581019687026 A
//! ```

use std::io::Write;

use crate::circuit::Solution;
use crate::error::{CircuitError, Result};

/// Write a solution, optionally rounding currents to `precision` decimals.
pub fn write_solution<W: Write>(out: &mut W, solution: &Solution, precision: Option<usize>) -> Result<()> {
    for branch in solution {
        let written = match precision {
            Some(p) => writeln!(out, "{:.*}", p, branch),
            None => writeln!(out, "{}", branch),
        };
        written.map_err(|source| CircuitError::OutputError { source })?;
    }
    out.flush().map_err(|source| CircuitError::OutputError { source })
}

/// Render a solution to a string.
pub fn format_solution(solution: &Solution, precision: Option<usize>) -> String {
    match precision {
        Some(p) => format!("{:.*}", p, solution),
        None => solution.to_string(),
    }
}
