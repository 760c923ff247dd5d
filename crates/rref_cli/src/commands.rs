//! `solve` and `approx` handlers shared by the one-shot CLI and the REPL.

use anyhow::{Context, Result};
use rref_core::{approximate, DisplayValue, Matrix, Solution};

use crate::config::RrefConfig;
use crate::json_types::{ApproxJsonOutput, SolveJsonOutput};
use crate::render;

pub const SUCCESS_MESSAGE: &str = "Matrix transformed to RREF successfully!";

/// Parse, validate and reduce a matrix given as text.
pub fn solve_text(text: &str, cfg: &RrefConfig) -> Result<Solution> {
    let rows = rref_parser::parse_matrix(text).context("invalid input")?;
    let matrix = Matrix::from_rows(rows).context("invalid matrix")?;
    cfg.check_dimensions(matrix.rows, matrix.cols)?;
    tracing::debug!(rows = matrix.rows, cols = matrix.cols, "solving");
    Ok(rref_core::solve(matrix))
}

/// Parse a single cell (decimal or `a/b`) and approximate it for display.
pub fn approx_text(text: &str) -> Result<DisplayValue> {
    let value = rref_parser::parse_cell(text).context("invalid input")?;
    Ok(approximate(value))
}

/// Text form of a solution: the grid, then optionally the pivot summary.
pub fn render_solution(solution: &Solution, cfg: &RrefConfig) -> String {
    let labels = render::labels(&solution.cells, cfg.cell_width);
    let mut out = render::render_grid(&labels);
    if cfg.show_pivots {
        out.push('\n');
        out.push_str(&render::pivot_summary(
            solution.rank(),
            &solution.reduction.pivot_columns(),
        ));
    }
    out
}

pub fn solve_json(solution: &Solution, cfg: &RrefConfig) -> Result<String> {
    let output = SolveJsonOutput {
        ok: true,
        solution: solution.summary(),
        labels: render::labels(&solution.cells, cfg.cell_width),
    };
    Ok(serde_json::to_string_pretty(&output)?)
}

pub fn approx_json(input: &str, value: DisplayValue, cfg: &RrefConfig) -> Result<String> {
    let label = render::fit(value.clone(), cfg.cell_width).to_string();
    let output = ApproxJsonOutput {
        ok: true,
        input: input.to_string(),
        value,
        label,
    };
    Ok(serde_json::to_string_pretty(&output)?)
}
