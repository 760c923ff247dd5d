//! Reduce-then-approximate pipeline used by front ends.

use serde::Serialize;
use tracing::debug;

use crate::matrix::Matrix;
use crate::rational::{approximate_with, DisplayValue};
use crate::reduce::{reduce_with, Reduction};
use crate::tolerance::TolerancePolicy;

/// A reduced matrix together with the display form of every cell.
#[derive(Debug, Clone)]
pub struct Solution {
    pub rref: Matrix,
    pub reduction: Reduction,
    /// Row-major, same shape as `rref`
    pub cells: Vec<Vec<DisplayValue>>,
}

impl Solution {
    pub fn rank(&self) -> usize {
        self.reduction.rank()
    }
}

/// Approximate every cell of `matrix` independently.
pub fn display_values(matrix: &Matrix) -> Vec<Vec<DisplayValue>> {
    display_values_with(matrix, &TolerancePolicy::default())
}

pub fn display_values_with(matrix: &Matrix, policy: &TolerancePolicy) -> Vec<Vec<DisplayValue>> {
    (0..matrix.rows)
        .map(|r| {
            matrix
                .row(r)
                .iter()
                .map(|&v| approximate_with(v, policy))
                .collect()
        })
        .collect()
}

/// Reduce `matrix`, flush elimination residue, and approximate each cell.
pub fn solve(matrix: Matrix) -> Solution {
    solve_with(matrix, &TolerancePolicy::default())
}

pub fn solve_with(mut matrix: Matrix, policy: &TolerancePolicy) -> Solution {
    let reduction = reduce_with(&mut matrix, policy);
    matrix.flush_zeros(policy.pivot_eps);
    debug!(
        rows = matrix.rows,
        cols = matrix.cols,
        rank = reduction.rank(),
        "matrix reduced"
    );
    let cells = display_values_with(&matrix, policy);
    Solution {
        rref: matrix,
        reduction,
        cells,
    }
}

/// Serializable summary of a [`Solution`].
#[derive(Debug, Clone, Serialize)]
pub struct SolutionSummary<'a> {
    pub rows: usize,
    pub cols: usize,
    pub rank: usize,
    /// 0-based pivot columns
    #[serde(rename = "pivots")]
    pub pivot_columns: Vec<usize>,
    pub cells: &'a [Vec<DisplayValue>],
}

impl Solution {
    pub fn summary(&self) -> SolutionSummary<'_> {
        SolutionSummary {
            rows: self.rref.rows,
            cols: self.rref.cols,
            rank: self.rank(),
            pivot_columns: self.reduction.pivot_columns(),
            cells: &self.cells,
        }
    }
}
