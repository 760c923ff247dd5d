//! Gauss-Jordan elimination to reduced row-echelon form.
//!
//! The pivot search takes the first row at or below the current target row
//! whose entry in the candidate column clears `pivot_eps`. It does not look for
//! the largest magnitude (no partial pivoting): adequate for the small,
//! well-posed matrices this is used on, but not maximally stable for
//! ill-conditioned systems.
//!
//! Singular and rank-deficient inputs are not errors. Rows that never receive a
//! pivot end up all-zero below the pivot rows.

use tracing::{debug, trace};

use crate::matrix::Matrix;
use crate::tolerance::TolerancePolicy;

/// Transient cursor of one reduction: the next row to place a pivot in and
/// the next column to search for one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PivotState {
    pub r: usize,
    pub lead: usize,
}

/// Position of a leading 1 in the reduced matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pivot {
    pub row: usize,
    pub col: usize,
}

/// Outcome of a reduction: where the pivots landed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reduction {
    pub pivots: Vec<Pivot>,
}

impl Reduction {
    pub fn rank(&self) -> usize {
        self.pivots.len()
    }

    pub fn pivot_columns(&self) -> Vec<usize> {
        self.pivots.iter().map(|p| p.col).collect()
    }

    /// Columns in `0..cols` without a pivot (free variables for an augmented
    /// system's coefficient part).
    pub fn free_columns(&self, cols: usize) -> Vec<usize> {
        (0..cols)
            .filter(|c| !self.pivots.iter().any(|p| p.col == *c))
            .collect()
    }
}

/// Reduce `matrix` to RREF in place using the default tolerance policy.
///
/// The exclusive borrow is the whole ownership contract: the caller's matrix
/// is overwritten with its RREF. Use [`Matrix::into_rref`] for the consuming
/// form.
pub fn reduce(matrix: &mut Matrix) -> Reduction {
    reduce_with(matrix, &TolerancePolicy::default())
}

pub fn reduce_with(matrix: &mut Matrix, policy: &TolerancePolicy) -> Reduction {
    let (rows, cols) = (matrix.rows, matrix.cols);
    let mut reduction = Reduction::default();
    let mut state = PivotState::default();

    while state.r < rows {
        if state.lead >= cols {
            break;
        }
        let Some(i) = find_pivot_row(matrix, &mut state, policy) else {
            break;
        };

        let r = state.r;
        let lead = state.lead;
        if i != r {
            trace!(from = i, to = r, "swap rows");
            matrix.swap_rows(i, r);
        }

        let pivot = matrix.get(r, lead);
        if !policy.is_pivot_zero(pivot) {
            for v in matrix.row_mut(r) {
                *v /= pivot;
            }
        }

        for k in 0..rows {
            if k == r {
                continue;
            }
            let factor = matrix.get(k, lead);
            if factor != 0.0 {
                matrix.sub_scaled_row(k, r, factor);
            }
        }

        debug!(row = r, col = lead, pivot, "pivot placed");
        reduction.pivots.push(Pivot { row: r, col: lead });

        state.lead += 1;
        state.r += 1;
    }

    reduction
}

/// Find the first row at or below `state.r` with a usable entry in
/// `state.lead`, advancing `lead` past columns that have none.
/// Returns `None` once every remaining column is exhausted.
fn find_pivot_row(
    matrix: &Matrix,
    state: &mut PivotState,
    policy: &TolerancePolicy,
) -> Option<usize> {
    while state.lead < matrix.cols {
        if let Some(i) =
            (state.r..matrix.rows).find(|&i| !policy.is_pivot_zero(matrix.get(i, state.lead)))
        {
            return Some(i);
        }
        trace!(col = state.lead, "no pivot in column");
        state.lead += 1;
    }
    None
}

/// Check the RREF conditions: leading entries are 1, pivot columns are zero
/// elsewhere, pivot columns strictly increase, and zero rows sit at the bottom.
pub fn is_rref(matrix: &Matrix, eps: f64) -> bool {
    let mut last_pivot: Option<usize> = None;
    let mut seen_zero_row = false;

    for r in 0..matrix.rows {
        let lead = matrix.row(r).iter().position(|v| v.abs() > eps);
        let Some(c) = lead else {
            seen_zero_row = true;
            continue;
        };
        if seen_zero_row {
            return false;
        }
        if last_pivot.is_some_and(|p| c <= p) {
            return false;
        }
        if (matrix.get(r, c) - 1.0).abs() > eps {
            return false;
        }
        if (0..matrix.rows).any(|k| k != r && matrix.get(k, c).abs() > eps) {
            return false;
        }
        last_pivot = Some(c);
    }
    true
}

/// Rank of `matrix`, computed by reducing a copy.
pub fn rank(matrix: &Matrix) -> usize {
    let mut work = matrix.clone();
    reduce(&mut work).rank()
}

impl Matrix {
    /// Consume the matrix and return its RREF.
    pub fn into_rref(mut self) -> Matrix {
        reduce(&mut self);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn m(rows: Vec<Vec<f64>>) -> Matrix {
        Matrix::from_rows(rows).unwrap()
    }

    #[test]
    fn three_by_four_system() {
        let mut a = m(vec![
            vec![2.0, 1.0, -1.0, 8.0],
            vec![-3.0, -1.0, 2.0, -11.0],
            vec![-2.0, 1.0, 2.0, -3.0],
        ]);
        let red = reduce(&mut a);
        let expected = m(vec![
            vec![1.0, 0.0, 0.0, 2.0],
            vec![0.0, 1.0, 0.0, 3.0],
            vec![0.0, 0.0, 1.0, -1.0],
        ]);
        assert!(a.approx_eq(&expected, EPS), "got {a}");
        assert_eq!(red.pivot_columns(), vec![0, 1, 2]);
        assert_eq!(red.free_columns(4), vec![3]);
    }

    #[test]
    fn singular_two_by_two() {
        let mut a = m(vec![vec![1.0, 1.0], vec![1.0, 1.0]]);
        let red = reduce(&mut a);
        assert!(a.approx_eq(&m(vec![vec![1.0, 1.0], vec![0.0, 0.0]]), EPS));
        assert_eq!(red.rank(), 1);
    }

    #[test]
    fn zero_matrix_unchanged() {
        let mut a = m(vec![vec![0.0, 0.0], vec![0.0, 0.0]]);
        let red = reduce(&mut a);
        assert_eq!(a.data, vec![0.0; 4]);
        assert_eq!(red.rank(), 0);
        assert_eq!(red.free_columns(2), vec![0, 1]);
    }

    #[test]
    fn skips_empty_leading_column() {
        let mut a = m(vec![vec![0.0, 2.0, 4.0], vec![0.0, 1.0, 3.0]]);
        let red = reduce(&mut a);
        assert!(a.approx_eq(&m(vec![vec![0.0, 1.0, 0.0], vec![0.0, 0.0, 1.0]]), EPS));
        assert_eq!(red.pivot_columns(), vec![1, 2]);
    }

    #[test]
    fn swaps_up_first_usable_row() {
        let mut a = m(vec![vec![0.0, 1.0], vec![0.0, 0.0], vec![3.0, 6.0]]);
        reduce(&mut a);
        let expected = m(vec![vec![1.0, 0.0], vec![0.0, 1.0], vec![0.0, 0.0]]);
        assert!(a.approx_eq(&expected, EPS), "got {a}");
    }

    #[test]
    fn below_tolerance_entries_are_not_pivots() {
        let mut a = m(vec![vec![1e-10, 1.0], vec![0.0, 2.0]]);
        let red = reduce(&mut a);
        assert_eq!(red.pivot_columns(), vec![1]);
    }

    #[test]
    fn more_rows_than_columns() {
        let mut a = m(vec![vec![1.0], vec![2.0], vec![3.0]]);
        let red = reduce(&mut a);
        assert_eq!(red.rank(), 1);
        assert!(a.approx_eq(&m(vec![vec![1.0], vec![0.0], vec![0.0]]), EPS));
    }

    #[test]
    fn single_cell() {
        let a = m(vec![vec![-4.0]]).into_rref();
        assert_eq!(a.data, vec![1.0]);
    }

    #[test]
    fn is_rref_rejects_bad_shapes() {
        assert!(is_rref(&m(vec![vec![1.0, 2.0], vec![0.0, 0.0]]), EPS));
        assert!(!is_rref(&m(vec![vec![0.0, 0.0], vec![1.0, 2.0]]), EPS));
        assert!(!is_rref(&m(vec![vec![2.0, 0.0], vec![0.0, 1.0]]), EPS));
        assert!(!is_rref(&m(vec![vec![1.0, 3.0], vec![0.0, 1.0]]), EPS));
        assert!(!is_rref(&m(vec![vec![0.0, 1.0], vec![1.0, 0.0]]), EPS));
    }

    #[test]
    fn rank_leaves_input_untouched() {
        let a = m(vec![vec![1.0, 2.0], vec![2.0, 4.0]]);
        let before = a.clone();
        assert_eq!(rank(&a), 1);
        assert_eq!(a, before);
    }
}
