//! Numeric core of the RREF solver.
//!
//! Two independent pieces live here:
//! - [`reduce`]: in-place Gauss-Jordan elimination to reduced row-echelon form.
//! - [`rational`]: continued-fraction approximation of a cell value for display.
//!
//! [`display`] wires them together the way a front end uses them.

pub mod display;
pub mod error;
pub mod matrix;
pub mod rational;
pub mod reduce;
pub mod tolerance;

pub use display::{display_values, display_values_with, solve, solve_with, Solution, SolutionSummary};
pub use error::MatrixError;
pub use matrix::Matrix;
pub use rational::{
    approximate, approximate_with, continued_fraction, decimal_string, Convergent, DisplayValue,
    Fraction, StopReason,
};
pub use reduce::{is_rref, rank, reduce, reduce_with, Pivot, PivotState, Reduction};
pub use tolerance::TolerancePolicy;
