//! Error types for rref_core.

use thiserror::Error;

/// Errors raised while building a [`crate::Matrix`].
///
/// Reduction itself never fails; every well-formed matrix has an RREF.
/// Positions in messages are 1-based.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MatrixError {
    /// No rows, or rows with no columns
    #[error("matrix must have at least one row and one column")]
    Empty,

    #[error("row {} has {} entries, expected {}", .row + 1, .found, .expected)]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// NaN or infinite entry
    #[error("entry at row {}, column {} is not a finite number", .row + 1, .col + 1)]
    NonFinite { row: usize, col: usize },

    /// Flat data does not match rows * cols
    #[error("expected {expected} entries for the given shape, found {found}")]
    DataLength { expected: usize, found: usize },
}
