use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("invalid number: '{0}'")]
    InvalidNumber(String),
    /// Missing numerator or denominator, or more than one '/'
    #[error("invalid fraction format: '{0}'")]
    InvalidFraction(String),
    #[error("division by zero in '{0}'")]
    DivisionByZero(String),
    /// Positions are reported 1-based; the cell's own error is the source
    #[error("row {}, column {}", .row + 1, .col + 1)]
    Cell {
        row: usize,
        col: usize,
        #[source]
        source: Box<ParseError>,
    },
    #[error("malformed matrix: {0}")]
    Syntax(String),
    #[error("no matrix entries given")]
    Empty,
}
