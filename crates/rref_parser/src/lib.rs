//! Text front end of the RREF solver: turns typed cell text into `f64`
//! entries. Parse errors stay here; the numeric core never sees text.

pub mod cell;
pub mod error;
pub mod matrix;

pub use cell::parse_cell;
pub use error::ParseError;
pub use matrix::parse_matrix;
