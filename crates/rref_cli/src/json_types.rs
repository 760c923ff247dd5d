//! JSON output types for `--format json`.

use rref_core::{DisplayValue, SolutionSummary};
use serde::Serialize;

#[derive(Serialize, Debug)]
pub struct SolveJsonOutput<'a> {
    pub ok: bool,
    #[serde(flatten)]
    pub solution: SolutionSummary<'a>,
    /// What the text renderer shows per cell, after width fitting
    pub labels: Vec<Vec<String>>,
}

#[derive(Serialize, Debug)]
pub struct ApproxJsonOutput {
    pub ok: bool,
    pub input: String,
    pub value: DisplayValue,
    pub label: String,
}

#[derive(Serialize, Debug)]
pub struct ErrorJsonOutput {
    pub ok: bool,
    pub error: String,
}

impl ErrorJsonOutput {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            ok: false,
            error: error.into(),
        }
    }
}
