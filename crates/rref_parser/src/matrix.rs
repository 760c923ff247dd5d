//! Whole-matrix text input.
//!
//! Two layouts are accepted:
//! - bracketed: `[[1, 2, 3], [4, 5, 6]]`
//! - plain: rows separated by `;` or newlines, cells by `,` or whitespace,
//!   e.g. `1 2 3; 4 5 6`
//!
//! Blank comma-separated cells read as 0, so `1,,3` is `1 0 3`.

use nom::{
    bytes::complete::take_till,
    character::complete::{char, multispace0},
    combinator::all_consuming,
    multi::separated_list1,
    sequence::delimited,
    IResult,
};
use tracing::trace;

use crate::cell::parse_cell;
use crate::error::ParseError;

fn ws<'a, O>(
    inner: impl FnMut(&'a str) -> IResult<&'a str, O>,
) -> impl FnMut(&'a str) -> IResult<&'a str, O> {
    delimited(multispace0, inner, multispace0)
}

fn cell_text(input: &str) -> IResult<&str, &str> {
    take_till(|c| c == ',' || c == '[' || c == ']')(input)
}

fn bracket_row(input: &str) -> IResult<&str, Vec<&str>> {
    delimited(char('['), separated_list1(char(','), cell_text), char(']'))(input)
}

fn bracket_matrix(input: &str) -> IResult<&str, Vec<Vec<&str>>> {
    all_consuming(ws(delimited(
        char('['),
        separated_list1(char(','), ws(bracket_row)),
        char(']'),
    )))(input)
}

fn split_plain(text: &str) -> Vec<Vec<&str>> {
    text.split(|c| c == ';' || c == '\n')
        .map(str::trim)
        .filter(|row| !row.is_empty())
        .map(|row| {
            if row.contains(',') {
                row.split(',').collect()
            } else {
                row.split_whitespace().collect()
            }
        })
        .collect()
}

/// Parse a matrix from text into rows of entries.
///
/// Row lengths are not checked here; building a `Matrix` from the result
/// reports ragged input.
pub fn parse_matrix(text: &str) -> Result<Vec<Vec<f64>>, ParseError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(ParseError::Empty);
    }

    let cells = if text.starts_with('[') {
        bracket_matrix(text)
            .map(|(_, rows)| rows)
            .map_err(|e| ParseError::Syntax(e.to_string()))?
    } else {
        split_plain(text)
    };
    if cells.is_empty() {
        return Err(ParseError::Empty);
    }
    trace!(rows = cells.len(), "matrix text split");

    cells
        .iter()
        .enumerate()
        .map(|(row, texts)| {
            texts
                .iter()
                .enumerate()
                .map(|(col, t)| {
                    parse_cell(t).map_err(|e| ParseError::Cell {
                        row,
                        col,
                        source: Box::new(e),
                    })
                })
                .collect()
        })
        .collect()
}
