use nom::{
    character::complete::space0,
    combinator::all_consuming,
    number::complete::double,
    sequence::delimited,
    IResult,
};

use crate::error::ParseError;

fn number(input: &str) -> IResult<&str, f64> {
    all_consuming(delimited(space0, double, space0))(input)
}

fn parse_number(text: &str) -> Result<f64, ParseError> {
    match number(text) {
        Ok((_, v)) if v.is_finite() => Ok(v),
        _ => Err(ParseError::InvalidNumber(text.to_string())),
    }
}

/// Parse one cell.
///
/// Accepts a decimal literal (`-2`, `0.25`, `1e3`) or a single fraction
/// literal `a/b` whose parts are both present and numeric, with `b != 0`.
/// Blank text reads as `0`.
pub fn parse_cell(text: &str) -> Result<f64, ParseError> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(0.0);
    }

    let Some((num, den)) = text.split_once('/') else {
        return parse_number(text);
    };
    if num.trim().is_empty() || den.trim().is_empty() || den.contains('/') {
        return Err(ParseError::InvalidFraction(text.to_string()));
    }
    let num = parse_number(num)?;
    let den = parse_number(den)?;
    if den == 0.0 {
        return Err(ParseError::DivisionByZero(text.to_string()));
    }
    Ok(num / den)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decimals_and_integers() {
        assert_eq!(parse_cell("3"), Ok(3.0));
        assert_eq!(parse_cell(" -2.5 "), Ok(-2.5));
        assert_eq!(parse_cell(".5"), Ok(0.5));
        assert_eq!(parse_cell("1e3"), Ok(1000.0));
    }

    #[test]
    fn blank_is_zero() {
        assert_eq!(parse_cell(""), Ok(0.0));
        assert_eq!(parse_cell("   "), Ok(0.0));
    }

    #[test]
    fn fractions() {
        assert_eq!(parse_cell("1/2"), Ok(0.5));
        assert_eq!(parse_cell("-3/4"), Ok(-0.75));
        assert_eq!(parse_cell("3 / -6"), Ok(-0.5));
        assert_eq!(parse_cell("1.5/3"), Ok(0.5));
    }

    #[test]
    fn malformed_fractions() {
        assert_eq!(
            parse_cell("5/"),
            Err(ParseError::InvalidFraction("5/".into()))
        );
        assert_eq!(
            parse_cell("/5"),
            Err(ParseError::InvalidFraction("/5".into()))
        );
        assert_eq!(
            parse_cell("1/2/3"),
            Err(ParseError::InvalidFraction("1/2/3".into()))
        );
        assert_eq!(
            parse_cell("1/0"),
            Err(ParseError::DivisionByZero("1/0".into()))
        );
        assert_eq!(
            parse_cell("x/2"),
            Err(ParseError::InvalidNumber("x".into()))
        );
    }

    #[test]
    fn rejects_garbage_and_non_finite() {
        assert!(matches!(parse_cell("abc"), Err(ParseError::InvalidNumber(_))));
        assert!(matches!(parse_cell("1.5x"), Err(ParseError::InvalidNumber(_))));
        assert!(matches!(parse_cell("-"), Err(ParseError::InvalidNumber(_))));
        assert!(matches!(parse_cell("inf"), Err(ParseError::InvalidNumber(_))));
        assert!(matches!(parse_cell("NaN"), Err(ParseError::InvalidNumber(_))));
        assert!(matches!(parse_cell("1e999"), Err(ParseError::InvalidNumber(_))));
    }

    mod props {
        use super::super::parse_cell;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn fraction_literal_divides(p in -1000i32..1000, q in 1i32..1000) {
                let text = format!("{p}/{q}");
                prop_assert_eq!(parse_cell(&text), Ok(f64::from(p) / f64::from(q)));
            }

            #[test]
            fn formatted_floats_read_back(v in -1e6f64..1e6) {
                prop_assert_eq!(parse_cell(&v.to_string()), Ok(v));
            }
        }
    }
}
