//! Text rendering of reduced matrices.
//!
//! This is where a fraction is traded for its decimal fallback: a cell has a
//! fixed character budget, and a fraction whose rendered form does not fit is
//! shown as the three-place decimal instead.
//!
//! A fraction is measured as drawn in a cell: numerator stacked over
//! denominator, so its width is the wider of the two plus a sign column.

use rref_core::DisplayValue;

fn digits(n: i64) -> usize {
    n.unsigned_abs().to_string().len()
}

/// Rendered width of a value, in characters.
pub fn rendered_width(value: &DisplayValue) -> usize {
    match value {
        DisplayValue::Fraction(f) => {
            digits(f.numerator).max(digits(f.denominator)) + usize::from(f.is_negative())
        }
        other => other.to_string().chars().count(),
    }
}

/// Choose the form of `value` that fits in `cell_width` characters.
/// Integers and decimals are returned as-is even when wider.
pub fn fit(value: DisplayValue, cell_width: usize) -> DisplayValue {
    if matches!(value, DisplayValue::Fraction(_)) && rendered_width(&value) > cell_width {
        value.into_decimal()
    } else {
        value
    }
}

/// Labels for every cell after width fitting.
pub fn labels(cells: &[Vec<DisplayValue>], cell_width: usize) -> Vec<Vec<String>> {
    cells
        .iter()
        .map(|row| {
            row.iter()
                .map(|v| fit(v.clone(), cell_width).to_string())
                .collect()
        })
        .collect()
}

/// Render labels as a bracketed grid with right-aligned columns.
pub fn render_grid(labels: &[Vec<String>]) -> String {
    let cols = labels.first().map(Vec::len).unwrap_or(0);
    let widths: Vec<usize> = (0..cols)
        .map(|c| {
            labels
                .iter()
                .map(|row| row[c].chars().count())
                .max()
                .unwrap_or(0)
        })
        .collect();

    labels
        .iter()
        .map(|row| {
            let cells: Vec<String> = row
                .iter()
                .zip(&widths)
                .map(|(label, &w)| format!("{label:>w$}"))
                .collect();
            format!("[ {} ]", cells.join("  "))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Human-facing summary line, with 1-based pivot columns.
pub fn pivot_summary(rank: usize, pivot_columns: &[usize]) -> String {
    if pivot_columns.is_empty() {
        return format!("rank {rank}, no pivot columns");
    }
    let cols: Vec<String> = pivot_columns.iter().map(|c| (c + 1).to_string()).collect();
    format!("rank {rank}, pivot columns: {}", cols.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rref_core::approximate;

    #[test]
    fn narrow_fraction_is_kept() {
        assert_eq!(fit(approximate(-0.75), 8).to_string(), "-3/4");
    }

    #[test]
    fn wide_fraction_falls_back_to_decimal() {
        let v = approximate(1234.0 / 9871.0);
        assert_eq!(v.to_string(), "1234/9871");
        assert_eq!(fit(v, 3).to_string(), "0.125");
    }

    #[test]
    fn fraction_measured_stacked_not_inline() {
        let v = approximate(1234.0 / 9871.0);
        assert_eq!(rendered_width(&v), 4);
        assert!(matches!(fit(v, 8), DisplayValue::Fraction(_)));

        let neg = approximate(-1234.0 / 9871.0);
        assert_eq!(rendered_width(&neg), 5);
        assert_eq!(fit(neg.clone(), 5).to_string(), "-1234/9871");
        assert_eq!(fit(neg, 4).to_string(), "-0.125");
    }

    #[test]
    fn width_of_integers_and_decimals_is_text_length() {
        assert_eq!(rendered_width(&approximate(-42.0)), 3);
        assert_eq!(rendered_width(&approximate(0.5).into_decimal()), 3);
    }

    #[test]
    fn integers_are_never_demoted() {
        assert_eq!(fit(approximate(123456789.0), 4).to_string(), "123456789");
    }

    #[test]
    fn grid_aligns_columns() {
        let cells = vec![
            vec![approximate(1.0), approximate(0.0), approximate(-0.5)],
            vec![approximate(0.0), approximate(1.0), approximate(12.0)],
        ];
        let grid = render_grid(&labels(&cells, 8));
        assert_eq!(grid, "[ 1  0  -1/2 ]\n[ 0  1    12 ]");
    }

    #[test]
    fn pivot_summary_is_one_based() {
        assert_eq!(pivot_summary(2, &[0, 2]), "rank 2, pivot columns: 1, 3");
        assert_eq!(pivot_summary(0, &[]), "rank 0, no pivot columns");
    }
}
