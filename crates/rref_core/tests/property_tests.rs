use num_rational::Rational64;
use proptest::prelude::*;
use rref_core::{approximate, is_rref, rank, reduce, DisplayValue, Matrix};

mod strategies;

const EPS: f64 = 1e-9;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn reduced_matrix_is_rref(m in strategies::arb_int_matrix(6)) {
        let mut work = m.clone();
        reduce(&mut work);
        prop_assert!(is_rref(&work, 1e-6), "not RREF: {} -> {}", m, work);
    }

    #[test]
    fn sparse_reduced_matrix_is_rref(m in strategies::arb_sparse_matrix(6)) {
        let mut work = m.clone();
        reduce(&mut work);
        prop_assert!(is_rref(&work, 1e-6), "not RREF: {} -> {}", m, work);
    }

    #[test]
    fn reduction_is_idempotent(m in strategies::arb_int_matrix(5)) {
        let once = m.into_rref();
        let twice = once.clone().into_rref();
        prop_assert!(once.approx_eq(&twice, EPS), "{} vs {}", once, twice);
    }

    #[test]
    fn reduction_keeps_shape(m in strategies::arb_int_matrix(6)) {
        let (rows, cols) = (m.rows, m.cols);
        let out = m.into_rref();
        prop_assert_eq!((out.rows, out.cols), (rows, cols));
    }

    #[test]
    fn nonzero_rows_match_pivot_count(m in strategies::arb_int_matrix(6)) {
        let mut work = m.clone();
        let red = reduce(&mut work);
        let nonzero = (0..work.rows).filter(|&r| !work.is_zero_row(r, 1e-6)).count();
        prop_assert_eq!(nonzero, red.rank());
    }

    #[test]
    fn duplicated_row_does_not_change_rank(m in strategies::arb_int_matrix(4)) {
        let mut rows = m.to_rows();
        rows.push(rows[0].clone());
        let extended = Matrix::from_rows(rows).unwrap();
        prop_assert_eq!(rank(&extended), rank(&m));
    }

    #[test]
    fn small_fractions_round_trip(p in -50i64..=50, q in 1i64..=50, flip in any::<bool>()) {
        let (p, q) = if flip { (-p, -q) } else { (p, q) };
        let value = p as f64 / q as f64;
        let expected = Rational64::new(p, q);
        match approximate(value) {
            DisplayValue::Integer { value: n } => {
                prop_assert!(expected.is_integer(), "{}/{} shown as integer {}", p, q, n);
                prop_assert_eq!(Rational64::from_integer(n), expected);
            }
            DisplayValue::Fraction(f) => {
                prop_assert!(f.denominator > 0);
                prop_assert_eq!(f.to_ratio(), expected);
                prop_assert_eq!((f.numerator, f.denominator), (*expected.numer(), *expected.denom()));
            }
            other => prop_assert!(false, "unexpected {:?} for {}/{}", other, p, q),
        }
    }

    #[test]
    fn tiny_values_display_as_zero(v in -9.9e-9f64..9.9e-9) {
        prop_assert!(approximate(v).is_zero());
    }
}
