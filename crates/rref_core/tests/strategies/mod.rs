use proptest::prelude::*;
use rref_core::Matrix;

/// Small integer-valued matrices, 1..=max_dim on each side.
pub fn arb_int_matrix(max_dim: usize) -> impl Strategy<Value = Matrix> {
    (1..=max_dim, 1..=max_dim).prop_flat_map(|(rows, cols)| {
        prop::collection::vec(-9i32..=9, rows * cols).prop_map(move |data| {
            Matrix::new(rows, cols, data.into_iter().map(f64::from).collect())
                .expect("strategy yields well-formed matrices")
        })
    })
}

/// Matrices with a good share of zeros, to exercise column skipping.
pub fn arb_sparse_matrix(max_dim: usize) -> impl Strategy<Value = Matrix> {
    let entry = prop_oneof![3 => Just(0i32), 1 => -4i32..=4];
    (1..=max_dim, 1..=max_dim).prop_flat_map(move |(rows, cols)| {
        prop::collection::vec(entry.clone(), rows * cols).prop_map(move |data| {
            Matrix::new(rows, cols, data.into_iter().map(f64::from).collect())
                .expect("strategy yields well-formed matrices")
        })
    })
}
