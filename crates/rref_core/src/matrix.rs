use std::fmt;

use crate::error::MatrixError;

/// Dense row-major matrix of finite `f64` entries.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    pub rows: usize,
    pub cols: usize,
    pub data: Vec<f64>,
}

impl Matrix {
    /// Create a matrix from flat row-major data.
    pub fn new(rows: usize, cols: usize, data: Vec<f64>) -> Result<Self, MatrixError> {
        if rows == 0 || cols == 0 {
            return Err(MatrixError::Empty);
        }
        if data.len() != rows * cols {
            return Err(MatrixError::DataLength {
                expected: rows * cols,
                found: data.len(),
            });
        }
        if let Some(idx) = data.iter().position(|v| !v.is_finite()) {
            return Err(MatrixError::NonFinite {
                row: idx / cols,
                col: idx % cols,
            });
        }
        Ok(Matrix { rows, cols, data })
    }

    /// Create a matrix from nested rows. All rows must have the same length.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, MatrixError> {
        let cols = rows.first().map(Vec::len).unwrap_or(0);
        let mut data = Vec::with_capacity(rows.len() * cols);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(MatrixError::Ragged {
                    row: i,
                    expected: cols,
                    found: row.len(),
                });
            }
            data.extend_from_slice(row);
        }
        Self::new(rows.len(), cols, data)
    }

    pub fn zeros(rows: usize, cols: usize) -> Result<Self, MatrixError> {
        Self::new(rows, cols, vec![0.0; rows * cols])
    }

    #[inline]
    pub fn get(&self, r: usize, c: usize) -> f64 {
        self.data[r * self.cols + c]
    }

    #[inline]
    pub fn set(&mut self, r: usize, c: usize, value: f64) {
        self.data[r * self.cols + c] = value;
    }

    pub fn row(&self, r: usize) -> &[f64] {
        &self.data[r * self.cols..(r + 1) * self.cols]
    }

    pub fn row_mut(&mut self, r: usize) -> &mut [f64] {
        let cols = self.cols;
        &mut self.data[r * cols..(r + 1) * cols]
    }

    /// Swap two rows in place. No-op when `a == b`.
    pub fn swap_rows(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        let (lo, hi) = if a < b { (a, b) } else { (b, a) };
        let cols = self.cols;
        let (head, tail) = self.data.split_at_mut(hi * cols);
        head[lo * cols..(lo + 1) * cols].swap_with_slice(&mut tail[..cols]);
    }

    /// `row[target] -= factor * row[source]`, entrywise.
    pub fn sub_scaled_row(&mut self, target: usize, source: usize, factor: f64) {
        debug_assert_ne!(target, source);
        let cols = self.cols;
        for j in 0..cols {
            let s = self.data[source * cols + j];
            self.data[target * cols + j] -= factor * s;
        }
    }

    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.data.chunks_exact(self.cols).map(<[f64]>::to_vec).collect()
    }

    /// True when the row has no entry above `eps` in magnitude.
    pub fn is_zero_row(&self, r: usize, eps: f64) -> bool {
        self.row(r).iter().all(|v| v.abs() <= eps)
    }

    /// Entrywise comparison with an absolute tolerance.
    pub fn approx_eq(&self, other: &Matrix, eps: f64) -> bool {
        self.rows == other.rows
            && self.cols == other.cols
            && self
                .data
                .iter()
                .zip(&other.data)
                .all(|(a, b)| (a - b).abs() <= eps)
    }

    /// Replace entries below `eps` in magnitude with exact zero.
    ///
    /// Elimination leaves residues like `-2.2e-16`; these are flushed before
    /// display so they neither print as `-0` nor feed the approximator noise.
    pub fn flush_zeros(&mut self, eps: f64) {
        for v in &mut self.data {
            if v.abs() < eps {
                *v = 0.0;
            }
        }
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for r in 0..self.rows {
            if r > 0 {
                write!(f, ", ")?;
            }
            write!(f, "[")?;
            for (c, v) in self.row(r).iter().enumerate() {
                if c > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", v)?;
            }
            write!(f, "]")?;
        }
        write!(f, "]")
    }
}
