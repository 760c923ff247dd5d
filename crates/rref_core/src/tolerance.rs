//! Numeric tolerance policy shared by reduction and display approximation.
//!
//! Every threshold the core compares against lives in [`TolerancePolicy`].
//! Reduction only reads `pivot_eps`; approximation reads the rest. The
//! approximation's "close enough" test (`approx_eps`) deliberately equals
//! `pivot_eps`, so a value the reducer would call equal to a fraction is
//! also displayed as that fraction.

/// Pivot detection threshold used during elimination.
pub const PIVOT_EPS: f64 = 1e-9;
/// Below this magnitude a cell is displayed as `0`.
pub const ZERO_EPS: f64 = 1e-8;
/// Within this distance of an integer a cell is displayed as that integer.
pub const INTEGER_EPS: f64 = 1e-6;
/// Remainder below which a continued-fraction expansion is considered exact.
pub const EXACT_EPS: f64 = 1e-11;
/// Hard cap on continued-fraction terms.
pub const MAX_CF_ITERATIONS: usize = 20;

/// Thresholds for one reduction or approximation call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TolerancePolicy {
    /// |x| at or below this is not a usable pivot
    pub pivot_eps: f64,
    pub zero_eps: f64,
    pub integer_eps: f64,
    pub exact_eps: f64,
    /// A convergent h/k with |h/k - x| below this ends the expansion
    pub approx_eps: f64,
    pub max_iterations: usize,
    /// Convergent numerators/denominators above this stop the expansion
    pub overflow_bound: f64,
}

impl Default for TolerancePolicy {
    fn default() -> Self {
        Self {
            pivot_eps: PIVOT_EPS,
            zero_eps: ZERO_EPS,
            integer_eps: INTEGER_EPS,
            exact_eps: EXACT_EPS,
            approx_eps: PIVOT_EPS,
            max_iterations: MAX_CF_ITERATIONS,
            overflow_bound: (i64::MAX / 2) as f64,
        }
    }
}

impl TolerancePolicy {
    /// True when `x` is indistinguishable from zero for pivoting.
    #[inline]
    pub fn is_pivot_zero(&self, x: f64) -> bool {
        x.abs() <= self.pivot_eps
    }

    #[inline]
    pub fn is_display_zero(&self, x: f64) -> bool {
        x.abs() < self.zero_eps
    }

    /// True when `x` is within `integer_eps` of its nearest integer.
    #[inline]
    pub fn is_near_integer(&self, x: f64) -> bool {
        (x - x.round()).abs() < self.integer_eps
    }
}
