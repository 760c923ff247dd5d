//! Small-denominator fraction approximation for display.
//!
//! A reduced cell value is shown as an integer when it is one (within
//! tolerance), otherwise as the continued-fraction convergent that first
//! lands within `approx_eps` of it. A three-place decimal string always
//! travels with a fraction so the presentation layer can swap it in when the
//! fraction does not fit its cell.

use std::fmt;

use num_rational::Rational64;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::tolerance::TolerancePolicy;

/// Places kept by the decimal fallback.
pub const DECIMAL_PLACES: usize = 3;

/// Why a continued-fraction expansion stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
    /// Remainder fell below `exact_eps`
    Exact,
    /// Convergent within `approx_eps` of the value
    WithinTolerance,
    /// Next convergent would exceed `overflow_bound`; the previous one is kept
    Overflow,
    IterationCap,
}

/// Final convergent of an expansion of a non-negative value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Convergent {
    pub numer: i64,
    pub denom: i64,
    pub iterations: usize,
    pub stop: StopReason,
}

/// A fraction ready for display, with its decimal fallback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fraction {
    /// Carries the sign
    pub numerator: i64,
    /// Always positive
    pub denominator: i64,
    pub decimal: String,
}

impl Fraction {
    pub fn value(&self) -> f64 {
        self.numerator as f64 / self.denominator as f64
    }

    pub fn to_ratio(&self) -> Rational64 {
        Rational64::new(self.numerator, self.denominator)
    }

    pub fn is_negative(&self) -> bool {
        self.numerator < 0
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

/// Rendering-ready form of one cell. Exactly one representation is active.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum DisplayValue {
    Integer { value: i64 },
    Fraction(Fraction),
    Decimal { decimal: String },
}

impl DisplayValue {
    pub fn integer(value: i64) -> Self {
        DisplayValue::Integer { value }
    }

    pub fn is_zero(&self) -> bool {
        matches!(self, DisplayValue::Integer { value: 0 })
    }

    /// Demote a fraction to its decimal fallback. Other kinds are unchanged.
    pub fn into_decimal(self) -> Self {
        match self {
            DisplayValue::Fraction(f) => DisplayValue::Decimal { decimal: f.decimal },
            other => other,
        }
    }
}

impl fmt::Display for DisplayValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisplayValue::Integer { value } => write!(f, "{}", value),
            DisplayValue::Fraction(frac) => write!(f, "{}", frac),
            DisplayValue::Decimal { decimal } => f.write_str(decimal),
        }
    }
}

/// Approximate `value` for display using the default tolerance policy.
pub fn approximate(value: f64) -> DisplayValue {
    approximate_with(value, &TolerancePolicy::default())
}

pub fn approximate_with(value: f64, policy: &TolerancePolicy) -> DisplayValue {
    if policy.is_display_zero(value) {
        return DisplayValue::integer(0);
    }
    if policy.is_near_integer(value) {
        return DisplayValue::integer(value.round() as i64);
    }

    let conv = continued_fraction(value.abs(), policy);
    let numerator = if value < 0.0 { -conv.numer } else { conv.numer };
    if numerator == 0 {
        return DisplayValue::integer(0);
    }
    if conv.denom <= 0 {
        return DisplayValue::Decimal {
            decimal: decimal_string(value, DECIMAL_PLACES),
        };
    }

    DisplayValue::Fraction(Fraction {
        numerator,
        denominator: conv.denom,
        decimal: decimal_string(value, DECIMAL_PLACES),
    })
}

/// Expand non-negative `x` into continued-fraction convergents h/k.
///
/// Terminates after at most `policy.max_iterations` terms (at least one, so a
/// convergent with a positive denominator always exists). Only recurses into
/// `1 / (b - a)` when `b - a` is at least `exact_eps`, so it never divides by
/// zero.
pub fn continued_fraction(x: f64, policy: &TolerancePolicy) -> Convergent {
    debug_assert!(x >= 0.0 && x.is_finite());

    let (mut h1, mut h2) = (1.0_f64, 0.0_f64);
    let (mut k1, mut k2) = (0.0_f64, 1.0_f64);
    let mut b = x;
    let mut iterations = 0;
    let mut stop = StopReason::IterationCap;

    let max_iterations = policy.max_iterations.max(1);
    while iterations < max_iterations {
        let a = b.floor();
        let h = a * h1 + h2;
        let k = a * k1 + k2;
        iterations += 1;

        if h > policy.overflow_bound || k > policy.overflow_bound {
            // k1 is 0 only before the first term; then there is no previous
            // convergent to keep, so the clamped one is used.
            if k1 == 0.0 {
                h1 = h.min(policy.overflow_bound);
                k1 = 1.0;
            }
            stop = StopReason::Overflow;
            break;
        }
        (h1, h2) = (h, h1);
        (k1, k2) = (k, k1);

        let rem = b - a;
        if rem.abs() < policy.exact_eps {
            stop = StopReason::Exact;
            break;
        }
        if (h1 / k1 - x).abs() < policy.approx_eps {
            stop = StopReason::WithinTolerance;
            break;
        }
        b = 1.0 / rem;
    }

    trace!(x, h = h1, k = k1, iterations, ?stop, "continued fraction");
    Convergent {
        numer: h1 as i64,
        denom: k1 as i64,
        iterations,
        stop,
    }
}

/// Round to `places` decimals, then drop trailing zeros and a bare point.
/// Never yields "-0".
pub fn decimal_string(value: f64, places: usize) -> String {
    let mut s = format!("{:.*}", places, value);
    if s.contains('.') {
        let trimmed = s.trim_end_matches('0').trim_end_matches('.').len();
        s.truncate(trimmed);
    }
    if s == "-0" {
        s.remove(0);
    }
    s
}
