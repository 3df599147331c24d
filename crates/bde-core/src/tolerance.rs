//! Tolerant comparison of real-valued timestamps
//!
//! Candidate switch times are produced by adding delays to earlier switch
//! times, so the same physical event can surface with numerically distinct
//! timestamps. Every timestamp comparison in the simulator therefore goes
//! through one comparator value combining absolute and relative tolerance.

/// Equality-with-tolerance for real-valued times.
///
/// Two values are equal when `|a - b| <= max(rel_tol * max(|a|, |b|), abs_tol)`.
/// The defaults mirror standard floating-point proximity semantics.
///
/// This is a plain value, not a global: the solver carries its comparator
/// explicitly and passes it into every series operation that compares times,
/// so tolerances can be tightened or relaxed per solve.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tolerance {
    /// Relative tolerance, scaled by the larger magnitude
    pub rel_tol: f64,
    /// Absolute tolerance floor
    pub abs_tol: f64,
}

impl Default for Tolerance {
    fn default() -> Self {
        Tolerance {
            rel_tol: 1e-9,
            abs_tol: 0.0,
        }
    }
}

impl Tolerance {
    pub fn new(rel_tol: f64, abs_tol: f64) -> Self {
        Tolerance { rel_tol, abs_tol }
    }

    /// Equal within tolerance
    #[inline]
    pub fn eq(&self, a: f64, b: f64) -> bool {
        (a - b).abs() <= f64::max(self.rel_tol * f64::max(a.abs(), b.abs()), self.abs_tol)
    }

    /// Strictly less: `a < b` and not equal within tolerance
    #[inline]
    pub fn lt(&self, a: f64, b: f64) -> bool {
        a < b && !self.eq(a, b)
    }

    /// Less or equal within tolerance
    #[inline]
    pub fn le(&self, a: f64, b: f64) -> bool {
        a < b || self.eq(a, b)
    }

    /// Strictly greater: `a > b` and not equal within tolerance
    #[inline]
    pub fn gt(&self, a: f64, b: f64) -> bool {
        self.lt(b, a)
    }

    /// Greater or equal within tolerance
    #[inline]
    pub fn ge(&self, a: f64, b: f64) -> bool {
        self.le(b, a)
    }
}
