use crate::error::ChillError;

/// Floating point type used throughout system
pub type Real = f64;

/// Absolute and relative bounds for comparing two reals.
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, ChillError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(ChillError::NonFinite { what, value: v })
    }
}

/// Finite and strictly positive.
pub fn ensure_positive(v: Real, what: &'static str) -> Result<Real, ChillError> {
    let v = ensure_finite(v, what)?;
    if v > 0.0 {
        Ok(v)
    } else {
        Err(ChillError::InvalidArg {
            what: format!("{what} must be positive (got {v})"),
        })
    }
}

/// A quotient this close to an integer is that integer plus rounding error.
pub const STEP_TOLERANCE: Tolerances = Tolerances {
    abs: 0.0,
    rel: 8.0 * Real::EPSILON,
};

/// Number of whole `dt` steps that fit in `duration`.
///
/// `floor(duration / dt)`, except that a quotient within a few ulps of an
/// integer counts as that integer, so `0.3 / 0.1` is 3 steps while
/// `2.9999999995 / 1.0` is 2.
pub fn whole_steps(duration: Real, dt: Real) -> u64 {
    if !duration.is_finite() || duration <= 0.0 || !dt.is_finite() || dt <= 0.0 {
        return 0;
    }
    let ratio = duration / dt;
    let nearest = ratio.round();
    if nearly_equal(ratio, nearest, STEP_TOLERANCE) {
        nearest as u64
    } else {
        ratio.floor() as u64
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn whole_steps_never_overshoots(steps in 1_u64..10_000, dt in 1e-3_f64..10.0) {
            let duration = steps as f64 * dt;
            let counted = whole_steps(duration, dt);
            prop_assert_eq!(counted, steps);
        }

        #[test]
        fn nearly_equal_is_symmetric(a in -1e6_f64..1e6, b in -1e6_f64..1e6) {
            let tol = Tolerances::default();
            prop_assert_eq!(nearly_equal(a, b, tol), nearly_equal(b, a, tol));
        }
    }
}
