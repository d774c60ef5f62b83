use crate::WfError;

/// Floating point type used throughout the workspace.
pub type Real = f64;

/// Seconds in one day; rates enter the solver in volume/day.
pub const SECONDS_PER_DAY: Real = 86_400.0;

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

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, WfError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(WfError::NonFinite { what, value: v })
    }
}

/// Convert a volume/day rate to volume/second.
#[inline]
pub fn per_day_to_per_second(rate_per_day: Real) -> Real {
    rate_per_day / SECONDS_PER_DAY
}

/// `n` evenly spaced points from `start` to `end`, both inclusive.
pub fn linspace(start: Real, end: Real, n: usize) -> Vec<Real> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let delta = (end - start) / (n - 1) as Real;
            let mut points: Vec<Real> = (0..n).map(|i| start + i as Real * delta).collect();
            points[n - 1] = end;
            points
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nearly_equal_basic() {
        let tol = Tolerances {
            abs: 1e-12,
            rel: 1e-9,
        };
        assert!(nearly_equal(1.0, 1.0 + 1e-12, tol));
        assert!(nearly_equal(0.0, 1e-13, tol));
        assert!(!nearly_equal(1.0, 1.0 + 1e-6, tol));
    }

    #[test]
    fn ensure_finite_detects_nan() {
        let err = ensure_finite(Real::NAN, "test").unwrap_err();
        let msg = format!("{err}");
        assert!(msg.contains("Non-finite"));
    }

    #[test]
    fn linspace_hits_both_ends() {
        let pts = linspace(0.001, 400.0, 20);
        assert_eq!(pts.len(), 20);
        assert_eq!(pts[0], 0.001);
        assert_eq!(pts[19], 400.0);
        assert!(pts.windows(2).all(|w| w[1] > w[0]));
    }

    #[test]
    fn linspace_degenerate_counts() {
        assert!(linspace(1.0, 2.0, 0).is_empty());
        assert_eq!(linspace(1.0, 2.0, 1), vec![1.0]);
    }

    #[test]
    fn day_rate_conversion() {
        assert!((per_day_to_per_second(86_400.0) - 1.0).abs() < 1e-15);
    }
}
