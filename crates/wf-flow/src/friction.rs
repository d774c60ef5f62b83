//! Darcy friction factor across laminar, transitional and turbulent flow.
//!
//! Turbulent flow seeds an explicit approximation and refines it with a
//! Colebrook-type fixed point. The iteration is capped; when the cap is
//! hit the last estimate is accepted and only a warning is logged.

use tracing::warn;

/// Reynolds number below which flow is laminar.
pub const RE_LAMINAR_MAX: f64 = 2000.0;

/// Reynolds number at which the turbulent correlation takes over.
pub const RE_TURBULENT_MIN: f64 = 4000.0;

/// Laminar factor at `RE_LAMINAR_MAX` (64 / 2000).
const F_LAMINAR_AT_TRANSITION: f64 = 0.032;

/// Relative change that ends the fixed-point iteration.
pub const FRICTION_REL_TOL: f64 = 1e-4;

/// Hard cap on fixed-point iterations.
pub const FRICTION_MAX_ITER: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowRegime {
    NoFlow,
    Laminar,
    Transitional,
    Turbulent,
}

/// Friction factor plus the iteration diagnostics behind it.
///
/// Diagnostics are informational only; a capped iteration is still a result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrictionSolution {
    pub factor: f64,
    pub regime: FlowRegime,
    /// Fixed-point iterations performed (0 for closed-form regimes)
    pub iterations: usize,
    /// Relative change of the last iteration (0 for closed-form regimes)
    pub relative_change: f64,
}

impl FrictionSolution {
    pub fn converged(&self) -> bool {
        self.relative_change <= FRICTION_REL_TOL
    }
}

/// Darcy friction factor for a Reynolds number and relative roughness.
pub fn friction_factor(reynolds: f64, relative_roughness: f64) -> f64 {
    solve_friction(reynolds, relative_roughness).factor
}

/// Friction factor with regime and convergence diagnostics.
pub fn solve_friction(reynolds: f64, relative_roughness: f64) -> FrictionSolution {
    if reynolds == 0.0 {
        return FrictionSolution {
            factor: 0.0,
            regime: FlowRegime::NoFlow,
            iterations: 0,
            relative_change: 0.0,
        };
    }

    if reynolds < RE_LAMINAR_MAX {
        return FrictionSolution {
            factor: 64.0 / reynolds,
            regime: FlowRegime::Laminar,
            iterations: 0,
            relative_change: 0.0,
        };
    }

    let transitional = reynolds <= RE_TURBULENT_MIN;
    let re_turb = reynolds.max(RE_TURBULENT_MIN);
    let (f_turb, iterations, relative_change) = colebrook_fixed_point(re_turb, relative_roughness);

    if iterations >= FRICTION_MAX_ITER && relative_change > FRICTION_REL_TOL {
        warn!(
            reynolds,
            relative_roughness, relative_change, "friction factor iteration hit its cap"
        );
    }

    if transitional {
        let factor = F_LAMINAR_AT_TRANSITION
            + (reynolds - RE_LAMINAR_MAX) * (f_turb - F_LAMINAR_AT_TRANSITION)
                / (RE_TURBULENT_MIN - RE_LAMINAR_MAX);
        FrictionSolution {
            factor,
            regime: FlowRegime::Transitional,
            iterations,
            relative_change,
        }
    } else {
        FrictionSolution {
            factor: f_turb,
            regime: FlowRegime::Turbulent,
            iterations,
            relative_change,
        }
    }
}

/// Explicit seed for the turbulent iteration.
fn turbulent_seed(reynolds: f64, eps: f64) -> f64 {
    let a = 0.540_540_540_540_540_5 * eps;
    let inner = a + 13.0 / reynolds;
    (2.0 * (a - 5.02 / reynolds * inner.log10()).log10()).powi(-2)
}

fn colebrook_fixed_point(reynolds: f64, eps: f64) -> (f64, usize, f64) {
    let mut f = turbulent_seed(reynolds, eps);
    let mut iterations = 0;
    let mut relative_change;
    loop {
        let f_new = (1.74 - 2.0 * (2.0 * eps + 18.7 / (reynolds * f.sqrt())).log10()).powi(-2);
        iterations += 1;
        relative_change = (f_new - f).abs() / f_new;
        f = f_new;
        if relative_change <= FRICTION_REL_TOL || iterations >= FRICTION_MAX_ITER {
            break;
        }
    }
    (f, iterations, relative_change)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn laminar_law_is_exact(re in 1e-3_f64..2000.0) {
            prop_assume!(re < RE_LAMINAR_MAX);
            prop_assert_eq!(friction_factor(re, 1e-4), 64.0 / re);
        }

        #[test]
        fn factor_is_positive_and_bounded(re in 1.0_f64..1e8, eps in 0.0_f64..0.05) {
            let f = friction_factor(re, eps);
            prop_assert!(f > 0.0 && f.is_finite());
        }
    }
}
