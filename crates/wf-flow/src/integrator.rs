//! Adaptive explicit integrators for small ODE systems.

use crate::error::{FlowError, FlowResult};

/// Right-hand side of `dy/dx = f(x, y)` with `N` state variables.
pub trait OdeSystem<const N: usize> {
    fn rhs(&self, x: f64, y: &[f64; N]) -> FlowResult<[f64; N]>;
}

/// Error control and step budget.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepControl {
    pub rtol: f64,
    pub atol: f64,
    pub max_steps: usize,
}

impl Default for StepControl {
    fn default() -> Self {
        Self {
            rtol: 1e-6,
            atol: 1e-6,
            max_steps: 100_000,
        }
    }
}

/// Final state plus step accounting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Integration<const N: usize> {
    pub x: f64,
    pub y: [f64; N],
    pub accepted_steps: usize,
    pub rejected_steps: usize,
    pub rhs_evals: usize,
}

/// Trait for integrators that march from `x0` to `x_end`.
pub trait Integrator {
    fn integrate<S: OdeSystem<N>, const N: usize>(
        &self,
        system: &S,
        x0: f64,
        y0: [f64; N],
        x_end: f64,
    ) -> FlowResult<Integration<N>>;
}

/// Bogacki-Shampine 3(2) pair with FSAL and local error control.
///
/// The third-order solution is propagated; the embedded second-order
/// solution only feeds the error estimate.
#[derive(Debug, Clone, Copy, Default)]
pub struct BogackiShampine {
    pub control: StepControl,
}

const SAFETY: f64 = 0.9;
const MIN_FACTOR: f64 = 0.2;
const MAX_FACTOR: f64 = 10.0;
/// Exponent for step adaptation: 1 / (lower order + 1)
const ERROR_EXPONENT: f64 = -1.0 / 3.0;

const B: [f64; 3] = [2.0 / 9.0, 1.0 / 3.0, 4.0 / 9.0];
/// Third-order weights minus second-order weights, including the FSAL stage.
const E: [f64; 4] = [5.0 / 72.0, -1.0 / 12.0, -1.0 / 9.0, 1.0 / 8.0];

impl BogackiShampine {
    pub fn new(control: StepControl) -> Self {
        Self { control }
    }

    fn error_norm<const N: usize>(&self, err: &[f64; N], y: &[f64; N], y_new: &[f64; N]) -> f64 {
        let sum: f64 = (0..N)
            .map(|i| {
                let scale = self.control.atol + self.control.rtol * y[i].abs().max(y_new[i].abs());
                (err[i] / scale).powi(2)
            })
            .sum();
        (sum / N as f64).sqrt()
    }

    fn scaled_norm<const N: usize>(&self, v: &[f64; N], y: &[f64; N]) -> f64 {
        let sum: f64 = (0..N)
            .map(|i| {
                let scale = self.control.atol + self.control.rtol * y[i].abs();
                (v[i] / scale).powi(2)
            })
            .sum();
        (sum / N as f64).sqrt()
    }

    /// Initial step estimate from the first two derivative evaluations.
    fn initial_step<S: OdeSystem<N>, const N: usize>(
        &self,
        system: &S,
        x0: f64,
        y0: &[f64; N],
        f0: &[f64; N],
        direction: f64,
        span: f64,
    ) -> FlowResult<f64> {
        let d0 = self.scaled_norm(y0, y0);
        let d1 = self.scaled_norm(f0, y0);
        let h0 = if d0 < 1e-5 || d1 < 1e-5 {
            1e-6
        } else {
            0.01 * d0 / d1
        }
        .min(span);

        let y1 = axpy(y0, h0 * direction, f0);
        let f1 = system.rhs(x0 + h0 * direction, &y1)?;
        let diff: [f64; N] = std::array::from_fn(|i| f1[i] - f0[i]);
        let d2 = self.scaled_norm(&diff, y0) / h0;

        let h1 = if d1.max(d2) <= 1e-15 {
            (h0 * 1e-3).max(1e-6)
        } else {
            (0.01 / d1.max(d2)).powf(1.0 / 3.0)
        };

        Ok((100.0 * h0).min(h1).min(span))
    }
}

impl Integrator for BogackiShampine {
    fn integrate<S: OdeSystem<N>, const N: usize>(
        &self,
        system: &S,
        x0: f64,
        y0: [f64; N],
        x_end: f64,
    ) -> FlowResult<Integration<N>> {
        let span = (x_end - x0).abs();
        let mut out = Integration {
            x: x0,
            y: y0,
            accepted_steps: 0,
            rejected_steps: 0,
            rhs_evals: 0,
        };
        if span == 0.0 {
            return Ok(out);
        }
        let direction = (x_end - x0).signum();

        let mut k1 = system.rhs(x0, &y0)?;
        let mut h = self.initial_step(system, x0, &y0, &k1, direction, span)?;
        out.rhs_evals = 2;

        let mut x = x0;
        let mut y = y0;

        while (x_end - x) * direction > 0.0 {
            if out.accepted_steps + out.rejected_steps >= self.control.max_steps {
                return Err(FlowError::TooManySteps {
                    max_steps: self.control.max_steps,
                    target: x_end,
                });
            }

            let min_step = 10.0 * f64::EPSILON * x.abs().max(1.0);
            if h < min_step {
                return Err(FlowError::StepSizeUnderflow { md: x, step: h });
            }

            let remaining = (x_end - x).abs();
            let (h_step, last) = if h >= remaining { (remaining, true) } else { (h, false) };
            let dx = h_step * direction;

            let k2 = system.rhs(x + 0.5 * dx, &axpy(&y, 0.5 * dx, &k1))?;
            let k3 = system.rhs(x + 0.75 * dx, &axpy(&y, 0.75 * dx, &k2))?;
            let y_new: [f64; N] =
                std::array::from_fn(|i| y[i] + dx * (B[0] * k1[i] + B[1] * k2[i] + B[2] * k3[i]));
            let x_new = if last { x_end } else { x + dx };
            let k4 = system.rhs(x_new, &y_new)?;
            out.rhs_evals += 3;

            let err: [f64; N] = std::array::from_fn(|i| {
                dx * (E[0] * k1[i] + E[1] * k2[i] + E[2] * k3[i] + E[3] * k4[i])
            });
            let norm = self.error_norm(&err, &y, &y_new);

            if norm < 1.0 {
                let factor = if norm == 0.0 {
                    MAX_FACTOR
                } else {
                    (SAFETY * norm.powf(ERROR_EXPONENT)).clamp(MIN_FACTOR, MAX_FACTOR)
                };
                x = x_new;
                y = y_new;
                k1 = k4;
                h = h_step * factor;
                out.accepted_steps += 1;
            } else {
                h = h_step * (SAFETY * norm.powf(ERROR_EXPONENT)).max(MIN_FACTOR);
                out.rejected_steps += 1;
            }
        }

        out.x = x;
        out.y = y;
        Ok(out)
    }
}

fn axpy<const N: usize>(y: &[f64; N], a: f64, k: &[f64; N]) -> [f64; N] {
    std::array::from_fn(|i| y[i] + a * k[i])
}
