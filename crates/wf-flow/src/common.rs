//! Common utilities for flow-path calculations.

use crate::error::{FlowError, FlowResult};
use wf_core::numeric::ensure_finite;

/// Ensure a value is finite, returning FlowError if not.
pub fn check_finite(value: f64, what: &'static str) -> FlowResult<()> {
    ensure_finite(value, what).map_err(|_| FlowError::NonPhysical { what })?;
    Ok(())
}

/// Circular pipe cross-section, m².
pub fn pipe_area(diameter_m: f64) -> f64 {
    std::f64::consts::PI * diameter_m * diameter_m / 4.0
}
