//! Stored curve data types.

use serde::{Deserialize, Serialize};

pub type CurveId = String;

/// Rate sweep a curve was computed on.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct RateGridSpec {
    pub start: f64,
    pub end: f64,
    pub points: usize,
}

/// Integration settings a curve was computed with.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct SolverSettingsSpec {
    pub rtol: f64,
    pub atol: f64,
    pub max_steps: usize,
    pub relative_roughness: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CurveManifest {
    pub curve_id: CurveId,
    /// Input file stem the curve was computed from
    pub well_name: String,
    pub timestamp: String,
    pub solver_version: String,
    pub grid: RateGridSpec,
    pub solver: SolverSettingsSpec,
    /// Wall time spent computing the curve
    #[serde(default)]
    pub compute_time_s: f64,
}

impl CurveManifest {
    /// Manifest stamped with the current UTC time.
    pub fn new(
        curve_id: CurveId,
        well_name: impl Into<String>,
        solver_version: impl Into<String>,
        grid: RateGridSpec,
        solver: SolverSettingsSpec,
        compute_time_s: f64,
    ) -> Self {
        Self {
            curve_id,
            well_name: well_name.into(),
            timestamp: chrono::Utc::now().to_rfc3339(),
            solver_version: solver_version.into(),
            grid,
            solver,
            compute_time_s,
        }
    }
}

/// Curve in the exchange layout: liquid rates (m³/day) and bottomhole
/// pressures (atm), index-aligned.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct CurveRecord {
    pub q_liq: Vec<f64>,
    pub p_wf: Vec<f64>,
}

impl CurveRecord {
    pub fn len(&self) -> usize {
        self.q_liq.len()
    }

    pub fn is_empty(&self) -> bool {
        self.q_liq.is_empty()
    }

    /// (rate, pressure) pairs.
    pub fn pairs(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.q_liq.iter().copied().zip(self.p_wf.iter().copied())
    }
}
