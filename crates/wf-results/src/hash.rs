//! Content-based hashing for curve IDs.

use sha2::{Digest, Sha256};
use wf_project::schema::WellDef;

use crate::ResultsResult;
use crate::types::{RateGridSpec, SolverSettingsSpec};

/// Deterministic fingerprint of everything that determines a curve.
pub fn compute_curve_id(
    well: &WellDef,
    grid: &RateGridSpec,
    solver: &SolverSettingsSpec,
    solver_version: &str,
) -> ResultsResult<String> {
    let mut hasher = Sha256::new();

    let well_json = serde_json::to_string(well)?;
    hasher.update(well_json.as_bytes());

    let grid_json = serde_json::to_string(grid)?;
    hasher.update(grid_json.as_bytes());

    let solver_json = serde_json::to_string(solver)?;
    hasher.update(solver_json.as_bytes());

    hasher.update(solver_version.as_bytes());

    let result = hasher.finalize();
    Ok(format!("{:x}", result))
}

#[cfg(test)]
mod tests {
    use super::*;
    use wf_project::schema::*;

    fn well() -> WellDef {
        WellDef {
            inclinometry: InclinometryDef {
                md: vec![0.0, 1000.0, 1500.0],
                tvd: vec![0.0, 1000.0, 1100.0],
            },
            casing: CasingDef { d: 0.1 },
            tubing: TubingDef {
                d: 0.062,
                h_mes: 1000.0,
            },
            pvt: PvtDef {
                wct: 50.0,
                rp: 100.0,
                gamma_oil: 0.8,
                gamma_gas: 0.7,
                gamma_wat: 1.0,
                t_res: 90.0,
            },
            p_wh: 10.0,
            geo_grad: 3.0,
            h_res: 1500.0,
        }
    }

    const GRID: RateGridSpec = RateGridSpec {
        start: 0.001,
        end: 400.0,
        points: 20,
    };

    const SOLVER: SolverSettingsSpec = SolverSettingsSpec {
        rtol: 1e-6,
        atol: 1e-6,
        max_steps: 100_000,
        relative_roughness: 1e-4,
    };

    #[test]
    fn hash_stability() {
        let a = compute_curve_id(&well(), &GRID, &SOLVER, "v1").unwrap();
        let b = compute_curve_id(&well(), &GRID, &SOLVER, "v1").unwrap();
        assert_eq!(a, b);
        assert_eq!(a.len(), 64);
    }

    #[test]
    fn hash_differs_for_different_inputs() {
        let base = compute_curve_id(&well(), &GRID, &SOLVER, "v1").unwrap();

        let mut w = well();
        w.p_wh = 11.0;
        assert_ne!(base, compute_curve_id(&w, &GRID, &SOLVER, "v1").unwrap());

        let grid = RateGridSpec { points: 10, ..GRID };
        assert_ne!(base, compute_curve_id(&well(), &grid, &SOLVER, "v1").unwrap());

        assert_ne!(base, compute_curve_id(&well(), &GRID, &SOLVER, "v2").unwrap());
    }

    #[test]
    fn hash_covers_integration_settings() {
        let base = compute_curve_id(&well(), &GRID, &SOLVER, "v1").unwrap();
        let rough = SolverSettingsSpec {
            relative_roughness: 0.05,
            ..SOLVER
        };
        assert_ne!(base, compute_curve_id(&well(), &GRID, &rough, "v1").unwrap());
        let loose = SolverSettingsSpec { rtol: 1e-3, ..SOLVER };
        assert_ne!(base, compute_curve_id(&well(), &GRID, &loose, "v1").unwrap());
        let short = SolverSettingsSpec {
            max_steps: 10,
            ..SOLVER
        };
        assert_ne!(base, compute_curve_id(&well(), &GRID, &short, "v1").unwrap());
    }
}
