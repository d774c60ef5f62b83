//! VLP curve execution and caching service.

use std::path::Path;
use std::time::Instant;

use tracing::info;
use wf_flow::{CacheStats, FlowCaches, IntegrationSettings};
use wf_project::schema::WellDef;
use wf_results::{CurveManifest, CurveRecord, CurveStore};
use wf_well::{RateGrid, TraverseProfile, VlpCurve, VlpOptions, WellSolver};

use crate::error::AppResult;
use crate::project_service;
use crate::runtime_compile::{compile_well, grid_spec, solver_spec};

/// Options for computing curves.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub use_cache: bool,
    pub solver_version: String,
    pub parallel: bool,
    pub grid: RateGrid,
    pub integration: IntegrationSettings,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            use_cache: true,
            solver_version: env!("CARGO_PKG_VERSION").to_string(),
            parallel: false,
            grid: RateGrid::default(),
            integration: IntegrationSettings::default(),
        }
    }
}

impl RunOptions {
    fn vlp_options(&self) -> VlpOptions {
        VlpOptions {
            grid: self.grid,
            parallel: self.parallel,
            integration: self.integration,
        }
    }
}

/// Request to produce the VLP curve for an input file.
pub struct CurveRequest<'a> {
    pub input_path: &'a Path,
    pub options: RunOptions,
}

#[derive(Debug, Clone, Default)]
pub struct CurveTiming {
    pub compute_time_s: f64,
    pub save_time_s: f64,
    pub load_cache_time_s: f64,
    pub total_time_s: f64,
}

#[derive(Debug, Clone)]
pub struct CurveResponse {
    pub curve_id: String,
    pub manifest: CurveManifest,
    pub curve: CurveRecord,
    pub loaded_from_cache: bool,
    pub timing: CurveTiming,
}

/// Convert a solver curve to the stored column layout.
pub fn curve_record(curve: &VlpCurve) -> CurveRecord {
    CurveRecord {
        q_liq: curve.rates(),
        p_wf: curve.pressures(),
    }
}

/// Solver front end owning the trajectory and temperature caches.
///
/// One service is meant to live for the whole process so repeated
/// requests for the same well reuse cached trajectories.
#[derive(Default)]
pub struct WellService {
    caches: FlowCaches,
}

impl WellService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cache_capacity(capacity: usize) -> Self {
        Self {
            caches: FlowCaches::new(capacity),
        }
    }

    pub fn trajectory_cache_stats(&self) -> CacheStats {
        self.caches.trajectory_stats()
    }

    pub fn temperature_cache_stats(&self) -> CacheStats {
        self.caches.temperature_stats()
    }

    /// Bottomhole pressure and intake pressure at one liquid rate.
    pub fn bottomhole_pressure(
        &self,
        well: &WellDef,
        liquid_rate_m3_day: f64,
        integration: IntegrationSettings,
    ) -> AppResult<TraverseProfile> {
        project_service::validate_well(well)?;
        let description = compile_well(well);
        Ok(WellSolver::new(&self.caches)
            .with_settings(integration)
            .traverse(&description, liquid_rate_m3_day)?)
    }

    /// Compute a curve without touching the store.
    pub fn compute_vlp_curve(&self, well: &WellDef, options: &RunOptions) -> AppResult<VlpCurve> {
        project_service::validate_well(well)?;
        let description = compile_well(well);
        let vlp = options.vlp_options();
        Ok(WellSolver::new(&self.caches)
            .with_settings(vlp.integration)
            .vlp_curve(&description, &vlp.grid, vlp.parallel)?)
    }

    /// Load the stored curve for this input or compute and store it.
    pub fn ensure_curve(&self, request: &CurveRequest) -> AppResult<CurveResponse> {
        let started = Instant::now();
        let mut timing = CurveTiming::default();

        let well = project_service::load_well(request.input_path)?;
        let well_name = project_service::well_name(request.input_path);
        let grid = grid_spec(&request.options.grid);
        let solver = solver_spec(&request.options.integration);

        let curve_id = wf_results::compute_curve_id(
            &well,
            &grid,
            &solver,
            &request.options.solver_version,
        )?;
        let store = CurveStore::for_input(request.input_path)?;

        if request.options.use_cache && store.has_curve(&curve_id) {
            let load_started = Instant::now();
            let manifest = store.load_manifest(&curve_id)?;
            let curve = store.load_curve(&curve_id)?;
            timing.load_cache_time_s = load_started.elapsed().as_secs_f64();
            timing.total_time_s = started.elapsed().as_secs_f64();

            info!(curve_id = %curve_id, well = %well_name, "loaded cached curve");
            return Ok(CurveResponse {
                curve_id,
                manifest,
                curve,
                loaded_from_cache: true,
                timing,
            });
        }

        let compute_started = Instant::now();
        let curve = self.compute_vlp_curve(&well, &request.options)?;
        timing.compute_time_s = compute_started.elapsed().as_secs_f64();

        let record = curve_record(&curve);
        let manifest = CurveManifest::new(
            curve_id.clone(),
            well_name.clone(),
            request.options.solver_version.clone(),
            grid,
            solver,
            timing.compute_time_s,
        );

        let save_started = Instant::now();
        store.save_curve(&manifest, &well, &record)?;
        timing.save_time_s = save_started.elapsed().as_secs_f64();
        timing.total_time_s = started.elapsed().as_secs_f64();

        info!(
            curve_id = %curve_id,
            well = %well_name,
            points = record.len(),
            compute_time_s = timing.compute_time_s,
            "computed curve"
        );

        Ok(CurveResponse {
            curve_id,
            manifest,
            curve: record,
            loaded_from_cache: false,
            timing,
        })
    }
}

/// Stored curves next to an input file, oldest first.
pub fn list_curves(input_path: &Path) -> AppResult<Vec<CurveManifest>> {
    let store = CurveStore::for_input(input_path)?;
    let name = project_service::well_name(input_path);
    Ok(store.list_curves(Some(name.as_str()))?)
}

/// Load one stored curve by ID.
pub fn load_curve(input_path: &Path, curve_id: &str) -> AppResult<(CurveManifest, CurveRecord)> {
    let store = CurveStore::for_input(input_path)?;
    let manifest = store.load_manifest(curve_id)?;
    let curve = store.load_curve(curve_id)?;
    Ok((manifest, curve))
}

/// Remove one stored curve.
pub fn delete_curve(input_path: &Path, curve_id: &str) -> AppResult<()> {
    let store = CurveStore::for_input(input_path)?;
    Ok(store.delete_curve(curve_id)?)
}

/// One-shot curve with fresh caches and default options.
pub fn compute_vlp_curve(well: &WellDef) -> AppResult<CurveRecord> {
    let service = WellService::new();
    let curve = service.compute_vlp_curve(well, &RunOptions::default())?;
    Ok(curve_record(&curve))
}
