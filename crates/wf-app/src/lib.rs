//! Shared application service layer for wellflow.
//!
//! Loads and validates well inputs, fingerprints them, serves stored
//! curves when present and otherwise computes and stores new ones.

pub mod curve_service;
pub mod error;
pub mod project_service;
pub mod runtime_compile;

pub use curve_service::{
    CurveRequest, CurveResponse, CurveTiming, RunOptions, WellService, compute_vlp_curve,
    curve_record, delete_curve, list_curves, load_curve,
};
pub use error::{AppError, AppResult};
pub use project_service::{WellSummary, load_well, summarize, validate_well, well_name};
pub use runtime_compile::{compile_well, grid_spec, solver_spec};
pub use wf_results::{CurveManifest, CurveRecord};
