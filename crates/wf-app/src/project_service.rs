//! Well input loading, validation and introspection.

use std::path::Path;
use wf_project::schema::WellDef;

use crate::error::{AppError, AppResult};

/// Summary of a well input for listing.
#[derive(Debug, Clone, PartialEq)]
pub struct WellSummary {
    pub name: String,
    pub survey_stations: usize,
    pub total_md_m: f64,
    pub total_tvd_m: f64,
    pub tubing_shoe_md_m: f64,
    pub perforation_md_m: f64,
    pub wellhead_pressure_atm: f64,
}

/// Load and validate a well file (JSON or YAML by extension).
pub fn load_well(path: &Path) -> AppResult<WellDef> {
    if !path.exists() {
        return Err(AppError::InputFileRead {
            path: path.to_path_buf(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        });
    }
    Ok(wf_project::load_well(path)?)
}

pub fn validate_well(well: &WellDef) -> AppResult<()> {
    Ok(wf_project::validate_well(well)?)
}

/// Name used to tag curves computed from an input file.
pub fn well_name(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| "well".to_string())
}

pub fn summarize(name: &str, well: &WellDef) -> WellSummary {
    let incl = &well.inclinometry;
    WellSummary {
        name: name.to_string(),
        survey_stations: incl.md.len(),
        total_md_m: incl.md.last().copied().unwrap_or(0.0),
        total_tvd_m: incl.tvd.last().copied().unwrap_or(0.0),
        tubing_shoe_md_m: well.tubing.h_mes,
        perforation_md_m: well.h_res,
        wellhead_pressure_atm: well.p_wh,
    }
}
