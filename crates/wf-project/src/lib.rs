//! wf-project: well input file format and validation.

pub mod schema;
pub mod validate;

use std::path::Path;

pub use schema::*;
pub use validate::{ValidationError, validate_well};

pub type ProjectResult<T> = Result<T, ProjectError>;

#[derive(thiserror::Error, Debug)]
pub enum ProjectError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Unsupported input format: {path}")]
    UnsupportedFormat { path: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Serialization formats recognised by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Json,
    Yaml,
}

impl InputFormat {
    pub fn from_path(path: &Path) -> ProjectResult<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("json") => Ok(Self::Json),
            Some("yaml") | Some("yml") => Ok(Self::Yaml),
            _ => Err(ProjectError::UnsupportedFormat {
                path: path.display().to_string(),
            }),
        }
    }
}

pub fn load_yaml(path: &Path) -> ProjectResult<WellDef> {
    let content = std::fs::read_to_string(path)?;
    let well: WellDef = serde_yaml::from_str(&content)?;
    validate_well(&well)?;
    Ok(well)
}

pub fn save_yaml(path: &Path, well: &WellDef) -> ProjectResult<()> {
    validate_well(well)?;
    let content = serde_yaml::to_string(well)?;
    std::fs::write(path, content)?;
    Ok(())
}

pub fn load_json(path: &Path) -> ProjectResult<WellDef> {
    let content = std::fs::read_to_string(path)?;
    let well: WellDef = serde_json::from_str(&content)?;
    validate_well(&well)?;
    Ok(well)
}

pub fn save_json(path: &Path, well: &WellDef) -> ProjectResult<()> {
    validate_well(well)?;
    let content = serde_json::to_string_pretty(well)?;
    std::fs::write(path, content)?;
    Ok(())
}

/// Load and validate a well file, picking the format from its extension.
pub fn load_well(path: &Path) -> ProjectResult<WellDef> {
    match InputFormat::from_path(path)? {
        InputFormat::Json => load_json(path),
        InputFormat::Yaml => load_yaml(path),
    }
}

/// Validate and save a well file, picking the format from its extension.
pub fn save_well(path: &Path, well: &WellDef) -> ProjectResult<()> {
    match InputFormat::from_path(path)? {
        InputFormat::Json => save_json(path, well),
        InputFormat::Yaml => save_yaml(path, well),
    }
}
