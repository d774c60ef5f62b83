//! Error types for the wf-app service layer.

use std::path::PathBuf;

/// Application error type wrapping the backend crates' errors behind one
/// interface for the CLI.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Input error: {0}")]
    Project(String),

    #[error("Failed to read input file: {path}")]
    InputFileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Input validation failed: {0}")]
    Validation(String),

    #[error("Well computation failed: {0}")]
    Well(String),

    #[error("Results error: {0}")]
    Results(String),

    #[error("Curve not found: {0}")]
    CurveNotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for wf-app operations.
pub type AppResult<T> = Result<T, AppError>;

impl From<wf_project::ProjectError> for AppError {
    fn from(err: wf_project::ProjectError) -> Self {
        match err {
            wf_project::ProjectError::Validation(e) => AppError::Validation(e.to_string()),
            other => AppError::Project(other.to_string()),
        }
    }
}

impl From<wf_project::ValidationError> for AppError {
    fn from(err: wf_project::ValidationError) -> Self {
        AppError::Validation(err.to_string())
    }
}

impl From<wf_well::WellError> for AppError {
    fn from(err: wf_well::WellError) -> Self {
        AppError::Well(err.to_string())
    }
}

impl From<wf_results::ResultsError> for AppError {
    fn from(err: wf_results::ResultsError) -> Self {
        match err {
            wf_results::ResultsError::CurveNotFound { curve_id } => {
                AppError::CurveNotFound(curve_id)
            }
            wf_results::ResultsError::InvalidPath { message } => AppError::InvalidInput(message),
            other => AppError::Results(other.to_string()),
        }
    }
}
