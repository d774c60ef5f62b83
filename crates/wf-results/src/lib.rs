//! wf-results: curve fingerprints and file-backed curve storage.

pub mod hash;
pub mod store;
pub mod types;

pub use hash::compute_curve_id;
pub use store::{CurveStore, is_valid_curve_id};
pub use types::*;

pub type ResultsResult<T> = Result<T, ResultsError>;

#[derive(thiserror::Error, Debug)]
pub enum ResultsError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Curve not found: {curve_id}")]
    CurveNotFound { curve_id: String },

    #[error("Malformed curve {curve_id}: {what}")]
    Malformed { curve_id: String, what: String },

    #[error("Invalid path: {message}")]
    InvalidPath { message: String },
}
