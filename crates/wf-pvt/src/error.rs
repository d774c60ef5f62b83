use thiserror::Error;
use wf_core::WfError;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PvtError {
    #[error("Invalid fluid input: {what}")]
    InvalidInput { what: &'static str },

    #[error("Non-physical property: {what} = {value}")]
    NonPhysical { what: &'static str, value: f64 },
}

pub type PvtResult<T> = Result<T, PvtError>;

impl From<WfError> for PvtError {
    fn from(e: WfError) -> Self {
        match e {
            WfError::NonFinite { what, value } => PvtError::NonPhysical { what, value },
            WfError::InvalidArg { what } | WfError::Invariant { what } => {
                PvtError::InvalidInput { what }
            }
        }
    }
}
