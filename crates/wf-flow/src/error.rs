//! Error types for flow-path calculations.

use thiserror::Error;
use wf_core::error::WfError;
use wf_pvt::PvtError;

use crate::trajectory::TrajectoryError;

/// Errors that can occur while integrating along the flow path.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FlowError {
    #[error("Non-physical value: {what}")]
    NonPhysical { what: &'static str },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Step size underflow at MD {md:.4} m (h = {step:e})")]
    StepSizeUnderflow { md: f64, step: f64 },

    #[error("Integration exceeded {max_steps} steps before reaching MD {target:.4} m")]
    TooManySteps { max_steps: usize, target: f64 },

    #[error("Trajectory error: {0}")]
    Trajectory(#[from] TrajectoryError),

    #[error("PVT error: {0}")]
    Pvt(#[from] PvtError),
}

pub type FlowResult<T> = Result<T, FlowError>;

impl From<FlowError> for WfError {
    fn from(e: FlowError) -> Self {
        match e {
            FlowError::NonPhysical { what } => WfError::InvalidArg { what },
            FlowError::InvalidArg { what } => WfError::InvalidArg { what },
            FlowError::StepSizeUnderflow { .. } | FlowError::TooManySteps { .. } => {
                WfError::Invariant {
                    what: "pressure integration did not reach segment end",
                }
            }
            FlowError::Trajectory(_) => WfError::InvalidArg {
                what: "trajectory",
            },
            FlowError::Pvt(_) => WfError::InvalidArg {
                what: "fluid properties",
            },
        }
    }
}
