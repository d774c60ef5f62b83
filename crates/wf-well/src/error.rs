use thiserror::Error;
use wf_core::WfError;
use wf_flow::{FlowError, TrajectoryError};
use wf_pvt::PvtError;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum WellError {
    #[error("Invalid well description: {what}")]
    InvalidInput { what: &'static str },

    #[error("Traverse failed at {rate_m3_day} m³/day: {source}")]
    RatePoint {
        rate_m3_day: f64,
        #[source]
        source: Box<WellError>,
    },

    #[error("Fluid error: {0}")]
    Pvt(#[from] PvtError),

    #[error("Flow error: {0}")]
    Flow(#[from] FlowError),
}

pub type WellResult<T> = Result<T, WellError>;

impl From<TrajectoryError> for WellError {
    fn from(e: TrajectoryError) -> Self {
        WellError::Flow(FlowError::Trajectory(e))
    }
}

impl WellError {
    /// Attach the liquid rate at which a curve point failed.
    pub fn at_rate(self, rate_m3_day: f64) -> Self {
        WellError::RatePoint {
            rate_m3_day,
            source: Box::new(self),
        }
    }
}

impl From<WellError> for WfError {
    fn from(e: WellError) -> Self {
        match e {
            WellError::InvalidInput { what } => WfError::InvalidArg { what },
            WellError::RatePoint { source, .. } => (*source).into(),
            WellError::Pvt(_) => WfError::InvalidArg {
                what: "fluid properties",
            },
            WellError::Flow(e) => e.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rate_context_is_displayed() {
        let err = WellError::InvalidInput { what: "rate" }.at_rate(42.0);
        let msg = err.to_string();
        assert!(msg.contains("42"));
        assert!(msg.contains("rate"));
    }

    #[test]
    fn trajectory_errors_wrap() {
        let err: WellError = TrajectoryError::TooFewStations { count: 1 }.into();
        assert!(matches!(err, WellError::Flow(FlowError::Trajectory(_))));
    }

    #[test]
    fn converts_to_core_error() {
        let err: WfError = WellError::InvalidInput { what: "x" }.at_rate(1.0).into();
        assert_eq!(err, WfError::InvalidArg { what: "x" });
    }
}
