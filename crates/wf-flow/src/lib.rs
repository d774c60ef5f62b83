//! wf-flow: flow-path physics for wellflow.
//!
//! Provides:
//! - Darcy friction factor with regime diagnostics
//! - Deviation-survey trajectory (MD -> TVD, local inclination)
//! - Bounded LRU caches for trajectories and geothermal temperature
//! - Adaptive Bogacki-Shampine integrator
//! - Pipe segment pressure/temperature traverse

pub mod cache;
pub mod common;
pub mod error;
pub mod friction;
pub mod integrator;
pub mod segment;
pub mod trajectory;

pub use cache::{
    BoundedCache, CacheStats, DEFAULT_CACHE_CAPACITY, FlowCaches, geothermal_temperature,
};
pub use error::{FlowError, FlowResult};
pub use friction::{FlowRegime, FrictionSolution, friction_factor, solve_friction};
pub use integrator::{BogackiShampine, Integration, Integrator, OdeSystem, StepControl};
pub use segment::{
    FlowConditions, GradientBreakdown, IntegrationSettings, PipeSegment, SegmentOutlet,
    gradient_at, integrate_segment, outlet_pressure,
};
pub use trajectory::{Trajectory, TrajectoryError};
