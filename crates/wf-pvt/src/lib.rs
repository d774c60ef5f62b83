//! wf-pvt: black-oil fluid properties for wellflow.
//!
//! Provides:
//! - `FluidInput` (caller units) and the normalized, immutable `FluidContext`
//! - `PvtModel` trait returning mixture rate, density and viscosity
//! - `BlackOilModel`, a Standing / Beggs-Robinson / Lee correlation set
//!
//! # Example
//!
//! ```no_run
//! use wf_core::units::{atm, k};
//! use wf_pvt::{BlackOilModel, FluidContext, FluidInput, PvtModel};
//!
//! let input = FluidInput {
//!     water_cut_percent: 50.0,
//!     producing_gor_m3_per_t: 100.0,
//!     gamma_oil: 0.8,
//!     gamma_gas: 0.7,
//!     gamma_water: 1.0,
//!     reservoir_temperature_c: 90.0,
//! };
//! let ctx = FluidContext::from_input(&input).unwrap();
//! let mix = BlackOilModel.evaluate(atm(50.0), k(350.0), &ctx, 100.0).unwrap();
//! println!("Mixture density: {} kg/m³", mix.density.value);
//! ```

pub mod black_oil;
pub mod context;
pub mod error;
pub mod model;

pub use black_oil::{BlackOilModel, PhaseState};
pub use context::{FluidContext, FluidInput};
pub use error::{PvtError, PvtResult};
pub use model::{MixtureProperties, PvtModel};
