//! wf-well: well traverse and VLP curve construction.
//!
//! Provides:
//! - `WellDescription` in caller units (m, atm, °C, %)
//! - `WellSolver`: tubing + casing traverse for one liquid rate
//! - `build_vlp_curve`: bottomhole pressure over a rate grid, serial or on
//!   the rayon pool
//!
//! # Example
//!
//! ```no_run
//! use wf_flow::FlowCaches;
//! use wf_well::{VlpOptions, WellDescription, build_vlp_curve};
//!
//! fn curve(well: &WellDescription) {
//!     let caches = FlowCaches::default();
//!     let curve = build_vlp_curve(well, &caches, &VlpOptions::default()).unwrap();
//!     for p in curve.points() {
//!         println!("{:8.3} m3/d -> {:7.2} atm", p.rate_m3_day, p.pwf_atm);
//!     }
//! }
//! ```

pub mod description;
pub mod error;
pub mod traverse;
pub mod vlp;

pub use description::{Inclinometry, WellDescription};
pub use error::{WellError, WellResult};
pub use traverse::{TraverseProfile, WellSolver, bottomhole_pressure, traverse_profile};
pub use vlp::{RateGrid, VlpCurve, VlpOptions, VlpPoint, build_vlp_curve};
