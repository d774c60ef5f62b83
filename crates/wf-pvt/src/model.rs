//! Property model trait: the stable seam between the gradient integrator
//! and whatever correlation set sits behind it.

use crate::context::FluidContext;
use crate::error::PvtResult;
use wf_core::units::{Density, DynVisc, Pressure, Temperature, VolumeRate};

/// Mixture properties at one (p, T) point for a given liquid rate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MixtureProperties {
    /// In-situ volumetric rate of gas + oil + water
    pub rate: VolumeRate,
    /// No-slip mixture density
    pub density: Density,
    /// Gas-fraction weighted mixture viscosity
    pub viscosity: DynVisc,
}

/// Fluid property model used by the pressure-gradient integrator.
///
/// Implementations must be pure functions of their arguments so the
/// integrator can call them from any thread.
pub trait PvtModel: Send + Sync {
    /// Evaluate mixture rate, density and viscosity.
    ///
    /// `liquid_rate_m3_day` is the surface liquid rate in m³/day.
    fn evaluate(
        &self,
        pressure: Pressure,
        temperature: Temperature,
        fluid: &FluidContext,
        liquid_rate_m3_day: f64,
    ) -> PvtResult<MixtureProperties>;

    fn name(&self) -> &str;
}
