//! Fluid description at the caller boundary and its normalized solver form.

use crate::error::{PvtError, PvtResult};
use wf_core::units::{Temperature, TemperatureUnit, convert_temperature, k};

/// Fluid properties as supplied by the caller.
///
/// Water cut is in percent, the producing gas ratio in m³ of gas per tonne
/// of oil and the reservoir temperature in °C.
#[derive(Debug, Clone, PartialEq)]
pub struct FluidInput {
    pub water_cut_percent: f64,
    pub producing_gor_m3_per_t: f64,
    pub gamma_oil: f64,
    pub gamma_gas: f64,
    pub gamma_water: f64,
    pub reservoir_temperature_c: f64,
}

/// Normalized, immutable PVT context consumed by the solver.
///
/// Built once per traverse; the caller's `FluidInput` is never touched.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FluidContext {
    /// Oil relative density (water = 1)
    pub gamma_oil: f64,
    /// Gas relative density (air = 1)
    pub gamma_gas: f64,
    /// Water relative density (water = 1)
    pub gamma_water: f64,
    /// Surface water cut, fraction in [0, 1]
    pub water_cut: f64,
    /// Producing gas-oil ratio, m³/m³
    pub producing_gor: f64,
    /// Reservoir temperature
    pub reservoir_temperature: Temperature,
}

impl FluidContext {
    /// Normalize caller units: percent to fraction, °C to K, m³/t to m³/m³.
    pub fn from_input(input: &FluidInput) -> PvtResult<Self> {
        if !(0.0..=100.0).contains(&input.water_cut_percent) {
            return Err(PvtError::InvalidInput {
                what: "water cut must lie in [0, 100] %",
            });
        }
        if !input.producing_gor_m3_per_t.is_finite() || input.producing_gor_m3_per_t < 0.0 {
            return Err(PvtError::InvalidInput {
                what: "producing gas ratio must be non-negative",
            });
        }
        for (gamma, what) in [
            (input.gamma_oil, "oil relative density must be positive"),
            (input.gamma_gas, "gas relative density must be positive"),
            (input.gamma_water, "water relative density must be positive"),
        ] {
            if !gamma.is_finite() || gamma <= 0.0 {
                return Err(PvtError::InvalidInput { what });
            }
        }

        let t_res_k = convert_temperature(
            input.reservoir_temperature_c,
            TemperatureUnit::Celsius,
            TemperatureUnit::Kelvin,
        );
        if !t_res_k.is_finite() || t_res_k <= 0.0 {
            return Err(PvtError::InvalidInput {
                what: "reservoir temperature must be above absolute zero",
            });
        }

        Ok(Self {
            gamma_oil: input.gamma_oil,
            gamma_gas: input.gamma_gas,
            gamma_water: input.gamma_water,
            water_cut: input.water_cut_percent / 100.0,
            // m³/t -> m³/m³ through the oil density in t/m³
            producing_gor: input.producing_gor_m3_per_t * input.gamma_oil,
            reservoir_temperature: k(t_res_k),
        })
    }

    /// Reservoir temperature in K.
    pub fn reservoir_temperature_k(&self) -> f64 {
        self.reservoir_temperature.value
    }
}
