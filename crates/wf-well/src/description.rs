//! Well description in caller units.
//!
//! Depths and diameters are in meters, pressure in atm, temperature in °C,
//! water cut in percent. Conversion to solver units happens once per
//! traverse; the description itself is never modified.

use wf_pvt::FluidInput;

use crate::error::{WellError, WellResult};

/// Deviation survey: paired measured and true vertical depths.
#[derive(Debug, Clone, PartialEq)]
pub struct Inclinometry {
    pub md: Vec<f64>,
    pub tvd: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WellDescription {
    pub inclinometry: Inclinometry,
    /// Production casing inner diameter, m
    pub casing_diameter: f64,
    /// Tubing inner diameter, m
    pub tubing_diameter: f64,
    /// Measured depth of the tubing shoe, m
    pub tubing_shoe_md: f64,
    pub fluid: FluidInput,
    /// Wellhead (tubing head) pressure, atm
    pub wellhead_pressure: f64,
    /// Geothermal gradient, °C per 100 m
    pub geo_gradient: f64,
    /// Measured depth of the top perforation, m
    pub perforation_md: f64,
}

impl WellDescription {
    /// Cheap structural checks the traverse relies on.
    pub fn check(&self) -> WellResult<()> {
        let positive = |v: f64| v.is_finite() && v > 0.0;
        if !positive(self.tubing_diameter) {
            return Err(WellError::InvalidInput {
                what: "tubing diameter must be positive",
            });
        }
        if !positive(self.casing_diameter) {
            return Err(WellError::InvalidInput {
                what: "casing diameter must be positive",
            });
        }
        if !positive(self.wellhead_pressure) {
            return Err(WellError::InvalidInput {
                what: "wellhead pressure must be positive",
            });
        }
        if !self.geo_gradient.is_finite() {
            return Err(WellError::InvalidInput {
                what: "geothermal gradient must be finite",
            });
        }
        if !self.tubing_shoe_md.is_finite() || self.tubing_shoe_md < 0.0 {
            return Err(WellError::InvalidInput {
                what: "tubing shoe depth must be non-negative",
            });
        }
        if !self.perforation_md.is_finite() || self.perforation_md < self.tubing_shoe_md {
            return Err(WellError::InvalidInput {
                what: "perforation depth must not be above the tubing shoe",
            });
        }
        Ok(())
    }
}
