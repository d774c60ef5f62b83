//! Well input schema.
//!
//! Field names follow the exchange format used by the VLP service, so
//! files produced for it load unchanged.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WellDef {
    pub inclinometry: InclinometryDef,
    pub casing: CasingDef,
    pub tubing: TubingDef,
    pub pvt: PvtDef,
    /// Wellhead pressure, atm
    pub p_wh: f64,
    /// Geothermal gradient, °C / 100 m
    pub geo_grad: f64,
    /// Top perforation measured depth, m
    pub h_res: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InclinometryDef {
    /// Measured depths, m
    #[serde(rename = "MD")]
    pub md: Vec<f64>,
    /// True vertical depths, m
    #[serde(rename = "TVD")]
    pub tvd: Vec<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CasingDef {
    /// Inner diameter, m
    pub d: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TubingDef {
    /// Inner diameter, m
    pub d: f64,
    /// Shoe measured depth, m
    pub h_mes: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PvtDef {
    /// Water cut, %
    pub wct: f64,
    /// Producing gas factor, m³/t
    pub rp: f64,
    pub gamma_oil: f64,
    pub gamma_gas: f64,
    pub gamma_wat: f64,
    /// Reservoir temperature, °C
    pub t_res: f64,
}
