// wf-core/src/units.rs

use uom::si::f64::{
    DynamicViscosity as UomDynamicViscosity, Length as UomLength, MassDensity as UomMassDensity,
    Pressure as UomPressure, ThermodynamicTemperature as UomThermodynamicTemperature,
    VolumeRate as UomVolumeRate,
};

// Public canonical unit types (SI, f64)
pub type DynVisc = UomDynamicViscosity;
pub type Length = UomLength;
pub type Density = UomMassDensity;
pub type Pressure = UomPressure;
pub type Temperature = UomThermodynamicTemperature;
pub type VolumeRate = UomVolumeRate;

#[inline]
pub fn pa(v: f64) -> Pressure {
    use uom::si::pressure::pascal;
    Pressure::new::<pascal>(v)
}

#[inline]
pub fn atm(v: f64) -> Pressure {
    use uom::si::pressure::atmosphere;
    Pressure::new::<atmosphere>(v)
}

#[inline]
pub fn k(v: f64) -> Temperature {
    use uom::si::thermodynamic_temperature::kelvin;
    Temperature::new::<kelvin>(v)
}

#[inline]
pub fn degc(v: f64) -> Temperature {
    use uom::si::thermodynamic_temperature::degree_celsius;
    Temperature::new::<degree_celsius>(v)
}

#[inline]
pub fn m(v: f64) -> Length {
    use uom::si::length::meter;
    Length::new::<meter>(v)
}

#[inline]
pub fn kgpm3(v: f64) -> Density {
    use uom::si::mass_density::kilogram_per_cubic_meter;
    Density::new::<kilogram_per_cubic_meter>(v)
}

/// Dynamic viscosity from centipoise.
#[inline]
pub fn cp(v: f64) -> DynVisc {
    use uom::si::dynamic_viscosity::pascal_second;
    DynVisc::new::<pascal_second>(v * 1e-3)
}

#[inline]
pub fn m3ps(v: f64) -> VolumeRate {
    use uom::si::volume_rate::cubic_meter_per_second;
    VolumeRate::new::<cubic_meter_per_second>(v)
}

/// Read a viscosity back in centipoise.
#[inline]
pub fn to_cp(v: DynVisc) -> f64 {
    v.value * 1e3
}

/// Read a pressure back in standard atmospheres.
#[inline]
pub fn to_atm(p: Pressure) -> f64 {
    use uom::si::pressure::atmosphere;
    p.get::<atmosphere>()
}

/// Temperature scales accepted at the caller boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemperatureUnit {
    Celsius,
    Kelvin,
}

/// Pressure scales accepted at the caller boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressureUnit {
    Atmosphere,
    Pascal,
}

/// Convert a bare temperature between scales. Total and invertible.
pub fn convert_temperature(value: f64, from: TemperatureUnit, to: TemperatureUnit) -> f64 {
    use uom::si::thermodynamic_temperature::{degree_celsius, kelvin};
    let t = match from {
        TemperatureUnit::Celsius => Temperature::new::<degree_celsius>(value),
        TemperatureUnit::Kelvin => Temperature::new::<kelvin>(value),
    };
    match to {
        TemperatureUnit::Celsius => t.get::<degree_celsius>(),
        TemperatureUnit::Kelvin => t.get::<kelvin>(),
    }
}

/// Convert a bare pressure between scales. Total and invertible.
pub fn convert_pressure(value: f64, from: PressureUnit, to: PressureUnit) -> f64 {
    use uom::si::pressure::{atmosphere, pascal};
    let p = match from {
        PressureUnit::Atmosphere => Pressure::new::<atmosphere>(value),
        PressureUnit::Pascal => Pressure::new::<pascal>(value),
    };
    match to {
        PressureUnit::Atmosphere => p.get::<atmosphere>(),
        PressureUnit::Pascal => p.get::<pascal>(),
    }
}

pub mod constants {
    /// Gravitational acceleration used by the gradient model.
    pub const G_MPS2: f64 = 9.81;

    /// Standard atmosphere in Pa.
    pub const ATM_PA: f64 = 101_325.0;

    /// Water density at standard conditions, kg/m3.
    pub const WATER_DENSITY_KGPM3: f64 = 1000.0;
}
