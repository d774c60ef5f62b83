//! Black-oil correlation set.
//!
//! Oil is tracked through solution gas ratio and formation volume factor;
//! gas is treated as real gas with Z = 1. All internal formulas take
//! pressure in Pa and temperature in K.
//!
//! - Rs: Standing-type correlation in SI form
//! - Bo: Standing
//! - dead / live oil viscosity: Beggs-Robinson
//! - gas viscosity: Lee-Gonzalez-Eakin

use crate::context::FluidContext;
use crate::error::{PvtError, PvtResult};
use crate::model::{MixtureProperties, PvtModel};
use wf_core::numeric::{ensure_finite, per_day_to_per_second};
use wf_core::units::constants::WATER_DENSITY_KGPM3;
use wf_core::units::{Pressure, Temperature, cp, kgpm3, m3ps};

/// Gas compressibility factor. Held at one; see DESIGN.md.
const GAS_Z_FACTOR: f64 = 1.0;

/// Water viscosity, cP.
const WATER_VISCOSITY_CP: f64 = 1.0;

/// Air density at standard conditions, kg/m³.
const AIR_DENSITY_KGPM3: f64 = 1.2217;

/// Beggs-Robinson domain limits.
const BEGGS_MAX_API: f64 = 58.0;
const BEGGS_MAX_TEMP_F: f64 = 295.0;
const BEGGS_LOW_TEMP_F: f64 = 70.0;
const BEGGS_REF_TEMP_F: f64 = 80.0;

/// m³/m³ per scf/bbl.
const SCF_PER_BBL_TO_M3_PER_M3: f64 = 0.178_107_606_679_035_22;

/// Every intermediate quantity of one black-oil evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhaseState {
    /// Solution gas-oil ratio, m³/m³ (capped at the producing ratio)
    pub rs: f64,
    /// Oil formation volume factor, m³/m³
    pub bo: f64,
    /// Gas formation volume factor, m³/m³
    pub bg: f64,
    pub oil_density_kgpm3: f64,
    pub gas_density_kgpm3: f64,
    pub water_density_kgpm3: f64,
    pub dead_oil_viscosity_cp: f64,
    pub oil_viscosity_cp: f64,
    pub gas_viscosity_cp: f64,
    /// In-situ phase rates, m³/s
    pub gas_rate: f64,
    pub oil_rate: f64,
    pub water_rate: f64,
    pub liquid_rate: f64,
    pub mixture_rate: f64,
    /// Gas share of the in-situ volumetric rate
    pub gas_fraction: f64,
    /// Water share of the in-situ liquid rate
    pub water_fraction_in_situ: f64,
    pub mixture_viscosity_cp: f64,
    pub mixture_density_kgpm3: f64,
}

/// Black-oil property model.
#[derive(Debug, Clone, Copy, Default)]
pub struct BlackOilModel;

impl BlackOilModel {
    pub fn new() -> Self {
        Self
    }

    /// Full phase breakdown at (p, T) for a surface liquid rate in m³/day.
    pub fn phase_state(
        &self,
        pressure_pa: f64,
        temperature_k: f64,
        fluid: &FluidContext,
        liquid_rate_m3_day: f64,
    ) -> PvtResult<PhaseState> {
        if !(pressure_pa > 0.0) {
            return Err(PvtError::NonPhysical {
                what: "pressure",
                value: pressure_pa,
            });
        }
        if !(temperature_k > 0.0) {
            return Err(PvtError::NonPhysical {
                what: "temperature",
                value: temperature_k,
            });
        }

        let q_liq = per_day_to_per_second(liquid_rate_m3_day);
        let gg = fluid.gamma_gas;
        let go = fluid.gamma_oil;
        let wct = fluid.water_cut;
        let rp = fluid.producing_gor;

        let rs = solution_gas_ratio(gg, go, temperature_k, pressure_pa).min(rp);
        let bo = oil_fvf(rs, gg, go, temperature_k);
        let oil_density = oil_density(go, rs, gg, bo);

        let bg = gas_fvf(pressure_pa, temperature_k, GAS_Z_FACTOR);
        let gas_density = gas_density(gg, bg);

        let dead_oil_viscosity = dead_oil_viscosity_beggs(go, temperature_k);
        let oil_viscosity = live_oil_viscosity_beggs(dead_oil_viscosity, rs);
        let gas_viscosity = gas_viscosity_lee(temperature_k, gg, gas_density);

        let gas_rate = bg * q_liq * (1.0 - wct) * (rp - rs);
        let oil_rate = q_liq * (1.0 - wct) * bo;
        let water_rate = q_liq * wct;
        let liquid_rate = oil_rate + water_rate;
        let mixture_rate = liquid_rate + gas_rate;

        // No flow: fall back to the surface split instead of 0/0.
        let gas_fraction = if mixture_rate > 0.0 {
            gas_rate / mixture_rate
        } else {
            0.0
        };
        let water_fraction_in_situ = if liquid_rate > 0.0 {
            water_rate / liquid_rate
        } else {
            wct
        };

        let liquid_viscosity = oil_viscosity * (1.0 - water_fraction_in_situ)
            + WATER_VISCOSITY_CP * water_fraction_in_situ;
        let mixture_viscosity =
            gas_fraction * gas_viscosity + (1.0 - gas_fraction) * liquid_viscosity;

        let water_density = fluid.gamma_water * WATER_DENSITY_KGPM3;
        let liquid_density = oil_density * (1.0 - wct) + water_density * wct;
        let mixture_density = liquid_density * (1.0 - gas_fraction) + gas_fraction * gas_density;

        Ok(PhaseState {
            rs: ensure_finite(rs, "solution gas ratio")?,
            bo: ensure_finite(bo, "oil formation volume factor")?,
            bg: ensure_finite(bg, "gas formation volume factor")?,
            oil_density_kgpm3: ensure_finite(oil_density, "oil density")?,
            gas_density_kgpm3: ensure_finite(gas_density, "gas density")?,
            water_density_kgpm3: water_density,
            dead_oil_viscosity_cp: ensure_finite(dead_oil_viscosity, "dead oil viscosity")?,
            oil_viscosity_cp: ensure_finite(oil_viscosity, "oil viscosity")?,
            gas_viscosity_cp: ensure_finite(gas_viscosity, "gas viscosity")?,
            gas_rate,
            oil_rate,
            water_rate,
            liquid_rate,
            mixture_rate: ensure_finite(mixture_rate, "mixture rate")?,
            gas_fraction,
            water_fraction_in_situ,
            mixture_viscosity_cp: ensure_finite(mixture_viscosity, "mixture viscosity")?,
            mixture_density_kgpm3: ensure_finite(mixture_density, "mixture density")?,
        })
    }
}

impl PvtModel for BlackOilModel {
    fn evaluate(
        &self,
        pressure: Pressure,
        temperature: Temperature,
        fluid: &FluidContext,
        liquid_rate_m3_day: f64,
    ) -> PvtResult<MixtureProperties> {
        let state = self.phase_state(pressure.value, temperature.value, fluid, liquid_rate_m3_day)?;
        Ok(MixtureProperties {
            rate: m3ps(state.mixture_rate),
            density: kgpm3(state.mixture_density_kgpm3),
            viscosity: cp(state.mixture_viscosity_cp),
        })
    }

    fn name(&self) -> &str {
        "black-oil"
    }
}

fn solution_gas_ratio(gamma_gas: f64, gamma_oil: f64, t: f64, p: f64) -> f64 {
    let yg = 1.225_450_3 + 0.001_638 * t - 1.768_75 / gamma_oil;
    gamma_gas * (1.924_310_139_542_123_5e-6 * p / 10f64.powf(yg)).powf(1.0 / 0.83)
}

fn oil_fvf(rs: f64, gamma_gas: f64, gamma_oil: f64, t: f64) -> f64 {
    let f = 5.614_583_333_333_334 * rs * (gamma_gas / gamma_oil).sqrt() + 2.25 * t - 574.5875;
    0.972 + 0.000_147 * f.powf(1.175)
}

fn oil_density(gamma_oil: f64, rs: f64, gamma_gas: f64, bo: f64) -> f64 {
    WATER_DENSITY_KGPM3 * (gamma_oil + rs * gamma_gas * AIR_DENSITY_KGPM3 / 1000.0) / bo
}

fn gas_fvf(p: f64, t: f64, z: f64) -> f64 {
    t * z * 350.958 / p
}

fn gas_density(gamma_gas: f64, bg: f64) -> f64 {
    let molar_mass = 28.97 * gamma_gas;
    molar_mass / (24.042_205_773_501_11 * bg)
}

/// Beggs-Robinson dead oil viscosity, cP.
///
/// API gravity and temperature are clamped to the correlation's fitted range.
/// Below 70 °F the curve is extended through the 70 °F and 80 °F values on
/// a log-log line.
fn dead_oil_viscosity_beggs(gamma_oil: f64, t: f64) -> f64 {
    let api = (141.5 / gamma_oil - 131.5).min(BEGGS_MAX_API);
    let t_f = ((t - 273.15) * 1.8 + 32.0).min(BEGGS_MAX_TEMP_F);

    let beggs = |temp_f: f64| {
        let x = 10f64.powf(3.0324 - 0.020_23 * api) * temp_f.powf(-1.163);
        10f64.powf(x) - 1.0
    };

    if t_f < BEGGS_LOW_TEMP_F {
        let mu_70 = beggs(BEGGS_LOW_TEMP_F);
        let mu_80 = beggs(BEGGS_REF_TEMP_F);
        let c = (mu_70 / mu_80).log10() / (BEGGS_REF_TEMP_F / BEGGS_LOW_TEMP_F).log10();
        let b = mu_70 * BEGGS_LOW_TEMP_F.powf(c);
        10f64.powf(b.log10() - c * t_f.log10())
    } else {
        beggs(t_f)
    }
}

/// Beggs-Robinson live oil viscosity, cP. `rs` in m³/m³.
fn live_oil_viscosity_beggs(dead_viscosity: f64, rs: f64) -> f64 {
    let rs_field = rs / SCF_PER_BBL_TO_M3_PER_M3;
    let a = 10.715 * (rs_field + 100.0).powf(-0.515);
    let b = 5.44 * (rs_field + 150.0).powf(-0.338);
    a * dead_viscosity.powf(b)
}

/// Lee gas viscosity, cP.
fn gas_viscosity_lee(t: f64, gamma_gas: f64, gas_density: f64) -> f64 {
    let t_r = t * 1.8;
    let a = (7.77 + 0.183 * gamma_gas) * t_r.powf(1.5) / (122.4 + 373.6 * gamma_gas + t_r);
    let b = 2.57 + 1914.5 / t_r + 0.275 * gamma_gas;
    let c = 1.11 + 0.04 * b;
    1e-4 * a * (b * (gas_density / 1000.0).powf(c)).exp()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::FluidInput;
    use wf_core::units::{atm, k, to_cp};

    fn fluid() -> FluidContext {
        FluidContext::from_input(&FluidInput {
            water_cut_percent: 50.0,
            producing_gor_m3_per_t: 100.0,
            gamma_oil: 0.8,
            gamma_gas: 0.7,
            gamma_water: 1.0,
            reservoir_temperature_c: 90.0,
        })
        .unwrap()
    }

    fn close(a: f64, b: f64, rel: f64) -> bool {
        (a - b).abs() <= rel * b.abs()
    }

    #[test]
    fn wellhead_conditions_reference_values() {
        let s = BlackOilModel
            .phase_state(1_013_250.0, 330.15, &fluid(), 100.0)
            .unwrap();
        assert!(close(s.rs, 5.3737, 1e-3), "rs = {}", s.rs);
        assert!(close(s.bo, 1.04477, 1e-4), "bo = {}", s.bo);
        assert!(close(s.oil_density_kgpm3, 770.12, 1e-4));
        assert!(close(s.bg, 0.114354, 1e-4));
        assert!(close(s.gas_density_kgpm3, 7.3760, 1e-4));
        assert!(close(s.dead_oil_viscosity_cp, 1.72204, 1e-4));
        assert!(close(s.oil_viscosity_cp, 1.45520, 1e-4));
        assert!(close(s.gas_viscosity_cp, 0.011790, 1e-3));
        assert!(close(s.gas_fraction, 0.80671, 1e-4));
        assert!(close(s.mixture_density_kgpm3, 177.027, 1e-4));
        assert!(close(s.mixture_viscosity_cp, 0.247762, 1e-3));
    }

    #[test]
    fn solution_gas_is_capped_at_producing_ratio() {
        let ctx = fluid();
        let s = BlackOilModel.phase_state(1.5e7, 360.0, &ctx, 100.0).unwrap();
        assert_eq!(s.rs, ctx.producing_gor);
        assert_eq!(s.gas_rate, 0.0);
        assert_eq!(s.gas_fraction, 0.0);
        assert!(close(s.mixture_density_kgpm3, 841.41, 1e-4));
    }

    #[test]
    fn low_temperature_uses_log_log_extension() {
        // 280 K is about 44 °F, below the 70 °F limit
        let s = BlackOilModel
            .phase_state(1_013_250.0, 280.0, &fluid(), 100.0)
            .unwrap();
        assert!(close(s.dead_oil_viscosity_cp, 25.5226, 1e-3));
        assert!(s.dead_oil_viscosity_cp > beggs_at_70f(0.8));
    }

    fn beggs_at_70f(gamma_oil: f64) -> f64 {
        dead_oil_viscosity_beggs(gamma_oil, (70.0 - 32.0) / 1.8 + 273.15)
    }

    #[test]
    fn dead_oil_viscosity_clamps_hot_temperatures() {
        let at_limit = dead_oil_viscosity_beggs(0.8, (295.0 - 32.0) / 1.8 + 273.15);
        let beyond = dead_oil_viscosity_beggs(0.8, 600.0);
        assert!((at_limit - beyond).abs() < 1e-12);
    }

    #[test]
    fn dead_oil_viscosity_clamps_light_oil() {
        // gamma 0.70 is about 70 API, above the 58 API limit
        let limit_gamma = 141.5 / (58.0 + 131.5);
        let at_limit = dead_oil_viscosity_beggs(limit_gamma, 350.0);
        let lighter = dead_oil_viscosity_beggs(0.70, 350.0);
        assert!((at_limit - lighter).abs() < 1e-12);
    }

    #[test]
    fn pure_water_has_no_gas() {
        let mut ctx = fluid();
        ctx.water_cut = 1.0;
        let s = BlackOilModel.phase_state(2e6, 340.0, &ctx, 50.0).unwrap();
        assert_eq!(s.gas_fraction, 0.0);
        assert!((s.water_fraction_in_situ - 1.0).abs() < 1e-15);
        assert!((s.mixture_viscosity_cp - WATER_VISCOSITY_CP).abs() < 1e-12);
        assert!((s.mixture_density_kgpm3 - 1000.0).abs() < 1e-9);
    }

    #[test]
    fn zero_rate_is_defined() {
        let s = BlackOilModel.phase_state(2e6, 340.0, &fluid(), 0.0).unwrap();
        assert_eq!(s.mixture_rate, 0.0);
        assert_eq!(s.gas_fraction, 0.0);
        assert!((s.water_fraction_in_situ - 0.5).abs() < 1e-15);
        assert!(s.mixture_density_kgpm3.is_finite());
    }

    #[test]
    fn gas_fraction_does_not_depend_on_rate() {
        let ctx = fluid();
        let lo = BlackOilModel.phase_state(3e6, 340.0, &ctx, 1.0).unwrap();
        let hi = BlackOilModel.phase_state(3e6, 340.0, &ctx, 400.0).unwrap();
        assert!(close(lo.gas_fraction, hi.gas_fraction, 1e-12));
        assert!(close(lo.mixture_density_kgpm3, hi.mixture_density_kgpm3, 1e-12));
        assert!(close(hi.mixture_rate / lo.mixture_rate, 400.0, 1e-12));
    }

    #[test]
    fn trait_evaluate_matches_phase_state() {
        let ctx = fluid();
        let s = BlackOilModel.phase_state(atm(30.0).value, 350.0, &ctx, 120.0).unwrap();
        let mix = BlackOilModel.evaluate(atm(30.0), k(350.0), &ctx, 120.0).unwrap();
        assert!(close(mix.rate.value, s.mixture_rate, 1e-12));
        assert!(close(mix.density.value, s.mixture_density_kgpm3, 1e-12));
        assert!(close(to_cp(mix.viscosity), s.mixture_viscosity_cp, 1e-12));
    }

    #[test]
    fn rejects_non_positive_pressure() {
        let err = BlackOilModel.phase_state(0.0, 340.0, &fluid(), 10.0).unwrap_err();
        assert!(matches!(err, PvtError::NonPhysical { what: "pressure", .. }));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::context::FluidInput;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn fractions_stay_in_unit_interval(
            p in 1e5_f64..5e7,
            t in 280.0_f64..420.0,
            q in 0.0_f64..500.0,
            wct in 0.0_f64..100.0,
            rp in 0.0_f64..500.0,
        ) {
            let ctx = FluidContext::from_input(&FluidInput {
                water_cut_percent: wct,
                producing_gor_m3_per_t: rp,
                gamma_oil: 0.85,
                gamma_gas: 0.7,
                gamma_water: 1.05,
                reservoir_temperature_c: 90.0,
            })
            .unwrap();
            let s = BlackOilModel.phase_state(p, t, &ctx, q).unwrap();
            prop_assert!((0.0..=1.0).contains(&s.gas_fraction));
            prop_assert!((0.0..=1.0).contains(&s.water_fraction_in_situ));
            prop_assert!(s.rs <= ctx.producing_gor + 1e-12);
            prop_assert!(s.mixture_density_kgpm3 > 0.0 && s.mixture_density_kgpm3.is_finite());
            prop_assert!(s.mixture_viscosity_cp > 0.0);
        }
    }
}
