//! Smoke tests for the black-oil model through the `PvtModel` trait.

use wf_core::units::{atm, k, to_cp};
use wf_pvt::{BlackOilModel, FluidContext, FluidInput, PvtModel};

fn scenario_fluid() -> FluidContext {
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

#[test]
fn density_rises_with_pressure() {
    let model = BlackOilModel::new();
    let fluid = scenario_fluid();

    let mut previous = 0.0;
    for p_atm in (1..200).map(|i| i as f64 * 0.5) {
        let mix = model.evaluate(atm(p_atm), k(340.0), &fluid, 100.0).unwrap();
        assert!(
            mix.density.value >= previous,
            "density fell at {p_atm} atm: {} < {previous}",
            mix.density.value
        );
        previous = mix.density.value;
    }
}

#[test]
fn free_gas_expands_mixture_rate_at_low_pressure() {
    let model = BlackOilModel::new();
    let fluid = scenario_fluid();

    let low = model.evaluate(atm(5.0), k(340.0), &fluid, 100.0).unwrap();
    let high = model.evaluate(atm(150.0), k(340.0), &fluid, 100.0).unwrap();

    assert!(low.rate.value > high.rate.value);
    assert!(low.density.value < high.density.value);
}

#[test]
fn outputs_are_positive_and_finite_over_operating_window() {
    let model = BlackOilModel::new();
    let fluid = scenario_fluid();

    for p_atm in [1.0, 10.0, 50.0, 100.0, 250.0] {
        for t_k in [280.0, 310.0, 340.0, 380.0] {
            for q in [0.001, 10.0, 400.0] {
                let mix = model.evaluate(atm(p_atm), k(t_k), &fluid, q).unwrap();
                assert!(mix.rate.value > 0.0);
                assert!(mix.density.value > 0.0 && mix.density.value.is_finite());
                let mu = to_cp(mix.viscosity);
                assert!(mu > 0.0 && mu.is_finite());
            }
        }
    }
}

#[test]
fn model_reports_name() {
    assert_eq!(BlackOilModel.name(), "black-oil");
}
