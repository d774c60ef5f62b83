//! Segment traverse sanity checks against closed-form limits.

use wf_core::units::{atm, k, m};
use wf_flow::{
    FlowCaches, FlowConditions, IntegrationSettings, PipeSegment, Trajectory, integrate_segment,
};
use wf_pvt::{BlackOilModel, FluidContext, FluidInput};

fn water() -> FluidContext {
    FluidContext::from_input(&FluidInput {
        water_cut_percent: 100.0,
        producing_gor_m3_per_t: 0.0,
        gamma_oil: 0.8,
        gamma_gas: 0.7,
        gamma_water: 1.0,
        reservoir_temperature_c: 90.0,
    })
    .unwrap()
}

fn live_oil() -> FluidContext {
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
fn static_water_column_is_hydrostatic() {
    let caches = FlowCaches::default();
    let traj = caches.trajectory(&[0.0, 2000.0], &[0.0, 2000.0]).unwrap();
    let fluid = water();
    let conditions = FlowConditions {
        model: &BlackOilModel,
        fluid: &fluid,
        liquid_rate_m3_day: 0.0,
        geo_gradient: 3.0,
    };
    let seg = PipeSegment {
        diameter: m(0.1),
        md_start: m(0.0),
        md_end: m(1000.0),
        trajectory: &traj,
        inlet_pressure: atm(1.0),
        inlet_temperature: k(300.0),
    };

    let out = integrate_segment(&seg, &conditions, &IntegrationSettings::default()).unwrap();
    let expected = atm(1.0).value + 1000.0 * 9.81 * 1000.0;
    assert!(
        (out.pressure.value - expected).abs() < 1e-3 * expected,
        "{} vs {}",
        out.pressure.value,
        expected
    );
}

#[test]
fn horizontal_pipe_without_flow_keeps_pressure() {
    let caches = FlowCaches::default();
    let traj = caches.trajectory(&[0.0, 5000.0], &[1000.0, 1000.0]).unwrap();
    let fluid = live_oil();
    let conditions = FlowConditions {
        model: &BlackOilModel,
        fluid: &fluid,
        liquid_rate_m3_day: 0.0,
        geo_gradient: 0.0,
    };
    let seg = PipeSegment {
        diameter: m(0.062),
        md_start: m(100.0),
        md_end: m(900.0),
        trajectory: &traj,
        inlet_pressure: atm(50.0),
        inlet_temperature: k(330.0),
    };

    let out = integrate_segment(&seg, &conditions, &IntegrationSettings::default()).unwrap();
    assert!((out.pressure.value - atm(50.0).value).abs() < 1e-6);
    assert_eq!(out.temperature.value, 330.0);
}

#[test]
fn higher_rate_means_larger_pressure_rise() {
    let caches = FlowCaches::default();
    let traj = caches
        .trajectory(&[0.0, 1000.0, 1500.0], &[0.0, 1000.0, 1100.0])
        .unwrap();
    let fluid = live_oil();
    let settings = IntegrationSettings::default();

    let outlet = |rate: f64| {
        let conditions = FlowConditions {
            model: &BlackOilModel,
            fluid: &fluid,
            liquid_rate_m3_day: rate,
            geo_gradient: 3.0,
        };
        let seg = PipeSegment {
            diameter: m(0.062),
            md_start: m(0.0),
            md_end: m(1000.0),
            trajectory: &traj,
            inlet_pressure: atm(10.0),
            inlet_temperature: k(330.15),
        };
        integrate_segment(&seg, &conditions, &settings)
            .unwrap()
            .pressure
            .value
    };

    let slow = outlet(10.0);
    let fast = outlet(300.0);
    assert!(fast > slow, "fast {fast} <= slow {slow}");
}

#[test]
fn deviation_reduces_gravity_head() {
    let caches = FlowCaches::default();
    let vertical = caches.trajectory(&[0.0, 2000.0], &[0.0, 2000.0]).unwrap();
    let deviated = caches.trajectory(&[0.0, 2000.0], &[0.0, 1000.0]).unwrap();
    let fluid = water();
    let conditions = FlowConditions {
        model: &BlackOilModel,
        fluid: &fluid,
        liquid_rate_m3_day: 0.0,
        geo_gradient: 3.0,
    };
    let run = |traj: &Trajectory| {
        let seg = PipeSegment {
            diameter: m(0.1),
            md_start: m(0.0),
            md_end: m(1000.0),
            trajectory: traj,
            inlet_pressure: atm(1.0),
            inlet_temperature: k(300.0),
        };
        integrate_segment(&seg, &conditions, &IntegrationSettings::default())
            .unwrap()
            .pressure
            .value
            - atm(1.0).value
    };

    let dp_vertical = run(&vertical);
    let dp_deviated = run(&deviated);
    assert!((dp_deviated / dp_vertical - 0.5).abs() < 1e-6);
}
