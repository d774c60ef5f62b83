//! Translate the file schema into the solver's well description.

use wf_flow::IntegrationSettings;
use wf_project::schema::WellDef;
use wf_pvt::FluidInput;
use wf_results::{RateGridSpec, SolverSettingsSpec};
use wf_well::{Inclinometry, RateGrid, WellDescription};

pub fn compile_well(well: &WellDef) -> WellDescription {
    WellDescription {
        inclinometry: Inclinometry {
            md: well.inclinometry.md.clone(),
            tvd: well.inclinometry.tvd.clone(),
        },
        casing_diameter: well.casing.d,
        tubing_diameter: well.tubing.d,
        tubing_shoe_md: well.tubing.h_mes,
        fluid: FluidInput {
            water_cut_percent: well.pvt.wct,
            producing_gor_m3_per_t: well.pvt.rp,
            gamma_oil: well.pvt.gamma_oil,
            gamma_gas: well.pvt.gamma_gas,
            gamma_water: well.pvt.gamma_wat,
            reservoir_temperature_c: well.pvt.t_res,
        },
        wellhead_pressure: well.p_wh,
        geo_gradient: well.geo_grad,
        perforation_md: well.h_res,
    }
}

pub fn grid_spec(grid: &RateGrid) -> RateGridSpec {
    RateGridSpec {
        start: grid.start,
        end: grid.end,
        points: grid.points,
    }
}

pub fn solver_spec(settings: &IntegrationSettings) -> SolverSettingsSpec {
    SolverSettingsSpec {
        rtol: settings.step.rtol,
        atol: settings.step.atol,
        max_steps: settings.step.max_steps,
        relative_roughness: settings.relative_roughness,
    }
}
