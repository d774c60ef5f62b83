//! Wellhead-to-perforation traverse for one liquid rate.
//!
//! Two segments are chained: tubing from surface to the shoe, then casing
//! from the shoe to the top perforation. Each segment starts on the
//! geothermal line at its own inlet depth.

use tracing::debug;
use wf_core::units::{PressureUnit, convert_pressure, k, m, pa, to_atm};
use wf_flow::{
    FlowCaches, FlowConditions, IntegrationSettings, PipeSegment, SegmentOutlet, Trajectory,
    integrate_segment,
};
use wf_pvt::{BlackOilModel, FluidContext, PvtModel};

use crate::description::WellDescription;
use crate::error::{WellError, WellResult};

/// Pressures along one traverse, atm.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TraverseProfile {
    pub liquid_rate_m3_day: f64,
    pub wellhead_pressure_atm: f64,
    /// Pressure at the tubing shoe (pump intake)
    pub intake_pressure_atm: f64,
    pub bottomhole_pressure_atm: f64,
    pub tubing: SegmentOutlet,
    pub casing: SegmentOutlet,
}

/// Traverse driver bound to a PVT model and a set of shared caches.
pub struct WellSolver<'c, M: PvtModel = BlackOilModel> {
    model: M,
    caches: &'c FlowCaches,
    settings: IntegrationSettings,
}

impl<'c> WellSolver<'c, BlackOilModel> {
    pub fn new(caches: &'c FlowCaches) -> Self {
        Self::with_model(BlackOilModel, caches)
    }
}

impl<'c, M: PvtModel> WellSolver<'c, M> {
    pub fn with_model(model: M, caches: &'c FlowCaches) -> Self {
        Self {
            model,
            caches,
            settings: IntegrationSettings::default(),
        }
    }

    pub fn with_settings(mut self, settings: IntegrationSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn settings(&self) -> &IntegrationSettings {
        &self.settings
    }

    pub fn caches(&self) -> &FlowCaches {
        self.caches
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    /// Full traverse at one surface liquid rate (m³/day).
    pub fn traverse(
        &self,
        well: &WellDescription,
        liquid_rate_m3_day: f64,
    ) -> WellResult<TraverseProfile> {
        well.check()?;
        if !liquid_rate_m3_day.is_finite() || liquid_rate_m3_day < 0.0 {
            return Err(WellError::InvalidInput {
                what: "liquid rate must be non-negative",
            });
        }

        let fluid = FluidContext::from_input(&well.fluid)?;
        let p_wh = convert_pressure(
            well.wellhead_pressure,
            PressureUnit::Atmosphere,
            PressureUnit::Pascal,
        );
        let trajectory = self
            .caches
            .trajectory(&well.inclinometry.md, &well.inclinometry.tvd)?;

        let conditions = FlowConditions {
            model: &self.model,
            fluid: &fluid,
            liquid_rate_m3_day,
            geo_gradient: well.geo_gradient,
        };
        let reservoir_tvd = trajectory.tvd(well.perforation_md);

        let tubing = self.run_segment(
            &trajectory,
            &conditions,
            well.tubing_diameter,
            (0.0, well.tubing_shoe_md),
            p_wh,
            reservoir_tvd,
        )?;
        let casing = self.run_segment(
            &trajectory,
            &conditions,
            well.casing_diameter,
            (well.tubing_shoe_md, well.perforation_md),
            tubing.pressure.value,
            reservoir_tvd,
        )?;

        let profile = TraverseProfile {
            liquid_rate_m3_day,
            wellhead_pressure_atm: well.wellhead_pressure,
            intake_pressure_atm: to_atm(tubing.pressure),
            bottomhole_pressure_atm: to_atm(casing.pressure),
            tubing,
            casing,
        };
        debug!(
            model = self.model.name(),
            rate = liquid_rate_m3_day,
            p_intake = profile.intake_pressure_atm,
            p_wf = profile.bottomhole_pressure_atm,
            "well traverse"
        );
        Ok(profile)
    }

    /// Bottomhole flowing pressure (atm) at one surface liquid rate.
    pub fn bottomhole_pressure(
        &self,
        well: &WellDescription,
        liquid_rate_m3_day: f64,
    ) -> WellResult<f64> {
        self.traverse(well, liquid_rate_m3_day)
            .map(|p| p.bottomhole_pressure_atm)
    }

    fn run_segment(
        &self,
        trajectory: &Trajectory,
        conditions: &FlowConditions<'_, M>,
        diameter: f64,
        (md_start, md_end): (f64, f64),
        inlet_pressure_pa: f64,
        reservoir_tvd: f64,
    ) -> WellResult<SegmentOutlet> {
        let inlet_temperature = self.caches.temperature(
            conditions.geo_gradient,
            conditions.fluid.reservoir_temperature_k(),
            reservoir_tvd,
            trajectory.tvd(md_start),
        );
        let segment = PipeSegment {
            diameter: m(diameter),
            md_start: m(md_start),
            md_end: m(md_end),
            trajectory,
            inlet_pressure: pa(inlet_pressure_pa),
            inlet_temperature: k(inlet_temperature),
        };
        Ok(integrate_segment(&segment, conditions, &self.settings)?)
    }
}

/// Bottomhole pressure (atm) with the black-oil model and default settings.
pub fn bottomhole_pressure(
    well: &WellDescription,
    caches: &FlowCaches,
    liquid_rate_m3_day: f64,
) -> WellResult<f64> {
    WellSolver::new(caches).bottomhole_pressure(well, liquid_rate_m3_day)
}

/// Intake and bottomhole pressures with the black-oil model.
pub fn traverse_profile(
    well: &WellDescription,
    caches: &FlowCaches,
    settings: IntegrationSettings,
    liquid_rate_m3_day: f64,
) -> WellResult<TraverseProfile> {
    WellSolver::new(caches)
        .with_settings(settings)
        .traverse(well, liquid_rate_m3_day)
}
