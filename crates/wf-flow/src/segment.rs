//! Pressure and temperature along one pipe segment.
//!
//! The state `[p, T]` is marched over measured depth:
//!
//! ```text
//! dp/dMD = f ρ v² / (2 d) + ρ g sin θ
//! dT/dMD = geothermal gradient / 100
//! ```
//!
//! with mixture properties from a `PvtModel` at the local (p, T).

use tracing::debug;
use wf_core::units::constants::G_MPS2;
use wf_core::units::{Length, Pressure, Temperature, k, pa};
use wf_pvt::{FluidContext, PvtModel};

use crate::common::{check_finite, pipe_area};
use crate::error::{FlowError, FlowResult};
use crate::friction::solve_friction;
use crate::integrator::{BogackiShampine, Integrator, OdeSystem, StepControl};
use crate::trajectory::Trajectory;

/// Backward offset used to sample the local slope.
pub const SLOPE_OFFSET_M: f64 = 1e-4;

/// Forward offset used at the segment start, where a backward difference
/// would leave the segment.
pub const START_SLOPE_OFFSET_M: f64 = 1e-3;

/// Viscosity floor in the Reynolds number, cP.
pub const MIN_VISCOSITY_CP: f64 = 1e-6;

/// Solver settings for one segment integration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntegrationSettings {
    pub step: StepControl,
    /// Pipe wall roughness relative to diameter
    pub relative_roughness: f64,
}

impl Default for IntegrationSettings {
    fn default() -> Self {
        Self {
            step: StepControl::default(),
            relative_roughness: 1e-4,
        }
    }
}

/// One constant-diameter stretch of the flow path.
#[derive(Debug, Clone, Copy)]
pub struct PipeSegment<'a> {
    pub diameter: Length,
    pub md_start: Length,
    pub md_end: Length,
    pub trajectory: &'a Trajectory,
    pub inlet_pressure: Pressure,
    pub inlet_temperature: Temperature,
}

/// Fluid and rate shared by every segment of a traverse.
pub struct FlowConditions<'a, M: PvtModel> {
    pub model: &'a M,
    pub fluid: &'a FluidContext,
    pub liquid_rate_m3_day: f64,
    /// Geothermal gradient, degrees per 100 m
    pub geo_gradient: f64,
}

/// Contributions to the local pressure gradient.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientBreakdown {
    /// Pa/m
    pub friction: f64,
    /// Pa/m
    pub gravity: f64,
    pub velocity_mps: f64,
    pub reynolds: f64,
    pub friction_factor: f64,
    pub sin_inclination: f64,
}

impl GradientBreakdown {
    pub fn total(&self) -> f64 {
        self.friction + self.gravity
    }
}

/// State at the far end of a segment plus integration counters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentOutlet {
    pub pressure: Pressure,
    pub temperature: Temperature,
    pub accepted_steps: usize,
    pub rejected_steps: usize,
    pub rhs_evals: usize,
}

struct SegmentOde<'s, 'a, M: PvtModel> {
    diameter_m: f64,
    area_m2: f64,
    md_start: f64,
    trajectory: &'a Trajectory,
    conditions: &'s FlowConditions<'a, M>,
    relative_roughness: f64,
}

impl<M: PvtModel> SegmentOde<'_, '_, M> {
    fn sin_inclination(&self, md: f64) -> f64 {
        if md == self.md_start {
            self.trajectory
                .sin_inclination(md, md + START_SLOPE_OFFSET_M)
        } else {
            self.trajectory.sin_inclination(md - SLOPE_OFFSET_M, md)
        }
    }

    fn gradient(&self, md: f64, p_pa: f64, t_k: f64) -> FlowResult<GradientBreakdown> {
        let c = self.conditions;
        let mix = c
            .model
            .evaluate(pa(p_pa), k(t_k), c.fluid, c.liquid_rate_m3_day)?;
        let rho = mix.density.value;
        let mu_cp = mix.viscosity.value * 1e3;

        let velocity = mix.rate.value / self.area_m2;
        let reynolds = 1000.0 * rho * velocity * self.diameter_m / mu_cp.max(MIN_VISCOSITY_CP);
        check_finite(reynolds, "Reynolds number")?;

        let ff = solve_friction(reynolds, self.relative_roughness).factor;
        let sin_inclination = self.sin_inclination(md);

        let friction = ff * rho * velocity.powi(2) / (2.0 * self.diameter_m);
        let gravity = rho * G_MPS2 * sin_inclination;
        check_finite(friction + gravity, "pressure gradient")?;

        Ok(GradientBreakdown {
            friction,
            gravity,
            velocity_mps: velocity,
            reynolds,
            friction_factor: ff,
            sin_inclination,
        })
    }
}

impl<M: PvtModel> OdeSystem<2> for SegmentOde<'_, '_, M> {
    fn rhs(&self, md: f64, y: &[f64; 2]) -> FlowResult<[f64; 2]> {
        let g = self.gradient(md, y[0], y[1])?;
        Ok([g.total(), self.conditions.geo_gradient / 100.0])
    }
}

fn validate(segment: &PipeSegment<'_>) -> FlowResult<()> {
    let d = segment.diameter.value;
    if !d.is_finite() || d <= 0.0 {
        return Err(FlowError::InvalidArg {
            what: "pipe diameter must be positive",
        });
    }
    let (start, end) = (segment.md_start.value, segment.md_end.value);
    if !start.is_finite() || !end.is_finite() {
        return Err(FlowError::InvalidArg {
            what: "segment depths must be finite",
        });
    }
    if end < start {
        return Err(FlowError::InvalidArg {
            what: "segment end must not precede its start",
        });
    }
    Ok(())
}

fn segment_ode<'s, 'a, M: PvtModel>(
    segment: &PipeSegment<'a>,
    conditions: &'s FlowConditions<'a, M>,
    settings: &IntegrationSettings,
) -> SegmentOde<'s, 'a, M> {
    SegmentOde {
        diameter_m: segment.diameter.value,
        area_m2: pipe_area(segment.diameter.value),
        md_start: segment.md_start.value,
        trajectory: segment.trajectory,
        conditions,
        relative_roughness: settings.relative_roughness,
    }
}

/// Integrate pressure and temperature from the segment start to its end.
///
/// A zero-length segment returns its inlet state.
pub fn integrate_segment<M: PvtModel>(
    segment: &PipeSegment<'_>,
    conditions: &FlowConditions<'_, M>,
    settings: &IntegrationSettings,
) -> FlowResult<SegmentOutlet> {
    validate(segment)?;

    let ode = segment_ode(segment, conditions, settings);
    let y0 = [segment.inlet_pressure.value, segment.inlet_temperature.value];
    let sol = BogackiShampine::new(settings.step).integrate(
        &ode,
        segment.md_start.value,
        y0,
        segment.md_end.value,
    )?;

    check_finite(sol.y[0], "outlet pressure")?;
    debug!(
        md_start = segment.md_start.value,
        md_end = segment.md_end.value,
        diameter = segment.diameter.value,
        p_in = y0[0],
        p_out = sol.y[0],
        accepted = sol.accepted_steps,
        rejected = sol.rejected_steps,
        "segment integrated"
    );

    Ok(SegmentOutlet {
        pressure: pa(sol.y[0]),
        temperature: k(sol.y[1]),
        accepted_steps: sol.accepted_steps,
        rejected_steps: sol.rejected_steps,
        rhs_evals: sol.rhs_evals,
    })
}

/// Outlet pressure at the far end of a segment.
pub fn outlet_pressure<M: PvtModel>(
    segment: &PipeSegment<'_>,
    conditions: &FlowConditions<'_, M>,
    settings: &IntegrationSettings,
) -> FlowResult<Pressure> {
    integrate_segment(segment, conditions, settings).map(|o| o.pressure)
}

/// Local gradient breakdown at one point of a segment.
pub fn gradient_at<M: PvtModel>(
    segment: &PipeSegment<'_>,
    conditions: &FlowConditions<'_, M>,
    settings: &IntegrationSettings,
    md: Length,
    pressure: Pressure,
    temperature: Temperature,
) -> FlowResult<GradientBreakdown> {
    validate(segment)?;
    segment_ode(segment, conditions, settings).gradient(md.value, pressure.value, temperature.value)
}
