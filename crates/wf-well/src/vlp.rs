//! Vertical lift performance curve: bottomhole pressure over a rate sweep.

use tracing::debug;
use wf_core::numeric::linspace;
use wf_flow::{FlowCaches, IntegrationSettings};
use wf_pvt::PvtModel;

use crate::description::WellDescription;
use crate::error::{WellError, WellResult};
use crate::traverse::WellSolver;

/// Evenly spaced surface liquid rates, m³/day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RateGrid {
    pub start: f64,
    pub end: f64,
    pub points: usize,
}

impl Default for RateGrid {
    fn default() -> Self {
        Self {
            start: 0.001,
            end: 400.0,
            points: 20,
        }
    }
}

impl RateGrid {
    pub fn new(start: f64, end: f64, points: usize) -> WellResult<Self> {
        let grid = Self { start, end, points };
        grid.check()?;
        Ok(grid)
    }

    fn check(&self) -> WellResult<()> {
        if self.points < 2 {
            return Err(WellError::InvalidInput {
                what: "rate grid needs at least two points",
            });
        }
        if !self.start.is_finite() || !self.end.is_finite() || self.start < 0.0 {
            return Err(WellError::InvalidInput {
                what: "rate grid bounds must be finite and non-negative",
            });
        }
        if self.end <= self.start {
            return Err(WellError::InvalidInput {
                what: "rate grid must be increasing",
            });
        }
        Ok(())
    }

    /// Grid rates with exact endpoints.
    pub fn rates(&self) -> Vec<f64> {
        linspace(self.start, self.end, self.points)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct VlpOptions {
    pub grid: RateGrid,
    /// Evaluate rate points on the rayon pool
    pub parallel: bool,
    pub integration: IntegrationSettings,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VlpPoint {
    pub rate_m3_day: f64,
    pub pwf_atm: f64,
}

/// (rate, bottomhole pressure) samples in increasing rate order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct VlpCurve {
    points: Vec<VlpPoint>,
}

impl VlpCurve {
    /// Build from samples; rates must be strictly increasing.
    pub fn from_points(points: Vec<VlpPoint>) -> WellResult<Self> {
        if points
            .windows(2)
            .any(|w| !(w[1].rate_m3_day > w[0].rate_m3_day))
        {
            return Err(WellError::InvalidInput {
                what: "curve rates must be strictly increasing",
            });
        }
        Ok(Self { points })
    }

    pub fn points(&self) -> &[VlpPoint] {
        &self.points
    }

    pub fn rates(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.rate_m3_day).collect()
    }

    pub fn pressures(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.pwf_atm).collect()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn into_points(self) -> Vec<VlpPoint> {
        self.points
    }
}

impl<M: PvtModel> WellSolver<'_, M> {
    /// Sweep the grid through the traverse, keeping rate order.
    pub fn vlp_curve(
        &self,
        well: &WellDescription,
        grid: &RateGrid,
        parallel: bool,
    ) -> WellResult<VlpCurve> {
        grid.check()?;
        well.check()?;
        let rates = grid.rates();

        let point = |rate: f64| -> WellResult<VlpPoint> {
            let pwf_atm = self
                .bottomhole_pressure(well, rate)
                .map_err(|e| e.at_rate(rate))?;
            Ok(VlpPoint {
                rate_m3_day: rate,
                pwf_atm,
            })
        };

        let points = if parallel {
            use rayon::prelude::*;
            rates
                .par_iter()
                .map(|&rate| point(rate))
                .collect::<WellResult<Vec<_>>>()?
        } else {
            rates
                .iter()
                .map(|&rate| point(rate))
                .collect::<WellResult<Vec<_>>>()?
        };

        debug!(
            points = points.len(),
            parallel,
            trajectory_hits = self.caches().trajectory_stats().hits,
            "vlp curve built"
        );
        VlpCurve::from_points(points)
    }
}

/// VLP curve with the black-oil model.
pub fn build_vlp_curve(
    well: &WellDescription,
    caches: &FlowCaches,
    options: &VlpOptions,
) -> WellResult<VlpCurve> {
    WellSolver::new(caches)
        .with_settings(options.integration)
        .vlp_curve(well, &options.grid, options.parallel)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_grid_matches_sweep() {
        let rates = RateGrid::default().rates();
        assert_eq!(rates.len(), 20);
        assert_eq!(rates[0], 0.001);
        assert_eq!(rates[19], 400.0);
        assert!(rates.windows(2).all(|w| w[1] > w[0]));
    }

    #[test]
    fn bad_grids_are_rejected() {
        assert!(RateGrid::new(0.0, 100.0, 1).is_err());
        assert!(RateGrid::new(100.0, 10.0, 5).is_err());
        assert!(RateGrid::new(-1.0, 10.0, 5).is_err());
        assert!(RateGrid::new(0.0, f64::INFINITY, 5).is_err());
        assert!(RateGrid::new(0.0, 10.0, 2).is_ok());
    }

    #[test]
    fn curve_requires_increasing_rates() {
        let p = |r| VlpPoint {
            rate_m3_day: r,
            pwf_atm: 50.0,
        };
        assert!(VlpCurve::from_points(vec![p(1.0), p(2.0)]).is_ok());
        assert!(VlpCurve::from_points(vec![p(1.0), p(1.0)]).is_err());
        assert!(VlpCurve::from_points(vec![]).unwrap().is_empty());
    }
}
