//! Well trajectory: measured depth to true vertical depth.
//!
//! Piecewise-linear through the survey stations, extended linearly past
//! both ends with the first and last segment slopes.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TrajectoryError {
    #[error("MD and TVD sequences differ in length ({md} vs {tvd})")]
    LengthMismatch { md: usize, tvd: usize },

    #[error("Trajectory needs at least two survey stations, got {count}")]
    TooFewStations { count: usize },

    #[error("Non-finite survey value at station {index}")]
    NonFinite { index: usize },

    #[error("Measured depth must be strictly increasing (station {index})")]
    NonIncreasingMd { index: usize },
}

/// Immutable MD -> TVD mapping built from a deviation survey.
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    md: Vec<f64>,
    tvd: Vec<f64>,
}

impl Trajectory {
    pub fn new(md: &[f64], tvd: &[f64]) -> Result<Self, TrajectoryError> {
        if md.len() != tvd.len() {
            return Err(TrajectoryError::LengthMismatch {
                md: md.len(),
                tvd: tvd.len(),
            });
        }
        if md.len() < 2 {
            return Err(TrajectoryError::TooFewStations { count: md.len() });
        }
        for (index, (a, b)) in md.iter().zip(tvd).enumerate() {
            if !a.is_finite() || !b.is_finite() {
                return Err(TrajectoryError::NonFinite { index });
            }
        }
        if let Some(index) = md.windows(2).position(|w| w[1] <= w[0]) {
            return Err(TrajectoryError::NonIncreasingMd { index: index + 1 });
        }

        Ok(Self {
            md: md.to_vec(),
            tvd: tvd.to_vec(),
        })
    }

    /// True vertical depth at a measured depth. Defined for any MD.
    pub fn tvd(&self, md: f64) -> f64 {
        let last = self.md.len() - 1;
        if md == self.md[last] {
            return self.tvd[last];
        }
        // Index of the segment [i, i + 1] used for md; ends extrapolate.
        let i = match self.md.partition_point(|&x| x <= md) {
            0 => 0,
            n if n > last => last - 1,
            n => n - 1,
        };
        let (x0, x1) = (self.md[i], self.md[i + 1]);
        let (y0, y1) = (self.tvd[i], self.tvd[i + 1]);
        y0 + (md - x0) * (y1 - y0) / (x1 - x0)
    }

    /// Sine of the angle to the horizontal between two measured depths,
    /// capped at 1. Returns 0 when the depths coincide.
    pub fn sin_inclination(&self, md1: f64, md2: f64) -> f64 {
        if md1 == md2 {
            return 0.0;
        }
        ((self.tvd(md2) - self.tvd(md1)) / (md2 - md1)).clamp(-1.0, 1.0)
    }

    pub fn measured_depths(&self) -> &[f64] {
        &self.md
    }

    pub fn vertical_depths(&self) -> &[f64] {
        &self.tvd
    }

    pub fn len(&self) -> usize {
        self.md.len()
    }

    pub fn is_empty(&self) -> bool {
        self.md.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn survey() -> Trajectory {
        Trajectory::new(&[0.0, 1000.0, 1500.0], &[0.0, 1000.0, 1100.0]).unwrap()
    }

    #[test]
    fn exact_at_stations() {
        let t = survey();
        assert_eq!(t.tvd(0.0), 0.0);
        assert_eq!(t.tvd(1000.0), 1000.0);
        assert_eq!(t.tvd(1500.0), 1100.0);
    }

    #[test]
    fn interpolates_between_stations() {
        let t = survey();
        assert!((t.tvd(500.0) - 500.0).abs() < 1e-12);
        assert!((t.tvd(1250.0) - 1050.0).abs() < 1e-12);
    }

    #[test]
    fn extrapolates_both_ends() {
        let t = survey();
        assert!((t.tvd(-10.0) + 10.0).abs() < 1e-12);
        assert!((t.tvd(2000.0) - 1200.0).abs() < 1e-12);
    }

    #[test]
    fn inclination_follows_local_slope() {
        let t = survey();
        assert!((t.sin_inclination(100.0, 200.0) - 1.0).abs() < 1e-12);
        assert!((t.sin_inclination(1200.0, 1300.0) - 0.2).abs() < 1e-12);
        assert_eq!(t.sin_inclination(50.0, 50.0), 0.0);
    }

    #[test]
    fn sine_is_capped() {
        // A survey with TVD running ahead of MD is unphysical; cap at vertical.
        let t = Trajectory::new(&[0.0, 10.0], &[0.0, 20.0]).unwrap();
        assert_eq!(t.sin_inclination(1.0, 2.0), 1.0);
    }

    #[test]
    fn rejects_malformed_surveys() {
        assert_eq!(
            Trajectory::new(&[0.0, 1.0], &[0.0]),
            Err(TrajectoryError::LengthMismatch { md: 2, tvd: 1 })
        );
        assert_eq!(
            Trajectory::new(&[0.0], &[0.0]),
            Err(TrajectoryError::TooFewStations { count: 1 })
        );
        assert_eq!(
            Trajectory::new(&[0.0, 5.0, 5.0], &[0.0, 5.0, 6.0]),
            Err(TrajectoryError::NonIncreasingMd { index: 2 })
        );
        assert_eq!(
            Trajectory::new(&[0.0, f64::NAN], &[0.0, 1.0]),
            Err(TrajectoryError::NonFinite { index: 1 })
        );
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn exact_at_every_survey_point(
            steps in prop::collection::vec((0.1_f64..500.0, -1.0_f64..1.0), 1..12)
        ) {
            let mut md = vec![0.0];
            let mut tvd = vec![0.0];
            for (dmd, slope) in &steps {
                md.push(md.last().unwrap() + dmd);
                tvd.push(tvd.last().unwrap() + dmd * slope);
            }
            let t = Trajectory::new(&md, &tvd).unwrap();
            for (x, y) in md.iter().zip(&tvd) {
                let got = t.tvd(*x);
                prop_assert!((got - y).abs() <= 1e-9 * (1.0 + y.abs()), "{} vs {}", got, y);
            }
        }
    }
}
