//! Circular statistics for wind directions.
//!
//! Directions cannot be averaged linearly: the mean of 359° and 1° is 0°, not
//! 180°. Each direction is decomposed into the unit-vector components
//! `u = sin θ` and `v = cos θ`, the components are aggregated independently
//! and recombined with `atan(u / v)` plus a quadrant correction.
//!
//! The spread is the dashboard's own dispersion estimate: the population
//! standard deviations of `u` and `v` fed back through the same `atan`
//! reduction. It is not the textbook circular standard deviation.

use serde::Serialize;
use tracing::debug;
use wind_common::{DashboardError, DashboardResult};

use crate::convention::normalize_degrees;

/// Below this magnitude a component aggregate is treated as zero.
const DEGENERATE_EPSILON: f64 = 1e-9;

/// Mean bearing and angular spread of a direction window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CircularStat {
    /// Mean direction in `[0, 360)`.
    pub mean_degrees: f64,
    /// Half-width of the uncertainty wedge, `>= 0`.
    pub spread_degrees: f64,
}

impl CircularStat {
    /// Compute mean and spread in one pass over the directions.
    ///
    /// The first element is used as the fallback mean when the directions
    /// cancel out; in a normalized [`SeriesWindow`](crate::SeriesWindow) that
    /// is the most recent sample.
    pub fn from_directions(directions: &[f64]) -> DashboardResult<Self> {
        let moments = ComponentMoments::from_directions(directions)?;
        let mean_degrees = moments.mean().unwrap_or_else(|| {
            debug!(
                samples = directions.len(),
                "Directions cancel out, using most recent direction as mean"
            );
            normalize_degrees(directions[0])
        });

        Ok(Self {
            mean_degrees,
            spread_degrees: moments.spread(),
        })
    }
}

/// Circular mean of directions in degrees, in `[0, 360)`.
pub fn circular_mean(directions: &[f64]) -> DashboardResult<f64> {
    CircularStat::from_directions(directions).map(|stat| stat.mean_degrees)
}

/// Circular spread of directions in degrees, `>= 0`.
pub fn circular_spread(directions: &[f64]) -> DashboardResult<f64> {
    ComponentMoments::from_directions(directions).map(|m| m.spread())
}

/// First and second moments of the unit-vector components.
#[derive(Debug, Clone, Copy)]
struct ComponentMoments {
    u_mean: f64,
    v_mean: f64,
    u_std: f64,
    v_std: f64,
}

impl ComponentMoments {
    fn from_directions(directions: &[f64]) -> DashboardResult<Self> {
        if directions.is_empty() {
            return Err(DashboardError::InsufficientData(
                "circular statistics need at least one direction".to_string(),
            ));
        }

        let n = directions.len() as f64;
        let (u, v): (Vec<f64>, Vec<f64>) = directions
            .iter()
            .map(|d| {
                let rad = d.to_radians();
                (rad.sin(), rad.cos())
            })
            .unzip();

        let u_mean = u.iter().sum::<f64>() / n;
        let v_mean = v.iter().sum::<f64>() / n;
        let u_std = (u.iter().map(|x| (x - u_mean).powi(2)).sum::<f64>() / n).sqrt();
        let v_std = (v.iter().map(|x| (x - v_mean).powi(2)).sum::<f64>() / n).sqrt();

        Ok(Self {
            u_mean,
            v_mean,
            u_std,
            v_std,
        })
    }

    /// Mean bearing, or `None` when the mean vector vanishes.
    fn mean(&self) -> Option<f64> {
        let (u, v) = (self.u_mean, self.v_mean);

        if u.hypot(v) < DEGENERATE_EPSILON {
            return None;
        }

        // atan(u / v) is undefined on the east-west axis
        if v == 0.0 {
            return Some(if u > 0.0 { 90.0 } else { 270.0 });
        }

        let mut mean = (u / v).atan().to_degrees();
        if v < 0.0 {
            mean += 180.0;
        } else if u < 0.0 {
            mean += 360.0;
        }

        Some(normalize_degrees(mean))
    }

    fn spread(&self) -> f64 {
        if self.u_std.hypot(self.v_std) < DEGENERATE_EPSILON {
            return 0.0;
        }

        let spread = (self.u_std / self.v_std).atan().to_degrees();
        if spread.is_nan() || spread < 0.0 {
            0.0
        } else {
            spread
        }
    }
}
