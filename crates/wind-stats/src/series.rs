//! Normalization of raw speed/direction arrays into a display window.
//!
//! A [`SeriesWindow`] always stores the most recent sample at index 0, holds
//! at most `history_seconds` worth of samples, and carries directions already
//! converted to the configured output convention.

use serde::Serialize;
use tracing::debug;
use wind_common::{ArrayOrder, DashboardConfig, DashboardError, DashboardResult};

use crate::convention::convention_normalize;

/// One wind reading.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Sample {
    /// Wind speed (m/s).
    pub speed: f64,
    /// Direction in degrees, `[0, 360)`, output convention.
    pub direction: f64,
}

/// Ordered, clipped wind series for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesWindow {
    speeds: Vec<f64>,
    directions: Vec<f64>,
    timespan: f64,
}

impl SeriesWindow {
    /// Build a window from caller-supplied arrays.
    ///
    /// # Arguments
    /// * `speeds` - Wind speeds, ordered per `config.array_order`
    /// * `directions` - Wind directions in degrees, `config.in_wind_dir` convention
    /// * `timespan` - Seconds covered by the whole arrays
    /// * `config` - Dashboard configuration (order, history, conventions)
    ///
    /// # Errors
    /// Fails on empty arrays, mismatched lengths, or a negative/non-finite timespan.
    pub fn normalize(
        speeds: &[f64],
        directions: &[f64],
        timespan: f64,
        config: &DashboardConfig,
    ) -> DashboardResult<Self> {
        if speeds.len() != directions.len() {
            return Err(DashboardError::LengthMismatch {
                speeds: speeds.len(),
                directions: directions.len(),
            });
        }

        if speeds.is_empty() {
            return Err(DashboardError::InsufficientData(
                "speed and direction arrays are empty".to_string(),
            ));
        }

        if !timespan.is_finite() || timespan < 0.0 {
            return Err(DashboardError::InvalidTimespan(timespan));
        }

        let mut speeds = speeds.to_vec();
        let mut directions = directions.to_vec();

        if config.array_order == ArrayOrder::NewLast {
            speeds.reverse();
            directions.reverse();
        }

        let history = config.history();
        let mut timespan = timespan;
        if timespan > history {
            // Keep at least the current sample
            let keep = ((speeds.len() as f64 * history / timespan) as usize).max(1);
            debug!(
                samples = speeds.len(),
                keep = keep,
                timespan = timespan,
                history = history,
                "Clipping series to history horizon"
            );
            speeds.truncate(keep);
            directions.truncate(keep);
            timespan = history;
        }

        for direction in directions.iter_mut() {
            *direction = convention_normalize(*direction, config.in_wind_dir, config.out_wind_dir);
        }

        Ok(Self {
            speeds,
            directions,
            timespan,
        })
    }

    /// The most recent sample.
    pub fn current(&self) -> Sample {
        Sample {
            speed: self.speeds[0],
            direction: self.directions[0],
        }
    }

    /// Speeds, most recent first.
    pub fn speeds(&self) -> &[f64] {
        &self.speeds
    }

    /// Directions in the output convention, most recent first.
    pub fn directions(&self) -> &[f64] {
        &self.directions
    }

    /// Seconds covered by the window.
    pub fn timespan(&self) -> f64 {
        self.timespan
    }

    /// Number of samples; never zero.
    pub fn len(&self) -> usize {
        self.speeds.len()
    }

    /// Always false, a window holds at least one sample.
    pub fn is_empty(&self) -> bool {
        self.speeds.is_empty()
    }

    /// Age in seconds of the sample at `index`.
    ///
    /// Samples are evenly spaced over `[0, timespan]`.
    pub fn age_of(&self, index: usize) -> f64 {
        if self.len() < 2 {
            return 0.0;
        }
        self.timespan * index as f64 / (self.len() - 1) as f64
    }

    /// Resample speeds to `bins` evenly spaced ages over `[0, history]`.
    ///
    /// Linear interpolation between neighbouring samples; ages past the end of
    /// the window take the oldest speed. Use [`covered_bins`](Self::covered_bins)
    /// to find how many bins are backed by data.
    pub fn resample(&self, history: f64, bins: usize) -> Vec<f64> {
        let oldest = self.speeds[self.len() - 1];

        (0..bins)
            .map(|b| {
                let age = if bins > 1 {
                    history * b as f64 / (bins - 1) as f64
                } else {
                    0.0
                };

                if self.len() < 2 || self.timespan <= 0.0 {
                    return self.speeds[0];
                }

                let step = self.timespan / (self.len() - 1) as f64;
                let pos = age / step;
                let i = pos.floor() as usize;
                if i >= self.len() - 1 {
                    return oldest;
                }

                let frac = pos - i as f64;
                self.speeds[i] * (1.0 - frac) + self.speeds[i + 1] * frac
            })
            .collect()
    }

    /// Number of leading bins (out of `bins` over `history`) covered by the window.
    pub fn covered_bins(&self, history: f64, bins: usize) -> usize {
        if history <= 0.0 {
            return bins;
        }
        let reach = bins as f64 * self.timespan / history;
        ((reach.floor() as usize) + 1).min(bins)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_first() -> DashboardConfig {
        DashboardConfig {
            array_order: ArrayOrder::NewFirst,
            ..Default::default()
        }
    }

    #[test]
    fn test_age_of_evenly_spaced() {
        let window = SeriesWindow::normalize(&[1.0, 2.0, 3.0], &[0.0; 3], 10.0, &new_first()).unwrap();
        assert_eq!(window.age_of(0), 0.0);
        assert_eq!(window.age_of(1), 5.0);
        assert_eq!(window.age_of(2), 10.0);
    }

    #[test]
    fn test_resample_single_sample() {
        let window = SeriesWindow::normalize(&[7.5], &[90.0], 1.0, &new_first()).unwrap();
        assert_eq!(window.resample(120.0, 4), vec![7.5; 4]);
    }

    #[test]
    fn test_covered_bins() {
        let window = SeriesWindow::normalize(&[1.0; 10], &[0.0; 10], 60.0, &new_first()).unwrap();
        assert_eq!(window.covered_bins(120.0, 20), 11);
        assert_eq!(window.covered_bins(60.0, 20), 20);

        let window = SeriesWindow::normalize(&[1.0], &[0.0], 0.0, &new_first()).unwrap();
        assert_eq!(window.covered_bins(120.0, 20), 1);
    }
}
