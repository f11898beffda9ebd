//! Summary statistics for wind speed.

use serde::Serialize;
use wind_common::{DashboardError, DashboardResult};

/// Max, mean, population standard deviation and min of a speed series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SpeedSummary {
    pub max: f64,
    pub mean: f64,
    pub std_dev: f64,
    pub min: f64,
}

impl SpeedSummary {
    pub fn from_speeds(speeds: &[f64]) -> DashboardResult<Self> {
        if speeds.is_empty() {
            return Err(DashboardError::InsufficientData(
                "speed summary needs at least one sample".to_string(),
            ));
        }

        let n = speeds.len() as f64;
        let mean = speeds.iter().sum::<f64>() / n;
        let variance = speeds.iter().map(|s| (s - mean).powi(2)).sum::<f64>() / n;
        let max = speeds.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let min = speeds.iter().copied().fold(f64::INFINITY, f64::min);

        Ok(Self {
            max,
            mean,
            std_dev: variance.sqrt(),
            min,
        })
    }

    /// Position of `speed` between min (0.0) and max (1.0).
    ///
    /// A flat series has no range and maps everything to 0.0.
    pub fn scale(&self, speed: f64) -> f64 {
        let range = self.max - self.min;
        if range <= 0.0 {
            return 0.0;
        }
        ((speed - self.min) / range).clamp(0.0, 1.0)
    }
}
