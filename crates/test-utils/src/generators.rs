//! Test data generators for wind speed/direction series.
//!
//! Series are returned oldest first (`new_last` order), the order sensors
//! usually append readings in.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Parallel speed/direction arrays plus the seconds they cover.
#[derive(Debug, Clone, PartialEq)]
pub struct WindSeries {
    pub speed: Vec<f64>,
    pub direction: Vec<f64>,
    pub timespan: f64,
}

impl WindSeries {
    pub fn len(&self) -> usize {
        self.speed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.speed.is_empty()
    }

    /// Copy of the series with the newest sample first.
    pub fn reversed(&self) -> Self {
        let mut speed = self.speed.clone();
        let mut direction = self.direction.clone();
        speed.reverse();
        direction.reverse();
        Self {
            speed,
            direction,
            timespan: self.timespan,
        }
    }
}

/// Creates a series with a constant speed and direction, one sample per second.
///
/// # Example
///
/// ```
/// use test_utils::constant_series;
///
/// let series = constant_series(10, 5.0, 270.0);
/// assert_eq!(series.len(), 10);
/// assert_eq!(series.timespan, 10.0);
/// ```
pub fn constant_series(len: usize, speed: f64, direction: f64) -> WindSeries {
    WindSeries {
        speed: vec![speed; len],
        direction: vec![direction; len],
        timespan: len as f64,
    }
}

/// Creates a series whose speed ramps linearly from `start` to `end`.
///
/// Directions are all `direction`. One sample per second.
pub fn ramp_series(len: usize, start: f64, end: f64, direction: f64) -> WindSeries {
    let speed = (0..len)
        .map(|i| {
            if len < 2 {
                start
            } else {
                start + (end - start) * i as f64 / (len - 1) as f64
            }
        })
        .collect();

    WindSeries {
        speed,
        direction: vec![direction; len],
        timespan: len as f64,
    }
}

/// Creates directions oscillating around `center` by up to `amplitude` degrees.
///
/// The values are not wrapped, so a center of 0 produces negative directions
/// as well as directions just above 0.
pub fn oscillating_directions(len: usize, center: f64, amplitude: f64) -> Vec<f64> {
    (0..len)
        .map(|i| center + amplitude * (i as f64 * 0.7).sin())
        .collect()
}

/// Creates a reproducible random-walk series like a gusty, veering wind.
///
/// Speed changes by less than 1 m/s per step and is clamped to `[0, 30]`;
/// direction changes by up to `max_veer` degrees per step and is wrapped
/// into `[0, 360)`. One sample per second.
pub fn random_walk_series(len: usize, max_veer: i32, seed: u64) -> WindSeries {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut speed = Vec::with_capacity(len);
    let mut direction = Vec::with_capacity(len);

    if len == 0 {
        return WindSeries {
            speed,
            direction,
            timespan: 0.0,
        };
    }

    speed.push(rng.gen_range(0..=30) as f64);
    direction.push(rng.gen_range(0..360) as f64);

    for n in 1..len {
        let step: f64 = rng.gen::<f64>() * if rng.gen_bool(0.5) { 1.0 } else { -1.0 };
        speed.push((speed[n - 1] + step).clamp(0.0, 30.0));

        let veer = rng.gen_range(-max_veer..=max_veer) as f64;
        direction.push((direction[n - 1] + veer).rem_euclid(360.0));
    }

    WindSeries {
        speed,
        direction,
        timespan: len as f64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ramp_series_endpoints() {
        let series = ramp_series(5, 0.0, 8.0, 90.0);
        assert_eq!(series.speed, vec![0.0, 2.0, 4.0, 6.0, 8.0]);
        assert!(series.direction.iter().all(|&d| d == 90.0));
    }

    #[test]
    fn test_random_walk_bounds() {
        let series = random_walk_series(500, 10, 42);
        assert_eq!(series.len(), 500);
        assert!(series.speed.iter().all(|&s| (0.0..=30.0).contains(&s)));
        assert!(series.direction.iter().all(|&d| (0.0..360.0).contains(&d)));
    }

    #[test]
    fn test_random_walk_reproducible() {
        assert_eq!(random_walk_series(50, 3, 7), random_walk_series(50, 3, 7));
    }

    #[test]
    fn test_reversed() {
        let series = ramp_series(3, 1.0, 3.0, 0.0).reversed();
        assert_eq!(series.speed, vec![3.0, 2.0, 1.0]);
    }
}
