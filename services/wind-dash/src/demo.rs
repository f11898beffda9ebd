//! Random-walk demo frames.
//!
//! Frame `n` shows the first `n + 1` samples of the walk, one second apart,
//! so the history strip fills up over the first `history_seconds` frames.
//! Frames are rendered in parallel with one [`Dashboard`] per rayon worker.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{anyhow, Context, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use tracing::{debug, info};

use renderer::{Dashboard, FontSet, FrameSummary};
use wind_common::{ArrayOrder, DashboardConfig};

use crate::input::WindInput;

/// Highest speed the random walk reaches, in m/s.
const MAX_SPEED: f64 = 30.0;

#[derive(Debug, Clone)]
pub struct DemoOptions {
    pub frames: usize,
    pub output_dir: PathBuf,
    pub seed: Option<u64>,
    pub max_veer: u32,
}

/// A speed and direction random walk, oldest sample first.
#[derive(Debug, Clone, PartialEq)]
pub struct RandomWalk {
    pub speed: Vec<f64>,
    pub direction: Vec<f64>,
}

impl RandomWalk {
    /// Generate `len` samples. Speed moves by less than 1 m/s per step within
    /// `[0, 30]`; direction veers by at most `max_veer` whole degrees and
    /// wraps into `[0, 360)`.
    pub fn generate(len: usize, max_veer: u32, rng: &mut impl Rng) -> Self {
        let mut speed = Vec::with_capacity(len);
        let mut direction = Vec::with_capacity(len);
        if len == 0 {
            return Self { speed, direction };
        }

        let max_veer = max_veer as i64;
        speed.push(rng.gen_range(0..=30) as f64);
        direction.push(rng.gen_range(0..360) as f64);

        for n in 1..len {
            let step = rng.gen::<f64>() * if rng.gen_bool(0.5) { 1.0 } else { -1.0 };
            speed.push((speed[n - 1] + step).clamp(0.0, MAX_SPEED));

            let veer = rng.gen_range(-max_veer..=max_veer) as f64;
            direction.push((direction[n - 1] + veer).rem_euclid(360.0));
        }

        Self { speed, direction }
    }

    pub fn len(&self) -> usize {
        self.speed.len()
    }

    /// The first `len` samples, arranged in `order`.
    pub fn prefix(&self, len: usize, order: ArrayOrder) -> (Vec<f64>, Vec<f64>) {
        let mut speed = self.speed[..len].to_vec();
        let mut direction = self.direction[..len].to_vec();
        if order == ArrayOrder::NewFirst {
            speed.reverse();
            direction.reverse();
        }
        (speed, direction)
    }
}

pub fn frame_file_name(n: usize) -> String {
    format!("frame_{}.png", n)
}

/// Render the demo frames and write the walk as `series.json` into the
/// output directory.
pub fn run(config: DashboardConfig, options: &DemoOptions) -> Result<()> {
    std::fs::create_dir_all(&options.output_dir).with_context(|| {
        format!(
            "Failed to create output directory {}",
            options.output_dir.display()
        )
    })?;

    let seed = options.seed.unwrap_or_else(rand::random);
    let mut rng = StdRng::seed_from_u64(seed);
    let walk = RandomWalk::generate(options.frames, options.max_veer, &mut rng);

    info!(
        frames = options.frames,
        seed = seed,
        max_veer = options.max_veer,
        output_dir = %options.output_dir.display(),
        "Generating demo"
    );

    let fonts = FontSet::load(&config.fonts).context("Failed to load fonts")?;
    let start = Instant::now();
    let summaries = render_frames(&config, &fonts, &walk, &options.output_dir)?;

    let (speed, direction) = walk.prefix(walk.len(), config.array_order);
    let series = WindInput::new(speed, direction, walk.len() as f64);
    let series_path = options.output_dir.join("series.json");
    std::fs::write(&series_path, serde_json::to_string(&series)?)
        .with_context(|| format!("Failed to write {}", series_path.display()))?;

    info!(
        frames = summaries.len(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "Demo complete"
    );
    Ok(())
}

fn render_frames(
    config: &DashboardConfig,
    fonts: &FontSet,
    walk: &RandomWalk,
    output_dir: &Path,
) -> Result<Vec<FrameSummary>> {
    (0..walk.len())
        .into_par_iter()
        .map_init(
            || Dashboard::with_fonts(config.clone(), fonts.clone()),
            |dashboard, n| {
                let dashboard = dashboard
                    .as_mut()
                    .map_err(|e| anyhow!("Failed to create dashboard: {}", e))?;

                let (speed, direction) = walk.prefix(n + 1, config.array_order);
                let path = output_dir.join(frame_file_name(n));
                let summary = dashboard
                    .generate(&speed, &direction, (n + 1) as f64, &path)
                    .with_context(|| format!("Failed to render frame {}", n))?;

                debug!(frame = n, path = %path.display(), "Frame written");
                Ok(summary)
            },
        )
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_walk_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(11);
        let walk = RandomWalk::generate(2_000, 45, &mut rng);

        assert_eq!(walk.len(), 2_000);
        assert!(walk.speed.iter().all(|s| (0.0..=MAX_SPEED).contains(s)));
        assert!(walk.direction.iter().all(|d| (0.0..360.0).contains(d)));
        for pair in walk.speed.windows(2) {
            assert!((pair[1] - pair[0]).abs() < 1.0);
        }
    }

    #[test]
    fn test_random_walk_is_reproducible() {
        let a = RandomWalk::generate(50, 10, &mut StdRng::seed_from_u64(3));
        let b = RandomWalk::generate(50, 10, &mut StdRng::seed_from_u64(3));
        assert_eq!(a, b);
    }

    #[test]
    fn test_prefix_order() {
        let walk = RandomWalk {
            speed: vec![1.0, 2.0, 3.0],
            direction: vec![10.0, 20.0, 30.0],
        };
        assert_eq!(walk.prefix(2, ArrayOrder::NewLast), (vec![1.0, 2.0], vec![10.0, 20.0]));
        assert_eq!(walk.prefix(2, ArrayOrder::NewFirst), (vec![2.0, 1.0], vec![20.0, 10.0]));
    }

    #[test]
    fn test_run_writes_frames_and_series() {
        let dir = tempfile::tempdir().unwrap();
        let options = DemoOptions {
            frames: 4,
            output_dir: dir.path().join("demo"),
            seed: Some(9),
            max_veer: 10,
        };

        run(DashboardConfig::default(), &options).unwrap();

        for n in 0..4 {
            assert!(options.output_dir.join(frame_file_name(n)).is_file());
        }
        assert!(!options.output_dir.join(frame_file_name(4)).exists());

        let series = WindInput::from_file(&options.output_dir.join("series.json")).unwrap();
        assert_eq!(series.speed.len(), 4);
        assert_eq!(series.timespan(), 4.0);
    }
}
