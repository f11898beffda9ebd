//! Wind dashboard command-line tool.
//!
//! - `render`: draw one frame from a JSON document of speeds and directions
//! - `demo`: render a random-walk series as a batch of numbered PNG frames

mod demo;
mod input;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args as ClapArgs, Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use renderer::Dashboard;
use wind_common::{ArrayOrder, DashboardConfig, HistoryMode, WindConvention};

#[derive(Parser, Debug)]
#[command(name = "wind-dash")]
#[command(about = "Render wind speed and direction dashboards")]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// YAML configuration file (defaults come from DASH_* variables)
    #[arg(long, global = true, env = "DASH_CONFIG")]
    config: Option<PathBuf>,

    #[command(flatten)]
    overrides: ConfigOverrides,

    /// Log level
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    json_logs: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a single frame from a JSON input file
    Render {
        /// JSON document: {"speed": [...], "direction": [...], "timespan": s}
        #[arg(short, long)]
        input: PathBuf,

        /// Output PNG path
        #[arg(short, long, default_value = "wind.png")]
        output: PathBuf,
    },

    /// Render frames for a random-walk series
    Demo {
        /// Number of frames
        #[arg(long, default_value = "180")]
        frames: usize,

        /// Directory for the frames and the series JSON
        #[arg(long, default_value = "demo")]
        output_dir: PathBuf,

        /// Seed for the random walk (random when omitted)
        #[arg(long)]
        seed: Option<u64>,

        /// Largest direction change between consecutive samples, in degrees
        #[arg(long, default_value = "10")]
        max_veer: u32,
    },
}

/// Command-line overrides applied on top of the file or environment config.
#[derive(ClapArgs, Debug, Default)]
struct ConfigOverrides {
    /// History horizon in seconds
    #[arg(long, global = true)]
    history: Option<u32>,

    /// Order of samples in the input arrays (new_first or new_last)
    #[arg(long, global = true)]
    array_order: Option<ArrayOrder>,

    /// Convention of the input directions (origin or heading)
    #[arg(long, global = true)]
    in_wind_dir: Option<WindConvention>,

    /// Convention of the displayed directions (origin or heading)
    #[arg(long, global = true)]
    out_wind_dir: Option<WindConvention>,

    /// Sensor calibration offset in degrees
    #[arg(long, global = true, allow_hyphen_values = true)]
    calibration: Option<i32>,

    /// Resample the speed history into this many bins (0 draws every sample)
    #[arg(long, global = true)]
    history_bins: Option<usize>,

    /// Regular TrueType font
    #[arg(long, global = true)]
    font_regular: Option<PathBuf>,

    /// Bold TrueType font
    #[arg(long, global = true)]
    font_bold: Option<PathBuf>,
}

impl ConfigOverrides {
    fn apply(self, mut config: DashboardConfig) -> DashboardConfig {
        if let Some(history) = self.history {
            config.history_seconds = history;
        }
        if let Some(order) = self.array_order {
            config.array_order = order;
        }
        if let Some(dir) = self.in_wind_dir {
            config.in_wind_dir = dir;
        }
        if let Some(dir) = self.out_wind_dir {
            config.out_wind_dir = dir;
        }
        if let Some(calibration) = self.calibration {
            config.calibration_degrees = calibration;
        }
        if let Some(bins) = self.history_bins {
            config.history_mode = match bins {
                0 => HistoryMode::PerSample,
                bins => HistoryMode::Binned { bins },
            };
        }
        if self.font_regular.is_some() {
            config.fonts.regular = self.font_regular;
        }
        if self.font_bold.is_some() {
            config.fonts.bold = self.font_bold;
        }
        config
    }
}

fn main() -> Result<()> {
    // Load environment from .env file if present
    dotenvy::dotenv().ok();

    let args = Args::parse();
    init_tracing(&args.log_level, args.json_logs);

    let base = match &args.config {
        Some(path) => DashboardConfig::from_yaml_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => DashboardConfig::from_env(),
    };
    let config = args.overrides.apply(base);
    config.validate().context("Invalid dashboard configuration")?;

    match args.command {
        Command::Render { input, output } => render(config, &input, &output),
        Command::Demo {
            frames,
            output_dir,
            seed,
            max_veer,
        } => demo::run(
            config,
            &demo::DemoOptions {
                frames,
                output_dir,
                seed,
                max_veer,
            },
        ),
    }
}

fn init_tracing(log_level: &str, json: bool) {
    // RUST_LOG wins over --log-level
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let builder = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn render(config: DashboardConfig, input: &Path, output: &Path) -> Result<()> {
    let series = input::WindInput::from_file(input)?;

    let mut dashboard = Dashboard::new(config).context("Failed to create dashboard")?;
    let summary = dashboard
        .generate(&series.speed, &series.direction, series.timespan(), output)
        .with_context(|| format!("Failed to render {}", output.display()))?;

    info!(
        output = %output.display(),
        samples = summary.samples,
        direction = summary.current.direction,
        speed = summary.current.speed,
        "Frame written"
    );

    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_replace_only_given_fields() {
        let overrides = ConfigOverrides {
            calibration: Some(-45),
            history_bins: Some(24),
            ..Default::default()
        };
        let config = overrides.apply(DashboardConfig {
            history_seconds: 300,
            ..Default::default()
        });

        assert_eq!(config.history_seconds, 300);
        assert_eq!(config.calibration_degrees, -45);
        assert_eq!(config.history_mode, HistoryMode::Binned { bins: 24 });
        assert_eq!(config.out_wind_dir, WindConvention::Heading);
    }

    #[test]
    fn test_zero_bins_selects_per_sample() {
        let overrides = ConfigOverrides {
            history_bins: Some(0),
            ..Default::default()
        };
        let config = overrides.apply(DashboardConfig {
            history_mode: HistoryMode::Binned { bins: 10 },
            ..Default::default()
        });
        assert_eq!(config.history_mode, HistoryMode::PerSample);
    }

    #[test]
    fn test_cli_parses_demo() {
        let args = Args::try_parse_from([
            "wind-dash",
            "--calibration",
            "-30",
            "demo",
            "--frames",
            "20",
            "--in-wind-dir",
            "origin",
        ])
        .unwrap();

        assert_eq!(args.overrides.calibration, Some(-30));
        assert_eq!(args.overrides.in_wind_dir, Some(WindConvention::Origin));
        assert!(matches!(args.command, Command::Demo { frames: 20, .. }));
    }
}
