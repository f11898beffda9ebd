//! Configuration for the wind dashboard.
//!
//! A [`DashboardConfig`] is fixed when a dashboard is constructed and never
//! changes afterwards. It can be built from defaults, environment variables
//! (`DASH_*`) or a YAML file.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{DashboardError, DashboardResult};

/// Upper bound for `history_ticks`; more would not fit under the strip.
pub const MAX_HISTORY_TICKS: u32 = 50;

/// Upper bound for binned history; the strip is a few hundred pixels wide.
pub const MAX_HISTORY_BINS: usize = 1000;

/// Order of the samples in the caller's arrays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArrayOrder {
    /// Newest sample at index 0.
    NewFirst,
    /// Newest sample at the end of the array.
    #[default]
    NewLast,
}

impl FromStr for ArrayOrder {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "new_first" | "new-first" => Ok(Self::NewFirst),
            "new_last" | "new-last" => Ok(Self::NewLast),
            other => Err(DashboardError::InvalidConfig(format!(
                "unknown array order '{}' (expected new_first or new_last)",
                other
            ))),
        }
    }
}

/// Wind direction convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WindConvention {
    /// Direction the wind blows from.
    Origin,
    /// Direction the wind blows towards.
    #[default]
    Heading,
}

impl WindConvention {
    /// Header text shown above the direction readout.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Origin => "Origin",
            Self::Heading => "Heading",
        }
    }
}

impl fmt::Display for WindConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Origin => write!(f, "origin"),
            Self::Heading => write!(f, "heading"),
        }
    }
}

impl FromStr for WindConvention {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "origin" | "from" => Ok(Self::Origin),
            "heading" | "to" => Ok(Self::Heading),
            other => Err(DashboardError::InvalidConfig(format!(
                "unknown wind direction convention '{}' (expected origin or heading)",
                other
            ))),
        }
    }
}

/// How the speed-history strip is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum HistoryMode {
    /// One bar per raw sample, placed by its age.
    #[default]
    PerSample,
    /// Resample to a fixed number of bars.
    Binned { bins: usize },
}

/// Font files used for the dashboard text.
///
/// Both are optional; an unset face uses the font embedded in the renderer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontConfig {
    /// Font for labels and small text.
    pub regular: Option<PathBuf>,
    /// Font for the large speed/direction readout (falls back to `regular`).
    pub bold: Option<PathBuf>,
}

/// Configuration for a dashboard instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Seconds of history used in statistics and the history strip.
    pub history_seconds: u32,

    /// Whether new samples are at the start or the end of the input arrays.
    pub array_order: ArrayOrder,

    /// Convention of the input direction values.
    pub in_wind_dir: WindConvention,

    /// Convention used for everything displayed.
    pub out_wind_dir: WindConvention,

    /// Rotation of the sensor housing in degrees; this bearing is drawn straight up.
    pub calibration_degrees: i32,

    /// Speed-history strip drawing mode.
    pub history_mode: HistoryMode,

    /// Number of age ticks under the history strip.
    pub history_ticks: u32,

    /// Font files.
    pub fonts: FontConfig,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            history_seconds: 120,
            array_order: ArrayOrder::NewLast,
            in_wind_dir: WindConvention::Heading,
            out_wind_dir: WindConvention::Heading,
            calibration_degrees: 0,
            history_mode: HistoryMode::PerSample,
            history_ticks: 5,
            fonts: FontConfig::default(),
        }
    }
}

impl DashboardConfig {
    /// Load configuration from environment variables.
    ///
    /// Unset variables keep their defaults; unparseable values are logged and ignored.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(history) = env_parse::<u32>("DASH_HISTORY_SECONDS") {
            config.history_seconds = history;
        }

        if let Some(order) = env_parse::<ArrayOrder>("DASH_ARRAY_ORDER") {
            config.array_order = order;
        }

        if let Some(convention) = env_parse::<WindConvention>("DASH_IN_WIND_DIR") {
            config.in_wind_dir = convention;
        }

        if let Some(convention) = env_parse::<WindConvention>("DASH_OUT_WIND_DIR") {
            config.out_wind_dir = convention;
        }

        if let Some(calibration) = env_parse::<i32>("DASH_CALIBRATION") {
            config.calibration_degrees = calibration;
        }

        if let Some(bins) = env_parse::<usize>("DASH_HISTORY_BINS") {
            config.history_mode = if bins == 0 {
                HistoryMode::PerSample
            } else {
                HistoryMode::Binned { bins }
            };
        }

        if let Ok(path) = std::env::var("DASH_FONT_REGULAR") {
            config.fonts.regular = Some(PathBuf::from(path));
        }

        if let Ok(path) = std::env::var("DASH_FONT_BOLD") {
            config.fonts.bold = Some(PathBuf::from(path));
        }

        config
    }

    /// Parse configuration from a YAML document. Missing keys keep their defaults.
    pub fn from_yaml_str(yaml: &str) -> DashboardResult<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> DashboardResult<Self> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        Self::from_yaml_str(&contents)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> DashboardResult<()> {
        if self.history_seconds == 0 {
            return Err(DashboardError::InvalidConfig(
                "history_seconds must be > 0".to_string(),
            ));
        }

        if !(2..=MAX_HISTORY_TICKS).contains(&self.history_ticks) {
            return Err(DashboardError::InvalidConfig(format!(
                "history_ticks must be between 2 and {}",
                MAX_HISTORY_TICKS
            )));
        }

        if let HistoryMode::Binned { bins } = self.history_mode {
            if !(2..=MAX_HISTORY_BINS).contains(&bins) {
                return Err(DashboardError::InvalidConfig(format!(
                    "binned history needs between 2 and {} bins",
                    MAX_HISTORY_BINS
                )));
            }
        }

        Ok(())
    }

    /// History horizon in seconds as a float.
    pub fn history(&self) -> f64 {
        self.history_seconds as f64
    }
}

fn env_parse<T>(key: &str) -> Option<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    let raw = std::env::var(key).ok()?;
    match raw.parse() {
        Ok(value) => Some(value),
        Err(e) => {
            warn!(key = key, value = %raw, error = %e, "Ignoring invalid environment value");
            None
        }
    }
}
