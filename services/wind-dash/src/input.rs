//! JSON input documents for the `render` command.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Speeds and directions of one frame, in the configured array order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindInput {
    pub speed: Vec<f64>,
    pub direction: Vec<f64>,
    /// Seconds covered by the arrays. Defaults to one second per sample.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    timespan: Option<f64>,
}

impl WindInput {
    pub fn new(speed: Vec<f64>, direction: Vec<f64>, timespan: f64) -> Self {
        Self {
            speed,
            direction,
            timespan: Some(timespan),
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Invalid wind input document")
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_json(&contents)
    }

    pub fn timespan(&self) -> f64 {
        self.timespan.unwrap_or(self.speed.len() as f64)
    }
}
