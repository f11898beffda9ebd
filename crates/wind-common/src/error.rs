//! Error types for the wind dashboard.

use thiserror::Error;

/// Result type alias using DashboardError.
pub type DashboardResult<T> = Result<T, DashboardError>;

/// Primary error type for dashboard operations.
#[derive(Debug, Error)]
pub enum DashboardError {
    // === Input Errors ===
    #[error("Insufficient data: {0}")]
    InsufficientData(String),

    #[error("Speed and direction arrays differ in length ({speeds} vs {directions})")]
    LengthMismatch { speeds: usize, directions: usize },

    #[error("Invalid timespan: {0} seconds")]
    InvalidTimespan(f64),

    // === Configuration Errors ===
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Failed to load font '{path}': {message}")]
    FontLoad { path: String, message: String },

    // === Output Errors ===
    #[error("Image encoding failed: {0}")]
    Encode(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl DashboardError {
    /// True when the error was caused by the caller's series data rather than
    /// configuration or output problems.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            DashboardError::InsufficientData(_)
                | DashboardError::LengthMismatch { .. }
                | DashboardError::InvalidTimespan(_)
        )
    }
}

impl From<serde_yaml::Error> for DashboardError {
    fn from(err: serde_yaml::Error) -> Self {
        DashboardError::InvalidConfig(format!("YAML error: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_mismatch_message() {
        let err = DashboardError::LengthMismatch {
            speeds: 3,
            directions: 4,
        };
        assert_eq!(
            err.to_string(),
            "Speed and direction arrays differ in length (3 vs 4)"
        );
    }

    #[test]
    fn test_input_error_classification() {
        assert!(DashboardError::InsufficientData("empty".into()).is_input_error());
        assert!(DashboardError::InvalidTimespan(-1.0).is_input_error());
        assert!(!DashboardError::InvalidConfig("bad".into()).is_input_error());
        assert!(!DashboardError::Encode("zlib".into()).is_input_error());
    }
}
