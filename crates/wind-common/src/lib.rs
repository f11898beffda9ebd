//! Common types shared across the wind dashboard crates.

pub mod config;
pub mod error;

pub use config::{
    ArrayOrder, DashboardConfig, FontConfig, HistoryMode, WindConvention, MAX_HISTORY_BINS,
    MAX_HISTORY_TICKS,
};
pub use error::{DashboardError, DashboardResult};
