//! Statistics for wind direction and speed series.
//!
//! - Circular mean and spread of direction samples
//! - Origin/heading convention handling
//! - Series windowing: ordering, history clipping and resampling
//! - Linear summary statistics of wind speed

pub mod circular;
pub mod convention;
pub mod series;
pub mod speed;

pub use circular::{circular_mean, circular_spread, CircularStat};
pub use convention::{convention_normalize, normalize_degrees};
pub use series::{Sample, SeriesWindow};
pub use speed::SpeedSummary;
