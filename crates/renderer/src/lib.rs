//! Image rendering for the wind dashboard.
//!
//! Implements:
//! - Compass geometry (bearing to pixel projection, arrows, ticks, wedges)
//! - Drawing primitives and their rasterization onto a grayscale canvas
//! - Grayscale PNG encoding
//! - The dashboard frame renderer

pub mod dashboard;
pub mod fonts;
pub mod geometry;
pub mod layout;
pub mod png;
pub mod primitives;
pub mod raster;

pub use dashboard::{Dashboard, Frame, FrameSummary};
pub use fonts::FontSet;
pub use geometry::{project, ArrowGeometry, ArrowStyle, CompassProjector, CompassTick};
pub use layout::{DashboardLayout, Point, Rect};
pub use primitives::{DrawList, FontFace, Primitive};
