//! Compass geometry: bearings and radii to pixel coordinates.
//!
//! Bearings use the clock convention: 0° is straight up and angles grow
//! clockwise. Screen y grows downwards, hence the minus sign on the cosine.

use wind_common::WindConvention;

use crate::layout::Point;

/// Arrow shaft length as a fraction of the compass radius.
const SHAFT_RATIO: f64 = 0.9;

/// Arrowhead wings: angle either side of the shaft and length relative to the shaft.
const HEAD_WING_DEGREES: f64 = 5.0;
const HEAD_WING_RATIO: f64 = 0.85;

/// Tail fins: angle either side of the shaft and length relative to the radius.
const TAIL_WING_DEGREES: f64 = 25.0;
const TAIL_WING_RATIO: f64 = 0.2;

/// Tick length beyond the compass circle and extra distance to the label.
const TICK_LENGTH: f64 = 7.0;
const LABEL_DISTANCE: f64 = 9.0;

const CARDINALS: [&str; 4] = ["N", "E", "S", "W"];

/// Project a bearing and radius from `center` to a pixel position.
pub fn project(angle_degrees: f64, radius: f64, center: Point) -> Point {
    let rad = angle_degrees.to_radians();
    Point::new(
        center.x + (rad.sin() * radius).round() as i32,
        center.y - (rad.cos() * radius).round() as i32,
    )
}

/// Visual style of the direction arrow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrowStyle {
    /// Arrowhead at the tip: the arrow shows where the wind goes.
    Heading,
    /// Tail fins at the center: the arrow shows where the wind comes from.
    Origin,
}

impl From<WindConvention> for ArrowStyle {
    fn from(convention: WindConvention) -> Self {
        match convention {
            WindConvention::Heading => Self::Heading,
            WindConvention::Origin => Self::Origin,
        }
    }
}

/// Pixel coordinates of the direction arrow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArrowGeometry {
    /// Start of the shaft (the compass center).
    pub center: Point,
    /// End of the shaft.
    pub shaft_end: Point,
    pub wing_left: Point,
    pub wing_right: Point,
    /// Point both wings are drawn to: the shaft tip or the center.
    pub wing_anchor: Point,
}

/// One cardinal tick on the compass ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompassTick {
    pub tick_end: Point,
    pub label_anchor: Point,
    pub label: &'static str,
}

/// Start and end angles of the uncertainty wedge.
///
/// The `- 90` rebases the compass bearing (0° up) onto the drawing
/// primitive's angle (0° right, clockwise). No wraparound is applied.
pub fn pie_wedge_bounds(mean_degrees: f64, spread_degrees: f64) -> (f64, f64) {
    (
        mean_degrees - spread_degrees - 90.0,
        mean_degrees + spread_degrees - 90.0,
    )
}

/// Projects compass elements around a fixed center and radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompassProjector {
    pub center: Point,
    pub radius: f64,
}

impl CompassProjector {
    pub fn new(center: Point, radius: f64) -> Self {
        Self { center, radius }
    }

    /// Project a bearing at `radius` from the compass center.
    pub fn project(&self, angle_degrees: f64, radius: f64) -> Point {
        project(angle_degrees, radius, self.center)
    }

    /// Arrow for a display direction, rotated by the calibration offset.
    pub fn arrow(&self, direction: f64, calibration: f64, style: ArrowStyle) -> ArrowGeometry {
        let angle = direction - calibration;
        let shaft_len = self.radius * SHAFT_RATIO;
        let shaft_end = self.project(angle, shaft_len);

        let (wing_left, wing_right, wing_anchor) = match style {
            ArrowStyle::Heading => {
                let wing_len = shaft_len * HEAD_WING_RATIO;
                (
                    self.project(angle - HEAD_WING_DEGREES, wing_len),
                    self.project(angle + HEAD_WING_DEGREES, wing_len),
                    shaft_end,
                )
            }
            ArrowStyle::Origin => {
                let wing_len = self.radius * TAIL_WING_RATIO;
                (
                    self.project(angle - TAIL_WING_DEGREES, wing_len),
                    self.project(angle + TAIL_WING_DEGREES, wing_len),
                    self.center,
                )
            }
        };

        ArrowGeometry {
            center: self.center,
            shaft_end,
            wing_left,
            wing_right,
            wing_anchor,
        }
    }

    /// Cardinal ticks N, E, S, W rotated by the calibration offset.
    pub fn ticks(&self, calibration: f64) -> [CompassTick; 4] {
        let tick_radius = self.radius + TICK_LENGTH;
        let label_radius = tick_radius + LABEL_DISTANCE;

        std::array::from_fn(|a| {
            let angle = a as f64 * 90.0 - calibration;
            CompassTick {
                tick_end: self.project(angle, tick_radius),
                label_anchor: self.project(angle, label_radius),
                label: CARDINALS[a],
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_cardinals() {
        let c = Point::new(125, 125);
        assert_eq!(project(0.0, 95.0, c), Point::new(125, 30));
        assert_eq!(project(90.0, 95.0, c), Point::new(220, 125));
        assert_eq!(project(180.0, 95.0, c), Point::new(125, 220));
        assert_eq!(project(270.0, 95.0, c), Point::new(30, 125));
    }

    #[test]
    fn test_wedge_bounds() {
        assert_eq!(pie_wedge_bounds(0.0, 10.0), (-100.0, -80.0));
        assert_eq!(pie_wedge_bounds(350.0, 20.0), (240.0, 280.0));
    }
}
