//! Tests for compass geometry.

use renderer::geometry::{pie_wedge_bounds, project, ArrowStyle, CompassProjector};
use renderer::layout::Point;
use wind_common::WindConvention;

const CENTER: Point = Point::new(125, 125);
const RADIUS: f64 = 95.0;

fn projector() -> CompassProjector {
    CompassProjector::new(CENTER, RADIUS)
}

// ============================================================================
// project
// ============================================================================

#[test]
fn test_project_straight_up() {
    assert_eq!(project(0.0, 50.0, CENTER), Point::new(CENTER.x, CENTER.y - 50));
}

#[test]
fn test_project_straight_right() {
    assert_eq!(project(90.0, 50.0, CENTER), Point::new(CENTER.x + 50, CENTER.y));
}

#[test]
fn test_project_full_turn_equivalent() {
    for angle in [0.0, 33.0, 145.0, 260.0] {
        assert_eq!(project(angle, RADIUS, CENTER), project(angle + 360.0, RADIUS, CENTER));
        assert_eq!(project(angle, RADIUS, CENTER), project(angle - 720.0, RADIUS, CENTER));
    }
}

#[test]
fn test_project_zero_radius_is_center() {
    assert_eq!(project(123.0, 0.0, CENTER), CENTER);
}

#[test]
fn test_project_rounds_to_nearest_pixel() {
    // sin(45°) * 10 = 7.07 -> 7
    assert_eq!(project(45.0, 10.0, Point::new(0, 0)), Point::new(7, -7));
}

// ============================================================================
// arrow
// ============================================================================

#[test]
fn test_heading_arrow_wings_meet_at_tip() {
    let arrow = projector().arrow(0.0, 0.0, ArrowStyle::Heading);

    // 0.9 * 95 = 85.5 rounds to 86
    assert_eq!(arrow.shaft_end, Point::new(125, 125 - 86));
    assert_eq!(arrow.wing_anchor, arrow.shaft_end);
    assert_eq!(arrow.center, CENTER);

    // Wings are 0.85 of the shaft (0.765 of the radius), 5° either side
    let wing_len = RADIUS * 0.9 * 0.85;
    assert_eq!(arrow.wing_left, project(-5.0, wing_len, CENTER));
    assert_eq!(arrow.wing_right, project(5.0, wing_len, CENTER));
    // 72.675 px at 5°: 6.33 across, 72.40 up
    assert_eq!(arrow.wing_left, Point::new(119, 53));
    assert_eq!(arrow.wing_right, Point::new(131, 53));
}

#[test]
fn test_origin_arrow_fins_meet_at_center() {
    let arrow = projector().arrow(90.0, 0.0, ArrowStyle::Origin);

    assert_eq!(arrow.shaft_end, Point::new(125 + 86, 125));
    assert_eq!(arrow.wing_anchor, CENTER);

    // Fins are short (0.2 * radius = 19 px) and spread ±25° around east
    let fin = project(65.0, 19.0, CENTER);
    assert_eq!(arrow.wing_left, fin);
    assert_eq!(arrow.wing_right, project(115.0, 19.0, CENTER));
}

#[test]
fn test_arrow_calibration_rotates_counterclockwise() {
    let calibrated = projector().arrow(100.0, 10.0, ArrowStyle::Heading);
    let plain = projector().arrow(90.0, 0.0, ArrowStyle::Heading);
    assert_eq!(calibrated, plain);
}

#[test]
fn test_arrow_style_from_convention() {
    assert_eq!(ArrowStyle::from(WindConvention::Heading), ArrowStyle::Heading);
    assert_eq!(ArrowStyle::from(WindConvention::Origin), ArrowStyle::Origin);
}

// ============================================================================
// ticks and wedge
// ============================================================================

#[test]
fn test_ticks_uncalibrated() {
    let ticks = projector().ticks(0.0);
    let labels: Vec<&str> = ticks.iter().map(|t| t.label).collect();
    assert_eq!(labels, vec!["N", "E", "S", "W"]);

    assert_eq!(ticks[0].tick_end, Point::new(125, 125 - 102));
    assert_eq!(ticks[0].label_anchor, Point::new(125, 125 - 111));
    assert_eq!(ticks[1].tick_end, Point::new(125 + 102, 125));
    assert_eq!(ticks[2].tick_end, Point::new(125, 125 + 102));
    assert_eq!(ticks[3].tick_end, Point::new(125 - 102, 125));
}

#[test]
fn test_ticks_calibrated_by_90() {
    // Sensor mounted pointing east: east is drawn straight up
    let ticks = projector().ticks(90.0);
    assert_eq!(ticks[1].label, "E");
    assert_eq!(ticks[1].tick_end, Point::new(125, 125 - 102));
    assert_eq!(ticks[0].tick_end, Point::new(125 - 102, 125));
}

#[test]
fn test_wedge_bounds_symmetric_about_mean() {
    let (start, end) = pie_wedge_bounds(45.0, 15.0);
    assert_eq!(start, -60.0);
    assert_eq!(end, -30.0);
    assert_eq!((start + end) / 2.0, 45.0 - 90.0);
}

#[test]
fn test_wedge_bounds_not_wrapped() {
    let (start, end) = pie_wedge_bounds(5.0, 30.0);
    assert_eq!(start, -115.0);
    assert_eq!(end, -55.0);
}
