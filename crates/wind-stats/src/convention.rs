//! Angle normalization and origin/heading conversion.

use wind_common::WindConvention;

/// Wrap an angle in degrees into `[0, 360)`.
pub fn normalize_degrees(degrees: f64) -> f64 {
    let wrapped = degrees.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Convert a direction between conventions.
///
/// Origin and heading differ by 180°. The result is always wrapped into
/// `[0, 360)`, also when both conventions are the same.
pub fn convention_normalize(
    direction: f64,
    input: WindConvention,
    output: WindConvention,
) -> f64 {
    if input != output {
        normalize_degrees(direction - 180.0)
    } else {
        normalize_degrees(direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use WindConvention::{Heading, Origin};

    #[test]
    fn test_normalize_degrees() {
        assert_eq!(normalize_degrees(0.0), 0.0);
        assert_eq!(normalize_degrees(360.0), 0.0);
        assert_eq!(normalize_degrees(-90.0), 270.0);
        assert_eq!(normalize_degrees(725.0), 5.0);
        assert_eq!(normalize_degrees(-1e-20), 0.0);
    }

    #[test]
    fn test_origin_to_heading() {
        assert_eq!(convention_normalize(30.0, Origin, Heading), 210.0);
        assert_eq!(convention_normalize(200.0, Heading, Origin), 20.0);
        assert_eq!(convention_normalize(180.0, Origin, Heading), 0.0);
    }

    #[test]
    fn test_same_convention_is_identity() {
        assert_eq!(convention_normalize(123.5, Heading, Heading), 123.5);
        assert_eq!(convention_normalize(359.0, Origin, Origin), 359.0);
    }

    #[test]
    fn test_self_inverse() {
        for direction in [0.0, 1.0, 45.5, 179.0, 180.0, 181.0, 300.0, 359.9] {
            let there = convention_normalize(direction, Origin, Heading);
            let back = convention_normalize(there, Heading, Origin);
            assert!((back - direction).abs() < 1e-9, "{} -> {} -> {}", direction, there, back);
        }
    }
}
