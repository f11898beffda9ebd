//! Pixel layout of the dashboard canvas.

use serde::Serialize;

/// Integer pixel position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Translate by a pixel offset.
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// Axis-aligned box given by its top-left and bottom-right corners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rect {
    pub top_left: Point,
    pub bottom_right: Point,
}

impl Rect {
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            top_left: Point::new(left, top),
            bottom_right: Point::new(right, bottom),
        }
    }

    pub fn left(&self) -> i32 {
        self.top_left.x
    }

    pub fn top(&self) -> i32 {
        self.top_left.y
    }

    pub fn right(&self) -> i32 {
        self.bottom_right.x
    }

    pub fn bottom(&self) -> i32 {
        self.bottom_right.y
    }

    pub fn width(&self) -> i32 {
        self.right() - self.left()
    }

    pub fn height(&self) -> i32 {
        self.bottom() - self.top()
    }

    pub fn center(&self) -> Point {
        Point::new(
            (self.left() + self.right()) / 2,
            (self.top() + self.bottom()) / 2,
        )
    }

    /// Shrink the box by `amount` pixels on every side.
    pub fn inset(&self, amount: i32) -> Self {
        Self::new(
            self.left() + amount,
            self.top() + amount,
            self.right() - amount,
            self.bottom() - amount,
        )
    }
}

/// Fixed pixel geometry of a dashboard, computed once per instance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DashboardLayout {
    pub width: u32,
    pub height: u32,
    /// Bounding box of the compass circle.
    pub compass: Rect,
    /// Inset between the compass outline and the uncertainty wedge.
    pub wedge_inset: i32,
    /// Speed-history strip.
    pub speed_panel: Rect,
}

impl Default for DashboardLayout {
    fn default() -> Self {
        Self {
            width: 600,
            height: 250,
            compass: Rect::new(30, 30, 220, 220),
            wedge_inset: 5,
            speed_panel: Rect::new(330, 120, 570, 220),
        }
    }
}

impl DashboardLayout {
    pub fn compass_center(&self) -> Point {
        self.compass.center()
    }

    pub fn compass_radius(&self) -> f64 {
        self.compass.width() as f64 / 2.0
    }

    pub fn wedge_bounds(&self) -> Rect {
        self.compass.inset(self.wedge_inset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_compass() {
        let layout = DashboardLayout::default();
        assert_eq!(layout.compass_center(), Point::new(125, 125));
        assert_eq!(layout.compass_radius(), 95.0);
        assert_eq!(layout.wedge_bounds(), Rect::new(35, 35, 215, 215));
    }

    #[test]
    fn test_rect_dimensions() {
        let panel = DashboardLayout::default().speed_panel;
        assert_eq!(panel.width(), 240);
        assert_eq!(panel.height(), 100);
    }
}
