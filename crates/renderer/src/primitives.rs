//! Drawing instructions produced by the dashboard and consumed by the rasterizer.

use crate::layout::{Point, Rect};

/// Full-intensity gray level.
pub const WHITE: u8 = 255;

/// Font variant for a text primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontFace {
    Regular,
    Bold,
}

/// A single drawing instruction on the grayscale canvas.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    /// Straight line; `width` 0 or 1 draws a one-pixel line.
    Line {
        from: Point,
        to: Point,
        width: u32,
        gray: u8,
    },
    /// Ellipse inscribed in `bounds`.
    Ellipse {
        bounds: Rect,
        fill: Option<u8>,
        outline: Option<u8>,
    },
    /// Filled pie slice of the ellipse in `bounds`.
    ///
    /// Angles are in degrees, 0° pointing right and growing clockwise.
    PieSlice {
        bounds: Rect,
        start_degrees: f64,
        end_degrees: f64,
        gray: u8,
    },
    /// Text with its top-left corner at `anchor`.
    Text {
        anchor: Point,
        text: String,
        face: FontFace,
        size: f32,
        gray: u8,
    },
}

/// Ordered list of primitives; later entries paint over earlier ones.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DrawList {
    primitives: Vec<Primitive>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, primitive: Primitive) {
        self.primitives.push(primitive);
    }

    pub fn line(&mut self, from: Point, to: Point, width: u32, gray: u8) {
        self.push(Primitive::Line {
            from,
            to,
            width,
            gray,
        });
    }

    pub fn text(
        &mut self,
        anchor: Point,
        text: impl Into<String>,
        face: FontFace,
        size: f32,
        gray: u8,
    ) {
        self.push(Primitive::Text {
            anchor,
            text: text.into(),
            face,
            size,
            gray,
        });
    }

    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    /// All text strings in drawing order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.primitives.iter().filter_map(|p| match p {
            Primitive::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

impl<'a> IntoIterator for &'a DrawList {
    type Item = &'a Primitive;
    type IntoIter = std::slice::Iter<'a, Primitive>;

    fn into_iter(self) -> Self::IntoIter {
        self.primitives.iter()
    }
}
