//! Rasterize drawing primitives onto a grayscale image.

use image::{GrayImage, Luma};
use imageproc::drawing::{
    draw_filled_ellipse_mut, draw_hollow_ellipse_mut, draw_line_segment_mut, draw_polygon_mut,
    draw_text_mut,
};
use imageproc::point::Point as PolyPoint;
use rusttype::Scale;
use tracing::debug;

use crate::fonts::FontSet;
use crate::layout::{Point, Rect};
use crate::primitives::{DrawList, Primitive};

/// Maximum angular step between pie-slice outline points.
const ARC_STEP_DEGREES: f64 = 2.0;

/// Draw every primitive of `list` onto `image`, in order.
///
/// Text primitives are skipped when `fonts` has no usable face.
pub fn rasterize(image: &mut GrayImage, list: &DrawList, fonts: &FontSet) {
    let mut skipped_text = 0usize;

    for primitive in list {
        match primitive {
            Primitive::Line {
                from,
                to,
                width,
                gray,
            } => draw_thick_line(image, *from, *to, *width, Luma([*gray])),
            Primitive::Ellipse {
                bounds,
                fill,
                outline,
            } => draw_ellipse(image, bounds, *fill, *outline),
            Primitive::PieSlice {
                bounds,
                start_degrees,
                end_degrees,
                gray,
            } => draw_pie_slice(image, bounds, *start_degrees, *end_degrees, Luma([*gray])),
            Primitive::Text {
                anchor,
                text,
                face,
                size,
                gray,
            } => match fonts.face(*face) {
                Some(font) => draw_text_mut(
                    image,
                    Luma([*gray]),
                    anchor.x,
                    anchor.y,
                    Scale::uniform(*size),
                    font,
                    text,
                ),
                None => skipped_text += 1,
            },
        }
    }

    if skipped_text > 0 {
        debug!(skipped = skipped_text, "Skipped text primitives without a font");
    }
}

/// Draw a line `width` pixels thick using a square brush.
fn draw_thick_line(image: &mut GrayImage, from: Point, to: Point, width: u32, color: Luma<u8>) {
    let width = width.max(1) as i32;
    let lo = -(width - 1) / 2;
    let hi = lo + width - 1;

    for dx in lo..=hi {
        for dy in lo..=hi {
            draw_line_segment_mut(
                image,
                ((from.x + dx) as f32, (from.y + dy) as f32),
                ((to.x + dx) as f32, (to.y + dy) as f32),
                color,
            );
        }
    }
}

fn draw_ellipse(image: &mut GrayImage, bounds: &Rect, fill: Option<u8>, outline: Option<u8>) {
    let center = bounds.center();
    let rx = bounds.width() / 2;
    let ry = bounds.height() / 2;

    if let Some(gray) = fill {
        draw_filled_ellipse_mut(image, (center.x, center.y), rx, ry, Luma([gray]));
    }
    if let Some(gray) = outline {
        draw_hollow_ellipse_mut(image, (center.x, center.y), rx, ry, Luma([gray]));
    }
}

fn draw_pie_slice(image: &mut GrayImage, bounds: &Rect, start: f64, end: f64, color: Luma<u8>) {
    let sweep = end - start;
    if sweep.is_nan() || sweep <= 0.0 {
        return;
    }

    if sweep >= 360.0 {
        let center = bounds.center();
        draw_filled_ellipse_mut(
            image,
            (center.x, center.y),
            bounds.width() / 2,
            bounds.height() / 2,
            color,
        );
        return;
    }

    let polygon = pie_polygon(bounds, start, end);
    if polygon.len() >= 3 {
        draw_polygon_mut(image, &polygon, color);
    }
}

/// Outline of a pie slice: the center followed by points along the arc.
///
/// Consecutive duplicates are removed and the outline never ends on its
/// start point, as the polygon filler requires.
fn pie_polygon(bounds: &Rect, start: f64, end: f64) -> Vec<PolyPoint<i32>> {
    let center = bounds.center();
    let rx = bounds.width() as f64 / 2.0;
    let ry = bounds.height() as f64 / 2.0;
    let sweep = end - start;
    let steps = (sweep / ARC_STEP_DEGREES).ceil().max(1.0) as usize;

    let mut points = Vec::with_capacity(steps + 2);
    points.push(PolyPoint::new(center.x, center.y));
    for i in 0..=steps {
        let angle = (start + sweep * i as f64 / steps as f64).to_radians();
        points.push(PolyPoint::new(
            center.x + (rx * angle.cos()).round() as i32,
            center.y + (ry * angle.sin()).round() as i32,
        ));
    }

    points.dedup();
    while points.len() > 1 && points.first() == points.last() {
        points.pop();
    }
    points
}
