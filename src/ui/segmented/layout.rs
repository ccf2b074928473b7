// SPDX-License-Identifier: MPL-2.0
//! Segment geometry in a unit coordinate space.
//!
//! Segments share the control width equally. Frames use `0.0..=1.0` on both
//! axes so the selection logic can reason about positions without knowing the
//! pixel size; the view scales them by the size it is laid out with.

use iced::{Point, Rectangle, Size};

/// Tolerance when comparing frame centres.
const CENTER_EPSILON: f32 = 1e-4;

/// Frames of `count` equally sized segments laid out in a row.
#[must_use]
pub fn segment_frames(count: usize) -> Vec<Rectangle> {
    if count == 0 {
        return Vec::new();
    }
    #[allow(clippy::cast_precision_loss)]
    let width = 1.0 / count as f32;
    (0..count)
        .map(|index| {
            #[allow(clippy::cast_precision_loss)]
            let x = index as f32 * width;
            Rectangle::new(Point::new(x, 0.0), Size::new(width, 1.0))
        })
        .collect()
}

/// Index of the frame containing `point`, if any.
///
/// Edges are half-open so a point on a boundary belongs to the right-hand
/// segment, and the far right edge still belongs to the last one.
#[must_use]
pub fn frame_index_at(frames: &[Rectangle], point: Point) -> Option<usize> {
    if !(0.0..=1.0).contains(&point.y) {
        return None;
    }
    let last = frames.len().checked_sub(1)?;
    frames.iter().enumerate().find_map(|(index, frame)| {
        let right = frame.x + frame.width;
        let inside = point.x >= frame.x && (point.x < right || (index == last && point.x <= right));
        inside.then_some(index)
    })
}

/// Index of the frame whose centre matches `frame`'s centre.
///
/// This is a lookup by position, not by index: after inserts or removals the
/// segment that now sits under a floating view can have any index.
#[must_use]
pub fn frame_index_with_center(frames: &[Rectangle], frame: Rectangle) -> Option<usize> {
    let target = frame.center();
    frames.iter().position(|candidate| {
        let center = candidate.center();
        (center.x - target.x).abs() < CENTER_EPSILON && (center.y - target.y).abs() < CENTER_EPSILON
    })
}

/// Converts a point in pixels, relative to the control, to unit space.
#[must_use]
pub fn to_unit(point: Point, size: Size) -> Point {
    if size.width <= 0.0 || size.height <= 0.0 {
        return Point::new(-1.0, -1.0);
    }
    Point::new(point.x / size.width, point.y / size.height)
}

/// Scales a unit frame to pixels.
#[must_use]
pub fn to_pixels(frame: Rectangle, size: Size) -> Rectangle {
    Rectangle {
        x: frame.x * size.width,
        y: frame.y * size.height,
        width: frame.width * size.width,
        height: frame.height * size.height,
    }
}

/// Linear interpolation between two frames.
#[must_use]
pub fn lerp_frame(from: Rectangle, to: Rectangle, t: f32) -> Rectangle {
    let mix = |a: f32, b: f32| a + (b - a) * t;
    Rectangle {
        x: mix(from.x, to.x),
        y: mix(from.y, to.y),
        width: mix(from.width, to.width),
        height: mix(from.height, to.height),
    }
}
