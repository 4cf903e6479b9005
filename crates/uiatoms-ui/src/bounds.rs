//! Clamping and hit testing in virtual coordinates.

use uiatoms_engine::coords::{Rect, Vec2};

/// `min` below the range, `max` above it, `value` otherwise.
///
/// `min` is checked first, so an inverted range yields `min` for low values
/// and `max` for high ones.
#[inline]
pub fn clamp_to_range(value: f32, min: f32, max: f32) -> f32 {
    if value < min {
        return min;
    }
    if value > max {
        return max;
    }
    value
}

/// True when `(px, py)` lies in `rect`, edges included.
#[inline]
pub fn point_in_rect(px: f32, py: f32, rect: Rect) -> bool {
    rect.contains_inclusive(Vec2::new(px, py))
}
