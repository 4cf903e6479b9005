use super::Vec2;

/// Axis-aligned rectangle (top-left origin).
///
/// Unlike most rectangle types, `size` is allowed to be negative: the picture
/// primitives read a negative extent as a request to mirror the texture on
/// that axis. Geometry helpers here never normalize implicitly.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub const fn from_origin_size(origin: Vec2, size: Vec2) -> Self {
        Self { origin, size }
    }

    #[inline]
    pub fn max(self) -> Vec2 {
        self.origin + self.size
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.origin.is_finite() && self.size.is_finite()
    }

    /// Scales origin and size per axis.
    #[inline]
    pub fn scale(self, sx: f32, sy: f32) -> Self {
        Self::from_origin_size(self.origin.scale(sx, sy), self.size.scale(sx, sy))
    }

    /// Closed containment: `[min, max]` on both axes.
    ///
    /// Points on any edge, including the far edge, are inside. A rect with a
    /// negative extent contains nothing.
    #[inline]
    pub fn contains_inclusive(self, p: Vec2) -> bool {
        let max = self.max();
        p.x >= self.origin.x && p.y >= self.origin.y && p.x <= max.x && p.y <= max.y
    }
}
