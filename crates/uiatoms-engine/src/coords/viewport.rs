/// Screen or virtual-canvas size in pixels.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    /// The 640×480 canvas menus are laid out in.
    pub const VIRTUAL: Viewport = Viewport::new(640.0, 480.0);

    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }

    /// Width divided by height. Returns `0.0` for an invalid viewport.
    #[inline]
    pub fn aspect(self) -> f32 {
        if self.is_valid() { self.width / self.height } else { 0.0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn virtual_canvas_is_four_by_three() {
        assert!((Viewport::VIRTUAL.aspect() - 4.0 / 3.0).abs() < f32::EPSILON);
    }

    #[test]
    fn zero_height_has_no_aspect() {
        assert!(!Viewport::new(640.0, 0.0).is_valid());
        assert_eq!(Viewport::new(640.0, 0.0).aspect(), 0.0);
    }
}
