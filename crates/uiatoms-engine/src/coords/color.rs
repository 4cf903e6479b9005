use bytemuck::{Pod, Zeroable};

/// Straight-alpha RGBA color as handed to the renderer's override register.
///
/// `#[repr(C)]` so it can be viewed as the `[f32; 4]` the engine expects.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct ColorRgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl ColorRgba {
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    #[inline]
    pub const fn black() -> Self {
        Self::new(0.0, 0.0, 0.0, 1.0)
    }

    #[inline]
    pub const fn white() -> Self {
        Self::new(1.0, 1.0, 1.0, 1.0)
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite() && self.a.is_finite()
    }

    /// Channel array in `r, g, b, a` order.
    #[inline]
    pub fn to_array(self) -> [f32; 4] {
        bytemuck::cast(self)
    }
}

impl From<[f32; 4]> for ColorRgba {
    #[inline]
    fn from(rgba: [f32; 4]) -> Self {
        bytemuck::cast(rgba)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn array_view_keeps_channel_order() {
        let c = ColorRgba::new(0.1, 0.2, 0.3, 0.4);
        assert_eq!(c.to_array(), [0.1, 0.2, 0.3, 0.4]);
        assert_eq!(ColorRgba::from([0.1, 0.2, 0.3, 0.4]), c);
    }

    #[test]
    fn nan_is_not_finite() {
        assert!(!ColorRgba::new(f32::NAN, 0.0, 0.0, 1.0).is_finite());
        assert!(ColorRgba::white().is_finite());
    }
}
