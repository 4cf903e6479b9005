use uiatoms_engine::coords::{Rect, Viewport};
use uiatoms_engine::trap::GlConfig;

/// Aspect the virtual canvas is designed for.
pub const REFERENCE_ASPECT: f32 = 4.0 / 3.0;

/// Virtual-to-device coordinate mapping.
///
/// Plain data: the caller rebuilds it whenever the video mode changes and
/// passes it by value to whatever draws.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ViewportTransform {
    pub xscale: f32,
    pub yscale: f32,
    /// Aspect at which no horizontal correction is applied (4:3).
    pub base_aspect: f32,
    /// Aspect of the actual display.
    pub current_aspect: f32,
}

impl ViewportTransform {
    #[inline]
    pub const fn new(xscale: f32, yscale: f32, current_aspect: f32) -> Self {
        Self { xscale, yscale, base_aspect: REFERENCE_ASPECT, current_aspect }
    }

    /// Maps virtual units 1:1 onto a 4:3 device.
    #[inline]
    pub const fn identity() -> Self {
        Self::new(1.0, 1.0, REFERENCE_ASPECT)
    }

    /// Transform for a video mode: the virtual canvas is stretched over the
    /// full pixel size, then corrected for the window aspect.
    pub fn from_gl_config(gl: &GlConfig, virtual_size: Viewport, base_aspect: f32) -> Self {
        Self {
            xscale: gl.vid_width as f32 / virtual_size.width,
            yscale: gl.vid_height as f32 / virtual_size.height,
            base_aspect,
            current_aspect: gl.window_aspect,
        }
    }

    #[inline]
    pub fn with_base_aspect(mut self, base_aspect: f32) -> Self {
        self.base_aspect = base_aspect;
        self
    }

    /// Scales and aspects are positive and finite.
    pub fn is_valid(&self) -> bool {
        [self.xscale, self.yscale, self.base_aspect, self.current_aspect]
            .iter()
            .all(|v| v.is_finite() && *v > 0.0)
    }

    /// Extra horizontal factor for non-reference displays; `1.0` when the
    /// display aspect equals the base aspect exactly.
    #[inline]
    pub fn aspect_correction(&self) -> f32 {
        if self.current_aspect != self.base_aspect {
            self.base_aspect / self.current_aspect
        } else {
            1.0
        }
    }

    /// Converts a virtual rect to device pixels.
    ///
    /// x and width get `xscale` and the aspect correction, y and height get
    /// `yscale`. Signs are preserved, so a negative extent stays negative.
    #[inline]
    pub fn adjust(&self, rect: Rect) -> Rect {
        debug_assert!(self.is_valid(), "invalid viewport transform: {self:?}");
        rect.scale(self.xscale * self.aspect_correction(), self.yscale)
    }
}

impl Default for ViewportTransform {
    fn default() -> Self {
        Self::identity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: Rect, b: Rect) -> bool {
        let eps = 1e-3;
        (a.origin.x - b.origin.x).abs() < eps
            && (a.origin.y - b.origin.y).abs() < eps
            && (a.size.x - b.size.x).abs() < eps
            && (a.size.y - b.size.y).abs() < eps
    }

    // ── reference aspect ──────────────────────────────────────────────────

    #[test]
    fn reference_aspect_is_pure_scaling() {
        let t = ViewportTransform::new(2.0, 1.5, REFERENCE_ASPECT);
        assert_eq!(t.aspect_correction(), 1.0);
        assert_eq!(t.adjust(Rect::new(10.0, 20.0, 30.0, 40.0)), Rect::new(20.0, 30.0, 60.0, 60.0));
    }

    #[test]
    fn identity_is_a_no_op() {
        let r = Rect::new(12.5, 7.0, 100.0, 3.0);
        assert_eq!(ViewportTransform::identity().adjust(r), r);
    }

    // ── wide / narrow displays ────────────────────────────────────────────

    #[test]
    fn widescreen_compresses_horizontal_only() {
        // 1280x720 at 16:9.
        let gl = GlConfig::from_size(1280, 720);
        let t = ViewportTransform::from_gl_config(&gl, Viewport::VIRTUAL, REFERENCE_ASPECT);
        let out = t.adjust(Rect::new(640.0, 480.0, 640.0, 480.0));

        // 640 * 2 * (4/3) / (16/9) = 960
        assert!(approx(out, Rect::new(960.0, 720.0, 960.0, 720.0)), "{out:?}");
    }

    #[test]
    fn narrow_display_widens_horizontal() {
        let t = ViewportTransform::new(1.0, 1.0, 1.0);
        let out = t.adjust(Rect::new(30.0, 30.0, 30.0, 30.0));
        assert!(approx(out, Rect::new(40.0, 30.0, 40.0, 30.0)), "{out:?}");
    }

    #[test]
    fn custom_base_aspect_is_respected() {
        let t = ViewportTransform::new(1.0, 1.0, 16.0 / 9.0).with_base_aspect(16.0 / 9.0);
        assert_eq!(t.aspect_correction(), 1.0);
    }

    // ── linearity ─────────────────────────────────────────────────────────

    #[test]
    fn adjust_is_linear_in_the_rect() {
        let t = ViewportTransform::new(1.6, 1.5, 16.0 / 10.0);
        let r = Rect::new(13.0, 27.0, 55.0, 9.0);
        for k in [0.5_f32, 2.0, 3.25] {
            let lhs = t.adjust(r.scale(k, k));
            let rhs = t.adjust(r).scale(k, k);
            assert!(approx(lhs, rhs), "k={k}: {lhs:?} vs {rhs:?}");
        }
    }

    #[test]
    fn negative_extent_keeps_sign() {
        let t = ViewportTransform::new(2.0, 2.0, 16.0 / 9.0);
        let out = t.adjust(Rect::new(0.0, 0.0, -10.0, -10.0));
        assert!(out.size.x < 0.0);
        assert_eq!(out.size.y, -20.0);
    }

    // ── validity ──────────────────────────────────────────────────────────

    #[test]
    fn zero_scale_is_invalid() {
        assert!(!ViewportTransform::new(0.0, 1.0, REFERENCE_ASPECT).is_valid());
        assert!(!ViewportTransform::new(1.0, 1.0, f32::NAN).is_valid());
        assert!(ViewportTransform::identity().is_valid());
    }
}
