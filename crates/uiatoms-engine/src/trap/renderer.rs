use crate::coords::{ColorRgba, Rect, Viewport};

/// Opaque handle to a shader registered with the renderer.
///
/// `0` is the engine's "no shader" value. The UI never checks for it; drawing
/// with an invalid handle is the renderer's business.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct ShaderHandle(pub i32);

impl ShaderHandle {
    pub const INVALID: ShaderHandle = ShaderHandle(0);

    #[inline]
    pub fn is_valid(self) -> bool {
        self.0 != 0
    }
}

/// Texture coordinates of a stretched quad: `(s0, t0)` top-left,
/// `(s1, t1)` bottom-right.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct UvRect {
    pub s0: f32,
    pub t0: f32,
    pub s1: f32,
    pub t1: f32,
}

impl UvRect {
    /// Whole texture, unflipped.
    pub const FULL: UvRect = UvRect::new(0.0, 0.0, 1.0, 1.0);

    /// Degenerate coordinates used with the white shader: every fragment
    /// samples the same texel.
    pub const ZERO: UvRect = UvRect::new(0.0, 0.0, 0.0, 0.0);

    #[inline]
    pub const fn new(s0: f32, t0: f32, s1: f32, t1: f32) -> Self {
        Self { s0, t0, s1, t1 }
    }
}

/// Video configuration reported by the engine.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GlConfig {
    pub vid_width: u32,
    pub vid_height: u32,
    /// Physical window aspect. Can differ from `vid_width / vid_height` on
    /// displays with non-square pixels.
    pub window_aspect: f32,
}

impl GlConfig {
    /// Builds a config whose aspect follows the pixel size.
    pub fn from_size(vid_width: u32, vid_height: u32) -> Self {
        let viewport = Viewport::new(vid_width as f32, vid_height as f32);
        Self { vid_width, vid_height, window_aspect: viewport.aspect() }
    }

    #[inline]
    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.vid_width as f32, self.vid_height as f32)
    }
}

/// Rendering traps.
pub trait Renderer {
    /// Registers (or looks up) a shader without mipmaps.
    fn register_shader_nomip(&mut self, name: &str) -> ShaderHandle;

    /// Draws `quad` (device pixels) textured with `uv` of `shader`, tinted by
    /// the current override color.
    fn draw_stretch_pic(&mut self, quad: Rect, uv: UvRect, shader: ShaderHandle);

    /// Like [`draw_stretch_pic`](Self::draw_stretch_pic), rotated by
    /// `angle` degrees. Pivot and direction are the renderer's convention.
    fn draw_rotated_pic(&mut self, quad: Rect, uv: UvRect, shader: ShaderHandle, angle: f32);

    /// Sets the override color; `None` restores the default (white, opaque).
    fn set_color(&mut self, color: Option<ColorRgba>);

    /// Asks the engine to present a frame immediately.
    fn update_screen(&mut self);

    fn gl_config(&self) -> GlConfig;
}
