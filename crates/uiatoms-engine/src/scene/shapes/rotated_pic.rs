use crate::coords::Rect;
use crate::scene::{DrawCmd, DrawList};
use crate::trap::{ShaderHandle, UvRect};

/// Rotated-quad payload (device pixels, angle in degrees).
#[derive(Debug, Clone, PartialEq)]
pub struct RotatedPicCmd {
    pub quad: Rect,
    pub uv: UvRect,
    pub shader: ShaderHandle,
    pub angle: f32,
}

impl RotatedPicCmd {
    #[inline]
    pub fn new(quad: Rect, uv: UvRect, shader: ShaderHandle, angle: f32) -> Self {
        Self { quad, uv, shader, angle }
    }
}

impl DrawList {
    /// Records a rotated-quad call.
    #[inline]
    pub fn push_rotated_pic(&mut self, quad: Rect, uv: UvRect, shader: ShaderHandle, angle: f32) {
        self.push(DrawCmd::RotatedPic(RotatedPicCmd::new(quad, uv, shader, angle)));
    }
}
