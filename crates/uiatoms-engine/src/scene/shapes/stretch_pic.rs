use crate::coords::Rect;
use crate::scene::{DrawCmd, DrawList};
use crate::trap::{ShaderHandle, UvRect};

/// Stretched-quad payload (device pixels).
#[derive(Debug, Clone, PartialEq)]
pub struct StretchPicCmd {
    pub quad: Rect,
    pub uv: UvRect,
    pub shader: ShaderHandle,
}

impl StretchPicCmd {
    #[inline]
    pub fn new(quad: Rect, uv: UvRect, shader: ShaderHandle) -> Self {
        Self { quad, uv, shader }
    }
}

impl DrawList {
    /// Records a stretched-quad call.
    #[inline]
    pub fn push_stretch_pic(&mut self, quad: Rect, uv: UvRect, shader: ShaderHandle) {
        self.push(DrawCmd::StretchPic(StretchPicCmd::new(quad, uv, shader)));
    }
}
