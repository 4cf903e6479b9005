use crate::coords::ColorRgba;
use crate::scene::shapes::rotated_pic::RotatedPicCmd;
use crate::scene::shapes::stretch_pic::StretchPicCmd;

/// One renderer trap call.
///
/// Extending the stream:
/// - add a payload module under `scene::shapes::*` if the call carries geometry
/// - add a variant here
/// - record it from the matching `Renderer` method of the recording host
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    StretchPic(StretchPicCmd),
    RotatedPic(RotatedPicCmd),
    /// Override color change; `None` is the reset.
    SetColor(Option<ColorRgba>),
    UpdateScreen,
}

impl DrawCmd {
    /// True for calls that put pixels on screen.
    #[inline]
    pub fn is_quad(&self) -> bool {
        matches!(self, DrawCmd::StretchPic(_) | DrawCmd::RotatedPic(_))
    }
}
