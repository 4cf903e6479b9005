pub(crate) mod rotated_pic;
pub(crate) mod stretch_pic;

pub use rotated_pic::RotatedPicCmd;
pub use stretch_pic::StretchPicCmd;
