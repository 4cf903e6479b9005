//! Coordinate and geometry types shared by the trap ports and the UI adapter.
//!
//! Two spaces are in play:
//! - virtual: the fixed 640×480 space menus are authored in
//! - device: actual screen pixels, as consumed by the renderer port
//!
//! Both use a top-left origin with +X right and +Y down. Conversion between
//! them lives in the UI crate; these types carry no notion of which space
//! they are in.

mod color;
mod rect;
mod vec2;
mod viewport;

pub use color::ColorRgba;
pub use rect::Rect;
pub use vec2::Vec2;
pub use viewport::Viewport;
