//! Recorded trap-call stream.
//!
//! Responsibilities:
//! - store renderer calls in issue order, exactly as the UI made them
//! - give tests and the demo host something to inspect after a frame
//! - keep per-command payloads and push helpers isolated under `scene::shapes`

mod cmd;
mod list;

pub mod shapes;

pub use cmd::DrawCmd;
pub use list::{DrawItem, DrawList};
