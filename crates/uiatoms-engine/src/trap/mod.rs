//! Trap ports.
//!
//! The host engine exposes a fixed set of services (rendering, console,
//! client state) to the UI module. Each group is a trait here so the UI can
//! be driven by a live engine binding or by [`crate::headless::HeadlessEngine`]
//! in tests.
//!
//! Ports take `&mut self`: the engine's render and console state is global on
//! its side, and an exclusive borrow per call rules out re-entry.

mod client;
mod console;
mod renderer;

pub use client::{Client, ClientState, ConnState};
pub use console::Console;
pub use renderer::{GlConfig, Renderer, ShaderHandle, UvRect};

/// Every port the UI module talks to.
///
/// Blanket-implemented; bound on this when a call needs more than one port.
pub trait Traps: Renderer + Console + Client {}

impl<T: Renderer + Console + Client + ?Sized> Traps for T {}
