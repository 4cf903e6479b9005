//! uiatoms UI: the menu module's side of the engine boundary.
//!
//! Menus are laid out on a fixed 640×480 canvas. This crate maps that canvas
//! onto the real video mode, draws pictures and flat shapes through the
//! engine's renderer port, forwards diagnostics to the engine console and
//! claims the handful of console commands the UI owns.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use uiatoms_ui::prelude::*;
//!
//! let mut engine = HeadlessEngine::default();
//! let mut ui = UiSession::init(UiConfig::default(), &mut engine)?;
//!
//! // Once per frame:
//! let mut painter = ui.painter(&mut engine);
//! painter.draw_text_box(100, 100, 20, 3);
//! painter.draw_handle_pic(Rect::new(300.0, 40.0, -64.0, 64.0), logo);
//!
//! // When the engine offers a console command:
//! let claimed = ui.console_command(real_time, &engine, &mut handlers);
//! ```

pub mod bounds;
pub mod command;
pub mod config;
pub mod cvar;
pub mod diag;
pub mod error;
pub mod painter;
pub mod session;
pub mod transform;

pub use error::UiError;
pub use session::UiSession;

/// Everything a menu module needs; import this in your menu files.
pub mod prelude {
    pub use crate::bounds::{clamp_to_range, point_in_rect};
    pub use crate::command::{CommandHandlers, UiCommand};
    pub use crate::config::UiConfig;
    pub use crate::cvar::{clamp_cvar, cvar_enabled};
    pub use crate::diag::{self, ErrorLevel};
    pub use crate::error::UiError;
    pub use crate::painter::Painter;
    pub use crate::session::UiSession;
    pub use crate::transform::{ViewportTransform, REFERENCE_ASPECT};

    // Re-export the engine primitives everyone needs.
    pub use uiatoms_engine::coords::{ColorRgba, Rect, Vec2, Viewport};
    pub use uiatoms_engine::headless::{HeadlessConfig, HeadlessEngine};
    pub use uiatoms_engine::trap::{ShaderHandle, Traps};
}
