use thiserror::Error;

use crate::diag::ErrorLevel;

/// Errors surfaced by the UI adapter.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum UiError {
    /// An error reported to the engine through the console port.
    #[error("{level} error: {message}")]
    Engine { level: ErrorLevel, message: String },

    /// The engine reported a video mode the virtual canvas cannot map onto.
    #[error("invalid video config {width}x{height} (aspect {aspect})")]
    InvalidVideoConfig { width: u32, height: u32, aspect: f32 },
}
