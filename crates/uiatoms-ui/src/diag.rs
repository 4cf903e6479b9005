//! Diagnostics forwarding.
//!
//! Messages arrive pre-formatted and go two ways: to the engine console
//! through the [`Console`] port, and to the `log` facade for the host process.

use std::fmt;

use uiatoms_engine::trap::Console;

use crate::cvar::cvar_enabled;
use crate::error::UiError;

/// Longest message forwarded to the console, in bytes. The engine's print
/// buffer is 1024 bytes including the terminator.
pub const MAX_MESSAGE: usize = 1024 - 1;

/// Severity of an engine error report.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ErrorLevel {
    /// Exit the entire game with a popup window.
    Fatal,
    /// Print to console and disconnect from the game.
    Drop,
    /// Disconnect without a message.
    Disconnect,
    /// The server went away.
    ServerDisconnect,
}

impl fmt::Display for ErrorLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ErrorLevel::Fatal => "fatal",
            ErrorLevel::Drop => "drop",
            ErrorLevel::Disconnect => "disconnect",
            ErrorLevel::ServerDisconnect => "server disconnect",
        })
    }
}

/// Prints `msg` on the engine console.
pub fn print<C: Console + ?Sized>(console: &mut C, msg: &str) {
    let msg = truncate(msg, MAX_MESSAGE);
    log::info!("{}", msg.trim_end());
    console.print(msg);
}

/// Like [`print`], but only while the `developer` cvar is set.
pub fn dprint<C: Console + ?Sized>(console: &mut C, msg: &str) {
    if !cvar_enabled(console, "developer") {
        return;
    }
    let msg = truncate(msg, MAX_MESSAGE);
    log::debug!("{}", msg.trim_end());
    console.print(msg);
}

/// Reports an error to the engine and returns it for propagation.
///
/// A live engine tears the UI module down inside `Console::error`; on hosts
/// that return, the caller should bail out with the returned value.
#[must_use]
pub fn error<C: Console + ?Sized>(console: &mut C, level: ErrorLevel, msg: &str) -> UiError {
    let msg = truncate(msg, MAX_MESSAGE);
    log::error!("{level}: {msg}");
    console.error(msg);
    UiError::Engine { level, message: msg.to_string() }
}

/// Cuts `msg` to at most `max` bytes on a char boundary.
fn truncate(msg: &str, max: usize) -> &str {
    if msg.len() <= max {
        return msg;
    }
    let mut end = max;
    while !msg.is_char_boundary(end) {
        end -= 1;
    }
    &msg[..end]
}
