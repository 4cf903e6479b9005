//! uiatoms engine crate.
//!
//! Engine-facing vocabulary for the menu UI: geometry, the trap ports the UI
//! calls into, the recorded call stream, frame timing and logging setup, plus
//! a headless engine that implements every port in memory.

pub mod coords;
pub mod headless;
pub mod logging;
pub mod scene;
pub mod time;
pub mod trap;
