//! Time subsystem.
//!
//! The engine hands the UI its real time (milliseconds) on every console
//! command and refresh. `FrameClock` turns those timestamps into deltas
//! without reading a clock of its own, which keeps it deterministic in tests.

mod frame_clock;

pub use frame_clock::{FrameClock, FrameTime};
