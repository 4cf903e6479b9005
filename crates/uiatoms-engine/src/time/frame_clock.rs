/// Frame timing snapshot, engine milliseconds.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct FrameTime {
    /// Engine real time at the tick.
    pub real_time: i32,

    /// Milliseconds since the previous tick. The first tick measures from 0.
    pub frame_time: i32,

    /// Monotonic tick counter.
    pub frame_index: u64,
}

/// Produces [`FrameTime`] snapshots from engine-supplied timestamps.
///
/// Deltas are not clamped: the engine's real time only moves forward, and a
/// wrapped 32-bit counter still yields the right delta through wrapping
/// subtraction.
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    real_time: i32,
    frame_index: u64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forgets the previous timestamp; the next tick measures from 0.
    pub fn reset(&mut self) {
        self.real_time = 0;
    }

    /// Advances the clock to `real_time` and returns the new snapshot.
    pub fn tick(&mut self, real_time: i32) -> FrameTime {
        let ft = FrameTime {
            real_time,
            frame_time: real_time.wrapping_sub(self.real_time),
            frame_index: self.frame_index,
        };

        self.real_time = real_time;
        self.frame_index = self.frame_index.wrapping_add(1);

        ft
    }
}
