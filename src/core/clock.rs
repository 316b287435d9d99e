//! Fixed-step tick clock.
//!
//! Converts variable frame times into a whole number of fixed ticks, carrying
//! the remainder forward.

use super::constants::{MAX_FRAME_DT_MS, TICK_INTERVAL_MS};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FixedStep {
    /// Sub-tick time carried between frames (milliseconds).
    pub accumulated_ms: u64,
}

impl FixedStep {
    /// Add `dt_ms` of elapsed time and return how many ticks are now due.
    ///
    /// `dt_ms` is clamped so a stall (suspended terminal, debugger) does not
    /// replay seconds of game time at once.
    pub fn ticks_due(&mut self, dt_ms: u64) -> u32 {
        self.accumulated_ms += dt_ms.min(MAX_FRAME_DT_MS);
        let ticks = self.accumulated_ms / TICK_INTERVAL_MS;
        self.accumulated_ms %= TICK_INTERVAL_MS;
        ticks as u32
    }
}
