//! Platform abstraction layer
//!
//! Keeps browser/native differences out of the simulation:
//! - `TickTimer`: turns wall-clock (or virtual) time into whole ticks
//! - `input`: key names and d-pad labels to game commands

pub mod input;

pub use input::{Command, command_for_key, direction_from_label};

use crate::consts::{MAX_FRAME_GAP_MS, TICK_INTERVAL_MS};

/// Fixed-rate tick accumulator
///
/// The driver reports elapsed time; the timer answers how many ticks are
/// due and carries the remainder to the next frame.
#[derive(Debug, Clone)]
pub struct TickTimer {
    interval_ms: f64,
    accumulator_ms: f64,
    last_time: Option<f64>,
}

impl Default for TickTimer {
    fn default() -> Self {
        Self::new(TICK_INTERVAL_MS)
    }
}

impl TickTimer {
    pub fn new(interval_ms: u32) -> Self {
        Self {
            interval_ms: interval_ms.max(1) as f64,
            accumulator_ms: 0.0,
            last_time: None,
        }
    }

    pub fn interval_ms(&self) -> f64 {
        self.interval_ms
    }

    /// Drop accumulated time (game start/stop)
    pub fn reset(&mut self) {
        self.accumulator_ms = 0.0;
        self.last_time = None;
    }

    /// Add elapsed milliseconds and return the number of ticks now due
    pub fn advance(&mut self, elapsed_ms: f64) -> u32 {
        // Clamp so a long stall doesn't replay a burst of ticks
        let elapsed = elapsed_ms.clamp(0.0, MAX_FRAME_GAP_MS as f64);
        self.accumulator_ms += elapsed;

        let mut due = 0;
        while self.accumulator_ms >= self.interval_ms {
            self.accumulator_ms -= self.interval_ms;
            due += 1;
        }
        due
    }

    /// Feed an absolute timestamp (e.g. requestAnimationFrame time)
    ///
    /// The first call only records the timestamp.
    pub fn frame(&mut self, now_ms: f64) -> u32 {
        let due = match self.last_time {
            Some(last) => self.advance(now_ms - last),
            None => 0,
        };
        self.last_time = Some(now_ms);
        due
    }
}
