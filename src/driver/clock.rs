//! Fixed-rate frame limiter

use std::thread;
use std::time::{Duration, Instant};

/// Caps the main loop at a fixed number of ticks per second
#[derive(Debug)]
pub struct FrameClock {
    frame: Duration,
    last_tick: Instant,
}

impl FrameClock {
    /// `fps` must be non-zero; config validation guarantees it
    pub fn new(fps: u32) -> Self {
        FrameClock {
            frame: Duration::from_secs(1) / fps.max(1),
            last_tick: Instant::now(),
        }
    }

    pub fn frame_duration(&self) -> Duration {
        self.frame
    }

    /// Time left before the next frame is due
    pub fn remaining(&self) -> Duration {
        self.frame.saturating_sub(self.last_tick.elapsed())
    }

    /// Sleep until the next frame boundary, returning the time since the
    /// previous tick
    pub fn tick(&mut self) -> Duration {
        let remaining = self.remaining();
        if !remaining.is_zero() {
            thread::sleep(remaining);
        }
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_tick);
        self.last_tick = now;
        elapsed
    }
}
