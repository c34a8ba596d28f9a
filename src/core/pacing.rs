//! Fixed-rate frame limiter.
//!
//! The game loop calls [`FramePacer::wait`] once per iteration; this is the
//! only place the loop blocks. A loop that falls behind by more than a frame
//! re-anchors its schedule to "now" instead of bursting to catch up.

use std::thread;
use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct FramePacer {
    frame_duration: Duration,
    next_frame: Instant,
}

impl FramePacer {
    pub fn new(ticks_per_second: u32) -> Self {
        Self::starting_at(ticks_per_second, Instant::now())
    }

    /// Create a pacer whose first frame is due at `start`.
    pub fn starting_at(ticks_per_second: u32, start: Instant) -> Self {
        let frame_duration = Duration::from_secs(1) / ticks_per_second.max(1);
        Self {
            frame_duration,
            next_frame: start + frame_duration,
        }
    }

    pub fn frame_duration(&self) -> Duration {
        self.frame_duration
    }

    /// Time left before the next frame is due; zero when already late.
    pub fn remaining(&self, now: Instant) -> Duration {
        self.next_frame.saturating_duration_since(now)
    }

    /// Advance the schedule by one frame as seen from `now`.
    pub fn advance(&mut self, now: Instant) {
        if now > self.next_frame + self.frame_duration {
            self.next_frame = now + self.frame_duration;
        } else {
            self.next_frame += self.frame_duration;
        }
    }

    /// Block until the next frame is due, then schedule the one after it.
    pub fn wait(&mut self) {
        let remaining = self.remaining(Instant::now());
        if !remaining.is_zero() {
            thread::sleep(remaining);
        }
        self.advance(Instant::now());
    }
}
