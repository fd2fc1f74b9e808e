//! Frame-rate governor for real-time loops.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

use std::time::{Duration, Instant};

/// Sleeps out the rest of each frame so a loop runs at most `fps` frames per
/// second. A frame that overruns its budget is not made up later.
#[derive(Debug)]
pub struct FrameClock {
    budget: Duration,
    last: Instant,
}

impl FrameClock {
    pub fn new(fps: u32) -> Self {
        let budget = Duration::from_secs(1) / fps.max(1);
        Self { budget, last: Instant::now() }
    }

    /// Block until the current frame's budget has elapsed.
    pub fn tick(&mut self) {
        let elapsed = self.last.elapsed();
        if let Some(remaining) = self.budget.checked_sub(elapsed) {
            std::thread::sleep(remaining);
        } else {
            tracing::debug!(?elapsed, budget = ?self.budget, "frame overran");
        }
        self.last = Instant::now();
    }
}
