//! Wall-clock nanosecond source for hosts that pump ticks from real time.

use web_time::Instant;

/// Monotonic nanosecond source anchored at construction. Hosts that do not
/// run under a test clock feed `now_nanos()` into the controller's `tick`.
#[derive(Clone, Debug)]
pub struct InstantSource {
    origin: Instant,
}

impl InstantSource {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }

    pub fn now_nanos(&self) -> u64 {
        self.origin.elapsed().as_nanos() as u64
    }
}

impl Default for InstantSource {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "tests/clock_tests.rs"]
mod tests;
