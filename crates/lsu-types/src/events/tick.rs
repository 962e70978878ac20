//! Fixed-step tick occurrence.

use std::time::Duration;

use super::impl_event;

/// One fixed game step elapsed (20 per second on the default loop).
///
/// Fires constantly; listeners must return quickly and avoid allocating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClientTick {
    tick: u64,
    delta: Duration,
}

impl ClientTick {
    pub fn new(tick: u64, delta: Duration) -> Self {
        Self { tick, delta }
    }

    /// Monotonic step counter, starting at 1.
    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// Time since the previous step.
    pub fn delta(&self) -> Duration {
        self.delta
    }
}

impl_event!(ClientTick);
