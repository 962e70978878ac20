use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use lsu_bus::{ClientTick, EventBus};
use parking_lot::Mutex;

/// Fixed-step tick hook.
pub struct TickProbe {
    bus: Arc<EventBus>,
    ticks: AtomicU64,
    last_step: Mutex<Option<Instant>>,
}

impl TickProbe {
    pub fn new(bus: Arc<EventBus>) -> Self {
        Self {
            bus,
            ticks: AtomicU64::new(0),
            last_step: Mutex::new(None),
        }
    }

    /// Advance one step using wall-clock delta. Returns the tick number.
    pub fn step(&self) -> u64 {
        let now = Instant::now();
        let delta = self
            .last_step
            .lock()
            .replace(now)
            .map(|last| now.duration_since(last))
            .unwrap_or_default();
        self.step_with(delta)
    }

    /// Advance one step with an explicit delta. Returns the tick number.
    pub fn step_with(&self, delta: Duration) -> u64 {
        let tick = self.ticks.fetch_add(1, Ordering::Relaxed) + 1;
        self.bus.post(&mut ClientTick::new(tick, delta));
        tick
    }

    /// Steps taken so far.
    #[must_use]
    pub fn ticks(&self) -> u64 {
        self.ticks.load(Ordering::Relaxed)
    }
}
