use std::sync::Arc;

use lsu_bus::{CommandSent, EventBus};

/// Command hook.
#[derive(Clone)]
pub struct CommandProbe {
    bus: Arc<EventBus>,
}

impl CommandProbe {
    pub fn new(bus: Arc<EventBus>) -> Self {
        Self { bus }
    }

    /// The player issued a command. A leading `/` is stripped.
    pub fn sent(&self, raw: &str) {
        let command = raw.strip_prefix('/').unwrap_or(raw);
        self.bus.post(&mut CommandSent::new(command));
    }
}
