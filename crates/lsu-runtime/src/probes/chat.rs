use std::sync::Arc;

use lsu_bus::{ChatMessageReceived, ChatMessageSent, EventBus};

/// Chat hooks.
#[derive(Clone)]
pub struct ChatProbe {
    bus: Arc<EventBus>,
}

impl ChatProbe {
    pub fn new(bus: Arc<EventBus>) -> Self {
        Self { bus }
    }

    /// A line arrived. Returns the text to display, or `None` to drop it.
    pub fn incoming(&self, text: &str) -> Option<String> {
        let mut event = ChatMessageReceived::new(text);
        self.bus.post(&mut event);
        if event.is_cancelled() {
            return None;
        }
        Some(event.modified_message().to_string())
    }

    /// The player is sending a line. Returns whether to send it.
    pub fn outgoing(&self, text: &str) -> bool {
        let mut event = ChatMessageSent::new(text);
        self.bus.post(&mut event);
        !event.is_cancelled()
    }
}
