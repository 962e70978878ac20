use std::sync::Arc;

use lsu_bus::{EventBus, ItemRender, PlayerNameRender, PoseTransform};

/// Render hooks. Called every frame.
#[derive(Clone)]
pub struct RenderProbe {
    bus: Arc<EventBus>,
}

impl RenderProbe {
    pub fn new(bus: Arc<EventBus>) -> Self {
        Self { bus }
    }

    /// An item is about to be drawn. Returns the transform to apply, or
    /// `None` to skip drawing it.
    pub fn item(&self, item_id: u32, is_rare: bool) -> Option<PoseTransform> {
        let mut event = ItemRender::new(item_id, is_rare);
        self.bus.post(&mut event);
        if event.is_cancelled() {
            return None;
        }
        Some(*event.transform())
    }

    /// A name tag is about to be drawn. Returns the name to draw.
    pub fn player_name(&self, player_name: &str, display_name: &str) -> String {
        let mut event = PlayerNameRender::new(player_name, display_name);
        self.bus.post(&mut event);
        event.display_name().to_string()
    }
}
