//! # Rare Item Highlight
//!
//! Scales dropped items flagged as rare. The rarity check happens in the
//! render probe so this handler stays cheap on the per-frame path.

use lsu_bus::{HandlerResult, ItemRender, Listener, RenderListener};

use crate::config::LiveConfig;

pub struct RareItemHighlight {
    config: LiveConfig,
}

impl RareItemHighlight {
    pub fn new(config: LiveConfig) -> Self {
        Self { config }
    }
}

impl RenderListener for RareItemHighlight {
    fn on_item_render(&self, event: &mut ItemRender) -> HandlerResult {
        if !event.is_rare() {
            return Ok(());
        }
        let scale = self.config.read().rare_item_scale;
        event.transform_mut().scale_by(scale);
        Ok(())
    }
}

impl Listener for RareItemHighlight {
    fn name(&self) -> &str {
        "RareItemHighlight"
    }

    fn is_enabled(&self) -> bool {
        self.config.read().rare_item_scale_enabled
    }

    fn as_render(&self) -> Option<&dyn RenderListener> {
        Some(self)
    }
}
