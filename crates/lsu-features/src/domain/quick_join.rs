//! # Quick Join Button
//!
//! Adds a small button next to the title screen menu that connects straight
//! to the configured server.

use lsu_bus::{HandlerResult, Listener, ScreenButton, TitleScreenInit, UiListener};

use crate::config::LiveConfig;

/// Action id prefix the screen code maps to "connect to server".
pub const CONNECT_ACTION_PREFIX: &str = "connect:";

const BUTTON_SIZE: u32 = 20;

pub struct QuickJoinButton {
    config: LiveConfig,
}

impl QuickJoinButton {
    pub fn new(config: LiveConfig) -> Self {
        Self { config }
    }
}

impl UiListener for QuickJoinButton {
    fn on_title_screen_init(&self, event: &mut TitleScreenInit) -> HandlerResult {
        let address = self.config.read().quick_join_address.clone();
        // Right of the centred menu column, level with its second row.
        let x = (event.width() / 2) as i32 + 104;
        let y = (event.height() / 4) as i32 + 48;
        event.add_button(ScreenButton {
            label: "Lifesteal Network".to_string(),
            x,
            y,
            width: BUTTON_SIZE,
            height: BUTTON_SIZE,
            action: format!("{CONNECT_ACTION_PREFIX}{address}"),
        });
        Ok(())
    }
}

impl Listener for QuickJoinButton {
    fn name(&self) -> &str {
        "QuickJoinButton"
    }

    fn is_enabled(&self) -> bool {
        self.config.read().quick_join_button_enabled
    }

    fn as_ui(&self) -> Option<&dyn UiListener> {
        Some(self)
    }
}
