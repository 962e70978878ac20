use std::sync::Arc;

use lsu_bus::{EventBus, ScreenButton, SplashTextRequest, TitleScreenInit};

/// Title screen hooks.
#[derive(Clone)]
pub struct UiProbe {
    bus: Arc<EventBus>,
}

impl UiProbe {
    pub fn new(bus: Arc<EventBus>) -> Self {
        Self { bus }
    }

    /// The title screen was built. Returns the buttons listeners added.
    pub fn title_screen_init(&self, width: u32, height: u32) -> Vec<ScreenButton> {
        let mut event = TitleScreenInit::new(width, height);
        self.bus.post(&mut event);
        event.buttons().to_vec()
    }

    /// The title screen wants a splash. `None` keeps the game's own.
    pub fn splash_text(&self) -> Option<String> {
        let mut event = SplashTextRequest::new();
        self.bus.post(&mut event);
        event.splash_text().map(str::to_string)
    }
}
