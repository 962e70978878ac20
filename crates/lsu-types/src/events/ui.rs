//! Title screen occurrences.

use super::impl_event;

/// A button a listener wants added to a screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenButton {
    pub label: String,
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
    /// Opaque action id the screen code maps to a callback.
    pub action: String,
}

/// The title screen was initialised.
///
/// Listeners append buttons; the UI probe adds them to the real screen after
/// dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleScreenInit {
    width: u32,
    height: u32,
    buttons: Vec<ScreenButton>,
}

impl TitleScreenInit {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            buttons: Vec::new(),
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn add_button(&mut self, button: ScreenButton) {
        self.buttons.push(button);
    }

    pub fn buttons(&self) -> &[ScreenButton] {
        &self.buttons
    }
}

impl_event!(TitleScreenInit);

/// The title screen asked for a splash text.
///
/// Last writer wins; `None` keeps the game's own splash.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SplashTextRequest {
    splash_text: Option<String>,
}

impl SplashTextRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn splash_text(&self) -> Option<&str> {
        self.splash_text.as_deref()
    }

    pub fn set_splash_text(&mut self, splash_text: impl Into<String>) {
        self.splash_text = Some(splash_text.into());
    }

    pub fn clear_splash_text(&mut self) {
        self.splash_text = None;
    }
}

impl_event!(SplashTextRequest);
