//! # Custom Splashes
//!
//! Replaces the title screen splash with a random entry from the configured
//! pool.

use lsu_bus::{HandlerResult, Listener, SplashTextRequest, UiListener};
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::config::LiveConfig;

/// Shown when the pool is empty.
pub const FALLBACK_SPLASH: &str = "<yellow>uhoh...</yellow>";

pub struct CustomSplashes {
    config: LiveConfig,
    rng: Mutex<StdRng>,
}

impl CustomSplashes {
    pub fn new(config: LiveConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Deterministic picker for tests and replays.
    pub fn with_seed(config: LiveConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: LiveConfig, rng: StdRng) -> Self {
        Self {
            config,
            rng: Mutex::new(rng),
        }
    }

    /// Pick a splash from the current pool.
    pub fn pick(&self) -> String {
        let config = self.config.read();
        let mut rng = self.rng.lock();
        config
            .splashes
            .choose(&mut *rng)
            .cloned()
            .unwrap_or_else(|| FALLBACK_SPLASH.to_string())
    }
}

impl UiListener for CustomSplashes {
    fn on_splash_text_request(&self, event: &mut SplashTextRequest) -> HandlerResult {
        event.set_splash_text(self.pick());
        Ok(())
    }
}

impl Listener for CustomSplashes {
    fn name(&self) -> &str {
        "CustomSplashes"
    }

    fn is_enabled(&self) -> bool {
        self.config.read().custom_splashes
    }

    fn as_ui(&self) -> Option<&dyn UiListener> {
        Some(self)
    }
}
