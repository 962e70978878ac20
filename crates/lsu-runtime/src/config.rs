//! # Runtime Configuration

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use lsu_features::{ConfigError, FeatureConfig};
use thiserror::Error;

/// Default game steps per second.
pub const DEFAULT_TICK_RATE_HZ: u32 = 20;

/// Highest accepted tick rate.
pub const MAX_TICK_RATE_HZ: u32 = 1_000;

/// Bootstrap configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeConfig {
    /// Fixed-step tick rate.
    pub tick_rate_hz: u32,
    /// Feature config JSON. Defaults are used when unset.
    pub feature_config_path: Option<PathBuf>,
    /// Entity id of the local player, once known.
    pub local_player_id: Option<i32>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            tick_rate_hz: DEFAULT_TICK_RATE_HZ,
            feature_config_path: None,
            local_player_id: None,
        }
    }
}

impl RuntimeConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `LSU_TICK_RATE`: Ticks per second (default: 20)
    /// - `LSU_FEATURE_CONFIG`: Path to the feature config JSON (default: none)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(rate) = env::var("LSU_TICK_RATE")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            config.tick_rate_hz = rate;
        }
        if let Ok(path) = env::var("LSU_FEATURE_CONFIG") {
            config.feature_config_path = Some(PathBuf::from(path));
        }

        config
    }

    pub fn validate(&self) -> Result<(), RuntimeError> {
        if self.tick_rate_hz == 0 || self.tick_rate_hz > MAX_TICK_RATE_HZ {
            return Err(RuntimeError::InvalidTickRate(self.tick_rate_hz));
        }
        Ok(())
    }

    /// Time between two ticks.
    #[must_use]
    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs(1) / self.tick_rate_hz.max(1)
    }

    /// Feature configuration from the configured file, or defaults.
    pub fn load_features(&self) -> Result<FeatureConfig, RuntimeError> {
        match &self.feature_config_path {
            Some(path) => Ok(FeatureConfig::load(path)?),
            None => Ok(FeatureConfig::default()),
        }
    }
}

/// Bootstrap errors.
#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("Tick rate must be between 1 and 1000 Hz, got {0}")]
    InvalidTickRate(u32),

    #[error("Feature configuration: {0}")]
    FeatureConfig(#[from] ConfigError),
}
