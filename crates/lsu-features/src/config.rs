//! # Feature Configuration
//!
//! [`FeatureConfig`] holds every user-facing toggle and format string. It is
//! stored as JSON; missing fields fall back to their defaults so older files
//! keep loading.
//!
//! Listeners never cache it. They hold a [`LiveConfig`] handle and read it
//! inside `is_enabled()` and their handlers, so a change applied through
//! [`LiveConfig::update`] takes effect on the next post.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use parking_lot::{RwLock, RwLockReadGuard};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Default private message layout.
pub const DEFAULT_PM_FORMAT: &str =
    "<light_purple><bold>{{direction}}</bold> {{sender}}</light_purple> <white>➡ {{message}}</white>";

/// Default chain counter layout.
pub const DEFAULT_CHAIN_COUNTER_FORMAT: &str =
    "<gray>Chain:</gray> <gold>{{count}}</gold> <gray>(+{{bonus}}% dmg)</gray>";

/// Server the title screen button connects to.
pub const DEFAULT_QUICK_JOIN_ADDRESS: &str = "lifesteal.net";

/// Accepted range for the rare item scale.
pub const RARE_ITEM_SCALE_RANGE: std::ops::RangeInclusive<f32> = 0.1..=10.0;

/// User-facing feature options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureConfig {
    /// Reformat `(MSG From|To name) text` lines.
    pub enable_pm_format: bool,
    /// Layout for formatted private messages. Blank means the default.
    pub pm_format: String,

    /// Strip the second bracketed chat tag in front of sender names.
    pub disable_chat_tags: bool,
    /// Recolor a rank's trailing `+` to match the rank name.
    pub remove_unique_plus_color: bool,

    /// Track unbroken hit chains.
    pub chain_counter_enabled: bool,
    /// Layout for the chain counter. Blank means the default.
    pub chain_counter_format: String,

    /// Replace title screen splashes.
    pub custom_splashes: bool,
    /// Splash pool. Empty means the fallback splash.
    pub splashes: Vec<String>,

    /// Scale rare dropped items up.
    pub rare_item_scale_enabled: bool,
    pub rare_item_scale: f32,

    /// Remember `/hub` and `/safelogout` so shard swaps can be attributed.
    pub track_manual_shard_swaps: bool,

    /// Add a one-click join button to the title screen.
    pub quick_join_button_enabled: bool,
    pub quick_join_address: String,
}

impl Default for FeatureConfig {
    fn default() -> Self {
        Self {
            enable_pm_format: false,
            pm_format: DEFAULT_PM_FORMAT.to_string(),
            disable_chat_tags: false,
            remove_unique_plus_color: false,
            chain_counter_enabled: false,
            chain_counter_format: DEFAULT_CHAIN_COUNTER_FORMAT.to_string(),
            custom_splashes: true,
            splashes: Vec::new(),
            rare_item_scale_enabled: true,
            rare_item_scale: 2.0,
            track_manual_shard_swaps: true,
            quick_join_button_enabled: true,
            quick_join_address: DEFAULT_QUICK_JOIN_ADDRESS.to_string(),
        }
    }
}

impl FeatureConfig {
    /// Parse and validate a JSON document.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Write the configuration as pretty JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let json = self.to_json()?;
        fs::write(path, json).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check format placeholders and numeric ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.pm_format.trim().is_empty() && !self.pm_format.contains("{{message}}") {
            return Err(ConfigError::MissingPlaceholder {
                field: "pm_format",
                placeholder: "{{message}}",
            });
        }
        if !self.chain_counter_format.trim().is_empty()
            && !self.chain_counter_format.contains("{{count}}")
        {
            return Err(ConfigError::MissingPlaceholder {
                field: "chain_counter_format",
                placeholder: "{{count}}",
            });
        }
        if self.quick_join_address.trim().is_empty() {
            return Err(ConfigError::Blank {
                field: "quick_join_address",
            });
        }
        if !RARE_ITEM_SCALE_RANGE.contains(&self.rare_item_scale) {
            return Err(ConfigError::OutOfRange {
                field: "rare_item_scale",
                value: self.rare_item_scale.to_string(),
            });
        }
        Ok(())
    }

    /// `pm_format`, or the default when blank.
    #[must_use]
    pub fn effective_pm_format(&self) -> &str {
        non_blank_or(&self.pm_format, DEFAULT_PM_FORMAT)
    }

    /// `chain_counter_format`, or the default when blank.
    #[must_use]
    pub fn effective_chain_counter_format(&self) -> &str {
        non_blank_or(&self.chain_counter_format, DEFAULT_CHAIN_COUNTER_FORMAT)
    }
}

fn non_blank_or<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.trim().is_empty() {
        fallback
    } else {
        value
    }
}

/// Shared, live-updatable handle to the feature configuration.
#[derive(Debug, Clone, Default)]
pub struct LiveConfig {
    inner: Arc<RwLock<FeatureConfig>>,
}

impl LiveConfig {
    pub fn new(config: FeatureConfig) -> Self {
        Self {
            inner: Arc::new(RwLock::new(config)),
        }
    }

    /// Borrow the current configuration. Keep the guard short-lived.
    pub fn read(&self) -> RwLockReadGuard<'_, FeatureConfig> {
        self.inner.read()
    }

    /// Copy of the current configuration.
    #[must_use]
    pub fn snapshot(&self) -> FeatureConfig {
        self.inner.read().clone()
    }

    /// Apply an edit. The edit is validated before it becomes visible; a
    /// rejected edit leaves the configuration unchanged.
    pub fn update(&self, edit: impl FnOnce(&mut FeatureConfig)) -> Result<(), ConfigError> {
        let mut next = self.snapshot();
        edit(&mut next);
        self.replace(next)
    }

    /// Swap in a whole new configuration after validating it.
    pub fn replace(&self, config: FeatureConfig) -> Result<(), ConfigError> {
        config.validate()?;
        *self.inner.write() = config;
        Ok(())
    }
}

impl From<FeatureConfig> for LiveConfig {
    fn from(config: FeatureConfig) -> Self {
        Self::new(config)
    }
}
