//! # Manual Shard Swap Tracker
//!
//! Remembers when the player typed `/hub` or `/safelogout`, so a shard swap
//! shortly after can be told apart from one the server forced.

use std::sync::Arc;

use lsu_bus::{
    CommandListener, CommandSent, HandlerResult, Listener, ServerChange, ServerListener,
    ShardSwap,
};
use lsu_telemetry::log_event;
use parking_lot::Mutex;

use crate::config::LiveConfig;
use crate::ports::{TimeSource, Timestamp};

const FEATURE: &str = "manual_shard_swap";

/// Commands that move the player to another shard.
pub const SWAP_COMMANDS: [&str; 2] = ["hub", "safelogout"];

/// A swap within this long of a swap command counts as manual.
pub const TRACKING_WINDOW_MS: u64 = 60_000;

pub struct ManualShardSwapTracker {
    config: LiveConfig,
    clock: Arc<dyn TimeSource>,
    last_command: Mutex<Option<Timestamp>>,
}

impl ManualShardSwapTracker {
    pub fn new(config: LiveConfig, clock: Arc<dyn TimeSource>) -> Self {
        Self {
            config,
            clock,
            last_command: Mutex::new(None),
        }
    }

    /// Whether a swap command was sent within the tracking window.
    #[must_use]
    pub fn was_recent_manual_swap(&self) -> bool {
        let Some(sent_at) = *self.last_command.lock() else {
            return false;
        };
        self.clock.now().saturating_sub(sent_at) <= TRACKING_WINDOW_MS
    }

    pub fn reset_tracking(&self) {
        *self.last_command.lock() = None;
    }
}

impl CommandListener for ManualShardSwapTracker {
    fn on_command_sent(&self, event: &mut CommandSent) -> HandlerResult {
        let command = event.command().trim().to_lowercase();
        if SWAP_COMMANDS.contains(&command.as_str()) {
            *self.last_command.lock() = Some(self.clock.now());
            log_event!(debug, FEATURE, "Tracked swap command", command = %command);
        }
        Ok(())
    }
}

impl ServerListener for ManualShardSwapTracker {
    fn on_server_change(&self, event: &mut ServerChange) -> HandlerResult {
        if event.is_disconnected() {
            self.reset_tracking();
            log_event!(debug, FEATURE, "Cleared on disconnect");
        }
        Ok(())
    }

    fn on_shard_swap(&self, event: &mut ShardSwap) -> HandlerResult {
        log_event!(
            info,
            FEATURE,
            "Shard swap",
            shard = event.shard_name(),
            manual = self.was_recent_manual_swap()
        );
        Ok(())
    }
}

impl Listener for ManualShardSwapTracker {
    fn name(&self) -> &str {
        "ManualShardSwapTracker"
    }

    fn is_enabled(&self) -> bool {
        self.config.read().track_manual_shard_swaps
    }

    fn as_command(&self) -> Option<&dyn CommandListener> {
        Some(self)
    }

    fn as_server(&self) -> Option<&dyn ServerListener> {
        Some(self)
    }
}
