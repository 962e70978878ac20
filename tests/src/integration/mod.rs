//! # Integration Scenarios
//!
//! Each scenario boots a full [`ClientRuntime`] against a manual clock and
//! a recording chat sink, then drives it only through the probes, the way
//! game hooks would.

use std::sync::Arc;

use lsu_features::{ChatSink, FeatureConfig, ManualTimeSource, RecordingChatSink, TimeSource};
use lsu_runtime::{ClientRuntime, RuntimeConfig};

mod chat_pipeline;
mod combat_chain;
mod extension_listeners;
mod server_flow;
mod title_screen;

/// Entity id the harness uses for the local player.
pub const LOCAL_PLAYER: i32 = 1;

/// A runtime plus handles on its host ports.
pub struct Harness {
    pub runtime: ClientRuntime,
    pub clock: Arc<ManualTimeSource>,
    pub sink: Arc<RecordingChatSink>,
}

impl Harness {
    /// Boot with `features`. Panics on invalid settings; tests only.
    pub fn new(features: FeatureConfig) -> Self {
        let clock = Arc::new(ManualTimeSource::new(1_000));
        let sink = Arc::new(RecordingChatSink::new());
        let config = RuntimeConfig {
            local_player_id: Some(LOCAL_PLAYER),
            ..RuntimeConfig::default()
        };
        let runtime = match ClientRuntime::with_ports(
            config,
            features,
            Arc::clone(&clock) as Arc<dyn TimeSource>,
            Arc::clone(&sink) as Arc<dyn ChatSink>,
        ) {
            Ok(runtime) => runtime,
            Err(e) => panic!("harness bootstrap failed: {e}"),
        };
        Self {
            runtime,
            clock,
            sink,
        }
    }

    /// Every feature switched on.
    pub fn all_enabled() -> Self {
        Self::new(FeatureConfig {
            enable_pm_format: true,
            disable_chat_tags: true,
            remove_unique_plus_color: true,
            chain_counter_enabled: true,
            ..FeatureConfig::default()
        })
    }
}
