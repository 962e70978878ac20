//! # Client Runtime
//!
//! Wires the bus, the live feature configuration, every feature and every
//! probe together, then drives the fixed-step tick loop.

use std::sync::Arc;

use lsu_bus::EventBus;
use lsu_features::{ChatSink, FeatureConfig, LiveConfig, LogChatSink, SystemTimeSource, TimeSource};
use tokio::sync::watch;
use tokio::time::{self, MissedTickBehavior};
use tracing::{debug, info};

use crate::config::{RuntimeConfig, RuntimeError};
use crate::features::FeatureSet;
use crate::probes::{
    ChatProbe, CombatProbe, CommandProbe, RenderProbe, ServerProbe, TickProbe, UiProbe,
};

/// The running client: one bus, one config, every feature registered.
pub struct ClientRuntime {
    config: RuntimeConfig,
    bus: Arc<EventBus>,
    live_config: LiveConfig,
    features: FeatureSet,

    chat: ChatProbe,
    command: CommandProbe,
    combat: CombatProbe,
    tick: TickProbe,
    server: ServerProbe,
    render: RenderProbe,
    ui: UiProbe,

    shutdown_tx: watch::Sender<bool>,
}

impl ClientRuntime {
    /// Bootstrap with the system clock and a logging chat sink.
    pub fn new(config: RuntimeConfig) -> Result<Self, RuntimeError> {
        let features = config.load_features()?;
        Self::with_ports(
            config,
            features,
            Arc::new(SystemTimeSource),
            Arc::new(LogChatSink),
        )
    }

    /// Bootstrap with explicit feature settings and host ports.
    pub fn with_ports(
        config: RuntimeConfig,
        features: FeatureConfig,
        clock: Arc<dyn TimeSource>,
        sink: Arc<dyn ChatSink>,
    ) -> Result<Self, RuntimeError> {
        config.validate()?;
        features.validate()?;

        let bus = Arc::new(EventBus::new());
        let live_config = LiveConfig::new(features);
        let feature_set = FeatureSet::new(&live_config, Arc::clone(&clock), sink);
        feature_set.register_all(&bus);

        let combat = CombatProbe::new(Arc::clone(&bus), clock);
        combat.set_local_player(config.local_player_id);

        let (shutdown_tx, _) = watch::channel(false);

        info!(
            tick_rate_hz = config.tick_rate_hz,
            feature_config = ?config.feature_config_path,
            "Client runtime ready"
        );

        Ok(Self {
            chat: ChatProbe::new(Arc::clone(&bus)),
            command: CommandProbe::new(Arc::clone(&bus)),
            combat,
            tick: TickProbe::new(Arc::clone(&bus)),
            server: ServerProbe::new(Arc::clone(&bus)),
            render: RenderProbe::new(Arc::clone(&bus)),
            ui: UiProbe::new(Arc::clone(&bus)),
            config,
            bus,
            live_config,
            features: feature_set,
            shutdown_tx,
        })
    }

    /// Step the tick probe `ticks` times at the configured rate.
    pub async fn run_for(&self, ticks: u64) -> u64 {
        let mut interval = time::interval(self.config.tick_interval());
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        for _ in 0..ticks {
            interval.tick().await;
            self.tick.step();
        }
        self.tick.ticks()
    }

    /// Step the tick probe until [`ClientRuntime::shutdown`] is called.
    pub async fn run_until_shutdown(&self) -> u64 {
        let mut shutdown_rx = self.shutdown_tx.subscribe();
        let mut interval = time::interval(self.config.tick_interval());
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            let stopped = *shutdown_rx.borrow();
            if stopped {
                break;
            }
            tokio::select! {
                _ = interval.tick() => {
                    self.tick.step();
                }
                changed = shutdown_rx.changed() => {
                    if changed.is_err() {
                        break;
                    }
                }
            }
        }

        debug!(ticks = self.tick.ticks(), "Tick loop stopped");
        self.tick.ticks()
    }

    /// Stop the tick loop and detach every feature from the bus.
    pub fn shutdown(&self) {
        self.shutdown_tx.send_replace(true);
        let removed = self.features.unregister_all(&self.bus);
        info!(
            entries = removed,
            events_posted = self.bus.events_posted(),
            handler_faults = self.bus.handler_faults(),
            "Client runtime stopped"
        );
    }

    #[must_use]
    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    #[must_use]
    pub fn bus(&self) -> &Arc<EventBus> {
        &self.bus
    }

    /// Settings shared with every feature. Edits apply on the next post.
    #[must_use]
    pub fn live_config(&self) -> &LiveConfig {
        &self.live_config
    }

    #[must_use]
    pub fn features(&self) -> &FeatureSet {
        &self.features
    }

    #[must_use]
    pub fn chat(&self) -> &ChatProbe {
        &self.chat
    }

    #[must_use]
    pub fn command(&self) -> &CommandProbe {
        &self.command
    }

    #[must_use]
    pub fn combat(&self) -> &CombatProbe {
        &self.combat
    }

    #[must_use]
    pub fn tick(&self) -> &TickProbe {
        &self.tick
    }

    #[must_use]
    pub fn server(&self) -> &ServerProbe {
        &self.server
    }

    #[must_use]
    pub fn render(&self) -> &RenderProbe {
        &self.render
    }

    #[must_use]
    pub fn ui(&self) -> &UiProbe {
        &self.ui
    }
}
