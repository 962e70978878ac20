//! # Unbroken Chain Tracker
//!
//! Counts consecutive confirmed hits that land without the local player
//! taking damage. From the third hit on, each hit is worth +5% damage.
//!
//! ```text
//! ClientAttack(target) ──▶ pending[target] = now
//! DamageConfirmed(target) within 500 ms ──▶ chain += 1 (max 12)
//! PlayerDamaged | 5 s without a hit | disconnect ──▶ chain = 0
//! ```

use std::collections::HashMap;
use std::sync::Arc;

use lsu_bus::{
    ClientAttack, ClientTick, CombatListener, DamageConfirmed, HandlerResult, Listener,
    PlayerDamaged, ServerChange, ServerListener, TickListener,
};
use lsu_telemetry::log_event;
use parking_lot::Mutex;

use crate::config::LiveConfig;
use crate::domain::markup::fill_placeholders;
use crate::ports::{TimeSource, Timestamp};

const FEATURE: &str = "unbroken_chain";

/// How long a swing waits for the server to confirm damage.
pub const HIT_CONFIRMATION_TIMEOUT_MS: u64 = 500;
/// Highest tracked chain.
pub const MAX_CHAIN: u32 = 12;
/// First chain length that grants a bonus.
pub const BONUS_START_CHAIN: u32 = 3;
const BONUS_START_OFFSET: u32 = 2;
pub const BONUS_PER_HIT: u32 = 5;
/// Chain resets after this long without a confirmed hit.
pub const INACTIVE_RESET_MS: u64 = 5_000;

#[derive(Debug, Default)]
struct ChainState {
    /// Entity id → swing time, awaiting confirmation.
    pending: HashMap<i32, Timestamp>,
    count: u32,
    /// `None` until the first confirmed hit of a chain.
    last_confirmed: Option<Timestamp>,
}

impl ChainState {
    fn reset(&mut self) {
        self.pending.clear();
        self.count = 0;
        self.last_confirmed = None;
    }
}

/// Bonus percentage for a chain length.
#[must_use]
pub fn bonus_percent(count: u32) -> u32 {
    if count < BONUS_START_CHAIN {
        return 0;
    }
    ((count - BONUS_START_OFFSET) * BONUS_PER_HIT).min(MAX_CHAIN * BONUS_PER_HIT)
}

/// Tracks the unbroken hit chain for the HUD counter.
pub struct UnbrokenChainTracker {
    config: LiveConfig,
    clock: Arc<dyn TimeSource>,
    state: Mutex<ChainState>,
}

impl UnbrokenChainTracker {
    pub fn new(config: LiveConfig, clock: Arc<dyn TimeSource>) -> Self {
        Self {
            config,
            clock,
            state: Mutex::new(ChainState::default()),
        }
    }

    #[must_use]
    pub fn chain_count(&self) -> u32 {
        self.state.lock().count
    }

    #[must_use]
    pub fn bonus_percent(&self) -> u32 {
        bonus_percent(self.chain_count())
    }

    /// Swings still waiting for confirmation.
    #[must_use]
    pub fn pending_hits(&self) -> usize {
        self.state.lock().pending.len()
    }

    /// HUD text. Empty while there is no chain.
    #[must_use]
    pub fn display_text(&self) -> String {
        let count = self.chain_count();
        if count == 0 {
            return String::new();
        }
        let config = self.config.read();
        fill_placeholders(
            config.effective_chain_counter_format(),
            &[
                ("count", count.to_string().as_str()),
                ("bonus", bonus_percent(count).to_string().as_str()),
            ],
        )
    }

    /// Drop the chain and any pending swings.
    pub fn reset(&self) {
        self.state.lock().reset();
        log_event!(debug, FEATURE, "Tracker reset");
    }
}

impl CombatListener for UnbrokenChainTracker {
    fn on_client_attack(&self, event: &mut ClientAttack) -> HandlerResult {
        let Some(target) = event.target_id() else {
            return Ok(());
        };
        let now = self.clock.now();
        self.state.lock().pending.insert(target, now);
        log_event!(trace, FEATURE, "Pending hit", entity = target);
        Ok(())
    }

    fn on_damage_confirmed(&self, event: &mut DamageConfirmed) -> HandlerResult {
        let now = self.clock.now();
        let mut state = self.state.lock();
        let Some(swung_at) = state.pending.remove(&event.entity_id()) else {
            return Ok(());
        };

        let elapsed = now.saturating_sub(swung_at);
        if elapsed > HIT_CONFIRMATION_TIMEOUT_MS {
            log_event!(debug, FEATURE, "Hit confirmation too slow", elapsed_ms = elapsed);
            return Ok(());
        }

        state.count = (state.count + 1).min(MAX_CHAIN);
        state.last_confirmed = Some(now);
        log_event!(debug, FEATURE, "Chain extended", chain = state.count);
        Ok(())
    }

    fn on_player_damaged(&self, _event: &mut PlayerDamaged) -> HandlerResult {
        let mut state = self.state.lock();
        if state.count > 0 {
            log_event!(debug, FEATURE, "Chain broken by damage", chain = state.count);
        }
        state.reset();
        Ok(())
    }
}

impl TickListener for UnbrokenChainTracker {
    fn on_client_tick(&self, _event: &mut ClientTick) -> HandlerResult {
        let now = self.clock.now();
        let mut state = self.state.lock();

        if let Some(last) = state.last_confirmed {
            if state.count > 0 && now.saturating_sub(last) > INACTIVE_RESET_MS {
                log_event!(debug, FEATURE, "Chain expired", chain = state.count);
                state.reset();
            }
        }
        state
            .pending
            .retain(|_, swung_at| now.saturating_sub(*swung_at) <= HIT_CONFIRMATION_TIMEOUT_MS);
        Ok(())
    }
}

impl ServerListener for UnbrokenChainTracker {
    fn on_server_change(&self, event: &mut ServerChange) -> HandlerResult {
        if event.is_disconnected() {
            self.reset();
        }
        Ok(())
    }
}

impl Listener for UnbrokenChainTracker {
    fn name(&self) -> &str {
        "UnbrokenChainTracker"
    }

    fn is_enabled(&self) -> bool {
        self.config.read().chain_counter_enabled
    }

    fn as_combat(&self) -> Option<&dyn CombatListener> {
        Some(self)
    }

    fn as_tick(&self) -> Option<&dyn TickListener> {
        Some(self)
    }

    fn as_server(&self) -> Option<&dyn ServerListener> {
        Some(self)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use lsu_bus::DamageSource;

    use super::*;
    use crate::config::{FeatureConfig, DEFAULT_CHAIN_COUNTER_FORMAT};
    use crate::ports::ManualTimeSource;

    fn tracker() -> (UnbrokenChainTracker, Arc<ManualTimeSource>) {
        let clock = Arc::new(ManualTimeSource::new(10_000));
        let config = LiveConfig::new(FeatureConfig {
            chain_counter_enabled: true,
            ..FeatureConfig::default()
        });
        (UnbrokenChainTracker::new(config, clock.clone()), clock)
    }

    fn hit(tracker: &UnbrokenChainTracker, clock: &ManualTimeSource, entity: i32) {
        tracker
            .on_client_attack(&mut ClientAttack::new(Some(entity), clock.now()))
            .unwrap();
        clock.advance(100);
        tracker
            .on_damage_confirmed(&mut DamageConfirmed::new(entity, DamageSource::default()))
            .unwrap();
    }

    fn tick(tracker: &UnbrokenChainTracker) {
        tracker
            .on_client_tick(&mut ClientTick::new(0, Duration::from_millis(50)))
            .unwrap();
    }

    #[test]
    fn test_bonus_curve() {
        assert_eq!(bonus_percent(0), 0);
        assert_eq!(bonus_percent(2), 0);
        assert_eq!(bonus_percent(3), 5);
        assert_eq!(bonus_percent(4), 10);
        assert_eq!(bonus_percent(MAX_CHAIN), 50);
    }

    #[test]
    fn test_confirmed_hits_extend_chain() {
        let (tracker, clock) = tracker();
        for _ in 0..3 {
            hit(&tracker, &clock, 7);
        }
        assert_eq!(tracker.chain_count(), 3);
        assert_eq!(tracker.bonus_percent(), 5);
        assert_eq!(tracker.pending_hits(), 0);
    }

    #[test]
    fn test_chain_is_capped() {
        let (tracker, clock) = tracker();
        for _ in 0..20 {
            hit(&tracker, &clock, 7);
        }
        assert_eq!(tracker.chain_count(), MAX_CHAIN);
    }

    #[test]
    fn test_slow_confirmation_is_ignored() {
        let (tracker, clock) = tracker();
        tracker
            .on_client_attack(&mut ClientAttack::new(Some(7), clock.now()))
            .unwrap();
        clock.advance(HIT_CONFIRMATION_TIMEOUT_MS + 1);
        tracker
            .on_damage_confirmed(&mut DamageConfirmed::new(7, DamageSource::default()))
            .unwrap();
        assert_eq!(tracker.chain_count(), 0);
    }

    #[test]
    fn test_unswung_damage_is_ignored() {
        let (tracker, _clock) = tracker();
        tracker
            .on_damage_confirmed(&mut DamageConfirmed::new(9, DamageSource::default()))
            .unwrap();
        tracker
            .on_client_attack(&mut ClientAttack::new(None, 0))
            .unwrap();
        assert_eq!(tracker.chain_count(), 0);
        assert_eq!(tracker.pending_hits(), 0);
    }

    #[test]
    fn test_player_damage_breaks_chain() {
        let (tracker, clock) = tracker();
        hit(&tracker, &clock, 7);
        hit(&tracker, &clock, 8);
        tracker
            .on_client_attack(&mut ClientAttack::new(Some(9), clock.now()))
            .unwrap();

        tracker
            .on_player_damaged(&mut PlayerDamaged::new(1, DamageSource::default()))
            .unwrap();

        assert_eq!(tracker.chain_count(), 0);
        assert_eq!(tracker.pending_hits(), 0);
    }

    #[test]
    fn test_inactivity_resets_on_tick() {
        let (tracker, clock) = tracker();
        hit(&tracker, &clock, 7);

        clock.advance(INACTIVE_RESET_MS);
        tick(&tracker);
        assert_eq!(tracker.chain_count(), 1);

        clock.advance(1);
        tick(&tracker);
        assert_eq!(tracker.chain_count(), 0);
    }

    #[test]
    fn test_tick_expires_stale_swings() {
        let (tracker, clock) = tracker();
        tracker
            .on_client_attack(&mut ClientAttack::new(Some(7), clock.now()))
            .unwrap();
        clock.advance(HIT_CONFIRMATION_TIMEOUT_MS + 1);
        tick(&tracker);
        assert_eq!(tracker.pending_hits(), 0);
    }

    #[test]
    fn test_disconnect_resets() {
        let (tracker, clock) = tracker();
        hit(&tracker, &clock, 7);

        tracker
            .on_server_change(&mut ServerChange::connected("play.example.net"))
            .unwrap();
        assert_eq!(tracker.chain_count(), 1);

        tracker
            .on_server_change(&mut ServerChange::disconnected("play.example.net"))
            .unwrap();
        assert_eq!(tracker.chain_count(), 0);
    }

    #[test]
    fn test_display_text() {
        let (tracker, clock) = tracker();
        assert_eq!(tracker.display_text(), "");

        for _ in 0..4 {
            hit(&tracker, &clock, 7);
        }
        let expected = DEFAULT_CHAIN_COUNTER_FORMAT
            .replace("{{count}}", "4")
            .replace("{{bonus}}", "10");
        assert_eq!(tracker.display_text(), expected);

        tracker
            .config
            .update(|c| c.chain_counter_format = "{{count}}x".to_string())
            .unwrap();
        assert_eq!(tracker.display_text(), "4x");
    }
}
