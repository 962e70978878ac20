use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use lsu_bus::{ClientAttack, DamageConfirmed, DamageSource, EventBus, PlayerDamaged};
use lsu_features::TimeSource;

/// Stored when the local player id is not known yet. Outside the `i32`
/// range, so every entity id stays representable.
const UNKNOWN_PLAYER: i64 = i64::MIN;

/// Combat hooks.
pub struct CombatProbe {
    bus: Arc<EventBus>,
    clock: Arc<dyn TimeSource>,
    local_player: AtomicI64,
}

impl CombatProbe {
    pub fn new(bus: Arc<EventBus>, clock: Arc<dyn TimeSource>) -> Self {
        Self {
            bus,
            clock,
            local_player: AtomicI64::new(UNKNOWN_PLAYER),
        }
    }

    /// Set once the client knows which entity is the local player.
    pub fn set_local_player(&self, entity_id: Option<i32>) {
        let stored = entity_id.map_or(UNKNOWN_PLAYER, i64::from);
        self.local_player.store(stored, Ordering::Relaxed);
    }

    #[must_use]
    pub fn local_player(&self) -> Option<i32> {
        i32::try_from(self.local_player.load(Ordering::Relaxed)).ok()
    }

    /// The player swung. Returns whether the swing should go ahead.
    pub fn attack(&self, target: Option<i32>) -> bool {
        let mut event = ClientAttack::new(target, self.clock.now());
        self.bus.post(&mut event);
        !event.is_cancelled()
    }

    /// A damage packet arrived for `entity_id`.
    ///
    /// Damage to the local player becomes `PlayerDamaged`; anything else is
    /// a confirmation of the player's own hit.
    pub fn damage(&self, entity_id: i32, source: DamageSource) {
        if self.local_player() == Some(entity_id) {
            self.bus.post(&mut PlayerDamaged::new(entity_id, source));
        } else {
            self.bus.post(&mut DamageConfirmed::new(entity_id, source));
        }
    }
}
