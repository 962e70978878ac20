//! Combat occurrences: swings, server-confirmed hits, local damage.

use super::impl_event;

/// Subset of a server damage packet that features care about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DamageSource {
    /// Registry id of the damage type.
    pub source_type_id: i32,
    /// Entity ultimately responsible, if any.
    pub cause_entity_id: Option<i32>,
    /// Entity that dealt the damage directly (e.g. the arrow), if any.
    pub direct_entity_id: Option<i32>,
}

/// The local player initiated an attack. Posted before the server confirms.
///
/// Cancellable: the attack probe skips sending the attack when a listener
/// vetoes it. The bus itself ignores the flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientAttack {
    target_id: Option<i32>,
    timestamp_ms: u64,
    cancelled: bool,
}

impl ClientAttack {
    pub fn new(target_id: Option<i32>, timestamp_ms: u64) -> Self {
        Self {
            target_id,
            timestamp_ms,
            cancelled: false,
        }
    }

    /// Entity id of the target, `None` when swinging at nothing.
    pub fn target_id(&self) -> Option<i32> {
        self.target_id
    }

    /// Wall-clock time of the swing in milliseconds.
    pub fn timestamp_ms(&self) -> u64 {
        self.timestamp_ms
    }
}

impl_event!(ClientAttack, cancellable);

/// Server confirmed damage dealt to a non-local entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DamageConfirmed {
    entity_id: i32,
    source: DamageSource,
}

impl DamageConfirmed {
    pub fn new(entity_id: i32, source: DamageSource) -> Self {
        Self { entity_id, source }
    }

    pub fn entity_id(&self) -> i32 {
        self.entity_id
    }

    pub fn source(&self) -> DamageSource {
        self.source
    }
}

impl_event!(DamageConfirmed);

/// The local player received damage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerDamaged {
    entity_id: i32,
    source: DamageSource,
}

impl PlayerDamaged {
    pub fn new(entity_id: i32, source: DamageSource) -> Self {
        Self { entity_id, source }
    }

    pub fn entity_id(&self) -> i32 {
        self.entity_id
    }

    pub fn source(&self) -> DamageSource {
        self.source
    }
}

impl_event!(PlayerDamaged);
