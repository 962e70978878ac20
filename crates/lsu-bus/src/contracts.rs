//! # Capability Contracts
//!
//! A contract is a named bundle of handler methods for one occurrence
//! category. Every method has a no-op default, so a listener overrides only
//! what it cares about.
//!
//! [`CONTRACT_TABLE`] is the single source of truth mapping each
//! [`Capability`] to the occurrence kinds it covers. Registration reads it to
//! decide which dispatch lists a listener joins; routing delivers each kind
//! to the contract the table names for it.
//!
//! ## Adding a category
//!
//! 1. Add the occurrence type in `lsu-types` (and its `EventKind`).
//! 2. Add a contract trait here, one method per occurrence type.
//! 3. Add one row to [`CONTRACT_TABLE`] and an accessor on `Listener`.
//! 4. Add one arm to the router.

use std::fmt;

use lsu_types::{
    ChatMessageReceived, ChatMessageSent, ClientAttack, ClientTick, CommandSent, DamageConfirmed,
    EventKind, ItemRender, PlayerDamaged, PlayerNameRender, ServerChange, ShardSwap,
    SplashTextRequest, TitleScreenInit,
};

/// Result of a single handler invocation.
///
/// An `Err` is logged by the bus against the listener and the occurrence;
/// it never reaches the producer and never stops delivery to others.
pub type HandlerResult = anyhow::Result<()>;

/// Named occurrence category a listener can subscribe to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Capability {
    Combat,
    Chat,
    Tick,
    Server,
    Render,
    Ui,
    Command,
}

/// Capability → covered occurrence kinds. Rows are in `Capability` order.
pub const CONTRACT_TABLE: [(Capability, &[EventKind]); Capability::COUNT] = [
    (
        Capability::Combat,
        &[
            EventKind::ClientAttack,
            EventKind::DamageConfirmed,
            EventKind::PlayerDamaged,
        ],
    ),
    (
        Capability::Chat,
        &[EventKind::ChatMessageReceived, EventKind::ChatMessageSent],
    ),
    (Capability::Tick, &[EventKind::ClientTick]),
    (
        Capability::Server,
        &[EventKind::ServerChange, EventKind::ShardSwap],
    ),
    (
        Capability::Render,
        &[EventKind::ItemRender, EventKind::PlayerNameRender],
    ),
    (
        Capability::Ui,
        &[EventKind::TitleScreenInit, EventKind::SplashTextRequest],
    ),
    (Capability::Command, &[EventKind::CommandSent]),
];

impl Capability {
    pub const COUNT: usize = 7;

    pub const ALL: [Capability; Self::COUNT] = [
        Self::Combat,
        Self::Chat,
        Self::Tick,
        Self::Server,
        Self::Render,
        Self::Ui,
        Self::Command,
    ];

    /// Occurrence kinds covered by this contract.
    #[must_use]
    pub fn kinds(self) -> &'static [EventKind] {
        CONTRACT_TABLE[self as usize].1
    }

    /// Contract responsible for an occurrence kind.
    #[must_use]
    pub fn for_kind(kind: EventKind) -> Capability {
        CONTRACT_TABLE
            .iter()
            .find(|(_, kinds)| kinds.contains(&kind))
            .map(|(capability, _)| *capability)
            // Every kind has a row; `table_covers_every_kind_once` guards it.
            .unwrap_or(Capability::Command)
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Combat => "combat",
            Self::Chat => "chat",
            Self::Tick => "tick",
            Self::Server => "server",
            Self::Render => "render",
            Self::Ui => "ui",
            Self::Command => "command",
        };
        f.write_str(name)
    }
}

// =============================================================================
// CONTRACTS
// =============================================================================

/// Reacts to combat occurrences.
pub trait CombatListener {
    /// The local player swung at an entity.
    fn on_client_attack(&self, _event: &mut ClientAttack) -> HandlerResult {
        Ok(())
    }

    /// The server confirmed damage on a non-local entity.
    fn on_damage_confirmed(&self, _event: &mut DamageConfirmed) -> HandlerResult {
        Ok(())
    }

    /// The local player was damaged.
    fn on_player_damaged(&self, _event: &mut PlayerDamaged) -> HandlerResult {
        Ok(())
    }
}

/// Reacts to chat occurrences.
pub trait ChatListener {
    /// A chat line arrived. May rewrite or cancel it.
    fn on_chat_message_received(&self, _event: &mut ChatMessageReceived) -> HandlerResult {
        Ok(())
    }

    /// The local player sent a chat line. May cancel it.
    fn on_chat_message_sent(&self, _event: &mut ChatMessageSent) -> HandlerResult {
        Ok(())
    }
}

/// Reacts to the fixed-step tick.
pub trait TickListener {
    /// Called once per game step. Must not block.
    fn on_client_tick(&self, _event: &mut ClientTick) -> HandlerResult {
        Ok(())
    }
}

/// Reacts to server lifecycle changes.
pub trait ServerListener {
    /// Connected to or disconnected from a server.
    fn on_server_change(&self, _event: &mut ServerChange) -> HandlerResult {
        Ok(())
    }

    /// Moved to another shard of the same server.
    fn on_shard_swap(&self, _event: &mut ShardSwap) -> HandlerResult {
        Ok(())
    }
}

/// Reacts to render passes.
///
/// These fire every frame. Implementations should check cheap state first
/// and avoid allocating.
pub trait RenderListener {
    /// An item is about to be drawn. May adjust its transform or cancel it.
    fn on_item_render(&self, _event: &mut ItemRender) -> HandlerResult {
        Ok(())
    }

    /// A player name is about to be drawn. May rewrite the display name.
    fn on_player_name_render(&self, _event: &mut PlayerNameRender) -> HandlerResult {
        Ok(())
    }
}

/// Reacts to UI moments.
pub trait UiListener {
    fn on_title_screen_init(&self, _event: &mut TitleScreenInit) -> HandlerResult {
        Ok(())
    }

    fn on_splash_text_request(&self, _event: &mut SplashTextRequest) -> HandlerResult {
        Ok(())
    }
}

/// Reacts to locally issued commands.
pub trait CommandListener {
    fn on_command_sent(&self, _event: &mut CommandSent) -> HandlerResult {
        Ok(())
    }
}
