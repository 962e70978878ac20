//! # Event Kinds
//!
//! Closed enumeration of every occurrence type the bus can route. The kind
//! is derived from an occurrence's Rust type (`Event::KIND`) and is used as
//! the dispatch table key.

use std::fmt;

/// Routing key for an occurrence type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EventKind {
    // =========================================================================
    // COMBAT
    // =========================================================================
    /// Local player swung at an entity (before server confirmation).
    ClientAttack,
    /// Server confirmed damage on a non-local entity.
    DamageConfirmed,
    /// Local player took damage.
    PlayerDamaged,

    // =========================================================================
    // CHAT
    // =========================================================================
    /// Chat line received from the server.
    ChatMessageReceived,
    /// Local player sent a chat line.
    ChatMessageSent,

    // =========================================================================
    // TICK
    // =========================================================================
    /// One fixed game step elapsed.
    ClientTick,

    // =========================================================================
    // SERVER LIFECYCLE
    // =========================================================================
    /// Connected to or disconnected from a server.
    ServerChange,
    /// Moved to a different named shard on the current server.
    ShardSwap,

    // =========================================================================
    // RENDER
    // =========================================================================
    /// Dropped item about to be rendered.
    ItemRender,
    /// Player name about to be rendered.
    PlayerNameRender,

    // =========================================================================
    // UI
    // =========================================================================
    /// Title screen was initialised.
    TitleScreenInit,
    /// Title screen asked for a splash text.
    SplashTextRequest,

    // =========================================================================
    // COMMAND
    // =========================================================================
    /// Local player issued a command.
    CommandSent,
}

impl EventKind {
    /// Number of kinds (size of the dispatch table).
    pub const COUNT: usize = 13;

    /// Every kind, in declaration order.
    pub const ALL: [EventKind; Self::COUNT] = [
        Self::ClientAttack,
        Self::DamageConfirmed,
        Self::PlayerDamaged,
        Self::ChatMessageReceived,
        Self::ChatMessageSent,
        Self::ClientTick,
        Self::ServerChange,
        Self::ShardSwap,
        Self::ItemRender,
        Self::PlayerNameRender,
        Self::TitleScreenInit,
        Self::SplashTextRequest,
        Self::CommandSent,
    ];

    /// Dense index into a `[_; EventKind::COUNT]` table.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Whether occurrences of this kind may be vetoed.
    #[must_use]
    pub const fn is_cancellable(self) -> bool {
        matches!(
            self,
            Self::ClientAttack | Self::ChatMessageReceived | Self::ChatMessageSent | Self::ItemRender
        )
    }

    /// Stable name used in log fields.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::ClientAttack => "ClientAttack",
            Self::DamageConfirmed => "DamageConfirmed",
            Self::PlayerDamaged => "PlayerDamaged",
            Self::ChatMessageReceived => "ChatMessageReceived",
            Self::ChatMessageSent => "ChatMessageSent",
            Self::ClientTick => "ClientTick",
            Self::ServerChange => "ServerChange",
            Self::ShardSwap => "ShardSwap",
            Self::ItemRender => "ItemRender",
            Self::PlayerNameRender => "PlayerNameRender",
            Self::TitleScreenInit => "TitleScreenInit",
            Self::SplashTextRequest => "SplashTextRequest",
            Self::CommandSent => "CommandSent",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
