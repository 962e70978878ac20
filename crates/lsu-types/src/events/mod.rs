//! # Occurrence Types
//!
//! Every occurrence the bus can deliver, grouped by the contract that
//! handles it. Each type implements [`Event`], which ties it to exactly one
//! [`EventKind`] and to one arm of the borrowed tagged union [`EventMut`]
//! used for routing.
//!
//! ## Cancellation contract
//!
//! Cancellable types (`ClientAttack`, `ChatMessageReceived`,
//! `ChatMessageSent`, `ItemRender`) carry a veto flag. The bus never acts on
//! it: every listener still runs after a veto. The *producer* checks
//! `is_cancelled()` once `post` returns and suppresses its own default
//! behaviour.

mod chat;
mod combat;
mod command;
mod render;
mod server;
mod tick;
mod ui;

pub use chat::{ChatMessageReceived, ChatMessageSent};
pub use combat::{ClientAttack, DamageConfirmed, DamageSource, PlayerDamaged};
pub use command::CommandSent;
pub use render::{ItemRender, PlayerNameRender, PoseTransform};
pub use server::{ServerChange, ServerChangeType, ShardSwap};
pub use tick::ClientTick;
pub use ui::{ScreenButton, SplashTextRequest, TitleScreenInit};

use std::fmt;

use crate::errors::EventError;
use crate::kind::EventKind;

/// An occurrence that can be posted to the bus.
///
/// Implemented once per occurrence type through `impl_event!`; the kind and
/// cancellability are properties of the type, not of the instance.
pub trait Event: fmt::Debug + Send + 'static {
    /// Routing key for this type.
    const KIND: EventKind;

    /// Routing key (instance convenience).
    fn kind(&self) -> EventKind {
        Self::KIND
    }

    /// Whether this occurrence type may be vetoed.
    fn is_cancellable(&self) -> bool {
        Self::KIND.is_cancellable()
    }

    /// Whether a listener vetoed this occurrence.
    fn is_cancelled(&self) -> bool {
        false
    }

    /// Sets the veto flag.
    ///
    /// # Errors
    ///
    /// Returns [`EventError::NotCancellable`] when the type is not
    /// cancellable. Callers must not ignore it: it means a listener treats
    /// this occurrence as vetoable when it is not.
    fn set_cancelled(&mut self, cancelled: bool) -> Result<(), EventError> {
        let _ = cancelled;
        Err(EventError::NotCancellable { kind: Self::KIND })
    }

    /// Borrowed tagged-union view used by the router.
    fn as_event_mut(&mut self) -> EventMut<'_>;
}

/// Exclusive borrow of one occurrence, tagged by its type.
///
/// The router matches on this once per listener call. The borrow ends when
/// the handler returns, so no listener can keep the occurrence.
#[derive(Debug)]
pub enum EventMut<'a> {
    ClientAttack(&'a mut ClientAttack),
    DamageConfirmed(&'a mut DamageConfirmed),
    PlayerDamaged(&'a mut PlayerDamaged),
    ChatMessageReceived(&'a mut ChatMessageReceived),
    ChatMessageSent(&'a mut ChatMessageSent),
    ClientTick(&'a mut ClientTick),
    ServerChange(&'a mut ServerChange),
    ShardSwap(&'a mut ShardSwap),
    ItemRender(&'a mut ItemRender),
    PlayerNameRender(&'a mut PlayerNameRender),
    TitleScreenInit(&'a mut TitleScreenInit),
    SplashTextRequest(&'a mut SplashTextRequest),
    CommandSent(&'a mut CommandSent),
}

impl EventMut<'_> {
    /// Routing key of the borrowed occurrence.
    #[must_use]
    pub fn kind(&self) -> EventKind {
        match self {
            Self::ClientAttack(_) => EventKind::ClientAttack,
            Self::DamageConfirmed(_) => EventKind::DamageConfirmed,
            Self::PlayerDamaged(_) => EventKind::PlayerDamaged,
            Self::ChatMessageReceived(_) => EventKind::ChatMessageReceived,
            Self::ChatMessageSent(_) => EventKind::ChatMessageSent,
            Self::ClientTick(_) => EventKind::ClientTick,
            Self::ServerChange(_) => EventKind::ServerChange,
            Self::ShardSwap(_) => EventKind::ShardSwap,
            Self::ItemRender(_) => EventKind::ItemRender,
            Self::PlayerNameRender(_) => EventKind::PlayerNameRender,
            Self::TitleScreenInit(_) => EventKind::TitleScreenInit,
            Self::SplashTextRequest(_) => EventKind::SplashTextRequest,
            Self::CommandSent(_) => EventKind::CommandSent,
        }
    }
}

/// Implements [`Event`] for an occurrence type.
///
/// The `cancellable` form expects a `cancelled: bool` field and also adds the
/// inherent `cancel()` / `is_cancelled()` helpers, so vetoing a
/// non-cancellable type does not compile.
macro_rules! impl_event {
    ($ty:ident, cancellable) => {
        impl $crate::events::Event for $ty {
            const KIND: $crate::kind::EventKind = $crate::kind::EventKind::$ty;

            fn is_cancelled(&self) -> bool {
                self.cancelled
            }

            fn set_cancelled(&mut self, cancelled: bool) -> Result<(), $crate::errors::EventError> {
                self.cancelled = cancelled;
                Ok(())
            }

            fn as_event_mut(&mut self) -> $crate::events::EventMut<'_> {
                $crate::events::EventMut::$ty(self)
            }
        }

        impl $ty {
            /// Vetoes this occurrence. Later listeners still run; the
            /// producer decides what the veto means.
            pub fn cancel(&mut self) {
                self.cancelled = true;
            }

            /// Whether any listener vetoed this occurrence.
            #[must_use]
            pub fn is_cancelled(&self) -> bool {
                self.cancelled
            }
        }
    };
    ($ty:ident) => {
        impl $crate::events::Event for $ty {
            const KIND: $crate::kind::EventKind = $crate::kind::EventKind::$ty;

            fn as_event_mut(&mut self) -> $crate::events::EventMut<'_> {
                $crate::events::EventMut::$ty(self)
            }
        }
    };
}

pub(crate) use impl_event;
