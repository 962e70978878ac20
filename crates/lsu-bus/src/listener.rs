//! # Listener
//!
//! A listener is a feature module. It declares which contracts it fulfills
//! through the `as_*` accessors; an accessor returning `Some` is the
//! listener's capability manifest for that contract.
//!
//! ```ignore
//! struct Splashes;
//!
//! impl UiListener for Splashes {
//!     fn on_splash_text_request(&self, event: &mut SplashTextRequest) -> HandlerResult {
//!         event.set_splash_text("hello");
//!         Ok(())
//!     }
//! }
//!
//! impl Listener for Splashes {
//!     fn is_enabled(&self) -> bool { true }
//!     fn as_ui(&self) -> Option<&dyn UiListener> { Some(self) }
//! }
//! ```
//!
//! Composition works by delegation: a wrapper that owns two components can
//! return `self.inner.as_chat()` from its own `as_chat`.

use std::sync::{Arc, Weak};

use lsu_types::Priority;

use crate::contracts::{
    Capability, ChatListener, CombatListener, CommandListener, RenderListener, ServerListener,
    TickListener, UiListener,
};

/// A participant that receives occurrences from the bus.
pub trait Listener: Send + Sync {
    /// Name used in fault logs.
    fn name(&self) -> &str {
        let full = std::any::type_name::<Self>();
        full.rsplit("::").next().unwrap_or(full)
    }

    /// Checked on every post. A disabled listener receives nothing.
    fn is_enabled(&self) -> bool;

    /// Delivery order across listeners. Read once, at registration.
    fn priority(&self) -> Priority {
        Priority::Normal
    }

    fn as_combat(&self) -> Option<&dyn CombatListener> {
        None
    }

    fn as_chat(&self) -> Option<&dyn ChatListener> {
        None
    }

    fn as_tick(&self) -> Option<&dyn TickListener> {
        None
    }

    fn as_server(&self) -> Option<&dyn ServerListener> {
        None
    }

    fn as_render(&self) -> Option<&dyn RenderListener> {
        None
    }

    fn as_ui(&self) -> Option<&dyn UiListener> {
        None
    }

    fn as_command(&self) -> Option<&dyn CommandListener> {
        None
    }

    /// Whether the listener fulfills a contract.
    fn fulfills(&self, capability: Capability) -> bool {
        match capability {
            Capability::Combat => self.as_combat().is_some(),
            Capability::Chat => self.as_chat().is_some(),
            Capability::Tick => self.as_tick().is_some(),
            Capability::Server => self.as_server().is_some(),
            Capability::Render => self.as_render().is_some(),
            Capability::Ui => self.as_ui().is_some(),
            Capability::Command => self.as_command().is_some(),
        }
    }

    /// Every contract the listener fulfills, in `Capability` order.
    fn capabilities(&self) -> Vec<Capability> {
        Capability::ALL
            .into_iter()
            .filter(|capability| self.fulfills(*capability))
            .collect()
    }
}

/// Shared handle the bus can register without taking ownership.
///
/// The bus keeps only a [`Weak`] reference. Identity is the allocation
/// address, so clones of the same `Arc` are the same listener.
pub trait ListenerHandle {
    fn listener(&self) -> &dyn Listener;

    fn downgrade(&self) -> Weak<dyn Listener>;

    fn identity(&self) -> usize;
}

impl<L: Listener + 'static> ListenerHandle for Arc<L> {
    fn listener(&self) -> &dyn Listener {
        self.as_ref()
    }

    fn downgrade(&self) -> Weak<dyn Listener> {
        let weak: Weak<L> = Arc::downgrade(self);
        weak
    }

    fn identity(&self) -> usize {
        Arc::as_ptr(self).cast::<()>() as usize
    }
}

impl ListenerHandle for Arc<dyn Listener> {
    fn listener(&self) -> &dyn Listener {
        self.as_ref()
    }

    fn downgrade(&self) -> Weak<dyn Listener> {
        Arc::downgrade(self)
    }

    fn identity(&self) -> usize {
        Arc::as_ptr(self).cast::<()>() as usize
    }
}
