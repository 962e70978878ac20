//! # Event Bus
//!
//! Synchronous, priority-ordered dispatch of occurrences to listeners.
//!
//! ## Delivery rules
//!
//! - Listeners run on the caller's thread, highest priority first; equal
//!   priorities run in registration order.
//! - A listener whose `is_enabled()` is false at post time is skipped.
//! - Every listener sees the occurrence as left by the previous one.
//! - Cancellation is a flag, not a stop signal: later listeners still run and
//!   can see it. The producer checks it after `post` returns.
//! - A handler error or panic is logged and counted, then dispatch moves on.
//!
//! ## Re-entrancy
//!
//! `post` iterates a snapshot of the kind's list with no lock held, so a
//! handler may post, register or unregister on the same bus.

use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use lsu_types::{Event, EventKind};
use tracing::{debug, error, trace};

use crate::errors::HandlerFault;
use crate::listener::{Listener, ListenerHandle};
use crate::routing;
use crate::table::{DispatchTable, Registration};

/// Typed in-process event bus.
///
/// Construct one per client and share it as `Arc<EventBus>`.
pub struct EventBus {
    table: DispatchTable,

    /// Total `post` calls.
    events_posted: AtomicU64,

    /// Handler invocations that failed or panicked.
    handler_faults: AtomicU64,
}

impl EventBus {
    /// Create an empty bus.
    pub fn new() -> Self {
        Self {
            table: DispatchTable::new(),
            events_posted: AtomicU64::new(0),
            handler_faults: AtomicU64::new(0),
        }
    }

    /// Attach a listener to every kind covered by the contracts it fulfills.
    ///
    /// The bus keeps a weak reference; dropping the last `Arc` stops
    /// delivery. Registering the same listener twice yields two deliveries
    /// per post. Returns the number of kinds attached.
    pub fn register(&self, handle: &impl ListenerHandle) -> usize {
        let listener = handle.listener();
        let registration = Arc::new(Registration::new(
            handle.downgrade(),
            handle.identity(),
            listener.priority(),
        ));

        let mut attached = 0;
        for capability in listener.capabilities() {
            for kind in capability.kinds() {
                self.table.insert(*kind, &registration);
                attached += 1;
            }
        }

        debug!(
            listener = listener.name(),
            priority = %listener.priority(),
            kinds = attached,
            "Listener registered"
        );
        attached
    }

    /// Detach every registration of a listener. Unknown listeners are a
    /// no-op. Returns the number of list entries removed.
    pub fn unregister(&self, handle: &impl ListenerHandle) -> usize {
        let removed = self.table.remove(handle.identity());
        if removed > 0 {
            debug!(
                listener = handle.listener().name(),
                entries = removed,
                "Listener unregistered"
            );
        }
        removed
    }

    /// Deliver an occurrence to every enabled listener of its kind.
    ///
    /// Returns the number of handlers that completed without error. The
    /// occurrence is left in its final state for the producer to inspect.
    pub fn post<E: Event>(&self, event: &mut E) -> usize {
        self.events_posted.fetch_add(1, Ordering::Relaxed);

        let snapshot = self.table.snapshot(E::KIND);
        if snapshot.is_empty() {
            trace!(event = %E::KIND, "No listeners");
            return 0;
        }

        let mut delivered = 0;
        for registration in snapshot.iter() {
            // Unregistered mid-post or dropped by its owner.
            let Some(listener) = registration.upgrade() else {
                continue;
            };

            match Self::invoke(listener.as_ref(), event) {
                Ok(true) => delivered += 1,
                Ok(false) => {}
                Err(fault) => {
                    self.handler_faults.fetch_add(1, Ordering::Relaxed);
                    error!(
                        listener = listener.name(),
                        event = %E::KIND,
                        error = %fault,
                        "Listener fault"
                    );
                }
            }
        }
        delivered
    }

    /// Run one handler. `Ok(false)` means the listener was disabled.
    fn invoke<E: Event>(listener: &dyn Listener, event: &mut E) -> Result<bool, HandlerFault> {
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
            if !listener.is_enabled() {
                return Ok(false);
            }
            routing::deliver(listener, event.as_event_mut()).map(|()| true)
        }));

        match outcome {
            Ok(Ok(ran)) => Ok(ran),
            Ok(Err(err)) => Err(HandlerFault::Failed(err)),
            Err(payload) => Err(HandlerFault::from_panic(payload.as_ref())),
        }
    }

    /// Live listeners attached to a kind.
    #[must_use]
    pub fn listener_count(&self, kind: EventKind) -> usize {
        self.table.len(kind)
    }

    /// Whether the listener is attached to at least one kind.
    #[must_use]
    pub fn is_registered(&self, handle: &impl ListenerHandle) -> bool {
        self.table.contains(handle.identity())
    }

    /// Detach every listener.
    pub fn clear(&self) {
        self.table.clear();
        debug!("Event bus cleared");
    }

    /// Total `post` calls.
    #[must_use]
    pub fn events_posted(&self) -> u64 {
        self.events_posted.load(Ordering::Relaxed)
    }

    /// Handler invocations that returned an error or panicked.
    #[must_use]
    pub fn handler_faults(&self) -> u64 {
        self.handler_faults.load(Ordering::Relaxed)
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
