//! # Dispatch Table
//!
//! One ordered listener list per occurrence kind. Lists are copy-on-write:
//! a writer builds a new list and swaps it in, readers clone the current
//! `Arc` under a short read lock and iterate with no lock held. A post that
//! is already iterating keeps its snapshot, so registration or removal from
//! inside a handler never blocks or invalidates the iteration.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Weak};

use lsu_types::{EventKind, Priority};
use parking_lot::RwLock;

use crate::listener::Listener;

/// One registered listener. Shared by every list the listener joined.
pub(crate) struct Registration {
    listener: Weak<dyn Listener>,
    identity: usize,
    priority: Priority,
    retired: AtomicBool,
}

impl Registration {
    pub(crate) fn new(listener: Weak<dyn Listener>, identity: usize, priority: Priority) -> Self {
        Self {
            listener,
            identity,
            priority,
            retired: AtomicBool::new(false),
        }
    }

    /// Live listener, unless it was unregistered or dropped.
    pub(crate) fn upgrade(&self) -> Option<Arc<dyn Listener>> {
        if self.retired.load(Ordering::Acquire) {
            return None;
        }
        self.listener.upgrade()
    }

    fn retire(&self) {
        self.retired.store(true, Ordering::Release);
    }

    fn is_stale(&self) -> bool {
        self.retired.load(Ordering::Acquire) || self.listener.strong_count() == 0
    }
}

pub(crate) type Snapshot = Arc<Vec<Arc<Registration>>>;

/// Per-kind ordered listener lists.
pub(crate) struct DispatchTable {
    slots: [RwLock<Snapshot>; EventKind::COUNT],
}

impl DispatchTable {
    pub(crate) fn new() -> Self {
        Self {
            slots: std::array::from_fn(|_| RwLock::new(Arc::new(Vec::new()))),
        }
    }

    /// Current list for a kind. Later writes do not affect it.
    pub(crate) fn snapshot(&self, kind: EventKind) -> Snapshot {
        Arc::clone(&self.slots[kind.index()].read())
    }

    /// Append a registration and re-sort the list by priority.
    ///
    /// The sort is stable, so equal priorities keep registration order.
    /// Entries whose listener has been dropped are pruned on the way.
    pub(crate) fn insert(&self, kind: EventKind, registration: &Arc<Registration>) {
        let mut slot = self.slots[kind.index()].write();
        let mut next: Vec<Arc<Registration>> = slot
            .iter()
            .filter(|existing| !existing.is_stale())
            .cloned()
            .collect();
        next.push(Arc::clone(registration));
        next.sort_by_key(|entry| std::cmp::Reverse(entry.priority.weight()));
        *slot = Arc::new(next);
    }

    /// Remove every registration for `identity` from every list.
    ///
    /// Removed registrations are retired first, so snapshots still being
    /// iterated skip them. Returns the number of list entries removed.
    pub(crate) fn remove(&self, identity: usize) -> usize {
        let mut removed = 0;
        for slot in &self.slots {
            let mut slot = slot.write();
            if !slot.iter().any(|entry| entry.identity == identity) {
                continue;
            }
            let next: Vec<Arc<Registration>> = slot
                .iter()
                .filter(|entry| {
                    if entry.identity == identity {
                        entry.retire();
                        removed += 1;
                        false
                    } else {
                        true
                    }
                })
                .cloned()
                .collect();
            *slot = Arc::new(next);
        }
        removed
    }

    /// Live entries for a kind.
    pub(crate) fn len(&self, kind: EventKind) -> usize {
        self.slots[kind.index()]
            .read()
            .iter()
            .filter(|entry| !entry.is_stale())
            .count()
    }

    pub(crate) fn contains(&self, identity: usize) -> bool {
        self.slots.iter().any(|slot| {
            slot.read()
                .iter()
                .any(|entry| entry.identity == identity && !entry.is_stale())
        })
    }

    /// Drop every registration.
    pub(crate) fn clear(&self) {
        for slot in &self.slots {
            let mut slot = slot.write();
            for entry in slot.iter() {
                entry.retire();
            }
            *slot = Arc::new(Vec::new());
        }
    }
}
