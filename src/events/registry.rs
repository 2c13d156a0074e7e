//! Listener registry.
//!
//! Listeners are callbacks with no payload, fired after every accepted
//! roll once the game state is final. Each call is isolated: a listener
//! that panics is logged and removed, and the remaining listeners still
//! run.

use std::panic::{self, AssertUnwindSafe};

use serde::Serialize;
use tracing::warn;

/// A registered change callback.
pub type Listener = Box<dyn FnMut() + Send>;

/// Handle returned by `subscribe`, used to unsubscribe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct SubscriptionId(pub u32);

impl SubscriptionId {
    /// Create a new subscription ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Subscription({})", self.0)
    }
}

/// Ordered set of change listeners.
///
/// Listeners fire in registration order. IDs are never reused within a
/// registry, so a stale handle can't remove a newer listener. Allocating
/// past `u32::MAX` subscriptions panics rather than wrapping.
#[derive(Default)]
pub struct ListenerRegistry {
    listeners: Vec<(SubscriptionId, Listener)>,

    /// Next subscription ID to allocate.
    next_id: u32,
}

impl ListenerRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener, returns its ID.
    ///
    /// # Panics
    ///
    /// Panics when the `u32` ID space is exhausted.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut() + Send + 'static,
    {
        let id = SubscriptionId::new(self.next_id);
        self.next_id = match self.next_id.checked_add(1) {
            Some(next) => next,
            None => panic!("subscription ids exhausted after {id}"),
        };
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns `false` if the ID is not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        match self.listeners.iter().position(|(registered, _)| *registered == id) {
            Some(position) => {
                self.listeners.remove(position);
                true
            }
            None => false,
        }
    }

    /// Call every listener once, in registration order.
    ///
    /// Listeners that panic are unsubscribed.
    pub fn notify(&mut self) {
        self.listeners.retain_mut(|(id, listener)| {
            match panic::catch_unwind(AssertUnwindSafe(|| listener())) {
                Ok(()) => true,
                Err(_) => {
                    warn!(subscription = %id, "listener panicked, unsubscribing");
                    false
                }
            }
        });
    }

    /// Is the ID currently registered?
    #[must_use]
    pub fn contains(&self, id: SubscriptionId) -> bool {
        self.listeners.iter().any(|(registered, _)| *registered == id)
    }

    /// Number of registered listeners.
    #[must_use]
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

impl std::fmt::Debug for ListenerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListenerRegistry")
            .field("listeners", &self.listeners.iter().map(|(id, _)| *id).collect::<Vec<_>>())
            .field("next_id", &self.next_id)
            .finish()
    }
}
