//! Property-change notification channel.
//!
//! # Responsibility
//! - Deliver (subject, property-name) pairs to UI subscribers so bound
//!   views know which state to re-read.
//!
//! # Invariants
//! - Every state mutation emits its pair before the mutator returns.
//! - Subject and property names are stable `'static` identifiers.

use crate::observe::listeners::{Listeners, SubscriptionId};

/// One state mutation, identified by who changed and what changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropertyChange {
    /// Stable name of the component that mutated.
    pub subject: &'static str,
    /// Stable name of the property that mutated.
    pub property: &'static str,
}

/// Cloneable handle over the shared property-change channel.
#[derive(Clone, Default)]
pub struct PropertyHub {
    listeners: Listeners<PropertyChange>,
}

impl PropertyHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a callback invoked on every property change.
    pub fn subscribe(&self, callback: impl FnMut(&PropertyChange) + 'static) -> SubscriptionId {
        self.listeners.subscribe(callback)
    }

    /// Removes a callback. Returns whether the id was registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.listeners.unsubscribe(id)
    }

    /// Broadcasts one (subject, property) pair to all subscribers.
    pub fn emit(&self, subject: &'static str, property: &'static str) {
        self.listeners.emit(&PropertyChange { subject, property });
    }

    /// Number of active subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.listeners.len()
    }
}
