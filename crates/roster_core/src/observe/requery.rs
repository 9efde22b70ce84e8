//! Command requery broadcast.
//!
//! # Responsibility
//! - Carry the ambient "state may have changed, re-query command
//!   predicates" signal from any mutator to every command subscriber.
//!
//! # Invariants
//! - The bus is an explicit dependency handed to each command at
//!   construction; there is no process-global static channel.
//! - Commands never originate requery events, they only relay
//!   subscriptions to the bus.

use crate::observe::listeners::{Listeners, SubscriptionId};

/// Cloneable handle over the shared requery channel.
///
/// Any part of the application may call `request` to ask every command
/// to re-evaluate `can_execute`; the UI typically subscribes once and
/// refreshes its affordances on each signal.
#[derive(Clone, Default)]
pub struct RequeryBus {
    listeners: Listeners<()>,
}

impl RequeryBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a callback invoked on every requery request.
    pub fn subscribe(&self, mut callback: impl FnMut() + 'static) -> SubscriptionId {
        self.listeners.subscribe(move |()| callback())
    }

    /// Removes a callback. Returns whether the id was registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.listeners.unsubscribe(id)
    }

    /// Signals every subscriber to re-query command executability.
    pub fn request(&self) {
        self.listeners.emit(&());
    }

    /// Number of active subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.listeners.len()
    }
}
