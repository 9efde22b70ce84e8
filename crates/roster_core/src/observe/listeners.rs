//! Generic single-thread subscriber registry.
//!
//! # Responsibility
//! - Back every notification channel in this crate with one shared
//!   subscribe/unsubscribe/emit primitive.
//!
//! # Invariants
//! - Subscription ids are unique for the lifetime of a registry and
//!   never reused.
//! - `emit` dispatches to the entries registered at emit time, in
//!   registration order.
//! - Callbacks may subscribe, unsubscribe, and emit re-entrantly on
//!   the same channel. A callback is never re-entered: re-entrant
//!   emission skips the in-flight callback.
//! - Entries removed mid-dispatch are not invoked afterwards; entries
//!   added mid-dispatch are not delivered in the active round.

use std::cell::RefCell;
use std::rc::Rc;

/// Handle returned by `subscribe`, used to cancel the subscription.
pub type SubscriptionId = u64;

/// Each callback lives in its own cell so dispatch never holds the
/// registry borrow while user code runs.
type Callback<E> = Rc<RefCell<dyn FnMut(&E)>>;

struct Registry<E> {
    next_id: SubscriptionId,
    entries: Vec<(SubscriptionId, Callback<E>)>,
}

impl<E> Registry<E> {
    fn new() -> Self {
        Self {
            next_id: 1,
            entries: Vec::new(),
        }
    }
}

/// Cloneable handle over a shared list of event callbacks.
///
/// Clones observe the same registry; subscribing through one handle is
/// visible through all of them.
pub struct Listeners<E> {
    inner: Rc<RefCell<Registry<E>>>,
}

impl<E> Listeners<E> {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(Registry::new())),
        }
    }

    /// Registers a callback; returns the id used to unsubscribe it.
    pub fn subscribe(&self, callback: impl FnMut(&E) + 'static) -> SubscriptionId {
        let cell: Callback<E> = Rc::new(RefCell::new(callback));
        let mut registry = self.inner.borrow_mut();
        let id = registry.next_id;
        registry.next_id += 1;
        registry.entries.push((id, cell));
        id
    }

    /// Removes a callback. Returns whether the id was registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut registry = self.inner.borrow_mut();
        let before = registry.entries.len();
        registry.entries.retain(|(entry_id, _)| *entry_id != id);
        registry.entries.len() != before
    }

    /// Dispatches one event to every subscriber, in registration order.
    ///
    /// The registry borrow is released before any callback runs, so
    /// callbacks may mutate subscriptions or emit again. An entry that
    /// is already executing further up the call stack is skipped
    /// rather than re-entered.
    pub fn emit(&self, event: &E) {
        let snapshot: Vec<(SubscriptionId, Callback<E>)> = self
            .inner
            .borrow()
            .entries
            .iter()
            .map(|(id, callback)| (*id, Rc::clone(callback)))
            .collect();

        for (id, callback) in snapshot {
            let still_registered = self
                .inner
                .borrow()
                .entries
                .iter()
                .any(|(entry_id, _)| *entry_id == id);
            if !still_registered {
                continue;
            }
            if let Ok(mut callback) = callback.try_borrow_mut() {
                (&mut *callback)(event);
            }
        }
    }

    /// Number of active subscriptions.
    pub fn len(&self) -> usize {
        self.inner.borrow().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<E> Clone for Listeners<E> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<E> Default for Listeners<E> {
    fn default() -> Self {
        Self::new()
    }
}
