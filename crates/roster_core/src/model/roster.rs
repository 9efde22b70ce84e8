//! Observable person container.
//!
//! # Responsibility
//! - Hold the ordered person list the UI displays.
//! - Emit a change event for every insert and remove so the UI can
//!   update incrementally.
//!
//! # Invariants
//! - Insertion order is display order.
//! - The container enforces no uniqueness; duplicate handling is a
//!   view-model business rule.
//! - Change events are dispatched after the mutation is visible to
//!   readers.

use crate::model::person::{Person, PersonId};
use crate::observe::listeners::{Listeners, SubscriptionId};
use std::cell::RefCell;
use std::rc::Rc;

/// One mutation of the roster, with enough detail for an incremental
/// UI update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RosterChange {
    Inserted { index: usize, person: Person },
    Removed { index: usize, person: Person },
}

/// Cloneable handle over the shared ordered person list.
///
/// Clones observe and mutate the same underlying list.
#[derive(Clone, Default)]
pub struct Roster {
    items: Rc<RefCell<Vec<Person>>>,
    changes: Listeners<RosterChange>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a person at the end and notifies subscribers.
    pub fn push(&self, person: Person) {
        let index = {
            let mut items = self.items.borrow_mut();
            items.push(person.clone());
            items.len() - 1
        };
        self.changes.emit(&RosterChange::Inserted { index, person });
    }

    /// Removes the person with the given id, if present.
    ///
    /// Absent ids are a silent no-op returning `None`; no event is
    /// emitted in that case.
    pub fn remove_by_id(&self, id: PersonId) -> Option<Person> {
        let removed = {
            let mut items = self.items.borrow_mut();
            items
                .iter()
                .position(|person| person.id == id)
                .map(|index| (index, items.remove(index)))
        };
        let (index, person) = removed?;
        self.changes.emit(&RosterChange::Removed {
            index,
            person: person.clone(),
        });
        Some(person)
    }

    /// Returns a copy of the person at `index`, if in bounds.
    pub fn get(&self, index: usize) -> Option<Person> {
        self.items.borrow().get(index).cloned()
    }

    /// Display position of the person with the given id.
    pub fn position_by_id(&self, id: PersonId) -> Option<usize> {
        self.items.borrow().iter().position(|person| person.id == id)
    }

    /// Copy of the full list in display order.
    pub fn snapshot(&self) -> Vec<Person> {
        self.items.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }

    /// Registers a callback invoked on every insert/remove.
    pub fn subscribe_changes(
        &self,
        callback: impl FnMut(&RosterChange) + 'static,
    ) -> SubscriptionId {
        self.changes.subscribe(callback)
    }

    /// Removes a change callback. Returns whether the id was registered.
    pub fn unsubscribe_changes(&self, id: SubscriptionId) -> bool {
        self.changes.unsubscribe(id)
    }
}
