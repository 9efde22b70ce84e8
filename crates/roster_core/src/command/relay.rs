//! Relay command adapter.
//!
//! # Responsibility
//! - Wrap an (action, predicate) pair into an invocable, queryable
//!   unit a UI button can bind to and auto-disable from.
//! - Relay requery subscriptions to the shared `RequeryBus`.
//!
//! # Invariants
//! - With no predicate supplied, `can_execute` is always true.
//! - The predicate is evaluated live on every query; the
//!   `can_execute_cache` flag is accepted but inert.
//! - `execute` does not catch faults; they propagate to the caller.

use crate::observe::listeners::SubscriptionId;
use crate::observe::requery::RequeryBus;
use std::any::Any;

/// Boxed action invoked by `execute`. The optional parameter is opaque
/// to the adapter; actions downcast it if they use it at all.
pub type CommandAction = Box<dyn Fn(Option<&dyn Any>)>;

/// Boxed predicate consulted by `can_execute`.
pub type CommandPredicate = Box<dyn Fn(Option<&dyn Any>) -> bool>;

/// Something the UI can invoke and query for executability.
pub trait Command {
    /// Whether the command may currently execute.
    fn can_execute(&self, parameter: Option<&dyn Any>) -> bool;

    /// Invokes the wrapped action.
    fn execute(&self, parameter: Option<&dyn Any>);

    /// Registers a callback on the shared requery channel.
    ///
    /// The command itself never originates these events; it relays the
    /// subscription to the bus it was constructed with.
    fn subscribe_requery(&self, callback: Box<dyn FnMut()>) -> SubscriptionId;

    /// Cancels a requery subscription made through this command.
    fn unsubscribe_requery(&self, id: SubscriptionId) -> bool;
}

/// Generic command built from two closures and a bus handle.
pub struct RelayCommand {
    action: CommandAction,
    predicate: Option<CommandPredicate>,
    // Accepted for interface compatibility; control flow never reads
    // it and the predicate is always re-evaluated live.
    can_execute_cache: bool,
    requery: RequeryBus,
}

impl RelayCommand {
    /// Creates a command from an action, an optional predicate, and
    /// the shared requery bus.
    pub fn new(
        requery: RequeryBus,
        action: CommandAction,
        predicate: Option<CommandPredicate>,
        can_execute_cache: bool,
    ) -> Self {
        Self {
            action,
            predicate,
            can_execute_cache,
            requery,
        }
    }

    /// The stored (inert) cache flag.
    pub fn can_execute_cache(&self) -> bool {
        self.can_execute_cache
    }
}

impl Command for RelayCommand {
    fn can_execute(&self, parameter: Option<&dyn Any>) -> bool {
        match &self.predicate {
            None => true,
            Some(predicate) => predicate(parameter),
        }
    }

    fn execute(&self, parameter: Option<&dyn Any>) {
        (self.action)(parameter);
    }

    fn subscribe_requery(&self, mut callback: Box<dyn FnMut()>) -> SubscriptionId {
        self.requery.subscribe(move || callback())
    }

    fn unsubscribe_requery(&self, id: SubscriptionId) -> bool {
        self.requery.unsubscribe(id)
    }
}
