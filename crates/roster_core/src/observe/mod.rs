//! Change-notification plumbing shared by model and view-model.
//!
//! # Responsibility
//! - Provide the generic subscriber registry used by every channel.
//! - Define the property-change and requery broadcast channels the UI
//!   binds to.
//!
//! # Invariants
//! - All channels are single-thread handles; nothing here is `Send`.
//! - Dispatch is re-entrancy safe: callbacks may subscribe,
//!   unsubscribe, and emit on the channel dispatching to them; a
//!   callback is never re-entered.

pub mod listeners;
pub mod property;
pub mod requery;
