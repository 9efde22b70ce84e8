//! Domain model for the roster form.
//!
//! # Responsibility
//! - Define the person record edited and listed by the UI.
//! - Provide the observable person container with change notifications.
//!
//! # Invariants
//! - Every person record is identified by a stable `PersonId`.
//! - Roster mutations notify subscribers before returning.

pub mod person;
pub mod roster;
