//! View-model layer mediating between UI commands and the roster.
//!
//! # Responsibility
//! - Orchestrate the in-progress entry, the roster, and selection.
//! - Expose the Add/Delete commands whose predicates gate UI
//!   affordances.
//!
//! # Invariants
//! - Every state mutation emits a property-change pair before the
//!   mutator returns.
//! - The duplicate-add warning is the only direct UI side effect; it
//!   goes through the injected `PromptSink`.

pub mod prompt;
pub mod roster_view_model;
