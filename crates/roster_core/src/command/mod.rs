//! Command binding between UI affordances and view-model actions.
//!
//! # Responsibility
//! - Decouple "something the UI can invoke" from direct method
//!   references.
//!
//! # Invariants
//! - Executability queries never fail for an absent parameter.
//! - Faults inside a wrapped action or predicate are not caught here.

pub mod relay;
