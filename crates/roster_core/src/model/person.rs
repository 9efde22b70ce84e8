//! Person domain record.
//!
//! # Responsibility
//! - Define the record the form edits and the roster displays.
//! - Host the submit-eligibility check the Add command queries.
//!
//! # Invariants
//! - `id` is stable and never reused for another person.
//! - Construction enforces nothing; validity is checked only at the
//!   point of addition via `is_submittable`.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a person record.
///
/// Selection and removal key on this id rather than on field values,
/// so two people may share a name without becoming interchangeable.
pub type PersonId = Uuid;

/// A person as edited in the form and listed in the roster.
///
/// The record is plain data. It is owned exclusively by whichever
/// container currently holds it: the view-model's in-progress slot
/// before submission, the roster after.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// Stable identity used for selection and removal.
    pub id: PersonId,
    /// Display name. May be empty or whitespace while being edited.
    pub name: String,
    /// Age in years. Zero while the record is blank.
    pub age: i32,
}

impl Person {
    /// Creates a person with a generated stable id.
    pub fn new(name: impl Into<String>, age: i32) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            age,
        }
    }

    /// Creates the empty in-progress record: no name, age zero.
    pub fn blank() -> Self {
        Self::new("", 0)
    }

    /// Name with surrounding whitespace removed.
    ///
    /// Duplicate detection compares trimmed names case-sensitively.
    pub fn trimmed_name(&self) -> &str {
        self.name.trim()
    }

    /// Whether this record is eligible for submission.
    ///
    /// # Contract
    /// - Trimmed name must be non-empty.
    /// - Age must be strictly positive.
    pub fn is_submittable(&self) -> bool {
        !self.trimmed_name().is_empty() && self.age > 0
    }
}

impl Default for Person {
    fn default() -> Self {
        Self::blank()
    }
}
