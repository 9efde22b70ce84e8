//! Core logic for the roster form application.
//! This crate is the single source of truth for business invariants;
//! UI layers bind to it through the observe/command contracts.

pub mod command;
pub mod logging;
pub mod model;
pub mod observe;
pub mod viewmodel;

pub use command::relay::{Command, CommandAction, CommandPredicate, RelayCommand};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::person::{Person, PersonId};
pub use model::roster::{Roster, RosterChange};
pub use observe::listeners::SubscriptionId;
pub use observe::property::{PropertyChange, PropertyHub};
pub use observe::requery::RequeryBus;
pub use viewmodel::prompt::{LogPromptSink, Prompt, PromptSeverity, PromptSink};
pub use viewmodel::roster_view_model::{
    AddError, RosterViewModel, PROP_CURRENT_ENTRY, PROP_ROSTER, PROP_ROSTER_COUNT, PROP_SELECTION,
    VIEW_MODEL_SUBJECT,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
