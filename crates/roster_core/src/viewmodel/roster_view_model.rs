//! Roster view-model.
//!
//! # Responsibility
//! - Hold the in-progress entry, the roster, and the selection, and
//!   mediate every UI command against them.
//! - Enforce the duplicate-name business rule at the point of
//!   addition.
//!
//! # Invariants
//! - Setting the current entry clears the selection.
//! - Replacing the roster container clears the selection.
//! - A rejected add leaves every piece of state unchanged.
//! - Command actions do not re-check what their predicates already
//!   gate; direct invocation bypassing a predicate is a safe no-op at
//!   worst.

use crate::command::relay::{CommandAction, CommandPredicate, RelayCommand};
use crate::model::person::{Person, PersonId};
use crate::model::roster::Roster;
use crate::observe::property::PropertyHub;
use crate::observe::requery::RequeryBus;
use crate::viewmodel::prompt::{Prompt, PromptSink};
use log::{info, warn};
use std::cell::RefCell;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::rc::Rc;

/// Subject name carried by every property-change pair this view-model
/// emits.
pub const VIEW_MODEL_SUBJECT: &str = "roster_view_model";

/// Property name for the in-progress entry.
pub const PROP_CURRENT_ENTRY: &str = "current_entry";
/// Property name for the roster container itself (replacement, not
/// element mutation).
pub const PROP_ROSTER: &str = "roster";
/// Property name for the selection.
pub const PROP_SELECTION: &str = "selection";
/// Property name for the roster element count.
pub const PROP_ROSTER_COUNT: &str = "roster_count";

const DUPLICATE_PROMPT_TITLE: &str = "Duplicate Record";
const DUPLICATE_PROMPT_MESSAGE: &str = "This person already exists.";

/// Rejection raised when submitting the current entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddError {
    /// A roster entry already carries the same trimmed name.
    DuplicateName { name: String },
}

impl Display for AddError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateName { name } => {
                write!(f, "a person named `{name}` already exists in the roster")
            }
        }
    }
}

impl Error for AddError {}

/// Handles shared between the view-model and its command closures.
#[derive(Clone)]
struct Shared {
    entry: Rc<RefCell<Person>>,
    roster: Rc<RefCell<Roster>>,
    selection: Rc<RefCell<Option<PersonId>>>,
    properties: PropertyHub,
    requery: RequeryBus,
    prompts: Rc<dyn PromptSink>,
}

/// Mediates between UI commands and the observable roster.
pub struct RosterViewModel {
    shared: Shared,
    add_command: Rc<RelayCommand>,
    delete_command: Rc<RelayCommand>,
}

impl RosterViewModel {
    /// Builds the view-model, seeds demonstration data, and wires both
    /// commands to the given bus.
    pub fn new(properties: PropertyHub, requery: RequeryBus, prompts: Rc<dyn PromptSink>) -> Self {
        let shared = Shared {
            entry: Rc::new(RefCell::new(Person::blank())),
            roster: Rc::new(RefCell::new(Roster::new())),
            selection: Rc::new(RefCell::new(None)),
            properties,
            requery,
            prompts,
        };

        // Construction goes through the same setter contracts the UI
        // uses, so subscribers registered beforehand see the initial
        // state arrive as ordinary notifications.
        set_current_entry(&shared, Person::blank());
        shared.properties.emit(VIEW_MODEL_SUBJECT, PROP_ROSTER);
        {
            let roster = shared.roster.borrow().clone();
            roster.push(Person::new("Walter White", 42));
            roster.push(Person::new("George II", 68));
            roster.push(Person::new("Isaac Newton", 39));
        }

        let add_shared = shared.clone();
        let add_action: CommandAction = Box::new(move |_| submit_current_entry(&add_shared));
        let add_predicate_shared = shared.clone();
        let add_predicate: CommandPredicate =
            Box::new(move |_| add_predicate_shared.entry.borrow().is_submittable());
        let add_command = Rc::new(RelayCommand::new(
            shared.requery.clone(),
            add_action,
            Some(add_predicate),
            true,
        ));

        let delete_shared = shared.clone();
        let delete_action: CommandAction = Box::new(move |_| delete_selected(&delete_shared));
        let delete_predicate_shared = shared.clone();
        let delete_predicate: CommandPredicate =
            Box::new(move |_| delete_predicate_shared.selection.borrow().is_some());
        let delete_command = Rc::new(RelayCommand::new(
            shared.requery.clone(),
            delete_action,
            Some(delete_predicate),
            true,
        ));

        info!(
            "event=viewmodel_init module=viewmodel status=ok seed_count={}",
            shared.roster.borrow().len()
        );

        Self {
            shared,
            add_command,
            delete_command,
        }
    }

    /// Copy of the in-progress entry.
    pub fn current_entry(&self) -> Person {
        self.shared.entry.borrow().clone()
    }

    /// Replaces the in-progress entry.
    ///
    /// # Contract
    /// - Emits `current_entry`, requests requery, then clears the
    ///   selection per the setter contract.
    pub fn set_current_entry(&self, person: Person) {
        set_current_entry(&self.shared, person);
    }

    /// Two-way-binding surface: updates the entry's name in place.
    ///
    /// Emits `current_entry` and requests requery; does not clear the
    /// selection, since the entry keeps its identity.
    pub fn set_entry_name(&self, name: impl Into<String>) {
        self.shared.entry.borrow_mut().name = name.into();
        self.shared
            .properties
            .emit(VIEW_MODEL_SUBJECT, PROP_CURRENT_ENTRY);
        self.shared.requery.request();
    }

    /// Two-way-binding surface: updates the entry's age in place.
    pub fn set_entry_age(&self, age: i32) {
        self.shared.entry.borrow_mut().age = age;
        self.shared
            .properties
            .emit(VIEW_MODEL_SUBJECT, PROP_CURRENT_ENTRY);
        self.shared.requery.request();
    }

    /// Handle to the current roster container.
    pub fn roster(&self) -> Roster {
        self.shared.roster.borrow().clone()
    }

    /// Replaces the whole roster container.
    ///
    /// Emits `roster` and clears the selection; previously handed-out
    /// `Roster` handles keep pointing at the old container.
    pub fn set_roster(&self, roster: Roster) {
        *self.shared.roster.borrow_mut() = roster;
        self.shared.properties.emit(VIEW_MODEL_SUBJECT, PROP_ROSTER);
        set_selection(&self.shared, None);
    }

    /// Currently selected person id, if any.
    pub fn selection(&self) -> Option<PersonId> {
        *self.shared.selection.borrow()
    }

    /// Replaces the selection.
    ///
    /// Emits `selection` and requests requery so command affordances
    /// refresh.
    pub fn set_selection(&self, selection: Option<PersonId>) {
        set_selection(&self.shared, selection);
    }

    /// Resolves the selection against the current roster.
    ///
    /// A selection id whose record has since been removed resolves to
    /// `None`; the id is a relation, not ownership.
    pub fn selected_person(&self) -> Option<Person> {
        let id = self.selection()?;
        let roster = self.roster();
        let index = roster.position_by_id(id)?;
        roster.get(index)
    }

    /// Command appending the current entry to the roster.
    pub fn add_command(&self) -> Rc<RelayCommand> {
        Rc::clone(&self.add_command)
    }

    /// Command removing the selected person from the roster.
    pub fn delete_command(&self) -> Rc<RelayCommand> {
        Rc::clone(&self.delete_command)
    }

    /// The property-change channel this view-model emits on.
    pub fn properties(&self) -> PropertyHub {
        self.shared.properties.clone()
    }

    /// The requery bus shared with both commands.
    pub fn requery(&self) -> RequeryBus {
        self.shared.requery.clone()
    }

    /// Submits the current entry, same path as the Add command.
    pub fn add_current_entry(&self) {
        submit_current_entry(&self.shared);
    }

    /// Deletes the selected person, same path as the Delete command.
    pub fn delete_selected(&self) {
        delete_selected(&self.shared);
    }
}

fn set_current_entry(shared: &Shared, person: Person) {
    *shared.entry.borrow_mut() = person;
    shared.properties.emit(VIEW_MODEL_SUBJECT, PROP_CURRENT_ENTRY);
    shared.requery.request();
    set_selection(shared, None);
}

fn set_selection(shared: &Shared, selection: Option<PersonId>) {
    *shared.selection.borrow_mut() = selection;
    shared.properties.emit(VIEW_MODEL_SUBJECT, PROP_SELECTION);
    shared.requery.request();
}

fn try_add(shared: &Shared, entry: &Person) -> Result<(), AddError> {
    let roster = shared.roster.borrow().clone();
    let duplicate = roster
        .snapshot()
        .iter()
        .any(|person| person.trimmed_name() == entry.trimmed_name());
    if duplicate {
        return Err(AddError::DuplicateName {
            name: entry.trimmed_name().to_string(),
        });
    }

    roster.push(entry.clone());
    shared
        .properties
        .emit(VIEW_MODEL_SUBJECT, PROP_ROSTER_COUNT);
    Ok(())
}

fn submit_current_entry(shared: &Shared) {
    let entry = shared.entry.borrow().clone();
    match try_add(shared, &entry) {
        Ok(()) => {
            info!(
                "event=person_added module=viewmodel status=ok roster_len={}",
                shared.roster.borrow().len()
            );
            set_current_entry(shared, Person::blank());
        }
        Err(AddError::DuplicateName { .. }) => {
            warn!("event=add_rejected module=viewmodel status=rejected reason=duplicate_name");
            shared.prompts.show(&Prompt::warning(
                DUPLICATE_PROMPT_TITLE,
                DUPLICATE_PROMPT_MESSAGE,
            ));
        }
    }
}

fn delete_selected(shared: &Shared) {
    // Unreachable through the predicate-gated command; direct calls
    // with no selection are a silent no-op.
    let Some(id) = *shared.selection.borrow() else {
        return;
    };

    let roster = shared.roster.borrow().clone();
    // Removal by identity; an already-absent id is not an error, and
    // the count notification only fires when the count changed.
    if roster.remove_by_id(id).is_some() {
        shared
            .properties
            .emit(VIEW_MODEL_SUBJECT, PROP_ROSTER_COUNT);
        info!(
            "event=person_removed module=viewmodel status=ok roster_len={}",
            roster.len()
        );
    }
    set_selection(shared, None);
}
