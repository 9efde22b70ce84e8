//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `roster_core` wiring.
//! - Keep output deterministic for quick local sanity checks.

use roster_core::{Command, LogPromptSink, Person, PropertyHub, RequeryBus, RosterViewModel};
use std::rc::Rc;

fn print_roster(view_model: &RosterViewModel) {
    for person in view_model.roster().snapshot() {
        println!("  {} ({})", person.name, person.age);
    }
}

fn main() {
    // Why: exercise the whole bind/command path headlessly, without a
    // UI toolkit attached.
    println!("roster_core version={}", roster_core::core_version());

    let view_model = RosterViewModel::new(
        PropertyHub::new(),
        RequeryBus::new(),
        Rc::new(LogPromptSink),
    );

    println!("seeded roster ({} entries):", view_model.roster().len());
    print_roster(&view_model);

    view_model.set_current_entry(Person::new("Ada Lovelace", 36));
    println!(
        "add can_execute={}",
        view_model.add_command().can_execute(None)
    );
    view_model.add_command().execute(None);

    println!("after add ({} entries):", view_model.roster().len());
    print_roster(&view_model);
}
