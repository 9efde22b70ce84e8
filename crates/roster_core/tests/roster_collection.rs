use roster_core::{Person, Roster, RosterChange, SubscriptionId};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use uuid::Uuid;

fn record_changes(roster: &Roster) -> Rc<RefCell<Vec<RosterChange>>> {
    let log = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&log);
    roster.subscribe_changes(move |change| sink.borrow_mut().push(change.clone()));
    log
}

#[test]
fn push_appends_in_display_order() {
    let roster = Roster::new();
    roster.push(Person::new("Walter White", 42));
    roster.push(Person::new("George II", 68));

    let snapshot = roster.snapshot();
    assert_eq!(snapshot.len(), 2);
    assert_eq!(snapshot[0].name, "Walter White");
    assert_eq!(snapshot[1].name, "George II");
}

#[test]
fn push_emits_inserted_with_index_and_person() {
    let roster = Roster::new();
    let log = record_changes(&roster);

    let person = Person::new("Walter White", 42);
    roster.push(person.clone());

    let changes = log.borrow();
    assert_eq!(changes.len(), 1);
    assert_eq!(changes[0], RosterChange::Inserted { index: 0, person });
}

#[test]
fn remove_by_id_removes_and_emits_removed() {
    let roster = Roster::new();
    let first = Person::new("Walter White", 42);
    let second = Person::new("George II", 68);
    roster.push(first.clone());
    roster.push(second.clone());
    let log = record_changes(&roster);

    let removed = roster
        .remove_by_id(first.id)
        .expect("present id should remove");
    assert_eq!(removed, first);
    assert_eq!(roster.len(), 1);
    assert_eq!(roster.get(0), Some(second));

    let changes = log.borrow();
    assert_eq!(changes.len(), 1);
    assert_eq!(
        changes[0],
        RosterChange::Removed {
            index: 0,
            person: first
        }
    );
}

#[test]
fn remove_by_id_with_absent_id_is_silent_noop() {
    let roster = Roster::new();
    roster.push(Person::new("Walter White", 42));
    let log = record_changes(&roster);

    assert_eq!(roster.remove_by_id(Uuid::new_v4()), None);
    assert_eq!(roster.len(), 1);
    assert!(log.borrow().is_empty());
}

#[test]
fn duplicate_names_are_allowed_by_the_container() {
    let roster = Roster::new();
    roster.push(Person::new("Walter White", 42));
    roster.push(Person::new("Walter White", 50));

    assert_eq!(roster.len(), 2);
}

#[test]
fn position_by_id_tracks_display_position() {
    let roster = Roster::new();
    let first = Person::new("Walter White", 42);
    let second = Person::new("George II", 68);
    roster.push(first.clone());
    roster.push(second.clone());

    assert_eq!(roster.position_by_id(second.id), Some(1));
    roster.remove_by_id(first.id);
    assert_eq!(roster.position_by_id(second.id), Some(0));
}

#[test]
fn unsubscribe_stops_change_delivery() {
    let roster = Roster::new();
    let log = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&log);
    let subscription =
        roster.subscribe_changes(move |change| sink.borrow_mut().push(change.clone()));

    roster.push(Person::new("Walter White", 42));
    assert!(roster.unsubscribe_changes(subscription));
    roster.push(Person::new("George II", 68));

    assert_eq!(log.borrow().len(), 1);
    assert!(!roster.unsubscribe_changes(subscription));
}

#[test]
fn subscriber_may_unsubscribe_itself_during_dispatch() {
    let roster = Roster::new();
    let deliveries = Rc::new(Cell::new(0_u32));
    let probe = Rc::clone(&deliveries);
    let own_id: Rc<Cell<SubscriptionId>> = Rc::new(Cell::new(0));
    let id_slot = Rc::clone(&own_id);
    let unsubscriber = roster.clone();

    let subscription = roster.subscribe_changes(move |_| {
        probe.set(probe.get() + 1);
        unsubscriber.unsubscribe_changes(id_slot.get());
    });
    own_id.set(subscription);

    roster.push(Person::new("Walter White", 42));
    roster.push(Person::new("George II", 68));

    assert_eq!(deliveries.get(), 1);
}

#[test]
fn clones_share_the_same_underlying_list() {
    let roster = Roster::new();
    let alias = roster.clone();

    alias.push(Person::new("Walter White", 42));

    assert_eq!(roster.len(), 1);
    assert_eq!(roster.get(0).map(|p| p.name), Some("Walter White".into()));
}
