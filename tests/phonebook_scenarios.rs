use std::cell::Cell;
use std::collections::VecDeque;
use std::fs;

use contacts::core::clock::Clock;
use contacts::core::console::Console;
use contacts::core::navigator::{Level, Navigator};
use contacts::core::persist;
use contacts::core::record::{Contact, NO_DATA};
use contacts::core::store::ContactStore;

// ============================================================================
// Helper Types
// ============================================================================

/// Feeds a fixed list of answers and collects everything printed.
#[derive(Default)]
struct Script {
    answers: VecDeque<String>,
    output: Vec<String>,
}

impl Script {
    fn new(answers: &[&str]) -> Self {
        Self {
            answers: answers.iter().map(|s| s.to_string()).collect(),
            output: Vec::new(),
        }
    }
}

impl Console for Script {
    fn prompt(&mut self, _message: &str) -> Option<String> {
        self.answers.pop_front()
    }

    fn say(&mut self, message: &str) {
        self.output.push(message.to_string());
    }
}

/// One minute per call, starting at midnight.
#[derive(Default)]
struct MinuteClock {
    minutes: Cell<u32>,
}

impl Clock for MinuteClock {
    fn now(&self) -> String {
        let m = self.minutes.get();
        self.minutes.set(m + 1);
        format!("2024-03-01T{:02}:{:02}:00.000", m / 60, m % 60)
    }
}

fn navigator(store: ContactStore, answers: &[&str]) -> Navigator<Script> {
    Navigator::new(store, Script::new(answers), Box::new(MinuteClock::default()))
}

fn step_until(nav: &mut Navigator<Script>, done: impl Fn(&Level) -> bool) {
    while !done(nav.level()) {
        assert!(nav.step(), "session ended early");
    }
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn test_john_smith_add_list_search_edit() {
    let mut nav = navigator(
        ContactStore::new(),
        &[
            "add", "person", "John", "Smith", "1990-05-17", "m", "+1 (555) 123-45",
            "list", "back",
            "search", "smith", "1",
            "edit", "gender", "F",
            "menu", "exit",
        ],
    );

    nav.step();
    let Contact::Person(p) = nav.store().get(0).unwrap() else {
        panic!("expected a person");
    };
    assert_eq!(p.gender, "M");
    assert_eq!(p.birth_date, "1990-05-17");
    let created_edit_stamp = p.time_edited.clone();

    nav.step();
    assert_eq!(nav.level(), &Level::Listing);
    assert!(nav.console().output.contains(&"1. John Smith".to_string()));
    nav.step();
    assert_eq!(nav.level(), &Level::Menu);

    nav.step();
    match nav.level() {
        Level::Searching { hits } => {
            assert_eq!(hits.len(), 1);
            assert_eq!(hits[0].summary, "John Smith");
        }
        other => panic!("expected search results, got {other:?}"),
    }

    step_until(&mut nav, |level| matches!(level, Level::RecordView { index: 0 }));
    nav.step();
    let Contact::Person(p) = nav.store().get(0).unwrap() else {
        panic!("expected a person");
    };
    assert_eq!(p.gender, "F");
    assert!(p.time_edited > created_edit_stamp);

    let store = nav.run();
    assert_eq!(store.count(), 1);
}

#[test]
fn test_organization_with_empty_name_is_counted() {
    let mut nav = navigator(ContactStore::new(), &["add", "organization", "", "", "", "count"]);
    nav.step();
    nav.step();
    let record = nav.store().get(0).unwrap();
    assert_eq!(record.summary_line(), NO_DATA);
    let (_, script) = nav.into_parts();
    assert!(script.output.contains(&"Bad address!".to_string()));
    assert!(script.output.contains(&"Wrong number format!".to_string()));
    assert!(script.output.contains(&"The Phone Book has 1 records.\n".to_string()));
}

#[test]
fn test_delete_from_search_shifts_later_records() {
    let answers = [
        "add", "organization", "Alpha", "a st", "11",
        "add", "organization", "Beta", "b st", "22",
        "add", "organization", "Gamma", "g st", "33",
        "search", "beta", "1", "delete",
        "list",
    ];
    let mut nav = navigator(ContactStore::new(), &answers);
    step_until(&mut nav, |level| matches!(level, Level::RecordView { index: 1 }));
    nav.step();
    assert_eq!(nav.level(), &Level::Menu);
    let names: Vec<String> = nav.store().iter().map(|r| r.summary_line()).collect();
    assert_eq!(names, vec!["Alpha", "Gamma"]);

    nav.step();
    assert!(nav.console().output.contains(&"2. Gamma".to_string()));
}

#[test]
fn test_saved_session_reloads_identically() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("phonebook.db");

    let book = persist::load(Some(path.as_path())).unwrap();
    assert!(book.store.is_empty());
    assert!(book.persist);
    let store = book.store;

    let nav = navigator(
        store,
        &[
            "add", "person", "", "Doe", "bad", "", "123 45",
            "add", "organization", "Acme", "Elm St 5", "(12) 345",
            "exit",
        ],
    );
    let store = nav.run();
    assert!(persist::save(Some(path.as_path()), &store).unwrap());

    let reloaded = persist::load(Some(path.as_path())).unwrap().store;
    assert_eq!(reloaded, store);

    let raw: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(raw[0]["type"], "Person");
    assert_eq!(raw[0]["name"], NO_DATA);
    assert_eq!(raw[1]["type"], "Organization");
}
