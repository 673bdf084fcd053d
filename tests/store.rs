use std::collections::BTreeMap;

use student_roster::model::StudentRecord;
use student_roster::store::{MemoryBackend, StorageBackend, StudentStore};

fn empty_store() -> StudentStore<MemoryBackend> {
    StudentStore::open(MemoryBackend::new()).expect("store opened")
}

#[test]
fn adds_are_listed_in_insertion_order() {
    let mut store = empty_store();
    store.add("10B", 13, "Bob").expect("add");
    store.add("10A", 12, "Alice").expect("add");
    store.add("10A", 12, "Alice").expect("duplicate add");

    assert_eq!(
        store.list_all(),
        &[
            StudentRecord::new("10B", 13, "Bob"),
            StudentRecord::new("10A", 12, "Alice"),
            StudentRecord::new("10A", 12, "Alice"),
        ]
    );
}

#[test]
fn every_mutation_persists_the_whole_table() {
    let mut store = empty_store();
    store.add("10A", 12, "Alice").expect("add");
    store.add("10B", 13, "Bob").expect("add");
    store.update("Bob", "10C", 14, "Robert").expect("update");

    assert_eq!(store.backend().save_count(), 3);
    assert_eq!(store.backend().records(), store.list_all());
}

#[test]
fn delete_removes_all_matching_rows() {
    let mut store = empty_store();
    store.add("10A", 12, "Alice").expect("add");
    store.add("10B", 13, "Bob").expect("add");
    store.add("10C", 14, "Alice").expect("add");

    assert!(store.delete("Alice").expect("delete"));

    assert!(store.search("Alice").is_empty());
    assert_eq!(store.list_all(), &[StudentRecord::new("10B", 13, "Bob")]);
}

#[test]
fn delete_is_case_sensitive_and_reports_misses() {
    let mut store = empty_store();
    store.add("10A", 12, "Alice").expect("add");

    assert!(!store.delete("alice").expect("delete"));
    assert_eq!(store.len(), 1);
}

#[test]
fn search_ignores_case_and_matches_name_or_class() {
    let mut store = empty_store();
    store.add("Math", 12, "Alice").expect("add");
    store.add("History", 13, "Bob").expect("add");
    store.add("10A", 14, "Mathilde").expect("add");

    let upper = store.search("MATH");
    let lower = store.search("math");

    assert_eq!(upper, lower);
    let names: Vec<&str> = upper.iter().map(|record| record.name.as_str()).collect();
    assert_eq!(names, vec!["Alice", "Mathilde"]);
}

#[test]
fn empty_keyword_matches_everything() {
    let mut store = empty_store();
    store.add("10A", 12, "Alice").expect("add");
    store.add("10B", 13, "Bob").expect("add");

    assert_eq!(store.search("").len(), 2);
}

#[test]
fn update_changes_only_the_first_match() {
    let mut store = empty_store();
    store.add("10A", 12, "Alice").expect("add");
    store.add("10B", 13, "Alice").expect("add");

    assert!(store.update("Alice", "11A", 15, "Alicia").expect("update"));

    assert_eq!(
        store.list_all(),
        &[
            StudentRecord::new("11A", 15, "Alicia"),
            StudentRecord::new("10B", 13, "Alice"),
        ]
    );
}

#[test]
fn update_of_absent_name_changes_nothing() {
    let mut store = empty_store();
    store.add("10A", 12, "Alice").expect("add");
    let before = store.list_all().to_vec();

    assert!(!store.update("Zoe", "10B", 13, "Zoe").expect("update"));

    assert_eq!(store.list_all(), before.as_slice());
    assert_eq!(store.backend().save_count(), 1);
}

#[test]
fn find_returns_first_exact_match() {
    let mut store = empty_store();
    store.add("10A", 12, "Alice").expect("add");
    store.add("10B", 13, "Alice").expect("add");

    assert_eq!(store.find("Alice").map(|record| record.class.as_str()), Some("10A"));
    assert!(store.find("alice").is_none());
}

#[test]
fn open_loads_existing_backend_rows() {
    let backend = MemoryBackend::with_records(vec![StudentRecord::new("10A", 12, "Alice")]);

    let store = StudentStore::open(backend).expect("store opened");

    assert_eq!(store.len(), 1);
    assert_eq!(store.backend().save_count(), 0);
}

#[test]
fn load_discards_unsaved_view_in_favour_of_backend() {
    let mut backend = MemoryBackend::new();
    backend
        .save(&[StudentRecord::new("10A", 12, "Alice")])
        .expect("seeded");
    let mut store = StudentStore::open(backend).expect("store opened");

    store.load().expect("reloaded");

    assert_eq!(store.list_all(), &[StudentRecord::new("10A", 12, "Alice")]);
}

#[test]
fn averages_use_every_row_of_the_class() {
    let mut store = empty_store();
    store.add("10A", 12, "Alice").expect("add");
    store.add("10A", 15, "Carl").expect("add");

    assert_eq!(store.average_age_by_class().get("10A"), Some(&13.5));
    assert_eq!(store.count_by_class().get("10A"), Some(&2));
}

#[test]
fn two_class_scenario() {
    let mut store = empty_store();
    store.add("10A", 12, "Alice").expect("add");
    store.add("10B", 13, "Bob").expect("add");

    let counts: BTreeMap<String, usize> =
        BTreeMap::from([("10A".to_string(), 1), ("10B".to_string(), 1)]);
    let averages: BTreeMap<String, f64> =
        BTreeMap::from([("10A".to_string(), 12.0), ("10B".to_string(), 13.0)]);
    assert_eq!(store.count_by_class(), counts);
    assert_eq!(store.average_age_by_class(), averages);

    assert!(store.delete("Alice").expect("delete"));
    assert_eq!(store.list_all(), &[StudentRecord::new("10B", 13, "Bob")]);
}
