//! Round-trip tests for the task store.
//!
//! Each test works against a temp data directory and verifies what ends
//! up on disk, not just what the store hands back.

use std::fs;

use pretty_assertions::assert_eq;
use tempfile::TempDir;

use dayplan::io::store::{STORAGE_KEY, Store};
use dayplan::model::Task;

#[test]
fn round_trip_preserves_order_and_fields() {
    let dir = TempDir::new().unwrap();
    let store = Store::new(dir.path());

    let tasks = vec![
        Task::new("Water the plants"),
        Task {
            text: "Answer mail".into(),
            completed: true,
        },
        Task::new("Water the plants"), // duplicate text is legal
    ];

    store.save(&tasks).unwrap();
    assert_eq!(store.load(), tasks);
}

#[test]
fn storage_file_lives_under_the_fixed_key() {
    let dir = TempDir::new().unwrap();
    let store = Store::new(dir.path());
    store.save(&[Task::new("One")]).unwrap();

    let expected = dir.path().join(format!("{}.json", STORAGE_KEY));
    assert!(expected.exists());
    assert_eq!(STORAGE_KEY, "planificador-diario-tareas");
}

#[test]
fn load_on_absent_store_is_empty() {
    let dir = TempDir::new().unwrap();
    let store = Store::new(dir.path());
    assert_eq!(store.load(), Vec::<Task>::new());
}

#[test]
fn load_on_garbage_is_empty_not_an_error() {
    let dir = TempDir::new().unwrap();
    let store = Store::new(dir.path());

    for garbage in ["not json at all", "{\"an\":\"object\"}", "42", "\"string\""] {
        fs::write(store.path(), garbage).unwrap();
        assert_eq!(store.load(), Vec::<Task>::new(), "input: {garbage}");
    }
}

#[test]
fn array_with_wrong_element_shape_is_empty() {
    let dir = TempDir::new().unwrap();
    let store = Store::new(dir.path());
    fs::write(store.path(), r#"[{"title":"wrong field"}]"#).unwrap();
    assert_eq!(store.load(), Vec::<Task>::new());
}

#[test]
fn stored_json_matches_the_original_wire_shape() {
    let dir = TempDir::new().unwrap();
    let store = Store::new(dir.path());
    store
        .save(&[
            Task::new("Task A"),
            Task {
                text: "Task B".into(),
                completed: true,
            },
        ])
        .unwrap();

    let raw = fs::read_to_string(store.path()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let entries = value.as_array().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["text"], "Task A");
    assert_eq!(entries[0]["completed"], false);
    assert_eq!(entries[1]["text"], "Task B");
    assert_eq!(entries[1]["completed"], true);
}
