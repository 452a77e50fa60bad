//! Behavioural integration tests for the task store over the in-memory
//! repository.
//!
//! These tests exercise the full lifecycle the crate exists for: creating
//! tagged records, aggregating tag occurrences, and deleting records until
//! the aggregation is empty again.

#![expect(
    clippy::expect_used,
    reason = "Test code uses expect for assertion clarity"
)]

use std::collections::HashMap;
use std::sync::Arc;

use taskstore::task::{
    adapters::memory::InMemoryTaskRepository, domain::TaskRecord, services::TaskStore,
};
use tokio::runtime::Runtime;

/// Creates a tokio runtime for async operations in tests.
fn test_runtime() -> Runtime {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("failed to create test runtime")
}

#[test]
fn tag_aggregation_tracks_inserts_and_deletes() {
    let rt = test_runtime();
    let store = TaskStore::new(Arc::new(InMemoryTaskRepository::new()));

    let first = TaskRecord::new().with_title("A").with_tags(["x", "y"]);
    let second = TaskRecord::new().with_title("B").with_tags(["x"]);

    let first_id = rt.block_on(store.create(&first)).expect("create A");
    let second_id = rt.block_on(store.create(&second)).expect("create B");

    // Order-independent check: x appears twice across both records, y once.
    let counts: HashMap<String, u64> = rt
        .block_on(store.aggregate_by_tag())
        .expect("aggregate")
        .into_iter()
        .map(|entry| (entry.tag, entry.count))
        .collect();
    assert_eq!(counts.get("x"), Some(&2));
    assert_eq!(counts.get("y"), Some(&1));
    assert_eq!(counts.len(), 2);

    assert!(rt.block_on(store.delete_by_id(&first_id)).expect("delete A"));
    assert!(
        rt.block_on(store.delete_by_id(&second_id))
            .expect("delete B")
    );
    assert!(
        !rt.block_on(store.delete_by_id(&second_id))
            .expect("repeat delete")
    );

    let remaining = rt
        .block_on(store.aggregate_by_tag())
        .expect("aggregate after deletes");
    assert!(remaining.is_empty());
}

#[test]
fn fetched_record_matches_created_fields() {
    let rt = test_runtime();
    let store = TaskStore::new(Arc::new(InMemoryTaskRepository::new()));

    let record = TaskRecord::new()
        .with_title("Ship release")
        .with_tags(["release", "release"])
        .with_owner("carol");

    let id = rt.block_on(store.create(&record)).expect("create");
    let fetched = rt
        .block_on(store.get_by_id(&id))
        .expect("lookup")
        .expect("record should exist");

    assert_eq!(fetched.without_id(), record.without_id());
}
