//! Tag-counting and identifier semantics of the in-memory adapter.

use std::collections::HashMap;

use crate::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{TagCount, TaskRecord},
    ports::{TaskRepository, TaskRepositoryError},
};
use mongodb::bson::doc;

fn as_map(counts: Vec<TagCount>) -> HashMap<String, u64> {
    counts
        .into_iter()
        .map(|entry| (entry.tag, entry.count))
        .collect()
}

#[tokio::test(flavor = "multi_thread")]
async fn duplicate_tags_within_one_record_count_individually() {
    let repository = InMemoryTaskRepository::new();
    repository
        .insert(&TaskRecord::new().with_tags(["x", "x", "y"]))
        .await
        .expect("insert should succeed");

    let counts = as_map(repository.count_by_tag().await.expect("aggregate"));

    assert_eq!(counts.get("x"), Some(&2));
    assert_eq!(counts.get("y"), Some(&1));
    assert_eq!(counts.len(), 2);
}

#[tokio::test(flavor = "multi_thread")]
async fn counts_accumulate_across_records() {
    let repository = InMemoryTaskRepository::new();
    repository
        .insert(&TaskRecord::new().with_tags(["work", "urgent"]))
        .await
        .expect("first insert");
    repository
        .insert(&TaskRecord::new().with_tags(["work"]))
        .await
        .expect("second insert");

    let counts = as_map(repository.count_by_tag().await.expect("aggregate"));

    assert_eq!(counts.get("work"), Some(&2));
    assert_eq!(counts.get("urgent"), Some(&1));
}

#[tokio::test(flavor = "multi_thread")]
async fn non_string_tag_elements_are_skipped() {
    let repository = InMemoryTaskRepository::new();
    repository
        .insert(&TaskRecord::from_document(doc! { "tags": ["x", 7] }))
        .await
        .expect("insert should succeed");

    let counts = repository.count_by_tag().await.expect("aggregate");

    assert_eq!(
        counts,
        vec![TagCount {
            tag: "x".to_owned(),
            count: 1,
        }]
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn records_without_tags_contribute_nothing() {
    let repository = InMemoryTaskRepository::new();
    repository
        .insert(&TaskRecord::new().with_title("untagged"))
        .await
        .expect("untagged insert");
    repository
        .insert(&TaskRecord::from_document(doc! { "tags": [] }))
        .await
        .expect("empty-tags insert");

    let counts = repository.count_by_tag().await.expect("aggregate");
    assert!(counts.is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn caller_supplied_identifier_is_honoured() {
    let repository = InMemoryTaskRepository::new();
    let id = crate::task::domain::TaskId::new();
    let record = TaskRecord::from_document(doc! { "_id": id.into_inner(), "title": "pinned" });

    let assigned = repository.insert(&record).await.expect("insert");
    assert_eq!(assigned, id);

    let fetched = repository
        .find_by_id(id)
        .await
        .expect("lookup")
        .expect("record should exist");
    assert_eq!(fetched.as_document().get_str("title"), Ok("pinned"));
}

#[tokio::test(flavor = "multi_thread")]
async fn duplicate_supplied_identifier_is_rejected_as_write_error() {
    let repository = InMemoryTaskRepository::new();
    let id = repository
        .insert(&TaskRecord::new().with_title("first"))
        .await
        .expect("first insert");

    let clash = TaskRecord::from_document(doc! { "_id": id.into_inner(), "title": "second" });
    let result = repository.insert(&clash).await;

    assert!(matches!(result, Err(TaskRepositoryError::Write(_))));
}

#[tokio::test(flavor = "multi_thread")]
async fn non_object_identifier_is_rejected_as_write_error() {
    let repository = InMemoryTaskRepository::new();
    let record = TaskRecord::from_document(doc! { "_id": "custom-key", "title": "odd" });

    let result = repository.insert(&record).await;

    assert!(matches!(result, Err(TaskRepositoryError::Write(_))));
}
