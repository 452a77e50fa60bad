//! Demonstrates the task store against a local `MongoDB` instance.
//!
//! Connects to `mongodb://localhost:27017`, database `task_db`, collection
//! `tasks`, then walks the full record lifecycle: create one sample task,
//! fetch it back, aggregate tag counts across the collection, and delete
//! it, printing one human-readable line per step.

#![expect(
    clippy::print_stdout,
    reason = "demonstration binary reports each step on standard output"
)]

use mongodb::bson::doc;
use std::sync::Arc;
use taskstore::task::{
    adapters::mongo::MongoTaskRepository, domain::TaskRecord, services::TaskStore,
};

/// Boxed error type for the main result.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    let repository =
        MongoTaskRepository::connect("mongodb://localhost:27017", "task_db", "tasks").await?;
    let store = TaskStore::new(Arc::new(repository));

    let record = TaskRecord::new()
        .with_title("Prepare weekly report")
        .with_tags(["work", "urgent"])
        .with_owner("user1")
        .with_custom_fields(doc! { "priority": "high" });

    let id = store.create(&record).await?;
    println!("created task {id}");

    match store.get_by_id(&id).await? {
        Some(task) => println!("fetched task: {}", task.as_document()),
        None => println!("task {id} not found"),
    }

    let counts = store.aggregate_by_tag().await?;
    println!("tag counts:");
    for entry in counts {
        println!("  {}: {}", entry.tag, entry.count);
    }

    let deleted = store.delete_by_id(&id).await?;
    println!("deleted task {id}: {deleted}");

    Ok(())
}
