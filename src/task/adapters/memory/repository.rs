//! In-memory repository for task storage tests.

use async_trait::async_trait;
use mongodb::bson::Bson;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use thiserror::Error;

use crate::task::{
    domain::{TagCount, TaskId, TaskRecord},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};

/// Thread-safe in-memory task repository.
///
/// Implements the repository contract over a process-local map, including
/// the same tag-counting semantics as the store-side aggregation. Intended
/// as a test double.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    records: Arc<RwLock<HashMap<TaskId, TaskRecord>>>,
}

impl InMemoryTaskRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

/// A caller-supplied identifier collides with a stored record, mirroring a
/// store-side unique-key rejection.
#[derive(Debug, Error)]
#[error("duplicate task identifier: {0}")]
struct DuplicateIdError(TaskId);

/// A caller-supplied `_id` is not an object identifier.
#[derive(Debug, Error)]
#[error("unsupported task identifier value: {0}")]
struct UnsupportedIdError(Bson);

fn poisoned(err: impl std::fmt::Display) -> TaskRepositoryError {
    TaskRepositoryError::connection(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn insert(&self, record: &TaskRecord) -> TaskRepositoryResult<TaskId> {
        let mut records = self.records.write().map_err(poisoned)?;

        let id = match record.as_document().get("_id") {
            None => TaskId::new(),
            Some(Bson::ObjectId(oid)) => TaskId::from_object_id(*oid),
            Some(other) => {
                return Err(TaskRepositoryError::write(UnsupportedIdError(
                    other.clone(),
                )));
            }
        };
        if records.contains_key(&id) {
            return Err(TaskRepositoryError::write(DuplicateIdError(id)));
        }

        let mut stored = record.clone().into_document();
        stored.insert("_id", id.into_inner());
        records.insert(id, TaskRecord::from_document(stored));
        Ok(id)
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<TaskRecord>> {
        let records = self.records.read().map_err(poisoned)?;
        Ok(records.get(&id).cloned())
    }

    async fn delete_by_id(&self, id: TaskId) -> TaskRepositoryResult<bool> {
        let mut records = self.records.write().map_err(poisoned)?;
        Ok(records.remove(&id).is_some())
    }

    async fn count_by_tag(&self) -> TaskRepositoryResult<Vec<TagCount>> {
        let records = self.records.read().map_err(poisoned)?;

        let mut counts: HashMap<String, u64> = HashMap::new();
        for record in records.values() {
            for tag in record.tags() {
                *counts.entry(tag.to_owned()).or_insert(0) += 1;
            }
        }

        // Map iteration order stands in for the store's unspecified
        // grouping order.
        Ok(counts
            .into_iter()
            .map(|(tag, count)| TagCount { tag, count })
            .collect())
    }
}
