//! Service layer exposing the string-identifier task store façade.

use crate::task::{
    domain::{TagCount, TaskDomainError, TaskId, TaskRecord},
    ports::{TaskRepository, TaskRepositoryError},
};
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for task store operations.
#[derive(Debug, Error)]
pub enum TaskStoreError {
    /// Identifier validation failed; the store was never contacted.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

/// Result type for task store service operations.
pub type TaskStoreResult<T> = Result<T, TaskStoreError>;

/// String-identifier façade over a task repository.
///
/// Callers address records by the identifier's canonical string encoding;
/// the façade validates that encoding client-side before issuing any store
/// operation and otherwise passes each intent through as a single call.
#[derive(Clone)]
pub struct TaskStore<R>
where
    R: TaskRepository,
{
    repository: Arc<R>,
}

impl<R> TaskStore<R>
where
    R: TaskRepository,
{
    /// Creates a new task store over the given repository.
    #[must_use]
    pub const fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Stores a new record and returns its identifier in canonical string
    /// form.
    ///
    /// The record is accepted as-is; no field is required and nothing is
    /// validated.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Repository`] when the store rejects the
    /// insert or is unreachable.
    pub async fn create(&self, record: &TaskRecord) -> TaskStoreResult<String> {
        let id = self.repository.insert(record).await?;
        Ok(id.to_hex())
    }

    /// Fetches a record by its string identifier.
    ///
    /// Returns `Ok(None)` when no record matches; absence is a normal
    /// outcome.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Domain`] when the identifier string is
    /// malformed (detected before the store is contacted) and
    /// [`TaskStoreError::Repository`] when the lookup fails.
    pub async fn get_by_id(&self, id: &str) -> TaskStoreResult<Option<TaskRecord>> {
        let task_id = TaskId::parse(id)?;
        Ok(self.repository.find_by_id(task_id).await?)
    }

    /// Deletes a record by its string identifier.
    ///
    /// Returns `true` when a record was removed and `false` when nothing
    /// matched; both are success outcomes.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Domain`] when the identifier string is
    /// malformed (detected before the store is contacted) and
    /// [`TaskStoreError::Repository`] when the delete fails.
    pub async fn delete_by_id(&self, id: &str) -> TaskStoreResult<bool> {
        let task_id = TaskId::parse(id)?;
        Ok(self.repository.delete_by_id(task_id).await?)
    }

    /// Recomputes the per-tag occurrence counts across the collection.
    ///
    /// The result carries no defined order; callers must not depend on one.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Repository`] when the store is
    /// unreachable.
    pub async fn aggregate_by_tag(&self) -> TaskStoreResult<Vec<TagCount>> {
        Ok(self.repository.count_by_tag().await?)
    }
}
