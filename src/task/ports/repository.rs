//! Repository port for task persistence, lookup, deletion, and tag
//! aggregation.

use crate::task::domain::{TagCount, TaskId, TaskRecord};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Task persistence contract.
///
/// Each operation maps to exactly one store call: a single attempt with no
/// retry, no local timeout, and no caching on this side of the connection.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Stores a new record and returns the assigned identifier.
    ///
    /// No validation is applied; any mapping is accepted, including one
    /// missing the conventional fields.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Connection`] when the store is
    /// unreachable or [`TaskRepositoryError::Write`] when the store rejects
    /// the insert.
    async fn insert(&self, record: &TaskRecord) -> TaskRepositoryResult<TaskId>;

    /// Finds a record by identifier.
    ///
    /// Returns `None` when no record matches; absence is a normal outcome,
    /// not an error.
    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<TaskRecord>>;

    /// Deletes the record with the given identifier, if present.
    ///
    /// Returns `true` when a record was removed and `false` when nothing
    /// matched; both are success outcomes. Calling twice with the same
    /// identifier yields `true` then `false`.
    async fn delete_by_id(&self, id: TaskId) -> TaskRepositoryResult<bool>;

    /// Counts tag occurrences across every record in the collection.
    ///
    /// Each string element of a record's `tags` array contributes one
    /// occurrence, duplicates within the same record included. Non-string
    /// elements are ignored, and records with an absent or empty `tags`
    /// array contribute nothing. The result carries no defined order: no
    /// sort is applied.
    async fn count_by_tag(&self) -> TaskRepositoryResult<Vec<TagCount>>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// The store was unreachable or the connection dropped mid-operation.
    #[error("store connection failed: {0}")]
    Connection(Arc<dyn std::error::Error + Send + Sync>),

    /// The store rejected the operation.
    #[error("store rejected the operation: {0}")]
    Write(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a connectivity failure.
    pub fn connection(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Connection(Arc::new(err))
    }

    /// Wraps a store-side rejection.
    pub fn write(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Write(Arc::new(err))
    }
}
