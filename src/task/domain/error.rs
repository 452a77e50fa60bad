//! Error types for task domain validation.

use thiserror::Error;

/// Errors returned while constructing domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The identifier string is not a well-formed object identifier.
    #[error("invalid task identifier '{0}', expected 24 hexadecimal characters")]
    InvalidTaskId(String),
}
