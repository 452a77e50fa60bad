//! Identifier types for the task domain.

use super::TaskDomainError;
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a stored task record.
///
/// Wraps the store's native object identifier. The canonical string form is
/// the 24-character lowercase hexadecimal encoding. Identifiers are unique
/// within a collection and immutable for the life of the record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(ObjectId);

impl TaskId {
    /// Creates a new random task identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(ObjectId::new())
    }

    /// Parses a task identifier from its canonical string encoding.
    ///
    /// Validation is entirely client-side; no store round trip is involved.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidTaskId`] when the string is not a
    /// well-formed object identifier (wrong length or non-hexadecimal
    /// characters).
    pub fn parse(value: &str) -> Result<Self, TaskDomainError> {
        ObjectId::parse_str(value)
            .map(Self)
            .map_err(|_| TaskDomainError::InvalidTaskId(value.to_owned()))
    }

    /// Creates a task identifier from an existing object identifier.
    #[must_use]
    pub const fn from_object_id(oid: ObjectId) -> Self {
        Self(oid)
    }

    /// Returns the wrapped object identifier.
    #[must_use]
    pub const fn into_inner(self) -> ObjectId {
        self.0
    }

    /// Returns the canonical hexadecimal encoding.
    #[must_use]
    pub fn to_hex(self) -> String {
        self.0.to_hex()
    }
}

impl Default for TaskId {
    fn default() -> Self {
        Self::new()
    }
}

impl AsRef<ObjectId> for TaskId {
    fn as_ref(&self) -> &ObjectId {
        &self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_hex())
    }
}
