//! Derived tag aggregation projection.

use serde::{Deserialize, Serialize};

/// Occurrence count for a single tag across the whole collection.
///
/// Produced on demand by the tag aggregation; never persisted, never
/// cached, recomputed from scratch on every call.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TagCount {
    /// The tag value.
    pub tag: String,
    /// Number of occurrences across every record's `tags` array.
    pub count: u64,
}
