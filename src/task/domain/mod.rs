//! Domain model for task storage.
//!
//! The domain covers identifier parsing, the schemaless record type, and the
//! derived tag-count projection while keeping all store concerns outside the
//! domain boundary.

mod error;
mod ids;
mod record;
mod tag;

pub use error::TaskDomainError;
pub use ids::TaskId;
pub use record::TaskRecord;
pub use tag::TagCount;
