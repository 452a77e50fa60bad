//! In-memory adapter for task storage tests.

mod repository;

pub use repository::InMemoryTaskRepository;
