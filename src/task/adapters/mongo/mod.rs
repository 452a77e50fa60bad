//! `MongoDB` adapter for task storage.

mod repository;

pub use repository::MongoTaskRepository;
