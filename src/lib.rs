//! Taskstore: a document-store-backed task repository.
//!
//! The crate exposes a thin data-access layer over a single `MongoDB`
//! collection: creating schemaless task records, fetching and deleting them
//! by identifier, and aggregating tag occurrence counts through a
//! server-side pipeline. Every operation is a single delegated store call;
//! there is no retry, caching, or background processing.
//!
//! # Architecture
//!
//! Taskstore follows hexagonal architecture principles:
//!
//! - **Domain**: identifier parsing and the schemaless record type, with no
//!   infrastructure dependencies
//! - **Ports**: the abstract repository contract
//! - **Adapters**: the `MongoDB` implementation and an in-memory test double
//!
//! # Modules
//!
//! - [`task`]: task record storage, lookup, deletion, and tag aggregation

pub mod task;
