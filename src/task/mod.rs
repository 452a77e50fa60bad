//! Task storage: schemaless records, identifier-addressed access, and tag
//! aggregation.
//!
//! This module wraps one document-store collection behind four operations:
//! create, fetch by identifier, delete by identifier, and a per-tag
//! occurrence aggregation computed server-side. The module follows
//! hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - The string-identifier façade in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
