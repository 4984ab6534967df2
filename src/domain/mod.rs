//! Domain layer: the URL mapping entity and the persistence contract.
//!
//! - [`entities`] - Core data structures
//! - [`repositories`] - Data access trait implemented by the infrastructure layer
//!
//! The persistent store is the single source of truth for mappings. Caches in
//! [`crate::infrastructure::cache`] are advisory only.

pub mod entities;
pub mod repositories;
