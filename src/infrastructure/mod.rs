//! Infrastructure layer for external integrations.
//!
//! # Modules
//!
//! - [`cache`] - In-process LRU cache and the distributed cache client (Redis)
//! - [`persistence`] - Mapping repository implementations (PostgreSQL, in-memory)

pub mod cache;
pub mod persistence;
