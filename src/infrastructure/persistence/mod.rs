//! Mapping repository implementations.
//!
//! - [`PgMappingRepository`] - PostgreSQL storage through SQLx
//! - [`InMemoryMappingRepository`] - process-local table with call counters

pub mod memory_mapping_repository;
pub mod pg_mapping_repository;

pub use memory_mapping_repository::InMemoryMappingRepository;
pub use pg_mapping_repository::PgMappingRepository;
