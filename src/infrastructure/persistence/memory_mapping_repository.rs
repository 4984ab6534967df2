//! Process-local mapping table.
//!
//! Mirrors the PostgreSQL table semantics (unique `short_code`) and counts
//! every call so callers can tell whether a lookup reached the store.

use async_trait::async_trait;
use parking_lot::RwLock;
use serde_json::json;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use crate::domain::entities::UrlMapping;
use crate::domain::repositories::MappingRepository;
use crate::error::AppError;

/// In-memory implementation of [`MappingRepository`].
///
/// Rows keep their insertion order so `list_all` behaves like a heap scan.
#[derive(Default)]
pub struct InMemoryMappingRepository {
    rows: RwLock<Vec<UrlMapping>>,
    index: RwLock<HashMap<String, usize>>,
    scans: AtomicU64,
    lookups: AtomicU64,
    inserts: AtomicU64,
    unavailable: AtomicBool,
}

impl InMemoryMappingRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository pre-populated with `mappings`.
    ///
    /// Seeding does not count as inserts.
    pub fn with_mappings(mappings: impl IntoIterator<Item = UrlMapping>) -> Self {
        let repo = Self::new();
        {
            let mut rows = repo.rows.write();
            let mut index = repo.index.write();
            for mapping in mappings {
                index.insert(mapping.short_code.clone(), rows.len());
                rows.push(mapping);
            }
        }
        repo
    }

    /// Number of `list_all` calls served.
    pub fn scan_count(&self) -> u64 {
        self.scans.load(Ordering::Relaxed)
    }

    /// Number of `find_by_code` calls served.
    pub fn lookup_count(&self) -> u64 {
        self.lookups.load(Ordering::Relaxed)
    }

    /// Number of `insert` calls attempted, including rejected ones.
    pub fn insert_count(&self) -> u64 {
        self.inserts.load(Ordering::Relaxed)
    }

    /// Total calls of any kind.
    pub fn total_calls(&self) -> u64 {
        self.scan_count() + self.lookup_count() + self.insert_count()
    }

    /// Number of stored rows.
    pub fn len(&self) -> usize {
        self.rows.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Makes every subsequent call fail as if the database were down.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::Relaxed);
    }

    fn check_available(&self) -> Result<(), AppError> {
        if self.unavailable.load(Ordering::Relaxed) {
            return Err(AppError::internal("Database error", json!({})));
        }
        Ok(())
    }
}

#[async_trait]
impl MappingRepository for InMemoryMappingRepository {
    async fn insert(&self, mapping: &UrlMapping) -> Result<(), AppError> {
        self.inserts.fetch_add(1, Ordering::Relaxed);
        self.check_available()?;

        let mut rows = self.rows.write();
        let mut index = self.index.write();

        if index.contains_key(&mapping.short_code) {
            return Err(AppError::conflict(
                "Unique constraint violation",
                json!({ "constraint": "url_mapping_short_code_key" }),
            ));
        }

        index.insert(mapping.short_code.clone(), rows.len());
        rows.push(mapping.clone());
        Ok(())
    }

    async fn find_by_code(&self, short_code: &str) -> Result<Option<UrlMapping>, AppError> {
        self.lookups.fetch_add(1, Ordering::Relaxed);
        self.check_available()?;

        let rows = self.rows.read();
        let index = self.index.read();
        Ok(index.get(short_code).map(|&pos| rows[pos].clone()))
    }

    async fn list_all(&self) -> Result<Vec<UrlMapping>, AppError> {
        self.scans.fetch_add(1, Ordering::Relaxed);
        self.check_available()?;

        Ok(self.rows.read().clone())
    }
}
