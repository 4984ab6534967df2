//! PostgreSQL implementation of the mapping repository.

use async_trait::async_trait;
use sqlx::{PgPool, Row};
use std::sync::Arc;

use crate::domain::entities::UrlMapping;
use crate::domain::repositories::MappingRepository;
use crate::error::AppError;

/// PostgreSQL repository for the `url_mapping` table.
///
/// Each call checks a connection out of the pool for the duration of a single
/// statement. Uniqueness of `short_code` is enforced by the index created in
/// `migrations/0002_unique_short_code.sql`.
pub struct PgMappingRepository {
    pool: Arc<PgPool>,
}

impl PgMappingRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MappingRepository for PgMappingRepository {
    async fn insert(&self, mapping: &UrlMapping) -> Result<(), AppError> {
        sqlx::query("INSERT INTO url_mapping (short_code, original_url) VALUES ($1, $2)")
            .bind(&mapping.short_code)
            .bind(&mapping.original_url)
            .execute(self.pool.as_ref())
            .await?;

        Ok(())
    }

    async fn find_by_code(&self, short_code: &str) -> Result<Option<UrlMapping>, AppError> {
        let row = sqlx::query(
            "SELECT short_code, original_url FROM url_mapping WHERE short_code = $1 LIMIT 1",
        )
        .bind(short_code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(|r| UrlMapping::new(r.get::<String, _>(0), r.get::<String, _>(1))))
    }

    async fn list_all(&self) -> Result<Vec<UrlMapping>, AppError> {
        let rows = sqlx::query("SELECT short_code, original_url FROM url_mapping")
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(rows
            .into_iter()
            .map(|r| UrlMapping::new(r.get::<String, _>(0), r.get::<String, _>(1)))
            .collect())
    }
}
