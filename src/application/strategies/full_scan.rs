//! Full-scan strategy.
//!
//! Every uniqueness check and every resolve reads the entire mapping table and
//! compares codes one by one. It is O(n) per call on purpose: this strategy is
//! the baseline the indexed and cached strategies are measured against.

use async_trait::async_trait;
use serde_json::json;
use std::sync::Arc;
use tracing::debug;

use super::UrlStrategy;
use crate::domain::entities::{ShortenedUrl, UrlMapping};
use crate::domain::repositories::MappingRepository;
use crate::error::AppError;
use crate::utils::code_generator::{CodeGenerator, MAX_GENERATION_ATTEMPTS, RandomCodeGenerator};

/// Strategy that enforces uniqueness by scanning the whole table.
pub struct FullScanStrategy {
    repository: Arc<dyn MappingRepository>,
    generator: Arc<dyn CodeGenerator>,
    base_url: String,
}

impl FullScanStrategy {
    /// Creates the strategy with the random code generator.
    pub fn new(repository: Arc<dyn MappingRepository>, base_url: impl Into<String>) -> Self {
        Self {
            repository,
            generator: Arc::new(RandomCodeGenerator),
            base_url: base_url.into(),
        }
    }

    /// Replaces the code generator.
    pub fn with_generator(mut self, generator: Arc<dyn CodeGenerator>) -> Self {
        self.generator = generator;
        self
    }

    /// Scans every row looking for `short_code`.
    async fn scan(&self, short_code: &str) -> Result<Option<UrlMapping>, AppError> {
        let rows = self.repository.list_all().await?;
        debug!(rows_scanned = rows.len(), "[fullscan] scanned table");

        let found = rows.into_iter().find(|row| row.short_code == short_code);
        match &found {
            Some(_) => debug!("[fullscan] hit: {}", short_code),
            None => debug!("[fullscan] miss: {}", short_code),
        }
        Ok(found)
    }

    async fn generate_free_code(&self) -> Result<String, AppError> {
        for attempt in 1..=MAX_GENERATION_ATTEMPTS {
            let candidate = self.generator.generate();
            if self.scan(&candidate).await?.is_none() {
                return Ok(candidate);
            }
            debug!("[fullscan] collision on {} (attempt {})", candidate, attempt);
        }

        Err(AppError::conflict(
            format!(
                "Unable to generate unique short code after {} attempts",
                MAX_GENERATION_ATTEMPTS
            ),
            json!({ "attempts": MAX_GENERATION_ATTEMPTS }),
        ))
    }
}

#[async_trait]
impl UrlStrategy for FullScanStrategy {
    async fn create_short_url(
        &self,
        original_url: &str,
        short_code: Option<&str>,
    ) -> Result<ShortenedUrl, AppError> {
        let code = match short_code {
            Some(code) => {
                if self.scan(code).await?.is_some() {
                    return Err(AppError::conflict(
                        "Short code already exists",
                        json!({ "short_code": code }),
                    ));
                }
                code.to_string()
            }
            None => self.generate_free_code().await?,
        };

        let mapping = UrlMapping::new(code, original_url);
        self.repository.insert(&mapping).await?;

        Ok(ShortenedUrl::from_mapping(mapping, &self.base_url))
    }

    async fn resolve(&self, short_code: &str) -> Result<Option<String>, AppError> {
        Ok(self.scan(short_code).await?.map(|m| m.original_url))
    }

    fn name(&self) -> &'static str {
        "FULLSCAN"
    }
}
