//! Indexed strategy.
//!
//! Inserts optimistically and lets the store's unique index on `short_code`
//! detect collisions. Resolve is a single keyed lookup.

use async_trait::async_trait;
use serde_json::json;
use std::sync::Arc;
use std::time::Instant;
use tracing::debug;

use super::UrlStrategy;
use crate::domain::entities::{ShortenedUrl, UrlMapping};
use crate::domain::repositories::MappingRepository;
use crate::error::AppError;
use crate::utils::code_generator::{CodeGenerator, MAX_GENERATION_ATTEMPTS, RandomCodeGenerator};

/// Strategy backed by the store's uniqueness constraint.
///
/// Also serves as the fallback for both cache strategies.
pub struct IndexedStrategy {
    repository: Arc<dyn MappingRepository>,
    generator: Arc<dyn CodeGenerator>,
    base_url: String,
}

impl IndexedStrategy {
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

    async fn insert_generated(&self, original_url: &str) -> Result<UrlMapping, AppError> {
        for attempt in 1..=MAX_GENERATION_ATTEMPTS {
            let mapping = UrlMapping::new(self.generator.generate(), original_url);

            match self.repository.insert(&mapping).await {
                Ok(()) => {
                    debug!(
                        "[indexed] created {} (attempt {})",
                        mapping.short_code, attempt
                    );
                    return Ok(mapping);
                }
                Err(e) if e.is_conflict() => {
                    debug!(
                        "[indexed] collision on {}, retrying (attempt {})",
                        mapping.short_code, attempt
                    );
                }
                Err(e) => return Err(e),
            }
        }

        Err(AppError::conflict(
            format!(
                "Unable to generate unique short code after {} attempts",
                MAX_GENERATION_ATTEMPTS
            ),
            json!({ "attempts": MAX_GENERATION_ATTEMPTS }),
        ))
    }

    async fn insert_custom(&self, original_url: &str, code: &str) -> Result<UrlMapping, AppError> {
        let mapping = UrlMapping::new(code, original_url);

        match self.repository.insert(&mapping).await {
            Ok(()) => Ok(mapping),
            Err(e) if e.is_conflict() => Err(AppError::conflict(
                "Short code already exists",
                json!({ "short_code": code }),
            )),
            Err(e) => Err(e),
        }
    }
}

#[async_trait]
impl UrlStrategy for IndexedStrategy {
    async fn create_short_url(
        &self,
        original_url: &str,
        short_code: Option<&str>,
    ) -> Result<ShortenedUrl, AppError> {
        let mapping = match short_code {
            Some(code) => self.insert_custom(original_url, code).await?,
            None => self.insert_generated(original_url).await?,
        };

        Ok(ShortenedUrl::from_mapping(mapping, &self.base_url))
    }

    async fn resolve(&self, short_code: &str) -> Result<Option<String>, AppError> {
        let started = Instant::now();
        let found = self.repository.find_by_code(short_code).await?;
        let elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;

        match &found {
            Some(_) => debug!("[indexed] hit: {} (elapsed_ms: {:.2})", short_code, elapsed_ms),
            None => debug!("[indexed] miss: {} (elapsed_ms: {:.2})", short_code, elapsed_ms),
        }

        Ok(found.map(|m| m.original_url))
    }

    fn name(&self) -> &'static str {
        "INDEXED"
    }
}
