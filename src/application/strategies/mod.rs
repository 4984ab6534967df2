//! Interchangeable short code resolution strategies.

mod app_cache;
mod builder;
mod full_scan;
mod indexed;
mod redis;

pub use app_cache::AppCacheStrategy;
pub use builder::{StrategyKind, build_strategy};
pub use full_scan::FullScanStrategy;
pub use indexed::IndexedStrategy;
pub use redis::{CacheStats, MISS_MARKER, RedisStrategy, cache_key};

use crate::domain::entities::ShortenedUrl;
use crate::error::AppError;
use async_trait::async_trait;

/// Contract shared by every strategy.
///
/// The persistent store is always written before any cache is populated, so a
/// successful create is visible to a fresh strategy instance over the same store.
#[async_trait]
pub trait UrlStrategy: Send + Sync {
    /// Maps `original_url` to a short code.
    ///
    /// With `short_code` the caller's code is used as-is; without it a random
    /// code is generated, retrying on collision up to
    /// [`MAX_GENERATION_ATTEMPTS`](crate::utils::code_generator::MAX_GENERATION_ATTEMPTS) times.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the supplied code is taken or no free
    /// code was found. Returns [`AppError::Internal`] if the store is unreachable.
    async fn create_short_url(
        &self,
        original_url: &str,
        short_code: Option<&str>,
    ) -> Result<ShortenedUrl, AppError>;

    /// Looks up the original URL for `short_code`.
    ///
    /// An unknown code is `Ok(None)`, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the store is unreachable.
    async fn resolve(&self, short_code: &str) -> Result<Option<String>, AppError>;

    /// Short name used in logs.
    fn name(&self) -> &'static str;
}
