//! In-process LRU cache over the indexed strategy.

use async_trait::async_trait;
use parking_lot::Mutex;
use std::time::Instant;
use tracing::debug;

use super::{IndexedStrategy, UrlStrategy};
use crate::domain::entities::ShortenedUrl;
use crate::error::AppError;
use crate::infrastructure::cache::BoundedLruCache;

/// Strategy that answers repeat lookups from a bounded LRU cache.
///
/// Creates go to the fallback first and are then written through to the cache.
/// Cache hits are returned without consulting the store; mappings are immutable,
/// so a cached entry can never be stale.
///
/// The cache is guarded by a mutex that is never held across an `.await`.
pub struct AppCacheStrategy {
    cache: Mutex<BoundedLruCache<String, String>>,
    fallback: IndexedStrategy,
}

impl AppCacheStrategy {
    /// Wraps `fallback` with an LRU cache holding at most `capacity` entries.
    pub fn new(fallback: IndexedStrategy, capacity: usize) -> Self {
        Self {
            cache: Mutex::new(BoundedLruCache::new(capacity)),
            fallback,
        }
    }

    /// Number of cached mappings.
    pub fn cache_size(&self) -> usize {
        self.cache.lock().size()
    }

    /// Returns true if `short_code` is cached. Does not affect eviction order.
    pub fn is_cached(&self, short_code: &str) -> bool {
        self.cache.lock().contains(short_code)
    }

    /// Stores a mapping and returns the resulting cache size.
    fn remember(&self, short_code: &str, original_url: &str) -> usize {
        let mut cache = self.cache.lock();
        if let Some(evicted) = cache.set(short_code.to_string(), original_url.to_string()) {
            debug!("[app-cache] evicted {}", evicted);
        }
        cache.size()
    }
}

#[async_trait]
impl UrlStrategy for AppCacheStrategy {
    async fn create_short_url(
        &self,
        original_url: &str,
        short_code: Option<&str>,
    ) -> Result<ShortenedUrl, AppError> {
        let result = self
            .fallback
            .create_short_url(original_url, short_code)
            .await?;

        let size = self.remember(&result.short_code, &result.original_url);
        debug!(
            "[app-cache] cached after create: {} (cache size: {})",
            result.short_code, size
        );

        Ok(result)
    }

    async fn resolve(&self, short_code: &str) -> Result<Option<String>, AppError> {
        let started = Instant::now();
        let cached = self.cache.lock().get(short_code);

        if let Some(url) = cached {
            debug!(
                "[app-cache] hit: {} (elapsed_ms: {:.2})",
                short_code,
                started.elapsed().as_secs_f64() * 1000.0
            );
            return Ok(Some(url));
        }

        debug!("[app-cache] miss: {}", short_code);
        let resolved = self.fallback.resolve(short_code).await?;

        if let Some(url) = &resolved {
            let size = self.remember(short_code, url);
            debug!(
                "[app-cache] cached fallback result: {} (cache size: {})",
                short_code, size
            );
        }

        Ok(resolved)
    }

    fn name(&self) -> &'static str {
        "APP_CACHE"
    }
}
