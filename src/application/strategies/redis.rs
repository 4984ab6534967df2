//! Distributed cache with negative caching over the indexed strategy.

use async_trait::async_trait;
use metrics::counter;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};
use tracing::{debug, warn};

use super::{IndexedStrategy, UrlStrategy};
use crate::domain::entities::ShortenedUrl;
use crate::error::AppError;
use crate::infrastructure::cache::CacheService;

/// Value stored for codes known not to exist.
pub const MISS_MARKER: &str = "__MISS__";

/// Builds the cache key for a short code.
pub fn cache_key(short_code: &str) -> String {
    format!("url:{short_code}")
}

/// Snapshot of the strategy's cache counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Resolves answered from the cache, negative hits included.
    pub hits: u64,
    /// Resolves that had to ask the fallback.
    pub misses: u64,
    /// Creates delegated to the fallback.
    pub fallbacks: u64,
}

impl CacheStats {
    /// Share of resolves answered by the cache, in percent.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            return 0.0;
        }
        self.hits as f64 / total as f64 * 100.0
    }
}

#[derive(Default)]
struct Counters {
    hits: AtomicU64,
    misses: AtomicU64,
    fallbacks: AtomicU64,
}

/// Strategy that fronts the indexed store with a distributed cache.
///
/// # Resolve
///
/// 1. Read `url:<code>` from the cache
/// 2. [`MISS_MARKER`] means the code was recently found absent: return `None`
/// 3. Any other value is the URL
/// 4. On a miss, ask the fallback and cache the answer: the URL for `ttl`, or
///    the marker for `negative_ttl`
///
/// A code created elsewhere shortly after being probed stays invisible for at
/// most `negative_ttl`.
///
/// Cache failures never reach the caller; the client reports them as misses or
/// failed writes and the strategy falls back to the store.
pub struct RedisStrategy {
    cache: Arc<dyn CacheService>,
    fallback: IndexedStrategy,
    ttl: Duration,
    negative_ttl: Duration,
    counters: Counters,
}

impl RedisStrategy {
    /// Wraps `fallback` with `cache`.
    ///
    /// - `ttl` - lifetime of cached URLs
    /// - `negative_ttl` - lifetime of miss markers
    pub fn new(
        cache: Arc<dyn CacheService>,
        fallback: IndexedStrategy,
        ttl: Duration,
        negative_ttl: Duration,
    ) -> Self {
        Self {
            cache,
            fallback,
            ttl,
            negative_ttl,
            counters: Counters::default(),
        }
    }

    /// Current counter values.
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.counters.hits.load(Ordering::Relaxed),
            misses: self.counters.misses.load(Ordering::Relaxed),
            fallbacks: self.counters.fallbacks.load(Ordering::Relaxed),
        }
    }

    fn record_hit(&self) {
        self.counters.hits.fetch_add(1, Ordering::Relaxed);
        counter!("url_cache_hits_total", "strategy" => "redis").increment(1);
    }

    fn record_miss(&self) {
        self.counters.misses.fetch_add(1, Ordering::Relaxed);
        counter!("url_cache_misses_total", "strategy" => "redis").increment(1);
    }

    fn record_fallback(&self) {
        self.counters.fallbacks.fetch_add(1, Ordering::Relaxed);
        counter!("url_cache_fallbacks_total", "strategy" => "redis").increment(1);
    }

    fn log_stats(&self) {
        let stats = self.stats();
        debug!(
            "[redis] hit_rate: {:.1}% ({}/{})",
            stats.hit_rate(),
            stats.hits,
            stats.hits + stats.misses
        );
    }
}

#[async_trait]
impl UrlStrategy for RedisStrategy {
    async fn create_short_url(
        &self,
        original_url: &str,
        short_code: Option<&str>,
    ) -> Result<ShortenedUrl, AppError> {
        self.record_fallback();
        let result = self
            .fallback
            .create_short_url(original_url, short_code)
            .await?;

        let key = cache_key(&result.short_code);
        if self.cache.set(&key, &result.original_url, Some(self.ttl)).await {
            debug!(
                "[redis] cached after create: {} (TTL: {}s)",
                result.short_code,
                self.ttl.as_secs()
            );
        } else {
            warn!("[redis] failed to cache created code {}", result.short_code);
        }

        Ok(result)
    }

    async fn resolve(&self, short_code: &str) -> Result<Option<String>, AppError> {
        let started = Instant::now();
        let key = cache_key(short_code);

        if let Some(value) = self.cache.get(&key).await {
            self.record_hit();
            let elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;

            let resolved = if value == MISS_MARKER {
                debug!("[redis] negative hit: {} (elapsed_ms: {:.2})", short_code, elapsed_ms);
                None
            } else {
                debug!("[redis] hit: {} (elapsed_ms: {:.2})", short_code, elapsed_ms);
                Some(value)
            };

            self.log_stats();
            return Ok(resolved);
        }

        debug!("[redis] miss: {}, falling back", short_code);
        self.record_miss();

        let resolved = self.fallback.resolve(short_code).await?;

        let (value, ttl) = match &resolved {
            Some(url) => (url.as_str(), self.ttl),
            None => (MISS_MARKER, self.negative_ttl),
        };
        if self.cache.set(&key, value, Some(ttl)).await {
            debug!(
                "[redis] cached {} for {} (TTL: {}s)",
                if resolved.is_some() { "url" } else { "miss marker" },
                short_code,
                ttl.as_secs()
            );
        } else {
            warn!("[redis] failed to cache lookup result for {}", short_code);
        }

        debug!(
            "[redis] fallback done: {} (elapsed_ms: {:.2})",
            short_code,
            started.elapsed().as_secs_f64() * 1000.0
        );
        self.log_stats();

        Ok(resolved)
    }

    fn name(&self) -> &'static str {
        "REDIS"
    }
}
