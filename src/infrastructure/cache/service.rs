//! Distributed cache trait and error types.

use async_trait::async_trait;
use std::time::Duration;

/// Errors raised while establishing a cache connection.
///
/// Runtime operations never return these; see [`CacheService`].
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    #[error("Cache connection error: {0}")]
    ConnectionError(String),
}

/// Result type for cache construction.
pub type CacheResult<T> = Result<T, CacheError>;

/// Networked key-value cache with per-entry expiry.
///
/// Values are opaque strings. Every operation is a single round trip and
/// degrades instead of failing: transport or protocol errors are logged by the
/// implementation and reported as a miss (`None`) or `false`. A cache outage
/// can only make callers slower, never unavailable.
///
/// # Implementations
///
/// - [`crate::infrastructure::cache::RedisCache`] - Redis-backed cache
/// - [`crate::infrastructure::cache::NullCache`] - cache that stores nothing
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CacheService: Send + Sync {
    /// Returns the value stored under `key`, or `None` on miss or error.
    async fn get(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`.
    ///
    /// With `ttl` the entry expires server-side after that duration; without
    /// it the entry never expires. Returns `false` if the write failed.
    async fn set(&self, key: &str, value: &str, ttl: Option<Duration>) -> bool;

    /// Returns true if `key` is present.
    async fn exists(&self, key: &str) -> bool;

    /// Removes `key`. Returns true if an entry was deleted.
    async fn delete(&self, key: &str) -> bool;

    /// Checks that the backend answers.
    async fn ping(&self) -> bool;
}
