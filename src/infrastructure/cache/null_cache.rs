//! Cache implementation that stores nothing.

use super::service::CacheService;
use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

/// A cache that behaves like a backend which is permanently down.
///
/// Every read misses and every write reports failure, which is exactly what
/// [`super::RedisCache`] degrades to during an outage.
pub struct NullCache;

impl NullCache {
    /// Creates a new NullCache instance.
    pub fn new() -> Self {
        debug!("Using NullCache (caching disabled)");
        Self
    }
}

impl Default for NullCache {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CacheService for NullCache {
    async fn get(&self, _key: &str) -> Option<String> {
        None
    }

    async fn set(&self, _key: &str, _value: &str, _ttl: Option<Duration>) -> bool {
        false
    }

    async fn exists(&self, _key: &str) -> bool {
        false
    }

    async fn delete(&self, _key: &str) -> bool {
        false
    }

    async fn ping(&self) -> bool {
        false
    }
}
