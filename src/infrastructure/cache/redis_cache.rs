//! Redis-backed distributed cache client.

use super::service::{CacheError, CacheResult, CacheService};
use async_trait::async_trait;
use redis::{AsyncCommands, Client, RedisResult, aio::ConnectionManager};
use std::future::Future;
use std::time::Duration;
use tracing::{debug, error, info};

/// Redis client implementing [`CacheService`].
///
/// Uses a `ConnectionManager` so the underlying connection is shared and
/// re-established transparently. Every round trip is bounded by `op_timeout`;
/// errors and timeouts are logged and reported as a miss or `false`.
pub struct RedisCache {
    client: ConnectionManager,
    op_timeout: Duration,
}

impl RedisCache {
    /// Connects to Redis and validates the connection with a PING.
    ///
    /// # Arguments
    ///
    /// - `redis_url` - Redis connection string (e.g., `"redis://localhost:6379/0"`)
    /// - `op_timeout` - bound applied to the connect attempt and to every later operation
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::ConnectionError`] if the URL is invalid, the connection cannot
    /// be established in time, or the PING health check fails.
    pub async fn connect(redis_url: &str, op_timeout: Duration) -> CacheResult<Self> {
        info!("Connecting to Redis at {}", redis_url);

        let client = Client::open(redis_url).map_err(|e| {
            CacheError::ConnectionError(format!("Failed to create Redis client: {}", e))
        })?;

        let manager = tokio::time::timeout(op_timeout, ConnectionManager::new(client))
            .await
            .map_err(|_| {
                CacheError::ConnectionError(format!(
                    "Timed out connecting to Redis after {}s",
                    op_timeout.as_secs()
                ))
            })?
            .map_err(|e| {
                CacheError::ConnectionError(format!("Failed to connect to Redis: {}", e))
            })?;

        let mut test_conn = manager.clone();
        tokio::time::timeout(op_timeout, test_conn.ping::<()>())
            .await
            .map_err(|_| CacheError::ConnectionError("Redis PING timed out".to_string()))?
            .map_err(|e| CacheError::ConnectionError(format!("Redis PING failed: {}", e)))?;

        info!("✓ Connected to Redis");

        Ok(Self {
            client: manager,
            op_timeout,
        })
    }

    async fn run<T>(
        &self,
        op: &str,
        key: &str,
        fut: impl Future<Output = RedisResult<T>>,
    ) -> Option<T> {
        bounded(self.op_timeout, op, key, fut).await
    }
}

/// Runs one Redis round trip under `op_timeout`, logging errors and timeouts.
async fn bounded<T>(
    op_timeout: Duration,
    op: &str,
    key: &str,
    fut: impl Future<Output = RedisResult<T>>,
) -> Option<T> {
    match tokio::time::timeout(op_timeout, fut).await {
        Ok(Ok(value)) => Some(value),
        Ok(Err(e)) => {
            error!("Redis {} error for {}: {}", op, key, e);
            None
        }
        Err(_) => {
            error!(
                "Redis {} timed out for {} after {}s",
                op,
                key,
                op_timeout.as_secs()
            );
            None
        }
    }
}

#[async_trait]
impl CacheService for RedisCache {
    async fn get(&self, key: &str) -> Option<String> {
        let mut conn = self.client.clone();
        let value = self
            .run("GET", key, conn.get::<_, Option<String>>(key))
            .await
            .flatten();

        match &value {
            Some(_) => debug!("Redis GET hit: {}", key),
            None => debug!("Redis GET miss: {}", key),
        }
        value
    }

    async fn set(&self, key: &str, value: &str, ttl: Option<Duration>) -> bool {
        let mut conn = self.client.clone();

        let stored = match ttl {
            Some(ttl) => {
                let seconds = ttl.as_secs().max(1);
                self.run("SETEX", key, conn.set_ex::<_, _, ()>(key, value, seconds))
                    .await
                    .inspect(|_| debug!("Redis SETEX {} (TTL: {}s)", key, seconds))
            }
            None => self
                .run("SET", key, conn.set::<_, _, ()>(key, value))
                .await
                .inspect(|_| debug!("Redis SET {}", key)),
        };

        stored.is_some()
    }

    async fn exists(&self, key: &str) -> bool {
        let mut conn = self.client.clone();
        let found = self
            .run("EXISTS", key, conn.exists::<_, bool>(key))
            .await
            .unwrap_or(false);

        debug!("Redis EXISTS {}: {}", key, found);
        found
    }

    async fn delete(&self, key: &str) -> bool {
        let mut conn = self.client.clone();
        let deleted = self
            .run("DEL", key, conn.del::<_, i32>(key))
            .await
            .unwrap_or(0);

        debug!("Redis DEL {}: {}", key, deleted > 0);
        deleted > 0
    }

    async fn ping(&self) -> bool {
        let mut conn = self.client.clone();
        self.run("PING", "-", conn.ping::<()>()).await.is_some()
    }
}
