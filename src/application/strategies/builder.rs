//! Startup-time strategy selection.

use anyhow::{Context, Result};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use super::{AppCacheStrategy, FullScanStrategy, IndexedStrategy, RedisStrategy, UrlStrategy};
use crate::config::Config;
use crate::domain::repositories::MappingRepository;
use crate::infrastructure::cache::RedisCache;

/// The closed set of available strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StrategyKind {
    FullScan,
    Indexed,
    #[default]
    AppCache,
    Redis,
}

impl StrategyKind {
    /// Configuration name of the strategy.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FullScan => "FULLSCAN",
            Self::Indexed => "INDEXED",
            Self::AppCache => "APP_CACHE",
            Self::Redis => "REDIS",
        }
    }

    /// True for the strategies that need a Redis connection.
    pub fn requires_redis(&self) -> bool {
        matches!(self, Self::Redis)
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StrategyKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "FULLSCAN" => Ok(Self::FullScan),
            "INDEXED" => Ok(Self::Indexed),
            "APP_CACHE" => Ok(Self::AppCache),
            "REDIS" => Ok(Self::Redis),
            other => anyhow::bail!(
                "Unknown strategy '{}', expected one of FULLSCAN, INDEXED, APP_CACHE, REDIS",
                other
            ),
        }
    }
}

/// Builds the strategy selected by `config` over `repository`.
///
/// For [`StrategyKind::Redis`] this connects to Redis and fails if the server
/// does not answer a PING.
///
/// # Errors
///
/// Returns an error if Redis is selected but not configured or unreachable.
pub async fn build_strategy(
    config: &Config,
    repository: Arc<dyn MappingRepository>,
) -> Result<Arc<dyn UrlStrategy>> {
    let strategy: Arc<dyn UrlStrategy> = match config.strategy {
        StrategyKind::FullScan => Arc::new(FullScanStrategy::new(repository, &config.base_url)),
        StrategyKind::Indexed => Arc::new(IndexedStrategy::new(repository, &config.base_url)),
        StrategyKind::AppCache => Arc::new(AppCacheStrategy::new(
            IndexedStrategy::new(repository, &config.base_url),
            config.lru_cache_capacity,
        )),
        StrategyKind::Redis => {
            let redis_url = config
                .redis_url
                .as_deref()
                .context("REDIS strategy requires REDIS_URL or REDIS_HOST")?;
            let cache = RedisCache::connect(
                redis_url,
                Duration::from_secs(config.cache_timeout_seconds),
            )
            .await
            .context("Failed to initialize Redis cache")?;

            Arc::new(RedisStrategy::new(
                Arc::new(cache),
                IndexedStrategy::new(repository, &config.base_url),
                Duration::from_secs(config.cache_ttl_seconds),
                Duration::from_secs(config.negative_cache_ttl_seconds),
            ))
        }
    };

    tracing::info!("Using {} strategy", strategy.name());
    Ok(strategy)
}
