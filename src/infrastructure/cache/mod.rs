//! Caching layer for short code lookups.
//!
//! - [`BoundedLruCache`] - fixed-capacity in-process LRU map
//! - [`CacheService`] - distributed key-value cache contract, with
//!   [`RedisCache`] for production and [`NullCache`] as an always-missing stand-in

mod lru_cache;
mod null_cache;
mod redis_cache;
mod service;

pub use lru_cache::BoundedLruCache;
pub use null_cache::NullCache;
pub use redis_cache::RedisCache;
pub use service::{CacheError, CacheResult, CacheService};

#[cfg(test)]
pub use service::MockCacheService;
