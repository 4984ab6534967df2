#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    Router,
    routing::{get, post},
};
use parking_lot::Mutex;
use shortlink::api::handlers::{create_url_handler, info_handler, redirect_handler};
use shortlink::application::strategies::{
    AppCacheStrategy, FullScanStrategy, IndexedStrategy, RedisStrategy, UrlStrategy,
};
use shortlink::infrastructure::cache::CacheService;
use shortlink::infrastructure::persistence::InMemoryMappingRepository;
use shortlink::state::AppState;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;

pub const BASE_URL: &str = "http://localhost:8000";
pub const TTL: Duration = Duration::from_secs(86_400);
pub const NEGATIVE_TTL: Duration = Duration::from_secs(30);

/// Key-value cache with per-entry expiry on the tokio clock, so tests can
/// move time with `tokio::time::advance`.
#[derive(Default)]
pub struct MemoryCache {
    entries: Mutex<HashMap<String, (String, Option<Instant>)>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw stored value, ignoring expiry.
    pub fn peek(&self, key: &str) -> Option<String> {
        self.entries.lock().get(key).map(|(value, _)| value.clone())
    }

    fn live_value(&self, key: &str) -> Option<String> {
        let mut entries = self.entries.lock();
        match entries.get(key) {
            Some((_, Some(deadline))) if Instant::now() >= *deadline => {
                entries.remove(key);
                None
            }
            Some((value, _)) => Some(value.clone()),
            None => None,
        }
    }
}

#[async_trait]
impl CacheService for MemoryCache {
    async fn get(&self, key: &str) -> Option<String> {
        self.live_value(key)
    }

    async fn set(&self, key: &str, value: &str, ttl: Option<Duration>) -> bool {
        let deadline = ttl.map(|ttl| Instant::now() + ttl);
        self.entries
            .lock()
            .insert(key.to_string(), (value.to_string(), deadline));
        true
    }

    async fn exists(&self, key: &str) -> bool {
        self.live_value(key).is_some()
    }

    async fn delete(&self, key: &str) -> bool {
        self.entries.lock().remove(key).is_some()
    }

    async fn ping(&self) -> bool {
        true
    }
}

pub fn full_scan(repo: &Arc<InMemoryMappingRepository>) -> FullScanStrategy {
    FullScanStrategy::new(repo.clone(), BASE_URL)
}

pub fn indexed(repo: &Arc<InMemoryMappingRepository>) -> IndexedStrategy {
    IndexedStrategy::new(repo.clone(), BASE_URL)
}

pub fn app_cache(repo: &Arc<InMemoryMappingRepository>, capacity: usize) -> AppCacheStrategy {
    AppCacheStrategy::new(indexed(repo), capacity)
}

pub fn redis(repo: &Arc<InMemoryMappingRepository>, cache: Arc<MemoryCache>) -> RedisStrategy {
    RedisStrategy::new(cache, indexed(repo), TTL, NEGATIVE_TTL)
}

/// One instance of every strategy, each over its own store.
pub fn all_strategies() -> Vec<(Arc<InMemoryMappingRepository>, Arc<dyn UrlStrategy>)> {
    let mut strategies: Vec<(Arc<InMemoryMappingRepository>, Arc<dyn UrlStrategy>)> = Vec::new();

    let repo = Arc::new(InMemoryMappingRepository::new());
    strategies.push((repo.clone(), Arc::new(full_scan(&repo))));

    let repo = Arc::new(InMemoryMappingRepository::new());
    strategies.push((repo.clone(), Arc::new(indexed(&repo))));

    let repo = Arc::new(InMemoryMappingRepository::new());
    strategies.push((repo.clone(), Arc::new(app_cache(&repo, 100))));

    let repo = Arc::new(InMemoryMappingRepository::new());
    strategies.push((repo.clone(), Arc::new(redis(&repo, Arc::new(MemoryCache::new())))));

    strategies
}

pub fn create_test_state(strategy: Arc<dyn UrlStrategy>) -> AppState {
    AppState::new(strategy)
}

pub fn create_test_app(state: AppState) -> Router {
    Router::new()
        .route("/", get(info_handler))
        .route("/urls", post(create_url_handler))
        .route("/{short_code}", get(redirect_handler))
        .with_state(state)
}
