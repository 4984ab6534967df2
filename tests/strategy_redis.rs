mod common;

use common::MemoryCache;
use shortlink::application::strategies::{MISS_MARKER, UrlStrategy, cache_key};
use shortlink::domain::entities::UrlMapping;
use shortlink::infrastructure::persistence::InMemoryMappingRepository;
use std::sync::Arc;
use std::time::Duration;

#[tokio::test(start_paused = true)]
async fn test_negative_result_is_cached_for_negative_ttl() {
    let repo = Arc::new(InMemoryMappingRepository::new());
    let cache = Arc::new(MemoryCache::new());
    let strategy = common::redis(&repo, cache.clone());

    assert_eq!(strategy.resolve("ghost1").await.unwrap(), None);
    assert_eq!(repo.lookup_count(), 1);
    assert_eq!(cache.peek(&cache_key("ghost1")).as_deref(), Some(MISS_MARKER));

    tokio::time::advance(Duration::from_secs(10)).await;
    assert_eq!(strategy.resolve("ghost1").await.unwrap(), None);
    assert_eq!(repo.lookup_count(), 1);

    let stats = strategy.stats();
    assert_eq!(stats.hits, 1);
    assert_eq!(stats.misses, 1);
}

#[tokio::test(start_paused = true)]
async fn test_code_created_elsewhere_visible_after_negative_ttl() {
    let repo = Arc::new(InMemoryMappingRepository::new());
    let cache = Arc::new(MemoryCache::new());
    let strategy = common::redis(&repo, cache.clone());

    assert_eq!(strategy.resolve("late01").await.unwrap(), None);

    // Another node writes straight to the store.
    common::indexed(&repo)
        .create_short_url("https://example.com/late", Some("late01"))
        .await
        .unwrap();

    tokio::time::advance(Duration::from_secs(5)).await;
    assert_eq!(strategy.resolve("late01").await.unwrap(), None);

    tokio::time::advance(common::NEGATIVE_TTL).await;
    let resolved = strategy.resolve("late01").await.unwrap();
    assert_eq!(resolved.as_deref(), Some("https://example.com/late"));
    assert_eq!(
        cache.peek(&cache_key("late01")).as_deref(),
        Some("https://example.com/late")
    );
}

#[tokio::test(start_paused = true)]
async fn test_create_through_strategy_replaces_miss_marker() {
    let repo = Arc::new(InMemoryMappingRepository::new());
    let cache = Arc::new(MemoryCache::new());
    let strategy = common::redis(&repo, cache.clone());

    assert_eq!(strategy.resolve("fresh1").await.unwrap(), None);

    strategy
        .create_short_url("https://example.com/fresh", Some("fresh1"))
        .await
        .unwrap();

    let resolved = strategy.resolve("fresh1").await.unwrap();
    assert_eq!(resolved.as_deref(), Some("https://example.com/fresh"));
    assert_eq!(strategy.stats().fallbacks, 1);
}

#[tokio::test(start_paused = true)]
async fn test_positive_entries_expire_after_ttl() {
    let repo = Arc::new(InMemoryMappingRepository::with_mappings([UrlMapping::new(
        "abc123",
        "https://example.com",
    )]));
    let cache = Arc::new(MemoryCache::new());
    let strategy = common::redis(&repo, cache.clone());

    strategy.resolve("abc123").await.unwrap();
    strategy.resolve("abc123").await.unwrap();
    assert_eq!(repo.lookup_count(), 1);

    tokio::time::advance(common::TTL + Duration::from_secs(1)).await;
    let resolved = strategy.resolve("abc123").await.unwrap();

    assert_eq!(resolved.as_deref(), Some("https://example.com"));
    assert_eq!(repo.lookup_count(), 2);
}

#[tokio::test]
async fn test_hit_rate_reflects_traffic() {
    let repo = Arc::new(InMemoryMappingRepository::new());
    let strategy = common::redis(&repo, Arc::new(MemoryCache::new()));

    let created = strategy
        .create_short_url("https://example.com", None)
        .await
        .unwrap();
    for _ in 0..3 {
        strategy.resolve(&created.short_code).await.unwrap();
    }
    strategy.resolve("ghost1").await.unwrap();

    let stats = strategy.stats();
    assert_eq!(stats.hits, 3);
    assert_eq!(stats.misses, 1);
    assert!((stats.hit_rate() - 75.0).abs() < f64::EPSILON);
}
