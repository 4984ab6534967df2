mod common;

use shortlink::application::strategies::UrlStrategy;
use shortlink::error::AppError;
use shortlink::infrastructure::persistence::InMemoryMappingRepository;
use std::sync::Arc;

#[tokio::test]
async fn test_created_codes_resolve_for_every_strategy() {
    for (_repo, strategy) in common::all_strategies() {
        let created = strategy
            .create_short_url("https://example.com/a?b=c", None)
            .await
            .unwrap();

        assert_eq!(created.short_code.len(), 6, "{}", strategy.name());
        assert!(created.short_code.chars().all(|c| c.is_ascii_alphanumeric()));
        assert_eq!(
            created.short_url,
            format!("{}/{}", common::BASE_URL, created.short_code)
        );

        let resolved = strategy.resolve(&created.short_code).await.unwrap();
        assert_eq!(
            resolved.as_deref(),
            Some("https://example.com/a?b=c"),
            "{}",
            strategy.name()
        );
    }
}

#[tokio::test]
async fn test_custom_code_round_trip_for_every_strategy() {
    for (repo, strategy) in common::all_strategies() {
        let created = strategy
            .create_short_url("https://example.com", Some("promo"))
            .await
            .unwrap();
        assert_eq!(created.short_code, "promo");

        let duplicate = strategy
            .create_short_url("https://other.com", Some("promo"))
            .await;
        assert!(
            matches!(duplicate, Err(AppError::Conflict { .. })),
            "{}",
            strategy.name()
        );

        let resolved = strategy.resolve("promo").await.unwrap();
        assert_eq!(resolved.as_deref(), Some("https://example.com"));
        assert_eq!(repo.len(), 1);
    }
}

#[tokio::test]
async fn test_unknown_code_resolves_to_none_for_every_strategy() {
    for (_repo, strategy) in common::all_strategies() {
        assert_eq!(strategy.resolve("nope00").await.unwrap(), None, "{}", strategy.name());
    }
}

#[tokio::test]
async fn test_fresh_instance_sees_previous_writes() {
    let repo = Arc::new(InMemoryMappingRepository::new());

    let writer = common::app_cache(&repo, 100);
    let mut codes = Vec::new();
    for i in 0..20 {
        let created = writer
            .create_short_url(&format!("https://example.com/{i}"), None)
            .await
            .unwrap();
        codes.push(created.short_code);
    }

    let readers: Vec<Box<dyn UrlStrategy>> = vec![
        Box::new(common::full_scan(&repo)),
        Box::new(common::indexed(&repo)),
        Box::new(common::app_cache(&repo, 100)),
        Box::new(common::redis(&repo, Arc::new(common::MemoryCache::new()))),
    ];

    for reader in readers {
        for (i, code) in codes.iter().enumerate() {
            let resolved = reader.resolve(code).await.unwrap();
            assert_eq!(
                resolved,
                Some(format!("https://example.com/{i}")),
                "{}",
                reader.name()
            );
        }
    }
}

#[tokio::test]
async fn test_app_cache_miss_goes_to_store_once() {
    let repo = Arc::new(InMemoryMappingRepository::new());
    let writer = common::indexed(&repo);
    let created = writer
        .create_short_url("https://example.com", None)
        .await
        .unwrap();

    let strategy = common::app_cache(&repo, 100);
    let before = repo.lookup_count();

    for _ in 0..5 {
        let resolved = strategy.resolve(&created.short_code).await.unwrap();
        assert_eq!(resolved.as_deref(), Some("https://example.com"));
    }

    assert_eq!(repo.lookup_count(), before + 1);
}

#[tokio::test]
async fn test_full_scan_reads_whole_table_per_resolve() {
    let repo = Arc::new(InMemoryMappingRepository::new());
    let strategy = common::full_scan(&repo);
    let created = strategy
        .create_short_url("https://example.com", None)
        .await
        .unwrap();

    let scans = repo.scan_count();
    strategy.resolve(&created.short_code).await.unwrap();
    strategy.resolve(&created.short_code).await.unwrap();

    assert_eq!(repo.scan_count(), scans + 2);
    assert_eq!(repo.lookup_count(), 0);
}

#[tokio::test]
async fn test_store_outage_surfaces_as_internal_error() {
    for (repo, strategy) in common::all_strategies() {
        repo.set_unavailable(true);

        let created = strategy.create_short_url("https://example.com", None).await;
        assert!(
            matches!(created, Err(AppError::Internal { .. })),
            "{}",
            strategy.name()
        );

        let resolved = strategy.resolve("abc123").await;
        assert!(matches!(resolved, Err(AppError::Internal { .. })));
    }
}
