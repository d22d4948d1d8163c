//! End-to-end flow: shorten a URL, then resolve its code.

use anyhow::Result;
use minilink_core::ReadRepository;
use minilink_redirector::{CachedRepository, MokaUrlCache, RedirectorService, Resolution};
use minilink_shortener::ShortenerService;
use minilink_storage::InMemoryRepository;
use std::sync::Arc;
use std::time::Duration;

const BASE: &str = "https://mini.link";

fn services() -> (
    ShortenerService<Arc<InMemoryRepository>>,
    RedirectorService<Arc<InMemoryRepository>>,
    Arc<InMemoryRepository>,
) {
    let repo = Arc::new(InMemoryRepository::new());
    let shortener = ShortenerService::new(Arc::clone(&repo), BASE);
    let redirector = RedirectorService::new(Arc::clone(&repo));
    (shortener, redirector, repo)
}

#[tokio::test]
async fn shorten_then_resolve_round_trip() -> Result<()> {
    let (shortener, redirector, _repo) = services();

    let record = shortener.shorten("https://example.com/a/b").await?;
    assert_eq!(record.short_url, format!("{BASE}/{}", record.short_code));

    match redirector.resolve(record.short_code.as_str()).await? {
        Resolution::Found(found) => {
            assert_eq!(found.original_url, "https://example.com/a/b");
            assert_eq!(found.short_code, record.short_code);
        }
        other => panic!("expected Found, got {other:?}"),
    }
    Ok(())
}

#[tokio::test]
async fn repeated_shorten_returns_the_same_code() -> Result<()> {
    let (shortener, _redirector, repo) = services();

    let first = shortener.shorten("https://example.com/a/b").await?;
    let second = shortener.shorten("https://example.com/a/b").await?;

    assert_eq!(first.short_code, second.short_code);
    assert_eq!(repo.len(), 1);
    Ok(())
}

#[tokio::test]
async fn never_issued_code_is_not_found() -> Result<()> {
    let (shortener, redirector, _repo) = services();
    shortener.shorten("https://example.com").await?;

    let resolution = redirector.resolve("ZZZZZZ").await?;
    assert_eq!(resolution, Resolution::NotFound);
    Ok(())
}

#[tokio::test]
async fn malformed_code_is_rejected() -> Result<()> {
    let (_shortener, redirector, _repo) = services();

    match redirector.resolve("ab").await? {
        Resolution::InvalidFormat(detail) => assert!(detail.contains("length")),
        other => panic!("expected InvalidFormat, got {other:?}"),
    }
    Ok(())
}

#[tokio::test]
async fn clicks_accumulate_across_resolutions() -> Result<()> {
    let (shortener, redirector, repo) = services();

    let record = shortener.shorten("https://example.com").await?;
    for _ in 0..3 {
        let resolution = redirector.resolve(record.short_code.as_str()).await?;
        assert!(matches!(resolution, Resolution::Found(_)));
    }

    // Click increments are fire-and-forget; poll the store.
    for _ in 0..100 {
        let stored = repo.get(&record.short_code).await?.unwrap();
        if stored.clicks == 3 {
            return Ok(());
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    panic!("clicks never reached 3");
}

#[tokio::test]
async fn cached_repository_serves_the_same_flow() -> Result<()> {
    let repo = Arc::new(InMemoryRepository::new());
    let shortener = ShortenerService::new(Arc::clone(&repo), BASE);
    let redirector = RedirectorService::new(CachedRepository::new(
        Arc::clone(&repo),
        MokaUrlCache::with_ttl(1_000, Duration::from_secs(60)),
    ));

    let record = shortener.shorten("https://example.com/cached").await?;

    // First resolve fills the cache, second is served from it; both must
    // agree with the store.
    for _ in 0..2 {
        match redirector.resolve(record.short_code.as_str()).await? {
            Resolution::Found(found) => {
                assert_eq!(found.original_url, "https://example.com/cached")
            }
            other => panic!("expected Found, got {other:?}"),
        }
    }
    Ok(())
}
