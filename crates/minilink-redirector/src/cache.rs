use async_trait::async_trait;
use minilink_core::cache::Result;
use minilink_core::{ShortCode, UrlCache, UrlRecord};
use moka::future::Cache;
use std::time::Duration;

/// An in-memory [`UrlCache`] implementation using Moka.
///
/// Stores URL records in a concurrent in-memory cache. TTL and eviction
/// are fixed at construction time; the cache is a performance layer only
/// and is never consulted as the source of truth.
#[derive(Debug, Clone)]
pub struct MokaUrlCache {
    cache: Cache<String, UrlRecord>,
}

impl MokaUrlCache {
    /// Creates a cache with a default capacity of 10,000 entries and no TTL.
    pub fn new() -> Self {
        Self {
            cache: Cache::builder().max_capacity(10_000).build(),
        }
    }

    /// Creates a cache with a custom maximum capacity.
    pub fn with_capacity(max_capacity: u64) -> Self {
        Self {
            cache: Cache::builder().max_capacity(max_capacity).build(),
        }
    }

    /// Creates a cache whose entries expire `ttl` after insertion.
    pub fn with_ttl(max_capacity: u64, ttl: Duration) -> Self {
        Self {
            cache: Cache::builder()
                .max_capacity(max_capacity)
                .time_to_live(ttl)
                .build(),
        }
    }
}

impl Default for MokaUrlCache {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UrlCache for MokaUrlCache {
    async fn get_url(&self, code: &ShortCode) -> Result<Option<UrlRecord>> {
        Ok(self.cache.get(code.as_str()).await)
    }

    async fn set_url(&self, code: &ShortCode, record: &UrlRecord) -> Result<()> {
        self.cache
            .insert(code.as_str().to_owned(), record.clone())
            .await;
        Ok(())
    }

    async fn del(&self, code: &ShortCode) -> Result<()> {
        self.cache.invalidate(code.as_str()).await;
        Ok(())
    }
}
