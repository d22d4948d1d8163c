use async_trait::async_trait;
use minilink_core::repository::Result;
use minilink_core::{NewUrl, ReadRepository, Repository, ShortCode, UrlCache, UrlRecord};
use tracing::{trace, warn};

/// A repository decorator that adds read-through caching.
///
/// Reads check the cache first and fall back to the inner repository,
/// populating the cache on a hit from the store. The cache is never the
/// source of truth: existence checks always go to the inner repository,
/// and every cache failure degrades to a plain store access instead of
/// failing the request.
#[derive(Debug, Clone)]
pub struct CachedRepository<R, C> {
    inner: R,
    cache: C,
}

impl<R: Repository, C: UrlCache> CachedRepository<R, C> {
    /// Creates a new cached repository decorator.
    pub fn new(inner: R, cache: C) -> Self {
        Self { inner, cache }
    }

    /// Returns a reference to the inner repository.
    pub fn inner(&self) -> &R {
        &self.inner
    }

    /// Returns a reference to the cache.
    pub fn cache(&self) -> &C {
        &self.cache
    }
}

#[async_trait]
impl<R: Repository, C: UrlCache> ReadRepository for CachedRepository<R, C> {
    async fn get(&self, code: &ShortCode) -> Result<Option<UrlRecord>> {
        match self.cache.get_url(code).await {
            Ok(Some(record)) => {
                trace!(code = %code, "cache hit");
                return Ok(Some(record));
            }
            Ok(None) => {}
            Err(error) => {
                warn!(code = %code, %error, "cache read failed, falling through to store");
            }
        }

        let record = self.inner.get(code).await?;
        if let Some(ref record) = record {
            if let Err(error) = self.cache.set_url(code, record).await {
                warn!(code = %code, %error, "failed to populate cache");
            }
        }
        Ok(record)
    }

    // Existence drives code allocation, so a cache entry is never trusted
    // for it; always ask the store.
    async fn exists(&self, code: &ShortCode) -> Result<bool> {
        self.inner.exists(code).await
    }
}

#[async_trait]
impl<R: Repository, C: UrlCache> Repository for CachedRepository<R, C> {
    async fn insert(&self, new: NewUrl) -> Result<UrlRecord> {
        self.inner.insert(new).await
    }

    async fn find_by_original_url(&self, url: &str) -> Result<Option<UrlRecord>> {
        self.inner.find_by_original_url(url).await
    }

    async fn increment_clicks(&self, code: &ShortCode) -> Result<()> {
        self.inner.increment_clicks(code).await?;
        // Drop the stale cached counter; the next read repopulates.
        if let Err(error) = self.cache.del(code).await {
            warn!(code = %code, %error, "failed to invalidate cache entry");
        }
        Ok(())
    }
}
