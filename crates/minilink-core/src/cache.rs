use crate::error::CacheError;
use crate::repository::UrlRecord;
use crate::shortcode::ShortCode;
use async_trait::async_trait;

/// Result type for cache operations.
pub type Result<T> = std::result::Result<T, CacheError>;

/// A cache for URL records.
///
/// This is a purely performance-oriented layer in front of the repository.
/// Implementations own their TTL and eviction policy; a cache is never the
/// source of truth for whether a code exists.
#[async_trait]
pub trait UrlCache: Send + Sync + 'static {
    /// Get a URL record from the cache.
    ///
    /// Returns `Ok(None)` if the key is not cached. An absent key says
    /// nothing about whether the code exists in the store.
    async fn get_url(&self, code: &ShortCode) -> Result<Option<UrlRecord>>;

    /// Store a URL record in the cache.
    async fn set_url(&self, code: &ShortCode, record: &UrlRecord) -> Result<()>;

    /// Remove a URL record from the cache.
    ///
    /// It is not an error if the key does not exist.
    async fn del(&self, code: &ShortCode) -> Result<()>;
}
