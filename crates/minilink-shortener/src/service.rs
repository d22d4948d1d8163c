use crate::error::{Result, ShortenerError};
use crate::resolver::UniquenessResolver;
use minilink_core::{NewUrl, Repository, UrlRecord};
use std::sync::Arc;
use tracing::debug;

/// The create operation: idempotent shortening of a URL.
///
/// Wraps a [`Repository`] and a [`UniquenessResolver`]. Shortening an
/// already-known URL returns its existing record unchanged; a new URL gets
/// a resolved code and a fresh record with zero clicks.
///
/// The find-then-insert sequence is deliberately not serialized: two
/// concurrent creations of the same new URL may both pass the lookup and
/// race to insert. The store's uniqueness constraint on the short code is
/// the only hard guarantee; duplicate records per URL remain possible
/// under that race.
#[derive(Debug, Clone)]
pub struct ShortenerService<R> {
    repository: Arc<R>,
    resolver: UniquenessResolver,
    base_url: String,
}

impl<R: Repository> ShortenerService<R> {
    /// Creates a new `ShortenerService` with default resolver settings.
    ///
    /// `base_url` is the public prefix short URLs are built from.
    pub fn new(repository: R, base_url: impl Into<String>) -> Self {
        Self::with_resolver(repository, base_url, UniquenessResolver::default())
    }

    /// Creates a new `ShortenerService` with a custom resolver.
    pub fn with_resolver(
        repository: R,
        base_url: impl Into<String>,
        resolver: UniquenessResolver,
    ) -> Self {
        Self {
            repository: Arc::new(repository),
            resolver,
            base_url: base_url.into(),
        }
    }

    /// Shortens `original_url`, returning the stored record.
    pub async fn shorten(&self, original_url: &str) -> Result<UrlRecord> {
        if original_url.is_empty() {
            return Err(ShortenerError::EmptyUrl);
        }

        if let Some(existing) = self.repository.find_by_original_url(original_url).await? {
            debug!(code = %existing.short_code, "URL already shortened, reusing record");
            return Ok(existing);
        }

        let repository = Arc::clone(&self.repository);
        let code = self
            .resolver
            .resolve(original_url, move |candidate| {
                let repository = Arc::clone(&repository);
                async move { repository.exists(&candidate).await }
            })
            .await?;

        let record = self
            .repository
            .insert(NewUrl {
                original_url: original_url.to_owned(),
                short_url: code.to_url(&self.base_url),
                short_code: code,
            })
            .await?;

        debug!(code = %record.short_code, "created short URL");
        Ok(record)
    }
}
