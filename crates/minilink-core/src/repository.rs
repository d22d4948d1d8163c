use crate::error::StorageError;
use crate::shortcode::ShortCode;
use async_trait::async_trait;
use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, StorageError>;

/// A stored URL record.
///
/// Records are created once and never deleted or recoded; the only
/// mutation after creation is the click counter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UrlRecord {
    /// The original URL exactly as submitted, no normalization applied.
    pub original_url: String,
    /// The unique code assigned to this URL. Immutable after creation.
    pub short_code: ShortCode,
    /// Derived convenience field: `base_url + "/" + short_code`.
    pub short_url: String,
    /// Successful resolutions of this code. Monotonically non-decreasing;
    /// not part of the uniqueness or correctness contract.
    pub clicks: u64,
    /// Set by the store on insert.
    pub created_at: Timestamp,
    /// Set by the store on insert and on each mutation.
    pub updated_at: Timestamp,
}

/// Write model for a new mapping.
///
/// The store stamps `created_at`/`updated_at` and starts `clicks` at zero.
#[derive(Debug, Clone)]
pub struct NewUrl {
    pub original_url: String,
    pub short_code: ShortCode,
    pub short_url: String,
}

/// A read-only view of a repository.
///
/// This trait provides only the read operations from [`Repository`],
/// allowing the redirect path to work against read-only or cached access.
#[async_trait]
pub trait ReadRepository: Send + Sync + 'static {
    /// Retrieves the URL record for a given short code.
    /// Returns `None` if the code does not exist.
    async fn get(&self, code: &ShortCode) -> Result<Option<UrlRecord>>;

    /// Checks whether a short code has already been issued.
    async fn exists(&self, code: &ShortCode) -> Result<bool>;
}

#[async_trait]
pub trait Repository: ReadRepository {
    /// Inserts a new URL record and returns it with store-assigned fields.
    ///
    /// Fails with [`StorageError::Conflict`] if the code is already taken.
    /// This constraint is the final word on code uniqueness, independent
    /// of any retry logic performed by callers.
    async fn insert(&self, new: NewUrl) -> Result<UrlRecord>;

    /// Finds the record for an exact original URL string, if any.
    ///
    /// Used for idempotent re-shortening; URL uniqueness is advisory and
    /// not enforced by the store.
    async fn find_by_original_url(&self, url: &str) -> Result<Option<UrlRecord>>;

    /// Bumps the click counter for a code. A missing code is not an error.
    async fn increment_clicks(&self, code: &ShortCode) -> Result<()>;
}

// Shared handles delegate, so a repository can be handed to a service
// while the caller keeps access to the same underlying store.
#[async_trait]
impl<T: ReadRepository> ReadRepository for std::sync::Arc<T> {
    async fn get(&self, code: &ShortCode) -> Result<Option<UrlRecord>> {
        self.as_ref().get(code).await
    }

    async fn exists(&self, code: &ShortCode) -> Result<bool> {
        self.as_ref().exists(code).await
    }
}

#[async_trait]
impl<T: Repository> Repository for std::sync::Arc<T> {
    async fn insert(&self, new: NewUrl) -> Result<UrlRecord> {
        self.as_ref().insert(new).await
    }

    async fn find_by_original_url(&self, url: &str) -> Result<Option<UrlRecord>> {
        self.as_ref().find_by_original_url(url).await
    }

    async fn increment_clicks(&self, code: &ShortCode) -> Result<()> {
        self.as_ref().increment_clicks(code).await
    }
}
