use minilink_core::StorageError;
use thiserror::Error;

/// Result type for shortening operations.
pub type Result<T> = std::result::Result<T, ShortenerError>;

#[derive(Debug, Clone, Error)]
pub enum ShortenerError {
    #[error("original URL must not be empty")]
    EmptyUrl,
    #[error("generated code already exists: {0}")]
    CodeConflict(String),
    #[error("storage error: {0}")]
    Storage(String),
}

impl ShortenerError {
    /// A machine-stable error kind, suitable for status mapping by callers.
    ///
    /// `empty_url` belongs to the 400 class, `code_conflict` and `storage`
    /// to the 500 class.
    pub fn kind(&self) -> &'static str {
        match self {
            ShortenerError::EmptyUrl => "empty_url",
            ShortenerError::CodeConflict(_) => "code_conflict",
            ShortenerError::Storage(_) => "storage",
        }
    }
}

impl From<StorageError> for ShortenerError {
    fn from(value: StorageError) -> Self {
        match value {
            // A conflict at insert time means even the fallback code
            // collided. Reported, never retried here.
            StorageError::Conflict(code) => Self::CodeConflict(code),
            other => Self::Storage(other.to_string()),
        }
    }
}
