use thiserror::Error;

/// Result type for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;

#[derive(Debug, Clone, Error)]
pub enum CoreError {
    #[error("invalid short code: {0}")]
    InvalidShortCode(String),
}

impl CoreError {
    /// A machine-stable error kind, suitable for status mapping by callers.
    pub fn kind(&self) -> &'static str {
        match self {
            CoreError::InvalidShortCode(_) => "invalid_short_code",
        }
    }
}

#[derive(Debug, Clone, Error)]
pub enum StorageError {
    #[error("short code already exists: {0}")]
    Conflict(String),
    #[error("storage backend unavailable: {0}")]
    Unavailable(String),
    #[error("storage operation timed out: {0}")]
    Timeout(String),
    #[error("stored data is invalid: {0}")]
    InvalidData(String),
    #[error("storage operation failed: {0}")]
    Operation(String),
}

impl StorageError {
    /// A machine-stable error kind, suitable for status mapping by callers.
    pub fn kind(&self) -> &'static str {
        match self {
            StorageError::Conflict(_) => "conflict",
            StorageError::Unavailable(_) => "unavailable",
            StorageError::Timeout(_) => "timeout",
            StorageError::InvalidData(_) => "invalid_data",
            StorageError::Operation(_) => "operation",
        }
    }
}

#[derive(Debug, Clone, Error)]
pub enum CacheError {
    #[error("cache backend unavailable: {0}")]
    Unavailable(String),
    #[error("cache operation failed: {0}")]
    Operation(String),
}
