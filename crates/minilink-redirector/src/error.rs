use minilink_core::StorageError;
use thiserror::Error;

/// Result type for redirect operations.
pub type Result<T> = std::result::Result<T, RedirectorError>;

#[derive(Debug, Clone, Error)]
pub enum RedirectorError {
    #[error("storage error: {0}")]
    Storage(String),
}

impl RedirectorError {
    /// A machine-stable error kind, suitable for status mapping by callers.
    pub fn kind(&self) -> &'static str {
        match self {
            RedirectorError::Storage(_) => "storage",
        }
    }
}

impl From<StorageError> for RedirectorError {
    fn from(value: StorageError) -> Self {
        Self::Storage(value.to_string())
    }
}
