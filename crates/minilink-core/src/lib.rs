//! Core types and traits for the minilink URL shortener.
//!
//! This crate provides the shared vocabulary used by both the
//! shortener service and the redirector service: the base62 encoder,
//! the validated [`ShortCode`] type, the persisted [`UrlRecord`],
//! the repository contract, and the optional cache contract.

pub mod base62;
pub mod cache;
pub mod error;
pub mod repository;
pub mod shortcode;

pub use cache::UrlCache;
pub use error::{CacheError, CoreError, StorageError};
pub use repository::{NewUrl, ReadRepository, Repository, UrlRecord};
pub use shortcode::{ShortCode, CODE_LENGTH};
