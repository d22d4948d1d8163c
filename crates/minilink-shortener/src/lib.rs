//! Shortening side of the minilink URL shortener.
//!
//! Candidate codes are derived deterministically from the URL by
//! [`generator::candidate`]; the [`resolver::UniquenessResolver`] checks
//! candidates against the store with a bounded retry ladder; and
//! [`ShortenerService`] ties both to a repository to implement the
//! idempotent create operation.

pub mod error;
pub mod generator;
pub mod resolver;
pub mod service;

pub use error::ShortenerError;
pub use resolver::{ResolverSettings, UniquenessResolver};
pub use service::ShortenerService;
