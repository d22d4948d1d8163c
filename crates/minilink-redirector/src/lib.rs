//! Redirect side of the minilink URL shortener.
//!
//! [`RedirectorService`] validates a raw code, looks it up in the
//! repository, and reports one of three outcomes ([`Resolution`]):
//! found, not found, or invalid format. A hit triggers a best-effort
//! asynchronous click increment.
//!
//! An optional read-through cache can be layered in front of the
//! repository with [`CachedRepository`] and [`MokaUrlCache`]:
//!
//! ```rust
//! use minilink_redirector::{CachedRepository, MokaUrlCache, RedirectorService, Resolution};
//! use minilink_storage::InMemoryRepository;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let repository = CachedRepository::new(InMemoryRepository::new(), MokaUrlCache::new());
//! let service = RedirectorService::new(repository);
//!
//! if let Resolution::Found(record) = service.resolve("abc123").await? {
//!     println!("redirect to: {}", record.original_url);
//! }
//! # Ok(())
//! # }
//! ```

pub mod cache;
pub mod cached;
pub mod error;
pub mod service;

pub use cache::MokaUrlCache;
pub use cached::CachedRepository;
pub use error::RedirectorError;
pub use service::{RedirectorService, Resolution};
