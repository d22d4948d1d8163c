use crate::error::Result;
use minilink_core::{Repository, ShortCode, UrlRecord};
use std::sync::Arc;
use tracing::{debug, trace, warn};

/// Outcome of resolving a raw short code.
///
/// The three variants map naturally onto caller status classes:
/// `Found` → redirect, `NotFound` → 404, `InvalidFormat` → 400.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    /// The code maps to a stored record.
    Found(UrlRecord),
    /// A well-formed code that was never issued.
    NotFound,
    /// Input that cannot be a short code, with a format-explanation
    /// detail. The store is never queried for such input.
    InvalidFormat(String),
}

/// Service for handling URL redirects.
///
/// Validates the code format before touching the store, then fetches the
/// record and fires the click increment in the background.
#[derive(Debug, Clone)]
pub struct RedirectorService<R> {
    repository: Arc<R>,
}

impl<R: Repository> RedirectorService<R> {
    /// Creates a new `RedirectorService` with the given repository.
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Resolves raw caller input to a [`Resolution`].
    ///
    /// Malformed input short-circuits to `InvalidFormat` with no store
    /// access. A hit spawns an asynchronous click increment whose failure
    /// is logged, never surfaced.
    pub async fn resolve(&self, raw: &str) -> Result<Resolution> {
        let code = match ShortCode::new(raw) {
            Ok(code) => code,
            Err(err) => {
                trace!(input = raw, "rejected malformed short code");
                return Ok(Resolution::InvalidFormat(err.to_string()));
            }
        };

        match self.repository.get(&code).await? {
            Some(record) => {
                debug!(code = %code, url = %record.original_url, "resolved short code");
                self.spawn_click_increment(code);
                Ok(Resolution::Found(record))
            }
            None => {
                trace!(code = %code, "short code not found");
                Ok(Resolution::NotFound)
            }
        }
    }

    /// Fire-and-forget counter bump. The redirect must never wait on or
    /// fail with the click counter.
    fn spawn_click_increment(&self, code: ShortCode) {
        let repository = Arc::clone(&self.repository);
        tokio::spawn(async move {
            if let Err(error) = repository.increment_clicks(&code).await {
                warn!(code = %code, %error, "failed to increment click counter");
            }
        });
    }
}
