//! Collision resolution against the store.

use crate::generator;
use jiff::Timestamp;
use minilink_core::{ShortCode, StorageError};
use rand::distr::Alphanumeric;
use rand::Rng;
use std::future::Future;
use tracing::{trace, warn};
use typed_builder::TypedBuilder;

/// Tunables for the collision retry ladder.
#[derive(Debug, Clone, TypedBuilder)]
pub struct ResolverSettings {
    /// Total candidate attempts (the first one unsalted) before the
    /// timestamp fallback kicks in. Bounds the number of existence checks
    /// per shorten request.
    #[builder(default = 10)]
    max_attempts: u32,
    /// Length of the random salt drawn for each retry. Six case-sensitive
    /// alphanumeric characters give 62^6 distinct salts, ample entropy for
    /// a collision-breaking perturbation.
    #[builder(default = 6)]
    salt_length: usize,
}

impl Default for ResolverSettings {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// Produces a short code that is absent from the store at decision time.
///
/// The unsalted deterministic candidate is tried first, then up to
/// `max_attempts - 1` salted candidates, each checked against the supplied
/// existence predicate. If every candidate collides, a final code is
/// derived from the wall clock and returned without a further check; the
/// store's uniqueness constraint has the last word on that one. This
/// trades a residual, theoretically non-zero collision risk for a hard
/// bound on store round-trips.
#[derive(Debug, Clone, Default)]
pub struct UniquenessResolver {
    settings: ResolverSettings,
}

impl UniquenessResolver {
    pub fn new(settings: ResolverSettings) -> Self {
        Self { settings }
    }

    /// Resolves a unique code for `url`.
    ///
    /// `exists` is the store's existence predicate; its errors (including
    /// caller-imposed timeouts) propagate as store failures and are never
    /// treated as non-existence. Barring store failures this never errors:
    /// it always returns some well-formed code.
    pub async fn resolve<F, Fut>(
        &self,
        url: &str,
        exists: F,
    ) -> std::result::Result<ShortCode, StorageError>
    where
        F: Fn(ShortCode) -> Fut,
        Fut: Future<Output = std::result::Result<bool, StorageError>>,
    {
        for attempt in 0..self.settings.max_attempts {
            let salt = if attempt == 0 {
                String::new()
            } else {
                random_salt(self.settings.salt_length)
            };
            let candidate = generator::candidate(url, &salt);

            if !exists(candidate.clone()).await? {
                trace!(attempt, code = %candidate, "candidate accepted");
                return Ok(candidate);
            }
            trace!(attempt, code = %candidate, "candidate collided");
        }

        let fallback = fallback_code();
        warn!(
            attempts = self.settings.max_attempts,
            code = %fallback,
            "retry budget exhausted, falling back to timestamp-derived code"
        );
        Ok(fallback)
    }
}

fn random_salt(length: usize) -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}

/// Final candidate when every hashed one collided: milliseconds since the
/// epoch through the encoder, fitted to the code width. Deliberately not
/// checked for existence.
fn fallback_code() -> ShortCode {
    let millis = Timestamp::now().as_millisecond().max(0) as u64;
    generator::code_from_seed(millis)
}

#[cfg(test)]
mod tests {
    use super::*;
    use minilink_core::CODE_LENGTH;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::{Arc, Mutex};

    #[tokio::test]
    async fn first_candidate_wins_when_free() {
        let resolver = UniquenessResolver::default();
        let checks = Arc::new(AtomicU32::new(0));

        let counted = Arc::clone(&checks);
        let code = resolver
            .resolve("https://example.com", move |_code| {
                let counted = Arc::clone(&counted);
                async move {
                    counted.fetch_add(1, Ordering::SeqCst);
                    Ok(false)
                }
            })
            .await
            .unwrap();

        assert_eq!(checks.load(Ordering::SeqCst), 1);
        assert_eq!(code, generator::candidate("https://example.com", ""));
    }

    #[tokio::test]
    async fn single_collision_switches_to_a_salted_candidate() {
        let resolver = UniquenessResolver::default();
        let seen: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));

        let recorded = Arc::clone(&seen);
        let code = resolver
            .resolve("https://example.com", move |code| {
                let recorded = Arc::clone(&recorded);
                async move {
                    let mut seen = recorded.lock().unwrap();
                    seen.push(code.as_str().to_owned());
                    // Only the first (unsalted) candidate collides.
                    Ok(seen.len() == 1)
                }
            })
            .await
            .unwrap();

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0], generator::candidate("https://example.com", "").as_str());
        assert_ne!(seen[1], seen[0]);
        assert_eq!(code.as_str(), seen[1]);
    }

    #[tokio::test]
    async fn exhausted_retries_fall_back_without_a_final_check() {
        let resolver = UniquenessResolver::default();
        let checks = Arc::new(AtomicU32::new(0));

        let counted = Arc::clone(&checks);
        let code = resolver
            .resolve("https://example.com", move |_code| {
                let counted = Arc::clone(&counted);
                async move {
                    counted.fetch_add(1, Ordering::SeqCst);
                    // Everything collides, even what the fallback would produce.
                    Ok(true)
                }
            })
            .await
            .unwrap();

        // Exactly the retry budget, and no check for the fallback code.
        assert_eq!(checks.load(Ordering::SeqCst), 10);
        assert_eq!(code.as_str().len(), CODE_LENGTH);
        assert!(ShortCode::new(code.as_str()).is_ok());
    }

    #[tokio::test]
    async fn predicate_errors_propagate() {
        let resolver = UniquenessResolver::default();

        let err = resolver
            .resolve("https://example.com", |_code| async {
                Err(StorageError::Timeout("existence check".to_string()))
            })
            .await
            .unwrap_err();

        assert!(matches!(err, StorageError::Timeout(_)));
    }

    #[tokio::test]
    async fn custom_retry_budget_is_honored() {
        let resolver = UniquenessResolver::new(ResolverSettings::builder().max_attempts(3).build());
        let checks = Arc::new(AtomicU32::new(0));

        let counted = Arc::clone(&checks);
        resolver
            .resolve("https://example.com", move |_code| {
                let counted = Arc::clone(&counted);
                async move {
                    counted.fetch_add(1, Ordering::SeqCst);
                    Ok(true)
                }
            })
            .await
            .unwrap();

        assert_eq!(checks.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn random_salt_shape() {
        let salt = random_salt(6);
        assert_eq!(salt.len(), 6);
        assert!(salt.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn fallback_is_well_formed() {
        let code = fallback_code();
        assert!(ShortCode::new(code.as_str()).is_ok());
    }
}
