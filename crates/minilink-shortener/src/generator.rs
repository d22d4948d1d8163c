//! Deterministic candidate code generation.
//!
//! A candidate is derived by hashing the URL (plus an optional salt),
//! sampling the leading 32 bits of the digest, and base62-encoding the
//! result into a fixed-width code. Truncating the digest to 8 hex
//! characters bounds the collision space to ~4.3e9 pre-salt values; this
//! is an accepted probabilistic trade-off resolved by the retry ladder in
//! [`resolver`](crate::resolver), not a bug. Callers needing stronger
//! guarantees should widen the digest sample or the code length.

use minilink_core::{base62, ShortCode, CODE_LENGTH};
use sha2::{Digest, Sha256};

/// Derives a candidate code from a URL and salt.
///
/// Deterministic: identical `(url, salt)` input always yields the same
/// code. The salt is a collision-breaking perturbation, not a security
/// mechanism. Pure and infallible for any input string.
pub fn candidate(url: &str, salt: &str) -> ShortCode {
    let digest = Sha256::new()
        .chain_update(url.as_bytes())
        .chain_update(salt.as_bytes())
        .finalize();
    // The leading four digest bytes, read big-endian: the same value as
    // parsing the first 8 hex digits of the digest's hex form.
    let seed = u64::from(u32::from_be_bytes([
        digest[0], digest[1], digest[2], digest[3],
    ]));
    code_from_seed(seed)
}

/// Encodes a seed and fits it to the fixed code width: left-pad with the
/// alphabet zero if shorter, keep the rightmost characters if longer.
pub(crate) fn code_from_seed(seed: u64) -> ShortCode {
    let encoded = base62::encode(seed);
    let code = if encoded.len() >= CODE_LENGTH {
        encoded[encoded.len() - CODE_LENGTH..].to_owned()
    } else {
        let mut padded = String::with_capacity(CODE_LENGTH);
        for _ in 0..CODE_LENGTH - encoded.len() {
            padded.push(base62::ZERO_CHAR);
        }
        padded.push_str(&encoded);
        padded
    };
    ShortCode::new_unchecked(code)
}
