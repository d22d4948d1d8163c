//! Base62 encoding used for short code generation.

/// The code alphabet: digits, then uppercase, then lowercase (indices 0..61).
pub const ALPHABET: &[u8; 62] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// The character at alphabet index zero, used for left-padding fixed-width codes.
pub const ZERO_CHAR: char = '0';

/// Encodes a non-negative integer as base62, most significant digit first.
///
/// `encode(0)` yields `"0"`. Output length grows logarithmically with `n`;
/// the worst case for a `u64` is 11 characters.
pub fn encode(mut n: u64) -> String {
    if n == 0 {
        return ZERO_CHAR.to_string();
    }
    // 62^11 > 2^64, so 11 bytes always suffice.
    let mut buf = [0u8; 11];
    let mut i = buf.len();
    while n > 0 {
        i -= 1;
        buf[i] = ALPHABET[(n % 62) as usize];
        n /= 62;
    }
    String::from_utf8(buf[i..].to_vec()).expect("alphabet is ascii")
}

/// Returns whether `c` is a member of the code alphabet.
///
/// The alphabet is exactly the ASCII alphanumerics, so membership is a
/// single range check.
pub fn in_alphabet(c: char) -> bool {
    c.is_ascii_alphanumeric()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Test-only inverse of `encode`. Codes are opaque in production and
    /// are never decoded back to their integer seed.
    fn decode(s: &str) -> u64 {
        s.bytes().fold(0u64, |acc, b| {
            let idx = ALPHABET
                .iter()
                .position(|&a| a == b)
                .expect("character outside alphabet");
            acc * 62 + idx as u64
        })
    }

    #[test]
    fn alphabet_has_62_unique_chars() {
        let unique: std::collections::HashSet<_> = ALPHABET.iter().collect();
        assert_eq!(unique.len(), 62);
    }

    #[test]
    fn encodes_known_vectors() {
        assert_eq!(encode(0), "0");
        assert_eq!(encode(9), "9");
        assert_eq!(encode(10), "A");
        assert_eq!(encode(35), "Z");
        assert_eq!(encode(36), "a");
        assert_eq!(encode(61), "z");
        assert_eq!(encode(62), "10");
        assert_eq!(encode(63), "11");
        assert_eq!(encode(62 * 62 - 1), "zz");
    }

    #[test]
    fn round_trips() {
        for n in [0, 1, 61, 62, 4095, 1_000_000, u32::MAX as u64, u64::MAX] {
            assert_eq!(decode(&encode(n)), n, "round trip failed for {n}");
        }
    }

    #[test]
    fn output_is_always_in_alphabet() {
        for n in [0u64, 7, 1 << 20, u64::MAX] {
            assert!(encode(n).chars().all(in_alphabet));
        }
    }
}
