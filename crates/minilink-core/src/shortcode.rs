use crate::base62;
use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Number of characters in every short code.
pub const CODE_LENGTH: usize = 6;

/// A validated short code: exactly [`CODE_LENGTH`] characters, every one a
/// member of the base62 alphabet `[0-9A-Za-z]`.
#[derive(Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ShortCode(String);

impl ShortCode {
    /// Creates a new `ShortCode` after validating the input.
    pub fn new(code: impl Into<String>) -> std::result::Result<Self, CoreError> {
        let code = code.into();
        Self::validate(&code)?;
        Ok(Self(code))
    }

    /// Creates a `ShortCode` without validation.
    ///
    /// Use this only for codes produced by trusted internal sources
    /// (the code generator always emits valid output).
    pub fn new_unchecked(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Returns the short code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Generates the full shortened URL based on the provided base URL.
    pub fn to_url(&self, base_url: &str) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), self.0)
    }

    fn validate(code: &str) -> std::result::Result<(), CoreError> {
        if code.chars().count() != CODE_LENGTH {
            return Err(CoreError::InvalidShortCode(format!(
                "length must be exactly {}, got {}",
                CODE_LENGTH,
                code.chars().count()
            )));
        }

        if let Some(c) = code.chars().find(|c| !base62::in_alphabet(*c)) {
            return Err(CoreError::InvalidShortCode(format!(
                "character '{}' is outside the base62 alphabet",
                c
            )));
        }

        Ok(())
    }
}

impl std::fmt::Debug for ShortCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("ShortCode").field(&self.0).finish()
    }
}

impl Display for ShortCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for ShortCode {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        ShortCode::new(s).map_err(serde::de::Error::custom)
    }
}
