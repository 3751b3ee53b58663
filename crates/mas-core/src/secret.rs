//! Redacting wrapper for the LLM API credential.

use crate::CoreError;

/// An LLM API key held only in memory for the duration of one request.
///
/// `Debug` and `Display` never print the value.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Wraps a raw key, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::MissingApiKey`] when the key is empty or blank.
    pub fn new(raw: &str) -> Result<Self, CoreError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(CoreError::MissingApiKey);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Builds a key from an optional form field or flag.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::MissingApiKey`] when `raw` is `None` or blank.
    pub fn from_optional(raw: Option<&str>) -> Result<Self, CoreError> {
        raw.map_or(Err(CoreError::MissingApiKey), Self::new)
    }

    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ApiKey([redacted])")
    }
}

impl std::fmt::Display for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("[redacted]")
    }
}
