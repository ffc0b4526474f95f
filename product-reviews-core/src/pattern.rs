//! Anchored URL patterns for provider dispatch.

use regex::Regex;

use crate::error::CoreError;

/// A compiled URL-matching pattern.
///
/// Patterns are anchored at the start of the URL, so `https?://` matches
/// `https://example.com` but not `zzz https://example.com`. Matching is a
/// pure regex test with no side effects.
#[derive(Debug, Clone)]
pub struct UrlPattern {
    pattern: String,
    regex: Regex,
}

impl UrlPattern {
    /// Compiles a pattern, anchoring it at the start of the input.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` if the pattern is not a valid
    /// regular expression.
    pub fn new(pattern: &str) -> Result<Self, CoreError> {
        let regex = Regex::new(&format!(r"\A(?:{pattern})"))
            .map_err(|e| CoreError::Validation(format!("invalid URL pattern {pattern:?}: {e}")))?;
        Ok(Self {
            pattern: pattern.to_string(),
            regex,
        })
    }

    /// Tests the pattern against a URL.
    pub fn matches(&self, url: &str) -> bool {
        self.regex.is_match(url)
    }

    /// Returns the original (unanchored) pattern text.
    pub fn as_str(&self) -> &str {
        &self.pattern
    }
}

impl PartialEq for UrlPattern {
    fn eq(&self, other: &Self) -> bool {
        self.pattern == other.pattern
    }
}
