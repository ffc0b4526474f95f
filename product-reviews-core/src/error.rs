//! Core error types for product-reviews.

use thiserror::Error;

/// Core error type for review operations.
///
/// All provider parsing failures funnel through [`CoreError::ReviewsParse`]
/// so callers have a single kind to match on.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Malformed review representation (non-numeric rating, unparseable timestamp).
    #[error("Invalid review representation: {0}")]
    Validation(String),

    /// Lookup by name or by URL found no provider.
    #[error("Provider not found: {0}")]
    ProviderNotFound(String),

    /// A provider could not extract reviews from fetched content.
    #[error("Failed to parse reviews: {0}")]
    ReviewsParse(String),

    /// Malformed or unusable URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// HTTP transport failure surfaced by an HTTP-backed provider.
    #[error("HTTP error: {0}")]
    Http(String),
}
