//! Trait definitions for product-reviews.
//!
//! This module defines the contract that provider implementations must satisfy.

use crate::error::CoreError;
use crate::models::ReviewList;

/// Contract for a review provider instance.
///
/// Implementors are responsible for:
/// - Fetching the target content for a matching URL (at most one blocking
///   fetch per call)
/// - Parsing and normalizing the content into [`Review`](crate::Review) values
///
/// Construction must be cheap and side-effect free; instances are created
/// lazily per call and never cached. All parsing failures must surface as
/// [`CoreError::ReviewsParse`] so callers have one kind to match on.
pub trait ReviewsProvider: Send + Sync {
    /// Returns the unique name of this provider.
    fn name(&self) -> &str;

    /// Fetches and parses the reviews behind `url`.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::ReviewsParse` when the target content cannot be
    /// parsed into reviews, `CoreError::InvalidUrl` for unusable URLs, and
    /// `CoreError::Http` for transport failures.
    fn get_reviews(&self, url: &str) -> Result<ReviewList, CoreError>;
}
