//! Review value types.
//!
//! This module contains the types produced by providers:
//! - [`Review`] - a single customer review
//! - [`ReviewList`] - what a provider returns from one fetch
//! - [`ProviderReviewList`] - a fetch result tagged with the provider name

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::CoreError;

// ============================================================================
// Review
// ============================================================================

/// A single customer review.
///
/// Immutable once constructed; produced only by providers. Equality is
/// structural. Timestamps are serialized in RFC 3339 form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    /// Star rating, typically 1.0 - 5.0.
    pub rating: f64,
    /// Review body text.
    pub text: Option<String>,
    /// Listed upsides, if the source separates them out.
    pub pros: Option<String>,
    /// Listed downsides, if the source separates them out.
    pub cons: Option<String>,
    /// One-line summary or title.
    pub summary: Option<String>,
    /// When the review was written.
    pub created_at: DateTime<Utc>,
}

impl Review {
    /// Creates a review with just a rating, text, and timestamp.
    pub fn new(rating: f64, text: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            rating,
            text: Some(text.into()),
            pros: None,
            cons: None,
            summary: None,
            created_at,
        }
    }

    /// Builds a review from an untyped key-value representation.
    ///
    /// The `created_at` field is accepted in its ISO-8601 string form.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` if `rating` is not numeric,
    /// `created_at` does not parse as a timestamp, or a required field is
    /// missing.
    pub fn from_representation(value: &Value) -> Result<Self, CoreError> {
        serde_json::from_value(value.clone())
            .map_err(|e| CoreError::Validation(format!("invalid review representation: {e}")))
    }

    /// Serializes the review to its canonical key-value mapping.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Serialization` if the review cannot be encoded.
    pub fn to_value(&self) -> Result<Value, CoreError> {
        Ok(serde_json::to_value(self)?)
    }

    /// Serializes the review to the text encoding of its canonical mapping.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Serialization` if the review cannot be encoded.
    pub fn to_json(&self) -> Result<String, CoreError> {
        Ok(serde_json::to_string(self)?)
    }
}

// ============================================================================
// Review Lists
// ============================================================================

/// The reviews a provider extracted from one fetch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReviewList {
    /// Extracted reviews, in source order until sorted.
    pub reviews: Vec<Review>,
}

impl ReviewList {
    /// Creates a review list.
    pub fn new(reviews: Vec<Review>) -> Self {
        Self { reviews }
    }

    /// Parses the canonical review document: `{"items": [...]}`.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::ReviewsParse` if `items` is missing, not an
    /// array, or contains an entry that is not a valid review
    /// representation.
    pub fn from_document(document: &Value) -> Result<Self, CoreError> {
        let items = document
            .get("items")
            .ok_or_else(|| CoreError::ReviewsParse("no items in document".to_string()))?;
        let items = items
            .as_array()
            .ok_or_else(|| CoreError::ReviewsParse("items is not a list".to_string()))?;

        let mut reviews = Vec::with_capacity(items.len());
        for item in items {
            let review = Review::from_representation(item)
                .map_err(|e| CoreError::ReviewsParse(format!("invalid review item: {e}")))?;
            reviews.push(review);
        }
        Ok(Self { reviews })
    }

    /// Number of reviews in the list.
    pub fn count(&self) -> usize {
        self.reviews.len()
    }

    /// Returns true if the list holds no reviews.
    pub fn is_empty(&self) -> bool {
        self.reviews.is_empty()
    }

    /// Sorts reviews newest-first by `created_at`.
    pub fn sort_newest_first(&mut self) {
        self.reviews.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    }
}

/// A fetch result: reviews wrapped with the name of the provider that
/// produced them. Created once per fetch call, read-only afterward.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderReviewList {
    /// Name of the provider that produced the reviews.
    pub provider: String,
    /// Extracted reviews, newest first.
    pub reviews: Vec<Review>,
}

impl ProviderReviewList {
    /// Creates a provider-tagged review list.
    pub fn new(provider: impl Into<String>, reviews: Vec<Review>) -> Self {
        Self {
            provider: provider.into(),
            reviews,
        }
    }

    /// Number of reviews in the result.
    pub fn count(&self) -> usize {
        self.reviews.len()
    }
}
