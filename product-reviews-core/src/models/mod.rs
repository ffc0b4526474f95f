//! Domain models for product-reviews.
//!
//! ## Submodules
//!
//! - [`review`] - Review value types (`Review`, `ReviewList`, `ProviderReviewList`)
//! - [`health`] - Health check outcomes (`HealthCheckResult`)

mod health;
mod review;

// Re-export everything at the models level
pub use health::HealthCheckResult;
pub use review::{ProviderReviewList, Review, ReviewList};
