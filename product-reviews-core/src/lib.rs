// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # Product Reviews Core
//!
//! Core types, models, and traits for the product-reviews system.
//!
//! This crate provides the foundational abstractions used across all other
//! product-reviews crates, including:
//!
//! - Domain models (reviews, fetch results, health checks)
//! - Error types
//! - The provider trait
//! - Anchored URL patterns used for dispatch
//!
//! ## Key Types
//!
//! - [`Review`] - A single customer review (rating, text, timestamp)
//! - [`ReviewList`] - What a provider returns from one fetch
//! - [`ProviderReviewList`] - A fetch result tagged with the provider name
//! - [`HealthCheckResult`] - Outcome of a provider health check
//! - [`ReviewsProvider`] - Contract every provider implementation satisfies
//! - [`UrlPattern`] - Anchored regex used to route URLs to providers
//! - [`CoreError`] - Error taxonomy shared across the workspace

pub mod error;
pub mod models;
pub mod pattern;
pub mod traits;

// Re-export error types
pub use error::CoreError;

// Re-export all model types
pub use models::{HealthCheckResult, ProviderReviewList, Review, ReviewList};

// Re-export the URL pattern
pub use pattern::UrlPattern;

// Re-export traits
pub use traits::ReviewsProvider;
