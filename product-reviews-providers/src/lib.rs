// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # Product Reviews Providers
//!
//! Provider discovery, dispatch, and the built-in providers for the
//! product-reviews system.
//!
//! The central piece is the [`Registry`]: it merges provider descriptors
//! from three discovery sources (built-in, filesystem plugins, extension
//! entries) into one deduplicated namespace, caches the result, and routes
//! incoming URLs to the first matching provider.
//!
//! ## Usage
//!
//! ```ignore
//! use product_reviews_providers::{Registry, RegistryConfig, ReviewsService};
//!
//! let config = RegistryConfig::new().with_plugins_dir("/etc/product-reviews/plugins");
//! let service = ReviewsService::new(Registry::new(config));
//!
//! let result = service.parse_reviews("https://example.com/reviews/product-1")?;
//! println!("{} reviews from {}", result.count(), result.provider);
//! ```

pub mod builtin;
pub mod descriptor;
pub mod fs_loader;
pub mod health;
pub mod http_json;
pub mod registry;
pub mod service;

// Re-export key types
pub use descriptor::{DiscoverySource, ProviderDescriptor, ProviderFactory};
pub use health::check_health;
pub use http_json::HttpJsonProvider;
pub use registry::{ProviderIter, Registry, RegistryConfig};
pub use service::ReviewsService;

// Re-export built-in providers
pub use builtin::{DummyProvider, JsonFsProvider, dummy_descriptor, jsonfs_descriptor};
