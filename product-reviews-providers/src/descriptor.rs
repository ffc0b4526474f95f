//! Provider descriptor system.
//!
//! A descriptor contains all the static configuration for a provider:
//! - Identity (name, description)
//! - The anchored URL pattern used for dispatch
//! - Test URLs consumed by the health-check harness
//! - A factory that builds the provider instance on demand
//!
//! Descriptors replace runtime reflection: every discovery source hands the
//! registry fully-formed descriptors instead of types to introspect.

use std::fmt;
use std::sync::Arc;

use product_reviews_core::{ReviewsProvider, UrlPattern};

// ============================================================================
// Provider Descriptor
// ============================================================================

/// Factory that instantiates a provider. Must be cheap and side-effect
/// free; the registry calls it per lookup and never caches the instance.
pub type ProviderFactory = Arc<dyn Fn() -> Box<dyn ReviewsProvider> + Send + Sync>;

/// Which discovery source produced a descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DiscoverySource {
    /// Bundled with the core.
    BuiltIn,
    /// Loaded from a plugin definition file in the plugins directory.
    Filesystem,
    /// Registered by the embedding application.
    Extension,
}

impl fmt::Display for DiscoverySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BuiltIn => write!(f, "built-in"),
            Self::Filesystem => write!(f, "filesystem"),
            Self::Extension => write!(f, "extension"),
        }
    }
}

/// Complete static configuration for one provider.
#[derive(Clone)]
pub struct ProviderDescriptor {
    /// Unique provider name; the registry key.
    pub name: String,
    /// Human-readable description.
    pub description: String,
    /// Anchored pattern used for URL dispatch.
    pub url_pattern: UrlPattern,
    /// URLs expected to yield reviews; used only by the health-check
    /// harness, not part of the dispatch contract.
    pub test_urls: Vec<String>,
    /// URLs expected to fail parsing; used only by the test harness.
    pub invalid_urls: Vec<String>,
    /// Which discovery source produced this descriptor.
    pub source: DiscoverySource,
    factory: ProviderFactory,
}

impl ProviderDescriptor {
    /// Creates a descriptor. The registry rejects descriptors with an
    /// empty name at registration time.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        url_pattern: UrlPattern,
        factory: ProviderFactory,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            url_pattern,
            test_urls: Vec::new(),
            invalid_urls: Vec::new(),
            source: DiscoverySource::BuiltIn,
            factory,
        }
    }

    /// Sets the health-check test URLs.
    #[must_use]
    pub fn with_test_urls(mut self, urls: Vec<String>) -> Self {
        self.test_urls = urls;
        self
    }

    /// Sets the URLs expected to fail parsing.
    #[must_use]
    pub fn with_invalid_urls(mut self, urls: Vec<String>) -> Self {
        self.invalid_urls = urls;
        self
    }

    /// Tags the descriptor with its discovery source.
    #[must_use]
    pub fn with_source(mut self, source: DiscoverySource) -> Self {
        self.source = source;
        self
    }

    /// Tests the URL pattern against a URL. Pure; independent of
    /// `get_reviews`.
    pub fn check_url(&self, url: &str) -> bool {
        self.url_pattern.matches(url)
    }

    /// Builds a fresh provider instance.
    pub fn instantiate(&self) -> Box<dyn ReviewsProvider> {
        (self.factory)()
    }
}

impl fmt::Debug for ProviderDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderDescriptor")
            .field("name", &self.name)
            .field("url_pattern", &self.url_pattern.as_str())
            .field("source", &self.source)
            .finish_non_exhaustive()
    }
}
