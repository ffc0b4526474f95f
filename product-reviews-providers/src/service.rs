//! Service facade over the registry.

use product_reviews_core::{CoreError, ProviderReviewList};
use tracing::debug;

use crate::registry::Registry;

/// Thin orchestration layer: resolve a provider for a URL, fetch, and wrap
/// the result with the provider's name.
///
/// Errors from the registry and providers pass through unchanged; the
/// facade adds no translation of its own.
pub struct ReviewsService {
    registry: Registry,
}

impl ReviewsService {
    /// Creates a service over the given registry.
    pub fn new(registry: Registry) -> Self {
        Self { registry }
    }

    /// Access to the underlying registry.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Fetches and normalizes reviews for a URL.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::ProviderNotFound` when no provider matches the
    /// URL, and propagates whatever the provider's `get_reviews` raised.
    pub fn parse_reviews(&self, url: &str) -> Result<ProviderReviewList, CoreError> {
        let descriptor = self.registry.provider_for_url(url)?;
        let provider = descriptor.instantiate();

        let mut list = provider.get_reviews(url)?;
        list.sort_newest_first();
        debug!(provider = %descriptor.name, count = list.count(), "fetched reviews");

        Ok(ProviderReviewList::new(descriptor.name, list.reviews))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::RegistryConfig;

    fn service() -> ReviewsService {
        ReviewsService::new(Registry::new(RegistryConfig::new()))
    }

    #[test]
    fn test_parse_reviews_wraps_provider_name() {
        let result = service()
            .parse_reviews("https://example.com/reviews/product-1")
            .unwrap();
        assert_eq!(result.provider, "dummy");
        assert_eq!(result.count(), 2);
    }

    #[test]
    fn test_parse_reviews_sorts_newest_first() {
        let result = service()
            .parse_reviews("https://example.com/reviews/product-1")
            .unwrap();
        let timestamps: Vec<_> = result.reviews.iter().map(|r| r.created_at).collect();
        let mut sorted = timestamps.clone();
        sorted.sort_by(|a, b| b.cmp(a));
        assert_eq!(timestamps, sorted);
    }

    #[test]
    fn test_no_match_propagates_provider_not_found() {
        let result = service().parse_reviews("https://no-match.example/x");
        assert!(matches!(result, Err(CoreError::ProviderNotFound(_))));
    }

    #[test]
    fn test_parse_failure_propagates_unwrapped() {
        // jsonfs matches but the file content is not a review document;
        // the ReviewsParse kind must come through untouched.
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, "{ not json").unwrap();
        let result = service().parse_reviews(&format!("jsonfs://{}", path.display()));
        assert!(matches!(result, Err(CoreError::ReviewsParse(_))));
    }

    #[test]
    fn test_invalid_url_error_propagates_unwrapped() {
        let result = service().parse_reviews("jsonfs:///no/such/file.json");
        assert!(matches!(result, Err(CoreError::InvalidUrl(_))));
    }
}
