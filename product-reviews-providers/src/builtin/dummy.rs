//! Dummy provider: fixed in-memory reviews for testing and demos.

use std::sync::Arc;

use chrono::{Duration, Utc};
use product_reviews_core::{CoreError, Review, ReviewList, ReviewsProvider, UrlPattern};

use crate::descriptor::ProviderDescriptor;

const NAME: &str = "dummy";
const URL_PATTERN: &str = r"https?://example\.com/reviews/.*";

/// Returns fixed reviews without touching the network.
#[derive(Debug, Default)]
pub struct DummyProvider;

impl ReviewsProvider for DummyProvider {
    fn name(&self) -> &str {
        NAME
    }

    fn get_reviews(&self, _url: &str) -> Result<ReviewList, CoreError> {
        let now = Utc::now();
        Ok(ReviewList::new(vec![
            Review::new(5.0, "This is a dummy review for testing.", now),
            Review::new(4.0, "Another dummy review.", now - Duration::days(1)),
        ]))
    }
}

/// Builds the dummy provider descriptor.
///
/// # Errors
///
/// Returns `CoreError::Validation` if the bundled URL pattern fails to
/// compile; discovery logs and skips the provider in that case.
pub fn dummy_descriptor() -> Result<ProviderDescriptor, CoreError> {
    Ok(ProviderDescriptor::new(
        NAME,
        "A dummy provider for testing.",
        UrlPattern::new(URL_PATTERN)?,
        Arc::new(|| Box::new(DummyProvider)),
    )
    .with_test_urls(vec![
        "https://example.com/reviews/product-1".to_string(),
        "https://example.com/reviews/product-2".to_string(),
    ]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dummy_returns_two_reviews() {
        let provider = DummyProvider;
        let list = provider
            .get_reviews("https://example.com/reviews/product-1")
            .unwrap();
        assert_eq!(list.count(), 2);
        assert!(list.reviews.iter().all(|r| r.rating >= 4.0));
    }

    #[test]
    fn test_dummy_descriptor_matches_its_test_urls() {
        let desc = dummy_descriptor().unwrap();
        for url in &desc.test_urls {
            assert!(desc.check_url(url), "should match {url}");
        }
        assert!(!desc.check_url("https://shop.example/reviews/1"));
    }
}
