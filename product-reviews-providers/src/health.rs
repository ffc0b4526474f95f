//! Provider health checks.
//!
//! Runs a provider against its configured test URLs (or one explicit URL)
//! and reports whether it fetched and validated reviews. The descriptor's
//! `invalid_urls` are exercised too: each must be rejected with a parse
//! error. Fetch failures become unhealthy results rather than errors, so
//! one broken provider never aborts a health sweep.

use product_reviews_core::{CoreError, HealthCheckResult, Review, ReviewsProvider};

use crate::descriptor::ProviderDescriptor;

/// Field-level checks on a fetched review.
fn validate_review(review: &Review) -> Result<(), String> {
    if !review.rating.is_finite() || review.rating <= 0.0 {
        return Err(format!("rating {} is not a positive number", review.rating));
    }
    Ok(())
}

fn health_for_url(provider: &dyn ReviewsProvider, url: &str) -> HealthCheckResult {
    let list = match provider.get_reviews(url) {
        Ok(list) => list,
        Err(e) => {
            return HealthCheckResult::unhealthy(format!("Error fetching reviews: {e}"), url);
        }
    };

    if list.is_empty() {
        return HealthCheckResult::unhealthy("No reviews found", url);
    }
    if list.reviews.iter().any(|r| validate_review(r).is_err()) {
        return HealthCheckResult::unhealthy("Review validation failed", url);
    }

    HealthCheckResult::healthy(url, list.count())
}

/// A URL listed under `invalid_urls` is healthy only when the provider
/// rejects it with the parse kind.
fn health_for_invalid_url(provider: &dyn ReviewsProvider, url: &str) -> HealthCheckResult {
    match provider.get_reviews(url) {
        Err(CoreError::ReviewsParse(_)) => HealthCheckResult {
            is_healthy: true,
            message: "Rejected with a parse error as expected".to_string(),
            url: url.to_string(),
            reviews_count: 0,
        },
        Ok(list) => HealthCheckResult::unhealthy(
            format!("Expected a parse failure but got {} reviews", list.count()),
            url,
        ),
        Err(e) => {
            HealthCheckResult::unhealthy(format!("Expected a parse failure, got: {e}"), url)
        }
    }
}

/// Health-checks a provider.
///
/// With an explicit `url`, only that URL is evaluated. Otherwise each of
/// the descriptor's `test_urls` must yield valid reviews and each of its
/// `invalid_urls` must fail with a parse error, one result per URL. A
/// descriptor with neither yields a single unhealthy result.
pub fn check_health(descriptor: &ProviderDescriptor, url: Option<&str>) -> Vec<HealthCheckResult> {
    let provider = descriptor.instantiate();

    if let Some(url) = url {
        return vec![health_for_url(provider.as_ref(), url)];
    }
    if descriptor.test_urls.is_empty() && descriptor.invalid_urls.is_empty() {
        return vec![HealthCheckResult::unhealthy("No test URLs configured", "")];
    }

    let mut results: Vec<_> = descriptor
        .test_urls
        .iter()
        .map(|url| health_for_url(provider.as_ref(), url))
        .collect();
    results.extend(
        descriptor
            .invalid_urls
            .iter()
            .map(|url| health_for_invalid_url(provider.as_ref(), url)),
    );
    results
}
