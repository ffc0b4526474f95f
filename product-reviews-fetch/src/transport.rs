//! HTTP transport abstraction.
//!
//! Providers fetch through a [`HttpTransport`] so that tests can swap the
//! network for recorded interactions (see [`crate::replay`]).

use std::sync::{Arc, OnceLock};
use std::time::Duration;

use reqwest::blocking::Client;
use tracing::debug;
use url::Url;

use crate::error::HttpError;

/// Default request timeout.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// User agent string for product-reviews.
const USER_AGENT: &str = concat!("product-reviews/", env!("CARGO_PKG_VERSION"));

// ============================================================================
// Transport Trait
// ============================================================================

/// A plain HTTP response: status code plus body text.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response body.
    pub body: String,
}

impl HttpResponse {
    /// Returns true for 2xx statuses.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Transport seam for HTTP GETs.
///
/// One blocking request per call; retries and backoff are deliberately out
/// of scope and belong to the caller if anywhere.
pub trait HttpTransport: Send + Sync {
    /// Performs a GET request and returns the raw response.
    ///
    /// # Errors
    ///
    /// Returns `HttpError::InvalidUrl` for unparseable URLs and
    /// `HttpError::Request` for transport failures.
    fn get(&self, url: &str) -> Result<HttpResponse, HttpError>;
}

// ============================================================================
// Reqwest Transport
// ============================================================================

/// The real transport, backed by a blocking reqwest client.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    inner: Client,
}

impl ReqwestTransport {
    /// Creates a transport with the default timeout.
    ///
    /// # Panics
    ///
    /// Panics if the HTTP client cannot be built. This should only occur
    /// if the system's TLS/SSL configuration is fundamentally broken,
    /// making network operations impossible. This is considered
    /// unrecoverable at runtime.
    pub fn new() -> Self {
        Self::with_timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Returns the process-wide shared transport.
    ///
    /// Each blocking reqwest client owns a background runtime thread, so
    /// callers that build clients per request (provider factories do)
    /// share a single default transport instead.
    ///
    /// # Panics
    ///
    /// Same conditions as [`ReqwestTransport::new`], on first use only.
    pub fn shared() -> Arc<Self> {
        static SHARED: OnceLock<Arc<ReqwestTransport>> = OnceLock::new();
        Arc::clone(SHARED.get_or_init(|| Arc::new(Self::new())))
    }

    /// Creates a transport with a custom timeout.
    ///
    /// # Panics
    ///
    /// Same conditions as [`ReqwestTransport::new`].
    pub fn with_timeout(timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .unwrap_or_else(|e| {
                panic!(
                    "Failed to create HTTP client: {}. \
                    This usually indicates a broken TLS/SSL configuration.",
                    e
                )
            });

        Self { inner: client }
    }
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpTransport for ReqwestTransport {
    fn get(&self, url: &str) -> Result<HttpResponse, HttpError> {
        let parsed = Url::parse(url).map_err(|e| HttpError::InvalidUrl(e.to_string()))?;

        debug!(url = %parsed, "GET");
        let response = self.inner.get(parsed).send()?;
        let status = response.status().as_u16();
        let body = response.text()?;
        debug!(status, bytes = body.len(), "response");

        Ok(HttpResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_success_range() {
        let ok = HttpResponse {
            status: 200,
            body: String::new(),
        };
        let not_found = HttpResponse {
            status: 404,
            body: String::new(),
        };
        assert!(ok.is_success());
        assert!(!not_found.is_success());
    }

    #[test]
    fn test_shared_transport_is_a_singleton() {
        let first = ReqwestTransport::shared();
        let second = ReqwestTransport::shared();
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_invalid_url_is_rejected_before_any_io() {
        let transport = ReqwestTransport::new();
        let result = transport.get("not a url");
        assert!(matches!(result, Err(HttpError::InvalidUrl(_))));
    }
}
