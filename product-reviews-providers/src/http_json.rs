//! Generic HTTP JSON provider.
//!
//! Backs filesystem plugins with `kind = "http-json"`: one blocking GET of
//! the incoming URL, whose response body must be the canonical review
//! document (`{"items": [...]}`).

use product_reviews_core::{CoreError, ReviewList, ReviewsProvider};
use product_reviews_fetch::{HttpClient, HttpError};

/// Fetches the URL once and parses the body as a review document.
#[derive(Debug, Clone)]
pub struct HttpJsonProvider {
    name: String,
    client: HttpClient,
}

impl HttpJsonProvider {
    /// Creates the provider over the real network transport.
    pub fn named(name: impl Into<String>) -> Self {
        Self::with_client(name, HttpClient::new())
    }

    /// Creates the provider over a caller-supplied client (tests inject a
    /// replay transport here).
    pub fn with_client(name: impl Into<String>, client: HttpClient) -> Self {
        Self {
            name: name.into(),
            client,
        }
    }
}

impl ReviewsProvider for HttpJsonProvider {
    fn name(&self) -> &str {
        &self.name
    }

    fn get_reviews(&self, url: &str) -> Result<ReviewList, CoreError> {
        let document = self.client.get_json(url).map_err(|e| match e {
            HttpError::InvalidUrl(msg) => CoreError::InvalidUrl(msg),
            HttpError::Json(e) => CoreError::ReviewsParse(format!("Can't parse JSON: {e}")),
            other => CoreError::Http(other.to_string()),
        })?;

        ReviewList::from_document(&document)
    }
}
