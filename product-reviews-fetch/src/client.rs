//! HTTP client wrapper.

use std::sync::Arc;

use serde_json::Value;

use crate::error::HttpError;
use crate::transport::{HttpResponse, HttpTransport, ReqwestTransport};

/// Thin client over a [`HttpTransport`].
///
/// Cloning is cheap; the transport is shared.
#[derive(Clone)]
pub struct HttpClient {
    transport: Arc<dyn HttpTransport>,
}

impl HttpClient {
    /// Creates a client over the shared network transport.
    pub fn new() -> Self {
        Self::with_transport(ReqwestTransport::shared())
    }

    /// Creates a client over an arbitrary transport (e.g. a replay
    /// transport in tests).
    pub fn with_transport(transport: Arc<dyn HttpTransport>) -> Self {
        Self { transport }
    }

    /// Performs a GET request, failing on non-success statuses.
    ///
    /// # Errors
    ///
    /// Returns `HttpError::Status` for non-2xx responses, plus whatever the
    /// transport reports.
    pub fn get(&self, url: &str) -> Result<HttpResponse, HttpError> {
        let response = self.transport.get(url)?;
        if !response.is_success() {
            return Err(HttpError::Status {
                status: response.status,
                url: url.to_string(),
            });
        }
        Ok(response)
    }

    /// Performs a GET request and parses the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns `HttpError::Json` if the body is not valid JSON, plus
    /// whatever [`HttpClient::get`] reports.
    pub fn get_json(&self, url: &str) -> Result<Value, HttpError> {
        let response = self.get(url)?;
        Ok(serde_json::from_str(&response.body)?)
    }
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::replay::{RecordedInteraction, ReplayTransport};

    fn replay_client(interactions: Vec<RecordedInteraction>) -> HttpClient {
        HttpClient::with_transport(Arc::new(ReplayTransport::new(interactions)))
    }

    #[test]
    fn test_get_json_parses_body() {
        let client = replay_client(vec![RecordedInteraction {
            url: "https://shop.example/api".to_string(),
            status: 200,
            body: r#"{"items": []}"#.to_string(),
        }]);
        let value = client.get_json("https://shop.example/api").unwrap();
        assert!(value["items"].is_array());
    }

    #[test]
    fn test_non_success_status_is_an_error() {
        let client = replay_client(vec![RecordedInteraction {
            url: "https://shop.example/missing".to_string(),
            status: 404,
            body: String::new(),
        }]);
        let result = client.get("https://shop.example/missing");
        assert!(matches!(
            result,
            Err(HttpError::Status { status: 404, .. })
        ));
    }

    #[test]
    fn test_get_json_rejects_invalid_json() {
        let client = replay_client(vec![RecordedInteraction {
            url: "https://shop.example/api".to_string(),
            status: 200,
            body: "<html>".to_string(),
        }]);
        let result = client.get_json("https://shop.example/api");
        assert!(matches!(result, Err(HttpError::Json(_))));
    }
}
