//! Fetch error types.

use thiserror::Error;

/// Error type for HTTP operations.
#[derive(Debug, Error)]
pub enum HttpError {
    /// The request could not be sent or the response not read.
    #[error("HTTP error: {0}")]
    Request(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("HTTP status {status} for {url}")]
    Status {
        /// Response status code.
        status: u16,
        /// The URL that was requested.
        url: String,
    },

    /// The URL could not be parsed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The response body was not valid JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A replay transport had no recording for the requested URL.
    #[error("No recorded response for {0}")]
    MissingRecording(String),

    /// A cassette file could not be read or written.
    #[error("Cassette error: {0}")]
    Cassette(String),
}
