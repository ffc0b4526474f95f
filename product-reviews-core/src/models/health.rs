//! Health check result type.

use serde::{Deserialize, Serialize};

/// Outcome of health-checking a provider against one URL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthCheckResult {
    /// Whether the provider fetched and validated reviews successfully.
    pub is_healthy: bool,
    /// Human-readable outcome description.
    pub message: String,
    /// The URL that was tested (empty when no URL was involved).
    #[serde(default)]
    pub url: String,
    /// Number of reviews fetched during the check.
    #[serde(default)]
    pub reviews_count: usize,
}

impl HealthCheckResult {
    /// Creates a healthy result.
    pub fn healthy(url: impl Into<String>, reviews_count: usize) -> Self {
        Self {
            is_healthy: true,
            message: "Successfully fetched reviews".to_string(),
            url: url.into(),
            reviews_count,
        }
    }

    /// Creates an unhealthy result.
    pub fn unhealthy(message: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            is_healthy: false,
            message: message.into(),
            url: url.into(),
            reviews_count: 0,
        }
    }
}
