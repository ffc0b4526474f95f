//! Deterministic record/replay of HTTP interactions.
//!
//! Provider tests run against pre-recorded responses instead of the live
//! network. A cassette is a JSON file holding a list of
//! [`RecordedInteraction`]s; the [`ReplayTransport`] serves them back by
//! URL, and the [`Recorder`] wraps any transport to capture new ones.

use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::HttpError;
use crate::transport::{HttpResponse, HttpTransport};

// ============================================================================
// Recorded Interactions
// ============================================================================

/// One captured request/response pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordedInteraction {
    /// The requested URL.
    pub url: String,
    /// Response status code.
    pub status: u16,
    /// Response body.
    pub body: String,
}

// ============================================================================
// Replay Transport
// ============================================================================

/// Serves recorded responses keyed by URL. Requests for URLs with no
/// recording fail instead of touching the network.
#[derive(Debug, Clone)]
pub struct ReplayTransport {
    interactions: HashMap<String, RecordedInteraction>,
}

impl ReplayTransport {
    /// Builds a replay transport from in-memory recordings.
    ///
    /// Later recordings for the same URL replace earlier ones.
    pub fn new(interactions: Vec<RecordedInteraction>) -> Self {
        let interactions = interactions
            .into_iter()
            .map(|i| (i.url.clone(), i))
            .collect();
        Self { interactions }
    }

    /// Loads recordings from a cassette file.
    ///
    /// # Errors
    ///
    /// Returns `HttpError::Cassette` if the file cannot be read or does
    /// not hold a list of recorded interactions.
    pub fn from_cassette(path: &Path) -> Result<Self, HttpError> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| HttpError::Cassette(format!("failed to read {}: {e}", path.display())))?;
        let interactions: Vec<RecordedInteraction> = serde_json::from_str(&raw)
            .map_err(|e| HttpError::Cassette(format!("failed to parse {}: {e}", path.display())))?;
        Ok(Self::new(interactions))
    }

    /// Number of distinct recorded URLs.
    pub fn len(&self) -> usize {
        self.interactions.len()
    }

    /// Returns true if no interactions are loaded.
    pub fn is_empty(&self) -> bool {
        self.interactions.is_empty()
    }
}

impl HttpTransport for ReplayTransport {
    fn get(&self, url: &str) -> Result<HttpResponse, HttpError> {
        let recording = self
            .interactions
            .get(url)
            .ok_or_else(|| HttpError::MissingRecording(url.to_string()))?;
        debug!(url, status = recording.status, "replaying recorded response");
        Ok(HttpResponse {
            status: recording.status,
            body: recording.body.clone(),
        })
    }
}

// ============================================================================
// Recorder
// ============================================================================

/// Pass-through transport that captures every interaction so it can be
/// saved to a cassette for later replay.
pub struct Recorder {
    inner: Arc<dyn HttpTransport>,
    captured: Mutex<Vec<RecordedInteraction>>,
}

impl Recorder {
    /// Wraps a transport for recording.
    pub fn new(inner: Arc<dyn HttpTransport>) -> Self {
        Self {
            inner,
            captured: Mutex::new(Vec::new()),
        }
    }

    /// Returns a copy of everything captured so far.
    pub fn captured(&self) -> Vec<RecordedInteraction> {
        self.captured
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone()
    }

    /// Writes the captured interactions to a cassette file.
    ///
    /// # Errors
    ///
    /// Returns `HttpError::Cassette` if the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), HttpError> {
        let captured = self.captured();
        let json = serde_json::to_string_pretty(&captured)?;
        std::fs::write(path, json)
            .map_err(|e| HttpError::Cassette(format!("failed to write {}: {e}", path.display())))
    }
}

impl HttpTransport for Recorder {
    fn get(&self, url: &str) -> Result<HttpResponse, HttpError> {
        let response = self.inner.get(url)?;
        self.captured
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .push(RecordedInteraction {
                url: url.to_string(),
                status: response.status,
                body: response.body.clone(),
            });
        Ok(response)
    }
}
