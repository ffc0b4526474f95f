//! JSON filesystem provider.
//!
//! Handles `jsonfs://<filepath>` URLs. The file must hold the canonical
//! review document:
//!
//! ```json
//! {
//!   "items": [
//!     {
//!       "rating": 4.5,
//!       "text": "string, optional",
//!       "pros": "string, optional",
//!       "cons": "string, optional",
//!       "summary": "string, optional",
//!       "created_at": "ISO 8601 datetime, required"
//!     }
//!   ]
//! }
//! ```

use std::path::Path;
use std::sync::Arc;

use product_reviews_core::{CoreError, ReviewList, ReviewsProvider, UrlPattern};
use serde_json::Value;

use crate::descriptor::ProviderDescriptor;

const NAME: &str = "jsonfs";
const SCHEME: &str = "jsonfs://";

/// Reads reviews from a local JSON file named by the URL.
///
/// Reused by filesystem plugins with `kind = "jsonfs"`, which give it
/// their own name and pattern.
#[derive(Debug, Clone)]
pub struct JsonFsProvider {
    name: String,
}

impl JsonFsProvider {
    /// Creates the provider under a custom name.
    pub fn named(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Default for JsonFsProvider {
    fn default() -> Self {
        Self::named(NAME)
    }
}

impl ReviewsProvider for JsonFsProvider {
    fn name(&self) -> &str {
        &self.name
    }

    fn get_reviews(&self, url: &str) -> Result<ReviewList, CoreError> {
        let filepath = url
            .strip_prefix(SCHEME)
            .ok_or_else(|| CoreError::InvalidUrl(format!("expected {SCHEME} URL, got {url}")))?;

        if !Path::new(filepath).is_file() {
            return Err(CoreError::InvalidUrl(format!("File not found: {filepath}")));
        }

        let raw = std::fs::read_to_string(filepath)
            .map_err(|e| CoreError::ReviewsParse(format!("failed to read {filepath}: {e}")))?;
        let document: Value = serde_json::from_str(&raw)
            .map_err(|e| CoreError::ReviewsParse(format!("Can't parse JSON: {e}")))?;

        ReviewList::from_document(&document)
    }
}

/// Builds the jsonfs provider descriptor.
///
/// # Errors
///
/// Returns `CoreError::Validation` if the bundled URL pattern fails to
/// compile; discovery logs and skips the provider in that case.
pub fn jsonfs_descriptor() -> Result<ProviderDescriptor, CoreError> {
    Ok(ProviderDescriptor::new(
        NAME,
        "Reads reviews from a local JSON file (jsonfs://<filepath>).",
        UrlPattern::new(SCHEME)?,
        Arc::new(|| Box::new(JsonFsProvider::default())),
    ))
}
