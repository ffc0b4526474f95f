//! Filesystem plugin discovery.
//!
//! Scans a configured plugins directory (no recursion) for `*.toml`
//! definition files. Each file must define exactly one `[provider]` table:
//!
//! ```toml
//! [provider]
//! name = "shopsite"
//! description = "Reviews from shopsite.example"
//! url_pattern = "https?://shopsite\\.example/p/.*"
//! kind = "http-json"            # or "jsonfs"
//! test_urls = ["https://shopsite.example/p/1"]
//! ```
//!
//! Files that fail to parse, define zero or multiple providers, or carry an
//! invalid pattern are skipped with a warning; they never abort discovery
//! of the remaining plugins.

use std::path::Path;
use std::sync::Arc;

use product_reviews_core::UrlPattern;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};

use crate::builtin::JsonFsProvider;
use crate::descriptor::{DiscoverySource, ProviderDescriptor};
use crate::http_json::HttpJsonProvider;

// ============================================================================
// Plugin Definition
// ============================================================================

/// Which generic implementation a plugin file selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PluginKind {
    /// Reads the canonical review document from a local file
    /// (`jsonfs://<path>` URLs).
    Jsonfs,
    /// One blocking GET; the response body must be the canonical review
    /// document.
    HttpJson,
}

/// The `[provider]` table of a plugin definition file.
#[derive(Debug, Clone, Deserialize)]
pub struct PluginSpec {
    /// Unique provider name.
    pub name: String,
    /// Human-readable description.
    #[serde(default)]
    pub description: String,
    /// Dispatch pattern, anchored at the start of the URL.
    pub url_pattern: String,
    /// Generic implementation to instantiate.
    pub kind: PluginKind,
    /// Health-check URLs.
    #[serde(default)]
    pub test_urls: Vec<String>,
    /// URLs expected to fail parsing.
    #[serde(default)]
    pub invalid_urls: Vec<String>,
}

/// Why a plugin file was skipped.
#[derive(Debug, Error)]
pub enum PluginLoadError {
    /// The file could not be read.
    #[error("failed to read file: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not valid TOML or the provider table is malformed.
    #[error("failed to parse plugin file: {0}")]
    Parse(String),

    /// The file does not define a `[provider]` table.
    #[error("no provider defined")]
    NoProvider,

    /// The file defines more than one provider.
    #[error("expected exactly one provider, found {0}")]
    MultipleProviders(usize),

    /// The provider declares no name.
    #[error("provider has no name")]
    MissingName,

    /// The dispatch pattern does not compile.
    #[error("invalid url_pattern: {0}")]
    InvalidPattern(String),
}

// ============================================================================
// Loading
// ============================================================================

impl PluginSpec {
    fn into_descriptor(self) -> Result<ProviderDescriptor, PluginLoadError> {
        if self.name.trim().is_empty() {
            return Err(PluginLoadError::MissingName);
        }
        let pattern = UrlPattern::new(&self.url_pattern)
            .map_err(|e| PluginLoadError::InvalidPattern(e.to_string()))?;

        let name = self.name.clone();
        let factory: crate::descriptor::ProviderFactory = match self.kind {
            PluginKind::Jsonfs => {
                Arc::new(move || Box::new(JsonFsProvider::named(name.clone())))
            }
            PluginKind::HttpJson => {
                Arc::new(move || Box::new(HttpJsonProvider::named(name.clone())))
            }
        };

        Ok(ProviderDescriptor::new(self.name, self.description, pattern, factory)
            .with_test_urls(self.test_urls)
            .with_invalid_urls(self.invalid_urls)
            .with_source(DiscoverySource::Filesystem))
    }
}

/// Parses one plugin definition file into a descriptor.
///
/// # Errors
///
/// Returns a [`PluginLoadError`] describing why the file is unusable;
/// callers are expected to log and skip.
pub fn load_plugin(path: &Path) -> Result<ProviderDescriptor, PluginLoadError> {
    let raw = std::fs::read_to_string(path)?;
    let value: toml::Value =
        toml::from_str(&raw).map_err(|e| PluginLoadError::Parse(e.to_string()))?;

    let provider = value.get("provider").ok_or(PluginLoadError::NoProvider)?;

    // `[[provider]]` defines an array of tables; exactly one is required.
    let spec_value = match provider {
        toml::Value::Array(entries) => {
            if entries.len() != 1 {
                return Err(PluginLoadError::MultipleProviders(entries.len()));
            }
            &entries[0]
        }
        other => other,
    };

    let spec: PluginSpec = spec_value
        .clone()
        .try_into()
        .map_err(|e| PluginLoadError::Parse(e.to_string()))?;
    spec.into_descriptor()
}

/// Scans the plugins directory and returns descriptors in a deterministic
/// (file-name sorted) order. Missing directories yield an empty list.
pub fn load_plugins(dir: &Path) -> Vec<ProviderDescriptor> {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            debug!(dir = %dir.display(), error = %e, "plugins directory not readable");
            return Vec::new();
        }
    };

    let mut paths: Vec<_> = entries
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .collect();
    paths.sort();

    let mut descriptors = Vec::new();
    for path in paths {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        if file_name.starts_with('.') || file_name.starts_with('_') {
            continue;
        }
        if path.extension() != Some(std::ffi::OsStr::new("toml")) {
            continue;
        }

        match load_plugin(&path) {
            Ok(desc) => {
                debug!(name = %desc.name, file = %path.display(), "loaded plugin provider");
                descriptors.push(desc);
            }
            Err(e) => {
                warn!(file = %path.display(), error = %e, "skipping plugin file");
            }
        }
    }
    descriptors
}
