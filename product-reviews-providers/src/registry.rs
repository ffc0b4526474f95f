//! Provider registry: discovery, caching, and URL dispatch.
//!
//! The registry merges provider descriptors from three sources into one
//! deduplicated namespace and routes incoming URLs to the first matching
//! provider. Discovery order, lowest to highest precedence:
//!
//! 1. Built-in providers bundled with the core
//! 2. Filesystem plugins from the configured plugins directory
//! 3. Extension entries registered by the embedding application
//!
//! When two sources declare the same name the later source wins; the entry
//! keeps the list position of the name's first appearance, so the overall
//! order stays stable. Results are cached after the first discovery pass
//! and replaced wholesale by [`Registry::clear_cache`]; there is no partial
//! invalidation and no time-based expiry.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex, PoisonError};

use product_reviews_core::{CoreError, ReviewsProvider};
use tracing::{debug, warn};

use crate::builtin;
use crate::descriptor::{DiscoverySource, ProviderDescriptor};
use crate::fs_loader;

// ============================================================================
// Configuration
// ============================================================================

/// Explicit registry configuration.
///
/// The plugins directory comes in through here; the registry never reads
/// environment variables itself (the CLI bootstrap resolves
/// `PRODUCT_REVIEWS_PLUGINS_DIR` and passes the result in).
#[derive(Debug, Clone, Default)]
pub struct RegistryConfig {
    /// Directory scanned for plugin definition files. `None` skips
    /// filesystem discovery.
    pub plugins_dir: Option<PathBuf>,
}

impl RegistryConfig {
    /// Creates a configuration with no plugins directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the plugins directory.
    #[must_use]
    pub fn with_plugins_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.plugins_dir = Some(dir.into());
        self
    }
}

// ============================================================================
// Provider Set
// ============================================================================

/// One discovery pass's worth of descriptors: an insertion-ordered,
/// name-deduplicated namespace.
#[derive(Debug, Default)]
struct ProviderSet {
    descriptors: Vec<ProviderDescriptor>,
    index: HashMap<String, usize>,
}

impl ProviderSet {
    /// Inserts a descriptor; a later descriptor with an existing name
    /// replaces the earlier one in place. Descriptors without a name are
    /// rejected here, at registration time.
    fn insert(&mut self, descriptor: ProviderDescriptor) {
        if descriptor.name.trim().is_empty() {
            warn!(source = %descriptor.source, "excluding provider with no name");
            return;
        }
        match self.index.get(&descriptor.name) {
            Some(&position) => {
                debug!(
                    name = %descriptor.name,
                    source = %descriptor.source,
                    "provider overrides earlier discovery source"
                );
                self.descriptors[position] = descriptor;
            }
            None => {
                self.index
                    .insert(descriptor.name.clone(), self.descriptors.len());
                self.descriptors.push(descriptor);
            }
        }
    }

    fn get(&self, name: &str) -> Option<&ProviderDescriptor> {
        self.index.get(name).map(|&i| &self.descriptors[i])
    }
}

// ============================================================================
// Registry
// ============================================================================

/// Discovers, deduplicates, and dispatches among review providers.
pub struct Registry {
    config: RegistryConfig,
    extensions: Vec<ProviderDescriptor>,
    cache: Mutex<Option<Arc<ProviderSet>>>,
}

impl Registry {
    /// Creates a registry with the given configuration and no extension
    /// entries.
    pub fn new(config: RegistryConfig) -> Self {
        Self::with_extensions(config, Vec::new())
    }

    /// Creates a registry with extension entries supplied by the embedding
    /// application. Entries are treated as opaque beyond the descriptor
    /// contract and participate as the highest-precedence discovery source.
    pub fn with_extensions(config: RegistryConfig, extensions: Vec<ProviderDescriptor>) -> Self {
        Self {
            config,
            extensions,
            cache: Mutex::new(None),
        }
    }

    /// Registers an additional extension entry and invalidates the cache so
    /// the next lookup sees it.
    pub fn register_extension(&mut self, descriptor: ProviderDescriptor) {
        self.extensions
            .push(descriptor.with_source(DiscoverySource::Extension));
        self.clear_cache();
    }

    /// Runs one full discovery pass over all three sources.
    fn discover(&self) -> ProviderSet {
        let mut set = ProviderSet::default();

        for descriptor in builtin::descriptors() {
            set.insert(descriptor);
        }
        if let Some(dir) = &self.config.plugins_dir {
            for descriptor in fs_loader::load_plugins(dir) {
                set.insert(descriptor);
            }
        }
        for descriptor in &self.extensions {
            set.insert(descriptor.clone().with_source(DiscoverySource::Extension));
        }

        debug!(count = set.descriptors.len(), "provider discovery complete");
        set
    }

    /// Returns the cached provider set, running discovery on first use.
    ///
    /// The cache cell is held under a mutex for the whole population step,
    /// so discovery runs at most once even under racing readers; late
    /// readers block until the populating call finishes.
    fn cached(&self) -> Arc<ProviderSet> {
        let mut guard = self.cache.lock().unwrap_or_else(PoisonError::into_inner);
        match guard.as_ref() {
            Some(set) => Arc::clone(set),
            None => {
                let set = Arc::new(self.discover());
                *guard = Some(Arc::clone(&set));
                set
            }
        }
    }

    /// All provider descriptors in discovery order. Stable across repeated
    /// calls until the cache is cleared.
    pub fn providers(&self) -> Vec<ProviderDescriptor> {
        self.cached().descriptors.clone()
    }

    /// Provider names, in the same stable order as [`Registry::providers`].
    pub fn provider_names(&self) -> Vec<String> {
        self.cached()
            .descriptors
            .iter()
            .map(|d| d.name.clone())
            .collect()
    }

    /// Number of registered providers.
    pub fn count(&self) -> usize {
        self.cached().descriptors.len()
    }

    /// Looks up a descriptor by name.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::ProviderNotFound` if the name is absent.
    pub fn get(&self, name: &str) -> Result<ProviderDescriptor, CoreError> {
        self.cached()
            .get(name)
            .cloned()
            .ok_or_else(|| CoreError::ProviderNotFound(name.to_string()))
    }

    /// Instantiates a provider by name. Instances are built lazily and
    /// never cached.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::ProviderNotFound` if the name is absent.
    pub fn instantiate(&self, name: &str) -> Result<Box<dyn ReviewsProvider>, CoreError> {
        Ok(self.get(name)?.instantiate())
    }

    /// Resolves a URL to the first provider whose pattern matches, in
    /// discovery order. When several providers could match, the first
    /// match wins; this is a documented precedence rule, not an error.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::ProviderNotFound` if no pattern matches.
    pub fn provider_for_url(&self, url: &str) -> Result<ProviderDescriptor, CoreError> {
        let set = self.cached();
        for descriptor in &set.descriptors {
            if descriptor.check_url(url) {
                debug!(url, provider = %descriptor.name, "URL matched");
                return Ok(descriptor.clone());
            }
        }
        Err(CoreError::ProviderNotFound(format!(
            "No provider found for URL: {url}"
        )))
    }

    /// Lazily yields `(name, descriptor)` pairs in discovery order.
    ///
    /// Iterates over the cached set; re-iterating runs discovery again only
    /// if the cache was cleared in between.
    pub fn iter(&self) -> ProviderIter {
        ProviderIter {
            set: self.cached(),
            position: 0,
        }
    }

    /// Drops all cached discovery results. The next call re-runs full
    /// discovery; there is no partial invalidation.
    pub fn clear_cache(&self) {
        let mut guard = self.cache.lock().unwrap_or_else(PoisonError::into_inner);
        *guard = None;
    }
}

/// Iterator over a snapshot of the registry's namespace.
pub struct ProviderIter {
    set: Arc<ProviderSet>,
    position: usize,
}

impl Iterator for ProviderIter {
    type Item = (String, ProviderDescriptor);

    fn next(&mut self) -> Option<Self::Item> {
        let descriptor = self.set.descriptors.get(self.position)?;
        self.position += 1;
        Some((descriptor.name.clone(), descriptor.clone()))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use product_reviews_core::{ReviewList, UrlPattern};

    struct StubProvider {
        name: &'static str,
    }

    impl ReviewsProvider for StubProvider {
        fn name(&self) -> &str {
            self.name
        }

        fn get_reviews(&self, _url: &str) -> Result<ReviewList, CoreError> {
            Ok(ReviewList::default())
        }
    }

    fn extension_descriptor(name: &'static str, pattern: &str) -> ProviderDescriptor {
        ProviderDescriptor::new(
            name,
            format!("extension provider {name}"),
            UrlPattern::new(pattern).unwrap(),
            Arc::new(move || Box::new(StubProvider { name })),
        )
        .with_source(DiscoverySource::Extension)
    }

    fn write_plugin(dir: &std::path::Path, file: &str, name: &str, pattern: &str) {
        // Literal TOML strings so regex backslashes survive untouched.
        let content = format!(
            "[provider]\nname = '{name}'\ndescription = 'plugin {name}'\nurl_pattern = '{pattern}'\nkind = 'jsonfs'\n"
        );
        std::fs::write(dir.join(file), content).unwrap();
    }

    #[test]
    fn test_builtins_only_when_nothing_else_configured() {
        let registry = Registry::new(RegistryConfig::new());
        assert_eq!(registry.provider_names(), vec!["dummy", "jsonfs"]);
    }

    #[test]
    fn test_empty_plugins_dir_yields_builtin_names() {
        let dir = tempfile::tempdir().unwrap();
        let registry = Registry::new(RegistryConfig::new().with_plugins_dir(dir.path()));
        assert_eq!(registry.provider_names(), vec!["dummy", "jsonfs"]);
    }

    #[test]
    fn test_get_unknown_name_fails() {
        let registry = Registry::new(RegistryConfig::new());
        let result = registry.get("nope");
        assert!(matches!(result, Err(CoreError::ProviderNotFound(_))));
    }

    #[test]
    fn test_instantiate_builds_provider() {
        let registry = Registry::new(RegistryConfig::new());
        let provider = registry.instantiate("dummy").unwrap();
        assert_eq!(provider.name(), "dummy");
    }

    #[test]
    fn test_url_dispatch_is_deterministic() {
        let registry = Registry::new(RegistryConfig::new());
        let url = "https://example.com/reviews/product-1";
        let first = registry.provider_for_url(url).unwrap();
        let second = registry.provider_for_url(url).unwrap();
        assert_eq!(first.name, "dummy");
        assert_eq!(first.name, second.name);
    }

    #[test]
    fn test_no_matching_provider_fails() {
        let registry = Registry::new(RegistryConfig::new());
        let result = registry.provider_for_url("https://no-match.example/x");
        assert!(matches!(result, Err(CoreError::ProviderNotFound(_))));
    }

    #[test]
    fn test_first_match_in_discovery_order_wins() {
        // Both the builtin dummy and this extension match example.com URLs,
        // but dummy comes first in discovery order.
        let ext = extension_descriptor("late-match", r"https?://example\.com/.*");
        let registry = Registry::with_extensions(RegistryConfig::new(), vec![ext]);
        let desc = registry
            .provider_for_url("https://example.com/reviews/product-1")
            .unwrap();
        assert_eq!(desc.name, "dummy");
    }

    #[test]
    fn test_filesystem_plugin_joins_namespace() {
        let dir = tempfile::tempdir().unwrap();
        write_plugin(dir.path(), "shop.toml", "shop", r"https://shop\.example/.*");
        let registry = Registry::new(RegistryConfig::new().with_plugins_dir(dir.path()));
        assert_eq!(registry.provider_names(), vec!["dummy", "jsonfs", "shop"]);
        assert_eq!(
            registry
                .provider_for_url("https://shop.example/p/9")
                .unwrap()
                .name,
            "shop"
        );
    }

    #[test]
    fn test_later_source_overrides_builtin_by_name() {
        let dir = tempfile::tempdir().unwrap();
        write_plugin(dir.path(), "dummy.toml", "dummy", r"https://override\.example/.*");
        let registry = Registry::new(RegistryConfig::new().with_plugins_dir(dir.path()));

        // Same namespace size; the override keeps the original position.
        assert_eq!(registry.provider_names(), vec!["dummy", "jsonfs"]);
        let desc = registry.get("dummy").unwrap();
        assert_eq!(desc.source, DiscoverySource::Filesystem);
        assert!(desc.check_url("https://override.example/p/1"));
    }

    #[test]
    fn test_extension_overrides_filesystem_plugin() {
        let dir = tempfile::tempdir().unwrap();
        write_plugin(dir.path(), "shop.toml", "shop", r"https://shop\.example/.*");
        let ext = extension_descriptor("shop", r"https://ext\.example/.*");
        let registry = Registry::with_extensions(
            RegistryConfig::new().with_plugins_dir(dir.path()),
            vec![ext],
        );
        let desc = registry.get("shop").unwrap();
        assert_eq!(desc.source, DiscoverySource::Extension);
    }

    #[test]
    fn test_extension_without_name_is_excluded() {
        let ext = extension_descriptor("", r"https://anon\.example/.*");
        let registry = Registry::with_extensions(RegistryConfig::new(), vec![ext]);
        assert_eq!(registry.provider_names(), vec!["dummy", "jsonfs"]);
    }

    #[test]
    fn test_clear_cache_retriggers_discovery() {
        let dir = tempfile::tempdir().unwrap();
        let registry = Registry::new(RegistryConfig::new().with_plugins_dir(dir.path()));
        assert_eq!(registry.count(), 2);

        // A plugin added after the first load is invisible until the cache
        // is cleared.
        write_plugin(dir.path(), "late.toml", "late", r"https://late\.example/.*");
        assert_eq!(registry.count(), 2);

        registry.clear_cache();
        assert_eq!(registry.provider_names(), vec!["dummy", "jsonfs", "late"]);
    }

    #[test]
    fn test_register_extension_invalidates_cache() {
        let mut registry = Registry::new(RegistryConfig::new());
        assert_eq!(registry.count(), 2);

        registry.register_extension(extension_descriptor("extra", r"https://extra\.example/.*"));
        assert_eq!(registry.provider_names(), vec!["dummy", "jsonfs", "extra"]);
    }

    #[test]
    fn test_iter_matches_list_order() {
        let registry = Registry::new(RegistryConfig::new());
        let iterated: Vec<_> = registry.iter().map(|(name, _)| name).collect();
        assert_eq!(iterated, registry.provider_names());
    }

    #[test]
    fn test_iter_pairs_names_with_descriptors() {
        let registry = Registry::new(RegistryConfig::new());
        for (name, descriptor) in registry.iter() {
            assert_eq!(name, descriptor.name);
        }
    }

    #[test]
    fn test_concurrent_first_access_discovers_once() {
        let dir = tempfile::tempdir().unwrap();
        write_plugin(dir.path(), "shop.toml", "shop", r"https://shop\.example/.*");
        let registry = Registry::new(RegistryConfig::new().with_plugins_dir(dir.path()));

        let names: Vec<Vec<String>> = std::thread::scope(|s| {
            let handles: Vec<_> = (0..8)
                .map(|_| s.spawn(|| registry.provider_names()))
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });
        for result in &names {
            assert_eq!(*result, vec!["dummy", "jsonfs", "shop"]);
        }

        // Population ran exactly once: the cached set survives the plugin
        // file's removal, so later reads serve the same snapshot instead
        // of re-running discovery.
        std::fs::remove_file(dir.path().join("shop.toml")).unwrap();
        assert_eq!(registry.provider_names(), vec!["dummy", "jsonfs", "shop"]);

        registry.clear_cache();
        assert_eq!(registry.provider_names(), vec!["dummy", "jsonfs"]);
    }

    #[test]
    fn test_list_is_stable_across_repeated_calls() {
        let registry = Registry::new(RegistryConfig::new());
        let first = registry.provider_names();
        let second = registry.provider_names();
        assert_eq!(first, second);
    }
}
