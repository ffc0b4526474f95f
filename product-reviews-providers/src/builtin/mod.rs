//! Built-in providers bundled with the core.
//!
//! These form the lowest-precedence discovery source; filesystem plugins
//! and extension entries may override them by name.

pub mod dummy;
pub mod jsonfs;

use tracing::warn;

pub use dummy::{DummyProvider, dummy_descriptor};
pub use jsonfs::{JsonFsProvider, jsonfs_descriptor};

use crate::descriptor::ProviderDescriptor;

/// All built-in descriptors, in discovery order.
pub fn descriptors() -> Vec<ProviderDescriptor> {
    [dummy_descriptor(), jsonfs_descriptor()]
        .into_iter()
        .filter_map(|result| match result {
            Ok(desc) => Some(desc),
            Err(e) => {
                warn!(error = %e, "skipping built-in provider");
                None
            }
        })
        .collect()
}
