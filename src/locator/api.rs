//! Public API for the locator
//!
//! This module provides the complete public API for installation discovery
//! and bundle resolution. External modules should import from here rather
//! than directly from internal modules.

use std::path::Path;

use url::Url;

use crate::core::time::{SystemTimeProvider, TimeProvider};
use crate::locator::discovery::{find_installation_root, SearchDeadline};
use crate::locator::resolver::ArtifactResolver;
use crate::locator::types::SENTINEL_FILE;

// Error handling
pub use crate::locator::error::{LocatorError, LocatorResult};

// Required bundle set
pub use crate::locator::types::REQUIRED_BUNDLES;

/// Locate an Eclipse installation under `search_root` and resolve the
/// required bundle archives to URLs
///
/// The result preserves discovery order: directory listing order for a
/// packaged install, manifest line order for a provisioned one. On
/// success its length equals the required bundle count. Fails when the
/// installation root cannot be found within the search budget, when the
/// fallback manifest is missing or corrupt, or when any required bundle
/// remains unresolved after both lookup strategies; none of these
/// failures is worth retrying within one configuration cycle.
pub fn locate_bundles(search_root: &Path) -> LocatorResult<Vec<Url>> {
    let time = SystemTimeProvider;
    let start = time.now();
    let searched = search_root.display().to_string();

    // Canonicalising up front makes every descendant path absolute, which
    // file: URL construction requires; a root that cannot be canonicalised
    // does not exist, so there is nothing to search.
    let root = std::fs::canonicalize(search_root).map_err(|_| LocatorError::RootNotFound {
        sentinel: SENTINEL_FILE,
        searched: searched.clone(),
    })?;

    let deadline = SearchDeadline::new(start, &time);
    let root = find_installation_root(&root, &deadline)?.ok_or_else(|| {
        LocatorError::RootNotFound {
            sentinel: SENTINEL_FILE,
            searched: searched.clone(),
        }
    })?;

    log::info!(
        "found installation root '{}' in {}ms",
        root.display(),
        deadline.elapsed().as_millis()
    );

    let mut resolver = ArtifactResolver::new();
    let locations = resolver.resolve(&root)?;

    if !resolver.unresolved().is_empty() {
        return Err(LocatorError::UnresolvedArtifacts {
            searched,
            unresolved: resolver.unresolved().names().map(String::from).collect(),
        });
    }

    log::info!(
        "resolved {} bundles in {}ms ({})",
        locations.len(),
        deadline.elapsed().as_millis(),
        searched
    );
    Ok(locations)
}
