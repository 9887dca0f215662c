//! Type definitions and layout constants for the locator
//!
//! The constants describe the on-disk shape of an Eclipse installation:
//! the sentinel marker identifying the installation root, the two places
//! bundle archives can be recorded, and the naming convention of packaged
//! archives.

use std::collections::BTreeSet;
use std::time::Duration;

/// File whose presence directly inside a directory marks it as the
/// installation root; its contents are never read
pub(crate) const SENTINEL_FILE: &str = ".eclipseproduct";

/// Subdirectory of the installation root holding packaged bundle archives
pub(crate) const PLUGINS_DIR: &str = "plugins";

/// Bundle manifest of a provisioned install, relative to the installation
/// root
pub(crate) const BUNDLES_INFO_PATH: &[&str] = &[
    "configuration",
    "org.eclipse.equinox.simpleconfigurator",
    "bundles.info",
];

/// Suffix of packaged bundle archives
pub(crate) const ARCHIVE_SUFFIX: &str = ".jar";

/// Separates the bundle name from its version in packaged archive names
pub(crate) const VERSION_SEPARATOR: char = '_';

/// Wall-clock budget for the installation root search
pub(crate) const ROOT_SEARCH_TIMEOUT: Duration = Duration::from_millis(500);

/// Bundles the embedding host needs on its resource path
pub const REQUIRED_BUNDLES: &[&str] = &[
    "org.eclipse.core.contenttype",
    "org.eclipse.core.jobs",
    "org.eclipse.core.resources",
    "org.eclipse.core.runtime",
    "org.eclipse.equinox.app",
    "org.eclipse.equinox.common",
    "org.eclipse.equinox.preferences",
    "org.eclipse.jdt.core",
    "org.eclipse.osgi",
    "org.eclipse.text",
];

/// Working set of bundle names not yet resolved to a location
///
/// Seeded from [`REQUIRED_BUNDLES`] at the start of a resolution run and
/// drained as either lookup strategy matches names. An empty set after
/// resolution signals success; leftovers are reported verbatim in the
/// failure. Backed by an ordered set so that enumeration in messages is
/// deterministic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequiredBundles {
    names: BTreeSet<String>,
}

impl RequiredBundles {
    /// Seed the working set with the built-in required bundle list
    pub(crate) fn builtin() -> Self {
        Self {
            names: REQUIRED_BUNDLES.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Seed the working set with arbitrary names
    #[cfg(test)]
    pub(crate) fn with_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Remove `name` from the set, reporting whether it was present
    ///
    /// A name can only ever be taken once, which is what makes resolution
    /// idempotent per bundle across both lookup strategies.
    pub(crate) fn take(&mut self, name: &str) -> bool {
        self.names.remove(name)
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub(crate) fn len(&self) -> usize {
        self.names.len()
    }

    /// Names still lacking a location, in lexical order
    pub(crate) fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}
