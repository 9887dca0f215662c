//! Artifact resolution against an installation root
//!
//! Maps the required bundle names to concrete URLs using two alternative
//! sources: the flat `plugins` directory of a packaged install, or the
//! simpleconfigurator manifest of a provisioned install. The manifest is
//! consulted only when the packaged layout yields nothing at all.

use std::path::{Path, PathBuf};
use std::time::Instant;

use url::Url;

use crate::locator::error::{LocatorError, LocatorResult};
use crate::locator::types::{
    RequiredBundles, ARCHIVE_SUFFIX, BUNDLES_INFO_PATH, PLUGINS_DIR, VERSION_SEPARATOR,
};

/// Resolves required bundle names to locations, draining the working set
/// as matches are found
#[derive(Debug)]
pub(crate) struct ArtifactResolver {
    required: RequiredBundles,
}

impl ArtifactResolver {
    /// Resolver seeded with the built-in required bundle list
    pub(crate) fn new() -> Self {
        Self {
            required: RequiredBundles::builtin(),
        }
    }

    /// Resolver with a custom required set
    #[cfg(test)]
    pub(crate) fn with_required(required: RequiredBundles) -> Self {
        Self { required }
    }

    /// Names still lacking a location
    pub(crate) fn unresolved(&self) -> &RequiredBundles {
        &self.required
    }

    /// Resolve against `root`, trying the packaged layout first and the
    /// provisioning manifest only if the packaged layout found nothing
    pub(crate) fn resolve(&mut self, root: &Path) -> LocatorResult<Vec<Url>> {
        let mut locations = self.from_packaged_install(&root.join(PLUGINS_DIR))?;

        if locations.is_empty() {
            let manifest: PathBuf = BUNDLES_INFO_PATH
                .iter()
                .fold(root.to_path_buf(), |path, segment| path.join(segment));
            locations = self.from_repository_manifest(&manifest)?;
        }

        Ok(locations)
    }

    /// Match required names against versioned archives in a flat plugins
    /// directory
    ///
    /// A missing or unlistable directory yields zero matches rather than
    /// an error: it just means this is not a packaged install.
    fn from_packaged_install(&mut self, plugins: &Path) -> LocatorResult<Vec<Url>> {
        let start = Instant::now();
        let mut locations = Vec::new();

        if let Ok(entries) = std::fs::read_dir(plugins) {
            for entry in entries.flatten() {
                let file_name = entry.file_name();
                let Some(name) = file_name.to_str() else {
                    continue;
                };
                if !name.ends_with(ARCHIVE_SUFFIX) {
                    continue;
                }
                let Some(bundle) = packaged_bundle_name(name) else {
                    continue;
                };
                if self.required.take(bundle) {
                    locations.push(file_url(&entry.path())?);
                }
            }
        }

        log::debug!(
            "packaged install scan of '{}' matched {} bundles in {}ms",
            plugins.display(),
            locations.len(),
            start.elapsed().as_millis()
        );
        Ok(locations)
    }

    /// Match required names against the records of a provisioning
    /// manifest
    ///
    /// The manifest is the last fallback, so failing to read it is fatal,
    /// and so is a matched record whose location does not parse as a URL.
    /// Records with fewer than three fields are not bundle records and
    /// are skipped.
    fn from_repository_manifest(&mut self, manifest: &Path) -> LocatorResult<Vec<Url>> {
        let start = Instant::now();
        let mut locations = Vec::new();

        let contents =
            std::fs::read_to_string(manifest).map_err(|source| LocatorError::ManifestUnreadable {
                path: manifest.display().to_string(),
                source,
            })?;

        for line in contents.lines() {
            // name,version,location,...
            let fields: Vec<&str> = line.split(',').collect();
            if fields.len() < 3 {
                continue;
            }
            let name = fields[0];
            let location = fields[2];
            if self.required.take(name) {
                let url =
                    Url::parse(location).map_err(|source| LocatorError::MalformedLocation {
                        location: location.to_string(),
                        detail: source.to_string(),
                    })?;
                locations.push(url);
            }
        }

        log::debug!(
            "manifest scan of '{}' matched {} bundles in {}ms",
            manifest.display(),
            locations.len(),
            start.elapsed().as_millis()
        );
        Ok(locations)
    }
}

/// Bundle name of a packaged archive: the text before the first version
/// separator. Names with no separator, or with the separator in the first
/// position, are malformed and yield `None`.
pub(crate) fn packaged_bundle_name(file_name: &str) -> Option<&str> {
    match file_name.find(VERSION_SEPARATOR) {
        Some(0) | None => None,
        Some(index) => Some(&file_name[..index]),
    }
}

fn file_url(path: &Path) -> LocatorResult<Url> {
    Url::from_file_path(path).map_err(|_| LocatorError::MalformedLocation {
        location: path.display().to_string(),
        detail: "not an absolute file path".to_string(),
    })
}
