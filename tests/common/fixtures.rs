//! Fixtures for fake Eclipse installation trees

use std::fs;
use std::path::{Path, PathBuf};

/// Marker file identifying an installation root
pub const SENTINEL_FILE: &str = ".eclipseproduct";

/// Create `dir` (and parents) and mark it as an installation root
pub fn mark_installation_root(dir: &Path) {
    fs::create_dir_all(dir).unwrap();
    fs::write(dir.join(SENTINEL_FILE), b"version=4.5.2\n").unwrap();
}

/// Populate a packaged install: one versioned archive per bundle in a
/// flat `plugins` directory
pub fn add_packaged_bundles(root: &Path, bundles: &[&str]) -> PathBuf {
    let plugins = root.join("plugins");
    fs::create_dir_all(&plugins).unwrap();
    for bundle in bundles {
        let archive = plugins.join(format!("{}_4.5.2.v20160212-1500.jar", bundle));
        fs::write(archive, b"PK\x03\x04").unwrap();
    }
    plugins
}

/// Write the simpleconfigurator manifest of a provisioned install
pub fn write_bundles_info(root: &Path, lines: &[String]) -> PathBuf {
    let dir = root
        .join("configuration")
        .join("org.eclipse.equinox.simpleconfigurator");
    fs::create_dir_all(&dir).unwrap();
    let manifest = dir.join("bundles.info");
    fs::write(&manifest, lines.join("\n")).unwrap();
    manifest
}

/// A well-formed manifest record for `bundle`, pointing into a repository
/// plugins pool
pub fn manifest_line(bundle: &str) -> String {
    format!(
        "{},4.5.2,file:/repo/pool/plugins/{}_4.5.2.jar,4,false",
        bundle, bundle
    )
}
