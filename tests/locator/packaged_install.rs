//! Packaged install integration tests

use tempfile::TempDir;

use eclocate::core::error_handling::RetryableError;
use eclocate::locator::api::{locate_bundles, LocatorError, REQUIRED_BUNDLES};

use crate::common::fixtures;

#[test]
fn test_full_packaged_install_resolves_every_bundle() {
    let temp = TempDir::new().unwrap();
    fixtures::mark_installation_root(temp.path());
    fixtures::add_packaged_bundles(temp.path(), REQUIRED_BUNDLES);

    let locations = locate_bundles(temp.path()).unwrap();

    assert_eq!(locations.len(), REQUIRED_BUNDLES.len());
    for bundle in REQUIRED_BUNDLES {
        assert!(
            locations
                .iter()
                .any(|url| url.path().contains(&format!("{}_", bundle))),
            "no location for {}",
            bundle
        );
    }
}

#[test]
fn test_resolved_locations_are_file_urls_into_plugins() {
    let temp = TempDir::new().unwrap();
    fixtures::mark_installation_root(temp.path());
    fixtures::add_packaged_bundles(temp.path(), REQUIRED_BUNDLES);

    let locations = locate_bundles(temp.path()).unwrap();

    for url in &locations {
        assert_eq!(url.scheme(), "file");
        assert!(url.path().contains("/plugins/"));
        assert!(url.path().ends_with(".jar"));
    }
}

#[test]
fn test_partial_install_fails_naming_every_missing_bundle() {
    let temp = TempDir::new().unwrap();
    fixtures::mark_installation_root(temp.path());
    let present: Vec<&str> = REQUIRED_BUNDLES
        .iter()
        .copied()
        .filter(|name| !name.starts_with("org.eclipse.core."))
        .collect();
    fixtures::add_packaged_bundles(temp.path(), &present);

    let error = locate_bundles(temp.path()).unwrap_err();

    match &error {
        LocatorError::UnresolvedArtifacts { unresolved, .. } => {
            assert_eq!(
                unresolved,
                &vec![
                    "org.eclipse.core.contenttype".to_string(),
                    "org.eclipse.core.jobs".to_string(),
                    "org.eclipse.core.resources".to_string(),
                    "org.eclipse.core.runtime".to_string(),
                ]
            );
        }
        other => panic!("expected unresolved artifacts, got {:?}", other),
    }
    assert!(!error.is_retryable());

    let message = error.to_string();
    assert!(message.contains("org.eclipse.core.jobs"));
    assert!(message.contains("org.eclipse.core.runtime"));
}

#[test]
fn test_stray_archives_do_not_satisfy_requirements() {
    let temp = TempDir::new().unwrap();
    fixtures::mark_installation_root(temp.path());
    let plugins = fixtures::add_packaged_bundles(temp.path(), REQUIRED_BUNDLES);

    // Extra archives and junk files in the plugins pool are ignored.
    std::fs::write(plugins.join("com.example.extra_1.0.jar"), b"jar").unwrap();
    std::fs::write(plugins.join("README.txt"), b"readme").unwrap();

    let locations = locate_bundles(temp.path()).unwrap();

    assert_eq!(locations.len(), REQUIRED_BUNDLES.len());
    assert!(locations
        .iter()
        .all(|url| !url.path().contains("com.example.extra")));
}
