//! Sentinel search integration tests

use std::fs;

use tempfile::TempDir;

use eclocate::core::error_handling::RetryableError;
use eclocate::locator::api::{locate_bundles, LocatorError, REQUIRED_BUNDLES};

use crate::common::fixtures;

#[test]
fn test_install_found_three_levels_deep() {
    let temp = TempDir::new().unwrap();
    let install = temp
        .path()
        .join("opt")
        .join("ide")
        .join("eclipse-jee-4.5.2");
    fixtures::mark_installation_root(&install);
    fixtures::add_packaged_bundles(&install, REQUIRED_BUNDLES);

    // Decoy directories around the install must not derail the search.
    fs::create_dir_all(temp.path().join("opt").join("empty")).unwrap();
    fs::create_dir_all(temp.path().join("srv")).unwrap();

    let locations = locate_bundles(temp.path()).unwrap();

    assert_eq!(locations.len(), REQUIRED_BUNDLES.len());
}

#[test]
fn test_sentinel_must_be_directly_inside_the_root() {
    let temp = TempDir::new().unwrap();
    let install = temp.path().join("eclipse");
    fixtures::mark_installation_root(&install);
    fixtures::add_packaged_bundles(&install, REQUIRED_BUNDLES);

    // The search returns the directory containing the sentinel, not the
    // search root above it, so the plugins there must resolve.
    let locations = locate_bundles(temp.path()).unwrap();

    for url in &locations {
        assert!(url.path().contains("/eclipse/plugins/"));
    }
}

#[test]
fn test_sentinel_free_tree_fails_with_root_not_found() {
    let temp = TempDir::new().unwrap();
    fs::create_dir_all(temp.path().join("a").join("b").join("c")).unwrap();
    fs::create_dir_all(temp.path().join("d").join("e")).unwrap();

    let error = locate_bundles(temp.path()).unwrap_err();

    match &error {
        LocatorError::RootNotFound { searched, .. } => {
            assert_eq!(searched, &temp.path().display().to_string());
        }
        other => panic!("expected root not found, got {:?}", other),
    }
    assert!(!error.is_retryable());

    let message = error.to_string();
    assert!(message.contains(".eclipseproduct"));
}

#[test]
fn test_nonexistent_search_root_fails_with_root_not_found() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("never-created");

    let error = locate_bundles(&missing).unwrap_err();

    assert!(matches!(error, LocatorError::RootNotFound { .. }));
}
