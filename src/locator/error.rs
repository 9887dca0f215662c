//! Locator Error Types

use crate::core::error_handling::RetryableError;

/// Result type for locator operations
pub type LocatorResult<T> = Result<T, LocatorError>;

/// Error types for installation discovery and bundle resolution
///
/// Every variant is terminal for the call that raised it: an identical
/// re-run against the same tree would fail the same way, so all of them
/// report non-retryable through [`RetryableError`].
#[derive(Debug, thiserror::Error)]
pub enum LocatorError {
    #[error("Timeout searching for '{sentinel}': {elapsed_ms}ms elapsed at '{candidate}'")]
    Timeout {
        sentinel: &'static str,
        candidate: String,
        elapsed_ms: u128,
    },

    #[error("No installation containing '{sentinel}' found under '{searched}'")]
    RootNotFound {
        sentinel: &'static str,
        searched: String,
    },

    #[error("Cannot read bundle manifest '{path}': {source}")]
    ManifestUnreadable {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed bundle location '{location}': {detail}")]
    MalformedLocation { location: String, detail: String },

    #[error("Required bundles not found under '{searched}': {}", .unresolved.join(", "))]
    UnresolvedArtifacts {
        searched: String,
        unresolved: Vec<String>,
    },
}

impl RetryableError for LocatorError {
    fn is_retryable(&self) -> bool {
        // Repeating an identical scan within one configuration cycle
        // cannot change the outcome for any of these failures.
        false
    }
}
