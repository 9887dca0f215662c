//! Generic error handling utilities
//!
//! Provides a common shape for fatal-error reporting so the binary and any
//! embedding host treat failure kinds consistently.

/// Trait for errors that declare whether retrying the failed operation
/// could ever succeed
///
/// A host invoking the locator once per configuration cycle uses this flag
/// to decide between aborting the cycle and scheduling another attempt.
/// Errors marked non-retryable describe conditions an identical re-run
/// cannot change (a missing installation, a corrupt manifest), so the host
/// must surface them instead of looping.
pub trait RetryableError: std::error::Error {
    /// Returns true if a later identical call could plausibly succeed
    fn is_retryable(&self) -> bool;
}

/// Log an error at fatal severity with operation context
///
/// The primary line carries the error's own message; the operation context
/// and debug representation stay at debug level for diagnosis. Retryable
/// errors additionally get a warning telling the host a retry is an option.
pub fn log_fatal_error<E: RetryableError + std::fmt::Debug>(error: &E, operation_context: &str) {
    log::error!("FATAL: {}", error);
    if error.is_retryable() {
        log::warn!("Operation '{}' may succeed if retried", operation_context);
    }
    log::debug!("DETAIL: {} failed: {:?}", operation_context, error);
}
