//! Installation root discovery
//!
//! Depth-first search for the directory that directly contains the
//! sentinel marker file, bounded by a wall-clock deadline so a large or
//! misconfigured search root cannot stall the host's configuration cycle.

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crate::core::time::TimeProvider;
use crate::locator::error::{LocatorError, LocatorResult};
use crate::locator::types::{ROOT_SEARCH_TIMEOUT, SENTINEL_FILE};

/// Wall-clock deadline for one root search, threaded explicitly through
/// the recursion rather than held as ambient state
pub(crate) struct SearchDeadline<'a> {
    start: Instant,
    budget: Duration,
    time: &'a dyn TimeProvider,
}

impl<'a> SearchDeadline<'a> {
    /// Deadline measured from `start` with the standard search budget
    pub(crate) fn new(start: Instant, time: &'a dyn TimeProvider) -> Self {
        Self {
            start,
            budget: ROOT_SEARCH_TIMEOUT,
            time,
        }
    }

    pub(crate) fn elapsed(&self) -> Duration {
        self.time.now().duration_since(self.start)
    }

    fn exceeded(&self) -> bool {
        self.elapsed() > self.budget
    }
}

/// Find the directory that directly contains the sentinel marker
///
/// Checks `candidate` itself first, then its immediate subdirectories in
/// listing order, depth first; the first match wins and no shallower
/// match is ever passed over for a deeper one. Returns `Ok(None)` when
/// the tree is exhausted.
///
/// The deadline is checked before any I/O on every candidate, including
/// the initial one, so a deep or wide tree is cut off promptly rather
/// than after a full traversal.
pub(crate) fn find_installation_root(
    candidate: &Path,
    deadline: &SearchDeadline<'_>,
) -> LocatorResult<Option<PathBuf>> {
    if deadline.exceeded() {
        return Err(LocatorError::Timeout {
            sentinel: SENTINEL_FILE,
            candidate: candidate.display().to_string(),
            elapsed_ms: deadline.elapsed().as_millis(),
        });
    }

    if candidate.join(SENTINEL_FILE).exists() {
        return Ok(Some(candidate.to_path_buf()));
    }

    // A candidate that cannot be listed (missing, permissions, race)
    // simply has no children to offer.
    let entries = match std::fs::read_dir(candidate) {
        Ok(entries) => entries,
        Err(_) => return Ok(None),
    };

    for entry in entries.flatten() {
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }
        if let Some(root) = find_installation_root(&path, deadline)? {
            return Ok(Some(root));
        }
    }

    Ok(None)
}
