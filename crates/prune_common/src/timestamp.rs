//! Modification-time helpers for staleness comparisons.

use std::path::Path;
use std::time::SystemTime;

/// Returns the modification time of `path`, or `None` if it cannot be read.
pub fn modified(path: &Path) -> Option<SystemTime> {
    std::fs::metadata(path).and_then(|m| m.modified()).ok()
}

/// Returns `true` if `candidate` was modified strictly after `reference`.
///
/// Returns `false` when either timestamp is unavailable.
pub fn is_newer(candidate: &Path, reference: &Path) -> bool {
    match (modified(candidate), modified(reference)) {
        (Some(c), Some(r)) => c > r,
        _ => false,
    }
}
