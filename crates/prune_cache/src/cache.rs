//! Timestamp-validated dependency cache.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use prune_common::{modified, CompiledUnit, CACHE_SUFFIX};

use crate::error::CacheError;

/// Suffix of the temporary file written before an entry is renamed into place.
const TMP_SUFFIX: &str = "tmp";

/// On-disk cache of referenced-symbol lists, one entry per compiled unit.
///
/// An entry lives at `<root>/<unit.relative>.dep`. It is valid only while its
/// modification time is strictly greater than the compiled artifact's.
/// Lookups never fail: unreadable, stale, or missing entries are a miss.
#[derive(Debug, Clone)]
pub struct DependencyCache {
    /// Root directory for all cache entries.
    root: PathBuf,
}

impl DependencyCache {
    /// Creates a cache rooted at `root`. The directory is created on first write.
    pub fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
        }
    }

    /// Returns the cache root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the path of the cache entry for `unit`.
    pub fn entry_path(&self, unit: &CompiledUnit) -> PathBuf {
        with_suffix(self.root.join(&unit.relative), CACHE_SUFFIX)
    }

    /// Returns the cached reference list for `unit`, or `None` on a miss.
    ///
    /// Read errors are logged and reported as a miss, which forces the
    /// caller to re-extract the unit.
    pub fn get(&self, unit: &CompiledUnit) -> Option<Vec<String>> {
        match self.read(unit) {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!(unit = %unit.id, "ignoring unreadable cache entry: {e}");
                None
            }
        }
    }

    /// Reads the entry for `unit` if it exists and is fresh.
    fn read(&self, unit: &CompiledUnit) -> Result<Option<Vec<String>>, CacheError> {
        let path = self.entry_path(unit);
        let Some(entry_time) = modified(&path) else {
            tracing::debug!(unit = %unit.id, "cache miss: no entry");
            return Ok(None);
        };
        let Some(artifact_time) = modified(&unit.absolute) else {
            tracing::debug!(unit = %unit.id, "cache miss: artifact timestamp unavailable");
            return Ok(None);
        };
        if entry_time <= artifact_time {
            tracing::debug!(unit = %unit.id, "cache miss: entry older than artifact");
            return Ok(None);
        }

        let bytes = std::fs::read(&path).map_err(|e| CacheError::Io {
            path: path.clone(),
            source: e,
        })?;
        let text = String::from_utf8(bytes).map_err(|_| CacheError::Encoding { path })?;

        tracing::debug!(unit = %unit.id, "cache hit");
        Ok(Some(
            text.lines()
                .filter(|line| !line.is_empty())
                .map(str::to_string)
                .collect(),
        ))
    }

    /// Stores `symbols` as the entry for `unit`, replacing any existing entry.
    ///
    /// Parent directories are created as needed. The entry is written to a
    /// sibling temporary file and renamed into place, so an interrupted write
    /// never leaves a partial entry behind.
    pub fn put(&self, unit: &CompiledUnit, symbols: &[String]) -> Result<(), CacheError> {
        let path = self.entry_path(unit);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| CacheError::Io {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let mut content = String::with_capacity(symbols.iter().map(|s| s.len() + 1).sum());
        for symbol in symbols {
            content.push_str(symbol);
            content.push('\n');
        }

        let tmp = with_suffix(path.clone(), TMP_SUFFIX);
        std::fs::write(&tmp, content).map_err(|e| CacheError::Io {
            path: tmp.clone(),
            source: e,
        })?;
        if let Err(e) = std::fs::rename(&tmp, &path) {
            let _ = std::fs::remove_file(&tmp);
            return Err(CacheError::Io { path, source: e });
        }
        Ok(())
    }
}

/// Appends `.suffix` to a path without replacing an existing extension.
fn with_suffix(path: PathBuf, suffix: &str) -> PathBuf {
    let mut s: OsString = path.into_os_string();
    s.push(".");
    s.push(suffix);
    PathBuf::from(s)
}
