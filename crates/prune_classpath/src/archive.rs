//! Entry-name index of a library archive.

use std::cell::OnceCell;
use std::collections::HashSet;
use std::fs::File;
use std::path::{Path, PathBuf};

/// Lazily-loaded set of entry names inside a `.jar` or `.zip` archive.
///
/// The archive's central directory is read on the first lookup. An archive
/// that cannot be opened is logged once and treated as empty.
#[derive(Debug)]
pub struct ArchiveIndex {
    path: PathBuf,
    names: OnceCell<HashSet<String>>,
}

impl ArchiveIndex {
    /// Creates an index for the archive at `path` without reading it.
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
            names: OnceCell::new(),
        }
    }

    /// Returns the archive path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns `true` if the archive contains an entry named `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.names.get_or_init(|| self.load()).contains(name)
    }

    fn load(&self) -> HashSet<String> {
        let archive = File::open(&self.path)
            .map_err(|e| e.to_string())
            .and_then(|f| zip::ZipArchive::new(f).map_err(|e| e.to_string()));
        match archive {
            Ok(archive) => {
                let names: HashSet<String> = archive.file_names().map(str::to_string).collect();
                tracing::debug!(
                    archive = %self.path.display(),
                    entries = names.len(),
                    "indexed classpath archive"
                );
                names
            }
            Err(e) => {
                tracing::warn!(
                    archive = %self.path.display(),
                    "skipping unreadable classpath archive: {e}"
                );
                HashSet::new()
            }
        }
    }
}
