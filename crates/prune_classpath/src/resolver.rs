//! Symbol-to-library resolution.

use std::path::{Path, PathBuf};

use prune_common::{COMPILED_SUFFIX, SYMBOL_SEPARATOR};

use crate::archive::ArchiveIndex;

/// Maps a symbolic name to the library artifact that supplies it.
pub trait LibraryResolver {
    /// Returns the library artifact providing `symbol`, or `None` if no
    /// classpath entry provides it.
    fn resolve(&self, symbol: &str) -> Option<PathBuf>;
}

impl<T: LibraryResolver + ?Sized> LibraryResolver for &T {
    fn resolve(&self, symbol: &str) -> Option<PathBuf> {
        (**self).resolve(symbol)
    }
}

/// One element of a classpath.
#[derive(Debug)]
pub enum ClasspathEntry {
    /// A directory tree of class files.
    Directory(PathBuf),
    /// A `.jar` or `.zip` archive of class files.
    Archive(ArchiveIndex),
}

impl ClasspathEntry {
    /// Classifies `path` as a directory or archive entry.
    ///
    /// Returns `None` for paths that do not exist or are neither.
    pub fn from_path(path: &Path) -> Option<Self> {
        if path.is_dir() {
            return Some(Self::Directory(path.to_path_buf()));
        }
        let is_archive = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("jar") || e.eq_ignore_ascii_case("zip"));
        if is_archive && path.is_file() {
            Some(Self::Archive(ArchiveIndex::new(path)))
        } else {
            None
        }
    }

    fn lookup(&self, entry_name: &str) -> Option<PathBuf> {
        match self {
            Self::Directory(dir) => {
                let candidate = dir.join(entry_name);
                candidate.is_file().then_some(candidate)
            }
            Self::Archive(index) => index
                .contains(entry_name)
                .then(|| index.path().to_path_buf()),
        }
    }
}

/// Resolves symbols against an ordered list of classpath entries.
///
/// The first entry providing the class wins. For a directory entry the
/// resolved artifact is the class file itself; for an archive it is the
/// archive file.
#[derive(Debug, Default)]
pub struct ClasspathResolver {
    entries: Vec<ClasspathEntry>,
}

impl ClasspathResolver {
    /// Creates a resolver over the given classpath.
    pub fn new(classpath: &[PathBuf]) -> Self {
        let mut resolver = Self::default();
        resolver.set_classpath(classpath);
        resolver
    }

    /// Replaces the classpath. Entries that do not exist or are not
    /// directories or archives are skipped.
    pub fn set_classpath(&mut self, classpath: &[PathBuf]) {
        self.entries = classpath
            .iter()
            .filter_map(|path| {
                let entry = ClasspathEntry::from_path(path);
                if entry.is_none() {
                    tracing::warn!(path = %path.display(), "ignoring classpath entry");
                }
                entry
            })
            .collect();
    }

    /// Returns the active classpath entries.
    pub fn entries(&self) -> &[ClasspathEntry] {
        &self.entries
    }
}

impl LibraryResolver for ClasspathResolver {
    fn resolve(&self, symbol: &str) -> Option<PathBuf> {
        let entry_name = format!(
            "{}.{COMPILED_SUFFIX}",
            symbol.replace(SYMBOL_SEPARATOR, "/")
        );
        self.entries.iter().find_map(|e| e.lookup(&entry_name))
    }
}
