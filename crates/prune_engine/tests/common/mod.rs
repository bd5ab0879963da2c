//! Shared fixtures for engine integration tests.
//!
//! Compiled artifacts in these tests are plain text: each line names one
//! referenced symbol, read back by [`LineExtractor`].

#![allow(dead_code)]

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{Duration, SystemTime};

use prune_classfile::ReferenceExtractor;
use prune_classpath::LibraryResolver;
use prune_config::Settings;
use tempfile::TempDir;

/// Reads one reference per line and counts how often it is called.
#[derive(Debug, Default)]
pub struct LineExtractor {
    calls: AtomicUsize,
}

impl LineExtractor {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl ReferenceExtractor for LineExtractor {
    type Error = std::str::Utf8Error;

    fn extract(&self, bytes: &[u8]) -> Result<Vec<String>, Self::Error> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let text = std::str::from_utf8(bytes)?;
        Ok(text
            .lines()
            .filter(|l| !l.is_empty())
            .map(str::to_string)
            .collect())
    }
}

/// Resolves symbols from a fixed table.
#[derive(Debug, Default)]
pub struct TableResolver {
    table: HashMap<String, PathBuf>,
}

impl TableResolver {
    pub fn with(mut self, symbol: &str, library: &Path) -> Self {
        self.table.insert(symbol.to_string(), library.to_path_buf());
        self
    }
}

impl LibraryResolver for TableResolver {
    fn resolve(&self, symbol: &str) -> Option<PathBuf> {
        self.table.get(symbol).cloned()
    }
}

/// A temporary project with `src/`, `out/` and `cache/` directories.
///
/// Timestamps are set relative to a fixed base an hour in the past, so
/// anything written during the test (cache entries) is newer than every
/// fixture file.
pub struct Project {
    pub dir: TempDir,
    base: SystemTime,
}

impl Project {
    pub fn new() -> Self {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("src")).unwrap();
        fs::create_dir_all(dir.path().join("out")).unwrap();
        Self {
            dir,
            base: SystemTime::now() - Duration::from_secs(3600),
        }
    }

    pub fn src(&self) -> PathBuf {
        self.dir.path().join("src")
    }

    pub fn out(&self) -> PathBuf {
        self.dir.path().join("out")
    }

    pub fn cache(&self) -> PathBuf {
        self.dir.path().join("cache")
    }

    /// Settings over `src/` and `out/` with no cache and no classpath.
    pub fn settings(&self) -> Settings {
        let mut settings = Settings::new(vec![self.src()]);
        settings.output_roots = vec![self.out()];
        settings
    }

    /// Path of the source file for `id`.
    pub fn source_path(&self, id: &str) -> PathBuf {
        self.src().join(format!("{}.java", id.replace('.', "/")))
    }

    /// Path of the compiled artifact for `id`.
    pub fn class_path(&self, id: &str) -> PathBuf {
        self.out().join(format!("{}.class", id.replace('.', "/")))
    }

    /// Writes the source for `id`, timestamped `offset` seconds after the base.
    pub fn source(&self, id: &str, offset: i64) -> PathBuf {
        let path = self.source_path(id);
        self.write(&path, format!("class {id} {{}}\n").as_bytes(), offset);
        path
    }

    /// Writes the compiled artifact for `id` referencing `refs`, timestamped
    /// at the base.
    pub fn compiled(&self, id: &str, refs: &[&str]) -> PathBuf {
        let path = self.class_path(id);
        let body: String = refs.iter().map(|r| format!("{r}\n")).collect();
        self.write(&path, body.as_bytes(), 0);
        path
    }

    /// Writes a source older than its artifact, so the unit starts up to date.
    pub fn unit(&self, id: &str, refs: &[&str]) {
        self.source(id, -10);
        self.compiled(id, refs);
    }

    /// Writes `bytes` to `path`, timestamped `offset` seconds after the base.
    pub fn write(&self, path: &Path, bytes: &[u8], offset: i64) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, bytes).unwrap();
        self.touch(path, offset);
    }

    /// Sets the modification time of `path` to `offset` seconds after the base.
    pub fn touch(&self, path: &Path, offset: i64) {
        let when = if offset >= 0 {
            self.base + Duration::from_secs(offset as u64)
        } else {
            self.base - Duration::from_secs(offset.unsigned_abs())
        };
        fs::File::options()
            .write(true)
            .open(path)
            .unwrap()
            .set_modified(when)
            .unwrap();
    }
}

/// Returns the sorted file names (without directories) of `paths`.
pub fn names(paths: &[PathBuf]) -> Vec<String> {
    let mut names: Vec<String> = paths
        .iter()
        .filter_map(|p| p.file_name())
        .map(|n| n.to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
