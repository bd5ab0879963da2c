//! Compiled-unit and source-unit discovery.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use prune_common::{identity_from_relative, CompiledUnit, SOURCE_SUFFIX};
use walkdir::WalkDir;

/// A source file found under a source root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceUnit {
    /// Identity of the unit the source compiles to.
    pub id: String,
    /// Path of the source file.
    pub path: PathBuf,
}

/// Recursively lists regular files under `root` in a stable order.
///
/// Unreadable subtrees contribute no entries.
fn files_under(root: &Path) -> impl Iterator<Item = PathBuf> + '_ {
    WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_map(move |entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                tracing::debug!(root = %root.display(), "skipping unreadable entry: {e}");
                None
            }
        })
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
}

/// Finds every compiled artifact under the given output roots.
///
/// Returns one record per identity. If an identity occurs under several
/// roots, the one found last (in root order) wins.
pub fn scan_compiled_units(roots: &[PathBuf]) -> BTreeMap<String, CompiledUnit> {
    let mut units = BTreeMap::new();
    for root in roots {
        for path in files_under(root) {
            let Some(unit) = CompiledUnit::from_artifact(root, &path) else {
                continue;
            };
            if let Some(previous) = units.insert(unit.id.clone(), unit) {
                tracing::debug!(
                    unit = %previous.id,
                    shadowed = %previous.absolute.display(),
                    "compiled unit found under more than one output root"
                );
            }
        }
    }
    tracing::debug!(count = units.len(), "scanned compiled units");
    units
}

/// Finds every source unit under the given source roots, sorted by identity.
pub fn scan_source_units(roots: &[PathBuf]) -> Vec<SourceUnit> {
    let mut sources = Vec::new();
    for root in roots {
        for path in files_under(root) {
            let Ok(relative) = path.strip_prefix(root) else {
                continue;
            };
            if let Some((_, id)) = identity_from_relative(relative, SOURCE_SUFFIX) {
                sources.push(SourceUnit { id, path });
            }
        }
    }
    sources.sort_by(|a, b| a.id.cmp(&b.id));
    sources
}
