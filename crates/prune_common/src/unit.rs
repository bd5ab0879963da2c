//! Identity records for compiled units.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::naming::{identity_from_relative, COMPILED_SUFFIX};

/// A compiled artifact found under an output root.
///
/// Created during scanning and read-only afterwards. The relative location
/// doubles as the cache-file path for the unit's dependency entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompiledUnit {
    /// Fully-qualified, dot-separated identity (e.g. `a.b.Outer$Inner`).
    pub id: String,

    /// Absolute path of the compiled artifact.
    pub absolute: PathBuf,

    /// Path relative to the output root, with the suffix stripped.
    pub relative: PathBuf,
}

impl CompiledUnit {
    /// Builds the record for a compiled artifact at `absolute` under `root`.
    ///
    /// Returns `None` if the file is not under `root` or is not a compiled
    /// artifact by name.
    pub fn from_artifact(root: &Path, absolute: &Path) -> Option<Self> {
        let relative = absolute.strip_prefix(root).ok()?;
        let (relative, id) = identity_from_relative(relative, COMPILED_SUFFIX)?;
        Some(Self {
            id,
            absolute: absolute.to_path_buf(),
            relative,
        })
    }

    /// Returns `true` if the compiled artifact is still present on disk.
    pub fn exists(&self) -> bool {
        self.absolute.is_file()
    }
}
