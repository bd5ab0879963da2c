//! Configuration types deserialized from `classprune.toml`.

use serde::Deserialize;
use std::path::PathBuf;

/// The configuration file contents.
///
/// Every field is optional in the file; command-line [`Overrides`] are
/// layered on top before validation.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PruneConfig {
    /// Directories holding source units.
    #[serde(default)]
    pub source_roots: Vec<PathBuf>,
    /// Directories holding compiled artifacts. Defaults to the source roots.
    #[serde(default)]
    pub output_roots: Vec<PathBuf>,
    /// Directory for dependency cache entries. Caching is off when unset.
    #[serde(default)]
    pub cache_root: Option<PathBuf>,
    /// Invalidate transitively rather than only direct dependents.
    #[serde(default)]
    pub closure: bool,
    /// Report the dependency graph.
    #[serde(default)]
    pub dump: bool,
    /// Library classpath. Library staleness checks are off when empty.
    #[serde(default)]
    pub classpath: Vec<PathBuf>,
    /// Namespace prefixes excluded from library resolution.
    #[serde(default)]
    pub platform_prefixes: Option<Vec<String>>,
}

/// Values supplied on the command line that replace file settings.
///
/// Non-empty lists replace the corresponding list; `Some` flags replace the
/// corresponding flag.
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    /// Replacement source roots.
    pub source_roots: Vec<PathBuf>,
    /// Replacement output roots.
    pub output_roots: Vec<PathBuf>,
    /// Replacement cache root.
    pub cache_root: Option<PathBuf>,
    /// Replacement closure flag.
    pub closure: Option<bool>,
    /// Replacement dump flag.
    pub dump: Option<bool>,
    /// Replacement classpath.
    pub classpath: Vec<PathBuf>,
}
