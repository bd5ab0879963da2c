//! Settings resolution: merging file configuration with overrides and validating.

use crate::error::ConfigError;
use crate::types::{Overrides, PruneConfig};
use prune_common::DEFAULT_PLATFORM_PREFIXES;
use std::path::{Path, PathBuf};

/// Validated settings for one analysis run.
///
/// All paths are absolute or relative to the process working directory.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Directories holding source units (at least one).
    pub source_roots: Vec<PathBuf>,
    /// Directories holding compiled artifacts.
    pub output_roots: Vec<PathBuf>,
    /// Dependency cache directory, if caching is enabled.
    pub cache_root: Option<PathBuf>,
    /// Invalidate transitively rather than only direct dependents.
    pub closure: bool,
    /// Report the dependency graph.
    pub dump: bool,
    /// Library classpath; empty disables library staleness checks.
    pub classpath: Vec<PathBuf>,
    /// Namespace prefixes excluded from library resolution.
    pub platform_prefixes: Vec<String>,
}

impl Settings {
    /// Creates settings with defaults for everything except the source roots.
    pub fn new(source_roots: Vec<PathBuf>) -> Self {
        Self {
            output_roots: source_roots.clone(),
            source_roots,
            cache_root: None,
            closure: false,
            dump: false,
            classpath: Vec::new(),
            platform_prefixes: default_prefixes(),
        }
    }
}

fn default_prefixes() -> Vec<String> {
    DEFAULT_PLATFORM_PREFIXES
        .iter()
        .map(|p| p.to_string())
        .collect()
}

/// Merges `overrides` over `config` and validates the result.
///
/// Relative paths from the file resolve against `base_dir`, the directory
/// containing the configuration file. Empty output roots default to the
/// source roots.
pub fn resolve_settings(
    config: PruneConfig,
    overrides: &Overrides,
    base_dir: &Path,
) -> Result<Settings, ConfigError> {
    let anchor = |paths: Vec<PathBuf>| -> Vec<PathBuf> {
        paths.into_iter().map(|p| base_dir.join(p)).collect()
    };

    let source_roots = pick(&overrides.source_roots, anchor(config.source_roots));
    if source_roots.is_empty() {
        return Err(ConfigError::MissingField("source_roots".to_string()));
    }
    if let Some(missing) = source_roots.iter().find(|p| !p.is_dir()) {
        return Err(ConfigError::SourceRootMissing(missing.clone()));
    }

    let mut output_roots = pick(&overrides.output_roots, anchor(config.output_roots));
    if output_roots.is_empty() {
        output_roots = source_roots.clone();
    }

    let cache_root = overrides
        .cache_root
        .clone()
        .or_else(|| config.cache_root.map(|p| base_dir.join(p)));
    if let Some(root) = &cache_root {
        if root.exists() && !root.is_dir() {
            return Err(ConfigError::CacheRootNotDirectory(root.clone()));
        }
    }

    Ok(Settings {
        source_roots,
        output_roots,
        cache_root,
        closure: overrides.closure.unwrap_or(config.closure),
        dump: overrides.dump.unwrap_or(config.dump),
        classpath: pick(&overrides.classpath, anchor(config.classpath)),
        platform_prefixes: config.platform_prefixes.unwrap_or_else(default_prefixes),
    })
}

fn pick(overriding: &[PathBuf], configured: Vec<PathBuf>) -> Vec<PathBuf> {
    if overriding.is_empty() {
        configured
    } else {
        overriding.to_vec()
    }
}
