//! Configuration file discovery and loading.

use crate::error::ConfigError;
use crate::types::PruneConfig;
use std::path::{Path, PathBuf};

/// Name of the configuration file.
pub const CONFIG_FILE: &str = "classprune.toml";

/// Walks up from `start` looking for the nearest `classprune.toml`.
///
/// Returns the path of the file, or `None` if no ancestor directory has one.
pub fn find_config(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .map(|dir| dir.join(CONFIG_FILE))
        .find(|candidate| candidate.is_file())
}

/// Loads a configuration file.
pub fn load_config(path: &Path) -> Result<PruneConfig, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    load_config_from_str(&content)
}

/// Parses a configuration from a string.
///
/// Useful for testing without filesystem dependencies.
pub fn load_config_from_str(content: &str) -> Result<PruneConfig, ConfigError> {
    toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))
}
