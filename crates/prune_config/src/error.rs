//! Error types for configuration loading and validation.

use std::path::PathBuf;

/// Errors that can occur when loading or validating the configuration.
///
/// All of these are fatal and are reported before any analysis work begins.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// An I/O error occurred while reading the configuration file.
    #[error("failed to read configuration: {0}")]
    IoError(#[from] std::io::Error),

    /// The TOML content could not be parsed.
    #[error("failed to parse configuration: {0}")]
    ParseError(String),

    /// A required field is missing from the configuration.
    #[error("missing required field: {0}")]
    MissingField(String),

    /// A configured source root does not exist or is not a directory.
    #[error("source root {0} does not exist or is not a directory")]
    SourceRootMissing(PathBuf),

    /// The cache root exists but is not a directory.
    #[error("cache root {0} exists but is not a directory")]
    CacheRootNotDirectory(PathBuf),
}
