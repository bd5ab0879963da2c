//! Parsing and validation of `classprune.toml` configuration files.
//!
//! This crate reads the optional configuration file, overlays command-line
//! overrides, and produces validated [`Settings`] for one analysis run.

#![warn(missing_docs)]

pub mod error;
pub mod loader;
pub mod resolve;
pub mod types;

pub use error::ConfigError;
pub use loader::{find_config, load_config, load_config_from_str, CONFIG_FILE};
pub use resolve::{resolve_settings, Settings};
pub use types::{Overrides, PruneConfig};
