//! Settings resolution shared by all subcommands.
//!
//! The configuration file is the one given with `--config`, otherwise the
//! nearest `classprune.toml` above the working directory. Paths in the file
//! are relative to the file; paths on the command line are relative to the
//! working directory.

use std::path::{Path, PathBuf};

use prune_config::{
    find_config, load_config, resolve_settings, ConfigError, Overrides, PruneConfig, Settings,
};

use crate::{GlobalArgs, RunArgs};

/// Resolves the settings for one run.
pub fn resolve(args: &RunArgs, global: &GlobalArgs) -> Result<Settings, ConfigError> {
    let cwd = std::env::current_dir()?;
    resolve_in(args, global.config.as_deref(), &cwd)
}

fn resolve_in(
    args: &RunArgs,
    config: Option<&Path>,
    cwd: &Path,
) -> Result<Settings, ConfigError> {
    let (config, base_dir) = load(config, cwd)?;
    resolve_settings(config, &overrides(args, cwd), &base_dir)
}

/// Loads the configuration file and returns it with the directory its paths
/// are relative to.
fn load(explicit: Option<&Path>, cwd: &Path) -> Result<(PruneConfig, PathBuf), ConfigError> {
    let path = match explicit {
        Some(path) => Some(cwd.join(path)),
        None => find_config(cwd),
    };
    match path {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading configuration");
            let config = load_config(&path)?;
            let base_dir = path
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| cwd.to_path_buf());
            Ok((config, base_dir))
        }
        None => Ok((PruneConfig::default(), cwd.to_path_buf())),
    }
}

fn overrides(args: &RunArgs, cwd: &Path) -> Overrides {
    let anchor = |paths: &[PathBuf]| -> Vec<PathBuf> { paths.iter().map(|p| cwd.join(p)).collect() };
    Overrides {
        source_roots: anchor(&args.srcdir),
        output_roots: anchor(&args.destdir),
        cache_root: args.cache.as_ref().map(|p| cwd.join(p)),
        closure: args.closure.then_some(true),
        dump: args.dump.then_some(true),
        classpath: anchor(&args.classpath),
    }
}
