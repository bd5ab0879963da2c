//! classprune: removes compiled classes made stale by source or library changes.
//!
//! Provides `classprune prune` to delete every out-of-date class file and its
//! dependents, and `classprune status` to report what would be deleted.

#![warn(missing_docs)]

mod logging;
mod prune;
mod report;
mod settings;
mod status;

use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// classprune: stale class-file removal for incremental builds.
#[derive(Parser, Debug)]
#[command(name = "classprune", version, about = "Stale class-file pruner")]
pub struct Cli {
    /// Suppress all output except errors.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Enable verbose (debug-level) output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to a `classprune.toml` configuration file.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// The subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Delete out-of-date class files and the classes affected by them.
    Prune(PruneArgs),
    /// Report out-of-date units and what `prune` would delete.
    Status(RunArgs),
}

/// Settings shared by `prune` and `status`.
#[derive(Args, Debug, Default)]
pub struct RunArgs {
    /// Source root directory (repeatable). Replaces `source_roots`.
    #[arg(long, value_name = "DIR")]
    pub srcdir: Vec<PathBuf>,

    /// Class output directory (repeatable). Replaces `output_roots`.
    #[arg(long, value_name = "DIR")]
    pub destdir: Vec<PathBuf>,

    /// Dependency cache directory.
    #[arg(long, value_name = "DIR")]
    pub cache: Option<PathBuf>,

    /// Follow dependents transitively.
    #[arg(long)]
    pub closure: bool,

    /// Print the dependency graph.
    #[arg(long)]
    pub dump: bool,

    /// Library classpath entry, a directory or archive (repeatable).
    #[arg(long, value_name = "PATH")]
    pub classpath: Vec<PathBuf>,

    /// Output format for reports and the dependency graph.
    #[arg(short, long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,
}

/// Arguments for the `classprune prune` subcommand.
#[derive(Args, Debug, Default)]
pub struct PruneArgs {
    /// Shared run settings.
    #[command(flatten)]
    pub run: RunArgs,

    /// Exit with status 1 if any class file could not be deleted.
    #[arg(long)]
    pub strict: bool,
}

/// Report output format.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Human-readable terminal output.
    #[default]
    Text,
    /// Machine-readable JSON output.
    Json,
}

/// Global settings derived from CLI flags.
pub struct GlobalArgs {
    /// Whether to suppress non-error output.
    pub quiet: bool,
    /// Whether to print verbose/debug information.
    pub verbose: bool,
    /// Optional path to a configuration file.
    pub config: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    let global = GlobalArgs {
        quiet: cli.quiet,
        verbose: cli.verbose,
        config: cli.config,
    };
    logging::init(&global);

    let result = match cli.command {
        Command::Prune(ref args) => prune::run(args, &global),
        Command::Status(ref args) => status::run(args, &global),
    };

    match result {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    }
}
