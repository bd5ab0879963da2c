//! `classprune prune`: delete stale class files.
//!
//! 1. Resolve settings from `classprune.toml` and flags
//! 2. Build the dependency graph and compute the out-of-date set
//! 3. Delete every affected class file
//! 4. Print the dependency graph if requested, then the deletion summary

use prune_classfile::ClassFileExtractor;
use prune_engine::AnalysisRun;

use crate::report::{deleted_line, render_dump};
use crate::settings;
use crate::{GlobalArgs, PruneArgs};

/// Runs the `classprune prune` command.
///
/// Returns exit code 0 on success. Deletion failures are reported and only
/// change the exit code to 1 under `--strict`.
pub fn run(args: &PruneArgs, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let settings = settings::resolve(&args.run, global)?;
    let summary = AnalysisRun::new(&settings, ClassFileExtractor::new()).execute()?;

    if let Some(dump) = &summary.dump {
        println!("{}", render_dump(dump, args.run.format));
    }

    for failure in &summary.failures {
        eprintln!(
            "warning: could not delete {}: {}",
            failure.path.display(),
            failure.error
        );
    }

    if !global.quiet {
        eprintln!("{}", deleted_line(&summary));
    }

    Ok(exit_code(args.strict, summary.failures.len()))
}

/// Deletion failures only fail the command under `--strict`.
fn exit_code(strict: bool, failures: usize) -> i32 {
    if strict && failures > 0 {
        1
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failures_fail_only_when_strict() {
        assert_eq!(exit_code(false, 0), 0);
        assert_eq!(exit_code(false, 2), 0);
        assert_eq!(exit_code(true, 0), 0);
        assert_eq!(exit_code(true, 1), 1);
    }
}
