//! `classprune status`: report what `prune` would delete, deleting nothing.

use prune_classfile::ClassFileExtractor;
use prune_engine::AnalysisRun;

use crate::report::render_status;
use crate::settings;
use crate::{GlobalArgs, RunArgs};

/// Runs the `classprune status` command.
pub fn run(args: &RunArgs, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let settings = settings::resolve(args, global)?;
    let summary = AnalysisRun::new(&settings, ClassFileExtractor::new()).plan()?;
    print!("{}", render_status(&summary, args.format));
    Ok(0)
}
