//! Affected-set invalidation.

use std::collections::HashSet;
use std::io;
use std::path::{Path, PathBuf};

use prune_common::{enclosing_unit, CompiledUnit};

use crate::graph::DependencyGraph;
use crate::stale::OutOfDate;

/// A compiled artifact that could not be deleted.
#[derive(Debug)]
pub struct RemovalFailure {
    /// The artifact path.
    pub path: PathBuf,
    /// The deletion error.
    pub error: io::Error,
}

/// Outcome of one invalidation pass.
#[derive(Debug, Default)]
pub struct InvalidationReport {
    /// Artifacts removed (or, in a dry run, that would be removed), in order.
    pub removed: Vec<PathBuf>,
    /// Artifacts whose deletion failed.
    pub failures: Vec<RemovalFailure>,
}

impl InvalidationReport {
    /// Returns the number of artifacts removed.
    pub fn removed_count(&self) -> usize {
        self.removed.len()
    }
}

/// Deletes the compiled artifacts affected by out-of-date units.
///
/// With `closure` off, only direct dependents of each out-of-date unit are
/// removed, plus the enclosing unit of any nested dependent or nested
/// out-of-date unit, since removing a nested unit alone would not make the
/// build tool recompile its source.
/// With `closure` on, dependents are followed transitively; each unit is
/// expanded at most once per pass, so dependency cycles terminate. Finally,
/// the out-of-date units' own artifacts are removed.
#[derive(Debug, Clone, Copy, Default)]
pub struct Invalidator {
    closure: bool,
    dry_run: bool,
}

impl Invalidator {
    /// Creates an invalidator that deletes artifacts.
    pub fn new(closure: bool) -> Self {
        Self {
            closure,
            dry_run: false,
        }
    }

    /// Records what would be removed instead of deleting anything.
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Runs one invalidation pass.
    pub fn invalidate(&self, graph: &DependencyGraph, out_of_date: &OutOfDate) -> InvalidationReport {
        self.invalidate_with(graph, out_of_date, |path| std::fs::remove_file(path))
    }

    /// Runs one invalidation pass, deleting each artifact with `remove`.
    pub(crate) fn invalidate_with<F>(
        &self,
        graph: &DependencyGraph,
        out_of_date: &OutOfDate,
        remove: F,
    ) -> InvalidationReport
    where
        F: FnMut(&Path) -> io::Result<()>,
    {
        let mut sweep = Sweep::new(self.dry_run, remove);
        let mut expanded: HashSet<&str> = HashSet::new();

        for root in out_of_date.ids() {
            let mut worklist = vec![root];
            while let Some(id) = worklist.pop() {
                if !expanded.insert(id) {
                    continue;
                }
                for affected in graph.affected_by(id) {
                    tracing::debug!(unit = %affected.id, cause = %id, "affected");
                    sweep.remove(affected);

                    if self.closure {
                        worklist.push(&affected.id);
                    } else {
                        sweep.remove_enclosing(graph, affected);
                    }
                }
            }
        }

        for root in out_of_date.ids() {
            if let Some(unit) = graph.unit(root) {
                sweep.remove(unit);
                if !self.closure {
                    sweep.remove_enclosing(graph, unit);
                }
            }
        }

        sweep.report
    }
}

/// Removal bookkeeping for one pass: every artifact is attempted at most once.
struct Sweep<F> {
    dry_run: bool,
    delete: F,
    attempted: HashSet<PathBuf>,
    report: InvalidationReport,
}

impl<F: FnMut(&Path) -> io::Result<()>> Sweep<F> {
    fn new(dry_run: bool, remove: F) -> Self {
        Self {
            dry_run,
            delete: remove,
            attempted: HashSet::new(),
            report: InvalidationReport::default(),
        }
    }

    fn remove_enclosing(&mut self, graph: &DependencyGraph, nested: &CompiledUnit) {
        if let Some(enclosing) = enclosing_unit(&nested.id).and_then(|e| graph.unit(e)) {
            tracing::debug!(unit = %enclosing.id, nested = %nested.id, "enclosing unit");
            self.remove(enclosing);
        }
    }

    fn remove(&mut self, unit: &CompiledUnit) {
        if !self.attempted.insert(unit.absolute.clone()) || !unit.exists() {
            return;
        }
        if self.dry_run {
            self.report.removed.push(unit.absolute.clone());
            return;
        }
        match (self.delete)(unit.absolute.as_path()) {
            Ok(()) => {
                tracing::debug!(unit = %unit.id, path = %unit.absolute.display(), "deleted");
                self.report.removed.push(unit.absolute.clone());
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => {
                tracing::warn!(path = %unit.absolute.display(), "failed to delete: {e}");
                self.report.failures.push(RemovalFailure {
                    path: unit.absolute.clone(),
                    error: e,
                });
            }
        }
    }
}
