//! The analysis-and-invalidation pipeline.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use prune_cache::DependencyCache;
use prune_classfile::ReferenceExtractor;
use prune_classpath::{ClasspathResolver, LibraryResolver};
use prune_config::Settings;

use crate::dump::GraphDump;
use crate::error::EngineError;
use crate::graph::{DependencyGraph, GraphStats};
use crate::invalidate::{InvalidationReport, Invalidator, RemovalFailure};
use crate::library::LibraryDependencies;
use crate::scan::{scan_compiled_units, scan_source_units};
use crate::stale::{find_out_of_date, OutOfDate};

/// Everything computed before invalidation.
#[derive(Debug)]
pub struct Analysis {
    /// Forward and affected-by maps.
    pub graph: DependencyGraph,
    /// Library dependencies, when a resolver is configured.
    pub libraries: Option<LibraryDependencies>,
    /// The units found out of date.
    pub out_of_date: OutOfDate,
    /// Cache hits versus extractions while building the graph.
    pub stats: GraphStats,
}

/// Outcome of one run.
#[derive(Debug)]
pub struct RunSummary {
    /// The units found out of date.
    pub out_of_date: OutOfDate,
    /// Artifacts removed, or that would be removed in a dry run.
    pub removed: Vec<PathBuf>,
    /// Artifacts whose deletion failed.
    pub failures: Vec<RemovalFailure>,
    /// Wall time of the whole run.
    pub elapsed: Duration,
    /// Graph snapshot, when dumping is enabled.
    pub dump: Option<GraphDump>,
    /// Cache hits versus extractions.
    pub stats: GraphStats,
    /// `true` if nothing was deleted on purpose.
    pub dry_run: bool,
}

impl RunSummary {
    /// Returns the number of artifacts removed.
    pub fn removed_count(&self) -> usize {
        self.removed.len()
    }
}

/// One analysis run over a set of settings.
pub struct AnalysisRun<'a, X> {
    settings: &'a Settings,
    extractor: X,
    resolver: Option<Box<dyn LibraryResolver + 'a>>,
}

impl<'a, X: ReferenceExtractor> AnalysisRun<'a, X> {
    /// Creates a run; a non-empty classpath enables library resolution.
    pub fn new(settings: &'a Settings, extractor: X) -> Self {
        let resolver = (!settings.classpath.is_empty()).then(|| {
            Box::new(ClasspathResolver::new(&settings.classpath)) as Box<dyn LibraryResolver + 'a>
        });
        Self {
            settings,
            extractor,
            resolver,
        }
    }

    /// Replaces the library resolver.
    pub fn with_resolver(mut self, resolver: impl LibraryResolver + 'a) -> Self {
        self.resolver = Some(Box::new(resolver));
        self
    }

    /// Builds the graph and computes the out-of-date set without touching artifacts.
    pub fn analyze(&self) -> Result<Analysis, EngineError> {
        let settings = self.settings;
        let units = scan_compiled_units(&settings.output_roots);
        let cache = settings.cache_root.as_deref().map(DependencyCache::new);
        let (graph, stats) = DependencyGraph::build(units, cache.as_ref(), &self.extractor)?;
        tracing::debug!(
            units = graph.len(),
            cached = stats.cached,
            extracted = stats.extracted,
            "built dependency graph"
        );

        let libraries = self.resolver.as_deref().map(|resolver| {
            LibraryDependencies::resolve(&graph, resolver, settings.platform_prefixes.as_slice())
        });

        let sources = scan_source_units(&settings.source_roots);
        let out_of_date = find_out_of_date(&sources, &graph, libraries.as_ref());

        Ok(Analysis {
            graph,
            libraries,
            out_of_date,
            stats,
        })
    }

    /// Runs the full pipeline and deletes every affected artifact.
    pub fn execute(&self) -> Result<RunSummary, EngineError> {
        self.run(false)
    }

    /// Runs the full pipeline, recording what would be deleted.
    pub fn plan(&self) -> Result<RunSummary, EngineError> {
        self.run(true)
    }

    fn run(&self, dry_run: bool) -> Result<RunSummary, EngineError> {
        let start = Instant::now();
        let analysis = self.analyze()?;

        let InvalidationReport { removed, failures } = Invalidator::new(self.settings.closure)
            .dry_run(dry_run)
            .invalidate(&analysis.graph, &analysis.out_of_date);

        let dump = self
            .settings
            .dump
            .then(|| GraphDump::new(&analysis.graph, analysis.libraries.as_ref()));

        let summary = RunSummary {
            out_of_date: analysis.out_of_date,
            removed,
            failures,
            elapsed: start.elapsed(),
            dump,
            stats: analysis.stats,
            dry_run,
        };
        tracing::info!(
            out_of_date = summary.out_of_date.len(),
            removed = summary.removed.len(),
            failures = summary.failures.len(),
            dry_run,
            elapsed_ms = u64::try_from(summary.elapsed.as_millis()).unwrap_or(u64::MAX),
            "run complete"
        );
        Ok(summary)
    }
}
