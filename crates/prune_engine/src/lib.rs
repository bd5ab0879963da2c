//! Stale compiled-artifact detection and removal.
//!
//! One [`AnalysisRun`] performs the whole pass:
//!
//! 1. Scan output roots for compiled units
//! 2. Build the forward dependency map (from the cache or by extraction) and
//!    invert it into the affected-by map
//! 3. Resolve library dependencies when a classpath is configured
//! 4. Compute the out-of-date set from source, artifact, and library timestamps
//! 5. Delete every compiled artifact affected by an out-of-date unit
//!
//! Nothing is retained between runs except the on-disk dependency cache.

#![warn(missing_docs)]

pub mod dump;
pub mod error;
pub mod graph;
pub mod invalidate;
pub mod library;
pub mod run;
pub mod scan;
pub mod stale;

pub use dump::GraphDump;
pub use error::EngineError;
pub use graph::{DependencyGraph, GraphStats};
pub use invalidate::{InvalidationReport, Invalidator, RemovalFailure};
pub use library::LibraryDependencies;
pub use run::{Analysis, AnalysisRun, RunSummary};
pub use scan::{scan_compiled_units, scan_source_units, SourceUnit};
pub use stale::{find_out_of_date, OutOfDate, StaleReason};
