//! Rendering of run summaries and graph dumps.

use std::path::PathBuf;

use prune_engine::{GraphDump, RunSummary};
use serde::Serialize;

use crate::ReportFormat;

/// One out-of-date unit in a JSON report.
#[derive(Debug, Serialize)]
struct StaleEntry<'a> {
    unit: &'a str,
    reason: String,
}

/// JSON shape of a run summary.
#[derive(Debug, Serialize)]
struct SummaryReport<'a> {
    dry_run: bool,
    out_of_date: Vec<StaleEntry<'a>>,
    removed: &'a [PathBuf],
    failures: Vec<FailureEntry>,
    elapsed_ms: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    dependencies: Option<&'a GraphDump>,
}

#[derive(Debug, Serialize)]
struct FailureEntry {
    path: PathBuf,
    error: String,
}

/// The line printed after a run, e.g. `Deleted 2 out of date files in 0.013s`.
pub fn deleted_line(summary: &RunSummary) -> String {
    let verb = if summary.dry_run { "Would delete" } else { "Deleted" };
    format!(
        "{verb} {} out of date files in {:.3}s",
        summary.removed_count(),
        summary.elapsed.as_secs_f64()
    )
}

/// Renders the graph dump in `format`.
pub fn render_dump(dump: &GraphDump, format: ReportFormat) -> String {
    match format {
        ReportFormat::Text => dump.to_string(),
        ReportFormat::Json => {
            serde_json::to_string_pretty(dump).unwrap_or_else(|_| "{}".to_string())
        }
    }
}

/// Renders a status report: the out-of-date units and the artifacts removed
/// or to be removed.
pub fn render_status(summary: &RunSummary, format: ReportFormat) -> String {
    match format {
        ReportFormat::Text => {
            let mut out = String::new();
            if summary.out_of_date.is_empty() {
                out.push_str("All units up to date\n");
            } else {
                out.push_str("Out of date:\n");
                for (id, reason) in summary.out_of_date.iter() {
                    out.push_str(&format!("  {id} ({reason})\n"));
                }
            }
            if !summary.removed.is_empty() {
                let heading = if summary.dry_run { "Would delete" } else { "Deleted" };
                out.push_str(&format!("{heading}:\n"));
                for path in &summary.removed {
                    out.push_str(&format!("  {}\n", path.display()));
                }
            }
            if let Some(dump) = &summary.dump {
                out.push_str(&dump.to_string());
            }
            out
        }
        ReportFormat::Json => {
            let report = SummaryReport {
                dry_run: summary.dry_run,
                out_of_date: summary
                    .out_of_date
                    .iter()
                    .map(|(unit, reason)| StaleEntry {
                        unit,
                        reason: reason.to_string(),
                    })
                    .collect(),
                removed: &summary.removed,
                failures: summary
                    .failures
                    .iter()
                    .map(|f| FailureEntry {
                        path: f.path.clone(),
                        error: f.error.to_string(),
                    })
                    .collect(),
                elapsed_ms: u64::try_from(summary.elapsed.as_millis()).unwrap_or(u64::MAX),
                dependencies: summary.dump.as_ref(),
            };
            serde_json::to_string_pretty(&report).unwrap_or_else(|_| "{}".to_string())
        }
    }
}
