//! Diagnostic view of a dependency graph.

use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

use crate::graph::DependencyGraph;
use crate::library::LibraryDependencies;

/// Serializable snapshot of the forward, affected-by, and library maps.
#[derive(Debug, Clone, Default, Serialize)]
pub struct GraphDump {
    /// Unit → referenced symbols.
    pub dependencies: BTreeMap<String, Vec<String>>,
    /// Symbol → units referencing it, restricted to scanned units.
    pub affected_by: BTreeMap<String, Vec<String>>,
    /// Unit → library artifacts.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub libraries: BTreeMap<String, Vec<PathBuf>>,
}

impl GraphDump {
    /// Captures `graph` and, if present, its library dependencies.
    pub fn new(graph: &DependencyGraph, libraries: Option<&LibraryDependencies>) -> Self {
        let affected_by = graph
            .affected_by_map()
            .keys()
            .filter_map(|symbol| {
                let ids: Vec<String> = graph.affected_by(symbol).map(|u| u.id.clone()).collect();
                (graph.contains(symbol) && !ids.is_empty()).then(|| (symbol.clone(), ids))
            })
            .collect();

        let libraries = libraries
            .map(|libs| {
                libs.iter()
                    .map(|(id, paths)| (id.clone(), paths.iter().cloned().collect()))
                    .collect()
            })
            .unwrap_or_default();

        Self {
            dependencies: graph.forward().clone(),
            affected_by,
            libraries,
        }
    }
}

impl fmt::Display for GraphDump {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Class dependencies:")?;
        for (id, refs) in &self.dependencies {
            writeln!(f, "  {id}")?;
            for r in refs {
                writeln!(f, "    -> {r}")?;
            }
        }
        writeln!(f, "Affected by:")?;
        for (symbol, ids) in &self.affected_by {
            writeln!(f, "  {symbol}")?;
            for id in ids {
                writeln!(f, "    <- {id}")?;
            }
        }
        if !self.libraries.is_empty() {
            writeln!(f, "Library dependencies:")?;
            for (id, paths) in &self.libraries {
                writeln!(f, "  {id}")?;
                for p in paths {
                    writeln!(f, "    => {}", p.display())?;
                }
            }
        }
        Ok(())
    }
}
