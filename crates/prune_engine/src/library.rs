//! Library dependency map construction.

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::path::PathBuf;

use prune_classpath::LibraryResolver;
use prune_common::is_platform_symbol;

use crate::graph::DependencyGraph;

/// Unit identity → library artifacts supplying at least one referenced symbol.
///
/// Only units with at least one library dependency have an entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LibraryDependencies {
    map: BTreeMap<String, BTreeSet<PathBuf>>,
}

impl LibraryDependencies {
    /// Resolves the non-local, non-platform references of every unit.
    ///
    /// Symbols naming a scanned unit or starting with one of
    /// `platform_prefixes` are skipped. Each symbol is resolved at most once.
    pub fn resolve<R, S>(graph: &DependencyGraph, resolver: &R, platform_prefixes: &[S]) -> Self
    where
        R: LibraryResolver + ?Sized,
        S: AsRef<str>,
    {
        let mut resolved: HashMap<&str, Option<PathBuf>> = HashMap::new();
        let mut map = BTreeMap::new();

        for (id, refs) in graph.forward() {
            let mut libraries = BTreeSet::new();
            for symbol in refs {
                if graph.contains(symbol) || is_platform_symbol(symbol, platform_prefixes) {
                    continue;
                }
                let library = resolved
                    .entry(symbol.as_str())
                    .or_insert_with(|| resolver.resolve(symbol));
                if let Some(library) = library {
                    libraries.insert(library.clone());
                }
            }
            if !libraries.is_empty() {
                map.insert(id.clone(), libraries);
            }
        }

        tracing::debug!(
            symbols = resolved.len(),
            units = map.len(),
            "resolved library dependencies"
        );
        Self { map }
    }

    /// Returns the library artifacts unit `id` depends on.
    pub fn get(&self, id: &str) -> Option<&BTreeSet<PathBuf>> {
        self.map.get(id)
    }

    /// Returns all entries, ordered by unit identity.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &BTreeSet<PathBuf>)> {
        self.map.iter()
    }

    /// Returns the number of units with library dependencies.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns `true` if no unit has library dependencies.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
