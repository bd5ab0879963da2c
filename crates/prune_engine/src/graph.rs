//! Forward and affected-by dependency maps.

use std::collections::{BTreeMap, BTreeSet};

use prune_cache::DependencyCache;
use prune_classfile::ReferenceExtractor;
use prune_common::CompiledUnit;

use crate::error::EngineError;

/// How the reference lists of one graph were obtained.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GraphStats {
    /// Units whose references came from the dependency cache.
    pub cached: usize,
    /// Units whose references were extracted from the artifact.
    pub extracted: usize,
}

/// The dependency graph of one analysis run.
///
/// Holds the scanned units, the forward map (unit → referenced symbols, one
/// entry per scanned unit), and its inverse, the affected-by map
/// (symbol → units referencing it). Affected-by keys may name symbols with
/// no local compiled unit; those never lead to deletions.
#[derive(Debug, Clone, Default)]
pub struct DependencyGraph {
    units: BTreeMap<String, CompiledUnit>,
    forward: BTreeMap<String, Vec<String>>,
    affected_by: BTreeMap<String, BTreeSet<String>>,
}

impl DependencyGraph {
    /// Builds the graph for `units`.
    ///
    /// Each unit's references come from `cache` when it holds a fresh entry;
    /// otherwise the artifact is read and passed to `extractor`, and the
    /// result is written back to the cache. Any read or extraction failure
    /// aborts the build. Cache write failures are logged and ignored.
    pub fn build<X: ReferenceExtractor>(
        units: BTreeMap<String, CompiledUnit>,
        cache: Option<&DependencyCache>,
        extractor: &X,
    ) -> Result<(Self, GraphStats), EngineError> {
        let mut stats = GraphStats::default();
        let mut forward = BTreeMap::new();

        for unit in units.values() {
            if let Some(refs) = cache.and_then(|c| c.get(unit)) {
                stats.cached += 1;
                forward.insert(unit.id.clone(), refs);
                continue;
            }

            let bytes = std::fs::read(&unit.absolute).map_err(|e| EngineError::Io {
                path: unit.absolute.clone(),
                source: e,
            })?;
            let refs = extractor
                .extract(&bytes)
                .map_err(|e| EngineError::Extraction {
                    path: unit.absolute.clone(),
                    source: Box::new(e),
                })?;
            stats.extracted += 1;
            tracing::debug!(unit = %unit.id, references = refs.len(), "extracted references");

            if let Some(cache) = cache {
                if let Err(e) = cache.put(unit, &refs) {
                    tracing::warn!(unit = %unit.id, "failed to write cache entry: {e}");
                }
            }
            forward.insert(unit.id.clone(), refs);
        }

        Ok((Self::from_references(units, forward), stats))
    }

    /// Assembles a graph from already-known reference lists.
    ///
    /// Units missing from `forward` get an empty reference list, and entries
    /// for identities that were not scanned are dropped.
    pub fn from_references(
        units: BTreeMap<String, CompiledUnit>,
        mut forward: BTreeMap<String, Vec<String>>,
    ) -> Self {
        forward.retain(|id, _| units.contains_key(id));
        for id in units.keys() {
            forward.entry(id.clone()).or_default();
        }

        let mut affected_by: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
        for (id, refs) in &forward {
            for symbol in refs {
                affected_by
                    .entry(symbol.clone())
                    .or_default()
                    .insert(id.clone());
            }
        }

        Self {
            units,
            forward,
            affected_by,
        }
    }

    /// Returns the compiled unit with identity `id`.
    pub fn unit(&self, id: &str) -> Option<&CompiledUnit> {
        self.units.get(id)
    }

    /// Returns `true` if `id` names a scanned compiled unit.
    pub fn contains(&self, id: &str) -> bool {
        self.units.contains_key(id)
    }

    /// Returns all scanned units, ordered by identity.
    pub fn units(&self) -> impl Iterator<Item = &CompiledUnit> {
        self.units.values()
    }

    /// Returns the number of scanned units.
    pub fn len(&self) -> usize {
        self.units.len()
    }

    /// Returns `true` if no units were scanned.
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Returns the symbols referenced by unit `id`.
    pub fn references(&self, id: &str) -> &[String] {
        self.forward.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Returns the forward map.
    pub fn forward(&self) -> &BTreeMap<String, Vec<String>> {
        &self.forward
    }

    /// Returns the affected-by map.
    pub fn affected_by_map(&self) -> &BTreeMap<String, BTreeSet<String>> {
        &self.affected_by
    }

    /// Returns the scanned units that reference `symbol`.
    pub fn affected_by(&self, symbol: &str) -> impl Iterator<Item = &CompiledUnit> {
        self.affected_by
            .get(symbol)
            .into_iter()
            .flatten()
            .filter_map(|id| self.units.get(id))
    }
}
