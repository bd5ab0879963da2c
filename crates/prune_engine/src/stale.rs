//! Out-of-date detection from source, artifact, and library timestamps.

use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

use prune_common::{is_newer, modified};

use crate::graph::DependencyGraph;
use crate::library::LibraryDependencies;
use crate::scan::SourceUnit;

/// Why a unit is out of date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StaleReason {
    /// A source exists but no compiled artifact does.
    NeverCompiled,
    /// The source was modified after the compiled artifact.
    SourceNewer,
    /// A library the unit depends on was modified after the compiled artifact.
    LibraryNewer(PathBuf),
}

impl fmt::Display for StaleReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NeverCompiled => write!(f, "not compiled"),
            Self::SourceNewer => write!(f, "source changed"),
            Self::LibraryNewer(lib) => write!(f, "library {} changed", lib.display()),
        }
    }
}

/// The out-of-date set, with the reason each unit was included.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutOfDate {
    reasons: BTreeMap<String, StaleReason>,
}

impl OutOfDate {
    /// Returns `true` if unit `id` is out of date.
    pub fn contains(&self, id: &str) -> bool {
        self.reasons.contains_key(id)
    }

    /// Returns why unit `id` is out of date.
    pub fn reason(&self, id: &str) -> Option<&StaleReason> {
        self.reasons.get(id)
    }

    /// Returns the out-of-date identities in order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.reasons.keys().map(String::as_str)
    }

    /// Returns the out-of-date identities with their reasons, in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &StaleReason)> {
        self.reasons.iter().map(|(id, r)| (id.as_str(), r))
    }

    /// Returns the number of out-of-date units.
    pub fn len(&self) -> usize {
        self.reasons.len()
    }

    /// Returns `true` if nothing is out of date.
    pub fn is_empty(&self) -> bool {
        self.reasons.is_empty()
    }

    pub(crate) fn insert(&mut self, id: &str, reason: StaleReason) {
        let kept = self.reasons.entry(id.to_string()).or_insert(reason);
        tracing::debug!(unit = %id, reason = %kept, "out of date");
    }
}

/// Returns `true` if the artifact exists and `input` was modified after it.
///
/// A missing artifact timestamp counts as newer; a missing input timestamp does not.
fn newer_than_artifact(input: &Path, artifact: &Path) -> bool {
    match (modified(input), modified(artifact)) {
        (Some(input), Some(artifact)) => input > artifact,
        (_, None) => true,
        (None, Some(_)) => false,
    }
}

/// Computes the out-of-date set.
///
/// A source unit is out of date if it has no compiled unit, or if its file
/// is strictly newer than the compiled artifact. A compiled unit not already
/// out of date is then added if any library it depends on is strictly newer
/// than its artifact.
pub fn find_out_of_date(
    sources: &[SourceUnit],
    graph: &DependencyGraph,
    libraries: Option<&LibraryDependencies>,
) -> OutOfDate {
    let mut stale = OutOfDate::default();

    for source in sources {
        match graph.unit(&source.id) {
            None => stale.insert(&source.id, StaleReason::NeverCompiled),
            Some(unit) => {
                if newer_than_artifact(&source.path, &unit.absolute) {
                    stale.insert(&source.id, StaleReason::SourceNewer);
                }
            }
        }
    }

    if let Some(libraries) = libraries {
        for (id, libs) in libraries.iter() {
            if stale.contains(id) {
                continue;
            }
            let Some(unit) = graph.unit(id) else {
                continue;
            };
            let newer = libs.iter().find(|lib| is_newer(lib, &unit.absolute));
            if let Some(lib) = newer {
                stale.insert(id, StaleReason::LibraryNewer(lib.clone()));
            }
        }
    }

    stale
}
