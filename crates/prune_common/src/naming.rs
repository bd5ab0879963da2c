//! Naming conventions mapping files to unit identities.
//!
//! A unit identity is the fully-qualified, dot-separated symbolic name of a
//! compiled unit, e.g. `com.example.Widget`. It is derived from a file's path
//! relative to its root directory by stripping the file suffix and replacing
//! path separators with [`SYMBOL_SEPARATOR`].

use std::path::{Component, Path, PathBuf};

/// File suffix (without the dot) of compiled artifacts.
pub const COMPILED_SUFFIX: &str = "class";

/// File suffix (without the dot) of source units.
pub const SOURCE_SUFFIX: &str = "java";

/// File suffix (without the dot) of dependency cache entries.
pub const CACHE_SUFFIX: &str = "dep";

/// Separator between the segments of a unit identity.
pub const SYMBOL_SEPARATOR: char = '.';

/// Reserved character marking a nested unit inside an enclosing unit.
pub const NESTED_SEPARATOR: char = '$';

/// Namespace prefixes of platform symbols that are never staleness-tracked.
pub const DEFAULT_PLATFORM_PREFIXES: &[&str] = &["java.", "javax."];

/// Derives the suffix-stripped relative location and identity of a file.
///
/// `relative` is the file's path relative to its root. Returns `None` if the
/// file does not carry `suffix`, or if any path segment is not valid UTF-8.
///
/// ```
/// use std::path::Path;
/// use prune_common::identity_from_relative;
///
/// let (location, id) = identity_from_relative(Path::new("a/b/C.class"), "class").unwrap();
/// assert_eq!(location, Path::new("a/b/C"));
/// assert_eq!(id, "a.b.C");
/// ```
pub fn identity_from_relative(relative: &Path, suffix: &str) -> Option<(PathBuf, String)> {
    if relative.extension()?.to_str()? != suffix {
        return None;
    }
    let location = relative.with_extension("");

    let mut segments = Vec::new();
    for component in location.components() {
        match component {
            Component::Normal(part) => segments.push(part.to_str()?),
            Component::CurDir => {}
            _ => return None,
        }
    }
    if segments.is_empty() {
        return None;
    }

    let id = segments.join(&SYMBOL_SEPARATOR.to_string());
    Some((location, id))
}

/// Returns the enclosing unit identity of a nested unit.
///
/// The enclosing unit is everything before the first [`NESTED_SEPARATOR`], so
/// `a.Outer$Inner$Deep` is enclosed by `a.Outer`. Returns `None` for
/// identities that are not nested.
pub fn enclosing_unit(id: &str) -> Option<&str> {
    match id.find(NESTED_SEPARATOR) {
        Some(0) | None => None,
        Some(pos) => Some(&id[..pos]),
    }
}

/// Returns `true` if `symbol` belongs to one of the platform namespaces.
pub fn is_platform_symbol<S: AsRef<str>>(symbol: &str, prefixes: &[S]) -> bool {
    prefixes.iter().any(|p| symbol.starts_with(p.as_ref()))
}
