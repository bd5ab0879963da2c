//! Persistent per-unit dependency cache.
//!
//! Each compiled unit's referenced-symbol list is stored as a plain text file
//! at `<cache_root>/<relative_location>.dep`, one symbol per line. An entry is
//! only trusted while it is strictly newer than the compiled artifact it
//! describes, so recompiling a unit invalidates its entry automatically.

#![warn(missing_docs)]

pub mod cache;
pub mod error;

pub use cache::DependencyCache;
pub use error::CacheError;
