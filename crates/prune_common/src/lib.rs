//! Shared foundational types used across the classprune crates.
//!
//! This crate provides the compiled-unit identity record, the naming
//! conventions that map files to unit identities, and modification-time
//! helpers used by the cache and staleness checks.

#![warn(missing_docs)]

pub mod naming;
pub mod timestamp;
pub mod unit;

pub use naming::{
    enclosing_unit, identity_from_relative, is_platform_symbol, CACHE_SUFFIX, COMPILED_SUFFIX,
    DEFAULT_PLATFORM_PREFIXES, NESTED_SEPARATOR, SOURCE_SUFFIX, SYMBOL_SEPARATOR,
};
pub use timestamp::{is_newer, modified};
pub use unit::CompiledUnit;
