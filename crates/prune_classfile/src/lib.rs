//! Referenced-symbol extraction from compiled JVM class files.
//!
//! The [`ReferenceExtractor`] trait is the seam the dependency graph builder
//! uses to learn which symbols a compiled unit references. The
//! [`ClassFileExtractor`] implementation reads the class-file constant pool
//! together with the declared field and method descriptors.

#![warn(missing_docs)]

pub mod constant_pool;
pub mod descriptor;
pub mod error;
pub mod extractor;
mod reader;

#[cfg(test)]
mod fixture;

pub use error::ClassFileError;
pub use extractor::{ClassFileExtractor, ReferenceExtractor};
