//! Library dependency resolution over a classpath.
//!
//! Maps a symbolic name to the library artifact that supplies it: either a
//! class file inside a classpath directory, or a `.jar`/`.zip` archive that
//! contains the class.

#![warn(missing_docs)]

pub mod archive;
pub mod resolver;

pub use archive::ArchiveIndex;
pub use resolver::{ClasspathEntry, ClasspathResolver, LibraryResolver};

#[cfg(test)]
mod fixture;
