//! Fatal errors of an analysis run.

use std::path::PathBuf;

/// Errors that abort an analysis run.
///
/// Graph construction is all-or-nothing: an artifact that cannot be read or
/// parsed stops the run, since a partial graph could hide real staleness.
/// Cache and deletion problems are not represented here; they are absorbed
/// and summarised instead.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// A compiled artifact could not be read.
    #[error("failed to read compiled unit {path}: {source}")]
    Io {
        /// The artifact path.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The reference extractor rejected a compiled artifact.
    #[error("failed to extract references from {path}: {source}")]
    Extraction {
        /// The artifact path.
        path: PathBuf,
        /// The extractor's error.
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use prune_classfile::ClassFileError;

    #[test]
    fn io_error_display() {
        let err = EngineError::Io {
            path: PathBuf::from("out/a/B.class"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        let msg = err.to_string();
        assert!(msg.contains("failed to read compiled unit"));
        assert!(msg.contains("B.class"));
    }

    #[test]
    fn extraction_error_display_and_source() {
        let err = EngineError::Extraction {
            path: PathBuf::from("out/a/B.class"),
            source: Box::new(ClassFileError::BadMagic { found: 0 }),
        };
        assert!(err.to_string().contains("bad magic"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
