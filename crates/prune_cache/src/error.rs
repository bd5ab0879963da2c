//! Error types for cache operations.

use std::path::PathBuf;

/// Errors that can occur during cache operations.
///
/// Cache operations are fail-safe for the caller: a read error degrades to a
/// cache miss and a write error is logged and ignored. This enum carries the
/// detail for those log messages.
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    /// An I/O error occurred while reading or writing a cache file.
    #[error("cache I/O error at {path}: {source}")]
    Io {
        /// The path that caused the error.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// A cache entry was not valid UTF-8 text.
    #[error("cache entry {path} is not valid UTF-8")]
    Encoding {
        /// The cache entry path.
        path: PathBuf,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_display() {
        let err = CacheError::Io {
            path: PathBuf::from("/tmp/cache/a/B.dep"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        let msg = err.to_string();
        assert!(msg.contains("cache I/O error"));
        assert!(msg.contains("B.dep"));
        assert!(msg.contains("denied"));
    }

    #[test]
    fn encoding_error_display() {
        let err = CacheError::Encoding {
            path: PathBuf::from("a/B.dep"),
        };
        assert!(err.to_string().contains("not valid UTF-8"));
    }
}
