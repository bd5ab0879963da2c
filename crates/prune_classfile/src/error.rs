//! Error types for class-file parsing.

/// Errors that can occur while reading a class file.
///
/// Every variant carries the byte offset at which the problem was detected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClassFileError {
    /// The file does not start with the `0xCAFEBABE` magic number.
    #[error("not a class file: bad magic {found:#010x}")]
    BadMagic {
        /// The four bytes found instead, big-endian.
        found: u32,
    },

    /// The input ended before a complete structure could be read.
    #[error("truncated class file: needed {needed} byte(s) at offset {offset}")]
    Truncated {
        /// Offset of the read that failed.
        offset: usize,
        /// Number of bytes that were requested.
        needed: usize,
    },

    /// A constant pool entry has an unknown tag.
    #[error("unknown constant pool tag {tag} for entry {index} at offset {offset}")]
    UnknownTag {
        /// The tag byte.
        tag: u8,
        /// The constant pool index of the entry.
        index: u16,
        /// Offset of the tag byte.
        offset: usize,
    },

    /// A constant pool reference is out of range or points at the wrong kind of entry.
    #[error("invalid constant pool reference {index} ({expected} expected) at offset {offset}")]
    BadReference {
        /// The constant pool index that was referenced.
        index: u16,
        /// The kind of entry the reference should have pointed at.
        expected: &'static str,
        /// Offset of the referencing field.
        offset: usize,
    },
}
