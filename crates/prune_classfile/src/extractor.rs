//! The reference-extraction seam and its class-file implementation.

use std::collections::HashSet;

use crate::constant_pool::{Constant, ConstantPool};
use crate::descriptor::{class_entry_type, object_types, to_symbol};
use crate::error::ClassFileError;
use crate::reader::Reader;

/// Magic number at the start of every class file.
const CLASS_MAGIC: u32 = 0xCAFE_BABE;

/// Extracts the symbolic names a compiled artifact references.
///
/// Implementations must be deterministic: identical bytes yield identical,
/// identically-ordered lists.
pub trait ReferenceExtractor {
    /// Error returned for artifacts that cannot be read.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Returns the ordered list of symbolic names referenced by `bytes`.
    fn extract(&self, bytes: &[u8]) -> Result<Vec<String>, Self::Error>;
}

impl<T: ReferenceExtractor + ?Sized> ReferenceExtractor for &T {
    type Error = T::Error;

    fn extract(&self, bytes: &[u8]) -> Result<Vec<String>, Self::Error> {
        (**self).extract(bytes)
    }
}

/// Reads JVM class files and reports every class they mention.
///
/// References come from `CONSTANT_Class` entries (array types unwrapped to
/// their element class), the descriptors of `CONSTANT_NameAndType` and
/// `CONSTANT_MethodType` entries, and the declared field and method
/// descriptors. They are reported in first-seen order without duplicates,
/// and the class's own name is left out.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClassFileExtractor;

impl ClassFileExtractor {
    /// Creates a new extractor.
    pub fn new() -> Self {
        Self
    }
}

impl ReferenceExtractor for ClassFileExtractor {
    type Error = ClassFileError;

    fn extract(&self, bytes: &[u8]) -> Result<Vec<String>, ClassFileError> {
        let mut reader = Reader::new(bytes);

        let magic = reader.u32()?;
        if magic != CLASS_MAGIC {
            return Err(ClassFileError::BadMagic { found: magic });
        }
        // minor_version, major_version
        reader.skip(4)?;

        let pool = ConstantPool::parse(&mut reader)?;

        // access_flags
        reader.skip(2)?;
        let this_offset = reader.offset();
        let this_class = to_symbol(pool.class_name(reader.u16()?, this_offset)?);
        // super_class
        reader.skip(2)?;
        let interface_count = reader.u16()? as usize;
        reader.skip(interface_count * 2)?;

        let mut refs = References::new(this_class);

        for (index, constant) in pool.iter() {
            let offset = pool.offset_of(index);
            match constant {
                Constant::Class { name_index } => {
                    if let Some(name) = class_entry_type(pool.utf8(*name_index, offset)?) {
                        refs.add(name);
                    }
                }
                Constant::NameAndType {
                    descriptor_index, ..
                }
                | Constant::MethodType { descriptor_index } => {
                    for name in object_types(pool.utf8(*descriptor_index, offset)?) {
                        refs.add(name);
                    }
                }
                Constant::Utf8(_) | Constant::Other | Constant::Unusable => {}
            }
        }

        // fields, then methods
        for _ in 0..2 {
            let member_count = reader.u16()?;
            for _ in 0..member_count {
                // access_flags, name_index
                reader.skip(4)?;
                let offset = reader.offset();
                let descriptor = pool.utf8(reader.u16()?, offset)?;
                for name in object_types(descriptor) {
                    refs.add(name);
                }
                skip_attributes(&mut reader)?;
            }
        }

        Ok(refs.into_vec())
    }
}

fn skip_attributes(reader: &mut Reader<'_>) -> Result<(), ClassFileError> {
    let count = reader.u16()?;
    for _ in 0..count {
        // attribute_name_index
        reader.skip(2)?;
        let len = reader.u32()? as usize;
        reader.skip(len)?;
    }
    Ok(())
}

/// Ordered, deduplicated set of referenced symbols.
struct References {
    this_class: String,
    seen: HashSet<String>,
    ordered: Vec<String>,
}

impl References {
    fn new(this_class: String) -> Self {
        Self {
            this_class,
            seen: HashSet::new(),
            ordered: Vec::new(),
        }
    }

    fn add(&mut self, internal: &str) {
        let symbol = to_symbol(internal);
        if symbol != self.this_class && self.seen.insert(symbol.clone()) {
            self.ordered.push(symbol);
        }
    }

    fn into_vec(self) -> Vec<String> {
        self.ordered
    }
}
