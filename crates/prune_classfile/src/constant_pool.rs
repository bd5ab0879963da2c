//! Class-file constant pool.
//!
//! Only the entries that can name another class are kept with their payload;
//! all other entries are parsed for their size and recorded as [`Constant::Other`].

use crate::error::ClassFileError;
use crate::reader::Reader;

const TAG_UTF8: u8 = 1;
const TAG_INTEGER: u8 = 3;
const TAG_FLOAT: u8 = 4;
const TAG_LONG: u8 = 5;
const TAG_DOUBLE: u8 = 6;
const TAG_CLASS: u8 = 7;
const TAG_STRING: u8 = 8;
const TAG_FIELDREF: u8 = 9;
const TAG_METHODREF: u8 = 10;
const TAG_INTERFACE_METHODREF: u8 = 11;
const TAG_NAME_AND_TYPE: u8 = 12;
const TAG_METHOD_HANDLE: u8 = 15;
const TAG_METHOD_TYPE: u8 = 16;
const TAG_DYNAMIC: u8 = 17;
const TAG_INVOKE_DYNAMIC: u8 = 18;
const TAG_MODULE: u8 = 19;
const TAG_PACKAGE: u8 = 20;

/// A single constant pool entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Constant {
    /// Slot 0, and the second slot of `Long` and `Double` entries.
    Unusable,
    /// A (modified) UTF-8 string.
    Utf8(String),
    /// A class or array type, by index of its internal name.
    Class {
        /// Index of the `Utf8` internal name.
        name_index: u16,
    },
    /// A member name and descriptor pair.
    NameAndType {
        /// Index of the `Utf8` member name.
        name_index: u16,
        /// Index of the `Utf8` field or method descriptor.
        descriptor_index: u16,
    },
    /// A method type, by index of its descriptor.
    MethodType {
        /// Index of the `Utf8` method descriptor.
        descriptor_index: u16,
    },
    /// Any other entry kind; irrelevant for reference extraction.
    Other,
}

/// The parsed constant pool, indexed from 1 as in the class-file format.
#[derive(Debug, Clone)]
pub struct ConstantPool {
    entries: Vec<Constant>,
    offsets: Vec<usize>,
}

impl ConstantPool {
    pub(crate) fn parse(reader: &mut Reader<'_>) -> Result<Self, ClassFileError> {
        let count = reader.u16()?;
        let mut entries = Vec::with_capacity(count as usize);
        let mut offsets = Vec::with_capacity(count as usize);
        entries.push(Constant::Unusable);
        offsets.push(reader.offset());

        let mut index: u16 = 1;
        while index < count {
            let offset = reader.offset();
            let tag = reader.u8()?;
            let entry = match tag {
                TAG_UTF8 => {
                    let len = reader.u16()? as usize;
                    let bytes = reader.bytes(len)?;
                    Constant::Utf8(String::from_utf8_lossy(bytes).into_owned())
                }
                TAG_INTEGER | TAG_FLOAT => {
                    reader.skip(4)?;
                    Constant::Other
                }
                TAG_LONG | TAG_DOUBLE => {
                    reader.skip(8)?;
                    Constant::Other
                }
                TAG_CLASS => Constant::Class {
                    name_index: reader.u16()?,
                },
                TAG_STRING | TAG_MODULE | TAG_PACKAGE => {
                    reader.skip(2)?;
                    Constant::Other
                }
                TAG_FIELDREF | TAG_METHODREF | TAG_INTERFACE_METHODREF | TAG_DYNAMIC
                | TAG_INVOKE_DYNAMIC => {
                    reader.skip(4)?;
                    Constant::Other
                }
                TAG_NAME_AND_TYPE => Constant::NameAndType {
                    name_index: reader.u16()?,
                    descriptor_index: reader.u16()?,
                },
                TAG_METHOD_HANDLE => {
                    reader.skip(3)?;
                    Constant::Other
                }
                TAG_METHOD_TYPE => Constant::MethodType {
                    descriptor_index: reader.u16()?,
                },
                _ => return Err(ClassFileError::UnknownTag { tag, index, offset }),
            };
            entries.push(entry);
            offsets.push(offset);

            // Long and Double occupy two slots
            if tag == TAG_LONG || tag == TAG_DOUBLE {
                entries.push(Constant::Unusable);
                offsets.push(offset);
                index = index.saturating_add(2);
            } else {
                index += 1;
            }
        }

        Ok(Self { entries, offsets })
    }

    /// Returns the entry at `index`, if it exists.
    pub fn get(&self, index: u16) -> Option<&Constant> {
        self.entries.get(index as usize)
    }

    /// Returns the byte offset at which the entry at `index` starts.
    pub fn offset_of(&self, index: u16) -> usize {
        self.offsets.get(index as usize).copied().unwrap_or(0)
    }

    /// Returns an iterator over all usable entries and their indices, in index order.
    pub fn iter(&self) -> impl Iterator<Item = (u16, &Constant)> {
        self.entries
            .iter()
            .enumerate()
            .filter(|(_, c)| !matches!(c, Constant::Unusable))
            .map(|(i, c)| (i as u16, c))
    }

    /// Resolves `index` as a `Utf8` entry.
    ///
    /// `offset` is the position of the referencing field, used for error reporting.
    pub fn utf8(&self, index: u16, offset: usize) -> Result<&str, ClassFileError> {
        match self.get(index) {
            Some(Constant::Utf8(s)) => Ok(s),
            _ => Err(ClassFileError::BadReference {
                index,
                expected: "Utf8",
                offset,
            }),
        }
    }

    /// Resolves `index` as a `Class` entry and returns its internal name.
    pub fn class_name(&self, index: u16, offset: usize) -> Result<&str, ClassFileError> {
        match self.get(index) {
            Some(Constant::Class { name_index }) => self.utf8(*name_index, offset),
            _ => Err(ClassFileError::BadReference {
                index,
                expected: "Class",
                offset,
            }),
        }
    }
}
