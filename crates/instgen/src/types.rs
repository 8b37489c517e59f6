//! Entries derived from the instruction name list
//!
//! Names are raw bytes. Each entry renders exactly one line of generated
//! source text, without the trailing newline, and passes every byte of the
//! name through untouched apart from ASCII uppercasing in the identifier.

/// Prefix attached to every generated enumeration constant
pub const IDENTIFIER_PREFIX: &[u8] = b"INST_";

/// Indentation in front of every emitted line
pub const INDENT: &[u8] = b"    ";

/// Build the enumeration constant identifier for an instruction name.
///
/// Only ASCII letters are uppercased. Other bytes, including non-ASCII and
/// characters that are not valid in an identifier, pass straight through, and
/// an empty name yields just the prefix.
pub fn identifier_for(name: &[u8]) -> Vec<u8> {
    let mut identifier = Vec::with_capacity(IDENTIFIER_PREFIX.len() + name.len());
    identifier.extend_from_slice(IDENTIFIER_PREFIX);
    identifier.extend(name.iter().map(u8::to_ascii_uppercase));
    identifier
}

/// One constant of the enumeration block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumEntry {
    /// Zero-based position of the name in the source list
    pub index: usize,
    pub identifier: Vec<u8>,
}

impl EnumEntry {
    pub fn new(index: usize, name: &[u8]) -> Self {
        Self {
            index,
            identifier: identifier_for(name),
        }
    }

    pub fn line(&self) -> Vec<u8> {
        let mut line = Vec::with_capacity(INDENT.len() + self.identifier.len() + 8);
        line.extend_from_slice(INDENT);
        line.extend_from_slice(&self.identifier);
        // Two digits is a minimum width, larger indices widen rather than wrap
        line.extend_from_slice(format!(" = 0x{:02x},", self.index).as_bytes());
        line
    }
}

/// One row of the name table block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableEntry<'a> {
    pub identifier: Vec<u8>,
    /// Original bytes, emitted without escaping
    pub name: &'a [u8],
}

impl<'a> TableEntry<'a> {
    pub fn new(name: &'a [u8]) -> Self {
        Self {
            identifier: identifier_for(name),
            name,
        }
    }

    pub fn line(&self) -> Vec<u8> {
        let mut line =
            Vec::with_capacity(INDENT.len() + self.identifier.len() + self.name.len() + 6);
        line.extend_from_slice(INDENT);
        line.push(b'{');
        line.extend_from_slice(&self.identifier);
        line.extend_from_slice(b", \"");
        line.extend_from_slice(self.name);
        line.extend_from_slice(b"\"},");
        line
    }
}
