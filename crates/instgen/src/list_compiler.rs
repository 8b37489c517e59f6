//! Instruction list loading and line generation
//!
//! The list is read once into an ordered vector of names. Names are kept as
//! raw bytes, so whatever encoding the list uses comes out unchanged in the
//! name table. The emitters are pure: they borrow the names and lazily yield
//! one formatted line per name, so the enumeration and the table always agree
//! on order and identifiers.

use std::{fs, path::Path};

use anyhow::{Context, Result};
use log::{debug, info};

use crate::types::{EnumEntry, TableEntry};

/// Load the instruction names from `path`, one per line.
///
/// Every line is trimmed of surrounding ASCII whitespace. Blank lines are kept
/// as empty names and nothing is deduplicated, so positions in the returned
/// vector map one-to-one onto lines of the file.
pub fn load(path: &Path) -> Result<Vec<Vec<u8>>> {
    let bytes = fs::read(path)
        .with_context(|| format!("failed to read instruction list `{}`", path.display()))?;
    let names = parse(&bytes);

    info!("Loaded {} instruction names from {:?}", names.len(), path);
    if let Some(position) = names.iter().position(Vec::is_empty) {
        debug!("Empty instruction name at line {}", position + 1);
    }

    Ok(names)
}

/// Space, tab, line feed, vertical tab, form feed and carriage return.
///
/// Non-ASCII whitespace such as NBSP is part of the name.
const fn is_list_whitespace(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\x0b' | b'\x0c' | b'\r')
}

fn trim(line: &[u8]) -> &[u8] {
    let Some(start) = line.iter().position(|&b| !is_list_whitespace(b)) else {
        return &[];
    };
    let end = line
        .iter()
        .rposition(|&b| !is_list_whitespace(b))
        .map_or(start, |last| last + 1);
    &line[start..end]
}

/// Split list bytes into trimmed names.
///
/// Lines end at `\n`; a `\r` before it is removed with the other whitespace.
/// A trailing line terminator does not produce an extra empty name.
pub fn parse(text: &[u8]) -> Vec<Vec<u8>> {
    let mut lines: Vec<&[u8]> = text.split(|&b| b == b'\n').collect();
    if lines.last().is_some_and(|last| last.is_empty()) {
        lines.pop();
    }
    lines.into_iter().map(|line| trim(line).to_vec()).collect()
}

/// Enumeration entries in list order, indexed from zero.
pub fn enum_entries<S: AsRef<[u8]>>(names: &[S]) -> impl Iterator<Item = EnumEntry> + '_ {
    names
        .iter()
        .enumerate()
        .map(|(index, name)| EnumEntry::new(index, name.as_ref()))
}

/// Table entries in list order.
pub fn table_entries<S: AsRef<[u8]>>(names: &[S]) -> impl Iterator<Item = TableEntry<'_>> {
    names.iter().map(|name| TableEntry::new(name.as_ref()))
}

/// Lines of the enumeration block, e.g. `    INST_ADD = 0x00,`
pub fn emit_enum<S: AsRef<[u8]>>(names: &[S]) -> impl Iterator<Item = Vec<u8>> + '_ {
    enum_entries(names).map(|entry| entry.line())
}

/// Lines of the name table block, e.g. `    {INST_ADD, "add"},`
pub fn emit_table<S: AsRef<[u8]>>(names: &[S]) -> impl Iterator<Item = Vec<u8>> + '_ {
    table_entries(names).map(|entry| entry.line())
}
