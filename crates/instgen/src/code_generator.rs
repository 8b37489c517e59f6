//! Writes the generated blocks to an output sink
//!
//! The enumeration block comes first, then the table block, with no marker in
//! between. Callers splicing the text into source files tell the blocks apart
//! by name count or by line shape.

use std::io::Write;

use anyhow::{Context, Result};
use log::trace;

use crate::list_compiler::{emit_enum, emit_table};

fn write_line<W: Write>(sink: &mut W, line: &[u8]) -> std::io::Result<()> {
    sink.write_all(line)?;
    sink.write_all(b"\n")
}

/// Write both blocks for `names` to `sink`, one line each, `\n` terminated.
///
/// Name bytes are written exactly as loaded.
pub fn write_blocks<S: AsRef<[u8]>, W: Write>(names: &[S], sink: &mut W) -> Result<()> {
    for line in emit_enum(names) {
        write_line(sink, &line).context("failed to write enumeration block")?;
    }
    trace!("Wrote {} enumeration lines", names.len());

    for line in emit_table(names) {
        write_line(sink, &line).context("failed to write name table block")?;
    }
    trace!("Wrote {} table lines", names.len());

    Ok(())
}
