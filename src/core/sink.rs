use crate::core::errors::Result;
use std::fmt::Display;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/*-------------------------------------------------------------------------------------------------
  Output Sink
-------------------------------------------------------------------------------------------------*/

/// Serialize a sequence of items into a writer, one per line, in the given
/// order. Returns the number of lines written. I/O failures surface as
/// errors without touching the items themselves; the computed data stays
/// intact in memory for the caller.
pub fn write_lines<W, T>(writer: &mut W, items: &[T]) -> Result<usize>
where
    W: Write,
    T: Display,
{
    for item in items {
        writeln!(writer, "{item}")?;
    }
    writer.flush()?;
    Ok(items.len())
}

/// Serialize a sequence of items into a text file, one per line.
pub fn save_to_file<P, T>(path: P, items: &[T]) -> Result<usize>
where
    P: AsRef<Path>,
    T: Display,
{
    let mut writer = BufWriter::new(File::create(path)?);
    write_lines(&mut writer, items)
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
