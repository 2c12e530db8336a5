use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::errors::ExportError;

pub const ORDINAL_HEADER: &str = "N°";
pub const SEQUENCE_HEADER: &str = "Sequence";

///
/// Write `sequences` as a two-column CSV table: a 1-based ordinal and the
/// sequence, with a header row.
///
pub fn write_csv<W: Write>(writer: W, sequences: &[String]) -> Result<(), ExportError> {
    let mut writer = csv::Writer::from_writer(writer);
    writer.write_record([ORDINAL_HEADER, SEQUENCE_HEADER])?;
    for (i, sequence) in sequences.iter().enumerate() {
        writer.write_record([(i + 1).to_string().as_str(), sequence.as_str()])?;
    }
    writer.flush()?;
    Ok(())
}

pub fn write_csv_file(path: &Path, sequences: &[String]) -> Result<(), ExportError> {
    let file = File::create(path)?;
    write_csv(file, sequences)
}

/// Tab-separated ordinal and sequence, one per line, no header.
pub fn write_table<W: Write>(mut writer: W, sequences: &[String]) -> std::io::Result<()> {
    for (i, sequence) in sequences.iter().enumerate() {
        writeln!(writer, "{}\t{}", i + 1, sequence)?;
    }
    writer.flush()
}
