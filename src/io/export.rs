//! Export the sweep table as tab-separated text.
//!
//! Layout matches what the simulator's loader expects: an unnamed leading
//! index column, one header row, one line per parameter set.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::AppError;
use crate::table::SweepTable;

/// Write the table to a TSV file, replacing any existing file.
pub fn write_table_tsv(path: &Path, table: &SweepTable) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::config(format!("Failed to create TSV '{}': {e}", path.display())))?;
    write_table(file, table)
        .map_err(|e| AppError::config(format!("Failed to write TSV '{}': {e}", path.display())))
}

/// Serialize the table to any writer.
pub fn write_table<W: Write>(writer: W, table: &SweepTable) -> Result<(), csv::Error> {
    let mut out = csv::WriterBuilder::new()
        .delimiter(b'\t')
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer);

    // Header
    let header = std::iter::once("").chain(table.columns().iter().map(|c| c.name.as_str()));
    out.write_record(header)?;

    for row in 0..table.len() {
        let label = row.to_string();
        let cells = table.rendered_row(row).unwrap_or_default();
        out.write_record(std::iter::once(label).chain(cells))?;
    }

    out.flush()?;
    Ok(())
}
