//! CSV serialization of the derived tables.

use serde::Serialize;
use std::path::Path;

use crate::error::ExportResult;

/// Write a table to `path`, overwriting any existing file.
///
/// The header row comes from `columns` rather than the record type, so a
/// zero-row table still produces a header-only file. Booleans render as
/// `true`/`false`, dates as `YYYY-MM-DD`, null values as empty fields.
pub fn write_table<T: Serialize>(path: &Path, columns: &[&str], rows: &[T]) -> ExportResult<()> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)?;

    writer.write_record(columns)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;

    Ok(())
}
