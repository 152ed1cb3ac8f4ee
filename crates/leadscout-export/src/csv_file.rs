//! CSV export sink.

use std::path::{Path, PathBuf};

use leadscout_core::types::EnrichedRecord;

use crate::error::ExportError;
use crate::row::{record_to_row, HEADERS};

/// Writes records as CSV rows under the fixed header, in the order given.
///
/// Returns the absolute path of the written file.
///
/// # Errors
///
/// Returns [`ExportError::Csv`] or [`ExportError::Io`] when the file cannot
/// be created or written.
pub fn write_csv(path: &Path, records: &[EnrichedRecord]) -> Result<PathBuf, ExportError> {
    let mut writer = csv::Writer::from_path(path)?;

    writer.write_record(HEADERS)?;
    for record in records {
        writer.write_record(record_to_row(record))?;
    }
    writer.flush()?;

    let absolute = std::fs::canonicalize(path)?;
    tracing::info!(rows = records.len(), path = %absolute.display(), "wrote CSV export");
    Ok(absolute)
}
