// src/export/csv.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::TableDocument;
use log::info;
use std::path::Path;

/// Writes the table as CSV, header row first.
pub(crate) fn write_csv(doc: &TableDocument, path: &Path) -> AppResult<()> {
    info!("exporting CSV: {}", path.display());

    let mut wtr = csv::Writer::from_path(path)
        .map_err(|e| AppError::Export(format!("CSV open error: {e}")))?;

    wtr.write_record(&doc.headers)
        .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;

    for row in &doc.rows {
        wtr.write_record(row)
            .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;
    }

    wtr.flush()
        .map_err(|e| AppError::Export(format!("CSV flush error: {e}")))?;
    Ok(())
}
