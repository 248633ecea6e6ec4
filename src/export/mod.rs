// src/export/mod.rs

mod csv;
mod model;
mod xlsx;

pub use model::{Column, ColumnMap, TableDocument, serialize};

use crate::errors::{AppError, AppResult};
use crate::filter::FilterCriteria;
use crate::models::AttendanceRecord;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Xlsx,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Xlsx => "xlsx",
        }
    }
}

/// Filename embedding the active filter (date range or
/// class/subject/date), so repeated exports never overwrite each other
/// ambiguously.
pub fn suggested_filename(criteria: &FilterCriteria, format: ExportFormat) -> String {
    format!(
        "attendance_{}.{}",
        criteria.filename_tag(),
        format.extension()
    )
}

/// Refuses to clobber an existing file unless `force` is set. The teacher
/// journal runs in a UI, so there is no interactive prompt here; the shell
/// asks and passes `force`.
pub(crate) fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if !path.exists() || force {
        return Ok(());
    }
    Err(AppError::Export(format!(
        "Output file already exists: {}",
        path.display()
    )))
}

/// Snapshots `records` through `columns` and writes the file.
///
/// Returns the written path. The record slice is only read; exporting
/// never mutates the loaded dataset.
pub fn export_records(
    records: &[AttendanceRecord],
    columns: &ColumnMap,
    criteria: &FilterCriteria,
    dir: &Path,
    format: ExportFormat,
    force: bool,
) -> AppResult<PathBuf> {
    let path = dir.join(suggested_filename(criteria, format));
    ensure_writable(&path, force)?;

    let doc = serialize(records, columns);
    match format {
        ExportFormat::Csv => csv::write_csv(&doc, &path)?,
        ExportFormat::Xlsx => xlsx::write_xlsx(&doc, &path)?,
    }
    Ok(path)
}
