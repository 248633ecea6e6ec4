// src/export/xlsx.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::TableDocument;
use log::info;
use rust_xlsxwriter::{Color, Format, FormatBorder, FormatPattern, Workbook};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

/// XLSX export with header styling, banded rows and auto column widths.
pub(crate) fn write_xlsx(doc: &TableDocument, path: &Path) -> AppResult<()> {
    info!("exporting XLSX: {}", path.display());

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    // ---------------------------
    // Empty dataset
    // ---------------------------
    if doc.is_empty() {
        worksheet
            .write(0, 0, "No data available")
            .map_err(to_export_error)?;
        workbook.save(path_str(path)?).map_err(to_export_error)?;
        return Ok(());
    }

    // ---------------------------
    // Header
    // ---------------------------
    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x2F75B5))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    for (col, header) in doc.headers.iter().enumerate() {
        worksheet
            .write_with_format(0, col as u16, *header, &header_format)
            .map_err(to_export_error)?;
    }

    worksheet.set_freeze_panes(1, 0).ok();

    let mut col_widths: Vec<usize> = doc
        .headers
        .iter()
        .map(|h| UnicodeWidthStr::width(*h))
        .collect();

    let band1 = Color::RGB(0xEAF3FB);
    let band2 = Color::RGB(0xFFFFFF);

    // ---------------------------
    // Rows
    // ---------------------------
    for (row_index, row) in doc.rows.iter().enumerate() {
        let band_color = if row_index % 2 == 0 { band1 } else { band2 };
        let cell_format = Format::new()
            .set_background_color(band_color)
            .set_pattern(FormatPattern::Solid)
            .set_border(FormatBorder::Thin);

        for (col, value) in row.iter().enumerate() {
            worksheet
                .write_with_format((row_index + 1) as u32, col as u16, value, &cell_format)
                .map_err(to_export_error)?;
            col_widths[col] = col_widths[col].max(UnicodeWidthStr::width(value.as_str()));
        }
    }

    // ---------------------------
    // Column widths
    // ---------------------------
    for (c, w) in col_widths.iter().enumerate() {
        worksheet
            .set_column_width(c as u16, *w as f64 + 2.0)
            .map_err(to_export_error)?;
    }

    workbook.save(path_str(path)?).map_err(to_export_error)?;
    Ok(())
}

fn path_str(path: &Path) -> AppResult<&str> {
    path.to_str()
        .ok_or_else(|| AppError::Export(format!("Invalid output path: {}", path.display())))
}

fn to_export_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Export(e.to_string())
}
