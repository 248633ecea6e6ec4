// src/export/model.rs

use crate::models::AttendanceRecord;

/// One spreadsheet column: a header plus a field projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Nis,
    Name,
    Class,
    Subject,
    Status,
    Time,
    Date,
}

impl Column {
    pub fn header(&self) -> &'static str {
        match self {
            Column::Nis => "NIS",
            Column::Name => "Name",
            Column::Class => "Class",
            Column::Subject => "Subject",
            Column::Status => "Status",
            Column::Time => "Time",
            Column::Date => "Date",
        }
    }

    fn project(&self, record: &AttendanceRecord) -> String {
        match self {
            Column::Nis => record.student_id.to_string(),
            Column::Name => record.student_name.clone(),
            Column::Class => record.class_label.clone(),
            Column::Subject => record.subject_label.clone(),
            Column::Status => record.status.as_str().to_string(),
            Column::Time => record.time.clone(),
            Column::Date => record.date_str(),
        }
    }
}

/// Ordered name→field projection driving an export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMap {
    columns: Vec<Column>,
}

impl ColumnMap {
    pub fn new(columns: Vec<Column>) -> Self {
        Self { columns }
    }

    /// Journal exports: no date column, the filter pins the day.
    pub fn journal() -> Self {
        Self::new(vec![
            Column::Nis,
            Column::Name,
            Column::Class,
            Column::Subject,
            Column::Status,
            Column::Time,
        ])
    }

    /// History exports span days, so the date leads.
    pub fn history() -> Self {
        Self::new(vec![
            Column::Date,
            Column::Time,
            Column::Name,
            Column::Class,
            Column::Subject,
            Column::Status,
        ])
    }

    pub fn headers(&self) -> Vec<&'static str> {
        self.columns.iter().map(Column::header).collect()
    }

    pub fn row_for(&self, record: &AttendanceRecord) -> Vec<String> {
        self.columns.iter().map(|c| c.project(record)).collect()
    }
}

impl Default for ColumnMap {
    fn default() -> Self {
        Self::journal()
    }
}

/// Table-shaped snapshot of a record set, ready for a writer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableDocument {
    pub headers: Vec<&'static str>,
    pub rows: Vec<Vec<String>>,
}

impl TableDocument {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// One row per record, columns in map order. Records are read, never
/// mutated.
pub fn serialize(records: &[AttendanceRecord], columns: &ColumnMap) -> TableDocument {
    TableDocument {
        headers: columns.headers(),
        rows: records.iter().map(|r| columns.row_for(r)).collect(),
    }
}
