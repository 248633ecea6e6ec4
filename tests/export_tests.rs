mod common;

use std::env;
use std::fs;
use std::path::PathBuf;

use absensi_portal::export::{
    Column, ColumnMap, ExportFormat, export_records, serialize, suggested_filename,
};
use absensi_portal::filter::FilterCriteria;
use absensi_portal::models::{AttendanceStatus, NO_TIME};
use common::{date, record, unmarked};

/// Unique output dir per test inside the system temp dir.
fn temp_dir(name: &str) -> PathBuf {
    let dir = env::temp_dir().join(format!("absensi_{name}"));
    fs::remove_dir_all(&dir).ok();
    fs::create_dir_all(&dir).expect("create temp dir");
    dir
}

fn journal_criteria() -> FilterCriteria {
    FilterCriteria::journal("12 RPL", "Matematika", date("2026-01-10"))
}

// One row per record, fields equal the column projection, and the
// input records are untouched.
#[test]
fn serialize_projects_without_mutation() {
    let records = vec![
        record(1, "Rizki", AttendanceStatus::Present, "07:02"),
        record(2, "Sari", AttendanceStatus::Sick, NO_TIME),
        unmarked(3, "Budi"),
    ];
    let before = records.clone();

    let doc = serialize(&records, &ColumnMap::journal());
    assert_eq!(doc.rows.len(), records.len());
    assert_eq!(
        doc.headers,
        vec!["NIS", "Name", "Class", "Subject", "Status", "Time"]
    );
    assert_eq!(
        doc.rows[0],
        vec!["101", "Rizki", "12 RPL", "Matematika", "Present", "07:02"]
    );
    assert_eq!(doc.rows[2][4], "Unmarked");
    assert_eq!(doc.rows[2][5], NO_TIME);

    assert_eq!(records, before);
}

#[test]
fn history_map_leads_with_the_date() {
    let records = vec![record(1, "Rizki", AttendanceStatus::Present, "07:02")];
    let doc = serialize(&records, &ColumnMap::history());
    assert_eq!(doc.rows[0][0], "2026-01-10");
    assert_eq!(doc.headers[0], "Date");
}

#[test]
fn custom_column_map_controls_order() {
    let records = vec![record(1, "Rizki", AttendanceStatus::Present, "07:02")];
    let map = ColumnMap::new(vec![Column::Status, Column::Name]);
    let doc = serialize(&records, &map);
    assert_eq!(doc.headers, vec!["Status", "Name"]);
    assert_eq!(doc.rows[0], vec!["Present", "Rizki"]);
}

#[test]
fn filename_embeds_the_active_filter() {
    let range = FilterCriteria::range(date("2026-01-01"), date("2026-01-31"));
    assert_eq!(
        suggested_filename(&range, ExportFormat::Xlsx),
        "attendance_2026-01-01_2026-01-31.xlsx"
    );
    assert_eq!(
        suggested_filename(&journal_criteria(), ExportFormat::Csv),
        "attendance_12-RPL_Matematika_2026-01-10.csv"
    );
}

#[test]
fn csv_export_writes_headers_and_rows() {
    let dir = temp_dir("csv_export");
    let records = vec![
        record(1, "Rizki", AttendanceStatus::Present, "07:02"),
        record(2, "Sari", AttendanceStatus::Excused, NO_TIME),
    ];

    let path = export_records(
        &records,
        &ColumnMap::journal(),
        &journal_criteria(),
        &dir,
        ExportFormat::Csv,
        false,
    )
    .expect("csv export");

    let content = fs::read_to_string(&path).expect("read exported csv");
    assert!(content.starts_with("NIS,Name,Class,Subject,Status,Time"));
    assert!(content.contains("Rizki"));
    assert!(content.contains("Excused"));
}

#[test]
fn xlsx_export_produces_a_file() {
    let dir = temp_dir("xlsx_export");
    let records = vec![record(1, "Rizki", AttendanceStatus::Present, "07:02")];

    let path = export_records(
        &records,
        &ColumnMap::journal(),
        &journal_criteria(),
        &dir,
        ExportFormat::Xlsx,
        false,
    )
    .expect("xlsx export");

    let meta = fs::metadata(&path).expect("exported file");
    assert!(meta.len() > 0);
    assert!(path.to_string_lossy().ends_with(".xlsx"));
}

#[test]
fn empty_dataset_still_exports() {
    let dir = temp_dir("xlsx_empty");
    let path = export_records(
        &[],
        &ColumnMap::journal(),
        &journal_criteria(),
        &dir,
        ExportFormat::Xlsx,
        false,
    )
    .expect("empty export");
    assert!(path.exists());
}

#[test]
fn existing_file_is_not_clobbered_without_force() {
    let dir = temp_dir("csv_noclobber");
    let records = vec![record(1, "Rizki", AttendanceStatus::Present, "07:02")];

    export_records(
        &records,
        &ColumnMap::journal(),
        &journal_criteria(),
        &dir,
        ExportFormat::Csv,
        false,
    )
    .expect("first export");

    let err = export_records(
        &records,
        &ColumnMap::journal(),
        &journal_criteria(),
        &dir,
        ExportFormat::Csv,
        false,
    )
    .expect_err("second export must refuse");
    assert!(err.to_string().contains("already exists"));

    // force overwrites
    export_records(
        &records,
        &ColumnMap::journal(),
        &journal_criteria(),
        &dir,
        ExportFormat::Csv,
        true,
    )
    .expect("forced export");
}
