use super::sample_report;
use crate::analysis::FrequencyTable;
use crate::report::{
    AnalysisReport, column_offsets, layout_sheet, sheet_tables, write_sheet, write_spreadsheet,
};
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::tempdir;

#[test]
fn tables_are_separated_by_two_columns() {
    let tables = sheet_tables(&sample_report());

    let offsets = column_offsets(&tables);

    // ip table is 2 wide, endpoint table is 2 wide
    assert_eq!(offsets, vec![0, 4, 8]);
}

#[test]
fn grid_is_rectangular() {
    let grid = layout_sheet(&sheet_tables(&sample_report()));

    assert_eq!(grid.len(), 3); // header + two ip rows
    assert!(grid.iter().all(|row| row.len() == 10));
}

#[test]
fn writes_side_by_side_csv() {
    // Arrange
    let mut buf = Vec::new();

    // Act
    write_sheet(&mut buf, &sample_report()).unwrap();

    // Assert
    let csv = String::from_utf8(buf).unwrap();
    assert_eq!(
        csv,
        "IP address,Request Count,,,Most Frequently Accessed Endpoint,Frequency,,,IP address,Failed Login Count\n\
         192.168.1.1,2,,,/login,2,,,203.0.113.5,11\n\
         203.0.113.5,1,,,,,,,,\n"
    );
}

#[test]
fn empty_report_still_writes_headers() {
    let mut buf = Vec::new();

    write_sheet(&mut buf, &AnalysisReport::default()).unwrap();

    let csv = String::from_utf8(buf).unwrap();
    assert_eq!(
        csv,
        "IP address,Request Count,,,Most Frequently Accessed Endpoint,Frequency,,,IP address,Failed Login Count\n"
    );
}

#[test]
fn all_endpoints_table_replaces_top_endpoint() {
    let report = AnalysisReport {
        endpoint_frequency: Some(FrequencyTable::count(["/a", "/b", "/b", "/c"])),
        ..sample_report()
    };

    let tables = sheet_tables(&report);

    assert_eq!(tables[1].headers, vec!["Endpoint", "Frequency"]);
    assert_eq!(tables[1].rows.len(), 3);
    assert_eq!(layout_sheet(&tables).len(), 4);
}

#[test]
fn writes_file_to_disk() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("report.csv");

    write_spreadsheet(&path, &sample_report()).unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    assert!(contents.starts_with("IP address,Request Count"));
}

#[test]
fn unwritable_destination_is_an_output_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing-dir").join("report.csv");

    let err = write_spreadsheet(&path, &sample_report()).unwrap_err();

    assert_eq!(err.exit_code(), 5);
}
