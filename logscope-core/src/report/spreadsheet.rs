use crate::analysis::FrequencyTable;
use crate::error::AnalysisError;
use crate::report::{
    AnalysisReport, ENDPOINT_HEADER, FAILED_LOGIN_HEADER, FREQUENCY_HEADER, IP_HEADER,
    REQUEST_COUNT_HEADER, TOP_ENDPOINT_HEADER,
};
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

/// Empty columns between neighbouring tables on the sheet.
pub const TABLE_GAP: usize = 2;

/// A header row plus data rows, placed as one block on the sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl SheetTable {
    fn from_frequency(key_header: &str, count_header: &str, table: &FrequencyTable) -> Self {
        Self {
            headers: vec![key_header.to_string(), count_header.to_string()],
            rows: table
                .iter()
                .map(|e| vec![e.key.clone(), e.count.to_string()])
                .collect(),
        }
    }

    pub fn width(&self) -> usize {
        self.headers.len()
    }

    /// Header row included.
    pub fn height(&self) -> usize {
        self.rows.len() + 1
    }
}

/// The three report tables in sheet order.
pub fn sheet_tables(report: &AnalysisReport) -> Vec<SheetTable> {
    let endpoints = match &report.endpoint_frequency {
        Some(all) => SheetTable::from_frequency(ENDPOINT_HEADER, FREQUENCY_HEADER, all),
        None => SheetTable {
            headers: vec![TOP_ENDPOINT_HEADER.to_string(), FREQUENCY_HEADER.to_string()],
            rows: report
                .top_endpoint
                .iter()
                .map(|top| vec![top.endpoint.clone(), top.count.to_string()])
                .collect(),
        },
    };

    vec![
        SheetTable::from_frequency(IP_HEADER, REQUEST_COUNT_HEADER, &report.ip_frequency),
        endpoints,
        SheetTable::from_frequency(IP_HEADER, FAILED_LOGIN_HEADER, &report.suspicious),
    ]
}

/// Starting column of each table: each one begins [`TABLE_GAP`] columns
/// after the previous table ends.
pub fn column_offsets(tables: &[SheetTable]) -> Vec<usize> {
    let mut offsets = Vec::with_capacity(tables.len());
    let mut next = 0;
    for table in tables {
        offsets.push(next);
        next += table.width() + TABLE_GAP;
    }
    offsets
}

/// Lay the tables out side by side on one rectangular grid of cells.
pub fn layout_sheet(tables: &[SheetTable]) -> Vec<Vec<String>> {
    let offsets = column_offsets(tables);

    let width = tables
        .last()
        .zip(offsets.last())
        .map(|(t, off)| off + t.width())
        .unwrap_or(0);
    let height = tables.iter().map(SheetTable::height).max().unwrap_or(0);

    let mut grid = vec![vec![String::new(); width]; height];

    for (table, &col) in tables.iter().zip(&offsets) {
        let rows = std::iter::once(&table.headers).chain(&table.rows);
        for (r, row) in rows.enumerate() {
            for (c, cell) in row.iter().enumerate() {
                grid[r][col + c] = cell.clone();
            }
        }
    }

    grid
}

/// Write the report as a single CSV worksheet to `writer`.
pub fn write_sheet<W: Write>(writer: W, report: &AnalysisReport) -> io::Result<()> {
    let grid = layout_sheet(&sheet_tables(report));

    let mut csv = csv::Writer::from_writer(writer);
    for row in &grid {
        csv.write_record(row)?;
    }
    csv.flush()
}

pub fn write_spreadsheet(path: &Path, report: &AnalysisReport) -> Result<(), AnalysisError> {
    let file = File::create(path).map_err(|e| AnalysisError::output_write(path, e))?;
    write_sheet(file, report).map_err(|e| AnalysisError::output_write(path, e))?;

    tracing::info!(path = %path.display(), "spreadsheet report written");
    Ok(())
}
