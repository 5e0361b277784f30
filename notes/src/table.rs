use crate::config::ColumnNames;
use crate::error::NotesError;
use crate::types::{MISSING_PLACEHOLDER, Result, TicketRow};
use csv::StringRecord;
use std::fs::File;
use std::io::Read;
use std::path::Path;

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Rows of a ticket export plus what the CLI needs to know about its columns
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadedTable {
    pub rows: Vec<TicketRow>,
    pub has_approval_column: bool,
    solution_version: Option<String>,
}

impl LoadedTable {
    /// Solution version of the first row, usable as the patch version
    #[must_use]
    pub fn solution_version(&self) -> Option<&str> {
        self.solution_version.as_deref()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[derive(Debug, Clone, Copy)]
struct ColumnIndices {
    key: usize,
    category: usize,
    note: usize,
    approved: Option<usize>,
    solution_version: Option<usize>,
}

impl ColumnIndices {
    fn locate(headers: &StringRecord, columns: &ColumnNames) -> Result<Self> {
        let required = |name: &str| {
            find_column(headers, name).ok_or_else(|| NotesError::MissingColumn(name.to_string()))
        };

        Ok(Self {
            key: required(&columns.key)?,
            category: required(&columns.category)?,
            note: required(&columns.note)?,
            approved: find_column(headers, &columns.approved),
            solution_version: find_column(headers, &columns.solution_version),
        })
    }
}

// First match wins: exports repeat headers for multi-valued fields
fn find_column(headers: &StringRecord, name: &str) -> Option<usize> {
    headers
        .iter()
        .position(|header| header.trim_start_matches(BYTE_ORDER_MARK) == name)
}

fn cell(record: &StringRecord, index: usize) -> Option<String> {
    record
        .get(index)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

/// Reads ticket rows from CSV data
///
/// # Errors
/// Returns error if the CSV is malformed or a required column is missing
pub fn read_rows<R: Read>(reader: R, columns: &ColumnNames) -> Result<LoadedTable> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(reader);
    let headers = reader.headers()?.clone();
    let indices = ColumnIndices::locate(&headers, columns)?;

    let mut rows = Vec::new();
    let mut solution_version = None;

    for (row_num, result) in reader.records().enumerate() {
        let record = result?;

        if row_num == 0 {
            solution_version = indices
                .solution_version
                .and_then(|index| cell(&record, index))
                .map(|version| version.trim().to_string())
                .filter(|version| !version.is_empty());
        }

        rows.push(TicketRow {
            key: cell(&record, indices.key).unwrap_or_else(|| MISSING_PLACEHOLDER.to_string()),
            category: cell(&record, indices.category),
            note: cell(&record, indices.note),
            approved: indices.approved.and_then(|index| cell(&record, index)),
        });
    }

    Ok(LoadedTable {
        rows,
        has_approval_column: indices.approved.is_some(),
        solution_version,
    })
}

/// Loads ticket rows from a CSV export on disk
///
/// # Errors
/// Returns error if the file cannot be opened or parsed
pub fn load_rows<P: AsRef<Path>>(path: P, columns: &ColumnNames) -> Result<LoadedTable> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        NotesError::Io(e).with_operation_context("open export", Some(path.display().to_string()))
    })?;

    read_rows(file, columns).map_err(|e| {
        e.with_operation_context("read export", Some(path.display().to_string()))
    })
}
