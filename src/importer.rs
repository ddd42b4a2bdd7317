use std::collections::HashMap;
use std::io::{BufRead, BufReader};
use std::path::Path;

use csv::StringRecord;

use crate::error::{ConvertError, Result, RowError};
use crate::models::{columns, SourceRecord};

// ---------------------------------------------------------------------------
// Header sniff
// ---------------------------------------------------------------------------

pub struct HeaderSniff {
    pub first_line: String,
    pub recognized: bool,
}

/// Check that `file_path` exists and peek at its first line for the
/// Portfolio Performance header tokens. Only a missing or unreadable file is
/// an error; an unrecognized header is reported through `recognized`.
pub fn sniff_header(file_path: &Path) -> Result<HeaderSniff> {
    if !file_path.exists() {
        return Err(ConvertError::SourceNotFound(file_path.to_path_buf()));
    }
    let file = std::fs::File::open(file_path)?;
    let mut first_line = String::new();
    BufReader::new(file).read_line(&mut first_line)?;
    let first_line = first_line.trim().to_string();
    let recognized = columns::SNIFF.iter().all(|tok| first_line.contains(tok));
    Ok(HeaderSniff {
        first_line,
        recognized,
    })
}

// ---------------------------------------------------------------------------
// Column lookup
// ---------------------------------------------------------------------------

/// Header-name → position map for one export.
#[derive(Debug, Clone)]
pub struct SourceColumns {
    names: Vec<String>,
    index: HashMap<String, usize>,
}

impl SourceColumns {
    pub fn from_headers(headers: &StringRecord) -> Self {
        let names: Vec<String> = headers.iter().map(|h| h.to_string()).collect();
        let mut index = HashMap::new();
        for (i, name) in names.iter().enumerate() {
            // First occurrence wins on duplicated headers.
            index.entry(name.trim().to_string()).or_insert(i);
        }
        Self { names, index }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    fn get<'r>(&self, record: &'r StringRecord, column: &str) -> Option<&'r str> {
        self.index.get(column).and_then(|&i| record.get(i))
    }

    fn required(&self, record: &StringRecord, column: &str) -> std::result::Result<String, RowError> {
        self.get(record, column)
            .map(str::to_string)
            .ok_or_else(|| RowError::MissingField(column.to_string()))
    }

    pub fn extract(&self, record: &StringRecord) -> std::result::Result<SourceRecord, RowError> {
        Ok(SourceRecord {
            date: self.required(record, columns::DATE)?,
            kind: self.required(record, columns::TYPE)?,
            title: self.required(record, columns::TITLE)?,
            shares: self.required(record, columns::SHARES)?,
            price: self.required(record, columns::PRICE)?,
            amount: self.required(record, columns::AMOUNT)?,
            fees: self.required(record, columns::FEES)?,
            note: self.required(record, columns::NOTE)?,
            origin: self.required(record, columns::ORIGIN)?,
        })
    }

    /// Render a row as `{header: value, ...}` for error reports.
    pub fn describe(&self, record: &StringRecord) -> String {
        let pairs: Vec<String> = record
            .iter()
            .enumerate()
            .map(|(i, value)| match self.names.get(i) {
                Some(name) => format!("{name}: {value:?}"),
                None => format!("#{i}: {value:?}"),
            })
            .collect();
        format!("{{{}}}", pairs.join(", "))
    }
}

// ---------------------------------------------------------------------------
// Export reader
// ---------------------------------------------------------------------------

/// A whole Portfolio Performance export, read up front. Any record the
/// reader cannot decode (e.g. invalid UTF-8) fails the whole read.
pub struct SourceTable {
    pub columns: SourceColumns,
    pub rows: Vec<StringRecord>,
}

pub fn read_source(file_path: &Path, delimiter: u8) -> Result<SourceTable> {
    let file = std::fs::File::open(file_path)?;
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .from_reader(BufReader::new(file));
    let columns = SourceColumns::from_headers(rdr.headers()?);

    let rows = rdr.records().collect::<std::result::Result<Vec<_>, _>>()?;
    Ok(SourceTable { columns, rows })
}
