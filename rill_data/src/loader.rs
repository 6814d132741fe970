// Copyright 2025 the Rill Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! CSV loading into chart records.
//!
//! The expected shape is a header row naming at least `date`, `value` and
//! `key` (in any order; extra columns are ignored), then one row per
//! category per time point. Dates parse under the fixed `%Y` format (a
//! four-digit year) and land on January 1st of that year.
//!
//! Every failure mode is a typed [`LoadError`]. Callers render the error as
//! a visible fallback state; a bad resource must never produce a silently
//! blank chart.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use chrono::{Datelike, NaiveDate};
use rill_charts::Record;
use thiserror::Error;

const DATE_COLUMN: &str = "date";
const VALUE_COLUMN: &str = "value";
const KEY_COLUMN: &str = "key";

/// Errors raised while loading a CSV resource.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The resource could not be read at all.
    #[error("failed to read {path}: {source}")]
    Io {
        /// The path that failed.
        path: String,
        /// The underlying I/O error.
        source: std::io::Error,
    },
    /// The CSV structure is malformed.
    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),
    /// The header row lacks a required column.
    #[error("missing required column `{0}`")]
    MissingColumn(&'static str),
    /// A row is shorter than the header promised.
    #[error("row {row}: missing field `{column}`")]
    MissingField {
        /// 1-based data row number.
        row: usize,
        /// The absent column.
        column: &'static str,
    },
    /// A date cell does not parse as a four-digit year.
    #[error("row {row}: date {value:?} does not parse as a year")]
    BadDate {
        /// 1-based data row number.
        row: usize,
        /// The offending cell.
        value: String,
    },
    /// A value cell is not numeric.
    #[error("row {row}: value {value:?} is not numeric")]
    BadValue {
        /// 1-based data row number.
        row: usize,
        /// The offending cell.
        value: String,
    },
}

/// Loads records from a CSV file on disk.
pub fn load_records(path: impl AsRef<Path>) -> Result<Vec<Record>, LoadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    read_records(file)
}

/// Parses records from any CSV reader.
pub fn read_records(reader: impl Read) -> Result<Vec<Record>, LoadError> {
    let mut csv = csv::Reader::from_reader(reader);

    let headers = csv.headers()?.clone();
    let column = |name: &'static str| -> Result<usize, LoadError> {
        headers
            .iter()
            .position(|h| h == name)
            .ok_or(LoadError::MissingColumn(name))
    };
    let date_col = column(DATE_COLUMN)?;
    let value_col = column(VALUE_COLUMN)?;
    let key_col = column(KEY_COLUMN)?;

    let mut out = Vec::new();
    for (i, row) in csv.records().enumerate() {
        let row_num = i + 1;
        let row = row?;
        let field = |col: usize, column: &'static str| -> Result<&str, LoadError> {
            row.get(col).ok_or(LoadError::MissingField {
                row: row_num,
                column,
            })
        };

        let raw_date = field(date_col, DATE_COLUMN)?;
        let date = parse_year_date(raw_date).ok_or_else(|| LoadError::BadDate {
            row: row_num,
            value: raw_date.to_owned(),
        })?;

        let raw_value = field(value_col, VALUE_COLUMN)?;
        let value = raw_value
            .trim()
            .parse::<f64>()
            .map_err(|_| LoadError::BadValue {
                row: row_num,
                value: raw_value.to_owned(),
            })?;

        out.push(Record {
            year: f64::from(date.year()),
            value,
            key: field(key_col, KEY_COLUMN)?.to_owned(),
        });
    }
    Ok(out)
}

/// Parses a cell under the fixed year format, landing on January 1st.
fn parse_year_date(raw: &str) -> Option<NaiveDate> {
    let year: i32 = raw.trim().parse().ok()?;
    NaiveDate::from_ymd_opt(year, 1, 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_rows_into_records() {
        let csv = "key,value,date\nAlpha,250000,1999\nBeta,90000,1999\n";
        let records = read_records(csv.as_bytes()).expect("well-formed CSV");
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].year, 1999.0);
        assert_eq!(records[0].value, 250_000.0);
        assert_eq!(records[0].key, "Alpha");
    }

    #[test]
    fn extra_columns_are_ignored() {
        let csv = "date,ignored,value,key\n1998,x,1.5,A\n";
        let records = read_records(csv.as_bytes()).expect("well-formed CSV");
        assert_eq!(records[0].year, 1998.0);
        assert_eq!(records[0].value, 1.5);
    }

    #[test]
    fn missing_columns_are_reported() {
        let err = read_records("key,value\nA,1\n".as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::MissingColumn("date")));
    }

    #[test]
    fn bad_cells_are_reported_with_row_context() {
        let err = read_records("date,value,key\nlater,1,A\n".as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::BadDate { row: 1, .. }));

        let err = read_records("date,value,key\n1999,lots,A\n".as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::BadValue { row: 1, .. }));
    }

    #[test]
    fn unreadable_files_are_reported() {
        let err = load_records("definitely/not/here.csv").unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }
}
