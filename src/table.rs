//! Typed row extraction from delimited tables.
//!
//! Tables are read from any [`io::Read`] (an in-memory buffer, a socket, a
//! file the caller opened) with a header line naming the columns. Required
//! columns are checked up front and every row is parsed and validated before
//! anything downstream runs.

use std::io;

use csv::{ErrorKind, ReaderBuilder, StringRecord, Trim};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, Level};

use crate::error::{MalformedInput, Result};
use crate::models::{CarRow, DistanceRow};

/// A row type that can be read from a headed table.
///
/// # Examples
///
/// ```
/// use u_tolling::models::DistanceRow;
/// use u_tolling::table::FromTable;
///
/// let data = "id_start,id_end,distance\n1001400,1001402,9.7\n";
/// let rows = DistanceRow::from_reader(data.as_bytes()).unwrap();
/// assert_eq!(rows, vec![DistanceRow::new(1001400, 1001402, 9.7)]);
/// ```
pub trait FromTable: DeserializeOwned {
    /// Columns that must be present in the header.
    const COLUMNS: &'static [&'static str];

    /// Row-level validation run after parsing.
    fn check(&self) -> std::result::Result<(), MalformedInput> {
        Ok(())
    }

    /// Reads every row, failing on the first malformed one.
    fn from_reader<R: io::Read>(reader: R) -> Result<Vec<Self>> {
        read_rows(reader)
    }
}

impl FromTable for DistanceRow {
    const COLUMNS: &'static [&'static str] = &["id_start", "id_end", "distance"];

    fn check(&self) -> std::result::Result<(), MalformedInput> {
        self.validate()
    }
}

impl FromTable for CarRow {
    const COLUMNS: &'static [&'static str] = &["id_1", "id_2", "car"];
}

/// Reads typed rows from comma-separated data with a header line.
///
/// Cells and headers are trimmed. Extra columns are ignored.
#[instrument(skip_all, level = Level::DEBUG)]
pub fn read_rows<T: FromTable, R: io::Read>(reader: R) -> Result<Vec<T>> {
    let mut rdr = ReaderBuilder::new().trim(Trim::All).from_reader(reader);
    let headers = rdr.headers().map_err(|e| unreadable(&e))?.clone();
    for &column in T::COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(MalformedInput::MissingColumn(column.to_string()).into());
        }
    }

    let mut rows = Vec::new();
    for (idx, record) in rdr.records().enumerate() {
        let record = record.map_err(|e| record_error(&e, idx))?;
        let row: T = record
            .deserialize(Some(&headers))
            .map_err(|e| match e.kind() {
                ErrorKind::Deserialize { err, .. } => value_error(err, &headers, &record, idx),
                _ => unreadable(&e),
            })?;
        row.check()?;
        rows.push(row);
    }
    debug!(rows = rows.len(), columns = headers.len(), "table read");
    Ok(rows)
}

fn unreadable(err: &csv::Error) -> MalformedInput {
    MalformedInput::Unreadable(err.to_string())
}

fn record_error(err: &csv::Error, row: usize) -> MalformedInput {
    match err.kind() {
        ErrorKind::UnequalLengths {
            expected_len, len, ..
        } => MalformedInput::RaggedRow {
            row,
            found: *len as usize,
            expected: *expected_len as usize,
        },
        _ => unreadable(err),
    }
}

fn value_error(
    err: &csv::DeserializeError,
    headers: &StringRecord,
    record: &StringRecord,
    row: usize,
) -> MalformedInput {
    match err.field().map(|f| f as usize) {
        Some(field) => MalformedInput::InvalidValue {
            column: headers.get(field).unwrap_or_default().to_string(),
            row,
            value: record.get(field).unwrap_or_default().to_string(),
        },
        None => MalformedInput::Unreadable(format!("row {row}: {err}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_extra_columns_and_order() {
        let data = "id_2, car, moto, id_1\n2, 7.5, 1.0, 1\n1, 8, 1.0, 2\n";
        let rows = CarRow::from_reader(data.as_bytes()).expect("valid");
        assert_eq!(rows, vec![CarRow::new(1, 2, 7.5), CarRow::new(2, 1, 8.0)]);
    }

    #[test]
    fn test_missing_column() {
        let data = "id_start,id_end\n1,2\n";
        let err = DistanceRow::from_reader(data.as_bytes()).unwrap_err();
        assert_eq!(
            err,
            Error::MalformedInput(MalformedInput::MissingColumn("distance".into()))
        );
    }

    #[test]
    fn test_non_numeric_distance() {
        let data = "id_start,id_end,distance\n1,2,3.0\n2,3,far\n";
        let err = DistanceRow::from_reader(data.as_bytes()).unwrap_err();
        assert_eq!(
            err,
            Error::MalformedInput(MalformedInput::InvalidValue {
                column: "distance".into(),
                row: 1,
                value: "far".into(),
            })
        );
    }

    #[test]
    fn test_non_numeric_id() {
        let data = "id_start,id_end,distance\nA,2,3.0\n";
        let err = DistanceRow::from_reader(data.as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            Error::MalformedInput(MalformedInput::InvalidValue { row: 0, .. })
        ));
    }

    #[test]
    fn test_negative_distance() {
        let data = "id_start,id_end,distance\n1,2,-3.0\n";
        let err = DistanceRow::from_reader(data.as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            Error::MalformedInput(MalformedInput::InvalidDistance { .. })
        ));
    }

    #[test]
    fn test_ragged_row() {
        let data = "id_start,id_end,distance\n1,2,3.0\n1,2\n";
        let err = DistanceRow::from_reader(data.as_bytes()).unwrap_err();
        assert_eq!(
            err,
            Error::MalformedInput(MalformedInput::RaggedRow {
                row: 1,
                found: 2,
                expected: 3,
            })
        );
    }

    #[test]
    fn test_header_only() {
        let data = "id_start,id_end,distance\n";
        assert!(DistanceRow::from_reader(data.as_bytes())
            .expect("valid")
            .is_empty());
    }

    #[test]
    fn test_no_header() {
        let err = DistanceRow::from_reader(&b""[..]).unwrap_err();
        assert!(matches!(
            err,
            Error::MalformedInput(MalformedInput::MissingColumn(_))
        ));
    }
}
