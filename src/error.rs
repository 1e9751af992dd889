//! Error types.

use thiserror::Error;

use crate::models::LocationId;

/// Input that cannot be turned into a valid table or row set.
///
/// All of these are detected before any computation starts.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MalformedInput {
    #[error("missing required column `{0}`")]
    MissingColumn(String),

    #[error("invalid value `{value}` in column `{column}` at row {row}")]
    InvalidValue {
        column: String,
        row: usize,
        value: String,
    },

    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        found: usize,
        expected: usize,
    },

    #[error("distance {distance} between {from} and {to} must be finite and non-negative")]
    InvalidDistance {
        from: LocationId,
        to: LocationId,
        distance: f64,
    },

    #[error("duplicate entry for pair ({0}, {1})")]
    DuplicatePair(LocationId, LocationId),

    #[error("tolerance {0} must be finite and non-negative")]
    InvalidTolerance(f64),

    #[error("invalid travel window: {0}")]
    InvalidWindow(String),

    #[error("unreadable table: {0}")]
    Unreadable(String),
}

/// Errors produced by this crate.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("malformed input: {0}")]
    MalformedInput(#[from] MalformedInput),

    #[error("reference id {0} has no rows")]
    InvalidReference(LocationId),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_converts() {
        let err: Error = MalformedInput::MissingColumn("distance".into()).into();
        assert!(matches!(err, Error::MalformedInput(_)));
        assert_eq!(
            err.to_string(),
            "malformed input: missing required column `distance`"
        );
    }

    #[test]
    fn test_invalid_reference_message() {
        assert_eq!(
            Error::InvalidReference(1001400).to_string(),
            "reference id 1001400 has no rows"
        );
    }
}
