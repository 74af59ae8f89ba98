use polars::error::PolarsError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RentalDataError {
    #[error("Failed to read CSV file '{path}'")]
    CsvRead {
        path: PathBuf,
        #[source]
        source: PolarsError,
    },

    #[error("Required column '{column}' missing from the {table} table")]
    MissingColumn {
        table: &'static str,
        column: &'static str,
    },

    // Covers unparseable dates and impossible casts; the offending value is
    // in the polars error.
    #[error("Failed to normalize the {table} table")]
    Normalize {
        table: &'static str,
        #[source]
        source: PolarsError,
    },

    #[error("The {table} table contains no records")]
    NoRecords { table: &'static str },

    #[error("Required column '{0}' not found in DataFrame")]
    ColumnNotFound(String, #[source] PolarsError),

    #[error("Unknown season code {0}")]
    UnknownSeason(i64),

    #[error("Unexpected value {value} in column '{column}'")]
    UnexpectedValue { column: String, value: i64 },

    #[error("Missing value in column '{column}' at row {row}")]
    MissingValue { column: String, row: usize },

    #[error("Failed processing DataFrame: {0}")]
    DataFrameProcessing(#[from] PolarsError),
}
