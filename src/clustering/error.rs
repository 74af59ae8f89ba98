use polars::error::PolarsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClusteringError {
    #[error("Non-finite {column} reading {value} at row {row}")]
    InvalidReading {
        column: &'static str,
        value: f64,
        row: usize,
    },

    #[error("Missing {column} reading at row {row}")]
    MissingReading { column: &'static str, row: usize },

    #[error("Failed processing DataFrame: {0}")]
    Frame(#[from] PolarsError),
}
