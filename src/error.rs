use crate::clustering::error::ClusteringError;
use crate::rental_data::error::RentalDataError;
use chrono::NaiveDate;
use polars::error::PolarsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BikeshareError {
    #[error(transparent)]
    RentalData(#[from] RentalDataError),

    #[error(transparent)]
    Clustering(#[from] ClusteringError),

    #[error("Invalid date range: start {start} is after end {end}")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },

    #[error("Date range [{start}, {end}] falls outside the dataset's [{min}, {max}]")]
    RangeOutOfBounds {
        start: NaiveDate,
        end: NaiveDate,
        min: NaiveDate,
        max: NaiveDate,
    },

    #[error("Failed processing DataFrame: {0}")]
    Polars(#[from] PolarsError),
}
