//! Reads the two rental CSV files and normalizes them to the in-memory
//! schemas the rest of the crate works against.

use crate::rental_data::error::RentalDataError;
use log::info;
use polars::frame::DataFrame;
use polars::prelude::*;
use std::path::Path;

pub(crate) const DAILY_TABLE: &str = "daily";
pub(crate) const HOURLY_TABLE: &str = "hourly";

/// Columns the daily CSV must carry. Extra columns are ignored.
const DAILY_SOURCE_COLUMNS: [&str; 7] = [
    "dteday",
    "season",
    "cnt",
    "registered",
    "casual",
    "temp",
    "hum",
];

/// Columns the hourly CSV must carry.
const HOURLY_SOURCE_COLUMNS: [&str; 2] = ["hr", "cnt"];

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Reads the daily CSV and normalizes it. An unreadable file, a missing
/// required column, or an unparseable date value fails the load.
pub(crate) fn load_daily(path: &Path) -> Result<DataFrame, RentalDataError> {
    let df = read_csv(path)?;
    let df = normalize_daily(df)?;
    info!("Loaded {} daily rental records from {:?}", df.height(), path);
    Ok(df)
}

/// Reads the hourly CSV and normalizes it.
pub(crate) fn load_hourly(path: &Path) -> Result<DataFrame, RentalDataError> {
    let df = read_csv(path)?;
    let df = normalize_hourly(df)?;
    info!(
        "Loaded {} hourly rental records from {:?}",
        df.height(),
        path
    );
    Ok(df)
}

fn read_csv(path: &Path) -> Result<DataFrame, RentalDataError> {
    CsvReadOptions::default()
        .with_has_header(true)
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|e| RentalDataError::CsvRead {
            path: path.to_path_buf(),
            source: e,
        })?
        .finish()
        .map_err(|e| RentalDataError::CsvRead {
            path: path.to_path_buf(),
            source: e,
        })
}

/// Normalizes a raw daily table: checks the required columns, strictly
/// parses the `dteday` strings into a Date column, and selects the analytic
/// columns with coerced dtypes.
pub(crate) fn normalize_daily(df: DataFrame) -> Result<DataFrame, RentalDataError> {
    require_columns(&df, DAILY_TABLE, &DAILY_SOURCE_COLUMNS)?;
    df.lazy()
        .select([
            col("dteday")
                .str()
                .to_date(StrptimeOptions {
                    format: Some(DATE_FORMAT.into()),
                    ..Default::default()
                })
                .alias("date"),
            col("season").cast(DataType::Int64),
            col("cnt").cast(DataType::Int64),
            col("registered").cast(DataType::Int64),
            col("casual").cast(DataType::Int64),
            col("temp").cast(DataType::Float64),
            col("hum").cast(DataType::Float64),
        ])
        .collect()
        .map_err(|e| RentalDataError::Normalize {
            table: DAILY_TABLE,
            source: e,
        })
}

/// Normalizes a raw hourly table: checks the required columns and selects
/// `hr` (renamed `hour`) and `cnt` with coerced dtypes.
pub(crate) fn normalize_hourly(df: DataFrame) -> Result<DataFrame, RentalDataError> {
    require_columns(&df, HOURLY_TABLE, &HOURLY_SOURCE_COLUMNS)?;
    df.lazy()
        .select([
            col("hr").cast(DataType::Int64).alias("hour"),
            col("cnt").cast(DataType::Int64),
        ])
        .collect()
        .map_err(|e| RentalDataError::Normalize {
            table: HOURLY_TABLE,
            source: e,
        })
}

fn require_columns(
    df: &DataFrame,
    table: &'static str,
    required: &[&'static str],
) -> Result<(), RentalDataError> {
    let names = df.get_column_names();
    for column in required {
        if !names.iter().any(|name| name.as_str() == *column) {
            return Err(RentalDataError::MissingColumn { table, column });
        }
    }
    Ok(())
}
