//! Collects lazy plans into the typed rows the rest of the crate hands to
//! its consumers.

use crate::rental_data::error::RentalDataError;
use crate::types::record::{DailyRecord, HourlyRecord};
use crate::types::season::Season;
use crate::types::summary::{DailyCount, HourlyMean, SeasonalMean};
use chrono::{Duration, NaiveDate};
use polars::frame::DataFrame;
use polars::prelude::*;

/// Retrieves a column by name from a DataFrame.
fn get_column<'a>(df: &'a DataFrame, name: &str) -> Result<&'a Column, RentalDataError> {
    df.column(name)
        .map_err(|e| RentalDataError::ColumnNotFound(name.to_string(), e))
}

/// Converts a Polars Date value (days since the Unix epoch) to a NaiveDate.
/// `NaiveDate::default()` is 1970-01-01.
pub(crate) fn date_from_days(days: i32) -> NaiveDate {
    NaiveDate::default() + Duration::days(days as i64)
}

fn require<T>(value: Option<T>, column: &str, row: usize) -> Result<T, RentalDataError> {
    value.ok_or_else(|| RentalDataError::MissingValue {
        column: column.to_string(),
        row,
    })
}

fn count_u32(value: Option<i64>, column: &str, row: usize) -> Result<u32, RentalDataError> {
    let value = require(value, column, row)?;
    u32::try_from(value).map_err(|_| RentalDataError::UnexpectedValue {
        column: column.to_string(),
        value,
    })
}

/// Collects a summed daily aggregate into typed rows. `count_column` names
/// the single count column the plan produced.
pub(crate) fn collect_daily_counts(
    plan: LazyFrame,
    count_column: &str,
) -> Result<Vec<DailyCount>, RentalDataError> {
    let df = plan.collect()?;
    let dates = get_column(&df, "date")?.date()?;
    let counts = get_column(&df, count_column)?.i64()?;

    let mut rows = Vec::with_capacity(df.height());
    for (row, (date, count)) in dates.into_iter().zip(counts.into_iter()).enumerate() {
        rows.push(DailyCount {
            date: date_from_days(require(date, "date", row)?),
            count: require(count, count_column, row)?,
        });
    }
    Ok(rows)
}

/// Collects the hourly-mean aggregate into typed rows.
pub(crate) fn collect_hourly_means(plan: LazyFrame) -> Result<Vec<HourlyMean>, RentalDataError> {
    let df = plan.collect()?;
    let hours = get_column(&df, "hour")?.i64()?;
    let means = get_column(&df, "mean_count")?.f64()?;

    let mut rows = Vec::with_capacity(df.height());
    for (row, (hour, mean)) in hours.into_iter().zip(means.into_iter()).enumerate() {
        rows.push(HourlyMean {
            hour: count_u32(hour, "hour", row)?,
            mean_count: require(mean, "mean_count", row)?,
        });
    }
    Ok(rows)
}

/// Collects the seasonal-mean aggregate into typed rows. An out-of-range
/// season code is an error, not a silent drop.
pub(crate) fn collect_seasonal_means(
    plan: LazyFrame,
) -> Result<Vec<SeasonalMean>, RentalDataError> {
    let df = plan.collect()?;
    let seasons = get_column(&df, "season")?.i64()?;
    let casual = get_column(&df, "mean_casual")?.f64()?;
    let registered = get_column(&df, "mean_registered")?.f64()?;

    let mut rows = Vec::with_capacity(df.height());
    for row in 0..df.height() {
        let code = require(seasons.get(row), "season", row)?;
        rows.push(SeasonalMean {
            season: Season::from_code(code).ok_or(RentalDataError::UnknownSeason(code))?,
            mean_casual: require(casual.get(row), "mean_casual", row)?,
            mean_registered: require(registered.get(row), "mean_registered", row)?,
        });
    }
    Ok(rows)
}

/// Collects a normalized daily frame into typed records.
pub(crate) fn collect_daily_records(plan: LazyFrame) -> Result<Vec<DailyRecord>, RentalDataError> {
    let df = plan.collect()?;
    let dates = get_column(&df, "date")?.date()?;
    let seasons = get_column(&df, "season")?.i64()?;
    let totals = get_column(&df, "cnt")?.i64()?;
    let registered = get_column(&df, "registered")?.i64()?;
    let casual = get_column(&df, "casual")?.i64()?;
    let temps = get_column(&df, "temp")?.f64()?;
    let hums = get_column(&df, "hum")?.f64()?;

    let mut rows = Vec::with_capacity(df.height());
    for row in 0..df.height() {
        let season_code = require(seasons.get(row), "season", row)?;
        rows.push(DailyRecord {
            date: date_from_days(require(dates.get(row), "date", row)?),
            season: Season::from_code(season_code)
                .ok_or(RentalDataError::UnknownSeason(season_code))?,
            total: count_u32(totals.get(row), "cnt", row)?,
            registered: count_u32(registered.get(row), "registered", row)?,
            casual: count_u32(casual.get(row), "casual", row)?,
            temp: require(temps.get(row), "temp", row)?,
            hum: require(hums.get(row), "hum", row)?,
        });
    }
    Ok(rows)
}

/// Collects a normalized hourly frame into typed records.
pub(crate) fn collect_hourly_records(
    plan: LazyFrame,
) -> Result<Vec<HourlyRecord>, RentalDataError> {
    let df = plan.collect()?;
    let hours = get_column(&df, "hour")?.i64()?;
    let totals = get_column(&df, "cnt")?.i64()?;

    let mut rows = Vec::with_capacity(df.height());
    for (row, (hour, total)) in hours.into_iter().zip(totals.into_iter()).enumerate() {
        rows.push(HourlyRecord {
            hour: count_u32(hour, "hour", row)?,
            total: count_u32(total, "cnt", row)?,
        });
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::df;

    #[test]
    fn date_conversion_matches_the_epoch() {
        assert_eq!(
            date_from_days(0),
            NaiveDate::from_ymd_opt(1970, 1, 1).unwrap()
        );
        assert_eq!(
            date_from_days(14975),
            NaiveDate::from_ymd_opt(2011, 1, 1).unwrap()
        );
    }

    #[test]
    fn unknown_season_code_is_an_error() {
        let df = df!(
            "season" => [9i64],
            "mean_casual" => [1.0f64],
            "mean_registered" => [2.0f64],
        )
        .unwrap();
        let err = collect_seasonal_means(df.lazy()).unwrap_err();
        assert!(matches!(err, RentalDataError::UnknownSeason(9)));
    }

    #[test]
    fn negative_count_is_an_error() {
        let df = df!(
            "hour" => [3i64],
            "cnt" => [-5i64],
        )
        .unwrap();
        let err = collect_hourly_records(df.lazy()).unwrap_err();
        assert!(matches!(err, RentalDataError::UnexpectedValue { .. }));
    }
}
