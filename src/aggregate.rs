//! Pure reductions over the rental tables.
//!
//! Each function builds a lazy Polars plan; nothing is computed until the
//! plan is collected. The functions reduce whatever frame they are handed;
//! date-range filtering, where wanted, happens before.

use crate::types::rental_field::RentalField;
use crate::types::rental_frames::daily_frame::DailyRentalFrame;
use crate::types::rental_frames::hourly_frame::HourlyRentalFrame;
use polars::prelude::{col, LazyFrame};

/// Sums one rental count per calendar date.
///
/// The daily table carries one row per date, so today this is a per-row
/// identity sum; grouping keeps it correct should that ever change. Output
/// columns: `date` plus the field's count column (`rental_count`,
/// `register_count` or `casual_count`), sorted by date ascending.
pub fn daily_sum(frame: &DailyRentalFrame, field: RentalField) -> LazyFrame {
    frame
        .frame
        .clone()
        .group_by([col("date")])
        .agg([col(field.column()).sum().alias(field.count_column())])
        .sort(["date"], Default::default())
}

/// Mean total rentals per hour of day, across every date in the table.
///
/// Hours with no observations are omitted, not zero-filled. The mean
/// divides by the number of contributing rows; a single observation yields
/// itself. Output columns: `hour`, `mean_count`, sorted by hour.
pub fn hourly_mean(frame: &HourlyRentalFrame) -> LazyFrame {
    frame
        .frame
        .clone()
        .group_by([col("hour")])
        .agg([col("cnt").mean().alias("mean_count")])
        .sort(["hour"], Default::default())
}

/// Mean casual and registered rentals per season.
///
/// Seasons absent from the input are omitted. Output columns: `season`,
/// `mean_casual`, `mean_registered`, sorted by season code.
pub fn seasonal_mean(frame: &DailyRentalFrame) -> LazyFrame {
    frame
        .frame
        .clone()
        .group_by([col("season")])
        .agg([
            col("casual").mean().alias("mean_casual"),
            col("registered").mean().alias("mean_registered"),
        ])
        .sort(["season"], Default::default())
}
