use chrono::NaiveDate;
use polars::prelude::{col, lit, DataType, LazyFrame};

pub trait RentalFrameFilterExt {
    /// Filters a daily LazyFrame by a NaiveDate range (inclusive).
    /// Assumes the 'date' column carries `DataType::Date`.
    ///
    /// # Arguments
    /// * `start_date`: The start NaiveDate (inclusive).
    /// * `end_date`: The end NaiveDate (inclusive).
    ///
    /// # Returns
    /// A new `LazyFrame` with the filter applied. The bounds are not
    /// validated; an inverted pair yields an empty frame. Potential
    /// execution errors occur during `collect`.
    fn filter_daily_range(self, start_date: NaiveDate, end_date: NaiveDate) -> LazyFrame;
}

impl RentalFrameFilterExt for LazyFrame {
    fn filter_daily_range(self, start_date: NaiveDate, end_date: NaiveDate) -> LazyFrame {
        self.filter(
            col("date")
                .cast(DataType::Date)
                .gt_eq(lit(start_date))
                .and(col("date").cast(DataType::Date).lt_eq(lit(end_date))),
        )
    }
}
