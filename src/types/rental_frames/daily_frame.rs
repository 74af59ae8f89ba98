//! Contains the `DailyRentalFrame` wrapper for lazy operations on the daily
//! rental table.

use crate::filtering::RentalFrameFilterExt;
use crate::rental_data::error::RentalDataError;
use crate::rental_data::extractor;
use crate::types::date_range::DateRange;
use crate::types::record::DailyRecord;
use polars::prelude::{Expr, LazyFrame};

/// A wrapper around a Polars `LazyFrame` holding the normalized daily rental
/// table.
///
/// Columns: `date` (Date), `season`, `cnt`, `registered`, `casual` (Int64),
/// `temp`, `hum` (Float64). Instances are handed out by
/// [`crate::Bikeshare::daily`]. Operations stay lazy; computation errors
/// surface when a plan is collected.
#[derive(Clone)]
pub struct DailyRentalFrame {
    /// The underlying Polars LazyFrame.
    pub frame: LazyFrame,
}

impl DailyRentalFrame {
    /// Wraps a `LazyFrame` assumed to carry the normalized daily schema.
    pub fn new(frame: LazyFrame) -> Self {
        Self { frame }
    }

    /// Applies an arbitrary Polars predicate, returning a new frame.
    ///
    /// The original frame is unchanged.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use bikeshare::Bikeshare;
    /// use polars::prelude::col;
    ///
    /// # fn run() -> Result<(), Box<dyn std::error::Error>> {
    /// let bikeshare = Bikeshare::from_dir("data")?;
    ///
    /// // Days where more than half the rentals were casual riders.
    /// let casual_heavy = bikeshare
    ///     .daily()
    ///     .filter(col("casual").gt(col("registered")));
    /// let df = casual_heavy.frame.collect()?;
    /// println!("{}", df);
    /// # Ok(())
    /// # }
    /// ```
    pub fn filter(&self, predicate: Expr) -> DailyRentalFrame {
        DailyRentalFrame::new(self.frame.clone().filter(predicate))
    }

    /// Restricts the table to rows whose date falls within `range`,
    /// inclusive on both ends.
    ///
    /// Row order is preserved. The bounds are not validated here; an
    /// inverted range simply yields an empty frame. Callers wanting
    /// validation go through [`crate::Bikeshare::render_view`].
    pub fn span(&self, range: DateRange) -> DailyRentalFrame {
        DailyRentalFrame::new(self.frame.clone().filter_daily_range(range.start, range.end))
    }

    /// Collects the frame into typed [`DailyRecord`] rows.
    ///
    /// # Errors
    ///
    /// Fails if the plan cannot be collected, a required column is missing,
    /// or a row carries a null count or an unknown season code.
    pub fn collect_records(&self) -> Result<Vec<DailyRecord>, RentalDataError> {
        extractor::collect_daily_records(self.frame.clone())
    }
}
