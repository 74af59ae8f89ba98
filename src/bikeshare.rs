//! The entry point for loading the rental dataset and rendering views over
//! it. One `Bikeshare` instance is constructed at process start and passed
//! by reference into everything downstream.

use crate::error::BikeshareError;
use crate::rental_data::error::RentalDataError;
use crate::rental_data::{extractor, loader};
use crate::types::date_range::DateRange;
use crate::types::rental_frames::daily_frame::DailyRentalFrame;
use crate::types::rental_frames::hourly_frame::HourlyRentalFrame;
use crate::view::{self, DashboardView};
use bon::bon;
use log::info;
use polars::frame::DataFrame;
use polars::prelude::IntoLazy;
use std::path::{Path, PathBuf};

/// Conventional file name of the daily table.
pub const DAILY_FILE_NAME: &str = "df_day.csv";
/// Conventional file name of the hourly table.
pub const HOURLY_FILE_NAME: &str = "df_hour.csv";

/// Holds the loaded rental tables and answers view requests over them.
///
/// The tables are read-only after the load. Every call to
/// [`Bikeshare::render_view`] recomputes its aggregates from the tables and
/// the given range; nothing is cached between calls, so re-rendering after a
/// range change is just another call.
///
/// # Examples
///
/// ```no_run
/// # use bikeshare::{Bikeshare, BikeshareError};
/// # fn run() -> Result<(), BikeshareError> {
/// let bikeshare = Bikeshare::from_dir("data")?;
/// let view = bikeshare.render_view(bikeshare.date_bounds())?;
/// println!("{} rentals", view.totals.rentals);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Bikeshare {
    daily: DataFrame,
    hourly: DataFrame,
    bounds: DateRange,
}

#[bon]
impl Bikeshare {
    /// Loads the dataset from explicit file paths.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use bikeshare::{Bikeshare, BikeshareError};
    /// # fn run() -> Result<(), BikeshareError> {
    /// let bikeshare = Bikeshare::from_files()
    ///     .daily_file("data/df_day.csv")
    ///     .hourly_file("data/df_hour.csv")
    ///     .load()?;
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`BikeshareError::RentalData`] if either file cannot be read,
    /// a required column is missing, a date value does not parse, or the
    /// daily table is empty.
    #[builder(finish_fn = load)]
    pub fn from_files(
        #[builder(into)] daily_file: PathBuf,
        #[builder(into)] hourly_file: PathBuf,
    ) -> Result<Self, BikeshareError> {
        let daily = loader::load_daily(&daily_file)?;
        let hourly = loader::load_hourly(&hourly_file)?;
        Self::assemble(daily, hourly)
    }

    /// Loads the dataset from a directory holding the conventional file
    /// names [`DAILY_FILE_NAME`] and [`HOURLY_FILE_NAME`].
    pub fn from_dir(dir: impl AsRef<Path>) -> Result<Self, BikeshareError> {
        let dir = dir.as_ref();
        Self::from_files()
            .daily_file(dir.join(DAILY_FILE_NAME))
            .hourly_file(dir.join(HOURLY_FILE_NAME))
            .load()
    }

    /// Builds a `Bikeshare` from pre-loaded raw tables carrying the source
    /// column names. Runs the same normalization as the file loaders.
    pub fn from_frames(daily: DataFrame, hourly: DataFrame) -> Result<Self, BikeshareError> {
        let daily = loader::normalize_daily(daily)?;
        let hourly = loader::normalize_hourly(hourly)?;
        Self::assemble(daily, hourly)
    }

    fn assemble(daily: DataFrame, hourly: DataFrame) -> Result<Self, BikeshareError> {
        let bounds = date_bounds_of(&daily)?;
        info!(
            "Rental dataset spans {} to {} ({} daily, {} hourly records)",
            bounds.start,
            bounds.end,
            daily.height(),
            hourly.height()
        );
        Ok(Self {
            daily,
            hourly,
            bounds,
        })
    }

    /// A lazy view over the normalized daily table.
    pub fn daily(&self) -> DailyRentalFrame {
        DailyRentalFrame::new(self.daily.clone().lazy())
    }

    /// A lazy view over the normalized hourly table.
    pub fn hourly(&self) -> HourlyRentalFrame {
        HourlyRentalFrame::new(self.hourly.clone().lazy())
    }

    /// The inclusive `[min, max]` date interval present in the daily table.
    ///
    /// A shell should constrain its date picker to this range; ranges
    /// outside it are rejected by [`Bikeshare::render_view`].
    pub fn date_bounds(&self) -> DateRange {
        self.bounds
    }

    /// Computes one full render pass for the given date range.
    ///
    /// # Errors
    ///
    /// Returns [`BikeshareError::InvalidDateRange`] when `start > end` and
    /// [`BikeshareError::RangeOutOfBounds`] when the range reaches outside
    /// [`Bikeshare::date_bounds`]. Data errors from collecting the
    /// aggregates or classifying the weather readings pass through.
    pub fn render_view(&self, range: DateRange) -> Result<DashboardView, BikeshareError> {
        if !range.is_ordered() {
            return Err(BikeshareError::InvalidDateRange {
                start: range.start,
                end: range.end,
            });
        }
        if !self.bounds.encloses(&range) {
            return Err(BikeshareError::RangeOutOfBounds {
                start: range.start,
                end: range.end,
                min: self.bounds.start,
                max: self.bounds.end,
            });
        }
        view::build_view(&self.daily(), &self.hourly(), range)
    }
}

fn date_bounds_of(daily: &DataFrame) -> Result<DateRange, RentalDataError> {
    let dates = daily
        .column("date")
        .map_err(|e| RentalDataError::ColumnNotFound("date".to_string(), e))?
        .date()?;

    let mut min: Option<i32> = None;
    let mut max: Option<i32> = None;
    for days in dates.into_iter().flatten() {
        min = Some(min.map_or(days, |m| m.min(days)));
        max = Some(max.map_or(days, |m| m.max(days)));
    }
    match (min, max) {
        (Some(lo), Some(hi)) => Ok(DateRange::new(
            extractor::date_from_days(lo),
            extractor::date_from_days(hi),
        )),
        _ => Err(RentalDataError::NoRecords {
            table: loader::DAILY_TABLE,
        }),
    }
}
