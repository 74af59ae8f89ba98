//! Contains the `HourlyRentalFrame` wrapper for lazy operations on the
//! hourly rental table.

use crate::rental_data::error::RentalDataError;
use crate::rental_data::extractor;
use crate::types::record::HourlyRecord;
use polars::prelude::{Expr, LazyFrame};

/// A wrapper around a Polars `LazyFrame` holding the normalized hourly
/// rental table.
///
/// Columns: `hour`, `cnt` (both Int64). Instances are handed out by
/// [`crate::Bikeshare::hourly`]. The hourly table carries no calendar date;
/// it feeds the dataset-wide hour-of-day profile.
#[derive(Clone)]
pub struct HourlyRentalFrame {
    /// The underlying Polars LazyFrame.
    pub frame: LazyFrame,
}

impl HourlyRentalFrame {
    /// Wraps a `LazyFrame` assumed to carry the normalized hourly schema.
    pub fn new(frame: LazyFrame) -> Self {
        Self { frame }
    }

    /// Applies an arbitrary Polars predicate, returning a new frame.
    pub fn filter(&self, predicate: Expr) -> HourlyRentalFrame {
        HourlyRentalFrame::new(self.frame.clone().filter(predicate))
    }

    /// Collects the frame into typed [`HourlyRecord`] rows.
    pub fn collect_records(&self) -> Result<Vec<HourlyRecord>, RentalDataError> {
        extractor::collect_hourly_records(self.frame.clone())
    }
}
