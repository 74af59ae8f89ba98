//! The view model assembled for one render pass, and its assembly.

use crate::aggregate;
use crate::clustering;
use crate::error::BikeshareError;
use crate::rental_data::error::RentalDataError;
use crate::rental_data::extractor;
use crate::types::date_range::DateRange;
use crate::types::rental_field::RentalField;
use crate::types::rental_frames::daily_frame::DailyRentalFrame;
use crate::types::rental_frames::hourly_frame::HourlyRentalFrame;
use crate::types::summary::{DailyCount, HourlyMean, SeasonalMean, WeatherPoint};
use log::debug;
use serde::Serialize;

/// The three headline metrics over the selected range.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize)]
pub struct RentalTotals {
    pub rentals: i64,
    pub registered: i64,
    pub casual: i64,
}

/// Everything the presentation layer needs for one render pass.
///
/// Recomputed from the loaded tables on every [`crate::Bikeshare::render_view`]
/// call; nothing is cached between passes. The daily series and the seasonal
/// profile cover the selected range; the hourly profile and the weather
/// points cover the whole dataset.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    /// The range this view was rendered for.
    pub range: DateRange,
    /// Total, registered and casual rentals within the range.
    pub totals: RentalTotals,
    /// Summed rentals per day within the range (`rental_count`).
    pub daily_rentals: Vec<DailyCount>,
    /// Summed registered-user rentals per day within the range.
    pub daily_registered: Vec<DailyCount>,
    /// Summed casual-user rentals per day within the range.
    pub daily_casual: Vec<DailyCount>,
    /// Mean rentals per hour of day, across the whole dataset.
    pub hourly_profile: Vec<HourlyMean>,
    /// Mean casual/registered rentals per season within the range.
    pub seasonal_profile: Vec<SeasonalMean>,
    /// Weather readings of the whole dataset, bucket-annotated.
    pub weather_points: Vec<WeatherPoint>,
}

pub(crate) fn build_view(
    daily: &DailyRentalFrame,
    hourly: &HourlyRentalFrame,
    range: DateRange,
) -> Result<DashboardView, BikeshareError> {
    let in_range = daily.span(range);

    let daily_rentals = collect_sum(&in_range, RentalField::Total)?;
    let daily_registered = collect_sum(&in_range, RentalField::Registered)?;
    let daily_casual = collect_sum(&in_range, RentalField::Casual)?;

    let totals = RentalTotals {
        rentals: daily_rentals.iter().map(|row| row.count).sum(),
        registered: daily_registered.iter().map(|row| row.count).sum(),
        casual: daily_casual.iter().map(|row| row.count).sum(),
    };

    let hourly_profile = extractor::collect_hourly_means(aggregate::hourly_mean(hourly))?;
    let seasonal_profile = extractor::collect_seasonal_means(aggregate::seasonal_mean(&in_range))?;
    let weather_points = clustering::weather_points(daily)?;

    debug!(
        "Rendered view for {} to {}: {} days in range, {} weather points",
        range.start,
        range.end,
        daily_rentals.len(),
        weather_points.len()
    );

    Ok(DashboardView {
        range,
        totals,
        daily_rentals,
        daily_registered,
        daily_casual,
        hourly_profile,
        seasonal_profile,
        weather_points,
    })
}

fn collect_sum(
    frame: &DailyRentalFrame,
    field: RentalField,
) -> Result<Vec<DailyCount>, RentalDataError> {
    extractor::collect_daily_counts(aggregate::daily_sum(frame, field), field.count_column())
}
