//! Typed rows of the derived aggregate tables handed to the presentation
//! layer. All of them serialize, since the view model is the crate's outward
//! contract.

use crate::types::bucket::Bucket;
use crate::types::season::Season;
use chrono::NaiveDate;
use serde::Serialize;

/// One row of a summed daily aggregate: a date and a single count.
///
/// Which count it is (`rental_count`, `register_count`, `casual_count`)
/// depends on the [`crate::RentalField`] the aggregation ran over.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize)]
pub struct DailyCount {
    pub date: NaiveDate,
    pub count: i64,
}

/// Mean total rentals for one hour of day, across every date observed.
#[derive(Debug, PartialEq, Clone, Copy, Serialize)]
pub struct HourlyMean {
    pub hour: u32,
    pub mean_count: f64,
}

/// Mean casual and registered rentals within one season.
#[derive(Debug, PartialEq, Clone, Copy, Serialize)]
pub struct SeasonalMean {
    pub season: Season,
    pub mean_casual: f64,
    pub mean_registered: f64,
}

/// One daily record's weather readings annotated with both bucket labels.
#[derive(Debug, PartialEq, Clone, Copy, Serialize)]
pub struct WeatherPoint {
    pub temp: f64,
    pub hum: f64,
    pub temp_cluster: Bucket,
    pub hum_cluster: Bucket,
}
