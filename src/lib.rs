mod aggregate;
mod bikeshare;
mod clustering;
mod error;
mod filtering;
mod rental_data;
mod types;
mod view;

pub use bikeshare::*;
pub use error::BikeshareError;

pub use aggregate::{daily_sum, hourly_mean, seasonal_mean};
pub use clustering::weather_points;
pub use filtering::RentalFrameFilterExt;

pub use types::bucket::Bucket;
pub use types::date_range::DateRange;
pub use types::record::{DailyRecord, HourlyRecord};
pub use types::rental_field::RentalField;
pub use types::season::Season;
pub use types::summary::*;

pub use types::rental_frames::daily_frame::*;
pub use types::rental_frames::hourly_frame::*;

pub use view::{DashboardView, RentalTotals};

pub use clustering::error::ClusteringError;
pub use rental_data::error::RentalDataError;
