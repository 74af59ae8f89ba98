//! Threshold bucketing of the daily weather readings.
//!
//! The dashboard's scatter plots color each day by its temperature or
//! humidity bucket. Bucketing always runs over the full daily table rather
//! than the selected date window: the weather view is dataset-wide.

pub mod error;

use crate::clustering::error::ClusteringError;
use crate::types::bucket::Bucket;
use crate::types::rental_frames::daily_frame::DailyRentalFrame;
use crate::types::summary::WeatherPoint;
use polars::prelude::col;

/// Annotates every row of the daily table with a temperature bucket and a
/// humidity bucket.
///
/// # Errors
///
/// A null reading fails with [`ClusteringError::MissingReading`] and a NaN
/// or infinite reading with [`ClusteringError::InvalidReading`]; no row is
/// ever silently assigned a bucket.
pub fn weather_points(frame: &DailyRentalFrame) -> Result<Vec<WeatherPoint>, ClusteringError> {
    let df = frame
        .frame
        .clone()
        .select([col("temp"), col("hum")])
        .collect()?;
    let temps = df.column("temp")?.f64()?;
    let hums = df.column("hum")?.f64()?;

    let mut points = Vec::with_capacity(df.height());
    for (row, (temp, hum)) in temps.into_iter().zip(hums.into_iter()).enumerate() {
        let temp = temp.ok_or(ClusteringError::MissingReading {
            column: "temp",
            row,
        })?;
        let hum = hum.ok_or(ClusteringError::MissingReading { column: "hum", row })?;
        let temp_cluster = Bucket::from_temp(temp).ok_or(ClusteringError::InvalidReading {
            column: "temp",
            value: temp,
            row,
        })?;
        let hum_cluster = Bucket::from_humidity(hum).ok_or(ClusteringError::InvalidReading {
            column: "hum",
            value: hum,
            row,
        })?;
        points.push(WeatherPoint {
            temp,
            hum,
            temp_cluster,
            hum_cluster,
        });
    }
    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rental_data::loader;
    use polars::df;
    use polars::prelude::IntoLazy;

    fn frame_with_readings(temps: Vec<Option<f64>>, hums: Vec<Option<f64>>) -> DailyRentalFrame {
        let n = temps.len();
        let dates: Vec<String> = (1..=n).map(|i| format!("2011-01-{i:02}")).collect();
        let raw = df!(
            "dteday" => dates,
            "season" => vec![1i64; n],
            "cnt" => vec![10i64; n],
            "registered" => vec![7i64; n],
            "casual" => vec![3i64; n],
            "temp" => temps,
            "hum" => hums,
        )
        .unwrap();
        DailyRentalFrame::new(loader::normalize_daily(raw).unwrap().lazy())
    }

    #[test]
    fn annotates_every_row_with_both_buckets() {
        let frame = frame_with_readings(
            vec![Some(0.4), Some(0.6), Some(0.8)],
            vec![Some(0.2), Some(0.4), Some(0.7)],
        );
        let points = weather_points(&frame).unwrap();
        assert_eq!(points.len(), 3);

        let temp_codes: Vec<u8> = points.iter().map(|p| p.temp_cluster.code()).collect();
        let hum_codes: Vec<u8> = points.iter().map(|p| p.hum_cluster.code()).collect();
        assert_eq!(temp_codes, vec![1, 2, 3]);
        assert_eq!(hum_codes, vec![1, 2, 3]);

        // Readings are carried through untouched.
        assert_eq!(points[1].temp, 0.6);
        assert_eq!(points[1].hum, 0.4);
    }

    #[test]
    fn nan_reading_is_rejected() {
        let frame = frame_with_readings(vec![Some(f64::NAN)], vec![Some(0.4)]);
        let err = weather_points(&frame).unwrap_err();
        assert!(matches!(
            err,
            ClusteringError::InvalidReading {
                column: "temp",
                row: 0,
                ..
            }
        ));
    }

    #[test]
    fn missing_reading_is_rejected() {
        let frame = frame_with_readings(vec![Some(0.4), Some(0.5)], vec![Some(0.4), None]);
        let err = weather_points(&frame).unwrap_err();
        assert!(matches!(
            err,
            ClusteringError::MissingReading {
                column: "hum",
                row: 1
            }
        ));
    }
}
