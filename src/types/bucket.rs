//! Defines the `Bucket` enum, the ordinal classification assigned to a
//! weather reading by the fixed threshold rules.

use serde::{Serialize, Serializer};

/// A three-way ordinal bucket for a normalized weather reading.
///
/// Buckets carry the codes 1-3 used by the scatter-plot coloring. The
/// thresholds differ per reading, so construct a bucket through
/// [`Bucket::from_temp`] or [`Bucket::from_humidity`] rather than comparing
/// values yourself.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub enum Bucket {
    /// Code 1.
    Low = 1,
    /// Code 2.
    Moderate = 2,
    /// Code 3.
    High = 3,
}

impl Bucket {
    /// Classifies a normalized temperature reading.
    ///
    /// Readings below 0.5 fall in bucket 1, readings in `[0.5, 0.75)` in
    /// bucket 2, and readings from 0.75 up in bucket 3. Returns `None` for
    /// NaN or infinite readings; those must never be silently bucketed.
    ///
    /// # Examples
    ///
    /// ```
    /// use bikeshare::Bucket;
    ///
    /// assert_eq!(Bucket::from_temp(0.5), Some(Bucket::Moderate));
    /// assert_eq!(Bucket::from_temp(f64::NAN), None);
    /// ```
    pub fn from_temp(temp: f64) -> Option<Bucket> {
        if !temp.is_finite() {
            return None;
        }
        Some(if temp < 0.5 {
            Bucket::Low
        } else if temp < 0.75 {
            Bucket::Moderate
        } else {
            Bucket::High
        })
    }

    /// Classifies a normalized humidity reading.
    ///
    /// Readings below 0.3 fall in bucket 1, readings in `[0.3, 0.6)` in
    /// bucket 2, and readings from 0.6 up in bucket 3. Returns `None` for
    /// NaN or infinite readings.
    pub fn from_humidity(hum: f64) -> Option<Bucket> {
        if !hum.is_finite() {
            return None;
        }
        Some(if hum < 0.3 {
            Bucket::Low
        } else if hum < 0.6 {
            Bucket::Moderate
        } else {
            Bucket::High
        })
    }

    /// The bucket code (1-3) carried into the annotated table.
    pub fn code(&self) -> u8 {
        *self as u8
    }
}

/// Buckets serialize as their numeric code, matching the `temp_cluster` and
/// `hum_cluster` column values consumers expect.
impl Serialize for Bucket {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u8(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn temperature_thresholds() {
        let readings = [0.4, 0.5, 0.6, 0.75, 0.9];
        let codes: Vec<u8> = readings
            .iter()
            .map(|t| Bucket::from_temp(*t).unwrap().code())
            .collect();
        assert_eq!(codes, vec![1, 2, 2, 3, 3]);
    }

    #[test]
    fn humidity_thresholds() {
        let readings = [0.2, 0.3, 0.5, 0.6, 0.8];
        let codes: Vec<u8> = readings
            .iter()
            .map(|h| Bucket::from_humidity(*h).unwrap().code())
            .collect();
        assert_eq!(codes, vec![1, 2, 2, 3, 3]);
    }

    #[test]
    fn non_finite_readings_have_no_bucket() {
        assert_eq!(Bucket::from_temp(f64::NAN), None);
        assert_eq!(Bucket::from_temp(f64::INFINITY), None);
        assert_eq!(Bucket::from_humidity(f64::NAN), None);
        assert_eq!(Bucket::from_humidity(f64::NEG_INFINITY), None);
    }

    #[test]
    fn buckets_are_ordered() {
        assert!(Bucket::Low < Bucket::Moderate);
        assert!(Bucket::Moderate < Bucket::High);
    }
}
