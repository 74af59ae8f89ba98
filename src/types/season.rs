//! Defines the `Season` enum, mapping the rental dataset's numeric season
//! codes to named variants.

use serde::Serialize;
use std::fmt;

/// The season a daily rental record falls in.
///
/// The daily source table stores seasons as integer codes 1-4. Convert a code
/// (e.g. one read from a Polars column) into this enum using
/// [`Season::from_code`].
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash, Serialize)]
pub enum Season {
    /// Code 1.
    Spring = 1,
    /// Code 2.
    Summer = 2,
    /// Code 3.
    Fall = 3,
    /// Code 4.
    Winter = 4,
}

impl Season {
    /// Attempts to convert a season code into a `Season` variant.
    ///
    /// Returns `None` for codes outside 1-4.
    ///
    /// # Examples
    ///
    /// ```
    /// use bikeshare::Season;
    ///
    /// assert_eq!(Season::from_code(2), Some(Season::Summer));
    /// assert_eq!(Season::from_code(0), None);
    /// ```
    pub fn from_code(value: i64) -> Option<Season> {
        match value {
            1 => Some(Season::Spring),
            2 => Some(Season::Summer),
            3 => Some(Season::Fall),
            4 => Some(Season::Winter),
            _ => None,
        }
    }

    /// The integer code used in the source table.
    pub fn code(&self) -> i64 {
        *self as i64
    }

    /// Human-readable season name, as shown on chart axes.
    pub fn name(&self) -> &'static str {
        match self {
            Season::Spring => "Spring",
            Season::Summer => "Summer",
            Season::Fall => "Fall",
            Season::Winter => "Winter",
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_round_trips() {
        for code in 1..=4 {
            let season = Season::from_code(code).unwrap();
            assert_eq!(season.code(), code);
        }
    }

    #[test]
    fn out_of_range_codes_are_rejected() {
        assert_eq!(Season::from_code(0), None);
        assert_eq!(Season::from_code(5), None);
        assert_eq!(Season::from_code(-1), None);
    }

    #[test]
    fn displays_season_name() {
        assert_eq!(Season::Fall.to_string(), "Fall");
    }
}
