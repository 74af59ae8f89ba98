//! Selects which rental count of the daily table an aggregation reduces.

use std::fmt;

/// One of the three rental counts carried by every daily record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RentalField {
    /// All rentals for the day.
    Total,
    /// Rentals by registered users.
    Registered,
    /// Rentals by casual (walk-up) users.
    Casual,
}

impl RentalField {
    /// Column holding this count in the normalized daily table.
    pub(crate) fn column(&self) -> &'static str {
        match self {
            RentalField::Total => "cnt",
            RentalField::Registered => "registered",
            RentalField::Casual => "casual",
        }
    }

    /// Column name the summed aggregate carries for this field.
    pub fn count_column(&self) -> &'static str {
        match self {
            RentalField::Total => "rental_count",
            RentalField::Registered => "register_count",
            RentalField::Casual => "casual_count",
        }
    }
}

impl fmt::Display for RentalField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.column())
    }
}
