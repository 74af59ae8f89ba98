//! The inclusive calendar-date interval a viewer selects.

use chrono::NaiveDate;
use serde::Serialize;

/// An inclusive `[start, end]` calendar-date interval.
///
/// The range is a plain value; it does not enforce `start <= end` on
/// construction. Validation happens where a range is acted on, e.g. in
/// [`crate::Bikeshare::render_view`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateRange {
    /// First date of the interval (inclusive).
    pub start: NaiveDate,
    /// Last date of the interval (inclusive).
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Whether the bounds are ordered (`start <= end`).
    pub fn is_ordered(&self) -> bool {
        self.start <= self.end
    }

    /// Whether `date` falls within the range, inclusive on both ends.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Whether `other` lies fully within this range.
    pub fn encloses(&self, other: &DateRange) -> bool {
        self.start <= other.start && other.end <= self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn contains_is_inclusive_on_both_ends() {
        let range = DateRange::new(d(2011, 1, 5), d(2011, 1, 10));
        assert!(range.contains(d(2011, 1, 5)));
        assert!(range.contains(d(2011, 1, 10)));
        assert!(!range.contains(d(2011, 1, 4)));
        assert!(!range.contains(d(2011, 1, 11)));
    }

    #[test]
    fn ordering_check() {
        assert!(DateRange::new(d(2011, 1, 1), d(2011, 1, 1)).is_ordered());
        assert!(!DateRange::new(d(2011, 1, 2), d(2011, 1, 1)).is_ordered());
    }

    #[test]
    fn encloses_requires_full_containment() {
        let bounds = DateRange::new(d(2011, 1, 1), d(2012, 12, 31));
        assert!(bounds.encloses(&DateRange::new(d(2011, 6, 1), d(2011, 6, 30))));
        assert!(bounds.encloses(&bounds));
        assert!(!bounds.encloses(&DateRange::new(d(2010, 12, 31), d(2011, 1, 2))));
        assert!(!bounds.encloses(&DateRange::new(d(2012, 12, 1), d(2013, 1, 1))));
    }
}
