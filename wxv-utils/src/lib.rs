//! Shared utility functions for the seasonal violin crates.

/// Date utility functions
pub mod dates {
    use crate::error::DateError;
    use chrono::{Datelike, NaiveDate};

    /// Format a NaiveDate as "YYYY-MM-DD"
    pub fn format_date(date: &NaiveDate) -> String {
        date.format("%Y-%m-%d").to_string()
    }

    /// Parse a date string in "YYYYMMDD" format (compact station format).
    ///
    /// The input must be exactly eight ASCII digits naming a real calendar
    /// day. `chrono`'s `%Y%m%d` is lenient about widths, so the shape is
    /// checked up front.
    pub fn parse_date_compact(s: &str) -> Result<NaiveDate, DateError> {
        if s.len() != 8 || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DateError(format!("expected 8 digits (YYYYMMDD), got {:?}", s)));
        }
        // All eight bytes are ASCII digits, so these slices and parses cannot fail.
        let year: i32 = s[0..4].parse().map_err(|_| DateError(s.to_string()))?;
        let month: u32 = s[4..6].parse().map_err(|_| DateError(s.to_string()))?;
        let day: u32 = s[6..8].parse().map_err(|_| DateError(s.to_string()))?;
        NaiveDate::from_ymd_opt(year, month, day)
            .ok_or_else(|| DateError(format!("{:?} is not a calendar date", s)))
    }

    /// Calendar month (1-12) of a date.
    pub fn month_of(date: &NaiveDate) -> u32 {
        date.month()
    }

}

/// Order statistics over plain `f64` slices.
pub mod stats {
    /// Median of the non-NaN values, averaging the middle pair for even
    /// counts. `None` when nothing is left to take the median of.
    pub fn median(values: impl IntoIterator<Item = f64>) -> Option<f64> {
        let mut sorted: Vec<f64> = values.into_iter().filter(|v| !v.is_nan()).collect();
        if sorted.is_empty() {
            return None;
        }
        sorted.sort_by(f64::total_cmp);
        let mid = sorted.len() / 2;
        if sorted.len() % 2 == 1 {
            Some(sorted[mid])
        } else {
            Some((sorted[mid - 1] + sorted[mid]) / 2.0)
        }
    }

    /// Minimum and maximum of the non-NaN values.
    pub fn extent(values: impl IntoIterator<Item = f64>) -> Option<(f64, f64)> {
        values
            .into_iter()
            .filter(|v| !v.is_nan())
            .fold(None, |acc, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_median_odd() {
            assert_eq!(median([90.0, 70.0, 80.0]), Some(80.0));
        }

        #[test]
        fn test_median_even() {
            assert_eq!(median([1.0, 4.0, 2.0, 3.0]), Some(2.5));
        }

        #[test]
        fn test_median_empty_and_nan() {
            assert_eq!(median(Vec::<f64>::new()), None);
            assert_eq!(median([f64::NAN]), None);
            assert_eq!(median([f64::NAN, 5.0]), Some(5.0));
        }

        #[test]
        fn test_extent() {
            assert_eq!(extent([3.0, -1.0, 7.5]), Some((-1.0, 7.5)));
            assert_eq!(extent(Vec::<f64>::new()), None);
        }
    }
}

/// Error types
pub mod error {
    use thiserror::Error;

    #[derive(Debug, Clone, PartialEq, Error)]
    #[error("Date error: {0}")]
    pub struct DateError(pub String);
}
