//! Error types for the wareki-era crate.

use crate::date::CivilDate;

/// Error type for all fallible operations in the wareki-era crate.
///
/// Covers civil date validation, era lookup by identifier, and dates that
/// fall outside the era catalog.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EraError {
    /// Returned when a month number is outside the valid range 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: u8,
    },

    /// Returned when a day number exceeds the length of the given month.
    #[error("invalid day: {day} for {year}-{month:02} (max {max_day})")]
    InvalidDay {
        /// The invalid day number that was provided.
        day: u8,
        /// The month for which the day is invalid.
        month: u8,
        /// The year, needed to decide February's length.
        year: i32,
        /// The maximum valid day for the given month.
        max_day: u8,
    },

    /// Returned when a date precedes the first era in the catalog.
    #[error("date {date} is before the first known era (starts {earliest})")]
    OutOfRange {
        /// The date that could not be resolved.
        date: CivilDate,
        /// Start date of the earliest catalog entry.
        earliest: CivilDate,
    },

    /// Returned when an era identifier has no catalog entry.
    #[error("unknown era id: {id} (must be 1..={max})")]
    UnknownEra {
        /// The identifier that was looked up.
        id: u8,
        /// The largest identifier in the catalog.
        max: u8,
    },

    /// Returned when an in-era year does not fall within that era's span.
    #[error("year {year} is not within era {era}")]
    YearOutOfEra {
        /// Display name of the era.
        era: &'static str,
        /// The in-era year that was requested.
        year: u32,
    },

    /// Returned when a string is not a `YYYY-MM-DD` date.
    #[error("invalid date string: {input:?} (expected YYYY-MM-DD)")]
    InvalidDateString {
        /// The rejected input.
        input: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_invalid_month() {
        let err = EraError::InvalidMonth { month: 13 };
        assert_eq!(err.to_string(), "invalid month: 13 (must be 1..=12)");
    }

    #[test]
    fn error_invalid_day() {
        let err = EraError::InvalidDay {
            day: 29,
            month: 2,
            year: 1900,
            max_day: 28,
        };
        assert_eq!(err.to_string(), "invalid day: 29 for 1900-02 (max 28)");
    }

    #[test]
    fn error_out_of_range() {
        let err = EraError::OutOfRange {
            date: CivilDate::new(1867, 12, 31).unwrap(),
            earliest: CivilDate::new(1868, 1, 1).unwrap(),
        };
        assert_eq!(
            err.to_string(),
            "date 1867-12-31 is before the first known era (starts 1868-01-01)"
        );
    }

    #[test]
    fn error_unknown_era() {
        let err = EraError::UnknownEra { id: 0, max: 5 };
        assert_eq!(err.to_string(), "unknown era id: 0 (must be 1..=5)");
    }

    #[test]
    fn error_year_out_of_era() {
        let err = EraError::YearOutOfEra {
            era: "大正",
            year: 16,
        };
        assert_eq!(err.to_string(), "year 16 is not within era 大正");
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<EraError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<EraError>();
    }
}
