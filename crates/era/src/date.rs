//! Proleptic Gregorian civil date.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::EraError;

/// Month lengths for a common year.
const DAYS_IN_MONTH: [u8; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// The earliest date callers are expected to present.
///
/// Dates before this floor are outside the supported domain. The floor sits
/// after the first catalog entry, so every supported date resolves. It is
/// not enforced: dates from 1868-01-01 through 1899-12-31 resolve to 明治.
pub const MIN_SUPPORTED_DATE: CivilDate = CivilDate::from_ymd_unchecked(1900, 1, 1);

/// Returns `true` if `year` is a leap year in the proleptic Gregorian calendar.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Returns the number of days in `month` of `year`.
///
/// # Errors
///
/// Returns [`EraError::InvalidMonth`] if `month` is outside 1..=12.
pub fn days_in_month(year: i32, month: u8) -> Result<u8, EraError> {
    if !(1..=12).contains(&month) {
        return Err(EraError::InvalidMonth { month });
    }
    if month == 2 && is_leap_year(year) {
        Ok(29)
    } else {
        Ok(DAYS_IN_MONTH[usize::from(month - 1)])
    }
}

/// A calendar date in the proleptic Gregorian calendar.
///
/// Ordering is chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CivilDate {
    year: i32,
    month: u8,
    day: u8,
}

impl CivilDate {
    /// Creates a new `CivilDate` from year, month, and day.
    ///
    /// # Errors
    ///
    /// Returns [`EraError`] if the month is outside 1..=12 or the day does
    /// not exist in that month.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, EraError> {
        let max_day = days_in_month(year, month)?;
        if day == 0 || day > max_day {
            return Err(EraError::InvalidDay {
                day,
                month,
                year,
                max_day,
            });
        }
        Ok(Self { year, month, day })
    }

    /// Builds a date from components already known to be valid.
    pub(crate) const fn from_ymd_unchecked(year: i32, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    /// Returns the year.
    pub fn year(self) -> i32 {
        self.year
    }

    /// Returns the month (1..=12).
    pub fn month(self) -> u8 {
        self.month
    }

    /// Returns the day within the month (1..=31).
    pub fn day(self) -> u8 {
        self.day
    }
}

impl fmt::Display for CivilDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl FromStr for CivilDate {
    type Err = EraError;

    /// Parses a strict `YYYY-MM-DD` string.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || EraError::InvalidDateString {
            input: s.to_string(),
        };
        let mut parts = s.split('-');
        let (Some(y), Some(m), Some(d), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(invalid());
        };
        let all_digits = |p: &str| !p.is_empty() && p.bytes().all(|b| b.is_ascii_digit());
        if y.len() != 4 || m.len() != 2 || d.len() != 2 || ![y, m, d].into_iter().all(all_digits)
        {
            return Err(invalid());
        }
        let year = y.parse().map_err(|_| invalid())?;
        let month = m.parse().map_err(|_| invalid())?;
        let day = d.parse().map_err(|_| invalid())?;
        Self::new(year, month, day)
    }
}

impl Serialize for CivilDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CivilDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
