//! Construction-style entry point combining resolution and formatting.

use std::fmt;

use serde::Serialize;
use wareki_era::{CivilDate, EraError, resolve};

use crate::config::FormatOptions;
use crate::format::format;

/// A date expressed in the Japanese era calendar.
///
/// All fields are computed at construction and read-only afterwards.
///
/// # Example
///
/// ```
/// use wareki_era::CivilDate;
/// use wareki_format::JapaneseDate;
///
/// let date = CivilDate::new(2019, 5, 1).unwrap();
/// let jp = JapaneseDate::with_options(date, true, false).unwrap();
///
/// assert_eq!(jp.era(), 5);
/// assert_eq!(jp.era_text(), "令和");
/// assert_eq!(jp.year_in_era(), 1);
/// assert_eq!(jp.year_in_era_text(), Some("元年"));
/// assert_eq!(jp.date_text(), "令和元年5月1日");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JapaneseDate {
    #[serde(rename = "originalDate")]
    date: CivilDate,
    era: u8,
    era_text: &'static str,
    year_in_era: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    year_in_era_text: Option<String>,
    date_text: String,
}

impl JapaneseDate {
    /// Converts `date` with plain rendering and no year text.
    ///
    /// Equivalent to [`with_options`](Self::with_options) with both switches
    /// off, except that [`year_in_era_text`](Self::year_in_era_text) is `None`.
    ///
    /// # Errors
    ///
    /// Returns [`EraError::OutOfRange`] if `date` precedes the first era.
    pub fn new(date: CivilDate) -> Result<Self, EraError> {
        let mut converted = Self::from_options(date, &FormatOptions::new())?;
        converted.year_in_era_text = None;
        Ok(converted)
    }

    /// Converts `date`, applying the two rendering switches.
    ///
    /// # Errors
    ///
    /// Returns [`EraError::OutOfRange`] if `date` precedes the first era.
    pub fn with_options(
        date: CivilDate,
        treat_first_year_specially: bool,
        full_width_digits: bool,
    ) -> Result<Self, EraError> {
        let options = FormatOptions::new()
            .with_gannen(treat_first_year_specially)
            .with_full_width(full_width_digits);
        Self::from_options(date, &options)
    }

    /// Converts `date` with a prepared [`FormatOptions`].
    ///
    /// # Errors
    ///
    /// Returns [`EraError::OutOfRange`] if `date` precedes the first era.
    #[tracing::instrument(level = "debug", skip_all, fields(%date))]
    pub fn from_options(date: CivilDate, options: &FormatOptions) -> Result<Self, EraError> {
        let era_year = resolve(date)?;
        let text = format(&era_year, date, options);
        Ok(Self {
            date,
            era: era_year.id(),
            era_text: era_year.name(),
            year_in_era: era_year.year(),
            year_in_era_text: Some(text.year_text),
            date_text: text.date_text,
        })
    }

    /// Returns the Gregorian date this value was built from.
    pub fn date(&self) -> CivilDate {
        self.date
    }

    /// Returns the era identifier (1 明治 through 5 令和).
    pub fn era(&self) -> u8 {
        self.era
    }

    /// Returns the era name.
    pub fn era_text(&self) -> &str {
        self.era_text
    }

    /// Returns the in-era year.
    pub fn year_in_era(&self) -> u32 {
        self.year_in_era
    }

    /// Returns the rendered in-era year, or `None` for values built with
    /// [`new`](Self::new).
    pub fn year_in_era_text(&self) -> Option<&str> {
        self.year_in_era_text.as_deref()
    }

    /// Returns the full rendered date.
    pub fn date_text(&self) -> &str {
        &self.date_text
    }
}

impl fmt::Display for JapaneseDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.date_text)
    }
}
