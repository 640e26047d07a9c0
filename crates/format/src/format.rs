//! Era date text assembly.

use tracing::debug;
use wareki_era::{CivilDate, EraYear};

use crate::config::FormatOptions;
use crate::result::FormattedDate;
use crate::width::to_full_width;

/// The first year of an era, read "gannen".
pub const GANNEN: &str = "元年";
/// Year marker.
pub const YEAR_MARKER: char = '年';
/// Month marker.
pub const MONTH_MARKER: char = '月';
/// Day marker.
pub const DAY_MARKER: char = '日';

/// Renders an in-era year with its marker.
///
/// Year 1 renders as [`GANNEN`] when `options.gannen()` is set. Digits are
/// full-width when `options.full_width()` is set.
pub fn year_text(year: u32, options: &FormatOptions) -> String {
    let text = if year == 1 && options.gannen() {
        GANNEN.to_string()
    } else {
        format!("{year}{YEAR_MARKER}")
    };
    if options.full_width() {
        to_full_width(&text)
    } else {
        text
    }
}

/// Renders the year text and full date text for a resolved date.
///
/// `date` supplies the month and day, unpadded. The era name is always the
/// leading part of the date text.
///
/// # Examples
///
/// ```
/// use wareki_era::{CivilDate, resolve};
/// use wareki_format::{FormatOptions, format};
///
/// let date = CivilDate::new(2019, 5, 1).unwrap();
/// let era_year = resolve(date).unwrap();
/// let options = FormatOptions::new().with_gannen(true);
///
/// let text = format(&era_year, date, &options);
/// assert_eq!(text.year_text, "元年");
/// assert_eq!(text.date_text, "令和元年5月1日");
/// ```
pub fn format(era_year: &EraYear, date: CivilDate, options: &FormatOptions) -> FormattedDate {
    let year_text = year_text(era_year.year(), options);
    let date_text = format!(
        "{}{year_text}{}{MONTH_MARKER}{}{DAY_MARKER}",
        era_year.name(),
        date.month(),
        date.day()
    );
    let date_text = if options.full_width() {
        to_full_width(&date_text)
    } else {
        date_text
    };
    debug!(%date, %date_text, "formatted era date");
    FormattedDate {
        year_text,
        date_text,
    }
}
