//! Rendered era date text.

use serde::Serialize;

/// Text produced for one date by [`format`](crate::format).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormattedDate {
    /// The in-era year with its marker, e.g. `2年` or `元年`.
    pub year_text: String,
    /// Era name, year text, month and day, e.g. `令和2年3月3日`.
    pub date_text: String,
}
