//! Formatting options.

use serde::{Deserialize, Serialize};

/// Rendering switches for era date text.
///
/// Both switches are off by default. They change only the rendered text,
/// never the resolved era or year.
///
/// # Example
///
/// ```
/// use wareki_format::FormatOptions;
///
/// let options = FormatOptions::new()
///     .with_gannen(true)
///     .with_full_width(true);
///
/// assert!(options.gannen());
/// assert!(options.full_width());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormatOptions {
    /// Render in-era year 1 as `元年`.
    gannen: bool,
    /// Replace ASCII digits with full-width digits.
    full_width: bool,
}

impl FormatOptions {
    /// Creates options with both switches off.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether the first year of an era renders as `元年`.
    pub fn with_gannen(mut self, gannen: bool) -> Self {
        self.gannen = gannen;
        self
    }

    /// Sets whether digits render full-width.
    pub fn with_full_width(mut self, full_width: bool) -> Self {
        self.full_width = full_width;
        self
    }

    // --- Accessors ---

    /// Returns whether the first year of an era renders as `元年`.
    pub fn gannen(&self) -> bool {
        self.gannen
    }

    /// Returns whether digits render full-width.
    pub fn full_width(&self) -> bool {
        self.full_width
    }
}
