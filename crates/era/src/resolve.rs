//! Date to era resolution.

use tracing::trace;

use crate::catalog::{ERA_CATALOG, Era};
use crate::date::CivilDate;
use crate::error::EraError;

/// The era-based year of a single date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EraYear {
    era: Era,
    year: u32,
}

impl EraYear {
    /// Returns the era.
    pub fn era(self) -> Era {
        self.era
    }

    /// Returns the era identifier.
    pub fn id(self) -> u8 {
        self.era.id()
    }

    /// Returns the era display name.
    pub fn name(self) -> &'static str {
        self.era.name()
    }

    /// Returns the in-era year (1 for the era's first calendar year).
    pub fn year(self) -> u32 {
        self.year
    }

    /// Returns the Gregorian year this in-era year corresponds to.
    pub fn to_gregorian_year(self) -> i32 {
        let offset = i32::try_from(self.year - 1).unwrap_or(i32::MAX);
        self.era.start().year().saturating_add(offset)
    }
}

/// Resolves the era and in-era year of `date`.
///
/// The era is the catalog entry with the greatest start date not after
/// `date`, so a date equal to a start date belongs to the new era. The
/// in-era year counts the era's start year as year 1, whatever the month
/// and day of the transition.
///
/// # Errors
///
/// Returns [`EraError::OutOfRange`] if `date` precedes the first era.
///
/// # Examples
///
/// ```
/// use wareki_era::{CivilDate, Era, resolve};
///
/// let r = resolve(CivilDate::new(1989, 1, 7).unwrap()).unwrap();
/// assert_eq!(r.era(), Era::Showa);
/// assert_eq!(r.year(), 64);
/// ```
pub fn resolve(date: CivilDate) -> Result<EraYear, EraError> {
    // Number of eras starting on or before `date`.
    let started = ERA_CATALOG.partition_point(|info| info.start <= date);
    let Some(info) = started.checked_sub(1).map(|i| &ERA_CATALOG[i]) else {
        return Err(EraError::OutOfRange {
            date,
            earliest: ERA_CATALOG[0].start,
        });
    };
    // `date >= info.start`, so the difference is non-negative.
    let year = (date.year() - info.start.year()) as u32 + 1;
    trace!(%date, era = info.name, year, "resolved era");
    Ok(EraYear {
        era: info.era,
        year,
    })
}
