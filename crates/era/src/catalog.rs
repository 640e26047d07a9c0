//! The static era catalog.
//!
//! Era additions are a data change here: append an [`Era`] variant, append
//! its [`EraInfo`] row to [`ERA_CATALOG`], and bump [`CATALOG_VERSION`].

use std::fmt;

use serde::Serialize;

use crate::date::CivilDate;
use crate::error::EraError;

/// Revision of the catalog data. Incremented whenever a row changes.
pub const CATALOG_VERSION: u32 = 1;

/// A Japanese era.
///
/// The discriminant is the era identifier, ascending from 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[repr(u8)]
pub enum Era {
    /// 明治
    Meiji = 1,
    /// 大正
    Taisho = 2,
    /// 昭和
    Showa = 3,
    /// 平成
    Heisei = 4,
    /// 令和
    Reiwa = 5,
}

/// Catalog metadata for one era.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EraInfo {
    /// The era this row describes.
    pub era: Era,
    /// Numeric identifier.
    pub id: u8,
    /// Display name in kanji.
    pub name: &'static str,
    /// Single-kanji abbreviation.
    pub abbreviation: &'static str,
    /// Romanized name.
    pub romaji: &'static str,
    /// Latin initial used in compact notation such as `R2.3.3`.
    pub initial: char,
    /// First calendar date belonging to the era.
    pub start: CivilDate,
}

/// All eras, ordered by identifier and strictly ascending by start date.
pub static ERA_CATALOG: [EraInfo; 5] = [
    EraInfo {
        era: Era::Meiji,
        id: 1,
        name: "明治",
        abbreviation: "明",
        romaji: "Meiji",
        initial: 'M',
        start: CivilDate::from_ymd_unchecked(1868, 1, 1),
    },
    EraInfo {
        era: Era::Taisho,
        id: 2,
        name: "大正",
        abbreviation: "大",
        romaji: "Taisho",
        initial: 'T',
        start: CivilDate::from_ymd_unchecked(1912, 7, 30),
    },
    EraInfo {
        era: Era::Showa,
        id: 3,
        name: "昭和",
        abbreviation: "昭",
        romaji: "Showa",
        initial: 'S',
        start: CivilDate::from_ymd_unchecked(1926, 12, 25),
    },
    EraInfo {
        era: Era::Heisei,
        id: 4,
        name: "平成",
        abbreviation: "平",
        romaji: "Heisei",
        initial: 'H',
        start: CivilDate::from_ymd_unchecked(1989, 1, 8),
    },
    EraInfo {
        era: Era::Reiwa,
        id: 5,
        name: "令和",
        abbreviation: "令",
        romaji: "Reiwa",
        initial: 'R',
        start: CivilDate::from_ymd_unchecked(2019, 5, 1),
    },
];

impl Era {
    /// Looks up an era by its identifier.
    ///
    /// # Errors
    ///
    /// Returns [`EraError::UnknownEra`] if no catalog row has this identifier.
    pub fn from_id(id: u8) -> Result<Self, EraError> {
        ERA_CATALOG
            .iter()
            .find(|info| info.id == id)
            .map(|info| info.era)
            .ok_or(EraError::UnknownEra {
                id,
                max: ERA_CATALOG[ERA_CATALOG.len() - 1].id,
            })
    }

    /// Iterates over all eras in chronological order.
    pub fn all() -> impl Iterator<Item = Era> {
        ERA_CATALOG.iter().map(|info| info.era)
    }

    /// Returns the catalog row for this era.
    pub fn info(self) -> &'static EraInfo {
        &ERA_CATALOG[usize::from(self as u8 - 1)]
    }

    /// Returns the numeric identifier (1 for Meiji through 5 for Reiwa).
    pub fn id(self) -> u8 {
        self.info().id
    }

    /// Returns the kanji display name.
    pub fn name(self) -> &'static str {
        self.info().name
    }

    /// Returns the single-kanji abbreviation.
    pub fn abbreviation(self) -> &'static str {
        self.info().abbreviation
    }

    /// Returns the romanized name.
    pub fn romaji(self) -> &'static str {
        self.info().romaji
    }

    /// Returns the Latin initial.
    pub fn initial(self) -> char {
        self.info().initial
    }

    /// Returns the first calendar date of the era.
    pub fn start(self) -> CivilDate {
        self.info().start
    }

    /// Returns the era that follows this one, if any.
    pub fn next(self) -> Option<Era> {
        ERA_CATALOG.get(usize::from(self as u8)).map(|info| info.era)
    }

    /// Converts an in-era year to its Gregorian year.
    ///
    /// Year 1 is the Gregorian year containing the era's start date. The last
    /// valid in-era year is the one containing the day before the next era
    /// begins; the current era is open-ended.
    ///
    /// # Errors
    ///
    /// Returns [`EraError::YearOutOfEra`] if `year` is 0 or past the era's end.
    pub fn gregorian_year(self, year: u32) -> Result<i32, EraError> {
        let out_of_era = EraError::YearOutOfEra {
            era: self.name(),
            year,
        };
        if year == 0 {
            return Err(out_of_era);
        }
        let start_year = self.start().year();
        let offset = i32::try_from(year - 1).map_err(|_| out_of_era.clone())?;
        let gregorian = start_year.checked_add(offset).ok_or(out_of_era.clone())?;
        if let Some(next) = self.next() {
            let next_start = next.start();
            // Shares a year with the successor only if the successor starts
            // after January 1st.
            let last_year = if (next_start.month(), next_start.day()) == (1, 1) {
                next_start.year() - 1
            } else {
                next_start.year()
            };
            if gregorian > last_year {
                return Err(out_of_era);
            }
        }
        Ok(gregorian)
    }
}

impl fmt::Display for Era {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_match_positions() {
        for (i, info) in ERA_CATALOG.iter().enumerate() {
            assert_eq!(usize::from(info.id), i + 1);
            assert_eq!(info.era as u8, info.id);
            assert_eq!(info.era.info(), info);
        }
    }

    #[test]
    fn starts_strictly_increasing() {
        for pair in ERA_CATALOG.windows(2) {
            assert!(
                pair[0].start < pair[1].start,
                "{} must start before {}",
                pair[0].name,
                pair[1].name
            );
        }
    }

    #[test]
    fn catalog_dates_are_valid() {
        for info in &ERA_CATALOG {
            let s = info.start;
            assert_eq!(CivilDate::new(s.year(), s.month(), s.day()).unwrap(), s);
        }
    }

    #[test]
    fn from_id_round_trip() {
        for era in Era::all() {
            assert_eq!(Era::from_id(era.id()).unwrap(), era);
        }
    }

    #[test]
    fn from_id_unknown() {
        assert_eq!(
            Era::from_id(0).unwrap_err(),
            EraError::UnknownEra { id: 0, max: 5 }
        );
        assert_eq!(
            Era::from_id(6).unwrap_err(),
            EraError::UnknownEra { id: 6, max: 5 }
        );
    }

    #[test]
    fn names() {
        assert_eq!(Era::Reiwa.name(), "令和");
        assert_eq!(Era::Heisei.abbreviation(), "平");
        assert_eq!(Era::Showa.romaji(), "Showa");
        assert_eq!(Era::Taisho.initial(), 'T');
        assert_eq!(Era::Meiji.to_string(), "明治");
    }

    #[test]
    fn next_chain() {
        assert_eq!(Era::Meiji.next(), Some(Era::Taisho));
        assert_eq!(Era::Heisei.next(), Some(Era::Reiwa));
        assert_eq!(Era::Reiwa.next(), None);
    }

    #[test]
    fn gregorian_year_bounds() {
        assert_eq!(Era::Reiwa.gregorian_year(1).unwrap(), 2019);
        assert_eq!(Era::Heisei.gregorian_year(31).unwrap(), 2019);
        assert_eq!(Era::Showa.gregorian_year(64).unwrap(), 1989);
        assert_eq!(Era::Taisho.gregorian_year(15).unwrap(), 1926);
        assert_eq!(Era::Reiwa.gregorian_year(100).unwrap(), 2118);
        assert!(Era::Heisei.gregorian_year(32).is_err());
        assert_eq!(
            Era::Taisho.gregorian_year(16).unwrap_err(),
            EraError::YearOutOfEra {
                era: "大正",
                year: 16
            }
        );
        assert!(Era::Reiwa.gregorian_year(0).is_err());
    }
}
