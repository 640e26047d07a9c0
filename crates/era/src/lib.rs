//! # wareki-era
//!
//! Resolves proleptic Gregorian dates to Japanese eras.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["CivilDate"] -->|"resolve()"| B["EraYear"]
//!     C["ERA_CATALOG"] --> B
//!     B -->|".era()"| D["Era"]
//!     D -->|".gregorian_year()"| E["Gregorian year"]
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use wareki_era::{CivilDate, Era, resolve};
//!
//! let date = CivilDate::new(2020, 3, 3).unwrap();
//! let r = resolve(date).unwrap();
//! assert_eq!(r.era(), Era::Reiwa);
//! assert_eq!(r.name(), "令和");
//! assert_eq!(r.year(), 2);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `date` | Validated Gregorian civil date |
//! | `catalog` | Static era table and per-era metadata |
//! | `resolve` | Date to era and in-era year |
//! | `error` | Error types |

mod catalog;
mod date;
mod error;
mod resolve;

pub use catalog::{CATALOG_VERSION, ERA_CATALOG, Era, EraInfo};
pub use date::{CivilDate, MIN_SUPPORTED_DATE, days_in_month, is_leap_year};
pub use error::EraError;
pub use resolve::{EraYear, resolve};
