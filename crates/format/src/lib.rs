//! # wareki-format
//!
//! Renders Japanese era dates as text.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["CivilDate"] -->|"wareki_era::resolve()"| B["EraYear"]
//!     B -->|"format()"| C["FormattedDate"]
//!     D["FormatOptions"] --> C
//!     A -->|"JapaneseDate::with_options()"| E["JapaneseDate"]
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use wareki_era::CivilDate;
//! use wareki_format::{JapaneseDate, to_full_width};
//!
//! let date = CivilDate::new(2020, 3, 3).unwrap();
//! let jp = JapaneseDate::with_options(date, false, true).unwrap();
//! assert_eq!(jp.date_text(), "令和２年３月３日");
//!
//! assert_eq!(to_full_width("2020"), "２０２０");
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `config` | Rendering switches |
//! | `width` | Full-width digit mapping |
//! | `format` | Year and date text assembly |
//! | `result` | Rendered text pair |
//! | `japanese_date` | Resolve-and-format entry point |

mod config;
mod format;
mod japanese_date;
mod result;
mod width;

pub use config::FormatOptions;
pub use format::{DAY_MARKER, GANNEN, MONTH_MARKER, YEAR_MARKER, format, year_text};
pub use japanese_date::JapaneseDate;
pub use result::FormattedDate;
pub use width::{full_width_digit, to_full_width};
