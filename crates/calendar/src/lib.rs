//! # luach-calendar
//!
//! Exact integer conversion between the proleptic Gregorian calendar and
//! the Hebrew lunisolar calendar, pivoting through Julian day numbers.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["CivilDate"] -->|"civil_to_jdn()"| B["JulianDay"]
//!     B -->|"jdn_to_civil()"| A
//!     C["HebrewDate"] -->|"hebrew_to_jdn()"| B
//!     B -->|"jdn_to_hebrew()"| C
//!     D["days_since_epoch()"] -->|"molad + deferments"| E["HebrewYear"]
//!     E -->|"year_type()"| F["YearType"]
//!     E --> C
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use luach_calendar::{CivilDate, HebrewDate, HebrewMonth, HebrewYear};
//!
//! // Civil -> Hebrew
//! let civil = CivilDate::new(2024, 1, 1).unwrap();
//! let hebrew = HebrewDate::from_civil(civil).unwrap();
//! assert_eq!(hebrew.to_string(), "20 Tevet 5784");
//!
//! // Hebrew -> civil
//! let purim = HebrewDate::new(5784, HebrewMonth::AdarII, 14).unwrap();
//! assert_eq!(purim.to_civil().unwrap(), CivilDate::new(2024, 3, 24).unwrap());
//!
//! // Year layout
//! let year = HebrewYear::new(5784).unwrap();
//! assert_eq!(year.length(), 383);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `julian` | Julian day newtype, weekdays, civil <-> JDN formulas |
//! | `civil` | Validated proleptic Gregorian date |
//! | `molad` | Molad arithmetic and new-year deferment rules |
//! | `year` | Year types, Tishrei 1 boundaries, `HebrewYear` |
//! | `hebrew` | Hebrew months and dates, Hebrew <-> JDN |
//! | `error` | Error types |

mod civil;
mod error;
mod hebrew;
mod julian;
mod molad;
mod year;

pub use civil::{CivilDate, civil_month_length, is_civil_leap_year};
pub use error::CalendarError;
pub use hebrew::{
    HebrewDate, HebrewMonth, hebrew_to_jdn, hebrew_to_jdn_with_bounds, jdn_to_hebrew,
    month_length, months_in_year,
};
pub use julian::{JulianDay, Weekday, civil_to_jdn, jdn_to_civil};
pub use molad::{
    PARTS_PER_DAY, PARTS_PER_HOUR, PARTS_PER_MONTH, PARTS_PER_WEEK, chalakim, days_since_epoch,
    is_leap_year, year_length,
};
pub use year::{HebrewYear, YearBounds, YearType, year_type};
