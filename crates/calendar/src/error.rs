//! Error types for the luach-calendar crate.

/// Error type for all fallible operations in the luach-calendar crate.
///
/// This enum covers validation failures for civil and Hebrew date
/// components, years outside the supported range, and year layouts that
/// no real Hebrew year can produce.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a civil month number is outside 1..=12.
    #[error("invalid civil month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: u8,
    },

    /// Returned when a Hebrew month code is outside 1..=14.
    #[error("invalid hebrew month code: {code} (must be 1..=14)")]
    InvalidHebrewMonth {
        /// The invalid month code that was provided.
        code: u8,
    },

    /// Returned when a Hebrew month does not exist in the given year,
    /// e.g. Adar I in a common year.
    #[error("month {month} does not exist in hebrew year {year}")]
    MonthNotInYear {
        /// Name of the requested month.
        month: &'static str,
        /// The Hebrew year.
        year: i32,
    },

    /// Returned when a day number exceeds the length of its month.
    #[error("invalid day: {day} for month {month} (max {max_day})")]
    InvalidDay {
        /// The invalid day number that was provided.
        day: u8,
        /// Name of the month for which the day is invalid.
        month: &'static str,
        /// The length of the month in that year.
        max_day: u8,
    },

    /// Returned when a year falls outside the supported range.
    #[error("year {year} is outside the supported range {min}..={max}")]
    YearOutOfRange {
        /// The rejected year.
        year: i64,
        /// Smallest supported year.
        min: i64,
        /// Largest supported year.
        max: i64,
    },

    /// Returned when a year length and new-year weekday do not form one of
    /// the fourteen valid Hebrew year types.
    #[error("no hebrew year type has length {length} starting on weekday {weekday}")]
    InvalidYearType {
        /// Year length in days.
        length: i64,
        /// Weekday of Tishrei 1 (1 = Sunday, 7 = Saturday).
        weekday: u8,
    },
}
