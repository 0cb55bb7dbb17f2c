//! Civil (proleptic Gregorian) dates.

use std::fmt;

use crate::error::CalendarError;
use crate::julian::{JulianDay, Weekday, civil_to_jdn, jdn_to_civil};

/// Number of days in each month of a common year (index 0 unused).
const DAYS_PER_MONTH: [u8; 13] = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// A date in the proleptic Gregorian calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CivilDate {
    year: i32,
    month: u8,
    day: u8,
}

impl PartialOrd for CivilDate {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CivilDate {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.year, self.month, self.day).cmp(&(other.year, other.month, other.day))
    }
}

/// Returns `true` if `year` is a Gregorian leap year.
pub fn is_civil_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Returns the number of days in `month` of `year`.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidMonth`] if `month` is not in 1..=12.
pub fn civil_month_length(year: i32, month: u8) -> Result<u8, CalendarError> {
    if !(1..=12).contains(&month) {
        return Err(CalendarError::InvalidMonth { month });
    }
    if month == 2 && is_civil_leap_year(year) {
        return Ok(29);
    }
    Ok(DAYS_PER_MONTH[month as usize])
}

impl CivilDate {
    /// Smallest supported year (astronomical numbering, 1 BCE = 0).
    pub const MIN_YEAR: i32 = -4712;

    /// Largest supported year.
    pub const MAX_YEAR: i32 = 9999;

    /// Creates a new `CivilDate` from year, month, and day.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError`] if the year is outside
    /// [`MIN_YEAR`](Self::MIN_YEAR)..=[`MAX_YEAR`](Self::MAX_YEAR), or the
    /// month or day is invalid for that year.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, CalendarError> {
        if !(Self::MIN_YEAR..=Self::MAX_YEAR).contains(&year) {
            return Err(CalendarError::YearOutOfRange {
                year: i64::from(year),
                min: i64::from(Self::MIN_YEAR),
                max: i64::from(Self::MAX_YEAR),
            });
        }
        let max_day = civil_month_length(year, month)?;
        if !(1..=max_day).contains(&day) {
            return Err(CalendarError::InvalidDay {
                day,
                month: MONTH_NAMES[month as usize],
                max_day,
            });
        }
        Ok(Self { year, month, day })
    }

    /// Returns the year.
    pub fn year(self) -> i32 {
        self.year
    }

    /// Returns the month (1..=12).
    pub fn month(self) -> u8 {
        self.month
    }

    /// Returns the day within the month.
    pub fn day(self) -> u8 {
        self.day
    }

    /// Returns the Julian day number of this date.
    pub fn to_jdn(self) -> JulianDay {
        civil_to_jdn(self)
    }

    /// Returns the civil date for a Julian day number.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::YearOutOfRange`] outside the supported range.
    pub fn from_jdn(jdn: JulianDay) -> Result<Self, CalendarError> {
        jdn_to_civil(jdn)
    }

    /// Returns the day of the week.
    pub fn weekday(self) -> Weekday {
        self.to_jdn().weekday()
    }

    /// Returns the day-of-year (1..=366).
    pub fn day_of_year(self) -> u16 {
        let jan1 = Self {
            year: self.year,
            month: 1,
            day: 1,
        };
        (self.to_jdn() - jan1.to_jdn() + 1) as u16
    }

    /// Returns the following day.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::YearOutOfRange`] after 31 December 9999.
    pub fn next(self) -> Result<Self, CalendarError> {
        jdn_to_civil(self.to_jdn() + 1)
    }
}

const MONTH_NAMES: [&str; 13] = [
    "",
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

impl fmt::Display for CivilDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.year < 0 {
            write!(f, "-{:06}-{:02}-{:02}", -self.year, self.month, self.day)
        } else {
            write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
        }
    }
}
