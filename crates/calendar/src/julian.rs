//! Julian day numbers and the civil (proleptic Gregorian) conversions.

use std::fmt;
use std::ops::{Add, Sub};

use crate::civil::CivilDate;
use crate::error::CalendarError;

/// A day on the continuous Julian day axis.
///
/// Day 0 begins at noon UTC on 1 January 4713 BCE (proleptic Julian
/// calendar). Every calendar conversion in this crate goes through this
/// value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct JulianDay(i64);

/// Day of the week, numbered the way the Hebrew year tables expect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Weekday {
    Sunday = 1,
    Monday = 2,
    Tuesday = 3,
    Wednesday = 4,
    Thursday = 5,
    Friday = 6,
    Saturday = 7,
}

impl Weekday {
    const ALL: [Weekday; 7] = [
        Weekday::Sunday,
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
    ];

    /// Returns the weekday number, 1 (Sunday) through 7 (Saturday).
    pub fn number(self) -> u8 {
        self as u8
    }

    /// Returns the weekday for a number in 1..=7, or `None`.
    pub fn from_number(n: u8) -> Option<Self> {
        Self::ALL.get(usize::from(n).checked_sub(1)?).copied()
    }
}

impl JulianDay {
    /// Julian day of 1 January -4712, the first supported civil date.
    pub const MIN_CIVIL: JulianDay = JulianDay(38);

    /// Julian day of 31 December 9999, the last supported civil date.
    pub const MAX_CIVIL: JulianDay = JulianDay(5_373_484);

    /// Wraps a raw Julian day number.
    pub const fn new(jdn: i64) -> Self {
        Self(jdn)
    }

    /// Returns the raw Julian day number.
    pub const fn get(self) -> i64 {
        self.0
    }

    /// Returns the day of the week this Julian day falls on.
    pub fn weekday(self) -> Weekday {
        // JDN 0 was a Monday, so (jdn + 1) mod 7 is 0 on Sundays.
        let n = (self.0 + 1).rem_euclid(7) as u8;
        Weekday::ALL[usize::from(n)]
    }
}

impl Add<i64> for JulianDay {
    type Output = JulianDay;

    fn add(self, days: i64) -> JulianDay {
        JulianDay(self.0 + days)
    }
}

impl Sub<i64> for JulianDay {
    type Output = JulianDay;

    fn sub(self, days: i64) -> JulianDay {
        JulianDay(self.0 - days)
    }
}

impl Sub for JulianDay {
    type Output = i64;

    fn sub(self, other: JulianDay) -> i64 {
        self.0 - other.0
    }
}

impl fmt::Display for JulianDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "JD {}", self.0)
    }
}

/// Converts a civil date to its Julian day number.
///
/// Uses the Fliegel-Van Flandern formula: the year is shifted so that
/// March is the first month, which puts the leap day at the end of the
/// synthetic year.
pub fn civil_to_jdn(date: CivilDate) -> JulianDay {
    let day = i64::from(date.day());
    let month = i64::from(date.month());
    let year = i64::from(date.year());

    let jan_or_feb = (14 - month) / 12;
    let y = year + 4800 - jan_or_feb;
    let m = month + 12 * jan_or_feb - 3;

    JulianDay(day + (153 * m + 2) / 5 + 365 * y + y / 4 - y / 100 + y / 400 - 32045)
}

/// Converts a Julian day number to a civil date.
///
/// Peter Meyer's decomposition of the day count into 400-year, 4-year
/// and month cycles. Exact inverse of [`civil_to_jdn`].
///
/// # Errors
///
/// Returns [`CalendarError::YearOutOfRange`] if the resulting year is
/// outside the range supported by [`CivilDate`].
pub fn jdn_to_civil(jdn: JulianDay) -> Result<CivilDate, CalendarError> {
    if jdn < JulianDay::MIN_CIVIL || jdn > JulianDay::MAX_CIVIL {
        let year = if jdn < JulianDay::MIN_CIVIL {
            i64::from(CivilDate::MIN_YEAR) - 1
        } else {
            i64::from(CivilDate::MAX_YEAR) + 1
        };
        return Err(CalendarError::YearOutOfRange {
            year,
            min: i64::from(CivilDate::MIN_YEAR),
            max: i64::from(CivilDate::MAX_YEAR),
        });
    }

    let mut l = jdn.get() + 68569;
    let n = (4 * l) / 146_097;
    l -= (146_097 * n + 3) / 4;
    let i = (4000 * (l + 1)) / 1_461_001;
    l = l - (1461 * i) / 4 + 31;
    let j = (80 * l) / 2447;
    let day = l - (2447 * j) / 80;
    l = j / 11;
    let month = j + 2 - 12 * l;
    let year = 100 * (n - 49) + i + l;

    CivilDate::new(year as i32, month as u8, day as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn civil(year: i32, month: u8, day: u8) -> CivilDate {
        CivilDate::new(year, month, day).unwrap()
    }

    #[test]
    fn known_julian_day_numbers() {
        assert_eq!(civil_to_jdn(civil(2000, 1, 1)).get(), 2_451_545);
        assert_eq!(civil_to_jdn(civil(2024, 1, 1)).get(), 2_460_311);
        assert_eq!(civil_to_jdn(civil(1858, 11, 17)).get(), 2_400_001);
    }

    #[test]
    fn jdn_to_civil_inverts() {
        let date = jdn_to_civil(JulianDay::new(2_451_545)).unwrap();
        assert_eq!(date, civil(2000, 1, 1));
    }

    #[test]
    fn leap_day_round_trip() {
        let feb29 = civil(2024, 2, 29);
        let jdn = civil_to_jdn(feb29);
        assert_eq!(jdn_to_civil(jdn).unwrap(), feb29);
        assert_eq!(jdn_to_civil(jdn + 1).unwrap(), civil(2024, 3, 1));
    }

    #[test]
    fn century_non_leap() {
        let feb28 = civil_to_jdn(civil(1900, 2, 28));
        assert_eq!(jdn_to_civil(feb28 + 1).unwrap(), civil(1900, 3, 1));
    }

    #[test]
    fn weekday_of_known_dates() {
        // 2000-01-01 was a Saturday, 2024-01-01 a Monday.
        assert_eq!(civil_to_jdn(civil(2000, 1, 1)).weekday(), Weekday::Saturday);
        assert_eq!(civil_to_jdn(civil(2024, 1, 1)).weekday(), Weekday::Monday);
    }

    #[test]
    fn weekday_numbers() {
        for n in 1..=7 {
            assert_eq!(Weekday::from_number(n).unwrap().number(), n);
        }
        assert_eq!(Weekday::from_number(0), None);
        assert_eq!(Weekday::from_number(8), None);
    }

    #[test]
    fn arithmetic() {
        let a = JulianDay::new(100);
        assert_eq!((a + 5).get(), 105);
        assert_eq!((a - 5).get(), 95);
        assert_eq!(JulianDay::new(110) - a, 10);
    }

    #[test]
    fn supported_range_bounds() {
        assert_eq!(civil_to_jdn(civil(CivilDate::MIN_YEAR, 1, 1)), JulianDay::MIN_CIVIL);
        assert_eq!(civil_to_jdn(civil(CivilDate::MAX_YEAR, 12, 31)), JulianDay::MAX_CIVIL);
        assert!(jdn_to_civil(JulianDay::MIN_CIVIL - 1).is_err());
    }

    #[test]
    fn out_of_range_jdn() {
        let far = civil_to_jdn(civil(9999, 12, 31)) + 1;
        assert!(matches!(
            jdn_to_civil(far),
            Err(CalendarError::YearOutOfRange { year: 10000, .. })
        ));
    }
}
