//! Hebrew year layouts.

use crate::error::CalendarError;
use crate::julian::{JulianDay, Weekday};
use crate::molad::{TISHREI1_JDN_OFFSET, elapsed_days};

/// One of the fourteen possible Hebrew year layouts.
///
/// A year is fully described by its length and the weekday of Tishrei 1;
/// the deferment rules leave exactly fourteen combinations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearType(u8);

/// `(length, Tishrei 1 weekday)` for year types 1 through 14.
const YEAR_TYPES: [(i64, Weekday); 14] = [
    (353, Weekday::Monday),
    (353, Weekday::Saturday),
    (354, Weekday::Tuesday),
    (354, Weekday::Thursday),
    (355, Weekday::Monday),
    (355, Weekday::Thursday),
    (355, Weekday::Saturday),
    (383, Weekday::Monday),
    (383, Weekday::Thursday),
    (383, Weekday::Saturday),
    (384, Weekday::Tuesday),
    (385, Weekday::Monday),
    (385, Weekday::Thursday),
    (385, Weekday::Saturday),
];

impl YearType {
    /// Returns the year type code, 1..=14.
    pub fn code(self) -> u8 {
        self.0
    }

    /// Returns the length of years of this type in days.
    pub fn length(self) -> i64 {
        YEAR_TYPES[usize::from(self.0 - 1)].0
    }

    /// Returns the weekday Tishrei 1 falls on in years of this type.
    pub fn new_year_weekday(self) -> Weekday {
        YEAR_TYPES[usize::from(self.0 - 1)].1
    }

    /// Returns `true` for thirteen-month years.
    pub fn is_leap(self) -> bool {
        self.length() > 355
    }

    /// Returns `true` if Cheshvan has 30 days (complete year).
    pub fn long_cheshvan(self) -> bool {
        self.length() % 10 == 5
    }

    /// Returns `true` if Kislev has 29 days (deficient year).
    pub fn short_kislev(self) -> bool {
        self.length() % 10 == 3
    }
}

/// Looks up the year type for a year length and new-year weekday.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidYearType`] if the combination is not
/// one of the fourteen valid layouts. No year produced by the molad
/// arithmetic can trigger this.
pub fn year_type(length: i64, new_year_weekday: Weekday) -> Result<YearType, CalendarError> {
    YEAR_TYPES
        .iter()
        .position(|&(l, w)| l == length && w == new_year_weekday)
        .map(|i| YearType(i as u8 + 1))
        .ok_or(CalendarError::InvalidYearType {
            length,
            weekday: new_year_weekday.number(),
        })
}

/// Tishrei 1 of a Hebrew year and of the year after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct YearBounds {
    /// Julian day of Tishrei 1 of the year.
    pub tishrei1: JulianDay,
    /// Julian day of Tishrei 1 of the following year.
    pub next_tishrei1: JulianDay,
}

impl YearBounds {
    /// Returns the length of the year in days.
    pub fn length(&self) -> i64 {
        self.next_tishrei1 - self.tishrei1
    }

    /// Returns `true` if `jdn` falls within the year.
    pub fn contains(&self, jdn: JulianDay) -> bool {
        self.tishrei1 <= jdn && jdn < self.next_tishrei1
    }
}

/// A Hebrew year together with its computed layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HebrewYear {
    year: i32,
    bounds: YearBounds,
    year_type: YearType,
}

impl HebrewYear {
    /// First supported Hebrew year.
    pub const MIN: i32 = 1;

    /// Last supported Hebrew year, the one containing 31 December 9999.
    pub const MAX: i32 = 13_760;

    /// Computes the layout of `year`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::YearOutOfRange`] for years outside
    /// [`MIN`](Self::MIN)..=[`MAX`](Self::MAX), and
    /// [`CalendarError::InvalidYearType`] if the molad arithmetic produced an
    /// impossible layout.
    pub fn new(year: i32) -> Result<Self, CalendarError> {
        if !(Self::MIN..=Self::MAX).contains(&year) {
            return Err(CalendarError::YearOutOfRange {
                year: i64::from(year),
                min: i64::from(Self::MIN),
                max: i64::from(Self::MAX),
            });
        }
        let tishrei1 = JulianDay::new(elapsed_days(i64::from(year)) + TISHREI1_JDN_OFFSET);
        let next_tishrei1 =
            JulianDay::new(elapsed_days(i64::from(year) + 1) + TISHREI1_JDN_OFFSET);
        let bounds = YearBounds {
            tishrei1,
            next_tishrei1,
        };
        let year_type = year_type(bounds.length(), tishrei1.weekday())?;
        Ok(Self {
            year,
            bounds,
            year_type,
        })
    }

    /// Returns the year number (anno mundi).
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Returns the Tishrei 1 boundaries of this year.
    pub fn bounds(&self) -> YearBounds {
        self.bounds
    }

    /// Returns the layout of this year.
    pub fn year_type(&self) -> YearType {
        self.year_type
    }

    /// Returns the length of this year in days.
    pub fn length(&self) -> i64 {
        self.bounds.length()
    }

    /// Returns `true` for thirteen-month years.
    pub fn is_leap(&self) -> bool {
        self.year_type.is_leap()
    }

    /// Returns the weekday of Tishrei 1.
    pub fn new_year_weekday(&self) -> Weekday {
        self.bounds.tishrei1.weekday()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_lookup() {
        assert_eq!(year_type(353, Weekday::Monday).unwrap().code(), 1);
        assert_eq!(year_type(354, Weekday::Thursday).unwrap().code(), 4);
        assert_eq!(year_type(384, Weekday::Tuesday).unwrap().code(), 11);
        assert_eq!(year_type(385, Weekday::Saturday).unwrap().code(), 14);
    }

    #[test]
    fn invalid_combinations_fail() {
        assert_eq!(
            year_type(353, Weekday::Sunday).unwrap_err(),
            CalendarError::InvalidYearType {
                length: 353,
                weekday: 1,
            }
        );
        assert!(year_type(354, Weekday::Monday).is_err());
        assert!(year_type(356, Weekday::Monday).is_err());
        assert!(year_type(384, Weekday::Saturday).is_err());
    }

    #[test]
    fn type_round_trips_through_table() {
        for code in 1..=14u8 {
            let t = YearType(code);
            assert_eq!(year_type(t.length(), t.new_year_weekday()).unwrap(), t);
        }
    }

    #[test]
    fn derived_flags() {
        let complete = year_type(355, Weekday::Thursday).unwrap();
        assert!(complete.long_cheshvan());
        assert!(!complete.short_kislev());
        assert!(!complete.is_leap());

        let deficient_leap = year_type(383, Weekday::Monday).unwrap();
        assert!(deficient_leap.short_kislev());
        assert!(deficient_leap.is_leap());
    }

    #[test]
    fn year_5784() {
        let year = HebrewYear::new(5784).unwrap();
        assert_eq!(year.length(), 383);
        assert!(year.is_leap());
        assert_eq!(year.new_year_weekday(), Weekday::Saturday);
        assert_eq!(year.year_type().code(), 10);
        assert_eq!(year.bounds().tishrei1, JulianDay::new(2_460_204));
        assert_eq!(year.bounds().next_tishrei1, JulianDay::new(2_460_587));
    }

    #[test]
    fn year_out_of_range() {
        assert!(matches!(
            HebrewYear::new(0),
            Err(CalendarError::YearOutOfRange { year: 0, .. })
        ));
    }
}
