//! Hebrew dates and their conversion to and from Julian day numbers.

use std::fmt;

use crate::civil::CivilDate;
use crate::error::CalendarError;
use crate::julian::{JulianDay, Weekday, jdn_to_civil};
use crate::molad::{TISHREI1_JDN_OFFSET, elapsed_days};
use crate::year::{HebrewYear, YearBounds};

/// Offset from a day count since the molad epoch to a Julian day number.
const JDN_OFFSET: i64 = TISHREI1_JDN_OFFSET - 1;

/// Difference between a Hebrew year and the civil year it mostly overlaps.
const HEBREW_CIVIL_YEAR_OFFSET: i32 = 3760;

/// Days in the last eight months of every year (Shvat or Adar I through
/// Elul).
const LAST_EIGHT_MONTHS_DAYS: i64 = 236;

/// A Hebrew month, numbered with its traditional code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HebrewMonth {
    Tishrei = 1,
    Cheshvan = 2,
    Kislev = 3,
    Tevet = 4,
    Shvat = 5,
    /// Adar of a common year.
    Adar = 6,
    Nisan = 7,
    Iyar = 8,
    Sivan = 9,
    Tammuz = 10,
    Av = 11,
    Elul = 12,
    /// The inserted month of a leap year.
    AdarI = 13,
    /// Adar of a leap year.
    AdarII = 14,
}

const COMMON_YEAR_MONTHS: [HebrewMonth; 12] = [
    HebrewMonth::Tishrei,
    HebrewMonth::Cheshvan,
    HebrewMonth::Kislev,
    HebrewMonth::Tevet,
    HebrewMonth::Shvat,
    HebrewMonth::Adar,
    HebrewMonth::Nisan,
    HebrewMonth::Iyar,
    HebrewMonth::Sivan,
    HebrewMonth::Tammuz,
    HebrewMonth::Av,
    HebrewMonth::Elul,
];

const LEAP_YEAR_MONTHS: [HebrewMonth; 13] = [
    HebrewMonth::Tishrei,
    HebrewMonth::Cheshvan,
    HebrewMonth::Kislev,
    HebrewMonth::Tevet,
    HebrewMonth::Shvat,
    HebrewMonth::AdarI,
    HebrewMonth::AdarII,
    HebrewMonth::Nisan,
    HebrewMonth::Iyar,
    HebrewMonth::Sivan,
    HebrewMonth::Tammuz,
    HebrewMonth::Av,
    HebrewMonth::Elul,
];

impl HebrewMonth {
    /// Returns the month for a code in 1..=14.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidHebrewMonth`] for any other code.
    pub fn from_code(code: u8) -> Result<Self, CalendarError> {
        match code {
            1..=12 => Ok(COMMON_YEAR_MONTHS[usize::from(code - 1)]),
            13 => Ok(HebrewMonth::AdarI),
            14 => Ok(HebrewMonth::AdarII),
            _ => Err(CalendarError::InvalidHebrewMonth { code }),
        }
    }

    /// Returns the month code, 1..=14.
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Returns the English transliteration of the month name.
    pub fn name(self) -> &'static str {
        match self {
            HebrewMonth::Tishrei => "Tishrei",
            HebrewMonth::Cheshvan => "Cheshvan",
            HebrewMonth::Kislev => "Kislev",
            HebrewMonth::Tevet => "Tevet",
            HebrewMonth::Shvat => "Shvat",
            HebrewMonth::Adar => "Adar",
            HebrewMonth::Nisan => "Nisan",
            HebrewMonth::Iyar => "Iyar",
            HebrewMonth::Sivan => "Sivan",
            HebrewMonth::Tammuz => "Tammuz",
            HebrewMonth::Av => "Av",
            HebrewMonth::Elul => "Elul",
            HebrewMonth::AdarI => "Adar I",
            HebrewMonth::AdarII => "Adar II",
        }
    }

    /// Returns the months of a common or leap year, in calendar order from
    /// Tishrei.
    pub fn months_of_year(leap: bool) -> &'static [HebrewMonth] {
        if leap {
            &LEAP_YEAR_MONTHS
        } else {
            &COMMON_YEAR_MONTHS
        }
    }
}

impl fmt::Display for HebrewMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returns the number of days of `month` in `year`.
///
/// # Errors
///
/// Returns [`CalendarError::MonthNotInYear`] for Adar in a leap year or
/// Adar I in a common year. Adar II in a common year is plain Adar.
pub fn month_length(year: &HebrewYear, month: HebrewMonth) -> Result<u8, CalendarError> {
    let month = normalize_month(year, month)?;
    let year_type = year.year_type();
    let days = match month {
        HebrewMonth::Cheshvan if year_type.long_cheshvan() => 30,
        HebrewMonth::Kislev if year_type.short_kislev() => 29,
        HebrewMonth::Tishrei
        | HebrewMonth::Kislev
        | HebrewMonth::Shvat
        | HebrewMonth::Nisan
        | HebrewMonth::Sivan
        | HebrewMonth::Av
        | HebrewMonth::AdarI => 30,
        _ => 29,
    };
    Ok(days)
}

/// Returns the number of months in `year`, 12 or 13.
pub fn months_in_year(year: &HebrewYear) -> usize {
    HebrewMonth::months_of_year(year.is_leap()).len()
}

/// Maps Adar II to Adar in common years and rejects months the year lacks.
fn normalize_month(year: &HebrewYear, month: HebrewMonth) -> Result<HebrewMonth, CalendarError> {
    match (month, year.is_leap()) {
        (HebrewMonth::AdarII, false) => Ok(HebrewMonth::Adar),
        (HebrewMonth::AdarI, false) | (HebrewMonth::Adar, true) => {
            Err(CalendarError::MonthNotInYear {
                month: month.name(),
                year: year.year(),
            })
        }
        _ => Ok(month),
    }
}

/// A date in the Hebrew calendar.
///
/// Construction validates the month against the year's layout and the day
/// against the month's true length, so every `HebrewDate` names a real day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HebrewDate {
    year: i32,
    month: HebrewMonth,
    day: u8,
}

impl HebrewDate {
    /// Creates a new `HebrewDate`.
    ///
    /// Adar II in a common year is accepted and stored as Adar.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError`] if the year is out of range, the month does
    /// not exist in that year, or the day exceeds the month's length.
    pub fn new(year: i32, month: HebrewMonth, day: u8) -> Result<Self, CalendarError> {
        let info = HebrewYear::new(year)?;
        let month = normalize_month(&info, month)?;
        let max_day = month_length(&info, month)?;
        if !(1..=max_day).contains(&day) {
            return Err(CalendarError::InvalidDay {
                day,
                month: month.name(),
                max_day,
            });
        }
        Ok(Self { year, month, day })
    }

    /// Creates a new `HebrewDate` from a numeric month code (1..=14).
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidHebrewMonth`] for codes outside
    /// 1..=14, and any error [`HebrewDate::new`] returns.
    pub fn from_codes(year: i32, month: u8, day: u8) -> Result<Self, CalendarError> {
        Self::new(year, HebrewMonth::from_code(month)?, day)
    }

    /// Returns the year (anno mundi).
    pub fn year(self) -> i32 {
        self.year
    }

    /// Returns the month.
    pub fn month(self) -> HebrewMonth {
        self.month
    }

    /// Returns the day within the month.
    pub fn day(self) -> u8 {
        self.day
    }

    /// Returns the Julian day number of this date.
    pub fn to_jdn(self) -> JulianDay {
        hebrew_to_jdn(self)
    }

    /// Returns the Hebrew date for a Julian day number.
    ///
    /// # Errors
    ///
    /// See [`jdn_to_hebrew`].
    pub fn from_jdn(jdn: JulianDay) -> Result<Self, CalendarError> {
        jdn_to_hebrew(jdn).map(|(date, _)| date)
    }

    /// Returns the Hebrew date whose daylight hours fall on `date`.
    ///
    /// # Errors
    ///
    /// See [`jdn_to_hebrew`].
    pub fn from_civil(date: CivilDate) -> Result<Self, CalendarError> {
        Self::from_jdn(date.to_jdn())
    }

    /// Returns the civil date of this day's daylight hours.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::YearOutOfRange`] past the civil range.
    pub fn to_civil(self) -> Result<CivilDate, CalendarError> {
        jdn_to_civil(self.to_jdn())
    }

    /// Returns the day of the week.
    pub fn weekday(self) -> Weekday {
        self.to_jdn().weekday()
    }
}

impl fmt::Display for HebrewDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.day, self.month, self.year)
    }
}

/// Converts a Hebrew date to its Julian day number.
pub fn hebrew_to_jdn(date: HebrewDate) -> JulianDay {
    hebrew_to_jdn_with_bounds(date).0
}

/// Converts a Hebrew date to its Julian day number, also returning the
/// Tishrei 1 boundaries of its year.
///
/// Months are laid out as an alternating 30/29 sequence from Tishrei, then
/// corrected for a long Cheshvan, a short Kislev, and the 30 days of
/// Adar I in leap years.
pub fn hebrew_to_jdn_with_bounds(date: HebrewDate) -> (JulianDay, YearBounds) {
    let mut day = i64::from(date.day);
    let month = match date.month {
        HebrewMonth::AdarI => 6,
        HebrewMonth::AdarII => {
            day += 30;
            6
        }
        m => i64::from(m.code()),
    };

    let year = i64::from(date.year);
    let start = elapsed_days(year);
    let length = elapsed_days(year + 1) - start;

    let mut days = start + (59 * (month - 1) + 1) / 2 + day;
    if length % 10 > 4 && month > 2 {
        days += 1;
    }
    if length % 10 < 4 && month > 3 {
        days -= 1;
    }
    if length > 365 && month > 6 {
        days += 30;
    }

    let tishrei1 = JulianDay::new(start + TISHREI1_JDN_OFFSET);
    let bounds = YearBounds {
        tishrei1,
        next_tishrei1: tishrei1 + length,
    };
    (JulianDay::new(days + JDN_OFFSET), bounds)
}

fn year_bounds(year: i32) -> YearBounds {
    let year = i64::from(year);
    YearBounds {
        tishrei1: JulianDay::new(elapsed_days(year) + TISHREI1_JDN_OFFSET),
        next_tishrei1: JulianDay::new(elapsed_days(year + 1) + TISHREI1_JDN_OFFSET),
    }
}

/// Converts a Julian day number to a Hebrew date, also returning the
/// Tishrei 1 boundaries of its year.
///
/// # Errors
///
/// Returns [`CalendarError::YearOutOfRange`] for days before Tishrei 1 of
/// year 1 or beyond the supported civil range.
pub fn jdn_to_hebrew(jdn: JulianDay) -> Result<(HebrewDate, YearBounds), CalendarError> {
    let civil = jdn_to_civil(jdn)?;

    let mut year = civil.year() + HEBREW_CIVIL_YEAR_OFFSET;
    let mut bounds = year_bounds(year);
    if bounds.next_tishrei1 <= jdn {
        year += 1;
        bounds = year_bounds(year);
    } else if jdn < bounds.tishrei1 {
        year -= 1;
        bounds = year_bounds(year);
    }

    if !(HebrewYear::MIN..=HebrewYear::MAX).contains(&year) {
        return Err(CalendarError::YearOutOfRange {
            year: i64::from(year),
            min: i64::from(HebrewYear::MIN),
            max: i64::from(HebrewYear::MAX),
        });
    }

    let size = bounds.length();
    let mut days = jdn - bounds.tishrei1;

    let (month, day) = if days >= size - LAST_EIGHT_MONTHS_DAYS {
        days -= size - LAST_EIGHT_MONTHS_DAYS;
        let m = days * 2 / 59;
        let day = days - (m * 59 + 1) / 2 + 1;
        let mut month = m + 5;
        if size > 355 && month <= 6 {
            month += 8;
        }
        (month, day)
    } else {
        let (m, day) = if size % 10 > 4 && days == 59 {
            // 30 Cheshvan in a complete year.
            (1, 30)
        } else if size % 10 > 4 && days > 59 {
            let m = (days - 1) * 2 / 59;
            (m, days - (m * 59 + 1) / 2)
        } else if size % 10 < 4 && days > 87 {
            let m = (days + 1) * 2 / 59;
            (m, days - (m * 59 + 1) / 2 + 2)
        } else {
            let m = days * 2 / 59;
            (m, days - (m * 59 + 1) / 2 + 1)
        };
        (m + 1, day)
    };

    let date = HebrewDate {
        year,
        month: HebrewMonth::from_code(month as u8)?,
        day: day as u8,
    };
    Ok((date, bounds))
}
