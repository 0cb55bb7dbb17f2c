//! Deciding which days are days of rest.
//!
//! Festival tables live outside this crate; callers plug them in through
//! [`RestDayClassifier`].

use jiff::civil::Date;
use luach_calendar::{CivilDate, HebrewDate, Weekday};

use crate::error::ZmanimError;

/// A civil date together with the Hebrew date it maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CalendarDay {
    civil: Date,
    hebrew: HebrewDate,
}

impl CalendarDay {
    /// Pairs `civil` with its Hebrew date.
    ///
    /// # Errors
    ///
    /// Returns [`ZmanimError::Calendar`] if the date lies outside the
    /// supported calendar range.
    pub fn new(civil: Date) -> Result<Self, ZmanimError> {
        let date = CivilDate::new(
            i32::from(civil.year()),
            civil.month().unsigned_abs(),
            civil.day().unsigned_abs(),
        )?;
        Ok(Self {
            civil,
            hebrew: HebrewDate::from_civil(date)?,
        })
    }

    /// Returns the civil date.
    pub fn civil(&self) -> Date {
        self.civil
    }

    /// Returns the Hebrew date that coincides with the civil date.
    pub fn hebrew(&self) -> HebrewDate {
        self.hebrew
    }

    /// Returns the day of the week.
    pub fn weekday(&self) -> Weekday {
        self.hebrew.weekday()
    }
}

/// Classifies days as Sabbaths and festivals.
pub trait RestDayClassifier {
    /// Returns `true` if `day` is a Sabbath. Defaults to Saturdays.
    fn is_shabbat(&self, day: &CalendarDay) -> bool {
        day.weekday() == Weekday::Saturday
    }

    /// Returns `true` if `day` is a festival on which work is forbidden.
    /// `diaspora` selects the two-day observance outside Israel.
    fn is_yom_tov(&self, day: &CalendarDay, diaspora: bool) -> bool;

    /// Returns `true` if `day` is a Sabbath or a festival.
    fn is_rest_day(&self, day: &CalendarDay, diaspora: bool) -> bool {
        self.is_shabbat(day) || self.is_yom_tov(day, diaspora)
    }
}

/// Treats every Saturday as a rest day and knows no festivals.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShabbatOnly;

impl RestDayClassifier for ShabbatOnly {
    fn is_yom_tov(&self, _day: &CalendarDay, _diaspora: bool) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::civil::date;
    use luach_calendar::HebrewMonth;

    #[test]
    fn pairs_civil_and_hebrew() {
        let day = CalendarDay::new(date(2024, 1, 1)).unwrap();
        assert_eq!(day.civil(), date(2024, 1, 1));
        assert_eq!(day.hebrew(), HebrewDate::new(5784, HebrewMonth::Tevet, 20).unwrap());
        assert_eq!(day.weekday(), Weekday::Monday);
    }

    #[test]
    fn shabbat_only() {
        let friday = CalendarDay::new(date(2024, 3, 22)).unwrap();
        let saturday = CalendarDay::new(date(2024, 3, 23)).unwrap();
        assert!(!ShabbatOnly.is_rest_day(&friday, false));
        assert!(ShabbatOnly.is_rest_day(&saturday, false));
        assert!(!ShabbatOnly.is_yom_tov(&saturday, true));
    }

    #[test]
    fn out_of_range_date_fails() {
        assert!(matches!(
            CalendarDay::new(date(-9999, 1, 1)),
            Err(ZmanimError::Calendar(_))
        ));
    }
}
