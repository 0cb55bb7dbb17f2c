//! Molad arithmetic and the deferment rules that fix the start of each
//! Hebrew year.
//!
//! Time is counted in parts (chalakim), 1080 to the hour. All counts are
//! taken from the molad of Tishrei 3744, shifted by six hours so that the
//! Hebrew day (which begins at 18:00) lines up with whole-day boundaries.

/// Parts in one hour.
pub const PARTS_PER_HOUR: i64 = 1080;

/// Parts in one day.
pub const PARTS_PER_DAY: i64 = 24 * PARTS_PER_HOUR;

/// Parts in one week.
pub const PARTS_PER_WEEK: i64 = 7 * PARTS_PER_DAY;

/// Length of a mean lunar month beyond 28 whole days: 1 day 12 h 793 p.
pub const PARTS_PER_MONTH: i64 = PARTS_PER_DAY + chalakim(12, 793);

/// Molad of Tishrei 3744 (1 h 779 p) plus the six hour day shift.
const MOLAD_3744: i64 = chalakim(1 + 6, 779);

/// The reference year for molad arithmetic.
const REFERENCE_YEAR: i64 = 3744;

/// Offset from [`days_since_epoch`] to the Julian day of Tishrei 1.
pub(crate) const TISHREI1_JDN_OFFSET: i64 = 1_715_119;

/// Total parts in `hours` hours and `parts` parts.
pub const fn chalakim(hours: i64, parts: i64) -> i64 {
    hours * PARTS_PER_HOUR + parts
}

/// Returns the day count from the reference epoch to Tishrei 1 of
/// `hebrew_year`, after all deferments.
///
/// The molad is advanced month by month (235 months per 19 years) from the
/// reference molad. The resulting day is deferred by one day for a late
/// molad in the two molad zaken windows (a Tuesday molad at or after
/// 9 h 204 p in a common year, or a Monday molad at or after 15 h 589 p in
/// the year after a leap year), then by one more day if it would land on
/// Sunday, Wednesday, or Friday.
pub fn days_since_epoch(hebrew_year: i32) -> i64 {
    elapsed_days(i64::from(hebrew_year))
}

/// [`days_since_epoch`] over `i64`, so the year after any `i32` year is
/// still representable.
pub(crate) fn elapsed_days(hebrew_year: i64) -> i64 {
    let years = hebrew_year - REFERENCE_YEAR;

    let leap_months = (years * 7 + 1).div_euclid(19);
    let leap_left = (years * 7 + 1).rem_euclid(19);
    let months = years * 12 + leap_months;

    let parts = months * PARTS_PER_MONTH + MOLAD_3744;
    // 28 whole days per month are a whole number of weeks; only the
    // remainder carried in `parts` moves the weekday.
    let mut days = months * 28 + parts.div_euclid(PARTS_PER_DAY) - 2;

    let parts_in_week = parts.rem_euclid(PARTS_PER_WEEK);
    let parts_in_day = parts.rem_euclid(PARTS_PER_DAY);
    let mut weekday = parts_in_week / PARTS_PER_DAY;

    let gatarad = leap_left < 12 && weekday == 3 && parts_in_day >= chalakim(9 + 6, 204);
    let betutakpat = leap_left < 7 && weekday == 2 && parts_in_day >= chalakim(15 + 6, 589);
    if gatarad || betutakpat {
        days += 1;
        weekday += 1;
    }

    // Lo ADU: Tishrei 1 may not fall on Sunday (1), Wednesday (4) or Friday (6).
    if matches!(weekday, 1 | 4 | 6) {
        days += 1;
    }

    days
}

/// Returns the number of days in `hebrew_year`.
///
/// Always one of 353, 354, 355 (common) or 383, 384, 385 (leap).
pub fn year_length(hebrew_year: i32) -> i64 {
    let year = i64::from(hebrew_year);
    elapsed_days(year + 1) - elapsed_days(year)
}

/// Returns `true` if `hebrew_year` has thirteen months.
///
/// Years 3, 6, 8, 11, 14, 17 and 19 of each 19-year cycle are leap years.
pub fn is_leap_year(hebrew_year: i32) -> bool {
    (7 * i64::from(hebrew_year) + 1).rem_euclid(19) < 7
}
