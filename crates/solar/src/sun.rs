//! Times at which the sun crosses a given angle from the zenith.
//!
//! Uses the NOAA low-precision series for the equation of time and solar
//! declination, evaluated once per civil day. Accuracy is on the order of a
//! minute at mid latitudes, which is the precision zmanim are published at.

use std::f64::consts::PI;

use jiff::civil::Date;
use tracing::trace;

use crate::location::Location;

/// Zenith angle of the sun's upper limb at sunrise and sunset, including
/// refraction.
pub const SUNRISE_SUNSET: f64 = 90.833;

/// Zenith angle at dawn (alot hashachar).
pub const ALOT_HASHACHAR: f64 = 106.1;

/// Zenith angle at which a blue and white thread can be told apart
/// (misheyakir).
pub const MISHEYAKIR: f64 = 101.0;

/// Zenith angle at which the first stars appear.
pub const FIRST_STARS: f64 = 96.0;

/// Zenith angle at which three medium stars are visible (tzeit hakochavim).
pub const THREE_STARS: f64 = 98.5;

/// Rising and setting times in minutes from UTC midnight of the civil date.
///
/// Values may be negative or exceed 1440 when the crossing happens on the
/// previous or next UTC day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SunTimes {
    rise: i32,
    set: i32,
}

impl SunTimes {
    /// Sentinel returned when the sun never reaches the requested angle on
    /// the requested day.
    pub const UNREACHABLE: SunTimes = SunTimes {
        rise: -720,
        set: -720,
    };

    /// Creates a pair of times from raw minute values.
    pub const fn new(rise: i32, set: i32) -> Self {
        Self { rise, set }
    }

    /// Returns `true` if this is the [`UNREACHABLE`](Self::UNREACHABLE)
    /// sentinel.
    pub fn is_unreachable(&self) -> bool {
        *self == Self::UNREACHABLE
    }

    /// Returns the rising time in UTC minutes, or `None` if unreachable.
    pub fn rise(&self) -> Option<i32> {
        (!self.is_unreachable()).then_some(self.rise)
    }

    /// Returns the setting time in UTC minutes, or `None` if unreachable.
    pub fn set(&self) -> Option<i32> {
        (!self.is_unreachable()).then_some(self.set)
    }

    /// Returns the raw `(rise, set)` pair, sentinel included.
    pub fn raw(&self) -> (i32, i32) {
        (self.rise, self.set)
    }
}

/// Equation of time in minutes and solar declination in radians for the
/// fractional year `gamma`.
fn solar_terms(gamma: f64) -> (f64, f64) {
    let eqtime = 229.18
        * (0.000075 + 0.001868 * gamma.cos()
            - 0.032077 * gamma.sin()
            - 0.014615 * (2.0 * gamma).cos()
            - 0.040849 * (2.0 * gamma).sin());

    let decl = 0.006918 - 0.399912 * gamma.cos() + 0.070257 * gamma.sin()
        - 0.006758 * (2.0 * gamma).cos()
        + 0.000907 * (2.0 * gamma).sin()
        - 0.002697 * (3.0 * gamma).cos()
        + 0.00148 * (3.0 * gamma).sin();

    (eqtime, decl)
}

/// Computes rise and set times for raw coordinates and a day of the year.
///
/// # Arguments
///
/// * `latitude` — Degrees north.
/// * `longitude` — Degrees east.
/// * `day_of_year` — 1 for 1 January.
/// * `zenith` — Angle of the sun from the zenith in degrees.
pub fn sun_times(latitude: f64, longitude: f64, day_of_year: u16, zenith: f64) -> SunTimes {
    let gamma = 2.0 * PI * (f64::from(day_of_year) - 1.0) / 365.0;
    let (eqtime, decl) = solar_terms(gamma);

    let lat = latitude.to_radians();
    let cos_hour_angle =
        zenith.to_radians().cos() / (lat.cos() * decl.cos()) - lat.tan() * decl.tan();
    // NaN fails the range check as well.
    if !(-1.0..=1.0).contains(&cos_hour_angle) {
        trace!(latitude, day_of_year, zenith, cos_hour_angle, "sun never reaches angle");
        return SunTimes::UNREACHABLE;
    }

    let hour_angle = 720.0 * cos_hour_angle.acos() / PI;
    let noon = 720.0 - 4.0 * longitude - eqtime;
    SunTimes {
        rise: (noon - hour_angle) as i32,
        set: (noon + hour_angle) as i32,
    }
}

/// Computes the UTC times on `date` at which the sun passes `zenith`
/// degrees from the zenith at `location`, rising and setting.
///
/// Returns [`SunTimes::UNREACHABLE`] if the sun stays above or below that
/// angle all day (polar day or night, or deep twilight angles near the
/// summer solstice at high latitudes).
pub fn sun_times_at_altitude(location: &Location, date: Date, zenith: f64) -> SunTimes {
    sun_times(
        location.latitude(),
        location.longitude(),
        date.day_of_year() as u16,
        zenith,
    )
}
