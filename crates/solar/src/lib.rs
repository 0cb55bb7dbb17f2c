//! # luach-solar
//!
//! Sunrise, sunset and twilight times for a location and civil date.
//!
//! Every angle is a zenith angle: 90.833 degrees is the standard sunrise
//! and sunset, larger values are the sun below the horizon (dawn and
//! dusk variants). Results are UTC minutes from midnight of the civil date,
//! or [`SunTimes::UNREACHABLE`] when the sun never crosses the angle that
//! day.
//!
//! ## Quick Start
//!
//! ```ignore
//! use jiff::{civil::date, tz::TimeZone};
//! use luach_solar::{Location, SUNRISE_SUNSET, sun_times_at_altitude};
//!
//! let tz = TimeZone::get("Asia/Jerusalem").unwrap();
//! let jerusalem = Location::new("Jerusalem", 31.778, 35.235, tz).unwrap();
//! let times = sun_times_at_altitude(&jerusalem, date(2024, 3, 20), SUNRISE_SUNSET);
//! assert_eq!(times.rise(), Some(223));
//! ```

mod error;
mod location;
mod sun;

pub use error::SolarError;
pub use location::Location;
pub use sun::{
    ALOT_HASHACHAR, FIRST_STARS, MISHEYAKIR, SUNRISE_SUNSET, SunTimes, THREE_STARS, sun_times,
    sun_times_at_altitude,
};
