//! Pure conversion functions: TOML config and CLI strings -> library types.

use anyhow::{Context, Result};
use jiff::civil::{Date, Time};
use jiff::tz::TimeZone;

use luach_calendar::CivilDate;
use luach_solar::Location;
use luach_zmanim::ZmanimConfig;

use crate::config::{LocationToml, ZmanimToml};

/// Builds a [`Location`], resolving the time zone name through the system
/// time zone database.
pub fn build_location(loc: &LocationToml) -> Result<Location> {
    let time_zone = TimeZone::get(&loc.timezone)
        .with_context(|| format!("unknown time zone: {:?}", loc.timezone))?;
    build_location_in(loc, time_zone)
}

/// Builds a [`Location`] in an already resolved time zone.
fn build_location_in(loc: &LocationToml, time_zone: TimeZone) -> Result<Location> {
    let location = Location::new(&loc.name, loc.latitude, loc.longitude, time_zone)
        .with_context(|| format!("invalid location {:?}", loc.name))?
        .with_elevation(loc.elevation)
        .with_diaspora(loc.diaspora);
    Ok(location)
}

/// Builds a validated [`ZmanimConfig`], letting CLI overrides win.
pub fn build_zmanim_config(
    z: &ZmanimToml,
    candle_offset: Option<i64>,
    havdalah_offset: Option<i64>,
) -> Result<ZmanimConfig> {
    let cfg = ZmanimConfig::new()
        .with_candle_lighting_offset(candle_offset.unwrap_or(z.candle_lighting_offset))
        .with_havdalah_offset(havdalah_offset.unwrap_or(z.havdalah_offset));
    cfg.validate()?;
    Ok(cfg)
}

/// Parses a `YYYY-MM-DD` date.
pub fn parse_date(s: &str) -> Result<Date> {
    s.parse::<Date>()
        .with_context(|| format!("invalid date {s:?}: expected YYYY-MM-DD"))
}

/// Parses an `HH:MM` wall-clock time.
pub fn parse_time(s: &str) -> Result<Time> {
    s.parse::<Time>()
        .with_context(|| format!("invalid time {s:?}: expected HH:MM"))
}

/// Converts a jiff date into the calendar crate's civil date.
pub fn to_civil(date: Date) -> Result<CivilDate> {
    let civil = CivilDate::new(
        i32::from(date.year()),
        date.month().unsigned_abs(),
        date.day().unsigned_abs(),
    )?;
    Ok(civil)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zmanim_config_overrides() {
        let toml = ZmanimToml {
            candle_lighting_offset: 18,
            havdalah_offset: 0,
        };
        let cfg = build_zmanim_config(&toml, Some(40), None).unwrap();
        assert_eq!(cfg.candle_lighting_offset(), 40);
        assert_eq!(cfg.havdalah_offset(), 0);
    }

    #[test]
    fn zmanim_config_is_validated() {
        let toml = ZmanimToml {
            candle_lighting_offset: 18,
            havdalah_offset: 0,
        };
        let err = build_zmanim_config(&toml, None, Some(-1)).unwrap_err();
        assert!(err.to_string().contains("havdalah_offset"));
    }

    #[test]
    fn bad_coordinates_are_reported() {
        let loc = LocationToml {
            latitude: 95.0,
            ..LocationToml::default()
        };
        let err = build_location_in(&loc, TimeZone::UTC).unwrap_err();
        assert!(format!("{err:#}").contains("invalid latitude"));
    }

    #[test]
    fn location_fields_are_carried() {
        let loc = LocationToml {
            diaspora: true,
            ..LocationToml::default()
        };
        let location = build_location_in(&loc, TimeZone::UTC).unwrap();
        assert_eq!(location.name(), "Jerusalem");
        assert_eq!(location.elevation(), 754.0);
        assert!(location.diaspora());
    }

    #[test]
    fn unknown_time_zone_is_reported() {
        let loc = LocationToml {
            timezone: "Mars/Olympus_Mons".to_string(),
            ..LocationToml::default()
        };
        let err = build_location(&loc).unwrap_err();
        assert!(err.to_string().contains("unknown time zone"));
    }

    #[test]
    fn dates_and_times() {
        let date = parse_date("2024-03-22").unwrap();
        assert_eq!(to_civil(date).unwrap(), CivilDate::new(2024, 3, 22).unwrap());
        assert_eq!(parse_time("17:34").unwrap(), Time::constant(17, 34, 0, 0));
        assert!(parse_date("22/03/2024").is_err());
        assert!(parse_time("25:00").is_err());
    }
}
