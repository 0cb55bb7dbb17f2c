//! Geographic locations.

use jiff::tz::TimeZone;

use crate::error::SolarError;

/// A place on Earth with the time zone its clocks follow.
///
/// The time zone is supplied already resolved; this crate never looks up
/// zone names.
#[derive(Debug, Clone)]
pub struct Location {
    name: String,
    latitude: f64,
    longitude: f64,
    elevation: f64,
    time_zone: TimeZone,
    diaspora: bool,
}

impl Location {
    /// Creates a new location.
    ///
    /// # Arguments
    ///
    /// * `name` — Display name.
    /// * `latitude` — Degrees north of the equator (negative for south).
    /// * `longitude` — Degrees east of Greenwich (negative for west).
    /// * `time_zone` — Resolved time zone used for local instants.
    ///
    /// # Errors
    ///
    /// Returns [`SolarError::InvalidLatitude`] or
    /// [`SolarError::InvalidLongitude`] for non-finite or out-of-range
    /// coordinates.
    pub fn new(
        name: impl Into<String>,
        latitude: f64,
        longitude: f64,
        time_zone: TimeZone,
    ) -> Result<Self, SolarError> {
        if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
            return Err(SolarError::InvalidLatitude { latitude });
        }
        if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
            return Err(SolarError::InvalidLongitude { longitude });
        }
        Ok(Self {
            name: name.into(),
            latitude,
            longitude,
            elevation: 0.0,
            time_zone,
            diaspora: false,
        })
    }

    /// Sets the elevation in metres. Informational only.
    pub fn with_elevation(mut self, elevation: f64) -> Self {
        self.elevation = elevation;
        self
    }

    /// Marks the location as outside the Land of Israel.
    pub fn with_diaspora(mut self, diaspora: bool) -> Self {
        self.diaspora = diaspora;
        self
    }

    /// Returns the display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the latitude in degrees.
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Returns the longitude in degrees.
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Returns the elevation in metres.
    pub fn elevation(&self) -> f64 {
        self.elevation
    }

    /// Returns the time zone.
    pub fn time_zone(&self) -> &TimeZone {
        &self.time_zone
    }

    /// Returns `true` outside the Land of Israel.
    pub fn diaspora(&self) -> bool {
        self.diaspora
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_valid() {
        let loc = Location::new("Jerusalem", 31.778, 35.235, TimeZone::UTC)
            .unwrap()
            .with_elevation(754.0);
        assert_eq!(loc.name(), "Jerusalem");
        assert_eq!(loc.latitude(), 31.778);
        assert_eq!(loc.longitude(), 35.235);
        assert_eq!(loc.elevation(), 754.0);
        assert!(!loc.diaspora());
    }

    #[test]
    fn diaspora_flag() {
        let loc = Location::new("New York", 40.7128, -74.006, TimeZone::UTC)
            .unwrap()
            .with_diaspora(true);
        assert!(loc.diaspora());
    }

    #[test]
    fn invalid_latitude() {
        assert_eq!(
            Location::new("x", 90.5, 0.0, TimeZone::UTC).unwrap_err(),
            SolarError::InvalidLatitude { latitude: 90.5 }
        );
        assert!(Location::new("x", f64::NAN, 0.0, TimeZone::UTC).is_err());
    }

    #[test]
    fn invalid_longitude() {
        assert_eq!(
            Location::new("x", 0.0, 200.0, TimeZone::UTC).unwrap_err(),
            SolarError::InvalidLongitude { longitude: 200.0 }
        );
    }
}
