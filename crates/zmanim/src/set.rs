//! The set of zmanim for one date and place.

use std::collections::BTreeMap;

use jiff::civil::Date;
use jiff::tz::TimeZone;
use jiff::{SignedDuration, Timestamp, Zoned};
use luach_solar::{
    ALOT_HASHACHAR, FIRST_STARS, Location, MISHEYAKIR, SUNRISE_SUNSET, THREE_STARS,
    sun_times_at_altitude,
};
use tracing::debug;

use crate::error::ZmanimError;
use crate::zman::Zman;

/// Every zman of one civil date at one location.
///
/// Zmanim whose inputs depend on a solar angle the sun never reaches on
/// that date are absent rather than approximated.
#[derive(Debug, Clone, PartialEq)]
pub struct ZmanSet {
    date: Date,
    times: BTreeMap<Zman, Zoned>,
    gra_hour: Option<f64>,
    mga_hour: Option<f64>,
}

impl ZmanSet {
    /// Computes the zmanim of `date` at `location`.
    ///
    /// # Errors
    ///
    /// Returns [`ZmanimError::Time`] if an instant falls outside the range
    /// jiff can represent.
    #[tracing::instrument(skip_all, fields(%date, location = location.name()))]
    pub fn compute(date: Date, location: &Location) -> Result<Self, ZmanimError> {
        let altitude = |zenith| sun_times_at_altitude(location, date, zenith);
        let daylight = altitude(SUNRISE_SUNSET);
        let dawn = altitude(ALOT_HASHACHAR);
        let misheyakir = altitude(MISHEYAKIR);
        let first_stars = altitude(FIRST_STARS);
        let three_stars = altitude(THREE_STARS);

        let mut minutes: Vec<(Zman, f64)> = Vec::with_capacity(Zman::ALL.len());
        let first_light = dawn.rise().map(f64::from);
        if let Some(m) = first_light {
            minutes.push((Zman::FirstLight, m));
        }
        if let Some(m) = misheyakir.rise() {
            minutes.push((Zman::Talit, f64::from(m)));
        }
        if let Some(m) = first_stars.set() {
            minutes.push((Zman::FirstStars, f64::from(m)));
        }
        if let Some(m) = three_stars.set() {
            minutes.push((Zman::ThreeStars, f64::from(m)));
        }

        let mut gra_hour = None;
        let mut mga_hour = None;
        if let (Some(rise), Some(set)) = (daylight.rise(), daylight.set()) {
            let (rise, set) = (f64::from(rise), f64::from(set));
            let gra = (set - rise) / 12.0;
            let midday = (rise + set) / 2.0;
            debug!(daylight_minutes = set - rise, gra_hour = gra, "daylight");
            minutes.extend([
                (Zman::Sunrise, rise),
                (Zman::GraEndShma, rise + 3.0 * gra),
                (Zman::GraEndTfila, rise + 4.0 * gra),
                (Zman::Midday, midday),
                (Zman::BigMincha, rise + 6.5 * gra),
                (Zman::SmallMincha, rise + 9.5 * gra),
                (Zman::PlagMincha, set - 1.25 * gra),
                (Zman::Sunset, set),
                (Zman::StarsOut, set + 18.0 * gra / 60.0),
                (Zman::Midnight, midday + 720.0),
            ]);
            gra_hour = Some(gra);

            if let Some(first_light) = first_light {
                let mga = (midday - first_light) / 6.0;
                debug!(mga_hour = mga, "dawn to midday");
                minutes.extend([
                    (Zman::MgaEndShma, first_light + 3.0 * mga),
                    (Zman::MgaEndTfila, first_light + 4.0 * mga),
                ]);
                mga_hour = Some(mga);
            }
        }

        let origin = date.to_zoned(TimeZone::UTC)?.timestamp();
        let times = minutes
            .into_iter()
            .map(|(zman, m)| Ok((zman, instant(origin, m, location.time_zone())?)))
            .collect::<Result<BTreeMap<_, _>, ZmanimError>>()?;

        Ok(Self {
            date,
            times,
            gra_hour,
            mga_hour,
        })
    }

    /// Returns the civil date the set was computed for.
    pub fn date(&self) -> Date {
        self.date
    }

    /// Returns the instant of `zman`, or `None` if it does not occur.
    pub fn get(&self, zman: Zman) -> Option<&Zoned> {
        self.times.get(&zman)
    }

    /// Looks up a zman by its canonical name (or alias).
    ///
    /// # Errors
    ///
    /// Returns [`ZmanimError::UnknownZman`] if `name` is not a zman.
    pub fn by_name(&self, name: &str) -> Result<Option<&Zoned>, ZmanimError> {
        Ok(self.get(Zman::from_name(name)?))
    }

    /// Iterates over the zmanim that occur, earliest identifier first.
    pub fn iter(&self) -> impl Iterator<Item = (Zman, &Zoned)> {
        self.times.iter().map(|(&zman, at)| (zman, at))
    }

    /// Returns the number of zmanim that occur.
    pub fn len(&self) -> usize {
        self.times.len()
    }

    /// Returns `true` if no zman occurs (polar day or night).
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Returns the GRA halachic hour, a twelfth of sunrise to sunset, in
    /// minutes.
    pub fn gra_hour(&self) -> Option<f64> {
        self.gra_hour
    }

    /// Returns the MGA halachic hour, a sixth of dawn to midday, in minutes.
    pub fn mga_hour(&self) -> Option<f64> {
        self.mga_hour
    }
}

/// Converts minutes from UTC midnight into an instant in `tz`, rounded to
/// the second.
fn instant(origin: Timestamp, minutes: f64, tz: &TimeZone) -> Result<Zoned, ZmanimError> {
    let offset = SignedDuration::from_secs((minutes * 60.0).round() as i64);
    Ok(origin.checked_add(offset)?.to_zoned(tz.clone()))
}
