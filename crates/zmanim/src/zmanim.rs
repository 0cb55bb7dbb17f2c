//! Zmanim of the day containing a moment, with Sabbath boundaries.

use jiff::civil::DateTime;
use jiff::{SignedDuration, Zoned};
use luach_solar::Location;
use tracing::debug;

use crate::classifier::{CalendarDay, RestDayClassifier};
use crate::config::ZmanimConfig;
use crate::error::ZmanimError;
use crate::set::ZmanSet;
use crate::zman::Zman;

/// The zmanim of the local day containing a moment, plus candle lighting,
/// havdalah and whether work is forbidden at that moment.
#[derive(Debug, Clone)]
pub struct Zmanim {
    moment: Zoned,
    today: CalendarDay,
    tomorrow: CalendarDay,
    today_rest: bool,
    tomorrow_rest: bool,
    zmanim: ZmanSet,
    candle_lighting: Option<Zoned>,
    havdalah: Option<Zoned>,
}

impl Zmanim {
    /// Computes the zmanim for the civil day containing `moment` in the
    /// time zone of `location`.
    ///
    /// # Errors
    ///
    /// Returns [`ZmanimError::InvalidConfig`] if `config` is invalid,
    /// [`ZmanimError::Calendar`] if the day lies outside the calendar range,
    /// and [`ZmanimError::Time`] if an instant cannot be represented.
    #[tracing::instrument(skip_all, fields(%moment, location = location.name()))]
    pub fn new<C: RestDayClassifier + ?Sized>(
        moment: &Zoned,
        location: &Location,
        classifier: &C,
        config: &ZmanimConfig,
    ) -> Result<Self, ZmanimError> {
        config.validate()?;

        let moment = moment.with_time_zone(location.time_zone().clone());
        let date = moment.date();
        let today = CalendarDay::new(date)?;
        let tomorrow = CalendarDay::new(date.tomorrow()?)?;
        let today_rest = classifier.is_rest_day(&today, location.diaspora());
        let tomorrow_rest = classifier.is_rest_day(&tomorrow, location.diaspora());
        debug!(hebrew = %today.hebrew(), today_rest, tomorrow_rest, "classified day");

        let zmanim = ZmanSet::compute(date, location)?;
        let end_of_rest = havdalah_time(&zmanim, config)?;
        let candle_lighting = match (today_rest, tomorrow_rest) {
            (true, true) => end_of_rest.clone(),
            (false, true) => zmanim
                .get(Zman::Sunset)
                .map(|sunset| {
                    sunset.checked_sub(SignedDuration::from_mins(config.candle_lighting_offset()))
                })
                .transpose()?,
            _ => None,
        };
        let havdalah = if today_rest && !tomorrow_rest {
            end_of_rest
        } else {
            None
        };

        Ok(Self {
            moment,
            today,
            tomorrow,
            today_rest,
            tomorrow_rest,
            zmanim,
            candle_lighting,
            havdalah,
        })
    }

    /// Like [`new`](Self::new), for a wall-clock time at `location`.
    ///
    /// Times skipped by a daylight saving transition are moved forward;
    /// ambiguous times resolve to the earlier offset.
    ///
    /// # Errors
    ///
    /// As for [`new`](Self::new).
    pub fn from_local<C: RestDayClassifier + ?Sized>(
        local: DateTime,
        location: &Location,
        classifier: &C,
        config: &ZmanimConfig,
    ) -> Result<Self, ZmanimError> {
        let moment = local.to_zoned(location.time_zone().clone())?;
        Self::new(&moment, location, classifier, config)
    }

    /// Returns the moment, in the location's time zone.
    pub fn moment(&self) -> &Zoned {
        &self.moment
    }

    /// Returns the civil and Hebrew date of the moment's local day.
    pub fn today(&self) -> &CalendarDay {
        &self.today
    }

    /// Returns the civil and Hebrew date of the following day.
    pub fn tomorrow(&self) -> &CalendarDay {
        &self.tomorrow
    }

    /// Returns `true` if today is a Sabbath or festival.
    pub fn is_rest_day_today(&self) -> bool {
        self.today_rest
    }

    /// Returns `true` if tomorrow is a Sabbath or festival.
    pub fn is_rest_day_tomorrow(&self) -> bool {
        self.tomorrow_rest
    }

    /// Returns the zmanim of today.
    pub fn zmanim(&self) -> &ZmanSet {
        &self.zmanim
    }

    /// Returns today's instant for `zman`.
    pub fn get(&self, zman: Zman) -> Option<&Zoned> {
        self.zmanim.get(zman)
    }

    /// Returns candle lighting time, if candles are lit today.
    ///
    /// Before a rest day this is sunset less the configured offset. Between
    /// two consecutive rest days candles are lit once the first ends, at the
    /// havdalah time.
    pub fn candle_lighting(&self) -> Option<&Zoned> {
        self.candle_lighting.as_ref()
    }

    /// Returns havdalah time, if a rest day ends today.
    pub fn havdalah(&self) -> Option<&Zoned> {
        self.havdalah.as_ref()
    }

    /// Returns `true` if work is forbidden at the moment.
    ///
    /// On a rest day with no computable havdalah (the sun never gets low
    /// enough) the rest period lasts the whole day. A missing candle
    /// lighting time on the eve never starts one.
    pub fn issur_melacha_in_effect(&self) -> bool {
        match (self.today_rest, self.tomorrow_rest) {
            (true, true) => true,
            (true, false) => self.havdalah.as_ref().is_none_or(|end| self.moment < *end),
            (false, true) => self
                .candle_lighting
                .as_ref()
                .is_some_and(|start| self.moment > *start),
            (false, false) => false,
        }
    }
}

/// Three stars, or sunset plus a fixed offset when one is configured.
fn havdalah_time(zmanim: &ZmanSet, config: &ZmanimConfig) -> Result<Option<Zoned>, ZmanimError> {
    match config.havdalah_offset() {
        0 => Ok(zmanim.get(Zman::ThreeStars).cloned()),
        offset => Ok(zmanim
            .get(Zman::Sunset)
            .map(|sunset| sunset.checked_add(SignedDuration::from_mins(offset)))
            .transpose()?),
    }
}
