//! Configuration for the zmanim composer.

use crate::error::ZmanimError;

/// Largest accepted candle lighting or havdalah offset, in minutes.
const MAX_OFFSET_MINUTES: i64 = 120;

/// Offsets used for candle lighting and havdalah.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZmanimConfig {
    /// Minutes before sunset that candles are lit.
    candle_lighting_offset: i64,
    /// Minutes after sunset for havdalah; 0 means use three stars.
    havdalah_offset: i64,
}

impl Default for ZmanimConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl ZmanimConfig {
    /// Creates a configuration with the customary defaults: candles 18
    /// minutes before sunset, havdalah at three stars.
    pub fn new() -> Self {
        Self {
            candle_lighting_offset: 18,
            havdalah_offset: 0,
        }
    }

    /// Sets the candle lighting offset in minutes before sunset.
    pub fn with_candle_lighting_offset(mut self, minutes: i64) -> Self {
        self.candle_lighting_offset = minutes;
        self
    }

    /// Sets the havdalah offset in minutes after sunset (0 for three stars).
    pub fn with_havdalah_offset(mut self, minutes: i64) -> Self {
        self.havdalah_offset = minutes;
        self
    }

    /// Returns the candle lighting offset in minutes.
    pub fn candle_lighting_offset(&self) -> i64 {
        self.candle_lighting_offset
    }

    /// Returns the havdalah offset in minutes.
    pub fn havdalah_offset(&self) -> i64 {
        self.havdalah_offset
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ZmanimError::InvalidConfig`] if either offset is negative
    /// or larger than two hours.
    pub fn validate(&self) -> Result<(), ZmanimError> {
        for (name, value) in [
            ("candle_lighting_offset", self.candle_lighting_offset),
            ("havdalah_offset", self.havdalah_offset),
        ] {
            if !(0..=MAX_OFFSET_MINUTES).contains(&value) {
                return Err(ZmanimError::InvalidConfig {
                    reason: format!("{name} must be 0..={MAX_OFFSET_MINUTES} minutes, got {value}"),
                });
            }
        }
        Ok(())
    }
}
