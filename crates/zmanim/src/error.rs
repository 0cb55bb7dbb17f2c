//! Error types for the luach-zmanim crate.

use luach_calendar::CalendarError;
use luach_solar::SolarError;

/// Error type for all fallible operations in the luach-zmanim crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ZmanimError {
    /// Returned when a zman name is not one of the known identifiers.
    #[error("unknown zman: {name:?}")]
    UnknownZman {
        /// The name that was looked up.
        name: String,
    },

    /// Returned when a configuration parameter is invalid.
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// Description of the problem.
        reason: String,
    },

    /// Wrapped error from the calendar crate.
    #[error(transparent)]
    Calendar(#[from] CalendarError),

    /// Wrapped error from the solar crate.
    #[error(transparent)]
    Solar(#[from] SolarError),

    /// Returned when an instant cannot be represented.
    #[error("time arithmetic failed: {0}")]
    Time(#[from] jiff::Error),
}
