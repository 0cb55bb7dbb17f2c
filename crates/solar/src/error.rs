//! Error types for the luach-solar crate.

/// Error type for all fallible operations in the luach-solar crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SolarError {
    /// Returned when a latitude is not a finite value in -90..=90.
    #[error("invalid latitude: {latitude} (must be -90..=90 degrees)")]
    InvalidLatitude {
        /// The invalid latitude that was provided.
        latitude: f64,
    },

    /// Returned when a longitude is not a finite value in -180..=180.
    #[error("invalid longitude: {longitude} (must be -180..=180 degrees)")]
    InvalidLongitude {
        /// The invalid longitude that was provided.
        longitude: f64,
    },
}
