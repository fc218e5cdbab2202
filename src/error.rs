//! Error type returned by the fallible operations of this crate.

use thiserror::Error;

/// Errors raised while validating inputs or acquiring a position.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// A latitude/longitude pair is non-finite or outside its range.
    #[error("invalid coordinate ({latitude}, {longitude})")]
    InvalidCoordinate { latitude: f64, longitude: f64 },

    /// A search radius is negative or non-finite.
    #[error("invalid radius: {0} km")]
    InvalidRadius(f64),

    /// An opening hours string could not be parsed.
    #[error("invalid opening hours: {0}")]
    InvalidHours(String),

    /// The location provider could not produce a position.
    #[error("location unavailable: {0}")]
    LocationUnavailable(String),
}
