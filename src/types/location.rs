//! Struct definitions and implementations for [`Location`].
//!
//! A `Location` is a named drop-off point. Only its
//! [`Coordinate`] matters to ranking; the remaining fields are
//! carried through so callers can render list items, map markers and
//! popups.

use chrono::{DateTime, TimeZone};
use serde::{Deserialize, Serialize};

use super::coordinate::Coordinate;
use super::hours::OpeningHours;
use super::status::Status;

/// A named place with a fixed coordinate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// Stable identifier. Generated locations use a UUID; static table
    /// entries use a readable slug such as `ktm:doko-recyclers`.
    pub uid: String,

    pub name: String,

    pub description: String,

    pub address: String,

    pub contact: String,

    /// Weekly opening window, if known.
    pub hours: Option<OpeningHours>,

    /// Denotes the geographical position of the location.
    pub coordinate: Coordinate,

    /// A location might be closed for reasons unrelated to its hours,
    /// e.g. renovation. See [`Location::status_at`].
    pub status: Status,
}

impl Location {
    /// Returns the status of the location at `at`.
    ///
    /// The instant is converted to the timezone it carries before the
    /// opening hours are checked, so pass it in the location's local
    /// timezone.
    pub fn status_at<Tz: TimeZone>(&self, at: &DateTime<Tz>) -> Status {
        if self.status == Status::Closed {
            return Status::Closed;
        }
        match &self.hours {
            Some(hours) if !hours.is_open_at(at.naive_local()) => Status::Closed,
            _ => Status::Open,
        }
    }
}
