//! Definition of the [`RankedLocation`] type.

use serde::Serialize;

use super::location::Location;
use crate::config::DISTANCE_DECIMALS;

/// A [`Location`] paired with its distance from an observer.
///
/// Produced fresh on every ranking call. The distance keeps full
/// precision; round it only for display via
/// [`distance_label`](RankedLocation::distance_label).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedLocation<'a> {
    pub location: &'a Location,

    /// Great-circle distance in kilometers.
    pub distance_km: f64,
}

impl RankedLocation<'_> {
    /// Formats the distance for display, e.g. `1.60 km`.
    pub fn distance_label(&self) -> String {
        format!("{:.*} km", DISTANCE_DECIMALS, self.distance_km)
    }
}
