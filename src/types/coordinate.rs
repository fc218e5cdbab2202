//! Struct definitions and implementations for [`Coordinate`].

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// A [`Coordinate`] is a point on the Earth's surface in degrees.
///
/// It is produced either by a location provider reading or by a static
/// table entry such as the ones in
/// [`directory`](`crate::utils::directory`).
///
/// Fields are wrapped in [`OrderedFloat`] so coordinates can be used as
/// hash keys and compared for equality.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: OrderedFloat<f64>,
    pub longitude: OrderedFloat<f64>,
}

impl Coordinate {
    /// Creates a coordinate without validating it.
    ///
    /// Use [`Coordinate::validate`] before doing math on values that
    /// did not come from a trusted table.
    pub const fn new(latitude: f64, longitude: f64) -> Coordinate {
        Coordinate {
            latitude: OrderedFloat(latitude),
            longitude: OrderedFloat(longitude),
        }
    }

    /// Returns `true` when both values are finite and in range.
    pub fn is_valid(&self) -> bool {
        let lat = self.latitude.into_inner();
        let lon = self.longitude.into_inner();
        lat.is_finite()
            && lon.is_finite()
            && (-90.0..=90.0).contains(&lat)
            && (-180.0..=180.0).contains(&lon)
    }

    /// Fails with [`Error::InvalidCoordinate`] unless [`Self::is_valid`].
    pub fn validate(&self) -> Result<(), Error> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(Error::InvalidCoordinate {
                latitude: self.latitude.into_inner(),
                longitude: self.longitude.into_inner(),
            })
        }
    }
}
