//! Great-circle distance between two coordinates.

use crate::config::EARTH_RADIUS_KM;
use crate::types::coordinate::Coordinate;

/// Returns the haversine distance in kilometers between `from` and `to`.
///
/// Inputs are not validated here; callers that accept untrusted
/// coordinates should call [`Coordinate::validate`] first.
pub fn distance(from: &Coordinate, to: &Coordinate) -> f64 {
    let lat1 = from.latitude.into_inner();
    let lat2 = to.latitude.into_inner();
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (to.longitude.into_inner() - from.longitude.into_inner()).to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}
