//! Generates random locations for testing and demos.

use rand::Rng;
use uuid::Uuid;

use crate::config::EARTH_RADIUS_KM;
use crate::error::Error;
use crate::types::coordinate::Coordinate;
use crate::types::location::Location;
use crate::types::status::Status;

/// Generates `capacity` random locations within `radius_km` of
/// `center`, spread evenly over the disc.
///
/// Each location gets a UUID v4 uid and no opening hours.
///
/// # Errors
/// [`Error::InvalidCoordinate`] for an invalid `center`, and
/// [`Error::InvalidRadius`] if the radius is negative or not finite.
pub fn generate_locations_near(
    center: &Coordinate,
    radius_km: f64,
    capacity: usize,
) -> Result<Vec<Location>, Error> {
    center.validate()?;
    if !radius_km.is_finite() || radius_km < 0.0 {
        return Err(Error::InvalidRadius(radius_km));
    }
    debug!("generating {} locations within {} km", capacity, radius_km);

    let mut rng = rand::thread_rng();
    let mut locations = Vec::with_capacity(capacity);
    for i in 0..capacity {
        let bearing = rng.gen_range(0.0..std::f64::consts::TAU);
        // sqrt keeps the density uniform per unit area.
        let distance_km = radius_km * rng.gen::<f64>().sqrt();
        locations.push(Location {
            uid: Uuid::new_v4().to_string(),
            name: format!("Generated Location {}", i),
            description: String::new(),
            address: String::new(),
            contact: String::new(),
            hours: None,
            coordinate: destination(center, bearing, distance_km),
            status: Status::Open,
        });
    }
    Ok(locations)
}

/// Point reached by travelling `distance_km` from `origin` along the
/// initial `bearing` (radians, clockwise from north).
fn destination(origin: &Coordinate, bearing: f64, distance_km: f64) -> Coordinate {
    let lat1 = origin.latitude.into_inner().to_radians();
    let lon1 = origin.longitude.into_inner().to_radians();
    let delta = distance_km / EARTH_RADIUS_KM;

    let lat2 = (lat1.sin() * delta.cos() + lat1.cos() * delta.sin() * bearing.cos()).asin();
    let lon2 = lon1
        + (bearing.sin() * delta.sin() * lat1.cos()).atan2(delta.cos() - lat1.sin() * lat2.sin());

    // Wrap longitude back into [-180, 180].
    let lon2 = (lon2.to_degrees() + 540.0).rem_euclid(360.0) - 180.0;
    Coordinate::new(lat2.to_degrees().clamp(-90.0, 90.0), lon2)
}

#[cfg(test)]
mod generator_tests {
    use super::*;
    use crate::utils::haversine;
    use std::collections::HashSet;

    const SAN_FRANCISCO: Coordinate = Coordinate::new(37.7749, -122.4194);

    #[test]
    fn test_capacity_and_radius() {
        let locations = generate_locations_near(&SAN_FRANCISCO, 25.0, 200).unwrap();
        assert_eq!(locations.len(), 200);
        for location in &locations {
            assert!(location.coordinate.is_valid());
            let d = haversine::distance(&SAN_FRANCISCO, &location.coordinate);
            assert!(d <= 25.0 + 1e-6, "{} km is outside the radius", d);
        }
    }

    #[test]
    fn test_unique_uids() {
        let locations = generate_locations_near(&SAN_FRANCISCO, 10.0, 100).unwrap();
        let uids: HashSet<_> = locations.iter().map(|l| l.uid.clone()).collect();
        assert_eq!(uids.len(), 100);
    }

    #[test]
    fn test_zero_radius() {
        let locations = generate_locations_near(&SAN_FRANCISCO, 0.0, 3).unwrap();
        for location in &locations {
            assert!(haversine::distance(&SAN_FRANCISCO, &location.coordinate) < 1e-6);
        }
    }

    #[test]
    fn test_rejects_bad_radius() {
        assert_eq!(
            generate_locations_near(&SAN_FRANCISCO, f64::INFINITY, 2),
            Err(Error::InvalidRadius(f64::INFINITY))
        );
        assert_eq!(
            generate_locations_near(&SAN_FRANCISCO, -1.0, 2),
            Err(Error::InvalidRadius(-1.0))
        );
        assert!(matches!(
            generate_locations_near(&SAN_FRANCISCO, f64::NAN, 2),
            Err(Error::InvalidRadius(_))
        ));
    }

    #[test]
    fn test_rejects_invalid_center() {
        let result = generate_locations_near(&Coordinate::new(f64::NAN, 0.0), 5.0, 2);
        assert!(matches!(result, Err(Error::InvalidCoordinate { .. })));

        let result = generate_locations_near(&Coordinate::new(91.0, 0.0), 5.0, 2);
        assert!(matches!(result, Err(Error::InvalidCoordinate { .. })));
    }

    /// Half of the disc's area lies beyond radius / sqrt(2), so roughly
    /// half of the points should too.
    #[test]
    fn test_spread_over_area() {
        let locations = generate_locations_near(&SAN_FRANCISCO, 10.0, 2000).unwrap();
        let inner_radius = 10.0 / std::f64::consts::SQRT_2;
        let outer = locations
            .iter()
            .filter(|l| haversine::distance(&SAN_FRANCISCO, &l.coordinate) > inner_radius)
            .count();
        assert!((800..=1200).contains(&outer), "{} of 2000 outside", outer);
    }

    #[test]
    fn test_destination_wraps_antimeridian() {
        let near_dateline = Coordinate::new(0.0, 179.9);
        // Due east for ~22 km crosses 180 degrees.
        let point = destination(&near_dateline, std::f64::consts::FRAC_PI_2, 22.0);
        assert!(point.is_valid());
        assert!(point.longitude.into_inner() < 0.0);
    }
}
