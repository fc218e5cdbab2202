//! Proximity ranking of candidate locations.
//!
//! Every function here is pure: candidates are borrowed, never
//! mutated, and each call allocates only its own output.

use ordered_float::OrderedFloat;

use crate::error::Error;
use crate::types::coordinate::Coordinate;
use crate::types::location::Location;
use crate::types::ranked::RankedLocation;
use crate::utils::haversine;

/// Ranks `candidates` by great-circle distance from `observer`.
///
/// # Arguments
/// * `observer` - The reference point.
/// * `candidates` - Locations to rank. May be empty.
/// * `limit` - Keep only the nearest `limit` entries. [`None`] keeps
///   all of them.
///
/// # Returns
/// Locations in ascending order of distance. Locations at exactly the
/// same distance keep their input order.
///
/// # Errors
/// [`Error::InvalidCoordinate`] if the observer or any candidate has a
/// non-finite or out-of-range coordinate.
///
/// # Time Complexity
/// *O*(*n* log *n*) in the number of candidates.
pub fn rank<'a>(
    observer: &Coordinate,
    candidates: &'a [Location],
    limit: Option<usize>,
) -> Result<Vec<RankedLocation<'a>>, Error> {
    debug!("observer: {:?}", observer);
    debug!("candidate count: {}, limit: {:?}", candidates.len(), limit);
    observer.validate()?;

    let mut ranked = candidates
        .iter()
        .map(|location| {
            location.coordinate.validate()?;
            Ok(RankedLocation {
                location,
                distance_km: haversine::distance(observer, &location.coordinate),
            })
        })
        .collect::<Result<Vec<_>, Error>>()?;

    // `sort_by_key` is stable, which keeps ties in input order.
    ranked.sort_by_key(|r| OrderedFloat(r.distance_km));

    if let Some(limit) = limit {
        ranked.truncate(limit);
    }
    debug!("ranked count: {}", ranked.len());
    Ok(ranked)
}

/// Returns the single nearest candidate, or [`None`] if there are no
/// candidates.
pub fn nearest<'a>(
    observer: &Coordinate,
    candidates: &'a [Location],
) -> Result<Option<RankedLocation<'a>>, Error> {
    Ok(rank(observer, candidates, Some(1))?.into_iter().next())
}

/// Ranks candidates and keeps those within `radius_km` of `observer`.
///
/// # Errors
/// [`Error::InvalidRadius`] if the radius is negative or not finite,
/// plus everything [`rank`] can return.
pub fn within_radius<'a>(
    observer: &Coordinate,
    candidates: &'a [Location],
    radius_km: f64,
) -> Result<Vec<RankedLocation<'a>>, Error> {
    if !radius_km.is_finite() || radius_km < 0.0 {
        return Err(Error::InvalidRadius(radius_km));
    }
    let mut ranked = rank(observer, candidates, None)?;
    let cutoff = ranked.partition_point(|r| r.distance_km <= radius_km);
    ranked.truncate(cutoff);
    Ok(ranked)
}
