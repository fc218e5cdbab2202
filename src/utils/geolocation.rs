//! Acquiring an observer position and turning it into a listing.
//!
//! Position lookup is a collaborator behind the [`LocationProvider`]
//! trait so ranking stays a pure function. Retries, if any, are the
//! provider's business.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::{GEOLOCATION_MAXIMUM_AGE_MS, GEOLOCATION_TIMEOUT_MS};
use crate::error::Error;
use crate::types::coordinate::Coordinate;
use crate::types::location::Location;
use crate::types::ranked::RankedLocation;
use crate::utils::ranker::rank;

/// Options passed to a [`LocationProvider`] for one lookup.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionOptions {
    pub enable_high_accuracy: bool,

    /// Give up after this long.
    pub timeout: Duration,

    /// Accept a cached reading no older than this.
    pub maximum_age: Duration,
}

impl Default for PositionOptions {
    fn default() -> Self {
        PositionOptions {
            enable_high_accuracy: true,
            timeout: Duration::from_millis(GEOLOCATION_TIMEOUT_MS),
            maximum_age: Duration::from_millis(GEOLOCATION_MAXIMUM_AGE_MS),
        }
    }
}

/// Source of the observer's current position.
pub trait LocationProvider {
    /// Performs one position lookup.
    ///
    /// Fails with [`Error::LocationUnavailable`] if no position could be
    /// obtained within `options.timeout`.
    fn current_position(&self, options: &PositionOptions) -> Result<Coordinate, Error>;
}

/// A provider that always answers with the same reading, or always
/// reports that no position is available.
#[derive(Debug, Copy, Clone)]
pub struct FixedLocationProvider {
    position: Option<Coordinate>,
}

impl FixedLocationProvider {
    pub fn new(position: Coordinate) -> Self {
        FixedLocationProvider {
            position: Some(position),
        }
    }

    pub fn unavailable() -> Self {
        FixedLocationProvider { position: None }
    }
}

impl LocationProvider for FixedLocationProvider {
    fn current_position(&self, _options: &PositionOptions) -> Result<Coordinate, Error> {
        self.position
            .ok_or_else(|| Error::LocationUnavailable("no position configured".to_string()))
    }
}

/// What to show the user: candidates ranked by distance, or the table
/// as-is when no position is known.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Listing<'a> {
    Ranked(Vec<RankedLocation<'a>>),
    Unranked(Vec<&'a Location>),
}

impl<'a> Listing<'a> {
    /// Locations in display order.
    pub fn locations(&self) -> Vec<&'a Location> {
        match self {
            Listing::Ranked(ranked) => ranked.iter().map(|r| r.location).collect(),
            Listing::Unranked(locations) => locations.clone(),
        }
    }

    pub fn is_ranked(&self) -> bool {
        matches!(self, Listing::Ranked(_))
    }
}

/// Asks `provider` for a position, falling back to `fallback` when it
/// has none.
pub fn locate_or(
    provider: &dyn LocationProvider,
    options: &PositionOptions,
    fallback: Coordinate,
) -> Coordinate {
    match provider.current_position(options) {
        Ok(position) => position,
        Err(e) => {
            warn!("{}; using fallback observer {:?}", e, fallback);
            fallback
        }
    }
}

/// Builds the drop-off listing for the provider's current position.
///
/// # Returns
/// [`Listing::Ranked`] when a position is available, otherwise
/// [`Listing::Unranked`] with every candidate in input order.
///
/// # Errors
/// [`Error::InvalidCoordinate`] if the provider returns an invalid
/// position or a candidate is invalid. Other provider errors are
/// propagated unchanged.
pub fn list_dropoffs<'a>(
    provider: &dyn LocationProvider,
    options: &PositionOptions,
    candidates: &'a [Location],
    limit: Option<usize>,
) -> Result<Listing<'a>, Error> {
    info!("Listing drop-off locations");
    match provider.current_position(options) {
        Ok(observer) => {
            debug!("observer: {:?}", observer);
            Ok(Listing::Ranked(rank(&observer, candidates, limit)?))
        }
        Err(Error::LocationUnavailable(reason)) => {
            warn!("Location unavailable ({}); showing unranked list", reason);
            Ok(Listing::Unranked(candidates.iter().collect()))
        }
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod geolocation_tests {
    use super::*;
    use crate::config::DEFAULT_NEAREST_LIMIT;
    use crate::utils::directory::{KATHMANDU_CENTER, KATHMANDU_DROPOFFS};

    #[test]
    fn test_default_options() {
        let options = PositionOptions::default();
        assert!(options.enable_high_accuracy);
        assert_eq!(options.timeout, Duration::from_secs(5));
        assert_eq!(options.maximum_age, Duration::ZERO);
    }

    #[test]
    fn test_locate_or_uses_fallback() {
        let options = PositionOptions::default();
        let here = Coordinate::new(27.7, 85.3);

        let position = locate_or(&FixedLocationProvider::new(here), &options, KATHMANDU_CENTER);
        assert_eq!(position, here);

        let position = locate_or(
            &FixedLocationProvider::unavailable(),
            &options,
            KATHMANDU_CENTER,
        );
        assert_eq!(position, KATHMANDU_CENTER);
    }

    #[test]
    fn test_list_ranked() {
        let provider = FixedLocationProvider::new(KATHMANDU_CENTER);
        let listing = list_dropoffs(
            &provider,
            &PositionOptions::default(),
            &KATHMANDU_DROPOFFS,
            Some(DEFAULT_NEAREST_LIMIT),
        )
        .unwrap();

        assert!(listing.is_ranked());
        let locations = listing.locations();
        assert_eq!(locations.len(), DEFAULT_NEAREST_LIMIT);
        assert_eq!(locations[0].name, "Pragati Recyclers");
    }

    #[test]
    fn test_list_unranked_when_unavailable() {
        let listing = list_dropoffs(
            &FixedLocationProvider::unavailable(),
            &PositionOptions::default(),
            &KATHMANDU_DROPOFFS,
            Some(DEFAULT_NEAREST_LIMIT),
        )
        .unwrap();

        assert!(!listing.is_ranked());
        let names: Vec<_> = listing.locations().iter().map(|l| l.name.clone()).collect();
        let table: Vec<_> = KATHMANDU_DROPOFFS.iter().map(|l| l.name.clone()).collect();
        assert_eq!(names, table);
    }

    #[test]
    fn test_list_rejects_invalid_position() {
        let provider = FixedLocationProvider::new(Coordinate::new(91.0, 0.0));
        let result = list_dropoffs(
            &provider,
            &PositionOptions::default(),
            &KATHMANDU_DROPOFFS,
            None,
        );
        assert_eq!(
            result,
            Err(Error::InvalidCoordinate {
                latitude: 91.0,
                longitude: 0.0
            })
        );
    }

    /// A provider that can fail in a way other than "unavailable".
    struct BrokenProvider;

    impl LocationProvider for BrokenProvider {
        fn current_position(&self, _options: &PositionOptions) -> Result<Coordinate, Error> {
            Err(Error::InvalidCoordinate {
                latitude: f64::INFINITY,
                longitude: 0.0,
            })
        }
    }

    #[test]
    fn test_list_propagates_other_errors() {
        let result = list_dropoffs(
            &BrokenProvider,
            &PositionOptions::default(),
            &KATHMANDU_DROPOFFS,
            None,
        );
        assert!(matches!(result, Err(Error::InvalidCoordinate { .. })));
    }
}
