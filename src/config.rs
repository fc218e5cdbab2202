//! Compile-time settings for ranking and geolocation.

/// Mean Earth radius used by the haversine formula.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// How long a location provider may take before giving up.
pub const GEOLOCATION_TIMEOUT_MS: u64 = 5000;

/// Maximum age of a cached position. Zero forces a fresh reading.
pub const GEOLOCATION_MAXIMUM_AGE_MS: u64 = 0;

/// Decimal places used when a distance is shown to a user.
pub const DISTANCE_DECIMALS: usize = 2;

/// Default size of a "nearest K" list.
pub const DEFAULT_NEAREST_LIMIT: usize = 3;
