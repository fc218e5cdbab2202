//! Drop-off Proximity Library.
//! Ranks e-waste drop-off locations by distance from an observer.

#[macro_use]
extern crate log;

pub mod config;
pub mod error;

/// Data types shared by the ranking utilities.
pub mod types {
    pub mod coordinate;
    pub mod hours;
    pub mod location;
    pub mod ranked;
    pub mod status;
}

/// Ranking, geolocation and lookup helpers.
pub mod utils {
    pub mod directory;
    pub mod generator;
    pub mod geolocation;
    pub mod haversine;
    pub mod ranker;
}

pub use error::Error;

pub use types::coordinate::Coordinate;
pub use types::location::Location;
pub use types::ranked::RankedLocation;
pub use types::status::Status;
pub use utils::ranker::{nearest, rank, within_radius};
