//! Static table of e-waste drop-off points in the Kathmandu Valley.

use chrono::Utc;
use chrono_tz::Tz;
use once_cell::sync::Lazy;

use crate::types::coordinate::Coordinate;
use crate::types::hours::OpeningHours;
use crate::types::location::Location;
use crate::types::status::Status;

/// Kathmandu city center. Used as the observer when no position is
/// available.
pub static KATHMANDU_CENTER: Coordinate = Coordinate::new(27.7172, 85.3240);

/// Local timezone of every location in [`KATHMANDU_DROPOFFS`].
pub const KATHMANDU_TZ: Tz = chrono_tz::Asia::Kathmandu;

/// (uid, name, latitude, longitude, description, address, contact, hours)
type Row = (
    &'static str,
    &'static str,
    f64,
    f64,
    &'static str,
    &'static str,
    &'static str,
    &'static str,
);

const ROWS: [Row; 8] = [
    (
        "ktm:doko-recyclers",
        "Doko Recyclers",
        27.6818,
        85.3147,
        "Professional e-waste recycling company offering door-to-door collection services.",
        "Jhamsikhel, Lalitpur-3",
        "+977-9801-969696",
        "Sun-Fri: 9:00 AM - 5:00 PM",
    ),
    (
        "ktm:blue-waste-to-value",
        "Blue Waste to Value",
        27.6785,
        85.3178,
        "Integrated waste management company specializing in e-waste recycling.",
        "Chakupat, Lalitpur",
        "+977-1-5260348",
        "Sun-Fri: 8:00 AM - 6:00 PM",
    ),
    (
        "ktm:wmrmc",
        "Waste Management Resource Mobilization Center",
        27.7041,
        85.3145,
        "Government facility for electronic waste collection and processing.",
        "Pulchowk, Lalitpur",
        "+977-1-5545256",
        "Sun-Fri: 10:00 AM - 4:00 PM",
    ),
    (
        "ktm:recycler-sathi",
        "Recycler Sathi",
        27.7149,
        85.3455,
        "Community-based e-waste collection and recycling center.",
        "Baneshwor, Kathmandu",
        "+977-9841-234567",
        "Sun-Fri: 9:00 AM - 4:00 PM",
    ),
    (
        "ktm:npcemc",
        "Nepal Pollution Control & Environment Management Center",
        27.6929,
        85.3212,
        "Environmental management and e-waste processing facility.",
        "Kupondole, Lalitpur",
        "+977-1-5551930",
        "Sun-Fri: 9:30 AM - 5:30 PM",
    ),
    (
        "ktm:pragati-recyclers",
        "Pragati Recyclers",
        27.7216,
        85.3395,
        "Specialized in computer and electronic waste recycling.",
        "Putalisadak, Kathmandu",
        "+977-1-4168273",
        "Sun-Fri: 10:00 AM - 5:00 PM",
    ),
    (
        "ktm:green-city-recyclers",
        "Green City Recyclers",
        27.7067,
        85.3476,
        "Eco-friendly recycling center accepting all types of electronic waste.",
        "Thapagaun, Kathmandu",
        "+977-9860-123456",
        "Sun-Fri: 8:30 AM - 5:30 PM",
    ),
    (
        "ktm:sustainable-recycling-hub",
        "Sustainable Recycling Hub",
        27.6751,
        85.3052,
        "Modern facility focused on sustainable e-waste management.",
        "Ekantakuna, Lalitpur",
        "+977-1-5548762",
        "Sun-Fri: 9:00 AM - 6:00 PM",
    ),
];

/// The drop-off table, in the order it is listed to users.
///
/// Built once on first access.
pub static KATHMANDU_DROPOFFS: Lazy<Vec<Location>> =
    Lazy::new(|| ROWS.iter().map(location_from_row).collect());

/// A row whose hours fail to parse keeps its place in the table but is
/// marked [`Status::Closed`], so it never shows as open around the clock.
fn location_from_row(row: &Row) -> Location {
    let &(uid, name, latitude, longitude, description, address, contact, hours) = row;
    let (hours, status) = match hours.parse::<OpeningHours>() {
        Ok(hours) => (Some(hours), Status::Open),
        Err(e) => {
            error!("Closing {}: {}", uid, e);
            (None, Status::Closed)
        }
    };
    Location {
        uid: uid.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        address: address.to_string(),
        contact: contact.to_string(),
        hours,
        coordinate: Coordinate::new(latitude, longitude),
        status,
    }
}

/// Returns the status of `location` right now, in Kathmandu time.
pub fn status_now(location: &Location) -> Status {
    location.status_at(&Utc::now().with_timezone(&KATHMANDU_TZ))
}

/// Finds a drop-off point by uid.
pub fn get_location_by_id(uid: &str) -> Option<&'static Location> {
    debug!("uid: {}", uid);
    KATHMANDU_DROPOFFS.iter().find(|location| location.uid == uid)
}
