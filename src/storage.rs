//! JSON persistence for the hotel state
//!
//! One document holds the whole aggregate:
//!
//! ```json
//! { "name": …, "next_reservation_id": …, "rooms": […], "guests": […], "reservations": […] }
//! ```
//!
//! Reservations are stored with guest/room ids and ISO-8601 dates;
//! `services_used` is a sequence of `[name, price]` pairs. Loading rebuilds
//! the room and guest registries first, then re-links every reservation by
//! id, failing on an unknown reference.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::{Guest, Hotel, Reservation, Room};
use crate::error::FrontdeskResult;

/// Top-level document record
#[derive(Debug, Serialize, Deserialize)]
struct HotelRecord {
    name: String,
    next_reservation_id: u64,
    #[serde(default)]
    rooms: Vec<Room>,
    #[serde(default)]
    guests: Vec<Guest>,
    #[serde(default)]
    reservations: Vec<Reservation>,
}

/// Serialize the full hotel state to pretty JSON
pub fn to_json(hotel: &Hotel) -> FrontdeskResult<String> {
    let record = HotelRecord {
        name: hotel.name().to_string(),
        next_reservation_id: hotel.next_reservation_id(),
        rooms: hotel.rooms().to_vec(),
        guests: hotel.guests().to_vec(),
        reservations: hotel.reservations().to_vec(),
    };
    Ok(serde_json::to_string_pretty(&record)?)
}

/// Rebuild a hotel from a JSON document, validating all references
pub fn from_json(json: &str) -> FrontdeskResult<Hotel> {
    let record: HotelRecord = serde_json::from_str(json)?;
    Hotel::from_parts(
        record.name,
        record.next_reservation_id,
        record.rooms,
        record.guests,
        record.reservations,
    )
}

/// Write the hotel state to a file, creating parent directories as needed
pub fn save(hotel: &Hotel, path: &Path) -> FrontdeskResult<()> {
    let json = to_json(hotel)?;
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, json)?;
    Ok(())
}

/// Read the hotel state back from a file
pub fn load(path: &Path) -> FrontdeskResult<Hotel> {
    let json = fs::read_to_string(path)?;
    from_json(&json)
}
