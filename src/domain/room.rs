//! Room entity

use std::fmt;

use serde::{Deserialize, Serialize};

/// A bookable room, keyed by its room number
///
/// `is_occupied` is only flipped by check-in/check-out on the aggregate;
/// while set it hard-blocks new reservations for the room.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    /// Unique room number (e.g. "101")
    pub room_number: String,

    /// Free-form category (e.g. "Single", "Suite")
    pub room_type: String,

    /// Nightly rate; expected non-negative
    pub price_per_night: f64,

    /// Whether a checked-in reservation currently holds the room
    #[serde(default)]
    pub is_occupied: bool,
}

impl Room {
    /// Create a vacant room
    pub fn new(
        room_number: impl Into<String>,
        room_type: impl Into<String>,
        price_per_night: f64,
    ) -> Self {
        Self {
            room_number: room_number.into(),
            room_type: room_type.into(),
            price_per_night,
            is_occupied: false,
        }
    }
}

impl fmt::Display for Room {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Room {} - Type: {}, Price: ${:.2}/night, Status: {}",
            self.room_number,
            self.room_type,
            self.price_per_night,
            if self.is_occupied {
                "Occupied"
            } else {
                "Available"
            }
        )
    }
}
