//! Snapshot of the persisted state document.

use chrono::NaiveDate;
use insta::assert_snapshot;

use frontdesk::{storage, Guest, Hotel, Room};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Reference state: one room, one guest, one reservation with a service.
fn reference_hotel() -> Hotel {
    let mut hotel = Hotel::new("Grand Hotel");
    hotel.add_room(Room::new("101", "Single", 100.0)).unwrap();
    hotel
        .add_guest(Guest::new("G001", "John Doe", "john@example.com", "555-0101"))
        .unwrap();
    hotel
        .make_reservation("G001", "101", date(2024, 1, 1), date(2024, 1, 3))
        .unwrap();
    hotel.add_service("RES-1", "Breakfast", 15.0).unwrap();
    hotel
}

#[test]
fn golden_state_document() {
    let json = storage::to_json(&reference_hotel()).unwrap();

    assert_snapshot!(json, @r#"
{
  "name": "Grand Hotel",
  "next_reservation_id": 2,
  "rooms": [
    {
      "room_number": "101",
      "room_type": "Single",
      "price_per_night": 100.0,
      "is_occupied": false
    }
  ],
  "guests": [
    {
      "guest_id": "G001",
      "name": "John Doe",
      "email": "john@example.com",
      "phone": "555-0101"
    }
  ],
  "reservations": [
    {
      "reservation_id": "RES-1",
      "guest_id": "G001",
      "room_number": "101",
      "check_in_date": "2024-01-01",
      "check_out_date": "2024-01-03",
      "is_checked_in": false,
      "is_checked_out": false,
      "services_used": [
        [
          "Breakfast",
          15.0
        ]
      ],
      "total_charges": 215.0
    }
  ]
}
"#);
}

#[test]
fn golden_document_loads_back() {
    let hotel = reference_hotel();
    let json = storage::to_json(&hotel).unwrap();
    assert_eq!(storage::from_json(&json).unwrap(), hotel);
}
