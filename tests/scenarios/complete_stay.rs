//! Scenario: A Complete Stay
//!
//! Journey: a clerk books a guest, checks them in, records extras, checks
//! them out, and persists the day's state.
//!
//! Steps:
//! 1. Register room 101 at $100/night and guest G001
//! 2. Reserve 101 for two nights (Jan 1 → Jan 3)
//! 3. Check the guest in - room becomes occupied
//! 4. Add a $15 breakfast
//! 5. Check the guest out - bill settles at $215 and the room frees up
//! 6. Save to disk, load it back, confirm the state survives

use chrono::NaiveDate;
use frontdesk::{storage, Guest, Hotel, Room};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn scenario_complete_stay_with_persistence() {
    // Step 1: inventory
    let mut hotel = Hotel::new("Grand Hotel");
    hotel.add_room(Room::new("101", "Single", 100.0)).unwrap();
    hotel
        .add_guest(Guest::new("G001", "John Doe", "john@example.com", "555-0101"))
        .unwrap();

    // Step 2: two nights at $100
    let reservation = hotel
        .make_reservation("G001", "101", date(2024, 1, 1), date(2024, 1, 3))
        .unwrap();
    assert_eq!(reservation.reservation_id, "RES-1");
    assert!((reservation.total_charges - 200.0).abs() < f64::EPSILON);

    // Step 3: check in
    hotel.check_in("RES-1").unwrap();
    assert!(hotel.room("101").unwrap().is_occupied);

    // Step 4: breakfast
    hotel.add_service("RES-1", "Breakfast", 15.0).unwrap();
    assert!((hotel.reservation("RES-1").unwrap().total_charges - 215.0).abs() < f64::EPSILON);

    // Step 5: check out settles the recomputed bill
    let reservation = hotel.check_out("RES-1").unwrap();
    assert!((reservation.total_charges - 215.0).abs() < f64::EPSILON);
    assert!(!hotel.room("101").unwrap().is_occupied);

    // Step 6: persistence round-trip
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("hotel_data.json");
    storage::save(&hotel, &path).unwrap();

    let loaded = storage::load(&path).unwrap();
    assert_eq!(loaded, hotel);

    let reloaded = loaded.reservation("RES-1").unwrap();
    assert!(reloaded.is_checked_out);
    assert_eq!(reloaded.services_used.len(), 1);
    assert_eq!(loaded.guest(&reloaded.guest_id).unwrap().name, "John Doe");
}

#[test]
fn scenario_next_guest_books_the_freed_dates() {
    // After a stay closes, the room's future dates are bookable but the
    // historical interval stays blocked.
    let mut hotel = Hotel::new("Grand Hotel");
    hotel.add_room(Room::new("101", "Single", 100.0)).unwrap();
    hotel
        .add_guest(Guest::new("G001", "John Doe", "john@example.com", "555-0101"))
        .unwrap();
    hotel
        .add_guest(Guest::new("G002", "Jane Smith", "jane@example.com", "555-0102"))
        .unwrap();

    hotel
        .make_reservation("G001", "101", date(2024, 1, 1), date(2024, 1, 3))
        .unwrap();
    hotel.check_in("RES-1").unwrap();
    hotel.check_out("RES-1").unwrap();

    // Historical dates remain taken.
    assert!(hotel
        .make_reservation("G002", "101", date(2024, 1, 2), date(2024, 1, 4))
        .is_err());

    // The following week is free.
    let reservation = hotel
        .make_reservation("G002", "101", date(2024, 1, 8), date(2024, 1, 10))
        .unwrap();
    assert_eq!(reservation.reservation_id, "RES-2");
}
