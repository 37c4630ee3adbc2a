//! Property tests for the reservation engine.

use chrono::{Days, NaiveDate};
use proptest::prelude::*;

use frontdesk::{Guest, Hotel, Room};

const ROOMS: [&str; 3] = ["101", "102", "103"];

fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
}

/// A booking attempt: room index, start offset in days, stay length in nights
fn attempt_strategy() -> impl Strategy<Value = (usize, u64, u64)> {
    (0..ROOMS.len(), 0..30u64, 1..5u64)
}

fn hotel_with_rooms() -> Hotel {
    let mut hotel = Hotel::new("Property Test Hotel");
    for number in ROOMS {
        hotel.add_room(Room::new(number, "Single", 100.0)).unwrap();
    }
    hotel
        .add_guest(Guest::new("G1", "Pat", "pat@example.com", "555-0000"))
        .unwrap();
    hotel
}

fn stay_dates(offset: u64, nights: u64) -> (NaiveDate, NaiveDate) {
    let check_in = base_date().checked_add_days(Days::new(offset)).unwrap();
    let check_out = check_in.checked_add_days(Days::new(nights)).unwrap();
    (check_in, check_out)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: after any sequence of booking attempts, accepted
    /// reservations on the same room are pairwise non-overlapping.
    #[test]
    fn property_accepted_reservations_never_overlap(
        attempts in proptest::collection::vec(attempt_strategy(), 1..40)
    ) {
        let mut hotel = hotel_with_rooms();
        for (room_idx, offset, nights) in attempts {
            let (check_in, check_out) = stay_dates(offset, nights);
            let _ = hotel.make_reservation("G1", ROOMS[room_idx], check_in, check_out);
        }

        let reservations = hotel.reservations();
        for (i, a) in reservations.iter().enumerate() {
            for b in &reservations[i + 1..] {
                if a.room_number == b.room_number {
                    let disjoint = a.check_out_date <= b.check_in_date
                        || b.check_out_date <= a.check_in_date;
                    prop_assert!(
                        disjoint,
                        "overlap between {} and {} on room {}",
                        a.reservation_id,
                        b.reservation_id,
                        a.room_number
                    );
                }
            }
        }
    }

    /// PROPERTY: a rejected booking leaves the aggregate untouched,
    /// including the id counter.
    #[test]
    fn property_failed_bookings_mutate_nothing(
        attempts in proptest::collection::vec(attempt_strategy(), 1..40)
    ) {
        let mut hotel = hotel_with_rooms();
        for (room_idx, offset, nights) in attempts {
            let (check_in, check_out) = stay_dates(offset, nights);
            let before = hotel.clone();
            if hotel
                .make_reservation("G1", ROOMS[room_idx], check_in, check_out)
                .is_err()
            {
                prop_assert_eq!(&hotel, &before);
            }
        }
    }

    /// PROPERTY: accepted reservations carry gapless sequential ids in
    /// creation order.
    #[test]
    fn property_ids_are_sequential(
        attempts in proptest::collection::vec(attempt_strategy(), 1..40)
    ) {
        let mut hotel = hotel_with_rooms();
        for (room_idx, offset, nights) in attempts {
            let (check_in, check_out) = stay_dates(offset, nights);
            let _ = hotel.make_reservation("G1", ROOMS[room_idx], check_in, check_out);
        }

        for (i, reservation) in hotel.reservations().iter().enumerate() {
            prop_assert_eq!(&reservation.reservation_id, &format!("RES-{}", i + 1));
        }
        prop_assert_eq!(
            hotel.next_reservation_id(),
            hotel.reservations().len() as u64 + 1
        );
    }

    /// PROPERTY: every room reported available for an interval can actually
    /// be booked for that interval.
    #[test]
    fn property_available_rooms_are_bookable(
        attempts in proptest::collection::vec(attempt_strategy(), 1..20),
        query in attempt_strategy()
    ) {
        let mut hotel = hotel_with_rooms();
        for (room_idx, offset, nights) in attempts {
            let (check_in, check_out) = stay_dates(offset, nights);
            let _ = hotel.make_reservation("G1", ROOMS[room_idx], check_in, check_out);
        }

        let (_, offset, nights) = query;
        let (check_in, check_out) = stay_dates(offset, nights);
        let available: Vec<String> = hotel
            .available_rooms(check_in, check_out)
            .iter()
            .map(|r| r.room_number.clone())
            .collect();

        for number in available {
            prop_assert!(
                hotel
                    .make_reservation("G1", &number, check_in, check_out)
                    .is_ok(),
                "room {} was reported available for {}..{}",
                number,
                check_in,
                check_out
            );
        }
    }
}
