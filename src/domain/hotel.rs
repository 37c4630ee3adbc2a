//! The hotel aggregate
//!
//! Owns every room, guest and reservation and is the only place that mutates
//! them. Operations validate completely before touching state: a returned
//! error means nothing changed, including the reservation-id counter.

use chrono::NaiveDate;

use crate::domain::{Guest, Reservation, Room, ServiceCharge};
use crate::error::{FrontdeskError, FrontdeskResult};

/// In-memory hotel state: room/guest registries plus the reservation book
///
/// Registries keep insertion order; lookups are linear, which is fine at
/// front-desk scale.
#[derive(Debug, Clone, PartialEq)]
pub struct Hotel {
    name: String,
    rooms: Vec<Room>,
    guests: Vec<Guest>,
    reservations: Vec<Reservation>,
    next_reservation_id: u64,
}

impl Hotel {
    /// Create an empty hotel; reservation ids start at "RES-1"
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rooms: Vec::new(),
            guests: Vec::new(),
            reservations: Vec::new(),
            next_reservation_id: 1,
        }
    }

    /// Rebuild a hotel from persisted parts, re-linking reservations
    ///
    /// Rooms and guests are registered first (rejecting duplicates exactly
    /// like `add_room`/`add_guest`), then every reservation's guest and room
    /// references are resolved; an unknown reference fails the whole rebuild.
    pub fn from_parts(
        name: impl Into<String>,
        next_reservation_id: u64,
        rooms: Vec<Room>,
        guests: Vec<Guest>,
        reservations: Vec<Reservation>,
    ) -> FrontdeskResult<Self> {
        let mut hotel = Self::new(name);
        hotel.next_reservation_id = next_reservation_id;

        for room in rooms {
            hotel.add_room(room)?;
        }
        for guest in guests {
            hotel.add_guest(guest)?;
        }
        for reservation in reservations {
            if hotel.guest(&reservation.guest_id).is_none() {
                return Err(FrontdeskError::GuestNotFound {
                    id: reservation.guest_id,
                });
            }
            if hotel.room(&reservation.room_number).is_none() {
                return Err(FrontdeskError::RoomNotFound {
                    number: reservation.room_number,
                });
            }
            hotel.reservations.push(reservation);
        }

        Ok(hotel)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rooms in registration order
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// Guests in registration order
    pub fn guests(&self) -> &[Guest] {
        &self.guests
    }

    /// Reservations in creation order
    pub fn reservations(&self) -> &[Reservation] {
        &self.reservations
    }

    /// Counter value the next reservation id will be minted from
    pub fn next_reservation_id(&self) -> u64 {
        self.next_reservation_id
    }

    pub fn room(&self, number: &str) -> Option<&Room> {
        self.rooms.iter().find(|r| r.room_number == number)
    }

    pub fn guest(&self, id: &str) -> Option<&Guest> {
        self.guests.iter().find(|g| g.guest_id == id)
    }

    pub fn reservation(&self, id: &str) -> Option<&Reservation> {
        self.reservations.iter().find(|r| r.reservation_id == id)
    }

    /// Register a room; the number must be unused
    pub fn add_room(&mut self, room: Room) -> FrontdeskResult<()> {
        if self.room(&room.room_number).is_some() {
            return Err(FrontdeskError::DuplicateRoom {
                number: room.room_number,
            });
        }
        self.rooms.push(room);
        Ok(())
    }

    /// Register a guest; the id must be unused
    pub fn add_guest(&mut self, guest: Guest) -> FrontdeskResult<()> {
        if self.guest(&guest.guest_id).is_some() {
            return Err(FrontdeskError::DuplicateGuest { id: guest.guest_id });
        }
        self.guests.push(guest);
        Ok(())
    }

    /// Book a room for a guest over `[check_in, check_out)`
    ///
    /// The stay must cover at least one night. An occupied room blocks any
    /// new reservation regardless of the requested dates, and the dates must
    /// not overlap an existing reservation on the same room. Initial charges
    /// are the room rate times the number of nights.
    pub fn make_reservation(
        &mut self,
        guest_id: &str,
        room_number: &str,
        check_in: NaiveDate,
        check_out: NaiveDate,
    ) -> FrontdeskResult<&Reservation> {
        if self.guest(guest_id).is_none() {
            return Err(FrontdeskError::GuestNotFound {
                id: guest_id.to_string(),
            });
        }
        let room = self
            .room(room_number)
            .ok_or_else(|| FrontdeskError::RoomNotFound {
                number: room_number.to_string(),
            })?;

        if check_out <= check_in {
            return Err(FrontdeskError::InvalidStayRange {
                check_in,
                check_out,
            });
        }
        if room.is_occupied {
            return Err(FrontdeskError::RoomOccupied {
                number: room_number.to_string(),
            });
        }
        if self
            .reservations
            .iter()
            .any(|r| r.room_number == room_number && r.overlaps(check_in, check_out))
        {
            return Err(FrontdeskError::RoomUnavailable {
                number: room_number.to_string(),
            });
        }

        let nights = (check_out - check_in).num_days();
        let total_charges = room.price_per_night * nights as f64;

        let reservation_id = format!("RES-{}", self.next_reservation_id);
        self.next_reservation_id += 1;

        let idx = self.reservations.len();
        self.reservations.push(Reservation {
            reservation_id,
            guest_id: guest_id.to_string(),
            room_number: room_number.to_string(),
            check_in_date: check_in,
            check_out_date: check_out,
            is_checked_in: false,
            is_checked_out: false,
            services_used: Vec::new(),
            total_charges,
        });
        Ok(&self.reservations[idx])
    }

    /// Check a reservation in and mark its room occupied
    pub fn check_in(&mut self, reservation_id: &str) -> FrontdeskResult<()> {
        let idx = self.reservation_index(reservation_id)?;
        if self.reservations[idx].is_checked_in {
            return Err(FrontdeskError::AlreadyCheckedIn {
                id: reservation_id.to_string(),
            });
        }
        let room_idx = self.room_index(&self.reservations[idx].room_number)?;

        self.reservations[idx].is_checked_in = true;
        self.rooms[room_idx].is_occupied = true;
        Ok(())
    }

    /// Check a reservation out, free its room and settle the bill
    ///
    /// Recomputes `total_charges` from the room rate and the accumulated
    /// services, and returns the reservation so callers can present it.
    pub fn check_out(&mut self, reservation_id: &str) -> FrontdeskResult<&Reservation> {
        let idx = self.reservation_index(reservation_id)?;
        if !self.reservations[idx].is_checked_in {
            return Err(FrontdeskError::NotCheckedIn {
                id: reservation_id.to_string(),
            });
        }
        if self.reservations[idx].is_checked_out {
            return Err(FrontdeskError::AlreadyCheckedOut {
                id: reservation_id.to_string(),
            });
        }
        let room_idx = self.room_index(&self.reservations[idx].room_number)?;
        let rate = self.rooms[room_idx].price_per_night;

        let reservation = &mut self.reservations[idx];
        reservation.is_checked_out = true;
        reservation.total_charges = reservation.bill_total(rate);
        self.rooms[room_idx].is_occupied = false;
        Ok(&self.reservations[idx])
    }

    /// Append a service charge to a reservation
    ///
    /// Allowed in any reservation state, matching the historical behavior;
    /// the charge is added to `total_charges` immediately.
    pub fn add_service(
        &mut self,
        reservation_id: &str,
        name: impl Into<String>,
        price: f64,
    ) -> FrontdeskResult<()> {
        let idx = self.reservation_index(reservation_id)?;
        let reservation = &mut self.reservations[idx];
        reservation.services_used.push(ServiceCharge::new(name, price));
        reservation.total_charges += price;
        Ok(())
    }

    /// Rooms free over `[check_in, check_out)`, in registration order
    ///
    /// A room qualifies when it is not occupied and no reservation on it
    /// overlaps the requested interval.
    pub fn available_rooms(&self, check_in: NaiveDate, check_out: NaiveDate) -> Vec<&Room> {
        self.rooms
            .iter()
            .filter(|room| {
                !room.is_occupied
                    && !self.reservations.iter().any(|r| {
                        r.room_number == room.room_number && r.overlaps(check_in, check_out)
                    })
            })
            .collect()
    }

    fn reservation_index(&self, id: &str) -> FrontdeskResult<usize> {
        self.reservations
            .iter()
            .position(|r| r.reservation_id == id)
            .ok_or_else(|| FrontdeskError::ReservationNotFound { id: id.to_string() })
    }

    fn room_index(&self, number: &str) -> FrontdeskResult<usize> {
        self.rooms
            .iter()
            .position(|r| r.room_number == number)
            .ok_or_else(|| FrontdeskError::RoomNotFound {
                number: number.to_string(),
            })
    }
}
