//! Domain model: the entities and the aggregate that owns them
//!
//! `Hotel` is the aggregate root; `Room`, `Guest` and `Reservation` never
//! leave its ownership. Reservations reference rooms and guests by id.

pub mod guest;
pub mod hotel;
pub mod reservation;
pub mod room;

pub use guest::Guest;
pub use hotel::Hotel;
pub use reservation::{Reservation, ServiceCharge};
pub use room::Room;
