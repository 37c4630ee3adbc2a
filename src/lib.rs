//! Frontdesk - hotel front desk management
//!
//! Frontdesk keeps a hotel's rooms, guests and reservations in a single
//! in-memory aggregate, enforces date-range availability when booking, and
//! persists the whole state as one JSON document.

pub mod config;
pub mod domain;
pub mod error;
pub mod storage;

// Re-exports for convenience
pub use config::{Config, ConfigWarning};
pub use domain::{Guest, Hotel, Reservation, Room, ServiceCharge};
pub use error::{FrontdeskError, FrontdeskResult};
