//! Reservation entity and service charges

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A chargeable extra recorded against a reservation
///
/// Serialized as a `[name, price]` pair on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "(String, f64)", into = "(String, f64)")]
pub struct ServiceCharge {
    pub name: String,
    pub price: f64,
}

impl ServiceCharge {
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }
}

impl From<(String, f64)> for ServiceCharge {
    fn from((name, price): (String, f64)) -> Self {
        Self { name, price }
    }
}

impl From<ServiceCharge> for (String, f64) {
    fn from(charge: ServiceCharge) -> Self {
        (charge.name, charge.price)
    }
}

/// A stay booked for one guest in one room
///
/// Dates form a half-open interval `[check_in_date, check_out_date)`:
/// the check-out day is not a billed night and a new stay may start on it.
/// Lifecycle is strictly linear: created, checked in, checked out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reservation {
    /// Sequential id of the form "RES-{n}"
    pub reservation_id: String,

    /// Id of the booking guest; resolved through the aggregate
    pub guest_id: String,

    /// Number of the booked room; resolved through the aggregate
    pub room_number: String,

    pub check_in_date: NaiveDate,

    pub check_out_date: NaiveDate,

    #[serde(default)]
    pub is_checked_in: bool,

    #[serde(default)]
    pub is_checked_out: bool,

    /// Extras in the order they were added
    #[serde(default)]
    pub services_used: Vec<ServiceCharge>,

    /// Room charges plus service charges; kept current on every mutation
    pub total_charges: f64,
}

impl Reservation {
    /// Whole nights covered by the stay
    pub fn nights(&self) -> i64 {
        (self.check_out_date - self.check_in_date).num_days()
    }

    /// Sum of all service charges
    pub fn service_total(&self) -> f64 {
        self.services_used.iter().map(|s| s.price).sum()
    }

    /// Full bill for a given nightly rate: room charges plus services
    pub fn bill_total(&self, price_per_night: f64) -> f64 {
        price_per_night * self.nights() as f64 + self.service_total()
    }

    /// True when `[check_in, check_out)` shares at least one day with this stay
    pub fn overlaps(&self, check_in: NaiveDate, check_out: NaiveDate) -> bool {
        check_in < self.check_out_date && check_out > self.check_in_date
    }
}

impl fmt::Display for Reservation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Reservation {}: guest {} in Room {}\nCheck-in: {}, Check-out: {}\nStatus: {}, {}\nTotal Charges: ${:.2}",
            self.reservation_id,
            self.guest_id,
            self.room_number,
            self.check_in_date,
            self.check_out_date,
            if self.is_checked_in {
                "Checked in"
            } else {
                "Not checked in"
            },
            if self.is_checked_out {
                "Checked out"
            } else {
                "Not checked out"
            },
            self.total_charges
        )
    }
}
