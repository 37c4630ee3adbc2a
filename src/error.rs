//! Error types for frontdesk
//!
//! One `thiserror` enum for the whole library. Every variant is recoverable:
//! a returned error means the operation was a no-op and the caller may retry
//! with corrected input.

use std::path::PathBuf;

use chrono::NaiveDate;
use thiserror::Error;

/// Result type alias for frontdesk operations
pub type FrontdeskResult<T> = Result<T, FrontdeskError>;

/// Main error type for frontdesk operations
#[derive(Error, Debug)]
pub enum FrontdeskError {
    /// Room number already registered
    #[error("room {number} already exists")]
    DuplicateRoom { number: String },

    /// Guest id already registered
    #[error("guest {id} already exists")]
    DuplicateGuest { id: String },

    /// Room number not in the registry
    #[error("room {number} not found")]
    RoomNotFound { number: String },

    /// Guest id not in the registry
    #[error("guest {id} not found")]
    GuestNotFound { id: String },

    /// Reservation id not in the registry
    #[error("reservation {id} not found")]
    ReservationNotFound { id: String },

    /// Room is occupied right now; blocks new reservations regardless of dates
    #[error("room {number} is currently occupied")]
    RoomOccupied { number: String },

    /// Requested dates overlap an existing reservation on the same room
    #[error("room {number} is not available for the selected dates")]
    RoomUnavailable { number: String },

    /// Stay must cover at least one night
    #[error("check-out {check_out} must be after check-in {check_in}")]
    InvalidStayRange {
        check_in: NaiveDate,
        check_out: NaiveDate,
    },

    /// Check-in called twice
    #[error("reservation {id} is already checked in")]
    AlreadyCheckedIn { id: String },

    /// Check-out called before check-in
    #[error("reservation {id} is not checked in")]
    NotCheckedIn { id: String },

    /// Check-out called twice
    #[error("reservation {id} is already checked out")]
    AlreadyCheckedOut { id: String },

    /// Invalid config file
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
