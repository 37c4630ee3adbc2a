//! Guest entity

use std::fmt;

use serde::{Deserialize, Serialize};

/// A registered guest, keyed by guest id; immutable once added
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Guest {
    /// Unique guest id (e.g. "G001")
    pub guest_id: String,

    pub name: String,

    pub email: String,

    pub phone: String,
}

impl Guest {
    pub fn new(
        guest_id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            guest_id: guest_id.into(),
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
        }
    }
}

impl fmt::Display for Guest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Guest {}: {}, Email: {}, Phone: {}",
            self.guest_id, self.name, self.email, self.phone
        )
    }
}
