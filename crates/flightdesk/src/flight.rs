//! Core flight record type for flightdesk.
//!
//! A [`Flight`] is either *transient* (built by a caller, no identity yet) or
//! *persisted* (returned by a repository, carrying the identity it assigned).

use serde::{Deserialize, Serialize};

/// A single scheduled flight.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Flight {
    /// Identity assigned by the repository. `None` until the flight is persisted.
    #[serde(rename = "flight_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// City the flight departs from.
    pub departure_city: String,

    /// City the flight arrives at.
    pub arrival_city: String,
}

impl Flight {
    /// Create a new transient flight.
    #[must_use]
    pub fn new(departure_city: impl Into<String>, arrival_city: impl Into<String>) -> Self {
        Self {
            id: None,
            departure_city: departure_city.into(),
            arrival_city: arrival_city.into(),
        }
    }

    /// Return this flight stamped with the given identity.
    #[must_use]
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    /// Whether this flight has been assigned an identity by a repository.
    #[must_use]
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }

    /// The `(departure, arrival)` pair.
    #[must_use]
    pub fn route(&self) -> (&str, &str) {
        (&self.departure_city, &self.arrival_city)
    }
}

impl std::fmt::Display for Flight {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(id) = self.id {
            write!(f, "#{id} ")?;
        }
        write!(f, "{} -> {}", self.departure_city, self.arrival_city)
    }
}
