//! In-memory flight repository.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use crate::error::{Error, Result};
use crate::flight::Flight;

use super::FlightRepository;

/// A [`FlightRepository`] that keeps flights in process memory.
///
/// Identities start at 1 and increase monotonically. Useful for tests and
/// for running the service without a database.
#[derive(Debug, Default)]
pub struct InMemoryRepository {
    inner: Mutex<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    last_id: i64,
    flights: BTreeMap<i64, Flight>,
}

impl Inner {
    fn next_id(&self) -> Result<i64> {
        self.last_id
            .checked_add(1)
            .ok_or_else(|| Error::internal("flight identity space exhausted"))
    }
}

impl InMemoryRepository {
    /// Create an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository seeded with already-persisted flights.
    ///
    /// Seeded flights keep their identities; flights without one are assigned
    /// the next free identity. New inserts continue after the highest id.
    ///
    /// # Errors
    ///
    /// Returns an error if assigning an identity would overflow `i64`.
    pub fn with_flights(flights: impl IntoIterator<Item = Flight>) -> Result<Self> {
        let mut inner = Inner::default();
        for flight in flights {
            let id = match flight.id {
                Some(id) => id,
                None => inner.next_id()?,
            };
            inner.last_id = inner.last_id.max(id);
            inner.flights.insert(id, flight.with_id(id));
        }
        Ok(Self {
            inner: Mutex::new(inner),
        })
    }

    /// Number of stored flights.
    ///
    /// # Errors
    ///
    /// Returns an error if the internal lock is poisoned.
    pub fn len(&self) -> Result<usize> {
        Ok(self.lock()?.flights.len())
    }

    /// Whether no flights are stored.
    ///
    /// # Errors
    ///
    /// Returns an error if the internal lock is poisoned.
    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }

    fn lock(&self) -> Result<MutexGuard<'_, Inner>> {
        self.inner
            .lock()
            .map_err(|_| Error::internal("in-memory repository lock poisoned"))
    }
}

impl FlightRepository for InMemoryRepository {
    fn insert_flight(&self, flight: &Flight) -> Result<Flight> {
        let mut inner = self.lock()?;
        let id = inner.next_id()?;
        inner.last_id = id;
        let persisted = flight.clone().with_id(id);
        inner.flights.insert(id, persisted.clone());
        Ok(persisted)
    }

    fn get_flight_by_id(&self, id: i64) -> Result<Option<Flight>> {
        Ok(self.lock()?.flights.get(&id).cloned())
    }

    fn update_flight(&self, id: i64, flight: &Flight) -> Result<()> {
        if let Some(existing) = self.lock()?.flights.get_mut(&id) {
            existing.departure_city.clone_from(&flight.departure_city);
            existing.arrival_city.clone_from(&flight.arrival_city);
        }
        Ok(())
    }

    fn get_all_flights(&self) -> Result<Vec<Flight>> {
        Ok(self.lock()?.flights.values().cloned().collect())
    }

    fn get_all_flights_from_city_to_city(
        &self,
        departure_city: &str,
        arrival_city: &str,
    ) -> Result<Vec<Flight>> {
        Ok(self
            .lock()?
            .flights
            .values()
            .filter(|f| f.departure_city == departure_city && f.arrival_city == arrival_city)
            .cloned()
            .collect())
    }
}
