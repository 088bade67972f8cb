//! Persistence capability consumed by the service layer.
//!
//! [`FlightRepository`] is the seam between [`FlightService`](crate::FlightService)
//! and whatever stores flights. The crate ships two implementations:
//! [`Storage`](crate::Storage) (`SQLite`, the default) and [`InMemoryRepository`].

pub mod memory;

pub use memory::InMemoryRepository;

use crate::error::Result;
use crate::flight::Flight;

/// Data access for flight records.
///
/// Implementations own identity assignment: any `id` carried by the flight
/// passed to [`insert_flight`](Self::insert_flight) or
/// [`update_flight`](Self::update_flight) is ignored.
pub trait FlightRepository {
    /// Persist a transient flight and return it with its newly assigned identity.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying store rejects the write.
    fn insert_flight(&self, flight: &Flight) -> Result<Flight>;

    /// Look up a flight by identity. `Ok(None)` when no such flight exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying store cannot be read.
    fn get_flight_by_id(&self, id: i64) -> Result<Option<Flight>>;

    /// Replace the departure and arrival of the flight with the given identity.
    ///
    /// Updating an identity that does not exist is a no-op.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying store rejects the write.
    fn update_flight(&self, id: i64, flight: &Flight) -> Result<()>;

    /// All flights, ordered by identity.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying store cannot be read.
    fn get_all_flights(&self) -> Result<Vec<Flight>>;

    /// Flights whose departure and arrival cities match exactly, ordered by identity.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying store cannot be read.
    fn get_all_flights_from_city_to_city(
        &self,
        departure_city: &str,
        arrival_city: &str,
    ) -> Result<Vec<Flight>>;
}

impl<R: FlightRepository + ?Sized> FlightRepository for Box<R> {
    fn insert_flight(&self, flight: &Flight) -> Result<Flight> {
        (**self).insert_flight(flight)
    }

    fn get_flight_by_id(&self, id: i64) -> Result<Option<Flight>> {
        (**self).get_flight_by_id(id)
    }

    fn update_flight(&self, id: i64, flight: &Flight) -> Result<()> {
        (**self).update_flight(id, flight)
    }

    fn get_all_flights(&self) -> Result<Vec<Flight>> {
        (**self).get_all_flights()
    }

    fn get_all_flights_from_city_to_city(
        &self,
        departure_city: &str,
        arrival_city: &str,
    ) -> Result<Vec<Flight>> {
        (**self).get_all_flights_from_city_to_city(departure_city, arrival_city)
    }
}
