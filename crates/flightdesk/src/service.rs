//! Business-logic layer between request handlers and the repository.

use crate::config::Config;
use crate::error::Result;
use crate::flight::Flight;
use crate::repository::FlightRepository;
use crate::storage::Storage;

/// Flight operations exposed to callers, delegating persistence to `R`.
///
/// The service is stateless apart from its repository. Repository errors are
/// returned unchanged.
#[derive(Debug)]
pub struct FlightService<R = Storage> {
    repository: R,
}

impl FlightService<Storage> {
    /// Build a service backed by the `SQLite` database named in `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened.
    pub fn from_config(config: &Config) -> Result<Self> {
        let storage = Storage::open_with(config.database_path(), &config.storage)?;
        Ok(Self::new(storage))
    }
}

impl<R: FlightRepository> FlightService<R> {
    /// Build a service around the given repository.
    #[must_use]
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// The repository this service delegates to.
    #[must_use]
    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Persist a new flight.
    ///
    /// Returns the flight as stored by the repository, including its assigned
    /// identity, not the transient value passed in.
    ///
    /// # Errors
    ///
    /// Returns any error raised by the repository.
    pub fn add_flight(&self, flight: &Flight) -> Result<Flight> {
        self.repository.insert_flight(flight)
    }

    /// Replace the flight with identity `id`.
    ///
    /// Returns `Ok(None)` without writing anything when no such flight exists.
    /// On success this returns the flight as it was *before* the update, not
    /// the new values; callers wanting the new state must fetch it again.
    ///
    /// # Errors
    ///
    /// Returns any error raised by the repository.
    pub fn update_flight(&self, id: i64, flight: &Flight) -> Result<Option<Flight>> {
        let Some(previous) = self.repository.get_flight_by_id(id)? else {
            return Ok(None);
        };
        self.repository.update_flight(id, flight)?;
        Ok(Some(previous))
    }

    /// All flights, in repository order.
    ///
    /// # Errors
    ///
    /// Returns any error raised by the repository.
    pub fn get_all_flights(&self) -> Result<Vec<Flight>> {
        self.repository.get_all_flights()
    }

    /// Flights departing `departure_city` and arriving at `arrival_city`.
    ///
    /// # Errors
    ///
    /// Returns any error raised by the repository.
    pub fn get_all_flights_from_city_to_city(
        &self,
        departure_city: &str,
        arrival_city: &str,
    ) -> Result<Vec<Flight>> {
        self.repository
            .get_all_flights_from_city_to_city(departure_city, arrival_city)
    }
}
