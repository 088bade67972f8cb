//! Storage layer for flightdesk.
//!
//! This module provides the `SQLite`-backed [`FlightRepository`], the default
//! collaborator of [`FlightService`](crate::FlightService).

pub mod migrations;
pub mod schema;

use std::path::{Path, PathBuf};

use rusqlite::{params, Connection, OptionalExtension};
use tracing::{debug, info};

use crate::config::StorageConfig;
use crate::error::{Error, Result};
use crate::flight::Flight;
use crate::repository::FlightRepository;

const SELECT_FLIGHT: &str = "SELECT flight_id, departure_city, arrival_city FROM flight";

/// `SQLite` storage for flight records.
#[derive(Debug)]
pub struct Storage {
    /// Path to the database file.
    path: PathBuf,
    /// Database connection.
    conn: Connection,
}

impl Storage {
    /// Open or create a flight database at the given path with default settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or schema initialization fails.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Self::open_with(path, &StorageConfig::default())
    }

    /// Open or create a flight database at the given path.
    ///
    /// Creates the parent directories and database file if they don't exist,
    /// applies the connection settings from `options` and brings the schema
    /// up to date.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or schema initialization fails.
    pub fn open_with(path: impl AsRef<Path>, options: &StorageConfig) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent).map_err(|source| Error::DirectoryCreate {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
        }

        debug!("Opening database at {}", path.display());
        let conn = Connection::open(&path).map_err(|source| Error::DatabaseOpen {
            path: path.clone(),
            source,
        })?;

        conn.busy_timeout(options.busy_timeout())?;
        if options.wal_enabled {
            conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA synchronous=NORMAL;")?;
        }

        migrations::initialize_schema(&conn)?;

        info!("Database opened successfully at {}", path.display());
        Ok(Self { path, conn })
    }

    /// Create an in-memory storage instance for testing.
    ///
    /// # Errors
    ///
    /// Returns an error if the in-memory database cannot be created.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().map_err(|source| Error::DatabaseOpen {
            path: PathBuf::from(":memory:"),
            source,
        })?;

        migrations::initialize_schema(&conn)?;

        Ok(Self {
            path: PathBuf::from(":memory:"),
            conn,
        })
    }

    /// Get the path to the database file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Count stored flights.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub fn count(&self) -> Result<i64> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM flight", [], |row| row.get(0))?;
        Ok(count)
    }

    fn row_to_flight(row: &rusqlite::Row) -> rusqlite::Result<Flight> {
        let id: i64 = row.get(0)?;
        let departure_city: String = row.get(1)?;
        let arrival_city: String = row.get(2)?;
        Ok(Flight::new(departure_city, arrival_city).with_id(id))
    }
}

impl FlightRepository for Storage {
    fn insert_flight(&self, flight: &Flight) -> Result<Flight> {
        self.conn.execute(
            "INSERT INTO flight (departure_city, arrival_city) VALUES (?1, ?2)",
            params![flight.departure_city, flight.arrival_city],
        )?;

        let id = self.conn.last_insert_rowid();
        debug!("Inserted flight with id {}", id);
        Ok(flight.clone().with_id(id))
    }

    fn get_flight_by_id(&self, id: i64) -> Result<Option<Flight>> {
        let result = self
            .conn
            .query_row(
                &format!("{SELECT_FLIGHT} WHERE flight_id = ?1"),
                [id],
                Self::row_to_flight,
            )
            .optional()?;
        Ok(result)
    }

    fn update_flight(&self, id: i64, flight: &Flight) -> Result<()> {
        let affected = self.conn.execute(
            "UPDATE flight SET departure_city = ?1, arrival_city = ?2 WHERE flight_id = ?3",
            params![flight.departure_city, flight.arrival_city, id],
        )?;
        debug!("Updated flight {} ({} row(s) affected)", id, affected);
        Ok(())
    }

    fn get_all_flights(&self) -> Result<Vec<Flight>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{SELECT_FLIGHT} ORDER BY flight_id ASC"))?;

        let flights = stmt
            .query_map([], Self::row_to_flight)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(flights)
    }

    fn get_all_flights_from_city_to_city(
        &self,
        departure_city: &str,
        arrival_city: &str,
    ) -> Result<Vec<Flight>> {
        let mut stmt = self.conn.prepare(&format!(
            "{SELECT_FLIGHT} WHERE departure_city = ?1 AND arrival_city = ?2 ORDER BY flight_id ASC"
        ))?;

        let flights = stmt
            .query_map(params![departure_city, arrival_city], Self::row_to_flight)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(flights)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_storage() -> Storage {
        Storage::open_in_memory().expect("failed to create test storage")
    }

    fn temp_db_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("flightdesk_{name}_{}.db", std::process::id()))
    }

    fn remove_db(path: &Path) {
        let _ = std::fs::remove_file(path);
        let _ = std::fs::remove_file(path.with_extension("db-wal"));
        let _ = std::fs::remove_file(path.with_extension("db-shm"));
    }

    #[test]
    fn test_open_in_memory() {
        let storage = Storage::open_in_memory();
        assert!(storage.is_ok());
    }

    #[test]
    fn test_insert_and_get() {
        let storage = create_test_storage();

        let persisted = storage.insert_flight(&Flight::new("NYC", "LAX")).unwrap();
        assert!(persisted.is_persisted());

        let retrieved = storage.get_flight_by_id(persisted.id.unwrap()).unwrap();
        assert_eq!(retrieved, Some(persisted));
    }

    #[test]
    fn test_insert_assigns_distinct_ids() {
        let storage = create_test_storage();

        let a = storage.insert_flight(&Flight::new("NYC", "LAX")).unwrap();
        let b = storage.insert_flight(&Flight::new("NYC", "LAX")).unwrap();

        assert_ne!(a.id, b.id);
        assert_eq!(storage.count().unwrap(), 2);
    }

    #[test]
    fn test_insert_ignores_caller_id() {
        let storage = create_test_storage();
        let persisted = storage
            .insert_flight(&Flight::new("NYC", "LAX").with_id(42))
            .unwrap();

        assert_eq!(persisted.id, Some(1));
    }

    #[test]
    fn test_get_nonexistent() {
        let storage = create_test_storage();
        assert!(storage.get_flight_by_id(99999).unwrap().is_none());
    }

    #[test]
    fn test_update_existing() {
        let storage = create_test_storage();
        let id = storage
            .insert_flight(&Flight::new("NYC", "LAX"))
            .unwrap()
            .id
            .unwrap();

        storage.update_flight(id, &Flight::new("NYC", "SFO")).unwrap();

        let updated = storage.get_flight_by_id(id).unwrap().unwrap();
        assert_eq!(updated, Flight::new("NYC", "SFO").with_id(id));
    }

    #[test]
    fn test_update_nonexistent_is_noop() {
        let storage = create_test_storage();
        storage.update_flight(7, &Flight::new("NYC", "SFO")).unwrap();
        assert_eq!(storage.count().unwrap(), 0);
    }

    #[test]
    fn test_get_all_flights_ordered() {
        let storage = create_test_storage();
        for (dep, arr) in [("A", "B"), ("C", "D"), ("E", "F")] {
            storage.insert_flight(&Flight::new(dep, arr)).unwrap();
        }

        let flights = storage.get_all_flights().unwrap();
        let ids: Vec<_> = flights.iter().filter_map(|f| f.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(flights[1].route(), ("C", "D"));
    }

    #[test]
    fn test_get_all_flights_empty() {
        let storage = create_test_storage();
        assert!(storage.get_all_flights().unwrap().is_empty());
    }

    #[test]
    fn test_route_filter() {
        let storage = create_test_storage();
        storage.insert_flight(&Flight::new("Tampa", "Dallas")).unwrap();
        storage.insert_flight(&Flight::new("Dallas", "Tampa")).unwrap();
        storage.insert_flight(&Flight::new("Tampa", "Dallas")).unwrap();
        storage.insert_flight(&Flight::new("tampa", "Dallas")).unwrap();

        let flights = storage
            .get_all_flights_from_city_to_city("Tampa", "Dallas")
            .unwrap();
        let ids: Vec<_> = flights.iter().filter_map(|f| f.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_route_filter_no_match() {
        let storage = create_test_storage();
        storage.insert_flight(&Flight::new("Tampa", "Dallas")).unwrap();

        assert!(storage
            .get_all_flights_from_city_to_city("Reno", "Boise")
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_unicode_cities() {
        let storage = create_test_storage();
        let persisted = storage
            .insert_flight(&Flight::new("São Paulo", "Zürich"))
            .unwrap();

        let found = storage
            .get_all_flights_from_city_to_city("São Paulo", "Zürich")
            .unwrap();
        assert_eq!(found, vec![persisted]);
    }

    #[test]
    fn test_path() {
        let storage = create_test_storage();
        assert_eq!(storage.path().to_string_lossy(), ":memory:");
    }

    #[test]
    fn test_open_file_based_persists() {
        let db_path = temp_db_path("persist");
        remove_db(&db_path);

        let storage = Storage::open(&db_path).unwrap();
        let persisted = storage.insert_flight(&Flight::new("NYC", "LAX")).unwrap();
        assert_eq!(storage.path(), db_path);
        drop(storage);

        let reopened = Storage::open(&db_path).unwrap();
        assert_eq!(reopened.get_all_flights().unwrap(), vec![persisted]);

        drop(reopened);
        remove_db(&db_path);
    }

    #[test]
    fn test_open_without_wal() {
        let db_path = temp_db_path("nowal");
        remove_db(&db_path);

        let options = StorageConfig {
            wal_enabled: false,
            ..StorageConfig::default()
        };
        let storage = Storage::open_with(&db_path, &options).unwrap();
        let mode: String = storage
            .conn
            .query_row("PRAGMA journal_mode", [], |row| row.get(0))
            .unwrap();
        assert_ne!(mode.to_lowercase(), "wal");

        drop(storage);
        remove_db(&db_path);
    }

    #[test]
    fn test_open_creates_parent_dirs() {
        let root = std::env::temp_dir().join(format!("flightdesk_test_{}", std::process::id()));
        let nested_path = root.join("nested/flights.db");
        let _ = std::fs::remove_dir_all(&root);

        let storage = Storage::open(&nested_path).unwrap();
        assert!(nested_path.exists());

        drop(storage);
        let _ = std::fs::remove_dir_all(&root);
    }
}
