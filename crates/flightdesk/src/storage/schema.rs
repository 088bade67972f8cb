//! `SQLite` schema definitions for flightdesk.

/// SQL statement to create the flight table.
pub const CREATE_FLIGHT_TABLE: &str = r"
CREATE TABLE IF NOT EXISTS flight (
    flight_id INTEGER PRIMARY KEY AUTOINCREMENT,
    departure_city TEXT NOT NULL,
    arrival_city TEXT NOT NULL
)
";

/// SQL statement to create an index on the route columns for filtered listing.
///
/// Applied by schema migration v2 rather than as part of the base schema.
pub const CREATE_ROUTE_INDEX: &str = r"
CREATE INDEX IF NOT EXISTS idx_flight_route ON flight(departure_city, arrival_city)
";

/// SQL statement to create the metadata table for storing key-value pairs.
pub const CREATE_METADATA_TABLE: &str = r"
CREATE TABLE IF NOT EXISTS metadata (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL
)
";

/// Base schema creation statements in order.
pub const SCHEMA_STATEMENTS: &[&str] = &[CREATE_FLIGHT_TABLE, CREATE_METADATA_TABLE];
