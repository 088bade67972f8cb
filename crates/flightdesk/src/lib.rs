//! `flightdesk` - Flight record service backed by a pluggable repository
//!
//! [`FlightService`] sits between callers and a [`FlightRepository`]. The
//! default repository is the `SQLite`-backed [`Storage`]; an
//! [`InMemoryRepository`] is available for tests and ephemeral use.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod cli;
pub mod config;
pub mod error;
pub mod flight;
pub mod logging;
pub mod repository;
pub mod service;
pub mod storage;

pub use config::Config;
pub use error::{Error, Result};
pub use flight::Flight;
pub use logging::init_logging;
pub use repository::{FlightRepository, InMemoryRepository};
pub use service::FlightService;
pub use storage::Storage;
