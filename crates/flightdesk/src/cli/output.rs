//! Rendering of flights for terminal output.

use std::fmt::Write as _;

use crate::error::Result;
use crate::flight::Flight;

use super::OutputFormat;

/// Render a single flight, either as its display form or pretty JSON.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn render_flight(flight: &Flight, json: bool) -> Result<String> {
    if json {
        Ok(serde_json::to_string_pretty(flight)?)
    } else {
        Ok(flight.to_string())
    }
}

/// Render a list of flights in the requested format.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn render_flights(flights: &[Flight], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(flights)?),
        OutputFormat::Plain => Ok(flights
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Table => Ok(render_table(flights)),
    }
}

fn render_table(flights: &[Flight]) -> String {
    const HEADERS: [&str; 3] = ["ID", "DEPARTURE", "ARRIVAL"];

    let ids: Vec<String> = flights
        .iter()
        .map(|f| f.id.map_or_else(|| "-".to_string(), |id| id.to_string()))
        .collect();

    let id_width = ids.iter().map(String::len).fold(HEADERS[0].len(), usize::max);
    let dep_width = flights
        .iter()
        .map(|f| f.departure_city.chars().count())
        .fold(HEADERS[1].len(), usize::max);

    let mut out = String::new();
    let _ = write!(
        out,
        "{:<id_width$}  {:<dep_width$}  {}",
        HEADERS[0], HEADERS[1], HEADERS[2]
    );
    for (id, flight) in ids.iter().zip(flights) {
        let _ = write!(
            out,
            "\n{:<id_width$}  {:<dep_width$}  {}",
            id, flight.departure_city, flight.arrival_city
        );
    }
    if flights.is_empty() {
        out.push_str("\n(no flights)");
    }
    out
}
