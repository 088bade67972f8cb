//! CLI command definitions.

use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};

/// Add command arguments.
#[derive(Debug, Args)]
pub struct AddCommand {
    /// City the flight departs from
    pub departure_city: String,

    /// City the flight arrives at
    pub arrival_city: String,

    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Update command arguments.
#[derive(Debug, Args)]
pub struct UpdateCommand {
    /// Identity of the flight to replace
    pub id: i64,

    /// New departure city
    pub departure_city: String,

    /// New arrival city
    pub arrival_city: String,

    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// List command arguments.
#[derive(Debug, Args)]
pub struct ListCommand {
    /// Only flights departing from this city
    #[arg(long = "from", value_name = "CITY", requires = "arrival_city")]
    pub departure_city: Option<String>,

    /// Only flights arriving at this city
    #[arg(long = "to", value_name = "CITY", requires = "departure_city")]
    pub arrival_city: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t)]
    pub format: OutputFormat,
}

impl ListCommand {
    /// The route filter, present only when both cities were given.
    #[must_use]
    pub fn route(&self) -> Option<(&str, &str)> {
        match (self.departure_city.as_deref(), self.arrival_city.as_deref()) {
            (Some(departure), Some(arrival)) => Some((departure, arrival)),
            _ => None,
        }
    }
}

/// Configuration commands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Show the configuration file path
    Path,

    /// Validate configuration
    Validate {
        /// Path to configuration file to validate
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

/// Output format for listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// One flight per line
    Plain,
    /// Aligned table with a header
    #[default]
    Table,
    /// JSON array
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(departure: Option<&str>, arrival: Option<&str>) -> ListCommand {
        ListCommand {
            departure_city: departure.map(str::to_string),
            arrival_city: arrival.map(str::to_string),
            format: OutputFormat::Plain,
        }
    }

    #[test]
    fn test_output_format_default() {
        assert_eq!(OutputFormat::default(), OutputFormat::Table);
    }

    #[test]
    fn test_list_route_both_cities() {
        assert_eq!(list(Some("NYC"), Some("LAX")).route(), Some(("NYC", "LAX")));
    }

    #[test]
    fn test_list_route_absent() {
        assert_eq!(list(None, None).route(), None);
        assert_eq!(list(Some("NYC"), None).route(), None);
    }

    #[test]
    fn test_update_command_debug() {
        let cmd = UpdateCommand {
            id: 3,
            departure_city: "NYC".to_string(),
            arrival_city: "SFO".to_string(),
            json: false,
        };
        let debug_str = format!("{cmd:?}");
        assert!(debug_str.contains("SFO"));
    }
}
