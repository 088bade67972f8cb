//! Command-line interface for flightdesk.
//!
//! This module provides the CLI structure for the `flightdesk` binary.

mod commands;
pub mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use commands::{AddCommand, ConfigCommand, ListCommand, OutputFormat, UpdateCommand};

use crate::config::Config;
use crate::logging::Verbosity;

/// flightdesk - Manage scheduled flight records
#[derive(Debug, Parser)]
#[command(name = "flightdesk")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to custom configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The command to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Add a new flight
    Add(AddCommand),

    /// Replace an existing flight, printing its previous values
    Update(UpdateCommand),

    /// List flights, optionally filtered by route
    List(ListCommand),

    /// View or check configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

impl Cli {
    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> Verbosity {
        if self.quiet {
            Verbosity::Quiet
        } else {
            match self.verbose {
                0 => Verbosity::Normal,
                1 => Verbosity::Verbose,
                _ => Verbosity::Trace,
            }
        }
    }

    /// The configuration file in effect: `-c` when given, else the default location.
    #[must_use]
    pub fn config_path(&self) -> PathBuf {
        resolve_config_path(None, self.config.clone())
    }
}

/// Pick the configuration file a command operates on.
///
/// A command-specific `file` wins over the global `-c` path, which wins over
/// [`Config::default_config_path`].
#[must_use]
pub fn resolve_config_path(file: Option<PathBuf>, global: Option<PathBuf>) -> PathBuf {
    file.or(global).unwrap_or_else(Config::default_config_path)
}
