//! `flightdesk` - CLI for the flight record service

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::Parser;
use tracing::{debug, warn};

use flightdesk::cli::output::{render_flight, render_flights};
use flightdesk::cli::{
    resolve_config_path, AddCommand, Cli, Command, ConfigCommand, ListCommand, UpdateCommand,
};
use flightdesk::{init_logging, Config, Flight, FlightService};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbosity());

    // Config commands inspect files themselves and must not require a valid default.
    match cli.command {
        Command::Add(cmd) => handle_add(&open_service(cli.config)?, &cmd),
        Command::Update(cmd) => handle_update(&open_service(cli.config)?, &cmd),
        Command::List(cmd) => handle_list(&open_service(cli.config)?, &cmd),
        Command::Config(cmd) => handle_config(cli.config, cmd),
    }
}

fn load_config(config_path: Option<PathBuf>) -> anyhow::Result<Config> {
    Config::load_from(config_path).context("loading configuration")
}

fn open_service(config_path: Option<PathBuf>) -> anyhow::Result<FlightService> {
    let config = load_config(config_path)?;
    let path = config.database_path();
    debug!("Using database {}", path.display());
    FlightService::from_config(&config)
        .with_context(|| format!("opening flight database at {}", path.display()))
}

fn handle_add(service: &FlightService, cmd: &AddCommand) -> anyhow::Result<()> {
    let flight = Flight::new(&*cmd.departure_city, &*cmd.arrival_city);
    let persisted = service.add_flight(&flight)?;
    println!("{}", render_flight(&persisted, cmd.json)?);
    Ok(())
}

fn handle_update(service: &FlightService, cmd: &UpdateCommand) -> anyhow::Result<()> {
    let replacement = Flight::new(&*cmd.departure_city, &*cmd.arrival_city);
    let Some(previous) = service.update_flight(cmd.id, &replacement)? else {
        warn!("Update requested for unknown flight {}", cmd.id);
        bail!("flight {} does not exist", cmd.id);
    };

    if cmd.json {
        println!("{}", render_flight(&previous, true)?);
    } else {
        println!("Updated flight {}. Previous values:", cmd.id);
        println!("  {previous}");
    }
    Ok(())
}

fn handle_list(service: &FlightService, cmd: &ListCommand) -> anyhow::Result<()> {
    let flights = match cmd.route() {
        Some((departure, arrival)) => {
            service.get_all_flights_from_city_to_city(departure, arrival)?
        }
        None => service.get_all_flights()?,
    };
    debug!("Listing {} flight(s)", flights.len());

    let rendered = render_flights(&flights, cmd.format)?;
    if !rendered.is_empty() {
        println!("{rendered}");
    }
    Ok(())
}

fn handle_config(config_path: Option<PathBuf>, cmd: ConfigCommand) -> anyhow::Result<()> {
    match cmd {
        ConfigCommand::Show { json } => {
            let config = load_config(config_path)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&config)?);
            } else {
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[Storage]");
                println!("  Database path:      {}", config.database_path().display());
                println!("  Busy timeout (ms):  {}", config.storage.busy_timeout_ms);
                println!("  WAL enabled:        {}", config.storage.wal_enabled);
            }
        }
        ConfigCommand::Path => {
            println!("{}", resolve_config_path(None, config_path).display());
        }
        ConfigCommand::Validate { file } => {
            let path = resolve_config_path(file, config_path);
            println!("Validating configuration: {}", path.display());
            match Config::load_from(Some(path)) {
                Ok(_) => println!("Configuration is valid."),
                Err(e) => bail!("configuration error: {e}"),
            }
        }
    }
    Ok(())
}
