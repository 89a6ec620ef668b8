//! Command handlers

use crate::cli::{party_size, Cli, Commands, TripArgs};
use crate::output::{output_quote, output_ride, output_vehicles};
use chauffeur_app::app::{require_vehicle, BookingSession};
use chauffeur_app::config::Config;
use chauffeur_app::repository::{open_promo_registry, open_vehicle_repo};
use chauffeur_domain::model::{TripRequest, Vehicle};
use chauffeur_domain::repository::VehicleRepository;
use chauffeur_types::{OutputFormat, Result};
use std::path::PathBuf;
use tracing::debug;

pub fn execute(cli: Cli) -> Result<()> {
    // Load config
    let mut config = Config::load()?;

    // Override from CLI args
    if cli.rate_card.is_some() {
        config.rate_card_path = cli.rate_card.clone();
    }
    if cli.promos.is_some() {
        config.promo_registry_path = cli.promos.clone();
    }
    let output_format = cli.format.unwrap_or(config.output_format);
    debug!(
        rate_card = ?config.rate_card_path,
        promos = ?config.promo_registry_path,
        %output_format,
        "configuration resolved"
    );

    match cli.command {
        Commands::Quote { trip } => cmd_quote(&config, &trip, output_format),

        Commands::Book {
            trip,
            passengers,
            luggage,
        } => cmd_book(&config, &trip, passengers, luggage, output_format),

        Commands::Vehicles => cmd_vehicles(&config, output_format),

        Commands::Config {
            show,
            set_rate_card,
            set_promo_registry,
            set_output,
            set_free_distance,
            reset,
        } => cmd_config(
            show,
            set_rate_card,
            set_promo_registry,
            set_output,
            set_free_distance,
            reset,
        ),
    }
}

/// Resolve the vehicle and trip, then claim the code on a fresh session
fn prepare_session(
    config: &Config,
    args: &TripArgs,
) -> Result<(BookingSession, Vehicle, TripRequest)> {
    let trip = args.trip_request()?;
    let vehicles = open_vehicle_repo(config)?;
    let vehicle = require_vehicle(&vehicles, &args.vehicle)?;

    let mut session = BookingSession::with_system_clock(config.pricing);
    if let Some(ref code) = args.code {
        let registry = open_promo_registry(config)?;
        session.claim_code(&registry, code, &vehicle, &trip)?;
    }
    Ok((session, vehicle, trip))
}

fn cmd_quote(config: &Config, args: &TripArgs, output_format: OutputFormat) -> Result<()> {
    let (session, vehicle, trip) = prepare_session(config, args)?;
    let fare = session.quote(&vehicle, &trip)?;
    output_quote(
        output_format,
        &vehicle,
        &trip,
        &fare,
        &session.describe_discount(),
    )
}

fn cmd_book(
    config: &Config,
    args: &TripArgs,
    passengers: u32,
    luggage: u32,
    output_format: OutputFormat,
) -> Result<()> {
    let (mut session, vehicle, trip) = prepare_session(config, args)?;
    let ride = session.confirm(&vehicle, &trip, &party_size(passengers, luggage))?;
    output_ride(output_format, &ride)
}

fn cmd_vehicles(config: &Config, output_format: OutputFormat) -> Result<()> {
    let vehicles = open_vehicle_repo(config)?;
    output_vehicles(output_format, &vehicles.find_all()?)
}

fn cmd_config(
    show: bool,
    set_rate_card: Option<PathBuf>,
    set_promo_registry: Option<PathBuf>,
    set_output: Option<OutputFormat>,
    set_free_distance: Option<f64>,
    reset: bool,
) -> Result<()> {
    if reset {
        let config = Config::default();
        config.save()?;
        println!("Configuration reset to defaults");
        println!("\n{}", config);
        return Ok(());
    }

    let mut config = Config::load()?;
    let modified = apply_config_changes(
        &mut config,
        set_rate_card,
        set_promo_registry,
        set_output,
        set_free_distance,
    );

    if modified {
        config.save()?;
        println!("Configuration updated");
    }

    if show || !modified {
        println!("{}", config);
    }

    Ok(())
}

/// Apply the requested settings; returns whether anything changed
fn apply_config_changes(
    config: &mut Config,
    set_rate_card: Option<PathBuf>,
    set_promo_registry: Option<PathBuf>,
    set_output: Option<OutputFormat>,
    set_free_distance: Option<f64>,
) -> bool {
    let mut modified = false;

    if let Some(path) = set_rate_card {
        config.rate_card_path = Some(path);
        modified = true;
    }

    if let Some(path) = set_promo_registry {
        config.promo_registry_path = Some(path);
        modified = true;
    }

    if let Some(output_format) = set_output {
        config.output_format = output_format;
        modified = true;
    }

    if let Some(km) = set_free_distance {
        config.pricing.free_distance_km = km;
        modified = true;
    }

    modified
}
