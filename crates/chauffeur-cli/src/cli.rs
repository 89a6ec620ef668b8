//! CLI definition using clap

use chauffeur_domain::model::{PartySize, TripRequest};
use chauffeur_types::{FareError, OutputFormat};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "chauffeur-fare")]
#[command(author = "yuuji")]
#[command(version)]
#[command(about = "Fare and discount computation for chauffeur bookings")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Rate card TOML override
    #[arg(long, global = true)]
    pub rate_card: Option<PathBuf>,

    /// Promo registry TOML override
    #[arg(long, global = true)]
    pub promos: Option<PathBuf>,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

/// Vehicle and trip parameters shared by quote and book
#[derive(Args, Debug, Clone)]
pub struct TripArgs {
    /// Vehicle id from the rate card (e.g., "sedan")
    #[arg(long)]
    pub vehicle: String,

    /// Trip distance in km (one-way unless --round-trip)
    #[arg(long, conflicts_with = "hours", allow_negative_numbers = true)]
    pub distance_km: Option<f64>,

    /// Return to the pickup point
    #[arg(long, requires = "distance_km")]
    pub round_trip: bool,

    /// Hourly booking duration
    #[arg(long)]
    pub hours: Option<u32>,

    /// Voucher or promo code to apply
    #[arg(long, short = 'c')]
    pub code: Option<String>,
}

impl TripArgs {
    pub fn trip_request(&self) -> Result<TripRequest, FareError> {
        match (self.distance_km, self.hours) {
            (Some(distance_km), None) if self.round_trip => {
                Ok(TripRequest::RoundTrip { distance_km })
            }
            (Some(distance_km), None) => Ok(TripRequest::OneWay { distance_km }),
            (None, Some(duration_hours)) => Ok(TripRequest::Hourly { duration_hours }),
            _ => Err(FareError::InvalidInput(
                "specify exactly one of --distance-km or --hours".to_string(),
            )),
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Quote a fare
    Quote {
        #[command(flatten)]
        trip: TripArgs,
    },

    /// Confirm a booking and print the pending ride record
    Book {
        #[command(flatten)]
        trip: TripArgs,

        /// Number of passengers
        #[arg(long, short = 'p', default_value = "1")]
        passengers: u32,

        /// Number of luggage pieces
        #[arg(long, short = 'l', default_value = "0")]
        luggage: u32,
    },

    /// List vehicles on the rate card
    Vehicles,

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set rate card path
        #[arg(long)]
        set_rate_card: Option<PathBuf>,

        /// Set promo registry path
        #[arg(long)]
        set_promo_registry: Option<PathBuf>,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Set distance covered by the fixed fare (km)
        #[arg(long)]
        set_free_distance: Option<f64>,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },
}

pub fn party_size(passengers: u32, luggage: u32) -> PartySize {
    PartySize {
        passengers,
        luggage,
    }
}
