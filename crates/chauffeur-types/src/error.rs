//! Error types for chauffeur-fare

use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),
}

/// Errors raised by fare computation and booking rules.
///
/// None of these are transient: the engine does no I/O, so every variant is
/// returned to the immediate caller and never retried.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FareError {
    /// Malformed trip parameters (negative distance, duration out of range)
    #[error("Invalid trip input: {0}")]
    InvalidInput(String),

    /// Caller broke an operation contract (e.g. percentage outside 0-100)
    #[error("Contract violation: {0}")]
    ContractViolation(String),

    #[error("Capacity exceeded: {constraint} limit is {limit}, requested {requested}")]
    CapacityExceeded {
        constraint: &'static str,
        limit: u32,
        requested: u32,
    },

    #[error("Invalid ride status transition: {from} -> {to}")]
    InvalidTransition { from: String, to: String },

    #[error("Unknown discount code: {0}")]
    UnknownCode(String),

    #[error("Unknown vehicle: {0}")]
    UnknownVehicle(String),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Fare(#[from] FareError),

    #[error("File not found: {0}")]
    FileNotFound(String),
}

pub type Result<T> = std::result::Result<T, Error>;
