//! Configuration management for chauffeur-fare
//!
//! Config stored at: ~/.config/chauffeur-fare/config.json

use chauffeur_domain::model::PricingPolicy;
use chauffeur_types::{ConfigError, OutputFormat, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const APP_DIR: &str = "chauffeur-fare";
const DEFAULT_RATE_CARD: &str = "vehicles.toml";
const DEFAULT_PROMO_REGISTRY: &str = "promos.toml";

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Default output format (json, table)
    #[serde(default = "default_output_format")]
    pub output_format: OutputFormat,

    /// Rate card override (defaults to vehicles.toml in the config dir)
    #[serde(default)]
    pub rate_card_path: Option<PathBuf>,

    /// Promo registry override (defaults to promos.toml in the config dir)
    #[serde(default)]
    pub promo_registry_path: Option<PathBuf>,

    /// Free distance and hourly booking range
    #[serde(default)]
    pub pricing: PricingPolicy,
}

fn default_output_format() -> OutputFormat {
    OutputFormat::Table
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_format: default_output_format(),
            rate_card_path: None,
            promo_registry_path: None,
            pricing: PricingPolicy::default(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or(ConfigError::NotFound)?
            .join(APP_DIR);
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Get the rate card path
    pub fn rate_card_path(&self) -> Result<PathBuf> {
        match self.rate_card_path {
            Some(ref path) => Ok(path.clone()),
            None => Ok(Self::config_dir()?.join(DEFAULT_RATE_CARD)),
        }
    }

    /// Get the promo registry path
    pub fn promo_registry_path(&self) -> Result<PathBuf> {
        match self.promo_registry_path {
            Some(ref path) => Ok(path.clone()),
            None => Ok(Self::config_dir()?.join(DEFAULT_PROMO_REGISTRY)),
        }
    }

    /// Load config from file, or create default
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load config from a specific file, or create default if it is missing
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)
                .map_err(|e| ConfigError::ParseError(e.to_string()))?;
            config.validate()?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.validate()?;

        // Ensure directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| ConfigError::SaveError(e.to_string()))?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content).map_err(|e| ConfigError::SaveError(e.to_string()))?;
        Ok(())
    }

    /// Reject pricing settings the rate card resolver cannot honour
    pub fn validate(&self) -> Result<()> {
        let pricing = &self.pricing;
        if !pricing.free_distance_km.is_finite() || pricing.free_distance_km < 0.0 {
            return Err(ConfigError::ParseError(format!(
                "free_distance_km must be non-negative, got {}",
                pricing.free_distance_km
            ))
            .into());
        }
        if pricing.min_hours > pricing.max_hours {
            return Err(ConfigError::ParseError(format!(
                "min_hours ({}) exceeds max_hours ({})",
                pricing.min_hours, pricing.max_hours
            ))
            .into());
        }
        Ok(())
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Chauffeur Fare Configuration")?;
        writeln!(f, "============================")?;
        writeln!(f)?;
        writeln!(f, "Output format:   {}", self.output_format)?;
        writeln!(
            f,
            "Rate card:       {}",
            self.rate_card_path()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|_| "(error)".to_string())
        )?;
        writeln!(
            f,
            "Promo registry:  {}",
            self.promo_registry_path()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|_| "(error)".to_string())
        )?;
        writeln!(f, "Free distance:   {} km", self.pricing.free_distance_km)?;
        writeln!(
            f,
            "Hourly range:    {}-{} h",
            self.pricing.min_hours, self.pricing.max_hours
        )?;

        if let Ok(path) = Self::config_path() {
            writeln!(f)?;
            writeln!(f, "Config file:     {}", path.display())?;
        }

        Ok(())
    }
}
