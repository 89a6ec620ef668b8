//! Vehicle rate card loader from TOML configuration

use chauffeur_domain::model::Vehicle;
use chauffeur_types::{ConfigError, Error, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Container for parsing a rate card file
#[derive(Debug, Deserialize)]
struct RateCardConfig {
    vehicles: Vec<Vehicle>,
}

/// Vehicle rate card loaded from TOML, in file order
#[derive(Debug)]
pub struct RateCardLoader {
    vehicles: Vec<Vehicle>,
    /// Map of vehicle id to position in `vehicles`
    index: HashMap<String, usize>,
}

impl RateCardLoader {
    /// Load the rate card from a TOML file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::FileNotFound(format!(
                "Rate card not found: {}",
                path.display()
            )));
        }
        let content = fs::read_to_string(path).map_err(|e| {
            Error::Config(ConfigError::ParseError(format!(
                "Failed to read rate card file: {}",
                e
            )))
        })?;

        let loader = Self::load_from_str(&content)?;
        debug!(path = %path.display(), vehicles = loader.count(), "rate card loaded");
        Ok(loader)
    }

    /// Load the rate card from a TOML string
    pub fn load_from_str(toml_content: &str) -> Result<Self> {
        let config: RateCardConfig = toml::from_str(toml_content).map_err(|e| {
            Error::Config(ConfigError::ParseError(format!(
                "Failed to parse rate card TOML: {}",
                e
            )))
        })?;

        let mut index = HashMap::with_capacity(config.vehicles.len());
        for (position, vehicle) in config.vehicles.iter().enumerate() {
            vehicle.validate()?;
            if index.insert(vehicle.id.clone(), position).is_some() {
                return Err(Error::Config(ConfigError::ParseError(format!(
                    "Duplicate vehicle id in rate card: {}",
                    vehicle.id
                ))));
            }
        }

        Ok(Self {
            vehicles: config.vehicles,
            index,
        })
    }

    /// Look up a vehicle by id
    pub fn get_vehicle(&self, id: &str) -> Option<&Vehicle> {
        self.index.get(id).map(|&position| &self.vehicles[position])
    }

    /// Get all vehicles
    pub fn all_vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    pub fn count(&self) -> usize {
        self.vehicles.len()
    }
}
