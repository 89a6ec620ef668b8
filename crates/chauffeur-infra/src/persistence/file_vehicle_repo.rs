//! File-based implementation of VehicleRepository

use std::path::PathBuf;

use chauffeur_domain::model::Vehicle;
use chauffeur_domain::repository::VehicleRepository;
use chauffeur_types::Error;

use crate::rate_card_loader::RateCardLoader;

/// File-based vehicle rate card (TOML)
pub struct FileVehicleRepository {
    toml_path: PathBuf,
    loader: RateCardLoader,
}

impl FileVehicleRepository {
    /// Create a new repository from a TOML file path
    pub fn new(toml_path: PathBuf) -> Result<Self, Error> {
        let loader = RateCardLoader::load_from_file(&toml_path)?;
        Ok(Self { toml_path, loader })
    }

    /// Reload data from TOML
    pub fn reload(&mut self) -> Result<(), Error> {
        self.loader = RateCardLoader::load_from_file(&self.toml_path)?;
        Ok(())
    }
}

impl VehicleRepository for FileVehicleRepository {
    fn find_all(&self) -> Result<Vec<Vehicle>, Error> {
        Ok(self.loader.all_vehicles().to_vec())
    }

    fn find_by_id(&self, id: &str) -> Result<Option<Vehicle>, Error> {
        Ok(self.loader.get_vehicle(id).cloned())
    }
}
