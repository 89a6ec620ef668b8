//! Repository adapters for the reference data files

use chauffeur_infra::persistence::{FilePromoCodeRegistry, FileVehicleRepository};
use chauffeur_types::Result;

use crate::config::Config;

/// Open the vehicle rate card configured for this installation
pub fn open_vehicle_repo(config: &Config) -> Result<FileVehicleRepository> {
    FileVehicleRepository::new(config.rate_card_path()?)
}

/// Open the promo code registry configured for this installation
pub fn open_promo_registry(config: &Config) -> Result<FilePromoCodeRegistry> {
    FilePromoCodeRegistry::new(config.promo_registry_path()?)
}
