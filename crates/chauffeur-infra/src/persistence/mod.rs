//! Persistence implementations
//!
//! File-based implementations of the domain repository traits.

mod file_promo_registry;
mod file_vehicle_repo;

pub use file_promo_registry::FilePromoCodeRegistry;
pub use file_vehicle_repo::FileVehicleRepository;
