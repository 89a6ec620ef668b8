//! Application use cases

mod booking_session;

pub use booking_session::BookingSession;

use chauffeur_domain::model::Vehicle;
use chauffeur_domain::repository::VehicleRepository;
use chauffeur_types::{FareError, Result};

/// Look up a vehicle, failing with `UnknownVehicle` if it is not on the rate card
pub fn require_vehicle<R: VehicleRepository + ?Sized>(repo: &R, id: &str) -> Result<Vehicle> {
    repo.find_by_id(id)?
        .ok_or_else(|| FareError::UnknownVehicle(id.to_string()).into())
}
