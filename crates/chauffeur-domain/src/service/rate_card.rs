//! Rate card resolution: vehicle + trip -> base fare

use chauffeur_types::FareError;

use crate::model::{PricingPolicy, TripRequest, Vehicle};

/// Fare for a single leg of the trip, before round-trip doubling.
///
/// # Formula
/// - hourly: `hourly_rate x duration_hours`
/// - distance <= free distance: `fixed_fare`
/// - distance >  free distance: `fixed_fare + (distance - free) x per_km_rate`
pub fn resolve_one_way_fare(
    vehicle: &Vehicle,
    trip: &TripRequest,
    policy: &PricingPolicy,
) -> Result<f64, FareError> {
    match *trip {
        TripRequest::Hourly { duration_hours } => {
            if duration_hours < policy.min_hours || duration_hours > policy.max_hours {
                return Err(FareError::InvalidInput(format!(
                    "duration must be between {} and {} hours, got {}",
                    policy.min_hours, policy.max_hours, duration_hours
                )));
            }
            Ok(vehicle.hourly_rate * f64::from(duration_hours))
        }
        TripRequest::OneWay { distance_km } | TripRequest::RoundTrip { distance_km } => {
            distance_fare(vehicle, distance_km, policy.free_distance_km)
        }
    }
}

fn distance_fare(vehicle: &Vehicle, distance_km: f64, free_km: f64) -> Result<f64, FareError> {
    if !distance_km.is_finite() || distance_km < 0.0 {
        return Err(FareError::InvalidInput(format!(
            "distance must be a non-negative number of km, got {}",
            distance_km
        )));
    }
    if distance_km <= free_km {
        Ok(vehicle.fixed_fare)
    } else {
        Ok(vehicle.fixed_fare + (distance_km - free_km) * vehicle.per_km_rate)
    }
}

/// Base fare for the whole booking. Round trips are exactly twice the
/// one-way fare, with no per-leg rounding.
pub fn resolve_base_fare(
    vehicle: &Vehicle,
    trip: &TripRequest,
    policy: &PricingPolicy,
) -> Result<f64, FareError> {
    let one_way = resolve_one_way_fare(vehicle, trip, policy)?;
    match trip {
        TripRequest::RoundTrip { .. } => Ok(one_way * 2.0),
        TripRequest::OneWay { .. } | TripRequest::Hourly { .. } => Ok(one_way),
    }
}
