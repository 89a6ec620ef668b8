//! Capacity check for a booking party

use chauffeur_types::FareError;

use crate::model::{PartySize, Vehicle};

/// Reject a party that does not fit the vehicle. Limits are inclusive.
pub fn check_capacity(vehicle: &Vehicle, party: &PartySize) -> Result<(), FareError> {
    if party.passengers > vehicle.passenger_capacity {
        return Err(FareError::CapacityExceeded {
            constraint: "passengers",
            limit: vehicle.passenger_capacity,
            requested: party.passengers,
        });
    }
    if party.luggage > vehicle.luggage_capacity {
        return Err(FareError::CapacityExceeded {
            constraint: "luggage",
            limit: vehicle.luggage_capacity,
            requested: party.luggage,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn van() -> Vehicle {
        Vehicle {
            id: "van".to_string(),
            name: "First Class Van".to_string(),
            passenger_capacity: 6,
            luggage_capacity: 5,
            fixed_fare: 150.0,
            per_km_rate: 2.2,
            hourly_rate: 120.0,
        }
    }

    #[test]
    fn test_at_capacity_is_allowed() {
        let party = PartySize {
            passengers: 6,
            luggage: 5,
        };
        assert!(check_capacity(&van(), &party).is_ok());
    }

    #[test]
    fn test_too_many_passengers() {
        let party = PartySize {
            passengers: 7,
            luggage: 0,
        };
        assert_eq!(
            check_capacity(&van(), &party),
            Err(FareError::CapacityExceeded {
                constraint: "passengers",
                limit: 6,
                requested: 7,
            })
        );
    }

    #[test]
    fn test_too_much_luggage() {
        let party = PartySize {
            passengers: 1,
            luggage: 9,
        };
        assert!(matches!(
            check_capacity(&van(), &party),
            Err(FareError::CapacityExceeded {
                constraint: "luggage",
                ..
            })
        ));
    }
}
