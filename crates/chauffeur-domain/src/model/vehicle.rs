//! Vehicle rate card entry

use serde::{Deserialize, Serialize};

use chauffeur_types::FareError;

/// One rate card entry: capacity limits plus the three fare rates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    /// Unique identifier (e.g., "business-sedan")
    pub id: String,
    /// Display name (e.g., "Business Sedan")
    #[serde(default)]
    pub name: String,
    pub passenger_capacity: u32,
    pub luggage_capacity: u32,
    /// Flat one-way fare up to the free distance
    pub fixed_fare: f64,
    /// Rate per km beyond the free distance
    pub per_km_rate: f64,
    pub hourly_rate: f64,
}

impl Vehicle {
    /// Check the rate card invariants: rates non-negative, capacities positive
    pub fn validate(&self) -> Result<(), FareError> {
        let rates = [
            ("fixed_fare", self.fixed_fare),
            ("per_km_rate", self.per_km_rate),
            ("hourly_rate", self.hourly_rate),
        ];
        for (field, value) in rates {
            if !value.is_finite() || value < 0.0 {
                return Err(FareError::InvalidInput(format!(
                    "vehicle {}: {} must be a non-negative amount, got {}",
                    self.id, field, value
                )));
            }
        }
        if self.passenger_capacity == 0 || self.luggage_capacity == 0 {
            return Err(FareError::InvalidInput(format!(
                "vehicle {}: capacities must be positive",
                self.id
            )));
        }
        Ok(())
    }

    /// Name for display, falling back to the id
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            &self.id
        } else {
            &self.name
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sedan() -> Vehicle {
        Vehicle {
            id: "sedan".to_string(),
            name: "Business Sedan".to_string(),
            passenger_capacity: 3,
            luggage_capacity: 2,
            fixed_fare: 105.0,
            per_km_rate: 1.7,
            hourly_rate: 90.0,
        }
    }

    #[test]
    fn test_valid_vehicle() {
        assert!(sedan().validate().is_ok());
    }

    #[test]
    fn test_zero_rates_are_valid() {
        let mut v = sedan();
        v.fixed_fare = 0.0;
        v.hourly_rate = 0.0;
        assert!(v.validate().is_ok());
    }

    #[test]
    fn test_negative_rate_rejected() {
        let mut v = sedan();
        v.per_km_rate = -1.0;
        assert!(matches!(v.validate(), Err(FareError::InvalidInput(_))));
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let mut v = sedan();
        v.luggage_capacity = 0;
        assert!(matches!(v.validate(), Err(FareError::InvalidInput(_))));
    }

    #[test]
    fn test_display_name_falls_back_to_id() {
        let mut v = sedan();
        assert_eq!(v.display_name(), "Business Sedan");
        v.name.clear();
        assert_eq!(v.display_name(), "sedan");
    }
}
