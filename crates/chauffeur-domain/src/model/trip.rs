//! Trip request and pricing policy types

use serde::{Deserialize, Serialize};

/// Kind of booking, without its parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TripType {
    OneWay,
    RoundTrip,
    Hourly,
}

impl TripType {
    pub fn label(&self) -> &'static str {
        match self {
            TripType::OneWay => "one-way",
            TripType::RoundTrip => "round-trip",
            TripType::Hourly => "hourly",
        }
    }
}

impl std::fmt::Display for TripType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Trip parameters; distance and duration are carried only by the trip
/// types that use them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "trip_type", rename_all = "kebab-case")]
pub enum TripRequest {
    OneWay { distance_km: f64 },
    RoundTrip { distance_km: f64 },
    Hourly { duration_hours: u32 },
}

impl TripRequest {
    pub fn trip_type(&self) -> TripType {
        match self {
            TripRequest::OneWay { .. } => TripType::OneWay,
            TripRequest::RoundTrip { .. } => TripType::RoundTrip,
            TripRequest::Hourly { .. } => TripType::Hourly,
        }
    }
}

/// Distance threshold and allowed hourly booking range
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricingPolicy {
    /// Distance covered by the fixed fare (inclusive)
    #[serde(default = "default_free_distance_km")]
    pub free_distance_km: f64,

    #[serde(default = "default_min_hours")]
    pub min_hours: u32,

    #[serde(default = "default_max_hours")]
    pub max_hours: u32,
}

fn default_free_distance_km() -> f64 {
    20.0
}

fn default_min_hours() -> u32 {
    2
}

fn default_max_hours() -> u32 {
    8
}

impl Default for PricingPolicy {
    fn default() -> Self {
        Self {
            free_distance_km: default_free_distance_km(),
            min_hours: default_min_hours(),
            max_hours: default_max_hours(),
        }
    }
}

/// Number of passengers and luggage pieces for a booking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartySize {
    pub passengers: u32,
    pub luggage: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trip_request_tagged_json() {
        let trip = TripRequest::RoundTrip { distance_km: 35.0 };
        let json = serde_json::to_string(&trip).unwrap();
        assert_eq!(json, r#"{"trip_type":"round-trip","distance_km":35.0}"#);

        let hourly: TripRequest =
            serde_json::from_str(r#"{"trip_type":"hourly","duration_hours":4}"#).unwrap();
        assert_eq!(hourly, TripRequest::Hourly { duration_hours: 4 });
        assert_eq!(hourly.trip_type(), TripType::Hourly);
    }

    #[test]
    fn test_hourly_rejects_distance_field_shape() {
        let parsed: Result<TripRequest, _> =
            serde_json::from_str(r#"{"trip_type":"hourly","distance_km":4.0}"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_policy_defaults_fill_missing_fields() {
        let policy: PricingPolicy = serde_json::from_str(r#"{"max_hours":10}"#).unwrap();
        assert!((policy.free_distance_km - 20.0).abs() < f64::EPSILON);
        assert_eq!(policy.min_hours, 2);
        assert_eq!(policy.max_hours, 10);
    }
}
