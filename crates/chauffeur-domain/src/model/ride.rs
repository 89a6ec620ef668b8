//! Ride record and order status lifecycle

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use chauffeur_types::FareError;

use super::{Discount, FareResult, TripRequest};

/// Order status of a booked ride
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RideStatus {
    Pending,
    Accepted,
    Ongoing,
    Completed,
    Cancelled,
}

impl RideStatus {
    pub fn label(&self) -> &'static str {
        match self {
            RideStatus::Pending => "pending",
            RideStatus::Accepted => "accepted",
            RideStatus::Ongoing => "ongoing",
            RideStatus::Completed => "completed",
            RideStatus::Cancelled => "cancelled",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, RideStatus::Completed | RideStatus::Cancelled)
    }

    pub fn can_transition_to(&self, next: RideStatus) -> bool {
        use RideStatus::*;
        matches!(
            (self, next),
            (Pending, Accepted)
                | (Accepted, Ongoing)
                | (Ongoing, Completed)
                | (Pending, Cancelled)
                | (Accepted, Cancelled)
        )
    }

    pub fn transition(self, next: RideStatus) -> Result<RideStatus, FareError> {
        if self.can_transition_to(next) {
            Ok(next)
        } else {
            Err(FareError::InvalidTransition {
                from: self.label().to_string(),
                to: next.label().to_string(),
            })
        }
    }
}

impl std::fmt::Display for RideStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A confirmed booking, handed to the persistence collaborator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RideRecord {
    pub id: String,
    pub vehicle_id: String,
    pub trip: TripRequest,
    pub fare: FareResult,
    /// Discount that was valid when the ride was confirmed
    #[serde(default)]
    pub discount: Option<Discount>,
    pub status: RideStatus,
    pub created_at: DateTime<Utc>,
}

impl RideRecord {
    pub fn new(
        vehicle_id: String,
        trip: TripRequest,
        fare: FareResult,
        discount: Option<Discount>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            vehicle_id,
            trip,
            fare,
            discount,
            status: RideStatus::Pending,
            created_at,
        }
    }

    pub fn advance(&mut self, next: RideStatus) -> Result<(), FareError> {
        self.status = self.status.transition(next)?;
        Ok(())
    }

    pub fn cancel(&mut self) -> Result<(), FareError> {
        self.advance(RideStatus::Cancelled)
    }
}
