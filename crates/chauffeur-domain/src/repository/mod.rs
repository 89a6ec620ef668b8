//! Repository trait definitions for reference data

use serde::{Deserialize, Serialize};

use crate::model::{DiscountClaim, DiscountKind, Vehicle};
use chauffeur_types::Error;

/// Repository for the vehicle rate card
pub trait VehicleRepository {
    /// Find all vehicles
    fn find_all(&self) -> Result<Vec<Vehicle>, Error>;

    /// Find a vehicle by id
    fn find_by_id(&self, id: &str) -> Result<Option<Vehicle>, Error>;
}

/// Registered voucher or promo code
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromoCode {
    pub code: String,
    pub percentage: f64,
    #[serde(default = "default_kind")]
    pub kind: DiscountKind,
    #[serde(default)]
    pub expires_in_minutes: Option<u32>,
}

fn default_kind() -> DiscountKind {
    DiscountKind::Promo
}

impl PromoCode {
    pub fn to_claim(&self) -> DiscountClaim {
        DiscountClaim {
            percentage: self.percentage,
            kind: self.kind,
            code: Some(self.code.clone()),
            expires_in_minutes: self.expires_in_minutes,
        }
    }
}

/// Registry that validates voucher and promo codes
pub trait PromoCodeRegistry {
    /// Look up a code; `None` if it is not registered
    fn lookup(&self, code: &str) -> Result<Option<PromoCode>, Error>;
}
