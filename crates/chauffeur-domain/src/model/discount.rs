//! Discount types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Where a discount came from; has no effect on the arithmetic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiscountKind {
    Voucher,
    Promo,
}

impl DiscountKind {
    pub fn label(&self) -> &'static str {
        match self {
            DiscountKind::Voucher => "voucher",
            DiscountKind::Promo => "promo",
        }
    }
}

impl std::fmt::Display for DiscountKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Already-validated request to apply a discount
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscountClaim {
    pub percentage: f64,
    pub kind: DiscountKind,
    #[serde(default)]
    pub code: Option<String>,
    /// None means the discount never expires
    #[serde(default)]
    pub expires_in_minutes: Option<u32>,
}

/// An applied discount. The amount is frozen at application time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Discount {
    pub percentage: f64,
    pub kind: DiscountKind,
    pub code: Option<String>,
    /// Fare the percentage was computed against
    pub applied_at_base_fare: f64,
    pub discount_amount: f64,
    pub applied_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
}

impl Discount {
    pub fn is_valid_at(&self, now: DateTime<Utc>) -> bool {
        match self.expires_at {
            Some(expires_at) => now < expires_at,
            None => true,
        }
    }
}

/// Read-only view of the ledger for display and receipts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscountSnapshot {
    pub discount: Option<Discount>,
    pub is_valid: bool,
}

impl DiscountSnapshot {
    pub fn empty() -> Self {
        Self {
            discount: None,
            is_valid: false,
        }
    }
}
