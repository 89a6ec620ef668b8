//! Fare result type

use serde::{Deserialize, Serialize};

/// Computed fare handed to the payment and receipt collaborators.
///
/// Values are unrounded; round to 2 decimals only for display.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FareResult {
    pub base_fare: f64,
    pub discount_amount: f64,
    pub final_fare: f64,
}

impl FareResult {
    pub fn has_discount(&self) -> bool {
        self.discount_amount > 0.0
    }
}
