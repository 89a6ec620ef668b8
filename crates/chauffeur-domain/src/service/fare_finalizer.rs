//! Fare finalization: base fare + ledger -> FareResult

use chrono::{DateTime, Utc};

use crate::model::FareResult;
use crate::service::discount_ledger::DiscountLedger;

/// Combine a base fare with the ledger's discount.
///
/// The discount amount was frozen against the fare at application time and
/// is subtracted as-is from `base_fare`, even when the two fares differ
/// (e.g. the vehicle was changed after applying a promo code). The
/// subtracted amount is capped at `base_fare` so the final fare never goes
/// negative.
pub fn finalize_fare(base_fare: f64, ledger: &DiscountLedger, now: DateTime<Utc>) -> FareResult {
    let discount_amount = ledger.discount_amount(now).min(base_fare).max(0.0);
    FareResult {
        base_fare,
        discount_amount,
        final_fare: (base_fare - discount_amount).max(0.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DiscountClaim, DiscountKind};
    use chrono::{Duration, TimeZone};

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap()
    }

    fn claim(percentage: f64, expires_in_minutes: Option<u32>) -> DiscountClaim {
        DiscountClaim {
            percentage,
            kind: DiscountKind::Promo,
            code: Some("RIDE20".to_string()),
            expires_in_minutes,
        }
    }

    #[test]
    fn test_no_discount() {
        let fare = finalize_fare(105.0, &DiscountLedger::new(), t0());
        assert!((fare.final_fare - 105.0).abs() < f64::EPSILON);
        assert!(fare.discount_amount.abs() < f64::EPSILON);
        assert!(!fare.has_discount());
    }

    #[test]
    fn test_stale_amount_is_subtracted_from_new_fare() {
        // 20% of 130.50 = 26.10, then the base fare changes to 360.00
        let mut ledger = DiscountLedger::new();
        ledger.apply(claim(20.0, None), 130.5, t0()).unwrap();

        let fare = finalize_fare(360.0, &ledger, t0());
        assert!((fare.base_fare - 360.0).abs() < f64::EPSILON);
        assert!((fare.discount_amount - 26.1).abs() < 0.01);
        assert!((fare.final_fare - 333.9).abs() < 0.01);
    }

    #[test]
    fn test_expired_discount_contributes_nothing() {
        let mut ledger = DiscountLedger::new();
        ledger.apply(claim(20.0, Some(90)), 130.5, t0()).unwrap();

        let later = t0() + Duration::minutes(91);
        assert!(!ledger.is_valid(later));
        let fare = finalize_fare(130.5, &ledger, later);
        assert!(fare.discount_amount.abs() < f64::EPSILON);
        assert!((fare.final_fare - 130.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_final_fare_clamped_at_zero() {
        let mut ledger = DiscountLedger::new();
        ledger.apply(claim(100.0, None), 500.0, t0()).unwrap();

        let fare = finalize_fare(105.0, &ledger, t0());
        assert!(fare.final_fare >= 0.0);
        assert!(fare.final_fare.abs() < f64::EPSILON);
        assert!(fare.discount_amount <= fare.base_fare);
    }
}
