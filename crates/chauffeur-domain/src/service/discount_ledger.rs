//! Discount ledger: holds at most one active discount
//!
//! The discount amount is computed once, against the fare known when the
//! discount is applied, and is never recomputed if the fare later changes.
//! Expiry is checked lazily; an applied discount stays in the ledger past
//! its expiry until someone resets it, so callers must go through
//! [`DiscountLedger::is_valid`] or [`DiscountLedger::discount_amount`].

use chrono::{DateTime, Duration, Utc};
use tracing::debug;

use chauffeur_types::FareError;

use crate::model::{Discount, DiscountClaim, DiscountSnapshot};

#[derive(Debug, Default, Clone, PartialEq)]
pub struct DiscountLedger {
    current: Option<Discount>,
}

impl DiscountLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the current discount unconditionally.
    ///
    /// Percentages outside `[0, 100]` are rejected and leave the ledger
    /// untouched.
    pub fn apply(
        &mut self,
        claim: DiscountClaim,
        base_fare_at_application: f64,
        now: DateTime<Utc>,
    ) -> Result<&Discount, FareError> {
        if !claim.percentage.is_finite() || !(0.0..=100.0).contains(&claim.percentage) {
            return Err(FareError::ContractViolation(format!(
                "discount percentage must be within 0-100, got {}",
                claim.percentage
            )));
        }
        if !base_fare_at_application.is_finite() || base_fare_at_application < 0.0 {
            return Err(FareError::ContractViolation(format!(
                "base fare must be a non-negative amount, got {}",
                base_fare_at_application
            )));
        }

        let discount = Discount {
            percentage: claim.percentage,
            kind: claim.kind,
            code: claim.code,
            applied_at_base_fare: base_fare_at_application,
            discount_amount: base_fare_at_application * claim.percentage / 100.0,
            applied_at: now,
            expires_at: claim
                .expires_in_minutes
                .map(|minutes| now + Duration::minutes(i64::from(minutes))),
        };
        debug!(
            kind = %discount.kind,
            code = ?discount.code,
            percentage = discount.percentage,
            amount = discount.discount_amount,
            "discount applied"
        );
        Ok(&*self.current.insert(discount))
    }

    pub fn reset(&mut self) {
        if self.current.take().is_some() {
            debug!("discount cleared");
        }
    }

    /// True iff a discount is held and it has no expiry or `now` is before it
    pub fn is_valid(&self, now: DateTime<Utc>) -> bool {
        self.current
            .as_ref()
            .is_some_and(|discount| discount.is_valid_at(now))
    }

    /// Frozen amount of the held discount, or zero when none is usable
    pub fn discount_amount(&self, now: DateTime<Utc>) -> f64 {
        match &self.current {
            Some(discount) if discount.is_valid_at(now) => discount.discount_amount,
            _ => 0.0,
        }
    }

    /// Drop the held discount if it has expired. Returns true if it did.
    pub fn clear_if_expired(&mut self, now: DateTime<Utc>) -> bool {
        let expired = self
            .current
            .as_ref()
            .is_some_and(|discount| !discount.is_valid_at(now));
        if expired {
            debug!("discount expired");
            self.current = None;
        }
        expired
    }

    pub fn describe(&self, now: DateTime<Utc>) -> DiscountSnapshot {
        DiscountSnapshot {
            discount: self.current.clone(),
            is_valid: self.is_valid(now),
        }
    }

    pub fn current(&self) -> Option<&Discount> {
        self.current.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.current.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DiscountKind;
    use chrono::TimeZone;

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap()
    }

    fn promo(percentage: f64, expires_in_minutes: Option<u32>) -> DiscountClaim {
        DiscountClaim {
            percentage,
            kind: DiscountKind::Promo,
            code: Some("WELCOME20".to_string()),
            expires_in_minutes,
        }
    }

    #[test]
    fn test_amount_is_computed_at_apply_time() {
        let mut ledger = DiscountLedger::new();
        let discount = ledger.apply(promo(20.0, None), 130.5, t0()).unwrap();
        assert!((discount.discount_amount - 26.1).abs() < 0.01);
        assert!((discount.applied_at_base_fare - 130.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_no_expiry_is_valid_forever() {
        let mut ledger = DiscountLedger::new();
        ledger.apply(promo(10.0, None), 100.0, t0()).unwrap();
        assert!(ledger.is_valid(t0() + Duration::days(3650)));
    }

    #[test]
    fn test_expiry_boundary_is_exclusive() {
        let mut ledger = DiscountLedger::new();
        ledger.apply(promo(10.0, Some(90)), 100.0, t0()).unwrap();
        assert!(ledger.is_valid(t0() + Duration::minutes(89)));
        assert!(!ledger.is_valid(t0() + Duration::minutes(90)));
        assert!(!ledger.is_valid(t0() + Duration::minutes(91)));
        assert!(ledger.discount_amount(t0() + Duration::minutes(91)).abs() < f64::EPSILON);
    }

    #[test]
    fn test_validity_never_returns_after_expiry() {
        let mut ledger = DiscountLedger::new();
        ledger.apply(promo(10.0, Some(30)), 100.0, t0()).unwrap();
        let mut seen_invalid = false;
        for minute in 0..120 {
            let valid = ledger.is_valid(t0() + Duration::minutes(minute));
            if seen_invalid {
                assert!(!valid, "became valid again at minute {}", minute);
            }
            seen_invalid |= !valid;
        }
        assert!(seen_invalid);
    }

    #[test]
    fn test_apply_replaces_instead_of_stacking() {
        let mut ledger = DiscountLedger::new();
        ledger.apply(promo(20.0, Some(5)), 100.0, t0()).unwrap();
        let voucher = DiscountClaim {
            percentage: 5.0,
            kind: DiscountKind::Voucher,
            code: None,
            expires_in_minutes: None,
        };
        ledger.apply(voucher, 200.0, t0()).unwrap();

        let held = ledger.current().unwrap();
        assert_eq!(held.kind, DiscountKind::Voucher);
        assert!((held.discount_amount - 10.0).abs() < 0.01);
        assert!(held.expires_at.is_none());
    }

    #[test]
    fn test_out_of_range_percentage_rejected_and_state_kept() {
        let mut ledger = DiscountLedger::new();
        ledger.apply(promo(20.0, None), 100.0, t0()).unwrap();
        let before = ledger.clone();

        for bad in [-1.0, 100.01, f64::NAN, f64::INFINITY] {
            let err = ledger.apply(promo(bad, None), 100.0, t0()).unwrap_err();
            assert!(matches!(err, FareError::ContractViolation(_)));
        }
        assert_eq!(ledger, before);
    }

    #[test]
    fn test_percentage_bounds_accepted() {
        let mut ledger = DiscountLedger::new();
        assert!(ledger.apply(promo(0.0, None), 100.0, t0()).is_ok());
        let full = ledger.apply(promo(100.0, None), 100.0, t0()).unwrap();
        assert!((full.discount_amount - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut ledger = DiscountLedger::new();
        ledger.apply(promo(20.0, None), 100.0, t0()).unwrap();
        ledger.reset();
        let once = ledger.clone();
        ledger.reset();
        assert_eq!(ledger, once);
        assert!(ledger.is_empty());
        assert!(!ledger.is_valid(t0()));
    }

    #[test]
    fn test_clear_if_expired() {
        let mut ledger = DiscountLedger::new();
        ledger.apply(promo(20.0, Some(10)), 100.0, t0()).unwrap();
        assert!(!ledger.clear_if_expired(t0() + Duration::minutes(5)));
        assert!(!ledger.is_empty());
        assert!(ledger.clear_if_expired(t0() + Duration::minutes(10)));
        assert!(ledger.is_empty());
        assert!(!ledger.clear_if_expired(t0() + Duration::minutes(20)));
    }

    #[test]
    fn test_describe_reports_expired_discount_without_clearing() {
        let mut ledger = DiscountLedger::new();
        ledger.apply(promo(20.0, Some(10)), 100.0, t0()).unwrap();

        let snapshot = ledger.describe(t0() + Duration::minutes(11));
        assert!(!snapshot.is_valid);
        assert_eq!(snapshot.discount.unwrap().code.as_deref(), Some("WELCOME20"));
        assert!(!ledger.is_empty());

        assert_eq!(DiscountLedger::new().describe(t0()), DiscountSnapshot::empty());
    }
}
