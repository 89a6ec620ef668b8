//! Booking Session - fare quoting and discount handling for one user
//!
//! A session owns its discount ledger and time source. Each user session
//! gets its own instance; nothing is shared between sessions.
//!
//! Workflow:
//! 1. Quote fares as the user changes trip parameters or vehicle
//! 2. Claim a voucher or promo code against the current fare
//! 3. Confirm the booking into a pending ride record
//! 4. Ledger is reset once the booking is confirmed or the flow is left

use chauffeur_domain::clock::{Clock, SystemClock};
use chauffeur_domain::model::{
    Discount, DiscountClaim, DiscountSnapshot, FareResult, PartySize, PricingPolicy, RideRecord,
    TripRequest, Vehicle,
};
use chauffeur_domain::repository::PromoCodeRegistry;
use chauffeur_domain::service::{check_capacity, finalize_fare, resolve_base_fare, DiscountLedger};
use chauffeur_types::{FareError, Result};
use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

pub struct BookingSession<C: Clock = SystemClock> {
    ledger: DiscountLedger,
    policy: PricingPolicy,
    clock: C,
}

impl BookingSession<SystemClock> {
    pub fn with_system_clock(policy: PricingPolicy) -> Self {
        Self::new(policy, SystemClock)
    }
}

impl<C: Clock> BookingSession<C> {
    pub fn new(policy: PricingPolicy, clock: C) -> Self {
        Self {
            ledger: DiscountLedger::new(),
            policy,
            clock,
        }
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    pub fn ledger(&self) -> &DiscountLedger {
        &self.ledger
    }

    pub fn base_fare(
        &self,
        vehicle: &Vehicle,
        trip: &TripRequest,
    ) -> std::result::Result<f64, FareError> {
        resolve_base_fare(vehicle, trip, &self.policy)
    }

    /// Fare for the current trip with the held discount, if still valid
    pub fn quote(
        &self,
        vehicle: &Vehicle,
        trip: &TripRequest,
    ) -> std::result::Result<FareResult, FareError> {
        self.quote_at(vehicle, trip, self.now())
    }

    fn quote_at(
        &self,
        vehicle: &Vehicle,
        trip: &TripRequest,
        now: DateTime<Utc>,
    ) -> std::result::Result<FareResult, FareError> {
        let base_fare = self.base_fare(vehicle, trip)?;
        let fare = finalize_fare(base_fare, &self.ledger, now);
        debug!(
            vehicle = %vehicle.id,
            trip_type = %trip.trip_type(),
            base_fare = fare.base_fare,
            discount = fare.discount_amount,
            "fare quoted"
        );
        Ok(fare)
    }

    /// Apply an already-validated claim against `base_fare`
    pub fn apply_discount(
        &mut self,
        claim: DiscountClaim,
        base_fare: f64,
    ) -> std::result::Result<&Discount, FareError> {
        let now = self.clock.now();
        self.ledger.apply(claim, base_fare, now)
    }

    /// Validate `code` against the registry and apply it to the current fare
    pub fn claim_code<R: PromoCodeRegistry + ?Sized>(
        &mut self,
        registry: &R,
        code: &str,
        vehicle: &Vehicle,
        trip: &TripRequest,
    ) -> Result<Discount> {
        let Some(promo) = registry.lookup(code)? else {
            warn!(code, "discount code rejected");
            return Err(FareError::UnknownCode(code.to_string()).into());
        };
        let base_fare = self.base_fare(vehicle, trip)?;
        let discount = self.apply_discount(promo.to_claim(), base_fare)?;
        Ok(discount.clone())
    }

    pub fn remove_discount(&mut self) {
        self.ledger.reset();
    }

    pub fn describe_discount(&self) -> DiscountSnapshot {
        self.ledger.describe(self.now())
    }

    /// Check capacity, price the trip and produce a pending ride record.
    ///
    /// The ledger is reset afterwards: the next booking starts a new fare
    /// context.
    pub fn confirm(
        &mut self,
        vehicle: &Vehicle,
        trip: &TripRequest,
        party: &PartySize,
    ) -> std::result::Result<RideRecord, FareError> {
        check_capacity(vehicle, party)?;

        let now = self.clock.now();
        self.ledger.clear_if_expired(now);
        // One reading of the clock for both the expiry check and the fare
        let fare = self.quote_at(vehicle, trip, now)?;
        let discount = self.ledger.current().cloned();

        let record = RideRecord::new(vehicle.id.clone(), *trip, fare, discount, now);
        info!(
            ride = %record.id,
            vehicle = %record.vehicle_id,
            final_fare = record.fare.final_fare,
            "booking confirmed"
        );
        self.ledger.reset();
        Ok(record)
    }

    /// Leave the booking flow, dropping any held discount
    pub fn leave(&mut self) {
        self.ledger.reset();
    }
}
