//! Domain model types

pub mod discount;
pub mod fare;
pub mod ride;
pub mod trip;
pub mod vehicle;

pub use discount::{Discount, DiscountClaim, DiscountKind, DiscountSnapshot};
pub use fare::FareResult;
pub use ride::{RideRecord, RideStatus};
pub use trip::{PartySize, PricingPolicy, TripRequest, TripType};
pub use vehicle::Vehicle;
