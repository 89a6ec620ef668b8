//! Domain services

pub mod capacity;
pub mod discount_ledger;
pub mod fare_finalizer;
pub mod rate_card;

pub use capacity::check_capacity;
pub use discount_ledger::DiscountLedger;
pub use fare_finalizer::finalize_fare;
pub use rate_card::{resolve_base_fare, resolve_one_way_fare};
