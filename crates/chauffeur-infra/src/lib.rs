//! Infrastructure layer - TOML loaders and file-backed repositories

pub mod persistence;
pub mod promo_registry_loader;
pub mod rate_card_loader;
