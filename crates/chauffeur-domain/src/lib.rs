//! Domain layer for chauffeur fare computation
//!
//! Pure models and services: rate card resolution, the discount ledger,
//! fare finalization, capacity checks and the ride status lifecycle.
//! Nothing here performs I/O; repository traits describe the collaborators
//! that the infrastructure layer implements.

pub mod clock;
pub mod model;
pub mod repository;
pub mod service;
