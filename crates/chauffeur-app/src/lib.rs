//! Application service layer - booking session, config, repositories

pub mod app;
pub mod config;
pub mod repository;
