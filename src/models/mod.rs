//! Diesel row structs and their conversions to domain entities.

pub mod center;
pub mod config;
pub mod stock;
