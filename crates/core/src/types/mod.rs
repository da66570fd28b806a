//! Core types for Forge Fitness.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod geo;
pub mod id;
pub mod price;

pub use geo::Coordinate;
pub use id::*;
pub use price::{CurrencyCode, Price, PriceAdjustment};
