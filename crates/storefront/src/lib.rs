//! Forge Fitness Storefront - In-memory storefront domain.
//!
//! This crate implements the state tree behind the Forge Fitness demo
//! storefront: an in-memory product catalog with percentage-based price
//! management, a cart ledger with derived totals, and a nearest-store
//! inventory resolver driven by the caller's geolocation.
//!
//! # Architecture
//!
//! There is no server and no persistence. Everything hangs off a
//! [`StoreState`] constructed per session from hardcoded fixtures; a
//! presentation layer (not part of this crate) calls the mutation methods
//! and renders the result.
//!
//! - [`catalog`] - Products, collections, and the pricing engine
//! - [`cart`] - Cart ledger with derived `total` / `item_count`
//! - [`inventory`] - Store locations and nearest-location resolution
//! - [`browse`] - Catalog filtering, sorting, and search
//! - [`ui`] - Presentation state and the notification list
//! - [`fixtures`] - The hardcoded demo catalog, collections, and stores

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod browse;
pub mod cart;
pub mod catalog;
pub mod error;
pub mod fixtures;
pub mod inventory;
pub mod state;
pub mod ui;

pub use error::{Result, StoreError};
pub use state::StoreState;
