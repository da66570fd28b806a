//! Forge Fitness Core - Shared types library.
//!
//! This crate provides common types used across all Forge Fitness
//! components:
//! - `storefront` - The in-memory storefront domain (catalog, cart, inventory)
//! - `cli` - Command-line driver for demos and smoke-testing
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no global state. Everything
//! here is a plain value that the storefront crate composes into its state
//! tree.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, money, and coordinates

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
