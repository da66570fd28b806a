//! Shared helpers for Forge Fitness scenario tests.
//!
//! The actual tests live under `tests/`; this library only carries the
//! fixtures and assertions they share.

#![cfg_attr(not(test), forbid(unsafe_code))]

use forge_fitness_core::Coordinate;
use forge_fitness_storefront::StoreState;
use forge_fitness_storefront::cart::Cart;
use rust_decimal::Decimal;

/// A caller position near Union Square, Manhattan. The downtown fixture
/// store is the nearest of the three to this point.
pub const UNION_SQUARE: Coordinate = Coordinate::new(40.73, -73.99);

/// A fresh demo session.
#[must_use]
pub fn session() -> StoreState {
    StoreState::new()
}

/// Assert that the cart's derived fields equal totals recomputed from
/// scratch over its line list.
///
/// # Panics
///
/// Panics when `total` or `item_count` has drifted from the lines.
pub fn assert_totals_consistent(cart: &Cart) {
    let expected_total: Decimal = cart
        .lines()
        .iter()
        .map(|l| l.variant.price.amount * Decimal::from(l.quantity))
        .sum();
    let expected_count: u32 = cart.lines().iter().map(|l| l.quantity).sum();

    assert_eq!(cart.total().amount, expected_total, "total drifted");
    assert_eq!(cart.item_count(), expected_count, "item_count drifted");
}
