//! Per-session store state.
//!
//! One [`StoreState`] is constructed per storefront session. There is no
//! process-wide singleton: whoever drives the store owns the instance
//! and mutates it through the catalog/cart/ui methods.

use forge_fitness_core::{Coordinate, ProductId};
use serde::{Deserialize, Serialize};

use crate::cart::Cart;
use crate::catalog::{Catalog, Collection};
use crate::fixtures;
use crate::inventory::{InventoryResolver, Resolution};
use crate::ui::UiState;

/// The complete state tree for one storefront session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreState {
    /// Products and the pricing engine.
    pub catalog: Catalog,
    /// The cart ledger.
    pub cart: Cart,
    /// Presentation state.
    pub ui: UiState,
    collections: Vec<Collection>,
    resolver: InventoryResolver,
}

impl StoreState {
    /// A fresh session over the demo fixtures.
    #[must_use]
    pub fn new() -> Self {
        Self::with_catalog(fixtures::catalog())
    }

    /// A session over a custom catalog; collections and store locations
    /// still come from the fixtures.
    #[must_use]
    pub fn with_catalog(catalog: Catalog) -> Self {
        Self {
            catalog,
            cart: Cart::new(),
            ui: UiState::new(),
            collections: fixtures::collections(),
            resolver: InventoryResolver::new(fixtures::locations()),
        }
    }

    /// Curated collections, in fixture order.
    #[must_use]
    pub fn collections(&self) -> &[Collection] {
        &self.collections
    }

    /// The nearest-location inventory resolver.
    #[must_use]
    pub const fn resolver(&self) -> &InventoryResolver {
        &self.resolver
    }

    /// Nearest-store inventory for a product, given the caller's
    /// position as reported so far.
    #[must_use]
    pub fn store_availability(
        &self,
        coordinate: Option<Coordinate>,
        product_id: &ProductId,
    ) -> Resolution<'_> {
        self.resolver.resolve(coordinate, product_id)
    }
}

impl Default for StoreState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use forge_fitness_core::LocationId;

    use super::*;

    #[test]
    fn test_new_session_is_empty_and_loaded() {
        let state = StoreState::new();
        assert!(state.cart.is_empty());
        assert_eq!(state.catalog.products().len(), 10);
        assert_eq!(state.collections().len(), 3);
        assert_eq!(state.resolver().locations().len(), 3);
    }

    #[test]
    fn test_sessions_are_independent() {
        let mut a = StoreState::new();
        let b = StoreState::new();

        let product = a.catalog.products()[0].clone();
        a.cart
            .add_item(product.clone(), product.variants[0].clone(), 1)
            .unwrap();

        assert_eq!(a.cart.item_count(), 1);
        assert_eq!(b.cart.item_count(), 0);
    }

    #[test]
    fn test_state_tree_serializes_for_snapshots() {
        let state = StoreState::new();
        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["catalog"]["products"][0]["id"], "1");
        assert_eq!(json["cart"]["item_count"], 0);
    }

    #[test]
    fn test_store_availability_from_manhattan() {
        let state = StoreState::new();
        let resolution =
            state.store_availability(Some(Coordinate::new(40.73, -73.99)), &ProductId::new("1"));

        match resolution {
            Resolution::Resolved { location, on_hand } => {
                assert_eq!(location.id, LocationId::new("downtown"));
                assert_eq!(on_hand, 5);
            }
            Resolution::Pending => panic!("expected a resolved lookup"),
        }
    }
}
