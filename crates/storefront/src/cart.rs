//! Cart ledger with derived totals.
//!
//! The cart stores full product/variant snapshots captured at add time,
//! so later catalog price changes never alter a line that is already in
//! the cart. `total` and `item_count` are derived fields: they are
//! recomputed after every mutation and are never settable on their own.

use forge_fitness_core::{Price, ProductId, VariantId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::catalog::{Product, ProductVariant};
use crate::error::{Result, StoreError};

/// One distinct (product, variant) entry in the cart.
///
/// Keyed by `(product.id, variant.id)`; quantity is always ≥ 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    /// Product snapshot as of when the line was added.
    pub product: Product,
    /// Variant snapshot as of when the line was added.
    pub variant: ProductVariant,
    pub quantity: u32,
}

impl CartLine {
    /// Price of this line: variant price × quantity.
    #[must_use]
    pub fn line_total(&self) -> Price {
        Price::new(
            self.variant.price.amount * Decimal::from(self.quantity),
            self.variant.price.currency_code,
        )
    }
}

/// The shopping cart.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Cart {
    /// Lines in insertion order.
    lines: Vec<CartLine>,
    /// Derived: `Σ variant.price × quantity`.
    total: Price,
    /// Derived: `Σ quantity`.
    item_count: u32,
    /// Whether the cart drawer is open. Pure UI flag.
    is_open: bool,
}

impl Cart {
    /// Create an empty, closed cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Sum of `variant.price × quantity` over all lines.
    #[must_use]
    pub const fn total(&self) -> Price {
        self.total
    }

    /// Sum of quantities over all lines.
    #[must_use]
    pub const fn item_count(&self) -> u32 {
        self.item_count
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Whether the cart drawer is open.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.is_open
    }

    /// Add `quantity` units of a variant to the cart.
    ///
    /// If a line with the same `(product.id, variant.id)` already exists
    /// its quantity is incremented; otherwise a new line is appended at
    /// the end. The snapshots are taken by value, so the line keeps the
    /// prices it was added with.
    ///
    /// # Errors
    ///
    /// [`StoreError::InvalidQuantity`] if `quantity` is 0.
    pub fn add_item(
        &mut self,
        product: Product,
        variant: ProductVariant,
        quantity: u32,
    ) -> Result<()> {
        if quantity < 1 {
            return Err(StoreError::InvalidQuantity(quantity));
        }

        if let Some(line) = self
            .lines
            .iter_mut()
            .find(|l| l.product.id == product.id && l.variant.id == variant.id)
        {
            line.quantity += quantity;
        } else {
            self.lines.push(CartLine {
                product,
                variant,
                quantity,
            });
        }

        self.recompute_totals();
        Ok(())
    }

    /// Remove the line matching `(product_id, variant_id)`.
    ///
    /// A miss is a no-op, not an error.
    pub fn remove_item(&mut self, product_id: &ProductId, variant_id: &VariantId) {
        self.lines
            .retain(|l| !(&l.product.id == product_id && &l.variant.id == variant_id));
        self.recompute_totals();
    }

    /// Set the quantity of the matching line to exactly `quantity`.
    ///
    /// A quantity of 0 removes the line instead of persisting a
    /// non-positive quantity. A miss is a no-op.
    pub fn update_quantity(
        &mut self,
        product_id: &ProductId,
        variant_id: &VariantId,
        quantity: u32,
    ) {
        if quantity == 0 {
            self.remove_item(product_id, variant_id);
            return;
        }

        if let Some(line) = self
            .lines
            .iter_mut()
            .find(|l| &l.product.id == product_id && &l.variant.id == variant_id)
        {
            line.quantity = quantity;
        }

        self.recompute_totals();
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.recompute_totals();
    }

    /// Flip the cart drawer open/closed.
    pub const fn toggle(&mut self) {
        self.is_open = !self.is_open;
    }

    /// Set the cart drawer visibility.
    pub const fn set_open(&mut self, open: bool) {
        self.is_open = open;
    }

    /// Recompute the derived `total` and `item_count` from the line list.
    ///
    /// Runs after every mutation; O(n) in the number of lines.
    fn recompute_totals(&mut self) {
        self.total = Price::usd(
            self.lines
                .iter()
                .map(|l| l.variant.price.amount * Decimal::from(l.quantity))
                .sum(),
        );
        self.item_count = self.lines.iter().map(|l| l.quantity).sum();
        tracing::trace!(
            lines = self.lines.len(),
            total = %self.total.amount,
            item_count = self.item_count,
            "cart totals recomputed"
        );
    }
}

#[cfg(test)]
mod tests {
    use forge_fitness_core::{Price, VariantId};
    use rust_decimal_macros::dec;

    use super::*;
    use crate::fixtures;

    fn first_product_and_variant() -> (Product, ProductVariant) {
        let catalog = fixtures::catalog();
        let product = catalog.products()[0].clone();
        let variant = product.variants[0].clone();
        (product, variant)
    }

    #[test]
    fn test_add_item_merges_on_same_key() {
        let (product, variant) = first_product_and_variant();
        let mut cart = Cart::new();

        cart.add_item(product.clone(), variant.clone(), 2).unwrap();
        cart.add_item(product, variant, 3).unwrap();

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].quantity, 5);
        assert_eq!(cart.item_count(), 5);
    }

    #[test]
    fn test_add_item_rejects_zero_quantity() {
        let (product, variant) = first_product_and_variant();
        let mut cart = Cart::new();

        let err = cart.add_item(product, variant, 0).unwrap_err();
        assert_eq!(err, StoreError::InvalidQuantity(0));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_different_variants_get_separate_lines() {
        let catalog = fixtures::catalog();
        let product = catalog.products()[0].clone();
        let mut cart = Cart::new();

        cart.add_item(product.clone(), product.variants[0].clone(), 1)
            .unwrap();
        cart.add_item(product.clone(), product.variants[1].clone(), 1)
            .unwrap();

        assert_eq!(cart.lines().len(), 2);
    }

    #[test]
    fn test_update_quantity_sets_exactly() {
        let (product, variant) = first_product_and_variant();
        let mut cart = Cart::new();
        cart.add_item(product.clone(), variant.clone(), 4).unwrap();

        cart.update_quantity(&product.id, &variant.id, 2);
        assert_eq!(cart.lines()[0].quantity, 2);
        assert_eq!(cart.item_count(), 2);
    }

    #[test]
    fn test_update_quantity_zero_removes_line() {
        let (product, variant) = first_product_and_variant();
        let mut cart = Cart::new();
        cart.add_item(product.clone(), variant.clone(), 1).unwrap();

        cart.update_quantity(&product.id, &variant.id, 0);
        assert!(cart.is_empty());
        assert_eq!(cart.total().amount, Decimal::ZERO);
        assert_eq!(cart.item_count(), 0);
    }

    #[test]
    fn test_remove_missing_line_is_noop() {
        let (product, variant) = first_product_and_variant();
        let mut cart = Cart::new();
        cart.add_item(product, variant, 1).unwrap();

        cart.remove_item(&"ghost".into(), &VariantId::new("ghost-1"));
        assert_eq!(cart.lines().len(), 1);
    }

    #[test]
    fn test_totals_follow_line_prices() {
        let (product, variant) = first_product_and_variant();
        let price = variant.price.amount;
        let mut cart = Cart::new();

        cart.add_item(product.clone(), variant.clone(), 3).unwrap();
        assert_eq!(cart.total().amount, price * dec!(3));

        cart.clear();
        assert_eq!(cart.total(), Price::usd(Decimal::ZERO));
    }

    #[test]
    fn test_toggle_does_not_touch_totals() {
        let (product, variant) = first_product_and_variant();
        let mut cart = Cart::new();
        cart.add_item(product, variant, 2).unwrap();
        let total = cart.total();

        cart.toggle();
        assert!(cart.is_open());
        cart.set_open(false);
        assert!(!cart.is_open());
        assert_eq!(cart.total(), total);
    }
}
