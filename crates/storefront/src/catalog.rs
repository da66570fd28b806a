//! Product catalog and pricing engine.
//!
//! The [`Catalog`] owns the product list, the immutable baseline the
//! fixtures were loaded from, and a per-product price-change history.
//! All price mutation goes through the methods here; when a product's
//! base price changes, every variant price is rescaled by the same ratio
//! so relative pricing stays consistent.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use forge_fitness_core::{CollectionId, Price, PriceAdjustment, ProductId, VariantId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{Result, StoreError};

// =============================================================================
// Catalog Types
// =============================================================================

/// A purchasable configuration of a product (size/color/etc.).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductVariant {
    /// Variant id, unique within the parent product.
    pub id: VariantId,
    /// Display title (e.g., "45lb Standard").
    pub title: String,
    /// Variant price; rescaled when the parent product's price changes.
    pub price: Price,
    /// Whether the variant can currently be purchased.
    pub available: bool,
    /// Optional color option.
    pub color: Option<String>,
    /// Optional size option.
    pub size: Option<String>,
    /// Optional variant-specific image URL.
    pub image: Option<String>,
}

/// A catalog product.
///
/// Invariants: `price` is non-negative and `variants` is non-empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    /// Base price; variant prices move proportionally with it.
    pub price: Price,
    /// Original price shown struck-through when discounted.
    pub compare_at_price: Option<Price>,
    /// Image URLs, first entry is the primary image.
    pub images: Vec<String>,
    pub variants: Vec<ProductVariant>,
    pub tags: Vec<String>,
    pub available: bool,
    pub description: String,
    pub vendor: String,
    /// Merchandising type (e.g., "Strength Equipment").
    pub product_type: String,
}

impl Product {
    /// Look up a variant by id.
    #[must_use]
    pub fn variant(&self, variant_id: &VariantId) -> Option<&ProductVariant> {
        self.variants.iter().find(|v| &v.id == variant_id)
    }
}

/// A curated group of products.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Collection {
    pub id: CollectionId,
    pub title: String,
    pub description: String,
    /// Hero image URL.
    pub image: String,
    /// Member products, by id into the catalog.
    pub product_ids: Vec<ProductId>,
}

/// One recorded price change for a product.
///
/// Records are append-only; only [`Catalog::reset_prices`] clears them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceChange {
    pub old_price: Price,
    pub new_price: Price,
    pub timestamp: DateTime<Utc>,
}

// =============================================================================
// Catalog
// =============================================================================

/// The product catalog and its pricing engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    products: Vec<Product>,
    /// Snapshot of the products as loaded, for [`Catalog::reset_prices`].
    baseline: Vec<Product>,
    history: HashMap<ProductId, Vec<PriceChange>>,
}

impl Catalog {
    /// Create a catalog from an initial product list.
    ///
    /// The list is also retained as the baseline that `reset_prices`
    /// restores.
    #[must_use]
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            baseline: products.clone(),
            products,
            history: HashMap::new(),
        }
    }

    /// All products, in catalog order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by id.
    #[must_use]
    pub fn find(&self, product_id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == product_id)
    }

    /// Price-change history for a product, oldest first.
    ///
    /// Products that never had a price change have an empty history.
    #[must_use]
    pub fn price_history(&self, product_id: &ProductId) -> &[PriceChange] {
        self.history
            .get(product_id)
            .map_or(&[], Vec::as_slice)
    }

    /// Set a product's base price, recording the change and rescaling
    /// every variant by `new / old`.
    ///
    /// # Errors
    ///
    /// - [`StoreError::ProductNotFound`] if the product id is unknown.
    /// - [`StoreError::ZeroBasePrice`] if the current base price is zero;
    ///   the rescaling ratio is undefined and nothing is mutated.
    pub fn set_price(&mut self, product_id: &ProductId, new_price: Price) -> Result<()> {
        self.set_price_at(product_id, new_price, Utc::now())
    }

    /// [`Catalog::set_price`] with an explicit timestamp for the history
    /// record. The clock stays outside the engine so tests can pin it.
    pub fn set_price_at(
        &mut self,
        product_id: &ProductId,
        new_price: Price,
        at: DateTime<Utc>,
    ) -> Result<()> {
        let product = self
            .products
            .iter_mut()
            .find(|p| &p.id == product_id)
            .ok_or_else(|| StoreError::ProductNotFound(product_id.clone()))?;

        let old_price = product.price;
        if old_price.is_zero() {
            return Err(StoreError::ZeroBasePrice(product_id.clone()));
        }

        self.history
            .entry(product_id.clone())
            .or_default()
            .push(PriceChange {
                old_price,
                new_price,
                timestamp: at,
            });

        product.price = new_price;

        let ratio = new_price.amount / old_price.amount;
        for variant in &mut product.variants {
            variant.price = variant.price.rescale(ratio);
        }

        tracing::debug!(
            product = %product_id,
            old = %old_price.amount,
            new = %new_price.amount,
            "price updated"
        );
        Ok(())
    }

    /// Raise a product's base price by `percentage` percent.
    ///
    /// # Errors
    ///
    /// Same as [`Catalog::set_price`].
    pub fn increase_price(&mut self, product_id: &ProductId, percentage: Decimal) -> Result<()> {
        self.adjust_price_at(product_id, percentage, PriceAdjustment::Increase, Utc::now())
    }

    /// Lower a product's base price by `percentage` percent.
    ///
    /// # Errors
    ///
    /// Same as [`Catalog::set_price`].
    pub fn decrease_price(&mut self, product_id: &ProductId, percentage: Decimal) -> Result<()> {
        self.adjust_price_at(product_id, percentage, PriceAdjustment::Decrease, Utc::now())
    }

    /// Apply a percentage adjustment with an explicit timestamp.
    ///
    /// The new base price is `round2(old × (1 ± percentage/100))`, then
    /// delegated to [`Catalog::set_price_at`].
    ///
    /// # Errors
    ///
    /// Same as [`Catalog::set_price`].
    pub fn adjust_price_at(
        &mut self,
        product_id: &ProductId,
        percentage: Decimal,
        adjustment: PriceAdjustment,
        at: DateTime<Utc>,
    ) -> Result<()> {
        let current = self
            .find(product_id)
            .ok_or_else(|| StoreError::ProductNotFound(product_id.clone()))?
            .price;
        let new_price = current.apply_percentage(percentage, adjustment);
        self.set_price_at(product_id, new_price, at)
    }

    /// Apply a percentage adjustment to every product in the catalog.
    ///
    /// Each product gets its own history entry. Repeated calls compound:
    /// two 5% increases multiply to ~10.25%, not 10%. Products whose base
    /// price is zero are skipped with a warning rather than aborting the
    /// whole batch.
    pub fn bulk_update_prices(&mut self, percentage: Decimal, adjustment: PriceAdjustment) {
        self.bulk_update_prices_at(percentage, adjustment, Utc::now());
    }

    /// [`Catalog::bulk_update_prices`] with an explicit timestamp.
    pub fn bulk_update_prices_at(
        &mut self,
        percentage: Decimal,
        adjustment: PriceAdjustment,
        at: DateTime<Utc>,
    ) {
        let ids: Vec<ProductId> = self.products.iter().map(|p| p.id.clone()).collect();
        for id in ids {
            if let Err(err) = self.adjust_price_at(&id, percentage, adjustment, at) {
                tracing::warn!(product = %id, error = %err, "skipping product in bulk update");
            }
        }
    }

    /// Restore every product to its baseline price and clear all history.
    pub fn reset_prices(&mut self) {
        self.products = self.baseline.clone();
        self.history.clear();
        tracing::debug!("catalog prices reset to baseline");
    }
}
