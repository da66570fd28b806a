//! Catalog filtering, sorting, and search.
//!
//! Pure functions over a product slice; the UI holds a
//! [`ProductFilters`] value and re-runs [`filter_and_sort`] whenever it
//! changes.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::catalog::{Collection, Product};

/// Availability filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Availability {
    #[default]
    All,
    InStock,
    OutOfStock,
}

/// Product list sort order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortOption {
    /// Catalog order.
    #[default]
    Default,
    PriceLow,
    PriceHigh,
    /// Lexicographic by title.
    Name,
    /// Reverse catalog order (fixtures are oldest-first).
    Newest,
}

/// Filter criteria for a collection page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductFilters {
    /// Inclusive base-price bounds.
    pub price_min: Decimal,
    pub price_max: Decimal,
    /// Selected tags; a product matches if it carries any of them.
    pub tags: Vec<String>,
    pub availability: Availability,
    /// Restrict to one vendor; `None` means all vendors.
    pub vendor: Option<String>,
}

impl Default for ProductFilters {
    fn default() -> Self {
        Self {
            price_min: Decimal::ZERO,
            price_max: dec!(1000),
            tags: Vec::new(),
            availability: Availability::All,
            vendor: None,
        }
    }
}

impl ProductFilters {
    /// Whether a product passes every active criterion.
    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        if product.price.amount < self.price_min || product.price.amount > self.price_max {
            return false;
        }

        if !self.tags.is_empty() && !self.tags.iter().any(|t| product.tags.contains(t)) {
            return false;
        }

        match self.availability {
            Availability::All => {}
            Availability::InStock if !product.available => return false,
            Availability::OutOfStock if product.available => return false,
            _ => {}
        }

        if let Some(vendor) = &self.vendor {
            if &product.vendor != vendor {
                return false;
            }
        }

        true
    }

    /// Toggle a tag in or out of the selected set.
    pub fn toggle_tag(&mut self, tag: &str) {
        if let Some(pos) = self.tags.iter().position(|t| t == tag) {
            self.tags.remove(pos);
        } else {
            self.tags.push(tag.to_owned());
        }
    }
}

/// Filter `products` and return references in `sort` order.
///
/// Sorts are stable, so products that compare equal keep catalog order.
#[must_use]
pub fn filter_and_sort<'a>(
    products: &'a [Product],
    filters: &ProductFilters,
    sort: SortOption,
) -> Vec<&'a Product> {
    let mut filtered: Vec<&Product> = products.iter().filter(|p| filters.matches(p)).collect();

    match sort {
        SortOption::Default => {}
        SortOption::PriceLow => filtered.sort_by(|a, b| a.price.amount.cmp(&b.price.amount)),
        SortOption::PriceHigh => filtered.sort_by(|a, b| b.price.amount.cmp(&a.price.amount)),
        SortOption::Name => filtered.sort_by(|a, b| a.title.cmp(&b.title)),
        SortOption::Newest => filtered.reverse(),
    }

    filtered
}

/// Case-insensitive search over title, tags, vendor, and type.
#[must_use]
pub fn search<'a>(products: &'a [Product], query: &str) -> Vec<&'a Product> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return products.iter().collect();
    }

    products
        .iter()
        .filter(|p| {
            p.title.to_lowercase().contains(&needle)
                || p.vendor.to_lowercase().contains(&needle)
                || p.product_type.to_lowercase().contains(&needle)
                || p.tags.iter().any(|t| t.to_lowercase().contains(&needle))
        })
        .collect()
}

/// Products belonging to a collection, in collection order.
#[must_use]
pub fn collection_products<'a>(
    products: &'a [Product],
    collection: &Collection,
) -> Vec<&'a Product> {
    collection
        .product_ids
        .iter()
        .filter_map(|id| products.iter().find(|p| &p.id == id))
        .collect()
}

/// Distinct tags across the catalog, sorted.
#[must_use]
pub fn all_tags(products: &[Product]) -> Vec<String> {
    let mut tags: Vec<String> = products.iter().flat_map(|p| p.tags.clone()).collect();
    tags.sort();
    tags.dedup();
    tags
}

/// Distinct vendors across the catalog, sorted.
#[must_use]
pub fn all_vendors(products: &[Product]) -> Vec<String> {
    let mut vendors: Vec<String> = products.iter().map(|p| p.vendor.clone()).collect();
    vendors.sort();
    vendors.dedup();
    vendors
}
