//! Store locations and nearest-location inventory resolution.
//!
//! Given the caller's coordinate, the resolver ranks a fixed set of
//! store locations by great-circle distance and reports the nearest
//! store's on-hand count for a product. Coordinate acquisition is the
//! caller's concern (see [`GeolocationProvider`]); until a coordinate is
//! available, resolution stays [`Resolution::Pending`] rather than
//! failing.

use std::collections::HashMap;

use forge_fitness_core::{Coordinate, LocationId, ProductId};
use serde::{Deserialize, Serialize};

/// A physical store with a fixed inventory snapshot.
///
/// The location set is read-only at runtime; counts are demo fixtures,
/// not live stock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreLocation {
    pub id: LocationId,
    pub name: String,
    pub address: String,
    pub coordinate: Coordinate,
    /// On-hand unit count per product id.
    pub inventory: HashMap<ProductId, u32>,
}

impl StoreLocation {
    /// On-hand count for a product; 0 when the product has no entry.
    #[must_use]
    pub fn on_hand(&self, product_id: &ProductId) -> u32 {
        self.inventory.get(product_id).copied().unwrap_or(0)
    }
}

/// Outcome of a nearest-location inventory lookup.
///
/// There is no error state: an unavailable coordinate suspends
/// resolution, and a later call with a coordinate resolves it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Resolution<'a> {
    /// The caller's coordinate is not available yet.
    Pending,
    /// The nearest store and its on-hand count for the requested product.
    Resolved {
        location: &'a StoreLocation,
        on_hand: u32,
    },
}

/// Source of the caller's current position.
///
/// Implemented by the presentation layer over whatever geolocation API
/// it has; `None` means the position is not (yet) known.
pub trait GeolocationProvider {
    fn current(&self) -> Option<Coordinate>;
}

/// Ranks a fixed set of store locations by distance from the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryResolver {
    locations: Vec<StoreLocation>,
}

impl InventoryResolver {
    /// Create a resolver over a fixed location set.
    #[must_use]
    pub fn new(locations: Vec<StoreLocation>) -> Self {
        Self { locations }
    }

    /// The location set, in fixture order.
    #[must_use]
    pub fn locations(&self) -> &[StoreLocation] {
        &self.locations
    }

    /// The location nearest to `coordinate` by Haversine distance.
    ///
    /// Ties keep the first-encountered location (stable minimum).
    /// Returns `None` only for an empty location set.
    #[must_use]
    pub fn nearest(&self, coordinate: Coordinate) -> Option<&StoreLocation> {
        let mut best: Option<(&StoreLocation, f64)> = None;
        for location in &self.locations {
            let distance = coordinate.distance_km(&location.coordinate);
            // Strict `<` keeps the earlier location on a tie.
            if best.is_none_or(|(_, best_distance)| distance < best_distance) {
                best = Some((location, distance));
            }
        }
        best.map(|(location, _)| location)
    }

    /// Resolve the nearest store and its on-hand count for `product_id`.
    ///
    /// With no coordinate the resolution is [`Resolution::Pending`]; a
    /// repeated call for another product while the coordinate is still
    /// unavailable stays pending.
    #[must_use]
    pub fn resolve(
        &self,
        coordinate: Option<Coordinate>,
        product_id: &ProductId,
    ) -> Resolution<'_> {
        let Some(coordinate) = coordinate else {
            return Resolution::Pending;
        };

        match self.nearest(coordinate) {
            Some(location) => {
                let on_hand = location.on_hand(product_id);
                tracing::debug!(
                    product = %product_id,
                    location = %location.id,
                    on_hand,
                    "nearest location resolved"
                );
                Resolution::Resolved { location, on_hand }
            }
            // An empty location set has nothing to rank.
            None => Resolution::Pending,
        }
    }

    /// Resolve using a [`GeolocationProvider`] for the coordinate.
    #[must_use]
    pub fn resolve_with(
        &self,
        provider: &dyn GeolocationProvider,
        product_id: &ProductId,
    ) -> Resolution<'_> {
        self.resolve(provider.current(), product_id)
    }
}
