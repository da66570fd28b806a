//! Hardcoded demo data: the product catalog, curated collections, and
//! store locations with their inventory snapshots.
//!
//! All prices are decimal dollars. Inventory counts are static demo
//! values, not live stock.

use std::collections::HashMap;

use forge_fitness_core::{
    CollectionId, Coordinate, LocationId, Price, ProductId, VariantId,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::catalog::{Catalog, Collection, Product, ProductVariant};
use crate::inventory::StoreLocation;

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|&v| v.to_owned()).collect()
}

fn variant(id: &str, title: &str, amount: Decimal) -> ProductVariant {
    ProductVariant {
        id: VariantId::new(id),
        title: title.to_owned(),
        price: Price::usd(amount),
        available: true,
        color: None,
        size: None,
        image: None,
    }
}

fn color_variant(id: &str, title: &str, amount: Decimal, color: &str) -> ProductVariant {
    ProductVariant {
        color: Some(color.to_owned()),
        ..variant(id, title, amount)
    }
}

fn inventory(counts: &[(&str, u32)]) -> HashMap<ProductId, u32> {
    counts
        .iter()
        .map(|&(id, count)| (ProductId::new(id), count))
        .collect()
}

/// The demo catalog, loaded with its fixture products as the baseline.
#[must_use]
pub fn catalog() -> Catalog {
    Catalog::new(products())
}

/// The ten fixture products, in catalog order (oldest first).
#[must_use]
#[allow(clippy::too_many_lines)]
pub fn products() -> Vec<Product> {
    vec![
        Product {
            id: ProductId::new("1"),
            title: "Professional Olympic Barbell Set".to_owned(),
            price: Price::usd(dec!(599.99)),
            compare_at_price: Some(Price::usd(dec!(799.99))),
            images: strings(&[
                "https://images.unsplash.com/photo-1571019613454-1cb2f99b2d8b?w=800&h=600&fit=crop&crop=center",
                "https://images.unsplash.com/photo-1534438327276-14e5300c3a48?w=800&h=600&fit=crop&crop=center",
            ]),
            variants: vec![
                variant("1-1", "45lb Standard", dec!(599.99)),
                variant("1-2", "35lb Women's", dec!(549.99)),
            ],
            tags: strings(&["strength", "olympic", "barbell"]),
            available: true,
            description: "Professional-grade Olympic barbell set perfect for serious strength \
                          training. Made from high-quality steel with precise knurling for \
                          optimal grip."
                .to_owned(),
            vendor: "Forge Fitness".to_owned(),
            product_type: "Strength Equipment".to_owned(),
        },
        Product {
            id: ProductId::new("2"),
            title: "Adjustable Dumbbells Pro".to_owned(),
            price: Price::usd(dec!(299.99)),
            compare_at_price: Some(Price::usd(dec!(399.99))),
            images: strings(&[
                "https://images.unsplash.com/photo-1581009146145-b5ef050c2e1e?w=800&h=600&fit=crop&crop=center",
                "https://images.unsplash.com/photo-1517836357463-d25dfeac3438?w=800&h=600&fit=crop&crop=center",
            ]),
            variants: vec![
                color_variant("2-1", "5-50lbs", dec!(299.99), "Black"),
                color_variant("2-2", "5-70lbs", dec!(399.99), "Black"),
                ProductVariant {
                    available: false,
                    ..color_variant("2-3", "5-50lbs", dec!(329.99), "Red")
                },
            ],
            tags: strings(&["dumbbells", "adjustable", "home-gym"]),
            available: true,
            description: "Space-saving adjustable dumbbells that replace an entire rack. \
                          Quick-change weight system for efficient workouts."
                .to_owned(),
            vendor: "Forge Fitness".to_owned(),
            product_type: "Dumbbells".to_owned(),
        },
        Product {
            id: ProductId::new("3"),
            title: "Premium Resistance Bands Set".to_owned(),
            price: Price::usd(dec!(49.99)),
            compare_at_price: Some(Price::usd(dec!(79.99))),
            images: strings(&[
                "https://images.unsplash.com/photo-1598300042247-d088f8ab3a91?w=800&h=600&fit=crop&crop=center",
            ]),
            variants: vec![
                color_variant("3-1", "Light Resistance", dec!(39.99), "Green"),
                color_variant("3-2", "Medium Resistance", dec!(49.99), "Blue"),
                color_variant("3-3", "Heavy Resistance", dec!(59.99), "Red"),
            ],
            tags: strings(&["resistance", "bands", "portable", "cardio"]),
            available: true,
            description: "Complete resistance bands set with multiple resistance levels. \
                          Perfect for home workouts and travel."
                .to_owned(),
            vendor: "FlexFit".to_owned(),
            product_type: "Accessories".to_owned(),
        },
        Product {
            id: ProductId::new("4"),
            title: "Smart Fitness Tracker Pro".to_owned(),
            price: Price::usd(dec!(199.99)),
            compare_at_price: None,
            images: strings(&[
                "https://images.unsplash.com/photo-1575311373937-040b8e1fd5b6?w=800&h=600&fit=crop&crop=center",
            ]),
            variants: vec![
                color_variant("4-1", "Black", dec!(199.99), "Black"),
                color_variant("4-2", "White", dec!(199.99), "White"),
                ProductVariant {
                    available: false,
                    ..color_variant("4-3", "Blue", dec!(199.99), "Blue")
                },
            ],
            tags: strings(&["technology", "tracker", "smart", "fitness"]),
            available: true,
            description: "Advanced fitness tracker with heart rate monitoring, GPS, and \
                          comprehensive workout analytics."
                .to_owned(),
            vendor: "TechFit".to_owned(),
            product_type: "Technology".to_owned(),
        },
        Product {
            id: ProductId::new("5"),
            title: "Professional Kettlebell Set".to_owned(),
            price: Price::usd(dec!(149.99)),
            compare_at_price: Some(Price::usd(dec!(199.99))),
            images: strings(&[
                "https://images.unsplash.com/photo-1517963879433-6ad2b056d712?w=800&h=600&fit=crop&crop=center",
            ]),
            variants: vec![
                variant("5-1", "15lb", dec!(49.99)),
                variant("5-2", "25lb", dec!(79.99)),
                variant("5-3", "35lb", dec!(99.99)),
            ],
            tags: strings(&["kettlebell", "strength", "functional"]),
            available: true,
            description: "Cast iron kettlebells with wide handles for comfortable grip during \
                          high-intensity workouts."
                .to_owned(),
            vendor: "Forge Fitness".to_owned(),
            product_type: "Strength Equipment".to_owned(),
        },
        Product {
            id: ProductId::new("6"),
            title: "Yoga Mat Premium".to_owned(),
            price: Price::usd(dec!(79.99)),
            compare_at_price: None,
            images: strings(&[
                "https://images.unsplash.com/photo-1544367567-0f2fcb009e0b?w=800&h=600&fit=crop&crop=center",
            ]),
            variants: vec![
                color_variant("6-1", "Purple", dec!(79.99), "Purple"),
                color_variant("6-2", "Blue", dec!(79.99), "Blue"),
                color_variant("6-3", "Pink", dec!(79.99), "Pink"),
            ],
            tags: strings(&["yoga", "mat", "flexibility", "meditation"]),
            available: true,
            description: "Extra-thick yoga mat with superior grip and cushioning for all types \
                          of yoga practice."
                .to_owned(),
            vendor: "ZenFit".to_owned(),
            product_type: "Accessories".to_owned(),
        },
        Product {
            id: ProductId::new("7"),
            title: "Power Rack Station".to_owned(),
            price: Price::usd(dec!(899.99)),
            compare_at_price: Some(Price::usd(dec!(1199.99))),
            images: strings(&[
                "https://images.unsplash.com/photo-1571019614242-c5c5dee9f50b?w=800&h=600&fit=crop&crop=center",
            ]),
            variants: vec![
                variant("7-1", "Standard Height", dec!(899.99)),
                variant("7-2", "Tall Height", dec!(999.99)),
            ],
            tags: strings(&["power-rack", "strength", "squat", "safety"]),
            available: true,
            description: "Heavy-duty power rack with safety bars, pull-up bar, and multiple \
                          attachment points for comprehensive strength training."
                .to_owned(),
            vendor: "Forge Fitness".to_owned(),
            product_type: "Strength Equipment".to_owned(),
        },
        Product {
            id: ProductId::new("8"),
            title: "Foam Roller Pro".to_owned(),
            price: Price::usd(dec!(39.99)),
            compare_at_price: Some(Price::usd(dec!(59.99))),
            images: strings(&[
                "https://images.unsplash.com/photo-1571019613454-1cb2f99b2d8b?w=800&h=600&fit=crop&crop=center",
            ]),
            variants: vec![
                variant("8-1", "Medium Density", dec!(39.99)),
                variant("8-2", "High Density", dec!(49.99)),
            ],
            tags: strings(&["recovery", "foam-roller", "massage", "flexibility"]),
            available: true,
            description: "High-density foam roller for muscle recovery and myofascial release. \
                          Perfect for post-workout recovery."
                .to_owned(),
            vendor: "RecoverFit".to_owned(),
            product_type: "Recovery".to_owned(),
        },
        Product {
            id: ProductId::new("9"),
            title: "Battle Ropes Heavy Duty".to_owned(),
            price: Price::usd(dec!(129.99)),
            compare_at_price: None,
            images: strings(&[
                "https://images.unsplash.com/photo-1571019613454-1cb2f99b2d8b?w=800&h=600&fit=crop&crop=center",
            ]),
            variants: vec![
                variant("9-1", "30ft x 1.5\"", dec!(129.99)),
                variant("9-2", "40ft x 2\"", dec!(179.99)),
            ],
            tags: strings(&["battle-ropes", "cardio", "hiit", "functional"]),
            available: true,
            description: "Heavy-duty battle ropes for high-intensity interval training and \
                          functional fitness workouts."
                .to_owned(),
            vendor: "CardioMax".to_owned(),
            product_type: "Cardio Equipment".to_owned(),
        },
        Product {
            id: ProductId::new("10"),
            title: "Medicine Ball Set".to_owned(),
            price: Price::usd(dec!(89.99)),
            compare_at_price: Some(Price::usd(dec!(119.99))),
            images: strings(&[
                "https://images.unsplash.com/photo-1571019613454-1cb2f99b2d8b?w=800&h=600&fit=crop&crop=center",
            ]),
            variants: vec![
                variant("10-1", "6lb", dec!(29.99)),
                variant("10-2", "10lb", dec!(39.99)),
                variant("10-3", "15lb", dec!(49.99)),
            ],
            tags: strings(&["medicine-ball", "functional", "core", "strength"]),
            available: true,
            description: "Textured medicine balls for functional training, core workouts, and \
                          explosive power development."
                .to_owned(),
            vendor: "FuncFit".to_owned(),
            product_type: "Functional Training".to_owned(),
        },
    ]
}

/// Curated collections over the fixture catalog.
#[must_use]
pub fn collections() -> Vec<Collection> {
    vec![
        Collection {
            id: CollectionId::new("strength"),
            title: "Strength Training".to_owned(),
            description: "Build serious muscle with our professional-grade strength equipment"
                .to_owned(),
            image: "https://images.unsplash.com/photo-1534438327276-14e5300c3a48?w=1200&h=600&fit=crop&crop=center"
                .to_owned(),
            product_ids: vec![
                ProductId::new("1"),
                ProductId::new("2"),
                ProductId::new("5"),
                ProductId::new("7"),
                ProductId::new("10"),
            ],
        },
        Collection {
            id: CollectionId::new("cardio"),
            title: "Cardio Equipment".to_owned(),
            description: "Get your heart pumping with our premium cardio solutions".to_owned(),
            image: "https://images.unsplash.com/photo-1571019613454-1cb2f99b2d8b?w=1200&h=600&fit=crop&crop=center"
                .to_owned(),
            product_ids: vec![ProductId::new("3"), ProductId::new("9")],
        },
        Collection {
            id: CollectionId::new("accessories"),
            title: "Fitness Accessories".to_owned(),
            description: "Complete your workout with essential fitness accessories".to_owned(),
            image: "https://images.unsplash.com/photo-1598300042247-d088f8ab3a91?w=1200&h=600&fit=crop&crop=center"
                .to_owned(),
            product_ids: vec![
                ProductId::new("3"),
                ProductId::new("4"),
                ProductId::new("6"),
                ProductId::new("8"),
                ProductId::new("10"),
            ],
        },
    ]
}

/// The three fixture store locations and their inventory snapshots.
#[must_use]
pub fn locations() -> Vec<StoreLocation> {
    vec![
        StoreLocation {
            id: LocationId::new("downtown"),
            name: "Forge Fitness Downtown".to_owned(),
            address: "123 Main St, Downtown".to_owned(),
            coordinate: Coordinate::new(40.7128, -74.0060),
            inventory: inventory(&[
                ("1", 5),
                ("2", 8),
                ("3", 12),
                ("4", 3),
                ("5", 7),
                ("6", 15),
                ("7", 2),
                ("8", 25),
                ("9", 4),
                ("10", 18),
            ]),
        },
        StoreLocation {
            id: LocationId::new("uptown"),
            name: "Forge Fitness Uptown".to_owned(),
            address: "456 Broadway, Uptown".to_owned(),
            coordinate: Coordinate::new(40.7831, -73.9712),
            inventory: inventory(&[
                ("1", 2),
                ("2", 15),
                ("3", 20),
                ("4", 7),
                ("5", 12),
                ("6", 8),
                ("7", 5),
                ("8", 30),
                ("9", 6),
                ("10", 22),
            ]),
        },
        StoreLocation {
            id: LocationId::new("westside"),
            name: "Forge Fitness West Side".to_owned(),
            address: "789 West Ave, West Side".to_owned(),
            coordinate: Coordinate::new(40.7589, -73.9851),
            inventory: inventory(&[
                ("1", 0),
                ("2", 5),
                ("3", 8),
                ("4", 12),
                ("5", 3),
                ("6", 20),
                ("7", 1),
                ("8", 15),
                ("9", 8),
                ("10", 10),
            ]),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_invariants() {
        for product in products() {
            assert!(
                !product.variants.is_empty(),
                "product {} has no variants",
                product.id
            );
            assert!(product.price.amount >= Decimal::ZERO);
            for v in &product.variants {
                assert!(v.price.amount >= Decimal::ZERO);
            }
        }
    }

    #[test]
    fn test_collections_reference_real_products() {
        let catalog = catalog();
        for collection in collections() {
            for id in &collection.product_ids {
                assert!(catalog.find(id).is_some(), "missing product {id}");
            }
        }
    }

    #[test]
    fn test_locations_cover_the_whole_catalog() {
        let catalog = catalog();
        for location in locations() {
            for product in catalog.products() {
                assert!(
                    location.inventory.contains_key(&product.id),
                    "location {} lacks product {}",
                    location.id,
                    product.id
                );
            }
        }
    }
}
