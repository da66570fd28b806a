//! Scenario tests for nearest-store inventory resolution against the
//! fixture locations.

use forge_fitness_core::{Coordinate, LocationId, ProductId};
use forge_fitness_integration_tests::{UNION_SQUARE, session};
use forge_fitness_storefront::inventory::{GeolocationProvider, Resolution};

fn expect_resolved(resolution: Resolution<'_>) -> (LocationId, u32) {
    match resolution {
        Resolution::Resolved { location, on_hand } => (location.id.clone(), on_hand),
        Resolution::Pending => panic!("expected a resolved lookup"),
    }
}

#[test]
fn union_square_resolves_to_the_downtown_store() {
    // Hand-checked: downtown is ~2.3 km from (40.73, -73.99), westside
    // ~3.2 km, uptown ~6.1 km.
    let state = session();
    let (location, on_hand) =
        expect_resolved(state.store_availability(Some(UNION_SQUARE), &ProductId::new("1")));

    assert_eq!(location, LocationId::new("downtown"));
    assert_eq!(on_hand, 5);
}

#[test]
fn harlem_resolves_to_the_uptown_store() {
    let state = session();
    let harlem = Coordinate::new(40.81, -73.95);
    let (location, on_hand) =
        expect_resolved(state.store_availability(Some(harlem), &ProductId::new("2")));

    assert_eq!(location, LocationId::new("uptown"));
    assert_eq!(on_hand, 15);
}

#[test]
fn a_product_the_nearest_store_never_stocked_reports_zero() {
    let state = session();
    let (_, on_hand) =
        expect_resolved(state.store_availability(Some(UNION_SQUARE), &ProductId::new("discontinued")));
    assert_eq!(on_hand, 0);
}

#[test]
fn resolution_stays_pending_until_a_coordinate_arrives() {
    let state = session();
    let product = ProductId::new("1");

    // First view of the product page: no fix yet.
    assert_eq!(state.store_availability(None, &product), Resolution::Pending);

    // Navigating to another product while still waiting stays pending.
    assert_eq!(
        state.store_availability(None, &ProductId::new("2")),
        Resolution::Pending
    );

    // Once the coordinate shows up the same call resolves.
    let resolved = state.store_availability(Some(UNION_SQUARE), &product);
    assert!(matches!(resolved, Resolution::Resolved { .. }));
}

#[test]
fn provider_backed_resolution_follows_the_fix() {
    struct Browser {
        fix: Option<Coordinate>,
    }
    impl GeolocationProvider for Browser {
        fn current(&self) -> Option<Coordinate> {
            self.fix
        }
    }

    let state = session();
    let product = ProductId::new("7");
    let mut browser = Browser { fix: None };

    assert_eq!(
        state.resolver().resolve_with(&browser, &product),
        Resolution::Pending
    );

    browser.fix = Some(UNION_SQUARE);
    let (location, on_hand) = expect_resolved(state.resolver().resolve_with(&browser, &product));
    assert_eq!(location, LocationId::new("downtown"));
    assert_eq!(on_hand, 2);
}

#[test]
fn resolution_serializes_for_the_presentation_layer() {
    let state = session();
    let resolution = state.store_availability(Some(UNION_SQUARE), &ProductId::new("1"));

    let json = serde_json::to_value(&resolution).unwrap();
    assert_eq!(json["Resolved"]["on_hand"], 5);
    assert_eq!(json["Resolved"]["location"]["id"], "downtown");
}
