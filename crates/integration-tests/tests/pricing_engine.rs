//! Scenario tests for the pricing engine: percentage adjustments,
//! history retention, bulk compounding, and baseline reset.

use chrono::{TimeZone, Utc};
use forge_fitness_core::{Price, PriceAdjustment, ProductId};
use forge_fitness_integration_tests::session;
use forge_fitness_storefront::StoreError;
use rust_decimal_macros::dec;

#[test]
fn ten_percent_increase_on_the_tracker() {
    // The fitness tracker is the one fixture priced at a flat multiple
    // of 100, which makes the expected values easy to eyeball.
    let mut state = session();
    let id = ProductId::new("4"); // $199.99

    state.catalog.increase_price(&id, dec!(10)).unwrap();

    let product = state.catalog.find(&id).unwrap();
    assert_eq!(product.price, Price::usd(dec!(219.99)));
    // All three tracker variants started at 199.99 and move together.
    for variant in &product.variants {
        assert_eq!(variant.price, Price::usd(dec!(219.99)));
    }
}

#[test]
fn history_records_every_change_in_order() {
    let mut state = session();
    let id = ProductId::new("1");
    let t0 = Utc.with_ymd_and_hms(2025, 6, 1, 9, 0, 0).unwrap();
    let t1 = Utc.with_ymd_and_hms(2025, 6, 1, 9, 5, 0).unwrap();

    state
        .catalog
        .set_price_at(&id, Price::usd(dec!(650.00)), t0)
        .unwrap();
    state
        .catalog
        .adjust_price_at(&id, dec!(20), PriceAdjustment::Decrease, t1)
        .unwrap();

    let history = state.catalog.price_history(&id);
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].old_price, Price::usd(dec!(599.99)));
    assert_eq!(history[0].new_price, Price::usd(dec!(650.00)));
    assert_eq!(history[0].timestamp, t0);
    assert_eq!(history[1].old_price, Price::usd(dec!(650.00)));
    assert_eq!(history[1].new_price, Price::usd(dec!(520.00)));
    assert_eq!(history[1].timestamp, t1);
}

#[test]
fn bulk_updates_compound_rather_than_add() {
    let mut twice = session();
    twice
        .catalog
        .bulk_update_prices(dec!(5), PriceAdjustment::Increase);
    twice
        .catalog
        .bulk_update_prices(dec!(5), PriceAdjustment::Increase);

    let mut once = session();
    once.catalog
        .bulk_update_prices(dec!(10), PriceAdjustment::Increase);

    // 1.05 * 1.05 = 1.1025, not 1.10: the two catalogs must disagree.
    let id = ProductId::new("1");
    let compounded = twice.catalog.find(&id).unwrap().price;
    let single = once.catalog.find(&id).unwrap().price;
    assert_ne!(compounded, single);
    assert_eq!(compounded, Price::usd(dec!(661.49))); // 599.99 * 1.05 = 629.99, * 1.05 = 661.49
    assert_eq!(single, Price::usd(dec!(659.99)));

    // Each product carries one history entry per bulk pass.
    for product in twice.catalog.products() {
        assert_eq!(twice.catalog.price_history(&product.id).len(), 2);
    }
}

#[test]
fn reset_restores_every_fixture_price_and_clears_history() {
    let mut state = session();
    let baseline: Vec<Price> = state.catalog.products().iter().map(|p| p.price).collect();

    state
        .catalog
        .bulk_update_prices(dec!(25), PriceAdjustment::Increase);
    state
        .catalog
        .decrease_price(&ProductId::new("3"), dec!(50))
        .unwrap();
    state.catalog.reset_prices();

    let after: Vec<Price> = state.catalog.products().iter().map(|p| p.price).collect();
    assert_eq!(after, baseline);
    for product in state.catalog.products() {
        assert!(state.catalog.price_history(&product.id).is_empty());
    }
}

#[test]
fn unknown_product_surfaces_not_found() {
    let mut state = session();
    let ghost = ProductId::new("404");

    assert_eq!(
        state.catalog.set_price(&ghost, Price::usd(dec!(1.00))),
        Err(StoreError::ProductNotFound(ghost.clone()))
    );
    assert_eq!(
        state.catalog.decrease_price(&ghost, dec!(5)),
        Err(StoreError::ProductNotFound(ghost))
    );
}

#[test]
fn variant_rescaling_rounds_through_the_money_function() {
    let mut state = session();
    let id = ProductId::new("1"); // base 599.99, second variant 549.99

    state.catalog.increase_price(&id, dec!(10)).unwrap();

    let product = state.catalog.find(&id).unwrap();
    assert_eq!(product.price, Price::usd(dec!(659.99)));
    // 549.99 * (659.99 / 599.99) = 604.98916... -> 604.99
    assert_eq!(product.variants[1].price, Price::usd(dec!(604.99)));
}
