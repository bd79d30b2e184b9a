//! Demo store fixture tests

use groceryglide::{
    cart::{Cart, totals::CartTotals},
    deals::{Countdown, ExpiryHint},
    fixtures::{Fixture, StoreData},
    orders::{OrderStage, StageState},
};
use rand::{SeedableRng, rngs::StdRng};
use rusty_money::{Money, iso::USD};
use testresult::TestResult;

fn demo() -> TestResult<StoreData> {
    let fixture = Fixture::with_base_path(concat!(env!("CARGO_MANIFEST_DIR"), "/../../fixtures"));

    Ok(fixture.load_store("demo")?)
}

fn ids<'a>(products: impl IntoIterator<Item = &'a str>) -> Vec<&'a str> {
    products.into_iter().collect()
}

#[test]
fn demo_catalog_loads() -> TestResult {
    let store = demo()?;

    assert_eq!(store.settings.name, "GroceryGlide");
    assert_eq!(store.settings.delivery_fee, Money::from_minor(299, USD));
    assert_eq!(store.catalog.categories().len(), 7);
    assert_eq!(store.catalog.len(), 8);
    assert_eq!(store.banners.len(), 3);
    assert_eq!(store.flash_deals.len(), 3);
    assert_eq!(store.past_orders.len(), 2);

    Ok(())
}

#[test]
fn discounted_pair_totals() -> TestResult {
    let store = demo()?;
    let bananas = store.catalog.key_for("prod-1").ok_or("bananas")?;
    let broccoli = store.catalog.key_for("prod-4").ok_or("broccoli")?;

    let mut cart = Cart::new();
    cart.add_item(bananas)?;
    cart.add_item(bananas)?;
    cart.add_item(broccoli)?;

    let totals = CartTotals::calculate(&cart, &store.catalog, &store.settings)?;

    assert_eq!(totals.subtotal(), Money::from_minor(5_87, USD));
    assert_eq!(totals.delivery_fee(), Money::from_minor(2_99, USD));
    assert_eq!(totals.total(), Money::from_minor(8_86, USD));

    Ok(())
}

#[test]
fn demo_category_filter() -> TestResult {
    let store = demo()?;

    let fruits = store.catalog.filter_by_category(Some("fruits"));

    assert_eq!(
        ids(fruits.iter().map(|(_, p)| p.id.as_str())),
        ["prod-1", "prod-2", "prod-3"]
    );
    assert!(store.catalog.filter_by_category(Some("seafood")).is_empty());
    assert_eq!(store.catalog.filter_by_category(None).len(), 8);

    Ok(())
}

#[test]
fn demo_flagged_views() -> TestResult {
    let store = demo()?;

    assert_eq!(
        ids(store.catalog.bestsellers().iter().map(|(_, p)| p.id.as_str())),
        ["prod-1", "prod-5"]
    );
    assert_eq!(
        ids(store.catalog.on_sale().iter().map(|(_, p)| p.id.as_str())),
        ["prod-1", "prod-4", "prod-8"]
    );

    let bananas = store.catalog.key_for("prod-1").ok_or("bananas")?;

    assert_eq!(
        ids(store.catalog.similar_to(bananas).iter().map(|(_, p)| p.id.as_str())),
        ["prod-2", "prod-3"]
    );

    Ok(())
}

#[test]
fn demo_current_order_is_packed() -> TestResult {
    let store = demo()?;
    let order = store.current_order.ok_or("no current order")?;

    assert_eq!(order.stage, OrderStage::Packed);
    assert_eq!(order.stage.state_of(OrderStage::Ordered), StageState::Completed);
    assert_eq!(order.stage.state_of(OrderStage::Shipped), StageState::Upcoming);
    assert!((order.stage.target_percent() - 40.0).abs() < f64::EPSILON);

    Ok(())
}

#[test]
fn demo_deal_countdowns() -> TestResult {
    let store = demo()?;
    let mut rng = StdRng::seed_from_u64(3);

    let first = store.flash_deals.first().ok_or("no deals")?;
    let countdown = Countdown::initial(ExpiryHint::parse(&first.expires_in), &mut rng);

    assert_eq!(countdown.to_string(), "03:00");

    Ok(())
}

#[test]
fn demo_past_orders() -> TestResult {
    let store = demo()?;
    let latest = store.past_orders.first().ok_or("no orders")?;

    assert_eq!(latest.order_number(), "222333");
    assert_eq!(latest.total, Money::from_minor(45_99, USD));
    assert_eq!(latest.items.len(), 3);

    Ok(())
}
