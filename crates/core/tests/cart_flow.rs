//! Shopping session flows against the demo store

use std::num::NonZeroU32;

use groceryglide::{
    cart::totals::CartTotals,
    fixtures::{Fixture, StoreData},
    receipt::CartReceipt,
    session::{QuantityPicker, Session},
};
use rusty_money::{Money, iso::USD};
use testresult::TestResult;

fn demo() -> TestResult<StoreData> {
    let fixture = Fixture::with_base_path(concat!(env!("CARGO_MANIFEST_DIR"), "/../../fixtures"));

    Ok(fixture.load_store("demo")?)
}

#[test]
fn browse_add_and_adjust() -> TestResult {
    let store = demo()?;
    let mut session = Session::new();

    assert!(session.select_category("vegetables").is_some());

    let visible = store
        .catalog
        .filter_by_category(session.categories().selected());
    let (carrots_key, carrots) = visible
        .iter()
        .find(|(_, p)| p.id == "prod-5")
        .copied()
        .ok_or("carrots not visible")?;

    session.add_from_card(carrots_key, carrots)?;
    session.add_from_card(carrots_key, carrots)?;

    assert_eq!(session.cart().len(), 1);
    assert_eq!(session.cart().item_count(), 2);

    session.cart_mut().decrement(carrots_key)?;
    session.cart_mut().decrement(carrots_key)?;

    assert!(session.cart().is_empty());

    let totals = CartTotals::calculate(session.cart(), &store.catalog, &store.settings)?;

    assert_eq!(totals.total(), Money::from_minor(0, USD));

    Ok(())
}

#[test]
fn product_detail_flow() -> TestResult {
    let store = demo()?;
    let mut session = Session::new();
    let (beef_key, beef) = store.catalog.find("prod-8").ok_or("beef")?;

    let picker = QuantityPicker::default().change(1).change(1);

    let first = session.add_from_detail(beef_key, beef, picker.quantity())?;
    let again = session.add_from_detail(beef_key, beef, NonZeroU32::MIN)?;

    assert_eq!(first.title, "Added to cart");
    assert_eq!(again.description, "Added 1 more Premium Ground Beef to your cart");
    assert_eq!(session.cart().quantity_of(beef_key).map(NonZeroU32::get), Some(4));

    let receipt = CartReceipt::from_cart(session.cart(), &store.catalog, &store.settings)?;

    assert_eq!(receipt.totals().subtotal(), Money::from_minor(27_96, USD));
    assert_eq!(receipt.totals().total(), Money::from_minor(30_95, USD));
    assert_eq!(receipt.totals().savings(), Money::from_minor(4_00, USD));

    Ok(())
}

#[test]
fn remove_then_readd_starts_at_one() -> TestResult {
    let store = demo()?;
    let mut session = Session::new();
    let (milk_key, milk) = store.catalog.find("prod-6").ok_or("milk")?;

    session.add_from_card(milk_key, milk)?;
    session.add_from_card(milk_key, milk)?;
    session.cart_mut().remove_item(milk_key);
    session.add_from_card(milk_key, milk)?;

    assert_eq!(session.cart().quantity_of(milk_key).map(NonZeroU32::get), Some(1));

    Ok(())
}
