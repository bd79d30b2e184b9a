//! Owned, display-ready snapshot of the cart.

use groceryglide::{
    cart::{
        Cart,
        totals::{CartTotals, TotalsError},
    },
    fixtures::StoreData,
    products::ProductKey,
};

use crate::format::price_pair;

/// UI model for one cart line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLineView {
    /// Product key, for the quantity controls.
    pub key: ProductKey,

    /// Product id, for the detail link.
    pub product_id: String,

    /// Display name.
    pub name: String,

    /// Selling unit.
    pub unit: String,

    /// Thumbnail.
    pub image_url: String,

    /// Units in the cart.
    pub quantity: u32,

    /// Price of one unit.
    pub unit_price: String,

    /// Shelf price of one unit, when discounted.
    pub unit_shelf_price: Option<String>,

    /// Line total at the selling price.
    pub line_total: String,

    /// Line total at shelf price, when discounted.
    pub original_total: Option<String>,
}

/// UI model for the cart panel and cart page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartView {
    /// Lines in cart order.
    pub lines: Vec<CartLineView>,

    /// Sum of line totals.
    pub subtotal: String,

    /// Flat fee, zero for an empty cart.
    pub delivery_fee: String,

    /// Subtotal plus delivery.
    pub total: String,

    /// Discount savings, when any.
    pub savings: Option<String>,
}

impl CartView {
    /// Price `cart` against the store catalog.
    ///
    /// # Errors
    ///
    /// Returns a [`TotalsError`] when the cart cannot be totalled.
    pub fn build(cart: &Cart, store: &StoreData) -> Result<Self, TotalsError> {
        let totals = CartTotals::calculate(cart, &store.catalog, &store.settings)?;

        let lines = totals
            .lines()
            .iter()
            .map(|line| {
                let (unit_price, unit_shelf_price) = price_pair(line.product);

                CartLineView {
                    key: line.key,
                    product_id: line.product.id.clone(),
                    name: line.product.name.clone(),
                    unit: line.product.unit.clone(),
                    image_url: line.product.image_url.clone(),
                    quantity: line.quantity.get(),
                    unit_price,
                    unit_shelf_price,
                    line_total: line.line_total.to_string(),
                    original_total: line
                        .product
                        .is_discounted()
                        .then(|| line.original_total.to_string()),
                }
            })
            .collect();

        let savings = totals.savings();

        Ok(Self {
            lines,
            subtotal: totals.subtotal().to_string(),
            delivery_fee: totals.delivery_fee().to_string(),
            total: totals.total().to_string(),
            savings: (!savings.is_zero()).then(|| savings.to_string()),
        })
    }

    /// Whether there is nothing to show.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::num::NonZeroU32;

    use testresult::TestResult;

    use super::*;

    const DEMO_YAML: &str = include_str!("../../../fixtures/store/demo.yml");

    #[test]
    fn empty_cart_has_no_delivery_fee() -> TestResult {
        let store = StoreData::from_yaml(DEMO_YAML)?;

        let view = CartView::build(&Cart::new(), &store)?;

        assert!(view.is_empty());
        assert_eq!(view.subtotal, "$0.00");
        assert_eq!(view.delivery_fee, "$0.00");
        assert_eq!(view.total, "$0.00");
        assert_eq!(view.savings, None);

        Ok(())
    }

    #[test]
    fn lines_carry_shelf_prices_for_discounts() -> TestResult {
        let store = StoreData::from_yaml(DEMO_YAML)?;
        let bananas = store.catalog.key_for("prod-1").ok_or("missing prod-1")?;
        let carrots = store.catalog.key_for("prod-5").ok_or("missing prod-5")?;
        let mut cart = Cart::new();

        cart.add_quantity(bananas, NonZeroU32::new(2).ok_or("zero")?)?;
        cart.add_item(carrots)?;

        let view = CartView::build(&cart, &store)?;
        let [first, second] = view.lines.as_slice() else {
            return Err("expected two lines".into());
        };

        assert_eq!(first.line_total, "$3.98");
        assert_eq!(first.original_total.as_deref(), Some("$5.98"));
        assert_eq!(first.unit_shelf_price.as_deref(), Some("$2.99"));
        assert_eq!(second.original_total, None);
        assert_eq!(view.delivery_fee, "$2.99");
        assert_eq!(view.savings.as_deref(), Some("$2.00"));

        Ok(())
    }
}
