//! Receipt

use std::io;

use decimal_percentage::Percentage;
use rust_decimal::Decimal;
use tabled::{
    builder::Builder,
    settings::{
        Alignment, Color, Style, Theme,
        object::{Columns, Rows},
    },
};
use thiserror::Error;

use crate::{
    cart::{
        Cart,
        totals::{CartLine, CartTotals, TotalsError},
    },
    catalog::Catalog,
    settings::StoreSettings,
};

/// Errors that can occur when printing a receipt.
#[derive(Debug, Error)]
pub enum ReceiptError {
    /// Error totalling the cart.
    #[error(transparent)]
    Totals(#[from] TotalsError),

    /// IO error
    #[error("IO error")]
    IO,
}

/// Terminal rendering of a priced cart.
#[derive(Debug, Clone)]
pub struct CartReceipt<'a> {
    totals: CartTotals<'a>,
}

impl<'a> CartReceipt<'a> {
    /// Wrap already computed totals.
    pub fn new(totals: CartTotals<'a>) -> Self {
        Self { totals }
    }

    /// Price `cart` and build a receipt for it.
    ///
    /// # Errors
    ///
    /// Returns a [`ReceiptError`] if the cart cannot be totalled.
    pub fn from_cart(
        cart: &Cart,
        catalog: &'a Catalog,
        settings: &StoreSettings,
    ) -> Result<Self, ReceiptError> {
        Ok(Self::new(CartTotals::calculate(cart, catalog, settings)?))
    }

    /// Underlying totals
    pub fn totals(&self) -> &CartTotals<'a> {
        &self.totals
    }

    /// Render the line table.
    pub fn table(&self) -> String {
        let mut builder = Builder::default();

        builder.push_record([
            "", "Item", "Unit", "Qty", "Price", "Total", "Savings",
        ]);

        for (idx, line) in self.totals.lines().iter().enumerate() {
            builder.push_record(line_cells(idx, line));
        }

        let mut table = builder.build();

        table.with(Theme::from(Style::modern_rounded()));
        table.modify(Rows::first(), Color::BOLD);
        table.modify(Columns::new(3..7), Alignment::right());

        table.to_string()
    }

    /// Write the table and summary to `out`.
    ///
    /// # Errors
    ///
    /// Returns [`ReceiptError::IO`] if writing fails.
    pub fn write_to(&self, mut out: impl io::Write) -> Result<(), ReceiptError> {
        if self.totals.lines().is_empty() {
            return writeln!(out, "\nYour cart is empty\n").map_err(|_err| ReceiptError::IO);
        }

        writeln!(out, "\n{}", self.table()).map_err(|_err| ReceiptError::IO)?;

        let savings_points = percent_points(self.totals.savings_percent());

        let rows = [
            ("Subtotal:", self.totals.subtotal().to_string()),
            ("Delivery:", self.totals.delivery_fee().to_string()),
            ("Total:", self.totals.total().to_string()),
            (
                "Savings:",
                format!("({savings_points:.2}%) {}", self.totals.savings()),
            ),
        ];

        let value_width = rows.iter().map(|(_, value)| value.len()).max().unwrap_or(0);

        for (label, value) in rows {
            writeln!(out, " {label:>9}  {value:>value_width$}").map_err(|_err| ReceiptError::IO)?;
        }

        writeln!(out).map_err(|_err| ReceiptError::IO)
    }
}

fn line_cells(idx: usize, line: &CartLine<'_>) -> [String; 7] {
    let savings = line.savings();

    [
        format!("#{:<3}", idx + 1),
        line.product.name.clone(),
        line.product.unit.clone(),
        line.quantity.to_string(),
        line.product.effective_price().to_string(),
        line.line_total.to_string(),
        if savings.is_zero() {
            String::new()
        } else {
            format!("-{savings}")
        },
    ]
}

/// Convert a fractional percentage to percent points.
fn percent_points(percentage: Percentage) -> Decimal {
    ((percentage * Decimal::ONE) * Decimal::ONE_HUNDRED).round_dp(2)
}

#[cfg(test)]
mod tests {
    use std::num::NonZeroU32;

    use rusty_money::{Money, iso::USD};
    use testresult::TestResult;

    use crate::products::{Product, ProductFlags, Rating};

    use super::*;

    fn product(id: &str, name: &str, price: i64, discounted_price: Option<i64>) -> Product {
        Product {
            id: id.to_string(),
            name: name.to_string(),
            description: String::new(),
            price: Money::from_minor(price, USD),
            discounted_price: discounted_price.map(|minor| Money::from_minor(minor, USD)),
            image_url: String::new(),
            category: "fruits".to_string(),
            in_stock: true,
            unit: "bunch".to_string(),
            rating: Rating::default(),
            flags: ProductFlags::default(),
        }
    }

    fn settings() -> StoreSettings {
        StoreSettings {
            name: "Test".to_string(),
            delivery_fee: Money::from_minor(299, USD),
        }
    }

    #[test]
    fn writes_lines_and_summary() -> TestResult {
        let mut catalog = Catalog::new(USD);
        let bananas = catalog.insert_product(product("prod-1", "Bananas", 299, Some(199)))?;
        let apples = catalog.insert_product(product("prod-3", "Apples", 149, None))?;

        let mut cart = Cart::new();
        cart.add_quantity(bananas, NonZeroU32::new(2).ok_or("zero")?)?;
        cart.add_item(apples)?;

        let receipt = CartReceipt::from_cart(&cart, &catalog, &settings())?;
        let mut out = Vec::new();

        receipt.write_to(&mut out)?;

        let text = String::from_utf8(out)?;

        assert!(text.contains("Bananas"), "{text}");
        assert!(text.contains("-$2.00"), "{text}");
        assert!(text.contains("$5.47"), "{text}");
        assert!(text.contains("$2.99"), "{text}");
        assert!(text.contains("$8.46"), "{text}");

        Ok(())
    }

    #[test]
    fn empty_cart_prints_message() -> TestResult {
        let catalog = Catalog::new(USD);
        let receipt = CartReceipt::from_cart(&Cart::new(), &catalog, &settings())?;
        let mut out = Vec::new();

        receipt.write_to(&mut out)?;

        assert!(String::from_utf8(out)?.contains("Your cart is empty"));

        Ok(())
    }

    #[test]
    fn percent_points_rounds_to_two_places() {
        let points = percent_points(Percentage::from(Decimal::new(1, 3)));

        assert_eq!(points, Decimal::new(10, 2));
    }
}
