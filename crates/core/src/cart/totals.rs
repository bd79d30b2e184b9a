//! Cart totals

use std::num::NonZeroU32;

use decimal_percentage::Percentage;
use rust_decimal::Decimal;
use rusty_money::{Money, iso::Currency};
use smallvec::SmallVec;
use thiserror::Error;

use crate::{
    cart::Cart,
    catalog::Catalog,
    products::{Product, ProductKey},
    settings::StoreSettings,
};

/// Errors that can occur while totalling a cart.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TotalsError {
    /// A cart line references a product the catalog does not know.
    #[error("Missing product {0:?}")]
    MissingProduct(ProductKey),

    /// An amount does not fit in minor units.
    #[error("Amount overflow while totalling the cart")]
    Overflow,

    /// The delivery fee is in a different currency from the catalog.
    #[error("Delivery fee is in {found}, but the catalog uses {expected}")]
    CurrencyMismatch {
        /// Catalog currency code
        expected: &'static str,
        /// Fee currency code
        found: &'static str,
    },
}

/// A priced cart line.
#[derive(Debug, Clone)]
pub struct CartLine<'a> {
    /// Product key
    pub key: ProductKey,

    /// Product record
    pub product: &'a Product,

    /// Units in the cart
    pub quantity: NonZeroU32,

    /// `quantity × effective price`
    pub line_total: Money<'static, Currency>,

    /// `quantity × shelf price`
    pub original_total: Money<'static, Currency>,
}

impl CartLine<'_> {
    /// Amount saved on this line by the discounted price.
    pub fn savings(&self) -> Money<'static, Currency> {
        Money::from_minor(
            self.original_total
                .to_minor_units()
                .saturating_sub(self.line_total.to_minor_units()),
            self.line_total.currency(),
        )
    }
}

/// Derived totals for a cart: `subtotal`, flat `delivery_fee` when the
/// subtotal is positive, and `total = subtotal + delivery_fee`.
#[derive(Debug, Clone)]
pub struct CartTotals<'a> {
    lines: SmallVec<[CartLine<'a>; 8]>,
    subtotal: Money<'static, Currency>,
    original_subtotal: Money<'static, Currency>,
    delivery_fee: Money<'static, Currency>,
    total: Money<'static, Currency>,
}

impl<'a> CartTotals<'a> {
    /// Price every cart line against the catalog and total them.
    ///
    /// # Errors
    ///
    /// Returns a [`TotalsError`] if a product is missing, an amount
    /// overflows, or the delivery fee currency differs from the catalog.
    pub fn calculate(
        cart: &Cart,
        catalog: &'a Catalog,
        settings: &StoreSettings,
    ) -> Result<Self, TotalsError> {
        let currency = catalog.currency();

        if settings.currency() != currency {
            return Err(TotalsError::CurrencyMismatch {
                expected: currency.iso_alpha_code,
                found: settings.currency().iso_alpha_code,
            });
        }

        let mut lines = SmallVec::new();
        let mut subtotal_minor = 0_i64;
        let mut original_minor = 0_i64;

        for item in cart.iter() {
            let key = item.product();
            let product = catalog.get(key).ok_or(TotalsError::MissingProduct(key))?;
            let quantity = i64::from(item.quantity().get());

            let line_minor = product
                .effective_price()
                .to_minor_units()
                .checked_mul(quantity)
                .ok_or(TotalsError::Overflow)?;

            let original_line_minor = product
                .price
                .to_minor_units()
                .checked_mul(quantity)
                .ok_or(TotalsError::Overflow)?;

            subtotal_minor = subtotal_minor
                .checked_add(line_minor)
                .ok_or(TotalsError::Overflow)?;

            original_minor = original_minor
                .checked_add(original_line_minor)
                .ok_or(TotalsError::Overflow)?;

            lines.push(CartLine {
                key,
                product,
                quantity: item.quantity(),
                line_total: Money::from_minor(line_minor, currency),
                original_total: Money::from_minor(original_line_minor, currency),
            });
        }

        let fee_minor = if subtotal_minor > 0 {
            settings.delivery_fee.to_minor_units()
        } else {
            0
        };

        let total_minor = subtotal_minor
            .checked_add(fee_minor)
            .ok_or(TotalsError::Overflow)?;

        Ok(Self {
            lines,
            subtotal: Money::from_minor(subtotal_minor, currency),
            original_subtotal: Money::from_minor(original_minor, currency),
            delivery_fee: Money::from_minor(fee_minor, currency),
            total: Money::from_minor(total_minor, currency),
        })
    }

    /// Priced lines in cart order.
    pub fn lines(&self) -> &[CartLine<'a>] {
        &self.lines
    }

    /// Sum of line totals
    pub fn subtotal(&self) -> Money<'static, Currency> {
        self.subtotal
    }

    /// Sum of lines at shelf price
    pub fn original_subtotal(&self) -> Money<'static, Currency> {
        self.original_subtotal
    }

    /// Delivery fee, zero for an empty cart
    pub fn delivery_fee(&self) -> Money<'static, Currency> {
        self.delivery_fee
    }

    /// Amount due
    pub fn total(&self) -> Money<'static, Currency> {
        self.total
    }

    /// Amount saved by discounted prices.
    pub fn savings(&self) -> Money<'static, Currency> {
        Money::from_minor(
            self.original_subtotal
                .to_minor_units()
                .saturating_sub(self.subtotal.to_minor_units()),
            self.subtotal.currency(),
        )
    }

    /// Savings as a fraction of the shelf-price subtotal.
    pub fn savings_percent(&self) -> Percentage {
        let original_minor = self.original_subtotal.to_minor_units();

        if original_minor == 0 {
            return Percentage::from(Decimal::ZERO);
        }

        let savings = Decimal::from(self.savings().to_minor_units());

        Percentage::from(savings / Decimal::from(original_minor))
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use rusty_money::iso::{GBP, USD};
    use testresult::TestResult;

    use crate::{
        categories::Category,
        products::{ProductFlags, Rating},
    };

    use super::*;

    fn product(id: &str, price: i64, discounted_price: Option<i64>) -> Product {
        Product {
            id: id.to_string(),
            name: id.to_string(),
            description: String::new(),
            price: Money::from_minor(price, USD),
            discounted_price: discounted_price.map(|minor| Money::from_minor(minor, USD)),
            image_url: String::new(),
            category: "fruits".to_string(),
            in_stock: true,
            unit: "each".to_string(),
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

    fn catalog() -> TestResult<(Catalog, ProductKey, ProductKey)> {
        let mut catalog = Catalog::new(USD);

        catalog.insert_category(Category {
            id: "fruits".to_string(),
            name: "Fruits".to_string(),
            icon: "Apple".to_string(),
            image_url: String::new(),
        })?;

        let a = catalog.insert_product(product("a", 299, Some(199)))?;
        let b = catalog.insert_product(product("b", 229, Some(189)))?;

        Ok((catalog, a, b))
    }

    #[test]
    fn empty_cart_has_no_fee() -> TestResult {
        let (catalog, _, _) = catalog()?;

        let totals = CartTotals::calculate(&Cart::new(), &catalog, &settings())?;

        assert_eq!(totals.subtotal(), Money::from_minor(0, USD));
        assert_eq!(totals.delivery_fee(), Money::from_minor(0, USD));
        assert_eq!(totals.total(), Money::from_minor(0, USD));
        assert!(totals.lines().is_empty());

        Ok(())
    }

    #[test]
    fn subtotal_uses_effective_price() -> TestResult {
        let (catalog, a, b) = catalog()?;
        let mut cart = Cart::new();

        cart.add_item(a)?;
        cart.add_item(a)?;
        cart.add_item(b)?;

        let totals = CartTotals::calculate(&cart, &catalog, &settings())?;

        assert_eq!(totals.subtotal(), Money::from_minor(587, USD));
        assert_eq!(totals.delivery_fee(), Money::from_minor(299, USD));
        assert_eq!(totals.total(), Money::from_minor(886, USD));
        assert_eq!(totals.total().to_string(), "$8.86");

        Ok(())
    }

    #[test]
    fn lines_carry_line_and_original_totals() -> TestResult {
        let (catalog, a, _) = catalog()?;
        let mut cart = Cart::new();

        cart.add_quantity(a, NonZeroU32::new(3).ok_or("zero")?)?;

        let totals = CartTotals::calculate(&cart, &catalog, &settings())?;
        let line = totals.lines().first().ok_or("missing line")?;

        assert_eq!(line.line_total, Money::from_minor(597, USD));
        assert_eq!(line.original_total, Money::from_minor(897, USD));
        assert_eq!(line.savings(), Money::from_minor(300, USD));

        Ok(())
    }

    #[test]
    fn savings_percent_is_relative_to_shelf_price() -> TestResult {
        let (catalog, a, _) = catalog()?;
        let mut cart = Cart::new();

        cart.add_item(a)?;

        let totals = CartTotals::calculate(&cart, &catalog, &settings())?;

        assert_eq!(totals.savings(), Money::from_minor(100, USD));
        assert_eq!(
            (totals.savings_percent() * Decimal::ONE).round_dp(4),
            Decimal::new(3344, 4)
        );

        Ok(())
    }

    #[test]
    fn missing_product_is_an_error() -> TestResult {
        let (catalog, a, _) = catalog()?;
        let other = Catalog::new(USD);
        let mut cart = Cart::new();

        cart.add_item(a)?;

        assert!(CartTotals::calculate(&cart, &catalog, &settings()).is_ok());
        assert_eq!(
            CartTotals::calculate(&cart, &other, &settings()).map(|totals| totals.total()),
            Err(TotalsError::MissingProduct(a))
        );

        Ok(())
    }

    #[test]
    fn overflow_is_an_error() -> TestResult {
        let mut catalog = Catalog::new(USD);
        let key = catalog.insert_product(product("gold", i64::MAX / 2, None))?;
        let mut cart = Cart::new();

        cart.add_quantity(key, NonZeroU32::new(3).ok_or("zero")?)?;

        assert_eq!(
            CartTotals::calculate(&cart, &catalog, &settings()).map(|totals| totals.total()),
            Err(TotalsError::Overflow)
        );

        Ok(())
    }

    #[test]
    fn fee_currency_must_match_catalog() -> TestResult {
        let (catalog, _, _) = catalog()?;
        let settings = StoreSettings {
            name: "Test".to_string(),
            delivery_fee: Money::from_minor(299, GBP),
        };

        assert_eq!(
            CartTotals::calculate(&Cart::new(), &catalog, &settings).map(|totals| totals.total()),
            Err(TotalsError::CurrencyMismatch {
                expected: "USD",
                found: "GBP",
            })
        );

        Ok(())
    }
}
