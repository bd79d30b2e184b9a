//! Products

use rust_decimal::{Decimal, prelude::ToPrimitive};
use rusty_money::{Money, iso::Currency};
use slotmap::new_key_type;

new_key_type! {
    /// Product Key
    pub struct ProductKey;
}

/// Number of stars in a rating display.
pub const RATING_STARS: u8 = 5;

/// Merchandising flags shown as badges on product cards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProductFlags {
    /// Product is on sale
    pub on_sale: bool,

    /// Product is a bestseller
    pub bestseller: bool,

    /// Product is new to the store
    pub new: bool,
}

/// Customer rating between 0.0 and 5.0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Rating(Decimal);

impl Rating {
    /// Create a rating, clamped into `0.0..=5.0` and rounded to one decimal place.
    pub fn new(value: Decimal) -> Self {
        Self(
            value
                .clamp(Decimal::ZERO, Decimal::from(RATING_STARS))
                .round_dp(1),
        )
    }

    /// Rating value
    pub fn value(self) -> Decimal {
        self.0
    }

    /// Number of filled stars, `floor(rating)`.
    pub fn filled_stars(self) -> u8 {
        self.0.floor().to_u8().unwrap_or(0).min(RATING_STARS)
    }
}

impl std::fmt::Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.normalize())
    }
}

/// Product
#[derive(Debug, Clone)]
pub struct Product {
    /// Stable product id (e.g. `prod-1`)
    pub id: String,

    /// Product name
    pub name: String,

    /// Marketing description
    pub description: String,

    /// Shelf price
    pub price: Money<'static, Currency>,

    /// Sale price, when the product is discounted
    pub discounted_price: Option<Money<'static, Currency>>,

    /// Product image
    pub image_url: String,

    /// Category id
    pub category: String,

    /// Whether the product can currently be ordered
    pub in_stock: bool,

    /// Selling unit (e.g. `bunch`, `lb`)
    pub unit: String,

    /// Customer rating
    pub rating: Rating,

    /// Badge flags
    pub flags: ProductFlags,
}

impl Product {
    /// The price the customer pays: the discounted price when present,
    /// otherwise the shelf price.
    pub fn effective_price(&self) -> Money<'static, Currency> {
        self.discounted_price.unwrap_or(self.price)
    }

    /// Whether the customer pays less than the shelf price.
    pub fn is_discounted(&self) -> bool {
        self.discounted_price.is_some()
    }

    /// Whether this product belongs to the given category.
    pub fn in_category(&self, category_id: &str) -> bool {
        self.category == category_id
    }
}

#[cfg(test)]
mod tests {
    use rusty_money::iso::USD;

    use super::*;

    fn bananas() -> Product {
        Product {
            id: "prod-1".to_string(),
            name: "Organic Bananas".to_string(),
            description: String::new(),
            price: Money::from_minor(299, USD),
            discounted_price: Some(Money::from_minor(199, USD)),
            image_url: String::new(),
            category: "fruits".to_string(),
            in_stock: true,
            unit: "bunch".to_string(),
            rating: Rating::new(Decimal::new(48, 1)),
            flags: ProductFlags {
                on_sale: true,
                bestseller: true,
                new: false,
            },
        }
    }

    #[test]
    fn effective_price_prefers_discount() {
        let product = bananas();

        assert_eq!(product.effective_price(), Money::from_minor(199, USD));
        assert!(product.is_discounted());
    }

    #[test]
    fn effective_price_falls_back_to_shelf_price() {
        let product = Product {
            discounted_price: None,
            ..bananas()
        };

        assert_eq!(product.effective_price(), Money::from_minor(299, USD));
        assert!(!product.is_discounted());
    }

    #[test]
    fn in_category_matches_exactly() {
        let product = bananas();

        assert!(product.in_category("fruits"));
        assert!(!product.in_category("fruit"));
    }

    #[test]
    fn rating_filled_stars_floors() {
        assert_eq!(Rating::new(Decimal::new(48, 1)).filled_stars(), 4);
        assert_eq!(Rating::new(Decimal::new(50, 1)).filled_stars(), 5);
        assert_eq!(Rating::new(Decimal::ZERO).filled_stars(), 0);
    }

    #[test]
    fn rating_is_clamped() {
        assert_eq!(Rating::new(Decimal::new(72, 1)).value(), Decimal::from(5));
        assert_eq!(Rating::new(Decimal::new(-1, 0)).value(), Decimal::ZERO);
    }

    #[test]
    fn rating_displays_without_trailing_zeros() {
        assert_eq!(Rating::new(Decimal::new(480, 2)).to_string(), "4.8");
    }
}
