//! Store Fixtures

use rust_decimal::Decimal;
use rusty_money::{Money, iso::Currency};
use serde::Deserialize;
use tracing::warn;

use crate::{
    banners::Banner,
    catalog::Catalog,
    categories::Category,
    deals::{DealTheme, FlashDeal},
    fixtures::{FixtureError, prices::parse_money},
    orders::{Coordinates, OrderStage, OrderStatus, PastOrder},
    products::{Product, ProductFlags, Rating},
    settings::StoreSettings,
};

/// A store set in YAML
#[derive(Debug, Deserialize)]
pub struct StoreFixture {
    /// Store settings
    pub settings: SettingsFixture,

    /// Categories in display order
    #[serde(default)]
    pub categories: Vec<CategoryFixture>,

    /// Products in display order
    #[serde(default)]
    pub products: Vec<ProductFixture>,

    /// Order shown in the tracker
    #[serde(default)]
    pub current_order: Option<CurrentOrderFixture>,

    /// Order history
    #[serde(default)]
    pub past_orders: Vec<PastOrderFixture>,

    /// Flash deal tiles
    #[serde(default)]
    pub flash_deals: Vec<FlashDealFixture>,

    /// Hero banner slides
    #[serde(default)]
    pub banners: Vec<BannerFixture>,
}

/// Settings Fixture
#[derive(Debug, Deserialize)]
pub struct SettingsFixture {
    /// Storefront name
    pub name: String,

    /// Delivery fee (e.g., "2.99 USD")
    pub delivery_fee: String,
}

/// Category Fixture
#[derive(Debug, Deserialize)]
pub struct CategoryFixture {
    /// Category id
    pub id: String,

    /// Display name
    pub name: String,

    /// Icon identifier
    pub icon: String,

    /// Image URL
    pub image_url: String,
}

/// Product Fixture
#[derive(Debug, Deserialize)]
pub struct ProductFixture {
    /// Product id
    pub id: String,

    /// Product name
    pub name: String,

    /// Description
    #[serde(default)]
    pub description: String,

    /// Shelf price (e.g., "2.99 USD")
    pub price: String,

    /// Sale price
    #[serde(default)]
    pub discounted_price: Option<String>,

    /// Image URL
    pub image_url: String,

    /// Category id
    pub category: String,

    /// Stock flag
    #[serde(default = "in_stock_default")]
    pub in_stock: bool,

    /// Selling unit
    pub unit: String,

    /// Rating, 0.0 to 5.0
    #[serde(default)]
    pub rating: Decimal,

    /// On sale badge
    #[serde(default)]
    pub on_sale: bool,

    /// Bestseller badge
    #[serde(default)]
    pub bestseller: bool,

    /// New badge
    #[serde(default)]
    pub new: bool,
}

fn in_stock_default() -> bool {
    true
}

impl TryFrom<ProductFixture> for Product {
    type Error = FixtureError;

    fn try_from(fixture: ProductFixture) -> Result<Self, Self::Error> {
        let price = parse_money(&fixture.price)?;
        let discounted_price = fixture
            .discounted_price
            .as_deref()
            .map(parse_money)
            .transpose()?;

        if let Some(discounted) = discounted_price
            && discounted.to_minor_units() > price.to_minor_units()
        {
            warn!(product = %fixture.id, "discounted price is above the shelf price");
        }

        Ok(Product {
            id: fixture.id,
            name: fixture.name,
            description: fixture.description,
            price,
            discounted_price,
            image_url: fixture.image_url,
            category: fixture.category,
            in_stock: fixture.in_stock,
            unit: fixture.unit,
            rating: Rating::new(fixture.rating),
            flags: ProductFlags {
                on_sale: fixture.on_sale,
                bestseller: fixture.bestseller,
                new: fixture.new,
            },
        })
    }
}

/// Current Order Fixture
#[derive(Debug, Deserialize)]
pub struct CurrentOrderFixture {
    /// Order id
    pub id: String,

    /// Lifecycle stage
    pub status: OrderStage,

    /// Delivery estimate
    pub estimated_delivery: String,

    /// Courier position
    #[serde(default)]
    pub current_location: Option<Coordinates>,
}

/// Past Order Fixture
#[derive(Debug, Deserialize)]
pub struct PastOrderFixture {
    /// Order id
    pub id: String,

    /// Display date
    pub date: String,

    /// Amount charged (e.g., "45.99 USD")
    pub total: String,

    /// Final stage
    pub status: OrderStage,

    /// Product ids
    #[serde(default)]
    pub items: Vec<String>,
}

/// Flash Deal Fixture
#[derive(Debug, Deserialize)]
pub struct FlashDealFixture {
    /// Deal id
    pub id: String,

    /// Headline
    pub title: String,

    /// Detail line
    pub description: String,

    /// Tile colours
    pub theme: DealTheme,

    /// Expiry text
    pub expires_in: String,
}

/// Banner Fixture
#[derive(Debug, Deserialize)]
pub struct BannerFixture {
    /// Slide id
    pub id: u32,

    /// Headline
    pub title: String,

    /// Sub-headline
    pub description: String,

    /// Call-to-action label
    pub button_text: String,

    /// Background image
    pub image_url: String,

    /// Call-to-action route
    pub link: String,
}

/// Everything the storefront renders, parsed and validated.
#[derive(Debug)]
pub struct StoreData {
    /// Store settings
    pub settings: StoreSettings,

    /// Categories and products
    pub catalog: Catalog,

    /// Order shown in the tracker
    pub current_order: Option<OrderStatus>,

    /// Order history, newest first
    pub past_orders: Vec<PastOrder>,

    /// Flash deal tiles
    pub flash_deals: Vec<FlashDeal>,

    /// Hero banner slides
    pub banners: Vec<Banner>,
}

impl StoreData {
    /// Parse a store set from YAML.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is malformed, a price cannot be parsed,
    /// ids repeat, or prices mix currencies.
    pub fn from_yaml(yaml: &str) -> Result<Self, FixtureError> {
        let fixture: StoreFixture = serde_norway::from_str(yaml)?;

        Self::try_from(fixture)
    }
}

impl TryFrom<StoreFixture> for StoreData {
    type Error = FixtureError;

    fn try_from(fixture: StoreFixture) -> Result<Self, Self::Error> {
        let delivery_fee = parse_money(&fixture.settings.delivery_fee)?;
        let currency = delivery_fee.currency();

        let mut catalog = Catalog::new(currency);

        for category in fixture.categories {
            catalog.insert_category(Category {
                id: category.id,
                name: category.name,
                icon: category.icon,
                image_url: category.image_url,
            })?;
        }

        for product in fixture.products {
            catalog.insert_product(Product::try_from(product)?)?;
        }

        let past_orders = fixture
            .past_orders
            .into_iter()
            .map(|order| past_order(order, &catalog))
            .collect::<Result<Vec<_>, _>>()?;

        let current_order = fixture.current_order.map(|order| OrderStatus {
            id: order.id,
            stage: order.status,
            estimated_delivery: order.estimated_delivery,
            current_location: order.current_location,
        });

        let flash_deals = fixture
            .flash_deals
            .into_iter()
            .map(|deal| FlashDeal {
                id: deal.id,
                title: deal.title,
                description: deal.description,
                theme: deal.theme,
                expires_in: deal.expires_in,
            })
            .collect();

        let banners = fixture
            .banners
            .into_iter()
            .map(|banner| Banner {
                id: banner.id,
                title: banner.title,
                description: banner.description,
                button_text: banner.button_text,
                image_url: banner.image_url,
                link: banner.link,
            })
            .collect();

        Ok(Self {
            settings: StoreSettings {
                name: fixture.settings.name,
                delivery_fee,
            },
            catalog,
            current_order,
            past_orders,
            flash_deals,
            banners,
        })
    }
}

fn past_order(fixture: PastOrderFixture, catalog: &Catalog) -> Result<PastOrder, FixtureError> {
    let total = parse_money(&fixture.total)?;

    ensure_currency(catalog.currency(), &total)?;

    for product_id in &fixture.items {
        if catalog.key_for(product_id).is_none() {
            warn!(order = %fixture.id, product = %product_id, "past order references an unknown product");
        }
    }

    Ok(PastOrder {
        id: fixture.id,
        date: fixture.date,
        total,
        stage: fixture.status,
        items: fixture.items,
    })
}

fn ensure_currency(
    expected: &'static Currency,
    money: &Money<'static, Currency>,
) -> Result<(), FixtureError> {
    if money.currency() == expected {
        return Ok(());
    }

    Err(FixtureError::CurrencyMismatch(
        expected.iso_alpha_code.to_string(),
        money.currency().iso_alpha_code.to_string(),
    ))
}

#[cfg(test)]
mod tests {
    use rusty_money::iso::USD;
    use testresult::TestResult;

    use super::*;

    const STORE: &str = r#"
settings:
  name: Corner Shop
  delivery_fee: "2.99 USD"
categories:
  - { id: fruits, name: Fruits, icon: Apple, image_url: "" }
products:
  - id: prod-1
    name: Bananas
    price: "2.99 USD"
    discounted_price: "1.99 USD"
    image_url: ""
    category: fruits
    unit: bunch
    rating: 4.8
    on_sale: true
current_order:
  id: order-1
  status: outForDelivery
  estimated_delivery: "Soon"
past_orders:
  - { id: order-9, date: "Today", total: "4.00 USD", status: delivered, items: [prod-1] }
flash_deals:
  - { id: deal-1, title: Deal, description: Cheap, theme: amber, expires_in: "2 hours" }
banners:
  - { id: 1, title: Hi, description: There, button_text: Go, image_url: "", link: "/deals" }
"#;

    #[test]
    fn parses_complete_store() -> TestResult {
        let store = StoreData::from_yaml(STORE)?;

        assert_eq!(store.settings.delivery_fee, Money::from_minor(299, USD));
        assert_eq!(store.catalog.len(), 1);

        let (_, bananas) = store.catalog.find("prod-1").ok_or("missing")?;

        assert_eq!(bananas.effective_price(), Money::from_minor(199, USD));
        assert!(bananas.in_stock);
        assert!(bananas.flags.on_sale);
        assert_eq!(bananas.rating.filled_stars(), 4);

        let order = store.current_order.ok_or("missing order")?;

        assert_eq!(order.stage, OrderStage::OutForDelivery);
        assert_eq!(order.current_location, None);
        assert_eq!(store.past_orders.len(), 1);
        assert_eq!(store.flash_deals.first().map(|d| d.theme), Some(DealTheme::Amber));
        assert_eq!(store.banners.first().map(|b| b.link.as_str()), Some("/deals"));

        Ok(())
    }

    #[test]
    fn mixed_currencies_are_rejected() {
        let yaml = STORE.replace("\"1.99 USD\"", "\"1.99 GBP\"");

        let result = StoreData::from_yaml(&yaml);

        assert!(matches!(result, Err(FixtureError::Catalog(_))));
    }

    #[test]
    fn past_order_currency_must_match() {
        let yaml = STORE.replace("\"4.00 USD\"", "\"4.00 EUR\"");

        let result = StoreData::from_yaml(&yaml);

        assert!(
            matches!(result, Err(FixtureError::CurrencyMismatch(expected, found)) if expected == "USD" && found == "EUR")
        );
    }

    #[test]
    fn negative_delivery_fee_is_rejected() {
        let yaml = STORE.replace("delivery_fee: \"2.99 USD\"", "delivery_fee: \"-2.99 USD\"");

        let result = StoreData::from_yaml(&yaml);

        assert!(matches!(result, Err(FixtureError::InvalidPrice(price)) if price == "-2.99 USD"));
    }

    #[test]
    fn negative_product_price_is_rejected() {
        let yaml = STORE.replace("price: \"2.99 USD\"", "price: \"-5.00 USD\"");

        let result = StoreData::from_yaml(&yaml);

        assert!(matches!(result, Err(FixtureError::InvalidPrice(price)) if price == "-5.00 USD"));
    }

    #[test]
    fn malformed_yaml_is_a_yaml_error() {
        let result = StoreData::from_yaml("settings: [");

        assert!(matches!(result, Err(FixtureError::Yaml(_))));
    }

    #[test]
    fn unknown_stage_is_rejected() {
        let yaml = STORE.replace("outForDelivery", "teleported");

        assert!(StoreData::from_yaml(&yaml).is_err());
    }
}
