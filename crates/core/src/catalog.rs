//! Catalog

use rustc_hash::FxHashMap;
use rusty_money::iso::Currency;
use slotmap::SlotMap;
use thiserror::Error;
use tracing::warn;

use crate::{
    categories::Category,
    products::{Product, ProductKey},
};

/// Maximum number of "you might also like" suggestions.
pub const SIMILAR_PRODUCTS_LIMIT: usize = 4;

/// Errors raised while assembling a catalog.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// Two products share the same id.
    #[error("Duplicate product id: {0}")]
    DuplicateProduct(String),

    /// Two categories share the same id.
    #[error("Duplicate category id: {0}")]
    DuplicateCategory(String),

    /// A product is priced in a different currency from the catalog.
    #[error("Product {product} is priced in {found}, but the catalog uses {expected}")]
    CurrencyMismatch {
        /// Offending product id
        product: String,
        /// Catalog currency code
        expected: &'static str,
        /// Product currency code
        found: &'static str,
    },
}

/// The static set of categories and products, in seed order.
#[derive(Debug)]
pub struct Catalog {
    products: SlotMap<ProductKey, Product>,
    order: Vec<ProductKey>,
    product_keys: FxHashMap<String, ProductKey>,
    categories: Vec<Category>,
    currency: &'static Currency,
}

impl Catalog {
    /// Create an empty catalog priced in `currency`.
    pub fn new(currency: &'static Currency) -> Self {
        Self {
            products: SlotMap::with_key(),
            order: Vec::new(),
            product_keys: FxHashMap::default(),
            categories: Vec::new(),
            currency,
        }
    }

    /// Add a category.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::DuplicateCategory`] if the id is already present.
    pub fn insert_category(&mut self, category: Category) -> Result<(), CatalogError> {
        if self.category(&category.id).is_some() {
            return Err(CatalogError::DuplicateCategory(category.id));
        }

        self.categories.push(category);

        Ok(())
    }

    /// Add a product, returning its key.
    ///
    /// # Errors
    ///
    /// Returns an error if the id is already present or the product's prices
    /// are not in the catalog currency.
    pub fn insert_product(&mut self, product: Product) -> Result<ProductKey, CatalogError> {
        if self.product_keys.contains_key(&product.id) {
            return Err(CatalogError::DuplicateProduct(product.id));
        }

        let prices = std::iter::once(product.price).chain(product.discounted_price);

        for price in prices {
            if price.currency() != self.currency {
                return Err(CatalogError::CurrencyMismatch {
                    product: product.id,
                    expected: self.currency.iso_alpha_code,
                    found: price.currency().iso_alpha_code,
                });
            }
        }

        if self.category(&product.category).is_none() {
            warn!(
                product = %product.id,
                category = %product.category,
                "product references an unknown category"
            );
        }

        let id = product.id.clone();
        let key = self.products.insert(product);

        self.order.push(key);
        self.product_keys.insert(id, key);

        Ok(key)
    }

    /// Catalog currency.
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }

    /// Lookup a product by key.
    pub fn get(&self, key: ProductKey) -> Option<&Product> {
        self.products.get(key)
    }

    /// Lookup a product key by product id.
    pub fn key_for(&self, product_id: &str) -> Option<ProductKey> {
        self.product_keys.get(product_id).copied()
    }

    /// Lookup a product by product id.
    pub fn find(&self, product_id: &str) -> Option<(ProductKey, &Product)> {
        let key = self.key_for(product_id)?;

        self.get(key).map(|product| (key, product))
    }

    /// All products in seed order.
    pub fn products(&self) -> impl Iterator<Item = (ProductKey, &Product)> + '_ {
        self.order
            .iter()
            .filter_map(|key| self.products.get(*key).map(|product| (*key, product)))
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the catalog has no products.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// All categories in seed order.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Lookup a category by id.
    pub fn category(&self, category_id: &str) -> Option<&Category> {
        self.categories
            .iter()
            .find(|category| category.id == category_id)
    }

    /// Products in `category_id`, or every product when `None`.
    pub fn filter_by_category(&self, category_id: Option<&str>) -> Vec<(ProductKey, &Product)> {
        filter_by_category(self.products(), category_id)
    }

    /// Products flagged as bestsellers.
    pub fn bestsellers(&self) -> Vec<(ProductKey, &Product)> {
        self.products()
            .filter(|(_, product)| product.flags.bestseller)
            .collect()
    }

    /// Products flagged as on sale.
    pub fn on_sale(&self) -> Vec<(ProductKey, &Product)> {
        self.products()
            .filter(|(_, product)| product.flags.on_sale)
            .collect()
    }

    /// Other products from the same category, up to [`SIMILAR_PRODUCTS_LIMIT`].
    pub fn similar_to(&self, key: ProductKey) -> Vec<(ProductKey, &Product)> {
        let Some(product) = self.get(key) else {
            return Vec::new();
        };

        self.products()
            .filter(|(other_key, other)| *other_key != key && other.category == product.category)
            .take(SIMILAR_PRODUCTS_LIMIT)
            .collect()
    }
}

/// Keep the products whose category equals `category_id`, preserving order.
/// `None` keeps everything.
pub fn filter_by_category<'a>(
    products: impl IntoIterator<Item = (ProductKey, &'a Product)>,
    category_id: Option<&str>,
) -> Vec<(ProductKey, &'a Product)> {
    products
        .into_iter()
        .filter(|(_, product)| category_id.is_none_or(|id| product.in_category(id)))
        .collect()
}

#[cfg(test)]
mod tests {
    use rusty_money::{
        Money,
        iso::{GBP, USD},
    };
    use testresult::TestResult;

    use crate::products::{ProductFlags, Rating};

    use super::*;

    fn category(id: &str) -> Category {
        Category {
            id: id.to_string(),
            name: id.to_string(),
            icon: "Apple".to_string(),
            image_url: String::new(),
        }
    }

    fn product(id: &str, category: &str, flags: ProductFlags) -> Product {
        Product {
            id: id.to_string(),
            name: id.to_string(),
            description: String::new(),
            price: Money::from_minor(100, USD),
            discounted_price: None,
            image_url: String::new(),
            category: category.to_string(),
            in_stock: true,
            unit: "each".to_string(),
            rating: Rating::default(),
            flags,
        }
    }

    fn test_catalog() -> TestResult<Catalog> {
        let mut catalog = Catalog::new(USD);

        catalog.insert_category(category("fruits"))?;
        catalog.insert_category(category("dairy"))?;

        catalog.insert_product(product(
            "apple",
            "fruits",
            ProductFlags {
                bestseller: true,
                ..ProductFlags::default()
            },
        ))?;
        catalog.insert_product(product(
            "milk",
            "dairy",
            ProductFlags {
                on_sale: true,
                ..ProductFlags::default()
            },
        ))?;
        catalog.insert_product(product("pear", "fruits", ProductFlags::default()))?;

        Ok(catalog)
    }

    fn ids(products: &[(ProductKey, &Product)]) -> Vec<String> {
        products
            .iter()
            .map(|(_, product)| product.id.clone())
            .collect()
    }

    #[test]
    fn products_keep_seed_order() -> TestResult {
        let catalog = test_catalog()?;

        let all: Vec<_> = catalog.products().collect();

        assert_eq!(ids(&all), ["apple", "milk", "pear"]);
        assert_eq!(catalog.len(), 3);

        Ok(())
    }

    #[test]
    fn filter_none_returns_everything() -> TestResult {
        let catalog = test_catalog()?;

        assert_eq!(
            ids(&catalog.filter_by_category(None)),
            ["apple", "milk", "pear"]
        );

        Ok(())
    }

    #[test]
    fn filter_keeps_matching_subsequence() -> TestResult {
        let catalog = test_catalog()?;

        assert_eq!(
            ids(&catalog.filter_by_category(Some("fruits"))),
            ["apple", "pear"]
        );
        assert!(catalog.filter_by_category(Some("seafood")).is_empty());

        Ok(())
    }

    #[test]
    fn flagged_views() -> TestResult {
        let catalog = test_catalog()?;

        assert_eq!(ids(&catalog.bestsellers()), ["apple"]);
        assert_eq!(ids(&catalog.on_sale()), ["milk"]);

        Ok(())
    }

    #[test]
    fn similar_excludes_self_and_other_categories() -> TestResult {
        let catalog = test_catalog()?;
        let apple = catalog.key_for("apple").ok_or("apple missing")?;

        assert_eq!(ids(&catalog.similar_to(apple)), ["pear"]);

        Ok(())
    }

    #[test]
    fn similar_is_capped_in_seed_order() -> TestResult {
        let mut catalog = Catalog::new(USD);

        catalog.insert_category(category("bakery"))?;

        for id in ["bagel", "bun", "croissant", "loaf", "muffin", "scone"] {
            catalog.insert_product(product(id, "bakery", ProductFlags::default()))?;
        }

        let bun = catalog.key_for("bun").ok_or("bun missing")?;
        let similar = catalog.similar_to(bun);

        assert_eq!(similar.len(), SIMILAR_PRODUCTS_LIMIT);
        assert_eq!(ids(&similar), ["bagel", "croissant", "loaf", "muffin"]);
        assert!(similar.iter().all(|(key, _)| *key != bun));

        Ok(())
    }

    #[test]
    fn find_by_id() -> TestResult {
        let catalog = test_catalog()?;

        let (_, milk) = catalog.find("milk").ok_or("milk missing")?;

        assert_eq!(milk.category, "dairy");
        assert!(catalog.find("prod-404").is_none());

        Ok(())
    }

    #[test]
    fn duplicate_product_is_rejected() -> TestResult {
        let mut catalog = test_catalog()?;

        let result = catalog.insert_product(product("apple", "fruits", ProductFlags::default()));

        assert_eq!(
            result,
            Err(CatalogError::DuplicateProduct("apple".to_string()))
        );

        Ok(())
    }

    #[test]
    fn duplicate_category_is_rejected() -> TestResult {
        let mut catalog = test_catalog()?;

        let result = catalog.insert_category(category("dairy"));

        assert_eq!(
            result,
            Err(CatalogError::DuplicateCategory("dairy".to_string()))
        );

        Ok(())
    }

    #[test]
    fn currency_mismatch_is_rejected() {
        let mut catalog = Catalog::new(USD);

        let mut pound_product = product("tea", "beverages", ProductFlags::default());
        pound_product.discounted_price = Some(Money::from_minor(90, GBP));

        let result = catalog.insert_product(pound_product);

        assert_eq!(
            result,
            Err(CatalogError::CurrencyMismatch {
                product: "tea".to_string(),
                expected: "USD",
                found: "GBP",
            })
        );
    }
}
