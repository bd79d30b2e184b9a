//! Cart

use std::num::NonZeroU32;

use smallvec::SmallVec;
use thiserror::Error;
use tracing::debug;

use crate::products::ProductKey;

pub mod totals;

/// Errors raised by cart mutations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CartError {
    /// The product has no entry in the cart.
    #[error("Product {0:?} is not in the cart")]
    NotInCart(ProductKey),

    /// The requested quantity does not fit in a cart line.
    #[error("Quantity overflow for product {0:?}")]
    QuantityOverflow(ProductKey),
}

/// A single cart line: one product and how many of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartItem {
    product: ProductKey,
    quantity: NonZeroU32,
}

impl CartItem {
    /// Product in this line
    pub fn product(&self) -> ProductKey {
        self.product
    }

    /// Quantity, always at least one
    pub fn quantity(&self) -> NonZeroU32 {
        self.quantity
    }
}

/// The shopper's in-session cart.
///
/// Lines are unique by product and kept in insertion order. A line whose
/// quantity would drop to zero is removed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    items: SmallVec<[CartItem; 8]>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of `product`, returning the new line quantity.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::QuantityOverflow`] if the line quantity overflows.
    pub fn add_item(&mut self, product: ProductKey) -> Result<NonZeroU32, CartError> {
        self.add_quantity(product, NonZeroU32::MIN)
    }

    /// Add `quantity` units of `product`, appending a new line when the
    /// product is not yet in the cart. Returns the new line quantity.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::QuantityOverflow`] if the line quantity overflows.
    pub fn add_quantity(
        &mut self,
        product: ProductKey,
        quantity: NonZeroU32,
    ) -> Result<NonZeroU32, CartError> {
        if let Some(item) = self.item_mut(product) {
            item.quantity = item
                .quantity
                .checked_add(quantity.get())
                .ok_or(CartError::QuantityOverflow(product))?;

            debug!(?product, quantity = item.quantity.get(), "cart line increased");

            return Ok(item.quantity);
        }

        self.items.push(CartItem { product, quantity });

        debug!(?product, quantity = quantity.get(), "cart line added");

        Ok(quantity)
    }

    /// Set the quantity of an existing line. A quantity of zero removes the
    /// line and returns `None`.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::NotInCart`] if the product has no line.
    pub fn update_quantity(
        &mut self,
        product: ProductKey,
        quantity: u32,
    ) -> Result<Option<NonZeroU32>, CartError> {
        let Some(quantity) = NonZeroU32::new(quantity) else {
            self.remove_item(product)
                .ok_or(CartError::NotInCart(product))?;

            return Ok(None);
        };

        let item = self
            .item_mut(product)
            .ok_or(CartError::NotInCart(product))?;

        item.quantity = quantity;

        debug!(?product, quantity = quantity.get(), "cart line updated");

        Ok(Some(quantity))
    }

    /// Add one unit to an existing line.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::NotInCart`] if the product has no line, or
    /// [`CartError::QuantityOverflow`] if the quantity overflows.
    pub fn increment(&mut self, product: ProductKey) -> Result<NonZeroU32, CartError> {
        if !self.contains(product) {
            return Err(CartError::NotInCart(product));
        }

        self.add_item(product)
    }

    /// Take one unit off an existing line, removing it when only one unit
    /// was left. Returns the remaining quantity.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::NotInCart`] if the product has no line.
    pub fn decrement(&mut self, product: ProductKey) -> Result<Option<NonZeroU32>, CartError> {
        let current = self
            .quantity_of(product)
            .ok_or(CartError::NotInCart(product))?;

        self.update_quantity(product, current.get() - 1)
    }

    /// Remove a line entirely, returning it if it was present.
    pub fn remove_item(&mut self, product: ProductKey) -> Option<CartItem> {
        let position = self
            .items
            .iter()
            .position(|item| item.product == product)?;

        debug!(?product, "cart line removed");

        Some(self.items.remove(position))
    }

    /// Whether `product` has a line in the cart.
    pub fn contains(&self, product: ProductKey) -> bool {
        self.quantity_of(product).is_some()
    }

    /// Quantity of `product`, if it is in the cart.
    pub fn quantity_of(&self, product: ProductKey) -> Option<NonZeroU32> {
        self.items
            .iter()
            .find(|item| item.product == product)
            .map(CartItem::quantity)
    }

    /// Total number of units across all lines.
    pub fn item_count(&self) -> u64 {
        self.items
            .iter()
            .map(|item| u64::from(item.quantity.get()))
            .sum()
    }

    /// Iterate lines in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, CartItem> {
        self.items.iter()
    }

    /// Number of distinct lines.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Remove every line.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    fn item_mut(&mut self, product: ProductKey) -> Option<&mut CartItem> {
        self.items.iter_mut().find(|item| item.product == product)
    }
}

impl<'a> IntoIterator for &'a Cart {
    type Item = &'a CartItem;
    type IntoIter = std::slice::Iter<'a, CartItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
