//! Session

use std::{num::NonZeroU32, time::Duration};

use tracing::debug;

use crate::{
    cart::{Cart, CartError},
    categories::CategorySelection,
    products::{Product, ProductKey},
};

/// Display time for short confirmations.
pub const SHORT_NOTICE: Duration = Duration::from_millis(2000);

/// Display time for everything else.
pub const LONG_NOTICE: Duration = Duration::from_millis(3000);

/// Visual weight of a notice.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NoticeKind {
    /// Neutral confirmation
    #[default]
    Info,

    /// Something the shopper needs to fix
    Destructive,
}

/// A transient toast message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// Headline
    pub title: String,

    /// Detail line
    pub description: String,

    /// Visual weight
    pub kind: NoticeKind,

    /// How long the toast stays up
    pub duration: Duration,
}

impl Notice {
    /// A short informational notice.
    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            kind: NoticeKind::Info,
            duration: SHORT_NOTICE,
        }
    }

    /// A destructive notice.
    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Destructive,
            duration: LONG_NOTICE,
            ..Self::info(title, description)
        }
    }

    /// Override the display time.
    #[must_use]
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }
}

/// One browsing visit: the cart, the home page category filter and whether
/// the cart panel is open.
#[derive(Debug, Clone, Default)]
pub struct Session {
    cart: Cart,
    categories: CategorySelection,
    cart_open: bool,
}

impl Session {
    /// Start an empty session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Cart contents
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Mutable cart, for the panel's quantity controls
    pub fn cart_mut(&mut self) -> &mut Cart {
        &mut self.cart
    }

    /// Current category filter
    pub fn categories(&self) -> &CategorySelection {
        &self.categories
    }

    /// Toggle the category filter.
    pub fn select_category(&mut self, category_id: &str) -> Option<Notice> {
        self.categories.toggle(category_id)
    }

    /// Whether the slide-over cart panel is showing.
    pub fn is_cart_open(&self) -> bool {
        self.cart_open
    }

    /// Show or hide the cart panel.
    pub fn set_cart_open(&mut self, open: bool) {
        self.cart_open = open;
    }

    /// Add one unit from a product card.
    ///
    /// # Errors
    ///
    /// Returns a [`CartError`] if the line quantity overflows.
    pub fn add_from_card(
        &mut self,
        key: ProductKey,
        product: &Product,
    ) -> Result<Notice, CartError> {
        self.cart.add_item(key)?;

        Ok(added_notice(product))
    }

    /// Add `quantity` units from the product detail page.
    ///
    /// # Errors
    ///
    /// Returns a [`CartError`] if the line quantity overflows.
    pub fn add_from_detail(
        &mut self,
        key: ProductKey,
        product: &Product,
        quantity: NonZeroU32,
    ) -> Result<Notice, CartError> {
        let already_present = self.cart.contains(key);

        self.cart.add_quantity(key, quantity)?;

        if already_present {
            return Ok(Notice::info(
                "Cart updated",
                format!("Added {quantity} more {} to your cart", product.name),
            ));
        }

        Ok(added_notice(product))
    }

    /// Checkout is not available yet.
    pub fn checkout(&self) -> Notice {
        debug!(lines = self.cart.len(), "checkout requested");

        Notice::info("Checkout", "Checkout functionality coming soon!").with_duration(LONG_NOTICE)
    }

    /// Acknowledge a coupon code. Codes never change prices.
    pub fn apply_coupon(code: &str) -> Notice {
        if code.trim().is_empty() {
            return Notice::destructive("Error", "Please enter a coupon code");
        }

        debug!(code = code.trim(), "coupon applied");

        Notice::info("Coupon Applied", "Coupon code has been applied to your order")
            .with_duration(LONG_NOTICE)
    }

    /// Acknowledge a profile save.
    pub fn save_profile() -> Notice {
        Notice::info("Success", "Your profile has been updated").with_duration(LONG_NOTICE)
    }

    /// Voice search is not available yet.
    pub fn voice_search() -> Notice {
        Notice::info("Voice Search", "Voice search is coming soon!").with_duration(LONG_NOTICE)
    }
}

fn added_notice(product: &Product) -> Notice {
    Notice::info(
        "Added to cart",
        format!("{} added to your cart", product.name),
    )
}

/// Quantity selector on the product detail page. Never drops below one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuantityPicker(NonZeroU32);

impl Default for QuantityPicker {
    fn default() -> Self {
        Self(NonZeroU32::MIN)
    }
}

impl QuantityPicker {
    /// Current quantity
    pub fn quantity(self) -> NonZeroU32 {
        self.0
    }

    /// Shift the quantity by `delta`, clamping at one.
    #[must_use]
    pub fn change(self, delta: i32) -> Self {
        let next = i64::from(self.0.get()).saturating_add(i64::from(delta));
        let next = u32::try_from(next.max(1)).unwrap_or(u32::MAX);

        Self(NonZeroU32::new(next).unwrap_or(NonZeroU32::MIN))
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use rusty_money::{Money, iso::USD};
    use slotmap::SlotMap;
    use testresult::TestResult;

    use crate::products::{ProductFlags, Rating};

    use super::*;

    fn bananas() -> (ProductKey, Product) {
        let mut keys = SlotMap::<ProductKey, ()>::with_key();

        (
            keys.insert(()),
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
                flags: ProductFlags::default(),
            },
        )
    }

    #[test]
    fn card_add_announces_product() -> TestResult {
        let (key, product) = bananas();
        let mut session = Session::new();

        let notice = session.add_from_card(key, &product)?;

        assert_eq!(notice.title, "Added to cart");
        assert_eq!(notice.description, "Organic Bananas added to your cart");
        assert_eq!(notice.duration, SHORT_NOTICE);
        assert_eq!(session.cart().item_count(), 1);

        Ok(())
    }

    #[test]
    fn detail_add_reports_update_when_present() -> TestResult {
        let (key, product) = bananas();
        let mut session = Session::new();
        let three = NonZeroU32::new(3).ok_or("zero")?;

        let first = session.add_from_detail(key, &product, three)?;
        let second = session.add_from_detail(key, &product, three)?;

        assert_eq!(first.title, "Added to cart");
        assert_eq!(second.title, "Cart updated");
        assert_eq!(
            second.description,
            "Added 3 more Organic Bananas to your cart"
        );
        assert_eq!(session.cart().item_count(), 6);

        Ok(())
    }

    #[test]
    fn blank_coupon_is_destructive() {
        let notice = Session::apply_coupon("   ");

        assert_eq!(notice.kind, NoticeKind::Destructive);
        assert_eq!(notice.description, "Please enter a coupon code");
    }

    #[test]
    fn coupon_never_changes_cart() {
        let session = Session::new();

        let notice = Session::apply_coupon("SAVE10");

        assert_eq!(notice.kind, NoticeKind::Info);
        assert_eq!(
            notice.description,
            "Coupon code has been applied to your order"
        );
        assert!(session.cart().is_empty());
    }

    #[test]
    fn mocked_actions_return_fixed_notices() {
        let session = Session::new();

        assert_eq!(
            session.checkout().description,
            "Checkout functionality coming soon!"
        );
        assert_eq!(
            Session::save_profile().description,
            "Your profile has been updated"
        );
        assert_eq!(
            Session::voice_search().description,
            "Voice search is coming soon!"
        );
    }

    #[test]
    fn category_toggle_flows_through_session() {
        let mut session = Session::new();

        assert!(session.select_category("dairy").is_some());
        assert!(session.select_category("dairy").is_none());
        assert_eq!(session.categories().selected(), None);
    }

    #[test]
    fn cart_panel_toggles() {
        let mut session = Session::new();

        session.set_cart_open(true);
        assert!(session.is_cart_open());

        session.set_cart_open(false);
        assert!(!session.is_cart_open());
    }

    #[test]
    fn quantity_picker_clamps_at_one() {
        let picker = QuantityPicker::default();

        assert_eq!(picker.quantity().get(), 1);
        assert_eq!(picker.change(-1).quantity().get(), 1);
        assert_eq!(picker.change(1).change(1).quantity().get(), 3);
        assert_eq!(picker.change(4).change(-10).quantity().get(), 1);
    }
}
