//! Store settings

use rusty_money::{Money, iso::Currency};

/// Store-wide configuration loaded with the seed data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreSettings {
    /// Storefront name
    pub name: String,

    /// Flat delivery fee charged on any non-empty order
    pub delivery_fee: Money<'static, Currency>,
}

impl StoreSettings {
    /// Currency shared by the fee and the catalog.
    pub fn currency(&self) -> &'static Currency {
        self.delivery_fee.currency()
    }
}
