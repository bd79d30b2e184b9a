//! `GroceryGlide` prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    banners::{Banner, Carousel, SlidePosition},
    cart::{
        Cart, CartError, CartItem,
        totals::{CartLine, CartTotals, TotalsError},
    },
    catalog::{Catalog, CatalogError, filter_by_category},
    categories::{Category, CategorySelection},
    deals::{Countdown, DealTheme, ExpiryHint, FlashDeal},
    fixtures::{Fixture, FixtureError, StoreData},
    orders::{OrderStage, OrderStatus, PastOrder, ProgressAnimation, StageState},
    products::{Product, ProductFlags, ProductKey, Rating},
    receipt::{CartReceipt, ReceiptError},
    session::{Notice, NoticeKind, QuantityPicker, Session},
    settings::StoreSettings,
};
