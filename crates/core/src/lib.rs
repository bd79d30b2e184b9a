//! `GroceryGlide`
//!
//! Domain core for the `GroceryGlide` storefront: the product catalog, the
//! in-session cart and its totals, category filtering, and the state machines
//! behind the order tracker, flash-deal countdowns and banner carousel.

pub mod banners;
pub mod cart;
pub mod catalog;
pub mod categories;
pub mod deals;
pub mod fixtures;
pub mod orders;
pub mod prelude;
pub mod products;
pub mod receipt;
pub mod session;
pub mod settings;
pub mod utils;
