//! Widgets shared between routes.

pub mod cart_panel;
pub mod category_list;
pub mod flash_deals;
pub mod footer;
pub mod hero_banner;
pub mod navbar;
pub mod order_tracking;
pub mod product_card;
pub mod toasts;
