//! One module per route.

pub mod cart;
pub mod categories;
pub mod deals;
pub mod home;
pub mod not_found;
pub mod orders;
pub mod product;
pub mod profile;
