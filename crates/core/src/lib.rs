//! Satchel
//!
//! Satchel is the inventory-reservation and checkout core of a small
//! storefront for after-school lessons: a catalog with live capacity, a cart
//! that reserves that capacity, a filtered/sorted catalog projection, and a
//! field-level order validator gating checkout.

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod fixtures;
pub mod lessons;
pub mod prelude;
pub mod projection;
pub mod session;
pub mod utils;
