//! Carts

pub mod models;
pub mod prices;

pub use models::{Cart, CartItem};
pub use prices::Price;
