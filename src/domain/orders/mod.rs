//! Orders

pub mod errors;
pub mod http;
pub mod models;
pub mod service;

pub use errors::{OrderStoreError, PlaceOrderError};
pub use service::*;
