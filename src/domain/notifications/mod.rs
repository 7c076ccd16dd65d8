//! Notifications

pub mod errors;
pub mod http;
pub mod models;
pub mod service;

pub use errors::NotifyError;
pub use service::*;
