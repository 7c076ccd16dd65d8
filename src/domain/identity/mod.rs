//! Identities

pub mod models;

pub use models::Identity;
